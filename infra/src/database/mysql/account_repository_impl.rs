//! MySQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use nv_core::domain::entities::account::Account;
use nv_core::errors::{AuthError, DomainError};
use nv_core::repositories::AccountRepository;
use nv_shared::utils::mask_email;

use super::is_unique_violation;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Account entity
    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?;

        Ok(Account {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID in accounts.id: {}", e),
            })?,
            name: row.try_get("name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            date_of_birth: row.try_get::<NaiveDate, _>("date_of_birth").map_err(|e| {
                DomainError::Internal {
                    message: format!("Failed to get date_of_birth: {}", e),
                }
            })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_err(|e| {
                DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                }
            })?,
        })
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, name, email, date_of_birth, created_at
            FROM accounts
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let query = r#"
            SELECT id, name, email, date_of_birth, created_at
            FROM accounts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (id, name, email, date_of_birth, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.name)
            .bind(&account.email)
            .bind(account.date_of_birth)
            .bind(account.created_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(account),
            // The unique index on email decides check-then-insert
            // races; the loser gets the same conflict as a plain
            // duplicate signup
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!(
                    email = %mask_email(&account.email),
                    event = "duplicate_email",
                    "Insert lost the uniqueness race"
                );
                Err(DomainError::Auth(AuthError::AccountExists))
            }
            Err(e) => Err(DomainError::Internal {
                message: format!("Failed to create account: {}", e),
            }),
        }
    }
}
