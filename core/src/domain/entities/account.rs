//! Account entity representing a registered user in the NoteVault system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account.
///
/// Accounts are created exactly once at successful signup and are
/// immutable afterwards. The email is stored case-normalized and is
/// unique across the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address (case-normalized, unique)
    pub email: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account.
    ///
    /// The caller is responsible for passing a trimmed name and a
    /// case-normalized email; this constructor does not re-normalize.
    pub fn new(name: String, email: String, date_of_birth: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            date_of_birth,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let dob = NaiveDate::from_ymd_opt(1990, 4, 12).unwrap();
        let account = Account::new("Alice".to_string(), "alice@example.com".to_string(), dob);

        assert_eq!(account.name, "Alice");
        assert_eq!(account.email, "alice@example.com");
        assert_eq!(account.date_of_birth, dob);
        assert!(!account.id.is_nil());
    }

    #[test]
    fn test_account_ids_are_unique() {
        let dob = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let a = Account::new("A".to_string(), "a@x.com".to_string(), dob);
        let b = Account::new("B".to_string(), "b@x.com".to_string(), dob);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialization_round_trip() {
        let dob = NaiveDate::from_ymd_opt(2000, 12, 31).unwrap();
        let account = Account::new("Bob".to_string(), "bob@x.com".to_string(), dob);

        let json = serde_json::to_string(&account).unwrap();
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account, deserialized);
    }
}
