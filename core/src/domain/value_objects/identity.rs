//! Resolved identity of an authenticated request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::Account;

/// The read-only, authenticated representation of a user.
///
/// Produced by the session authenticator after signature, expiry, and
/// account resolution all succeed; downstream collaborators receive
/// only this view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account ID
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl From<&Account> for Identity {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
        }
    }
}

impl From<Account> for Identity {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}
