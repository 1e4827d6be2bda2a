//! Authentication outcome value object.

use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// The result of a successful signup or signin: a freshly minted
/// session token plus the identity it asserts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Signed session token
    pub token: String,

    /// Identity embedded in the token
    pub identity: Identity,
}

impl AuthOutcome {
    /// Creates a new authentication outcome
    pub fn new(token: String, identity: Identity) -> Self {
        Self { token, identity }
    }
}
