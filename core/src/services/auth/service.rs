//! Main authentication service implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use nv_shared::utils::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::account::Account;
use crate::domain::entities::one_time_code::CODE_LENGTH;
use crate::domain::value_objects::{AuthOutcome, Identity};
use crate::errors::{AuthError, DomainResult, TokenError, ValidationError};
use crate::repositories::AccountRepository;
use crate::services::token::TokenService;
use crate::services::verification::{EmailServiceTrait, OtpService, OtpStoreTrait};

/// Well-formed signup request, validated field-by-field before any
/// state is touched.
#[derive(Debug, Clone)]
pub struct SignUpData {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub otp: String,
}

/// Authentication service managing the complete OTP authentication flow
pub struct AuthService<A, E, S>
where
    A: AccountRepository,
    E: EmailServiceTrait,
    S: OtpStoreTrait,
{
    /// Account repository for persistence operations
    account_repository: Arc<A>,
    /// Verification service for OTP handling
    otp_service: Arc<OtpService<E, S>>,
    /// Token service for session token management
    token_service: Arc<TokenService>,
}

impl<A, E, S> AuthService<A, E, S>
where
    A: AccountRepository,
    E: EmailServiceTrait,
    S: OtpStoreTrait,
{
    /// Create a new authentication service
    pub fn new(
        account_repository: Arc<A>,
        otp_service: Arc<OtpService<E, S>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            account_repository,
            otp_service,
            token_service,
        }
    }

    /// Request a one-time passcode for an email address.
    ///
    /// Works for both signup and signin: the code is bound to the
    /// email only, and a newer request replaces any pending code.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Provider message ID of the delivery
    /// * `Err(DomainError)` - Validation, storage, or delivery failure
    pub async fn request_otp(&self, email: &str) -> DomainResult<String> {
        // Step 1: Validate before any state is touched
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        let email = normalize_email(email);

        // Step 2: Generate, store, and deliver
        self.otp_service.request_code(&email).await
    }

    /// Sign up a new account with OTP verification.
    ///
    /// Ordering is deliberate: the OTP is verified first, but only
    /// consumed after the account has been created and a token minted.
    /// A failed existence check leaves the pending code valid so the
    /// user can retry with the same code.
    pub async fn sign_up(&self, data: SignUpData) -> DomainResult<AuthOutcome> {
        // Step 1: Field validation, no state touched
        let name = data.name.trim().to_string();
        if name.chars().count() < 2 {
            return Err(ValidationError::NameTooShort.into());
        }
        if !is_valid_email(&data.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        Self::validate_otp_format(&data.otp)?;
        let email = normalize_email(&data.email);

        // Step 2: Verify the pending code (not consumed yet)
        if !self.otp_service.verify_code(&email, &data.otp).await? {
            return Err(AuthError::InvalidOrExpiredOtp.into());
        }

        // Step 3: Reject an already-registered email. The OTP stays
        // pending on this path.
        if self
            .account_repository
            .find_by_email(&email)
            .await?
            .is_some()
        {
            tracing::warn!(
                email = %mask_email(&email),
                event = "signup_conflict",
                "Signup rejected: email already registered"
            );
            return Err(AuthError::AccountExists.into());
        }

        // Step 4: Insert. Two concurrent signups can both pass the
        // check above; the repository's unique index decides the race
        // and the loser surfaces the same conflict error.
        let account = self
            .account_repository
            .insert(Account::new(name, email.clone(), data.date_of_birth))
            .await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&email),
            event = "account_created",
            "New account registered"
        );

        // Step 5: Mint the session token, then consume the code
        let token = self.token_service.issue(account.id)?;
        self.consume_otp(&email).await;

        Ok(AuthOutcome::new(token, Identity::from(account)))
    }

    /// Sign in to an existing account with OTP verification.
    pub async fn sign_in(&self, email: &str, otp: &str) -> DomainResult<AuthOutcome> {
        // Step 1: Field validation, no state touched
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        Self::validate_otp_format(otp)?;
        let email = normalize_email(email);

        // Step 2: Verify the pending code (not consumed yet)
        if !self.otp_service.verify_code(&email, otp).await? {
            return Err(AuthError::InvalidOrExpiredOtp.into());
        }

        // Step 3: The account must exist. The OTP stays pending on
        // this path so the user can sign up with the same code.
        let account = match self.account_repository.find_by_email(&email).await? {
            Some(account) => account,
            None => {
                tracing::warn!(
                    email = %mask_email(&email),
                    event = "signin_unknown_account",
                    "Signin rejected: no account for email"
                );
                return Err(AuthError::NoSuchAccount.into());
            }
        };

        // Step 4: Mint the session token, then consume the code
        let token = self.token_service.issue(account.id)?;
        self.consume_otp(&email).await;

        tracing::info!(
            account_id = %account.id,
            event = "signin_success",
            "Account signed in"
        );

        Ok(AuthOutcome::new(token, Identity::from(account)))
    }

    /// Validate an inbound session token and resolve it to an identity.
    ///
    /// Runs on every protected request. A token whose account no
    /// longer exists is as invalid as a tampered one.
    pub async fn authenticate(&self, token: &str) -> DomainResult<Identity> {
        let claims = self.token_service.verify(token)?;
        let account_id = claims
            .account_id()
            .map_err(|_| TokenError::InvalidTokenFormat)?;

        match self.account_repository.find_by_id(account_id).await? {
            Some(account) => Ok(Identity::from(account)),
            None => {
                tracing::warn!(
                    account_id = %account_id,
                    event = "token_orphaned",
                    "Valid token for a missing account"
                );
                Err(TokenError::AccountGone.into())
            }
        }
    }

    /// Consume a verified code. Failure to clear is logged but does
    /// not fail the flow: the entry expires on its own and a resend
    /// replaces it.
    async fn consume_otp(&self, email: &str) {
        if let Err(e) = self.otp_service.clear(email).await {
            tracing::warn!(
                email = %mask_email(email),
                error = %e,
                event = "otp_clear_failed",
                "Failed to consume one-time passcode"
            );
        }
    }

    fn validate_otp_format(otp: &str) -> Result<(), ValidationError> {
        if otp.len() != CODE_LENGTH || !otp.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidOtpFormat);
        }
        Ok(())
    }
}

/// Object-safe view of the session authenticator, for layers that
/// cannot carry the service's generic parameters (e.g. HTTP
/// middleware holding it as application data).
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    /// Validate an inbound token and resolve it to an identity.
    async fn authenticate(&self, token: &str) -> DomainResult<Identity>;
}

#[async_trait]
impl<A, E, S> SessionAuthenticator for AuthService<A, E, S>
where
    A: AccountRepository,
    E: EmailServiceTrait,
    S: OtpStoreTrait,
{
    async fn authenticate(&self, token: &str) -> DomainResult<Identity> {
        AuthService::authenticate(self, token).await
    }
}
