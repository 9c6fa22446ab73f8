//! Main authentication service implementation

use tracing::{info, warn};

use gk_shared::types::MessageResponse;
use gk_shared::utils::email::{is_valid_email, mask_email, normalize_email};

use crate::domain::entities::account::Account;
use crate::domain::entities::otp::OtpCode;
use crate::domain::entities::token::TokenKind;
use crate::domain::value_objects::{AccountProfile, AuthResponse, RefreshResponse};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::mailer::{EmailTransport, MailerService};
use crate::services::otp::OtpCache;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{generate_placeholder_password, PasswordHasher};
use super::types::{RegisterRequest, ResetPasswordRequest};

/// Orchestrates the authentication flows
///
/// The OTP is cached at generation time, before dispatch, so a failed
/// delivery still arms the resend guard for the rest of the TTL. The
/// account row itself is only written once the email actually went out,
/// so a failed delivery leaves no half-registered account.
pub struct AuthService<R, C, T, H>
where
    R: AccountRepository,
    C: OtpCache,
    T: EmailTransport,
    H: PasswordHasher,
{
    repository: R,
    cache: C,
    mailer: MailerService<T>,
    tokens: TokenService,
    hasher: H,
    config: AuthServiceConfig,
}

impl<R, C, T, H> AuthService<R, C, T, H>
where
    R: AccountRepository,
    C: OtpCache,
    T: EmailTransport,
    H: PasswordHasher,
{
    pub fn new(
        repository: R,
        cache: C,
        mailer: MailerService<T>,
        tokens: TokenService,
        hasher: H,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            repository,
            cache,
            mailer,
            tokens,
            hasher,
            config,
        }
    }

    /// Registers a new account and emails an OTP for verification
    ///
    /// Re-registering an email whose account never completed verification
    /// overwrites the profile and restarts the flow; a verified email is
    /// rejected. The submitted password is intentionally ignored (see
    /// [`RegisterRequest`]); a random placeholder hash is stored instead.
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<MessageResponse> {
        let email = normalize_email(&request.email);
        if !is_valid_email(&email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        let first_name = request.first_name.trim().to_string();
        let last_name = request.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(DomainError::Validation {
                message: "First and last name must not be empty".to_string(),
            });
        }

        let existing = self.repository.find_by_email(&email).await?;
        if let Some(account) = &existing {
            if account.is_verified {
                warn!(event = "registration_duplicate", email = %mask_email(&email));
                return Err(AuthError::AlreadyExists.into());
            }
        }

        let otp = OtpCode::generate(email.clone(), self.config.otp_ttl.as_secs());
        self.cache
            .put(&email, &otp.code, self.config.otp_ttl)
            .await
            .map_err(internal)?;
        self.mailer.send_otp(&email, &otp.code).await?;

        let placeholder = self
            .hasher
            .hash(&generate_placeholder_password())
            .map_err(internal)?;

        match existing {
            Some(mut account) => {
                account.overwrite_profile(
                    first_name,
                    last_name,
                    placeholder,
                    request.gender,
                    request.role,
                );
                self.repository.update(account).await?;
            }
            None => {
                let account = Account::new(
                    email.clone(),
                    first_name,
                    last_name,
                    placeholder,
                    request.gender,
                    request.role,
                );
                self.repository.create(account).await?;
            }
        }

        info!(event = "registration_otp_sent", email = %mask_email(&email));
        Ok(MessageResponse::new(format!(
            "Otp has been sent to {email}, kindly verify to complete registration"
        )))
    }

    /// Verifies a registration OTP and activates the account
    ///
    /// On success the OTP is evicted and a token pair is issued, so the
    /// same code cannot complete verification twice.
    pub async fn verify_registration(&self, email: &str, code: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);
        let mut account = self.require_account(&email).await?;

        self.check_otp(&email, code).await?;

        account.verify();
        let account = self.repository.update(account).await?;
        self.cache.evict(&email).await.map_err(internal)?;

        info!(event = "registration_verified", email = %mask_email(&email));
        self.auth_response(&account)
    }

    /// Authenticates an email/password pair
    ///
    /// Credentials are checked before verification status, so an unverified
    /// account only learns it is unverified once it presents the right
    /// password.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let email = normalize_email(email);
        let account = self.require_account(&email).await?;

        let matches = self
            .hasher
            .verify(password, &account.password_hash)
            .map_err(internal)?;
        if !matches {
            warn!(event = "login_rejected", email = %mask_email(&email));
            return Err(AuthError::InvalidCredentials.into());
        }
        if !account.is_verified {
            return Err(AuthError::NotVerified.into());
        }

        info!(event = "login_succeeded", email = %mask_email(&email));
        self.auth_response(&account)
    }

    /// Sends a fresh OTP for registration verification or password reset
    ///
    /// While a previous code is still live the request is refused, which
    /// caps OTP generation at one per TTL window per account. The code is
    /// cached before dispatch, so the guard also holds after a delivery
    /// failure until the TTL lapses.
    pub async fn send_otp(&self, email: &str) -> DomainResult<MessageResponse> {
        let email = normalize_email(email);
        self.require_account(&email).await?;

        if self.cache.exists(&email).await.map_err(internal)? {
            warn!(event = "otp_rate_limited", email = %mask_email(&email));
            return Err(AuthError::TooManyRequests.into());
        }

        let otp = OtpCode::generate(email.clone(), self.config.otp_ttl.as_secs());
        self.cache
            .put(&email, &otp.code, self.config.otp_ttl)
            .await
            .map_err(internal)?;
        self.mailer.send_otp(&email, &otp.code).await?;

        info!(event = "otp_sent", email = %mask_email(&email));
        Ok(MessageResponse::new(format!(
            "Otp has been sent to {email}"
        )))
    }

    /// Checks an OTP without consuming it
    ///
    /// Used as the first step of the password-reset flow; the code stays
    /// cached so the subsequent [`reset_password`](Self::reset_password)
    /// call can present it again.
    pub async fn verify_otp(&self, email: &str, code: &str) -> DomainResult<MessageResponse> {
        let email = normalize_email(email);
        self.require_account(&email).await?;
        self.check_otp(&email, code).await?;

        Ok(MessageResponse::new("Otp verified successfully"))
    }

    /// Resets the password of a verified account holding a live OTP
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> DomainResult<MessageResponse> {
        let email = normalize_email(&request.email);
        let mut account = self.require_account(&email).await?;

        if !account.is_verified {
            return Err(AuthError::NotVerified.into());
        }

        // An absent code reads the same as a wrong one here; the client is
        // expected to have just passed verify_otp
        let stored = self.cache.get(&email).await.map_err(internal)?;
        match stored {
            Some(stored) if OtpCode::matches(&stored, &request.otp) => {}
            _ => return Err(AuthError::OtpMismatch.into()),
        }

        if request.new_password != request.confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }

        let hash = self.hasher.hash(&request.new_password).map_err(internal)?;
        account.set_password(hash);
        self.repository.update(account).await?;
        self.cache.evict(&email).await.map_err(internal)?;

        info!(event = "password_reset", email = %mask_email(&email));
        Ok(MessageResponse::new(
            "Password has been reset successfully, kindly login",
        ))
    }

    /// Returns the profile of the account an access token belongs to
    pub async fn profile(&self, access_token: &str) -> DomainResult<AccountProfile> {
        let claims = self.tokens.validate_kind(access_token, TokenKind::Access)?;
        let account = self.require_account(&claims.sub).await?;
        Ok(AccountProfile::from(&account))
    }

    /// Exchanges a refresh token for a fresh access token
    ///
    /// The account is looked up again so the returned profile and the new
    /// access token reflect the account's current state, not the state at
    /// refresh-token issue time.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> DomainResult<RefreshResponse> {
        let claims = self
            .tokens
            .validate_kind(refresh_token, TokenKind::Refresh)?;
        let account = self.require_account(&claims.sub).await?;

        let access_token = self.tokens.issue_access_token(&account.email)?;
        info!(event = "access_token_refreshed", email = %mask_email(&account.email));
        Ok(RefreshResponse {
            access_token,
            expires_in: self.tokens.access_token_expiry(),
            profile: AccountProfile::from(&account),
        })
    }

    async fn require_account(&self, email: &str) -> DomainResult<Account> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::NotFound.into())
    }

    /// OTP check shared by verification flows: absent means expired,
    /// present-but-different means mismatch
    async fn check_otp(&self, email: &str, code: &str) -> DomainResult<()> {
        let stored = self.cache.get(email).await.map_err(internal)?;
        match stored {
            None => {
                warn!(event = "otp_expired", email = %mask_email(email));
                Err(AuthError::OtpExpired.into())
            }
            Some(stored) if !OtpCode::matches(&stored, code) => {
                warn!(event = "otp_mismatch", email = %mask_email(email));
                Err(AuthError::OtpMismatch.into())
            }
            Some(_) => Ok(()),
        }
    }

    fn auth_response(&self, account: &Account) -> DomainResult<AuthResponse> {
        let (access_token, refresh_token) = self.tokens.issue_pair(&account.email)?;
        Ok(AuthResponse {
            access_token,
            refresh_token,
            expires_in: self.tokens.access_token_expiry(),
            profile: AccountProfile::from(account),
        })
    }
}

/// Maps an infrastructure error string into an opaque internal error
fn internal(message: String) -> DomainError {
    DomainError::Internal { message }
}
