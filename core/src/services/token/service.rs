//! Main token service implementation

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::debug;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and validating JWTs
///
/// Signs with HS256 using a shared secret. Both token kinds carry the same
/// claim shape; only `kind` and the expiry differ.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds, echoed to clients in responses
    pub fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }

    /// Issues an access token for an email subject
    pub fn issue_access_token(&self, email: &str) -> Result<String, DomainError> {
        let claims = Claims::access(email, &self.config.issuer, self.config.access_token_expiry);
        self.sign(&claims)
    }

    /// Issues a refresh token for an email subject
    pub fn issue_refresh_token(&self, email: &str) -> Result<String, DomainError> {
        let claims = Claims::refresh(email, &self.config.issuer, self.config.refresh_token_expiry);
        self.sign(&claims)
    }

    /// Issues an access/refresh pair in one go
    pub fn issue_pair(&self, email: &str) -> Result<(String, String), DomainError> {
        let access = self.issue_access_token(email)?;
        let refresh = self.issue_refresh_token(email)?;
        Ok((access, refresh))
    }

    /// Validates a token's signature, issuer and expiry, returning its
    /// claims
    pub fn validate(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            debug!(event = "token_rejected", reason = %e);
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            }
        })?;
        Ok(data.claims)
    }

    /// Validates a token and additionally requires a specific kind
    ///
    /// A structurally valid token of the wrong kind yields
    /// `TokenError::InvalidTokenType`.
    pub fn validate_kind(&self, token: &str, expected: TokenKind) -> Result<Claims, DomainError> {
        let claims = self.validate(token)?;
        if claims.kind != expected {
            debug!(
                event = "token_kind_mismatch",
                expected = %expected,
                actual = %claims.kind,
            );
            return Err(TokenError::InvalidTokenType.into());
        }
        Ok(claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, DomainError> {
        let token = encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| {
                debug!(event = "token_signing_failed", reason = %e);
                TokenError::GenerationFailed
            })?;
        Ok(token)
    }
}
