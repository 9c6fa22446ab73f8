//! Unit tests for the token service

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        issuer: "gatekey".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 2_592_000,
    })
}

/// Signs arbitrary claims with the test secret, bypassing the service
fn sign_raw(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issue_and_validate_access_token() {
    let service = service();
    let token = service.issue_access_token("user@example.com").unwrap();

    let claims = service.validate(&token).unwrap();
    assert_eq!(claims.sub, "user@example.com");
    assert_eq!(claims.iss, "gatekey");
    assert_eq!(claims.kind, TokenKind::Access);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_issue_pair_kinds_differ() {
    let service = service();
    let (access, refresh) = service.issue_pair("user@example.com").unwrap();
    assert_ne!(access, refresh);

    assert_eq!(service.validate(&access).unwrap().kind, TokenKind::Access);
    assert_eq!(service.validate(&refresh).unwrap().kind, TokenKind::Refresh);
}

#[test]
fn test_validate_kind_rejects_access_as_refresh() {
    let service = service();
    let access = service.issue_access_token("user@example.com").unwrap();

    let err = service.validate_kind(&access, TokenKind::Refresh).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidTokenType)));
}

#[test]
fn test_validate_kind_rejects_refresh_as_access() {
    let service = service();
    let refresh = service.issue_refresh_token("user@example.com").unwrap();

    let err = service.validate_kind(&refresh, TokenKind::Access).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidTokenType)));
}

#[test]
fn test_expired_token_rejected() {
    let service = service();
    let now = Utc::now();
    // Well past the validator's default 60 second leeway
    let claims = Claims {
        sub: "user@example.com".to_string(),
        iat: (now - Duration::seconds(7200)).timestamp(),
        exp: (now - Duration::seconds(3600)).timestamp(),
        iss: "gatekey".to_string(),
        jti: Uuid::new_v4().to_string(),
        kind: TokenKind::Access,
    };
    let token = sign_raw(&claims, "test-secret");

    let err = service.validate(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[test]
fn test_wrong_issuer_rejected() {
    let service = service();
    let claims = Claims::access("user@example.com", "someone-else", 3600);
    let token = sign_raw(&claims, "test-secret");

    let err = service.validate(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
}

#[test]
fn test_wrong_secret_rejected() {
    let service = service();
    let claims = Claims::access("user@example.com", "gatekey", 3600);
    let token = sign_raw(&claims, "other-secret");

    let err = service.validate(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
}

#[test]
fn test_garbage_token_rejected() {
    let service = service();
    let err = service.validate("not-a-jwt").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
}
