//! Runs the authentication flows on top of real infrastructure pieces: the
//! in-process OTP cache with its actual TTL behavior and bcrypt hashing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::advance;

use gk_core::domain::entities::account::{Gender, Role};
use gk_core::errors::{AuthError, DomainError};
use gk_core::repositories::MockAccountRepository;
use gk_core::services::auth::{AuthService, AuthServiceConfig, RegisterRequest};
use gk_core::services::mailer::{EmailTransport, MailerService, MailerServiceConfig};
use gk_core::services::token::{TokenService, TokenServiceConfig};
use gk_infra::cache::MemoryOtpCache;
use gk_infra::hasher::BcryptPasswordHasher;

#[derive(Clone, Default)]
struct CapturingTransport {
    last_code: Arc<Mutex<Option<String>>>,
}

impl CapturingTransport {
    fn read_code(&self) -> String {
        self.last_code.lock().unwrap().clone().expect("no email received")
    }
}

#[async_trait]
impl EmailTransport for CapturingTransport {
    async fn send(&self, _to: &str, _subject: &str, body: &str) -> Result<(), String> {
        let code = body.chars().filter(|c| c.is_ascii_digit()).take(6).collect();
        *self.last_code.lock().unwrap() = Some(code);
        Ok(())
    }
}

fn build() -> (
    AuthService<MockAccountRepository, MemoryOtpCache, CapturingTransport, BcryptPasswordHasher>,
    CapturingTransport,
) {
    let transport = CapturingTransport::default();
    let service = AuthService::new(
        MockAccountRepository::new(),
        MemoryOtpCache::new(),
        MailerService::new(transport.clone(), MailerServiceConfig::default()),
        TokenService::new(TokenServiceConfig {
            jwt_secret: "infra-test-secret".to_string(),
            ..TokenServiceConfig::default()
        }),
        // Minimum cost keeps the test fast
        BcryptPasswordHasher::with_cost(4),
        AuthServiceConfig::default(),
    );
    (service, transport)
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: "unused".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        gender: Gender::Female,
        role: Role::User,
    }
}

#[tokio::test(start_paused = true)]
async fn test_code_expires_after_ttl_and_flow_recovers() {
    let (service, transport) = build();
    service.register(register_request("a@example.com")).await.unwrap();

    // Let the 60 second TTL lapse
    advance(Duration::from_secs(61)).await;

    let code = transport.read_code();
    let err = service
        .verify_registration("a@example.com", &code)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::OtpExpired)));

    // With the old code gone the resend guard no longer trips
    service.send_otp("a@example.com").await.unwrap();
    let code = transport.read_code();
    let tokens = service
        .verify_registration("a@example.com", &code)
        .await
        .unwrap();
    assert!(tokens.profile.is_verified);
}

#[tokio::test(start_paused = true)]
async fn test_resend_guard_holds_for_full_ttl() {
    let (service, _transport) = build();
    service.register(register_request("a@example.com")).await.unwrap();

    advance(Duration::from_secs(30)).await;
    let err = service.send_otp("a@example.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::TooManyRequests)));

    advance(Duration::from_secs(31)).await;
    service.send_otp("a@example.com").await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_placeholder_password_cannot_log_in() {
    let (service, transport) = build();
    service.register(register_request("a@example.com")).await.unwrap();
    let code = transport.read_code();
    service.verify_registration("a@example.com", &code).await.unwrap();

    let err = service.login("a@example.com", "unused").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}
