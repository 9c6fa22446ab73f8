//! Demonstrates wiring the full authentication stack with in-process
//! infrastructure: memory OTP cache, bcrypt hashing and a capturing email
//! transport standing in for the mail API.
//!
//! Run with: cargo run --example auth_flow_demo

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use gk_core::domain::entities::account::{Gender, Role};
use gk_core::repositories::MockAccountRepository;
use gk_core::services::auth::{AuthService, AuthServiceConfig, RegisterRequest, ResetPasswordRequest};
use gk_core::services::mailer::{EmailTransport, MailerService, MailerServiceConfig};
use gk_core::services::token::{TokenService, TokenServiceConfig};
use gk_infra::cache::MemoryOtpCache;
use gk_infra::hasher::BcryptPasswordHasher;

/// Prints each email and keeps the OTP so the demo can play the user
#[derive(Clone, Default)]
struct DemoInbox {
    last_code: Arc<Mutex<Option<String>>>,
}

impl DemoInbox {
    fn read_code(&self) -> String {
        self.last_code.lock().unwrap().clone().expect("no email yet")
    }
}

#[async_trait]
impl EmailTransport for DemoInbox {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), String> {
        println!("--- email to {to} ---\n{subject}\n{body}\n");
        let code = body.chars().filter(|c| c.is_ascii_digit()).take(6).collect();
        *self.last_code.lock().unwrap() = Some(code);
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let inbox = DemoInbox::default();
    let jwt = TokenServiceConfig::from(&gk_shared::config::JwtConfig::from_env());
    let service = AuthService::new(
        MockAccountRepository::new(),
        MemoryOtpCache::new(),
        MailerService::new(inbox.clone(), MailerServiceConfig::default()),
        TokenService::new(jwt),
        BcryptPasswordHasher::new(),
        AuthServiceConfig::default(),
    );

    let email = "demo@example.com";

    let message = service
        .register(RegisterRequest {
            email: email.to_string(),
            password: "this-is-never-stored".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            gender: Gender::Other,
            role: Role::User,
        })
        .await
        .expect("registration failed");
    println!("register: {}", message.message);

    let tokens = service
        .verify_registration(email, &inbox.read_code())
        .await
        .expect("verification failed");
    println!("verified, access token expires in {}s", tokens.expires_in);

    // The registration password was never stored; set a real one through
    // the reset flow
    service.send_otp(email).await.expect("resend failed");
    let code = inbox.read_code();
    service.verify_otp(email, &code).await.expect("otp check failed");
    service
        .reset_password(ResetPasswordRequest {
            email: email.to_string(),
            otp: code,
            new_password: "chosen-password".to_string(),
            confirm_password: "chosen-password".to_string(),
        })
        .await
        .expect("reset failed");

    let login = service.login(email, "chosen-password").await.expect("login failed");
    println!("login ok for {}", login.profile.email);

    let refreshed = service
        .refresh_access_token(&login.refresh_token)
        .await
        .expect("refresh failed");
    println!("refreshed access token expires in {}s", refreshed.expires_in);
}
