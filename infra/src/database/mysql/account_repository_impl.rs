//! MySQL implementation of the AccountRepository trait.
//!
//! UUIDs are stored as CHAR(36), enums as their uppercase wire names. The
//! unique index on `email` is the authority on duplicates; `create` maps a
//! unique violation to `AuthError::AlreadyExists` instead of pre-checking.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gk_core::domain::entities::account::{Account, Gender, Role};
use gk_core::errors::{AuthError, DomainError};
use gk_core::repositories::AccountRepository;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str = "id, email, first_name, last_name, password_hash, gender, role, \
     is_verified, is_active, password_updated, created_at, updated_at";

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &sqlx::mysql::MySqlRow) -> Result<Account, DomainError> {
        let id: String = Self::column(row, "id")?;
        let gender: String = Self::column(row, "gender")?;
        let role: String = Self::column(row, "role")?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            email: Self::column(row, "email")?,
            first_name: Self::column(row, "first_name")?,
            last_name: Self::column(row, "last_name")?,
            password_hash: Self::column(row, "password_hash")?,
            gender: parse_gender(&gender)?,
            role: parse_role(&role)?,
            is_verified: Self::column(row, "is_verified")?,
            is_active: Self::column(row, "is_active")?,
            password_updated: Self::column(row, "password_updated")?,
            created_at: Self::column::<DateTime<Utc>>(row, "created_at")?,
            updated_at: Self::column::<DateTime<Utc>>(row, "updated_at")?,
        })
    }

    fn column<'r, T>(row: &'r sqlx::mysql::MySqlRow, name: &str) -> Result<T, DomainError>
    where
        T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
    {
        row.try_get(name)
            .map_err(|e| DomainError::Database(format!("Failed to get {}: {}", name, e)))
    }
}

fn parse_gender(value: &str) -> Result<Gender, DomainError> {
    match value {
        "MALE" => Ok(Gender::Male),
        "FEMALE" => Ok(Gender::Female),
        "OTHER" => Ok(Gender::Other),
        other => Err(DomainError::Database(format!("Unknown gender: {}", other))),
    }
}

fn parse_role(value: &str) -> Result<Role, DomainError> {
    match value {
        "USER" => Ok(Role::User),
        "ADMIN" => Ok(Role::Admin),
        other => Err(DomainError::Database(format!("Unknown role: {}", other))),
    }
}

fn gender_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "MALE",
        Gender::Female => "FEMALE",
        Gender::Other => "OTHER",
    }
}

fn role_str(role: Role) -> &'static str {
    match role {
        Role::User => "USER",
        Role::Admin => "ADMIN",
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE email = ? LIMIT 1"
        );

        let row = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Query failed: {}", e)))?;

        row.map(|r| Self::row_to_account(&r)).transpose()
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts
                (id, email, first_name, last_name, password_hash, gender, role,
                 is_verified, is_active, password_updated, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.password_hash)
            .bind(gender_str(account.gender))
            .bind(role_str(account.role))
            .bind(account.is_verified)
            .bind(account.is_active)
            .bind(account.password_updated)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false)
                {
                    AuthError::AlreadyExists.into()
                } else {
                    DomainError::Database(format!("Insert failed: {}", e))
                }
            })?;

        Ok(account)
    }

    async fn update(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            UPDATE accounts
            SET email = ?, first_name = ?, last_name = ?, password_hash = ?,
                gender = ?, role = ?, is_verified = ?, is_active = ?,
                password_updated = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&account.email)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.password_hash)
            .bind(gender_str(account.gender))
            .bind(role_str(account.role))
            .bind(account.is_verified)
            .bind(account.is_active)
            .bind(account.password_updated)
            .bind(account.updated_at)
            .bind(account.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Update failed: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AuthError::NotFound.into());
        }

        Ok(account)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = ?)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::Database(format!("Query failed: {}", e)))?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_mapping_round_trips() {
        for gender in [Gender::Male, Gender::Female, Gender::Other] {
            assert_eq!(parse_gender(gender_str(gender)).unwrap(), gender);
        }
        for role in [Role::User, Role::Admin] {
            assert_eq!(parse_role(role_str(role)).unwrap(), role);
        }
    }

    #[test]
    fn test_unknown_enum_values_rejected() {
        assert!(parse_gender("UNKNOWN").is_err());
        assert!(parse_role("SUPERUSER").is_err());
    }
}
