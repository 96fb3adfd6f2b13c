use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which store backs the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-local store; state is lost on restart
    Memory,
    /// Postgres via SeaORM
    Postgres,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "postgres" => Ok(StoreKind::Postgres),
            other => Err(AppError::config(format!(
                "JANKEN_STORE must be 'memory' or 'postgres', got '{other}'"
            ))),
        }
    }
}

/// Store backend from `JANKEN_STORE` (defaults to postgres)
pub fn store_kind() -> Result<StoreKind, AppError> {
    match env::var("JANKEN_STORE") {
        Ok(v) => v.parse(),
        Err(_) => Ok(StoreKind::Postgres),
    }
}

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Builds a database URL from environment variables based on profile.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from the
/// `POSTGRES_*` and `JANKEN_DB*` variables.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let host = host()?;
    let port = port()?;
    let db_name = db_name(profile)?;
    let username = must_var("JANKEN_DB_USER")?;
    let password = must_var("JANKEN_DB_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Get database host from environment (defaults to localhost)
fn host() -> Result<String, AppError> {
    Ok(env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string()))
}

/// Get database port from environment (defaults to 5432)
fn port() -> Result<String, AppError> {
    Ok(env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string()))
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("JANKEN_DB"),
        DbProfile::Test => {
            let db_name = must_var("JANKEN_TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
