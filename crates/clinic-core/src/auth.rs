//! Doctor login.

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{ClinicConfig, Credentials};
use crate::notice::Notice;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// A logged-in session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub doctor_name: String,
}

impl Session {
    /// The greeting shown after login.
    pub fn welcome(&self) -> Notice {
        Notice::success(
            "Welcome Back!",
            format!("Logged in as {}", self.doctor_name),
        )
    }
}

/// Check a username and password against the configured credentials.
///
/// No lockout or retry limit.
pub fn authenticate(config: &ClinicConfig, username: &str, password: &str) -> Result<Session, AuthError> {
    if !matches(&config.login, username, password) {
        warn!(username, "login failed");
        return Err(AuthError::InvalidCredentials);
    }
    info!(username, "logged in");
    Ok(Session {
        username: username.to_string(),
        doctor_name: config.letterhead.doctor_name.clone(),
    })
}

fn matches(credentials: &Credentials, username: &str, password: &str) -> bool {
    username == credentials.username
        && password_digest(password).eq_ignore_ascii_case(&credentials.password_sha256)
}

/// Lowercase hex SHA-256 of a password.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
