//! Form Validation
//!
//! Client-side checks that run before any request is built. A failure here
//! means the gateway is never called.

use super::{ClientError, ClientResult};

const MIN_NAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

/// Trimmed, validated login input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Trimmed, validated registration input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn check_email(email: &str) -> ClientResult<()> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(ClientError::validation("Please enter a valid email address"))
    }
}

pub fn validate_login(email: &str, password: &str) -> ClientResult<LoginForm> {
    let email = email.trim();
    let password = password.trim();

    if email.is_empty() || password.is_empty() {
        return Err(ClientError::validation("All fields are required"));
    }
    check_email(email)?;

    Ok(LoginForm {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> ClientResult<RegisterForm> {
    let name = name.trim();
    let email = email.trim();
    let password = password.trim();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ClientError::validation("All fields are required"));
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(ClientError::validation("Name must be at least 3 characters"));
    }
    check_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::validation(
            "Password must be at least 6 characters",
        ));
    }

    Ok(RegisterForm {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Rejects titles that are empty once trimmed.
pub fn validate_title(title: &str) -> ClientResult<()> {
    if title.trim().is_empty() {
        Err(ClientError::validation("Task title cannot be empty"))
    } else {
        Ok(())
    }
}
