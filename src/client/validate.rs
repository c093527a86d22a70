//! Pure credential validation, decoupled from any UI binding.
//!
//! Runs synchronously before a submission is allowed to proceed; a failed
//! check never reaches the network.

use crate::client::Credentials;
use regex::Regex;
use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// All field-level failures for one submission, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message).collect();
        write!(formatter, "{}", messages.join("; "))
    }
}

/// Check the shape of candidate credentials.
///
/// The first failing rule per field wins: a missing email reports
/// "Email is required", never "Please enter a valid email" as well.
///
/// # Errors
/// Returns the collected [`FieldErrors`] when any rule fails.
pub fn check(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = Vec::new();

    if credentials.email.is_empty() {
        errors.push(FieldError {
            field: Field::Email,
            message: EMAIL_REQUIRED,
        });
    } else if !valid_email(&credentials.email) {
        errors.push(FieldError {
            field: Field::Email,
            message: EMAIL_INVALID,
        });
    }

    if credentials.password().is_empty() {
        errors.push(FieldError {
            field: Field::Password,
            message: PASSWORD_REQUIRED,
        });
    } else if credentials.password().len() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError {
            field: Field::Password,
            message: PASSWORD_TOO_SHORT,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(errors))
    }
}

fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}
