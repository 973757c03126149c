//! Input validation utilities

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Named set of validation rules applied to user records
///
/// Each profile is one consistent configuration covering the full-name
/// pattern, the password policy and the field-presence rule of edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationProfile {
    /// Letters and whitespace in names, 8+ character passwords, partial edits
    #[default]
    Strict,
    /// Any non-empty name, 6+ character passwords, edits must carry both fields
    Lenient,
}

impl ValidationProfile {
    /// Minimum accepted password length in characters
    pub fn min_password_length(self) -> usize {
        match self {
            ValidationProfile::Strict => 8,
            ValidationProfile::Lenient => 6,
        }
    }

    /// Whether an edit may change a single field on its own
    pub fn allows_partial_update(self) -> bool {
        matches!(self, ValidationProfile::Strict)
    }
}

const MAX_FULL_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate full name
pub fn validate_full_name(full_name: &str, profile: ValidationProfile) -> Result<(), String> {
    if full_name.trim().is_empty() {
        return Err("Full name is required".to_string());
    }

    if full_name.chars().count() > MAX_FULL_NAME_LENGTH {
        return Err(format!(
            "Full name must be at most {} characters long",
            MAX_FULL_NAME_LENGTH
        ));
    }

    if profile == ValidationProfile::Strict {
        static FULL_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = FULL_NAME_REGEX.get_or_init(|| {
            Regex::new(r"^[\p{L}\s]+$").expect("Failed to compile full name regex")
        });

        if !regex.is_match(full_name) {
            return Err("Full name can only contain letters and spaces".to_string());
        }
    }

    Ok(())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email must be at most {} characters long",
            MAX_EMAIL_LENGTH
        ));
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }

    Ok(())
}

/// Validate password
pub fn validate_password(password: &str, profile: ValidationProfile) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    let length = password.chars().count();
    let min_length = profile.min_password_length();

    if length < min_length {
        return Err(format!(
            "Password must be at least {} characters long",
            min_length
        ));
    }

    if length > MAX_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at most {} characters long",
            MAX_PASSWORD_LENGTH
        ));
    }

    // An uppercase letter also covers the alphabetic class the strict profile asks for.
    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;

    for c in password.chars() {
        if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_digit() {
            has_digit = true;
        }
    }

    if !has_upper {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if !has_lower {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if !has_digit {
        return Err("Password must contain at least one digit".to_string());
    }

    Ok(())
}
