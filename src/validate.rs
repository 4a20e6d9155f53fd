use std::sync::LazyLock;

use regex::Regex;

use crate::error::AppError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Syntactic email check. Intentionally loose: the store's uniqueness
/// constraint is what actually guards the users table.
pub fn email(value: &str) -> Result<(), AppError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Please enter a valid email address.".to_string(),
        ))
    }
}

pub fn min_len(value: &str, min: usize, message: &str) -> Result<(), AppError> {
    if value.chars().count() >= min {
        Ok(())
    } else {
        Err(AppError::BadRequest(message.to_string()))
    }
}

pub fn non_empty(value: &str, message: &str) -> Result<(), AppError> {
    if value.is_empty() {
        Err(AppError::BadRequest(message.to_string()))
    } else {
        Ok(())
    }
}

pub fn one_of(value: &str, allowed: &[&str], field: &str) -> Result<(), AppError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} must be one of: {}",
            allowed.join(", ")
        )))
    }
}

pub fn percentage(value: i32, field: &str) -> Result<(), AppError> {
    if (0..=100).contains(&value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} must be between 0 and 100"
        )))
    }
}

pub fn non_negative(value: f64, field: &str) -> Result<(), AppError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "{field} must be a non-negative number"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(email("jo@x.com").is_ok());
        assert!(email("a.b+c@example.co.uk").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "jo", "jo@", "@x.com", "jo@x", "jo x@x.com"] {
            assert!(email(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn min_len_counts_chars_not_bytes() {
        assert!(min_len("éé", 2, "too short").is_ok());
        assert!(min_len("é", 2, "too short").is_err());
    }

    #[test]
    fn percentage_bounds() {
        assert!(percentage(0, "progress").is_ok());
        assert!(percentage(100, "progress").is_ok());
        assert!(percentage(101, "progress").is_err());
        assert!(percentage(-1, "progress").is_err());
    }
}
