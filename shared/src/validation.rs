//! Validation utilities for household inventory input

use validator::ValidationError;

/// Validate the shared household password
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Validate that a logged quantity (purchase or usage) is strictly positive
pub fn validate_positive_quantity(quantity: f64) -> Result<(), &'static str> {
    if !quantity.is_finite() {
        return Err("Quantity must be a number");
    }
    if quantity <= 0.0 {
        return Err("Quantity must be greater than zero");
    }
    Ok(())
}

/// Validate a stock level or rate that may be zero but not negative
pub fn validate_non_negative(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Value must be a number");
    }
    if value < 0.0 {
        return Err("Value cannot be negative");
    }
    Ok(())
}

/// Validate that a name contains something other than whitespace
pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty");
    }
    if name.trim().chars().count() > 100 {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

/// `validator` adapter for [`validate_name`]
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    validate_name(value).map_err(|message| {
        let mut error = ValidationError::new("not_blank");
        error.message = Some(message.into());
        error
    })
}

/// Check that uploaded bytes start with the SQLite 3 file header
pub fn is_sqlite_file(bytes: &[u8]) -> bool {
    const HEADER: &[u8; 16] = b"SQLite format 3\0";
    bytes.len() >= 100 && bytes.starts_with(HEADER)
}
