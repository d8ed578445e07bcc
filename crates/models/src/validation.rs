//! Field constraint checks shared by the resource kinds.
//!
//! Lengths are counted in characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ModelError;

// Letters, digits and marks of any script are allowed in both parts.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}\p{M}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}\p{M}!#$%&'*+/=?^_`{|}~-]+)*@[\p{L}\p{N}](?:[\p{L}\p{N}\p{M}-]{0,61}[\p{L}\p{N}\p{M}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}\p{M}-]{0,61}[\p{L}\p{N}\p{M}])?)+$",
    )
    .expect("email pattern compiles")
});

/// At most `max` characters.
pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::invalid(field, format!("ensure this value has at most {max} characters")));
    }
    Ok(())
}

/// Between `min` and `max` characters, inclusive.
pub fn char_range(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), ModelError> {
    if value.chars().count() < min {
        return Err(ModelError::invalid(field, format!("ensure this value has at least {min} characters")));
    }
    max_chars(field, value, max)
}

/// Syntactically valid address of at most `max` characters.
pub fn email(field: &'static str, value: &str, max: usize) -> Result<(), ModelError> {
    max_chars(field, value, max)?;
    if !EMAIL_RE.is_match(value) {
        return Err(ModelError::invalid(field, "value is not a valid email address"));
    }
    Ok(())
}
