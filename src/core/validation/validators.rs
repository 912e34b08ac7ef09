//! Reusable field validators
//!
//! Plugged into `#[validate(custom(function = ...))]` attributes on request
//! DTOs.

use std::borrow::Cow;
use validator::ValidationError;

/// Validator: string must contain at least one non-whitespace character
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        Err(err)
    } else {
        Ok(())
    }
}
