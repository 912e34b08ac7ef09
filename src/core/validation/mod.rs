//! Request shape validation
//!
//! Request DTOs derive [`validator::Validate`]; the [`ValidatedJson`]
//! extractor runs that validation before a handler sees the payload, so the
//! core only ever receives well-formed input.

pub mod extractor;
pub mod validators;

pub use extractor::ValidatedJson;
pub use validators::not_blank;
