//! Errors raised when a course cannot be added.

use thiserror::Error;

/// Reasons an add-course request is rejected.
///
/// Always recoverable: the caller re-prompts and the session carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("course name must not be empty")]
    EmptyName,
    #[error("course credits are required")]
    MissingCredits,
    #[error("course credits must be at least 1 (got {0})")]
    NonPositiveCredits(i64),
    #[error("grade point {0} is not on the grade scale")]
    UnknownGradePoint(u8),
}
