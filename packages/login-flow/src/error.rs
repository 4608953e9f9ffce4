//! Sign-in errors
//!
//! Every variant that reaches the view collapses into the single invalid
//! flag on [`LoginState`](crate::LoginState); the variants exist so callers
//! can log what actually went wrong.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoginError {
    /// Identifier is neither a valid email nor a valid phone number
    #[error("identifier is not a valid email address or phone number")]
    NotAcceptable,

    #[error("confirmation code is missing")]
    MissingCode,

    /// A submission is already in flight
    #[error("a submission is already in progress")]
    Busy,

    /// A result arrived with no submission in flight
    #[error("no submission is in progress")]
    NotSubmitting,

    /// Sign-in already succeeded
    #[error("sign-in is already complete")]
    Completed,

    #[error("remote call failed: {0}")]
    Remote(#[from] anyhow::Error),
}

impl LoginError {
    /// Whether this failure should be surfaced through the invalid flag.
    pub fn marks_invalid(&self) -> bool {
        matches!(
            self,
            LoginError::NotAcceptable | LoginError::MissingCode | LoginError::Remote(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LoginError>;
