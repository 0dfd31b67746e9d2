//! User Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("email address cannot be empty")]
    Empty,

    #[error("email address must contain a single '@': {0}")]
    MissingAt(String),

    #[error("email address has an empty local part: {0}")]
    EmptyLocalPart(String),

    #[error("email address has an invalid domain: {0}")]
    InvalidDomain(String),
}
