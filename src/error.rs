use crate::error_consts;
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
/// Errors raised by the identity hash entry points and the crate configuration.
pub enum OidError {
    #[error("{}", error_consts::NOT_AN_OBJECT)]
    NotAnObject,

    #[error("{}", error_consts::NOT_A_NUMBER)]
    NotANumber,

    #[error("Invalid configuration. {0}")]
    InvalidConfiguration(String),
}

pub type OidResult<T = ()> = Result<T, OidError>;

impl OidError {
    /// True for the argument validation failures of `objectIdHash` and `numberIdHash`.
    pub fn is_argument_error(&self) -> bool {
        matches!(self, OidError::NotAnObject | OidError::NotANumber)
    }
}

impl From<&str> for OidError {
    fn from(s: &str) -> Self {
        OidError::InvalidConfiguration(s.to_string())
    }
}

impl From<String> for OidError {
    fn from(s: String) -> Self {
        OidError::InvalidConfiguration(s)
    }
}
