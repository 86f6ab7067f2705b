//! Error type for version parsing and comparison

use thiserror::Error;

/// Errors raised while parsing or comparing versions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The input does not match the version grammar.
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    /// The comparison operator is not one of the recognised tokens.
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
}

impl VersionError {
    pub(crate) fn invalid_version(input: impl Into<String>) -> Self {
        let input = input.into();
        log::trace!("rejected version string {:?}", input);
        VersionError::InvalidVersion(input)
    }

    pub(crate) fn invalid_operator(token: impl Into<String>) -> Self {
        let token = token.into();
        log::trace!("rejected comparison operator {:?}", token);
        VersionError::InvalidOperator(token)
    }
}
