//! Error handling for the ATS scorer

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Pattern compilation error: {0}")]
    Pattern(String),

    #[error("Scoring failed: {0}")]
    Scoring(String),

    #[error("Advisory response error: {0}")]
    AdvisoryResponse(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsScorerError>;

/// Failure class reported alongside the message in a degraded report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingInput,
    InvalidInput,
    Configuration,
    AdvisoryResponse,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingInput => "missing_input",
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::Configuration => "configuration",
            ErrorKind::AdvisoryResponse => "advisory_response",
            ErrorKind::Internal => "internal",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AtsScorerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AtsScorerError::MissingInput(_) => ErrorKind::MissingInput,
            AtsScorerError::InvalidInput(_)
            | AtsScorerError::UnsupportedFormat(_)
            | AtsScorerError::Serialization(_) => ErrorKind::InvalidInput,
            AtsScorerError::Configuration(_) => ErrorKind::Configuration,
            AtsScorerError::AdvisoryResponse(_) => ErrorKind::AdvisoryResponse,
            AtsScorerError::Io(_)
            | AtsScorerError::Pattern(_)
            | AtsScorerError::Scoring(_)
            | AtsScorerError::OutputFormatting(_) => ErrorKind::Internal,
        }
    }
}

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsScorerError {
    fn from(err: anyhow::Error) -> Self {
        AtsScorerError::Scoring(format!("{:#}", err))
    }
}

impl From<regex::Error> for AtsScorerError {
    fn from(err: regex::Error) -> Self {
        AtsScorerError::Pattern(err.to_string())
    }
}

impl From<aho_corasick::BuildError> for AtsScorerError {
    fn from(err: aho_corasick::BuildError) -> Self {
        AtsScorerError::Pattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            AtsScorerError::MissingInput("empty".into()).kind(),
            ErrorKind::MissingInput
        );
        assert_eq!(
            AtsScorerError::Pattern("bad".into()).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            AtsScorerError::from(anyhow::anyhow!("boom")).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::MissingInput).unwrap();
        assert_eq!(json, "\"missing_input\"");
    }
}
