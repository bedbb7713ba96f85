//! Error types
//!
//! Everything below the service boundary propagates [`SummarizeError`] with
//! `?`. Only [`crate::service::SummaryService`] turns an error into the
//! fallback result.

use std::path::PathBuf;

use serde::Serialize;

/// Stable, machine-readable classification of a [`SummarizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingResource,
    ResourceIo,
    Tokenization,
    Ranking,
    InvalidConfig,
    ConfigParse,
}

impl ErrorKind {
    /// Snake-case name, used as a structured log field.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingResource => "missing_resource",
            ErrorKind::ResourceIo => "resource_io",
            ErrorKind::Tokenization => "tokenization",
            ErrorKind::Ranking => "ranking",
            ErrorKind::InvalidConfig => "invalid_config",
            ErrorKind::ConfigParse => "config_parse",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("no sentence rules available for language {language:?}")]
    MissingResource { language: String },

    #[error("failed to read {}: {source}", .path.display())]
    ResourceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("ranking failed: {0}")]
    Ranking(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SummarizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SummarizeError::MissingResource { .. } => ErrorKind::MissingResource,
            SummarizeError::ResourceIo { .. } => ErrorKind::ResourceIo,
            SummarizeError::Tokenization(_) => ErrorKind::Tokenization,
            SummarizeError::Ranking(_) => ErrorKind::Ranking,
            SummarizeError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            SummarizeError::ConfigParse(_) => ErrorKind::ConfigParse,
        }
    }
}

pub type Result<T, E = SummarizeError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = SummarizeError::MissingResource {
            language: "klingon".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MissingResource);
        assert_eq!(err.kind().as_str(), "missing_resource");
        assert!(err.to_string().contains("klingon"));

        let err = SummarizeError::Ranking("nan score".to_string());
        assert_eq!(err.kind(), ErrorKind::Ranking);
    }

    #[test]
    fn test_config_parse_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SummarizeError = parse_err.into();
        assert_eq!(err.kind(), ErrorKind::ConfigParse);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::ResourceIo).unwrap();
        assert_eq!(json, "\"resource_io\"");
    }
}
