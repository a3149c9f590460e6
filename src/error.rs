//! Error types for the skill catalog.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No provider in the chain produced a usable document.
    #[error("skill data unavailable: {0}")]
    DataUnavailable(String),

    #[error("{source_name} provider failed: {message}")]
    Provider {
        source_name: String,
        message: String,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("skill not found: {0}")]
    SkillNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn provider(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DataUnavailable(_) => "data_unavailable",
            Self::Provider { .. } => "provider_failed",
            Self::Parse(_) => "parse_error",
            Self::Config(_) => "config_error",
            Self::MissingConfig(_) => "missing_config",
            Self::SkillNotFound(_) => "skill_not_found",
            Self::Io(_) => "io_error",
            Self::Serialization(_) => "serialization_error",
        }
    }

    /// Whether re-running the command may succeed (transient data-source failure).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::DataUnavailable(_) | Self::Provider { .. })
    }
}
