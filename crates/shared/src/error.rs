use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SampleId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
    Configuration,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowcaseError {
    #[error("sample catalog is empty")]
    EmptyCatalog,
    #[error("duplicate sample id '{0}'")]
    DuplicateSampleId(SampleId),
    #[error("invalid sample id '{0}': expected [A-Za-z0-9_-]+")]
    InvalidSampleId(String),
    #[error("unknown sample '{0}'")]
    UnknownSample(String),
    #[error("invalid base path '{base_path}': {reason}")]
    InvalidBasePath { base_path: String, reason: String },
    #[error("invalid artifact rule: {0}")]
    InvalidArtifactRule(String),
    #[error("invalid deploy mode '{0}': expected 'development' or 'production'")]
    InvalidDeployMode(String),
    #[error("failed to parse sample catalog: {0}")]
    CatalogParse(String),
}

impl ShowcaseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownSample(_) => ErrorCode::NotFound,
            Self::InvalidSampleId(_) => ErrorCode::Validation,
            Self::EmptyCatalog
            | Self::DuplicateSampleId(_)
            | Self::InvalidBasePath { .. }
            | Self::InvalidArtifactRule(_)
            | Self::InvalidDeployMode(_)
            | Self::CatalogParse(_) => ErrorCode::Configuration,
        }
    }
}

impl From<&ShowcaseError> for ApiError {
    fn from(value: &ShowcaseError) -> Self {
        Self::new(value.code(), value.to_string())
    }
}

impl From<ShowcaseError> for ApiError {
    fn from(value: ShowcaseError) -> Self {
        Self::from(&value)
    }
}
