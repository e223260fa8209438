//! Deployment-relative asset URL resolution.
//!
//! The same build is served from `/` during development and from a project
//! sub-path when published, so every link the page emits goes through
//! [`resolve`] with the current base path.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::error::ShowcaseError;

pub const ROOT_BASE_PATH: &str = "/";
pub const PROJECT_BASE_PATH: &str = "/delphi-pascal-llvm-compiler/";

/// Ensures exactly one trailing `/`. An empty base becomes `/`. No host or
/// scheme is ever added; a base without a leading `/` stays document-relative.
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_BASE_PATH.to_string()
    } else {
        format!("{trimmed}/")
    }
}

/// Joins a base path and a relative asset path.
///
/// Only a single leading `/` is stripped from `relative_path`; `//a` resolves
/// against `/` to `//a`.
pub fn resolve(base_path: &str, relative_path: &str) -> String {
    let relative = relative_path.strip_prefix('/').unwrap_or(relative_path);
    let mut url = normalize_base_path(base_path);
    url.push_str(relative);
    url
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployMode {
    #[default]
    Development,
    Production,
}

impl DeployMode {
    pub fn default_base_path(self) -> &'static str {
        match self {
            Self::Development => ROOT_BASE_PATH,
            Self::Production => PROJECT_BASE_PATH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for DeployMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeployMode {
    type Err = ShowcaseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ShowcaseError::InvalidDeployMode(raw.to_string())),
        }
    }
}

/// Base path the running page is hosted under. Validated once at startup and
/// held normalized, so resolving against it never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentContext {
    base_path: String,
}

impl DeploymentContext {
    pub fn new(base_path: &str) -> Result<Self, ShowcaseError> {
        let reject = |reason: &str| ShowcaseError::InvalidBasePath {
            base_path: base_path.to_string(),
            reason: reason.to_string(),
        };

        if base_path.contains("://") || base_path.starts_with("//") {
            return Err(reject("must be a path, not a URL with scheme or host"));
        }
        if base_path.contains(['*', ':']) {
            return Err(reject("'*' and ':' are reserved in route patterns"));
        }
        if base_path.contains(['?', '#']) {
            return Err(reject("query strings and fragments are not allowed"));
        }
        if base_path.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(reject("whitespace and control characters are not allowed"));
        }

        Ok(Self {
            base_path: normalize_base_path(base_path),
        })
    }

    pub fn root() -> Self {
        Self {
            base_path: ROOT_BASE_PATH.to_string(),
        }
    }

    pub fn for_mode(mode: DeployMode) -> Self {
        Self {
            base_path: mode.default_base_path().to_string(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn resolve(&self, relative_path: &str) -> String {
        resolve(&self.base_path, relative_path)
    }

    pub fn is_root(&self) -> bool {
        self.base_path == ROOT_BASE_PATH
    }
}

impl Default for DeploymentContext {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
