use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use assets::{DeployMode, DeploymentContext};
use catalog::Registry;
use shared::error::ShowcaseError;

pub const SETTINGS_FILE: &str = "showcase.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub mode: DeployMode,
    /// Overrides the mode's default base path when set.
    pub base_path: Option<String>,
    pub public_dir: PathBuf,
    pub out_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5173".into(),
            mode: DeployMode::Development,
            base_path: None,
            public_dir: PathBuf::from("public"),
            out_dir: PathBuf::from("docs"),
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn deployment_context(&self) -> Result<DeploymentContext, ShowcaseError> {
        match &self.base_path {
            Some(base_path) => DeploymentContext::new(base_path),
            None => Ok(DeploymentContext::for_mode(self.mode)),
        }
    }

    /// The catalog file when one is configured, the built-in table otherwise.
    pub fn load_registry(&self) -> anyhow::Result<Registry> {
        let Some(path) = &self.catalog_path else {
            return Ok(Registry::builtin()?);
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read sample catalog '{}'", path.display()))?;
        Registry::from_toml_str(&raw)
            .with_context(|| format!("invalid sample catalog '{}'", path.display()))
    }
}

/// Defaults, then `showcase.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    let file = read_settings_file(Path::new(SETTINGS_FILE))?;
    load_settings_from(file.as_deref(), |key| std::env::var(key).ok())
}

/// A missing settings file is not an error; anything else reading it is.
pub fn read_settings_file(path: &Path) -> anyhow::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read '{}'", path.display())),
    }
}

pub fn load_settings_from(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        let file_cfg = toml::from_str::<HashMap<String, String>>(raw)
            .with_context(|| format!("failed to parse {SETTINGS_FILE}"))?;
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.bind_addr = v.clone();
        }
        if let Some(v) = file_cfg.get("mode") {
            settings.mode = v.parse()?;
        }
        if let Some(v) = file_cfg.get("base_path") {
            settings.base_path = Some(v.clone());
        }
        if let Some(v) = file_cfg.get("public_dir") {
            settings.public_dir = PathBuf::from(v);
        }
        if let Some(v) = file_cfg.get("out_dir") {
            settings.out_dir = PathBuf::from(v);
        }
        if let Some(v) = file_cfg.get("catalog_path") {
            settings.catalog_path = Some(PathBuf::from(v));
        }
    }

    if let Some(v) = env("SHOWCASE_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = env("APP__MODE") {
        settings.mode = v.parse()?;
    }

    if let Some(v) = env("BASE_URL") {
        settings.base_path = Some(v);
    }
    if let Some(v) = env("APP__BASE_PATH") {
        settings.base_path = Some(v);
    }

    if let Some(v) = env("APP__PUBLIC_DIR") {
        settings.public_dir = PathBuf::from(v);
    }
    if let Some(v) = env("APP__OUT_DIR") {
        settings.out_dir = PathBuf::from(v);
    }
    if let Some(v) = env("APP__CATALOG_PATH") {
        settings.catalog_path = Some(PathBuf::from(v));
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
