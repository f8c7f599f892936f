//! Application configuration loading.
//!
//! Reads `parameters.yml` and exposes the Ollama endpoint and app settings.
//! Configuration is read once at startup and immutable for the process
//! lifetime.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ollama::OllamaError;

/// Top-level configuration (mirrors `parameters.yml`).
#[derive(Debug, Clone, Deserialize)]
pub struct Parameters {
    pub ollama: OllamaSettings,
    #[serde(default)]
    pub app: AppSettings,
}

/// Ollama server location.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaSettings {
    /// Scheme and host, e.g. `http://localhost`.
    pub url: String,
    pub port: u16,
}

/// Miscellaneous app settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub debug: bool,
}

impl Parameters {
    /// The transport endpoint, `"{url}:{port}"`.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.ollama.url, self.ollama.port)
    }
}

/// Resolve the path of `parameters.yml`.
///
/// Honors the `LOCALCHAT_CONFIG` env var if set, otherwise walks upward
/// from `start` looking for a `parameters.yml`.
pub fn find_config_path(start: &Path) -> Result<PathBuf, OllamaError> {
    if let Ok(path) = std::env::var("LOCALCHAT_CONFIG") {
        let candidate = PathBuf::from(&path);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join("parameters.yml");
        if candidate.exists() {
            return Ok(candidate);
        }
        if !dir.pop() {
            break;
        }
    }

    Err(OllamaError::Config {
        reason: "could not find parameters.yml".into(),
    })
}

/// Load and parse the configuration file.
pub fn load_parameters(path: &Path) -> Result<Parameters, OllamaError> {
    let raw = std::fs::read_to_string(path).map_err(|e| OllamaError::Config {
        reason: format!("failed to read {}: {e}", path.display()),
    })?;

    serde_yaml::from_str(&raw).map_err(|e| OllamaError::Config {
        reason: format!("failed to parse {}: {e}", path.display()),
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
