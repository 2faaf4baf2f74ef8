//! `~/.yijing/config.toml` loader.
//!
//! ```toml
//! [catalog]
//! path = "${HOME}/.yijing/catalog.json"
//! manuscript = "/path/to/BOOK.md"
//! reject_duplicate_codes = true
//! expected_records = 64
//!
//! [divination]
//! seed = 42
//! ```
//!
//! Every section and key is optional. Path values expand `${VAR}` references.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Overrides the default config location.
pub const CONFIG_ENV: &str = "YIJING_CONFIG";

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct YijingConfig {
    pub catalog: Option<CatalogConfig>,
    pub divination: Option<DivinationConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Persisted catalog JSON.
    pub path: Option<String>,
    /// Default input for `yijing build`.
    pub manuscript: Option<String>,
    #[serde(default = "default_true")]
    pub reject_duplicate_codes: bool,
    /// Minimum record count for a build. Defaults to the full 64.
    pub expected_records: Option<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            manuscript: None,
            reject_duplicate_codes: true,
            expected_records: None,
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.path.as_deref().map(expand_path)
    }

    #[must_use]
    pub fn manuscript(&self) -> Option<PathBuf> {
        self.manuscript.as_deref().map(expand_path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DivinationConfig {
    /// Fixed seed for reproducible casts.
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl YijingConfig {
    /// Load from [`config_path`]. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!(path = %path.display(), "Failed to read config: {source}");
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map(Some).map_err(|source| {
            tracing::warn!(path = %path.display(), "Failed to parse config: {source}");
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogConfig {
        self.catalog.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.divination.as_ref().and_then(|d| d.seed)
    }
}

/// `$YIJING_CONFIG` if set, else `~/.yijing/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => data_dir().map(|dir| dir.join("config.toml")),
    }
}

/// `~/.yijing`.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".yijing"))
}

/// Default persisted catalog location, `~/.yijing/catalog.json`.
#[must_use]
pub fn default_catalog_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("catalog.json"))
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(expand_env_vars(raw))
}

/// Replace `${VAR}` with the variable's value. Unset variables become empty;
/// an unclosed `${` is kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &rest[start + 2..start + 2 + len];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &rest[start + 3 + len..];
    }

    out.push_str(rest);
    out
}
