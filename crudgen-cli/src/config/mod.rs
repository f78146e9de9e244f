//! Configuration management for crudgen
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix, `__` for nesting)
//! 2. `./crudgen.toml`, or the file passed with `--config`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # crudgen.toml
//! base_path = "../backend"
//!
//! [paths]
//! controllers = "app/Http/Controllers/Api/V1"
//! tests = "tests/Feature/Api"
//! ```
//!
//! ```bash
//! CRUDGEN_PATHS__MODELS=src/Domain/Models crudgen generate Product
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// File looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "crudgen.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "CRUDGEN_";

/// Target directories for each artifact, relative to the base path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Schema migrations
    pub migrations: PathBuf,
    /// Eloquent models
    pub models: PathBuf,
    /// API controllers
    pub controllers: PathBuf,
    /// Form requests (a sub-directory per resource is added)
    pub requests: PathBuf,
    /// JSON resources
    pub resources: PathBuf,
    /// Route files
    pub routes: PathBuf,
    /// Model factories
    pub factories: PathBuf,
    /// Seeders
    pub seeders: PathBuf,
    /// Feature tests (a sub-directory per resource is added)
    pub tests: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            migrations: PathBuf::from("database/migrations"),
            models: PathBuf::from("app/Models"),
            controllers: PathBuf::from("app/Http/Controllers/Api"),
            requests: PathBuf::from("app/Http/Requests"),
            resources: PathBuf::from("app/Http/Resources"),
            routes: PathBuf::from("routes/api"),
            factories: PathBuf::from("database/factories"),
            seeders: PathBuf::from("database/seeders"),
            tests: PathBuf::from("tests/Feature"),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the host project; artifact paths are joined onto it
    pub base_path: PathBuf,

    /// Per-artifact directories
    pub paths: PathSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            paths: PathSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from defaults, an optional TOML file and the environment
    ///
    /// When `path` is `None`, `./crudgen.toml` is used if it exists. A file
    /// that is missing is skipped; a file that does not parse is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Config`](crate::ScaffoldError::Config) if a
    /// source cannot be parsed into the configuration shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Self::figment(file).extract().map_err(Into::into)
    }

    /// Build the layered figment without extracting it
    #[must_use]
    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Replace the base path (used by `--path`)
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }
}
