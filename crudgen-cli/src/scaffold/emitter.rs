//! Artifact placement and writing
//!
//! [`PathLayout`] maps each artifact to a path relative to the host project;
//! [`Emitter`] writes rendered files below a base path, creating parent
//! directories and overwriting whatever is already there.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::generator::{ArtifactKind, GeneratedFile};
use super::helpers::ResourceNames;
use crate::config::PathSettings;
use crate::error::{Result, ScaffoldError};

/// Migration filename prefix format (`2024_01_31_120000`)
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";

/// Relative placement of every artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLayout {
    paths: PathSettings,
    timestamp: String,
}

impl PathLayout {
    /// Layout whose migration is stamped with `now`
    #[must_use]
    pub fn new(paths: PathSettings, now: DateTime<Utc>) -> Self {
        Self::with_timestamp(paths, now.format(MIGRATION_TIMESTAMP_FORMAT).to_string())
    }

    /// Layout with an explicit migration timestamp
    #[must_use]
    pub fn with_timestamp(paths: PathSettings, timestamp: impl Into<String>) -> Self {
        Self {
            paths,
            timestamp: timestamp.into(),
        }
    }

    /// Migration timestamp used in the migration filename
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Path of `kind` for the given resource, relative to the base path
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::config::PathSettings;
    /// # use crudgen_lib::scaffold::{ArtifactKind, PathLayout, ResourceNames};
    /// # use std::path::PathBuf;
    /// let layout = PathLayout::with_timestamp(PathSettings::default(), "2024_01_31_120000");
    /// let names = ResourceNames::new("Product");
    /// assert_eq!(
    ///     layout.path_for(ArtifactKind::Model, &names),
    ///     PathBuf::from("app/Models/Product.php")
    /// );
    /// ```
    #[must_use]
    pub fn path_for(&self, kind: ArtifactKind, names: &ResourceNames) -> PathBuf {
        let class = &names.class;
        let paths = &self.paths;
        match kind {
            ArtifactKind::Migration => paths.migrations.join(format!(
                "{}_create_{}_table.php",
                self.timestamp, names.table
            )),
            ArtifactKind::Model => paths.models.join(format!("{class}.php")),
            ArtifactKind::Controller => paths.controllers.join(format!("{class}Controller.php")),
            ArtifactKind::StoreRequest => paths
                .requests
                .join(class)
                .join(format!("Store{class}Request.php")),
            ArtifactKind::UpdateRequest => paths
                .requests
                .join(class)
                .join(format!("Update{class}Request.php")),
            ArtifactKind::Resource => paths.resources.join(format!("{class}Resource.php")),
            ArtifactKind::Routes => paths.routes.join(format!("{class}.php")),
            ArtifactKind::Factory => paths.factories.join(format!("{class}Factory.php")),
            ArtifactKind::Seeder => paths.seeders.join(format!("{class}Seeder.php")),
            ArtifactKind::Test => paths.tests.join(class).join(format!("{class}ApiTest.php")),
        }
    }
}

/// Writes generated files below a base path
#[derive(Debug, Clone)]
pub struct Emitter {
    base_path: PathBuf,
}

impl Emitter {
    /// Create an emitter rooted at `base_path`
    #[must_use]
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Root directory files are written below
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Write a single file, creating its parent directories
    ///
    /// An existing file at the same path is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created or the file cannot be written.
    pub fn write(&self, file: &GeneratedFile) -> Result<PathBuf> {
        let full_path = self.base_path.join(&file.path);

        // Create parent directories if they don't exist
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        if full_path.exists() {
            debug!(path = %full_path.display(), "overwriting existing file");
        }

        fs::write(&full_path, &file.content).map_err(|source| ScaffoldError::Write {
            path: full_path.clone(),
            source,
        })?;

        debug!(kind = %file.kind, path = %full_path.display(), bytes = file.content.len(), "wrote artifact");
        Ok(full_path)
    }

    /// Write every file in order, stopping at the first failure
    ///
    /// Files written before a failure are left in place.
    ///
    /// # Errors
    ///
    /// Returns the first filesystem error encountered.
    pub fn write_all(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        let written = files
            .iter()
            .map(|file| self.write(file))
            .collect::<Result<Vec<_>>>()?;

        info!(count = written.len(), base_path = %self.base_path.display(), "scaffold written");
        Ok(written)
    }
}
