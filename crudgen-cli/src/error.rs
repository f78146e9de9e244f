//! Error types for scaffold generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rendering or writing a scaffold
///
/// Input parsing never fails; these cover template defects, configuration
/// and the filesystem.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Template registration or rendering failed
    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    /// A target directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An artifact could not be written
    #[error("failed to write file {}: {source}", path.display())]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("invalid configuration: {0}")]
    Config(Box<figment::Error>),
}

impl From<figment::Error> for ScaffoldError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ScaffoldError>;
