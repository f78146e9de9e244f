//! crudgen library
//!
//! Parsing, naming, rendering and emission behind the `crudgen` binary.
//!
//! ```
//! use crudgen_lib::config::PathSettings;
//! use crudgen_lib::scaffold::{PathLayout, ScaffoldGenerator};
//!
//! # fn main() -> crudgen_lib::Result<()> {
//! let generator = ScaffoldGenerator::from_specs(
//!     "Product",
//!     Some("title:string,price:decimal:nullable"),
//!     Some("belongsTo:Category"),
//! )?;
//! let layout = PathLayout::with_timestamp(PathSettings::default(), "2024_01_31_120000");
//! let files = generator.generate(&layout)?;
//! assert_eq!(files.len(), 10);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;

pub use config::GeneratorConfig;
pub use error::{Result, ScaffoldError};
pub use scaffold::{Emitter, FieldSpec, FieldType, PathLayout, RelationSpec, ScaffoldGenerator};
