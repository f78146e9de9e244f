//! Laravel CRUD scaffold generation
//!
//! Turns a model name plus compact field and relation definitions into
//! the ten files of a REST resource: migration, model, controller, form
//! requests, JSON resource, routes, factory, seeder and feature test.

pub mod emitter;
pub mod field_type;
pub mod generator;
pub mod helpers;
pub mod relation;
pub mod rules;
pub mod templates;

pub use emitter::{Emitter, PathLayout};
pub use field_type::{parse_fields, FieldSpec, FieldType};
pub use generator::{ArtifactKind, GeneratedFile, ScaffoldGenerator};
pub use helpers::{ResourceNames, TemplateHelpers};
pub use relation::{parse_relations, RelationKind, RelationSpec};
