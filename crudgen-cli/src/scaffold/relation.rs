//! Relation definitions and the `--relations` parser
//!
//! Relations are written as `kind:Model`, e.g. `belongsTo:Author,hasMany:Comment`.
//! Only `belongsTo` and `hasMany` produce code; any other kind is carried
//! through so callers can report it.

use std::fmt;

use serde::Serialize;

/// A single relation parsed from the `--relations` option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationSpec {
    /// Relation kind
    pub kind: RelationKind,
    /// Related model class name (`PascalCase`). Empty when the entry had no target.
    pub target_model: String,
}

/// Eloquent relation kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum RelationKind {
    /// Owning side: adds a foreign key column and a singular accessor
    BelongsTo,
    /// Inverse one-to-many: adds a plural accessor
    HasMany,
    /// Anything else, passed through without generated code
    Other(String),
}

impl RelationKind {
    /// Map a kind token to a relation kind
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "belongsTo" => Self::BelongsTo,
            "hasMany" => Self::HasMany,
            other => Self::Other(other.to_string()),
        }
    }

    /// Eloquent method name for this relation kind
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::BelongsTo => "belongsTo",
            Self::HasMany => "hasMany",
            Self::Other(token) => token,
        }
    }
}

impl From<RelationKind> for String {
    fn from(value: RelationKind) -> Self {
        value.as_str().to_string()
    }
}

impl RelationSpec {
    /// Parse a single `kind:Model` entry
    ///
    /// A missing model degrades to an empty target rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::relation::{RelationKind, RelationSpec};
    /// let relation = RelationSpec::parse("belongsTo:Author");
    /// assert_eq!(relation.kind, RelationKind::BelongsTo);
    /// assert_eq!(relation.target_model, "Author");
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut parts = input.trim().split(':').map(str::trim);

        let kind = RelationKind::from_token(parts.next().unwrap_or_default());
        let target_model = parts.next().unwrap_or_default().to_string();

        Self { kind, target_model }
    }

    /// Whether the entry omitted its target model
    #[must_use]
    pub fn is_missing_target(&self) -> bool {
        self.target_model.is_empty()
    }

    /// Whether generated code exists for this relation kind
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self.kind, RelationKind::BelongsTo | RelationKind::HasMany)
    }
}

/// Parse the whole `--relations` value
///
/// An absent or empty value yields no relations. Order is preserved.
#[must_use]
pub fn parse_relations(raw: Option<&str>) -> Vec<RelationSpec> {
    match raw {
        None | Some("") => Vec::new(),
        Some(raw) => raw.split(',').map(RelationSpec::parse).collect(),
    }
}

impl fmt::Display for RelationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.target_model)
    }
}
