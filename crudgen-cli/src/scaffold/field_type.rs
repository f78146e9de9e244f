//! Field definitions and the `--fields` parser
//!
//! A field list is a comma separated sequence of `name[:type[:nullable]]`
//! entries. Parsing never fails: a missing type defaults to `string`, any
//! third token other than `nullable` is ignored, and an unrecognised type is
//! kept verbatim so the migration still emits it.
//!
//! # Supported Field Types
//!
//! - `string` - `$table->string()`, rule `string|max:255`
//! - `text` - `$table->text()`, rule `string`
//! - `integer` - `$table->integer()`, rule `integer`
//! - `boolean` - `$table->boolean()`, rule `boolean`
//! - `date` - `$table->date()`, rule `date`
//! - `email` - emitted as given, rule `email`
//! - `json` - `$table->json()`, rule `json`
//! - `decimal` / `float` - rule `numeric`
//!
//! # Examples
//!
//! ```text
//! title                     → title:string
//! body:text                 → body:text
//! age:integer:nullable      → age:integer, nullable
//! rating:tinyInteger        → rating:tinyInteger (unknown, kept verbatim)
//! ```

use std::fmt;

use serde::Serialize;

/// A single field parsed from the `--fields` option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Column and attribute name (e.g., "title", "`published_at`")
    pub name: String,
    /// Declared type
    pub field_type: FieldType,
    /// Whether the column accepts null
    pub nullable: bool,
}

/// Column type of a field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FieldType {
    /// Short string (VARCHAR 255)
    #[default]
    String,
    /// Unbounded text
    Text,
    /// Integer
    Integer,
    /// Boolean
    Boolean,
    /// Date
    Date,
    /// Email address
    Email,
    /// JSON document
    Json,
    /// Fixed precision number
    Decimal,
    /// Floating point number
    Float,
    /// Any other token, carried through unchanged
    Other(String),
}

impl FieldType {
    /// Map a type token to a field type.
    ///
    /// Matching is exact and case-sensitive; everything else is `Other`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "string" => Self::String,
            "text" => Self::Text,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            "email" => Self::Email,
            "json" => Self::Json,
            "decimal" => Self::Decimal,
            "float" => Self::Float,
            other => Self::Other(other.to_string()),
        }
    }

    /// The token this type was parsed from, as used by the schema builder
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Email => "email",
            Self::Json => "json",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Other(token) => token,
        }
    }

    /// Whether the type fell outside the known table
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.as_str().to_string()
    }
}

impl FieldSpec {
    /// Parse a single `name[:type[:nullable]]` entry
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::field_type::{FieldSpec, FieldType};
    /// let field = FieldSpec::parse("age:integer:nullable");
    /// assert_eq!(field.name, "age");
    /// assert_eq!(field.field_type, FieldType::Integer);
    /// assert!(field.nullable);
    ///
    /// let field = FieldSpec::parse("title");
    /// assert_eq!(field.field_type, FieldType::String);
    /// assert!(!field.nullable);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut parts = input.trim().split(':').map(str::trim);

        let name = parts.next().unwrap_or_default().to_string();
        let field_type = parts
            .next()
            .map(FieldType::from_token)
            .unwrap_or_default();
        let nullable = parts.next() == Some("nullable");

        Self {
            name,
            field_type,
            nullable,
        }
    }
}

/// Parse the whole `--fields` value
///
/// An absent or empty value yields no fields. Order is preserved and
/// duplicates are kept.
#[must_use]
pub fn parse_fields(raw: Option<&str>) -> Vec<FieldSpec> {
    match raw {
        None | Some("") => Vec::new(),
        Some(raw) => raw.split(',').map(FieldSpec::parse).collect(),
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        let field_type = &self.field_type;
        write!(f, "{name}:{field_type}")?;
        if self.nullable {
            write!(f, ":nullable")?;
        }
        Ok(())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
