//! Validation rule and fake data mapping
//!
//! Maps a field type to the Laravel validation rule used by the generated
//! form requests, and a field to the Faker expression used by the generated
//! factory.

use super::field_type::{FieldSpec, FieldType};

/// Base validation rule for a field type
///
/// # Examples
///
/// ```
/// # use crudgen_lib::scaffold::{field_type::FieldType, rules::validation_rule};
/// assert_eq!(validation_rule(&FieldType::String), "string|max:255");
/// assert_eq!(validation_rule(&FieldType::Float), "numeric");
/// assert_eq!(validation_rule(&FieldType::Other("uuid".into())), "string");
/// ```
#[must_use]
pub const fn validation_rule(field_type: &FieldType) -> &'static str {
    match field_type {
        FieldType::String => "string|max:255",
        FieldType::Text | FieldType::Other(_) => "string",
        FieldType::Integer => "integer",
        FieldType::Boolean => "boolean",
        FieldType::Date => "date",
        FieldType::Email => "email",
        FieldType::Json => "json",
        FieldType::Decimal | FieldType::Float => "numeric",
    }
}

/// Rule for the store request: `required|` or `nullable|` plus the base rule
#[must_use]
pub fn store_rule(field: &FieldSpec) -> String {
    let presence = if field.nullable { "nullable" } else { "required" };
    format!("{presence}|{}", validation_rule(&field.field_type))
}

/// Rule for the update request: always `sometimes|` plus the base rule
#[must_use]
pub fn update_rule(field: &FieldSpec) -> String {
    format!("sometimes|{}", validation_rule(&field.field_type))
}

/// Faker expression for a field
///
/// Field names containing `email`, `phone` or `name` pick a matching
/// generator before the declared type is consulted.
///
/// # Examples
///
/// ```
/// # use crudgen_lib::scaffold::{field_type::FieldType, rules::fake_for};
/// assert_eq!(fake_for(&FieldType::String, "user_email"), "fake()->email()");
/// assert_eq!(fake_for(&FieldType::Integer, "stock"), "fake()->numberBetween(1, 100)");
/// ```
#[must_use]
pub fn fake_for(field_type: &FieldType, field_name: &str) -> &'static str {
    if field_name.contains("email") {
        return "fake()->email()";
    }
    if field_name.contains("phone") {
        return "fake()->phoneNumber()";
    }
    if field_name.contains("name") {
        return "fake()->name()";
    }

    match field_type {
        FieldType::String | FieldType::Json | FieldType::Other(_) => "fake()->word()",
        FieldType::Text => "fake()->paragraph()",
        FieldType::Integer => "fake()->numberBetween(1, 100)",
        FieldType::Boolean => "fake()->boolean()",
        FieldType::Date => "fake()->date()",
        FieldType::Email => "fake()->email()",
        FieldType::Decimal | FieldType::Float => "fake()->randomFloat(2, 0, 1000)",
    }
}
