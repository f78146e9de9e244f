//! Naming helpers for code generation
//!
//! Every name a template needs is derived here from the single resource name,
//! so the migration, model, controller, routes and tests always agree on the
//! table, variable and route spellings.

use inflector::Inflector;
use serde::Serialize;

/// Case conversion and pluralization helpers
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_snake_case("UserProfile"), "user_profile");
    /// assert_eq!(TemplateHelpers::to_snake_case("Author"), "author");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Convert string to camelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_camel_case("UserProfile"), "userProfile");
    /// assert_eq!(TemplateHelpers::to_camel_case("Product"), "product");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert string to kebab-case
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_kebab_case("UserProfiles"), "user-profiles");
    /// ```
    #[must_use]
    pub fn to_kebab_case(input: &str) -> String {
        input.to_kebab_case()
    }

    /// Pluralize a word, keeping its case style
    ///
    /// Only the last word is inflected, and it is inflected in lowercase so
    /// irregular and uncountable words are recognised whatever the input case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("Product"), "Products");
    /// assert_eq!(TemplateHelpers::pluralize("Category"), "Categories");
    /// assert_eq!(TemplateHelpers::pluralize("Child"), "Children");
    /// assert_eq!(TemplateHelpers::pluralize("comment"), "comments");
    /// assert_eq!(TemplateHelpers::pluralize("orderLine"), "orderLines");
    /// ```
    ///
    /// # Note
    ///
    /// Inflector turns `person` into `personople`; names ending in `Person`
    /// need a hand edit after generation.
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        let snake = Self::to_snake_case(input);
        let plural = match snake.rsplit_once('_') {
            Some((head, last)) => format!("{head}_{}", last.to_plural()),
            None => snake.to_plural(),
        };

        if input.starts_with(char::is_uppercase) {
            plural.to_pascal_case()
        } else if input == snake {
            plural
        } else {
            plural.to_camel_case()
        }
    }

    /// Table name for a model (`snake_case` plural)
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_table_name("UserProfile"), "user_profiles");
    /// assert_eq!(TemplateHelpers::to_table_name("Sheep"), "sheep");
    /// ```
    #[must_use]
    pub fn to_table_name(model: &str) -> String {
        Self::pluralize(&Self::to_snake_case(model))
    }

    /// Foreign key column for a `belongsTo` target
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_foreign_key("Author"), "author_id");
    /// assert_eq!(TemplateHelpers::to_foreign_key("BlogPost"), "blog_post_id");
    /// ```
    #[must_use]
    pub fn to_foreign_key(model: &str) -> String {
        format!("{}_id", Self::to_snake_case(model))
    }

    /// Accessor method for a `belongsTo` relation
    #[must_use]
    pub fn to_singular_accessor(model: &str) -> String {
        Self::to_camel_case(model)
    }

    /// Accessor method for a `hasMany` relation
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_plural_accessor("Comment"), "comments");
    /// assert_eq!(TemplateHelpers::to_plural_accessor("OrderLine"), "orderLines");
    /// ```
    #[must_use]
    pub fn to_plural_accessor(model: &str) -> String {
        Self::pluralize(&Self::to_camel_case(model))
    }
}

/// All naming variants of one resource
///
/// Plural forms are all cased from the same `table` value, so they share one
/// inflection and one word split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceNames {
    /// Class name, as given (e.g. `Product`)
    pub class: String,
    /// Pluralized class name (e.g. `Products`)
    pub class_plural: String,
    /// `snake_case` singular (e.g. `blog_post`)
    pub snake: String,
    /// Table name, `snake_case` plural (e.g. `blog_posts`)
    pub table: String,
    /// Variable name, camelCase singular (e.g. `blogPost`)
    pub camel: String,
    /// Collection variable name, camelCase plural (e.g. `blogPosts`)
    pub camel_plural: String,
    /// Route segment, kebab-case plural (e.g. `blog-posts`)
    pub kebab_plural: String,
}

impl ResourceNames {
    /// Derive every name from the resource class name
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen_lib::scaffold::helpers::ResourceNames;
    /// let names = ResourceNames::new("Category");
    /// assert_eq!(names.table, "categories");
    /// assert_eq!(names.kebab_plural, "categories");
    /// assert_eq!(names.camel, "category");
    /// ```
    #[must_use]
    pub fn new(name: &str) -> Self {
        let table = TemplateHelpers::to_table_name(name);

        Self {
            class: name.to_string(),
            class_plural: table.to_pascal_case(),
            snake: TemplateHelpers::to_snake_case(name),
            camel: TemplateHelpers::to_camel_case(name),
            camel_plural: TemplateHelpers::to_camel_case(&table),
            kebab_plural: TemplateHelpers::to_kebab_case(&table),
            table,
        }
    }
}
