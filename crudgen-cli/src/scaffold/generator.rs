//! CRUD scaffold generator orchestrator
//!
//! This module coordinates the rendering of every artifact for a resource:
//! - Migration
//! - Model
//! - Controller
//! - Store and update form requests
//! - JSON resource
//! - Routes
//! - Factory and seeder
//! - Feature test
//!
//! Rendering is a pure function of the resource name, fields and relations.
//! Nothing here touches the filesystem; see [`super::emitter`].

use std::fmt;
use std::path::PathBuf;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::{debug, warn};

use super::emitter::PathLayout;
use super::field_type::{parse_fields, FieldSpec};
use super::helpers::{ResourceNames, TemplateHelpers};
use super::relation::{parse_relations, RelationKind, RelationSpec};
use super::rules;
use super::templates;
use crate::error::Result;

/// Default page size of the generated index handler
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Number of records created by the generated seeder
pub const SEED_COUNT: u32 = 50;

/// One kind of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Schema migration
    Migration,
    /// Eloquent model
    Model,
    /// API controller
    Controller,
    /// Creation form request
    StoreRequest,
    /// Update form request
    UpdateRequest,
    /// JSON resource
    Resource,
    /// Route file
    Routes,
    /// Model factory
    Factory,
    /// Seeder
    Seeder,
    /// Feature test
    Test,
}

impl ArtifactKind {
    /// Every artifact, in generation order
    pub const ALL: [Self; 10] = [
        Self::Migration,
        Self::Model,
        Self::Controller,
        Self::StoreRequest,
        Self::UpdateRequest,
        Self::Resource,
        Self::Routes,
        Self::Factory,
        Self::Seeder,
        Self::Test,
    ];

    /// Name the template is registered under
    #[must_use]
    pub const fn template_name(self) -> &'static str {
        match self {
            Self::Migration => "migration",
            Self::Model => "model",
            Self::Controller => "controller",
            Self::StoreRequest => "store_request",
            Self::UpdateRequest => "update_request",
            Self::Resource => "resource",
            Self::Routes => "routes",
            Self::Factory => "factory",
            Self::Seeder => "seeder",
            Self::Test => "test",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Migration => templates::MIGRATION_TEMPLATE,
            Self::Model => templates::MODEL_TEMPLATE,
            Self::Controller => templates::CONTROLLER_TEMPLATE,
            Self::StoreRequest => templates::STORE_REQUEST_TEMPLATE,
            Self::UpdateRequest => templates::UPDATE_REQUEST_TEMPLATE,
            Self::Resource => templates::RESOURCE_TEMPLATE,
            Self::Routes => templates::ROUTES_TEMPLATE,
            Self::Factory => templates::FACTORY_TEMPLATE,
            Self::Seeder => templates::SEEDER_TEMPLATE,
            Self::Test => templates::TEST_TEMPLATE,
        }
    }

    /// Human readable description for user feedback
    #[must_use]
    pub fn description(self, names: &ResourceNames) -> String {
        let class = &names.class;
        match self {
            Self::Migration => format!("Migration for {} table", names.table),
            Self::Model => format!("Eloquent model for {class}"),
            Self::Controller => format!("API controller for {class}"),
            Self::StoreRequest => format!("Store request for {class}"),
            Self::UpdateRequest => format!("Update request for {class}"),
            Self::Resource => format!("JSON resource for {class}"),
            Self::Routes => format!("API routes for /{}", names.kebab_plural),
            Self::Factory => format!("Model factory for {class}"),
            Self::Seeder => format!("Seeder for {class}"),
            Self::Test => format!("Feature tests for {class}"),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

/// CRUD scaffold generator
pub struct ScaffoldGenerator {
    /// Derived resource names
    names: ResourceNames,
    /// Field definitions, in declaration order
    fields: Vec<FieldSpec>,
    /// Relation definitions, in declaration order
    relations: Vec<RelationSpec>,
    /// Template environment with every artifact registered
    env: Environment<'static>,
}

impl ScaffoldGenerator {
    /// Create a new scaffold generator
    ///
    /// # Arguments
    ///
    /// * `model_name` - Name of the model (e.g., "Product", "`UserProfile`")
    /// * `fields` - Parsed field definitions
    /// * `relations` - Parsed relation definitions
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to register.
    pub fn new(
        model_name: &str,
        fields: Vec<FieldSpec>,
        relations: Vec<RelationSpec>,
    ) -> Result<Self> {
        let names = ResourceNames::new(model_name);
        debug!(?names, "derived resource names");

        for field in &fields {
            debug!(field = %field, "parsed field");
            if field.field_type.is_unknown() {
                warn!(
                    field = %field.name,
                    field_type = %field.field_type,
                    "unknown field type, emitting it verbatim with string defaults"
                );
            }
        }

        for relation in &relations {
            debug!(relation = %relation, "parsed relation");
            if relation.is_missing_target() {
                warn!(relation = %relation, "relation has no target model, embedding a blank name");
            }
            if !relation.is_handled() {
                warn!(relation = %relation, "unsupported relation kind, no code generated for it");
            }
        }

        Ok(Self {
            names,
            fields,
            relations,
            env: Self::environment()?,
        })
    }

    /// Create a generator straight from the raw `--fields` and `--relations` values
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to register.
    pub fn from_specs(
        model_name: &str,
        fields: Option<&str>,
        relations: Option<&str>,
    ) -> Result<Self> {
        Self::new(model_name, parse_fields(fields), parse_relations(relations))
    }

    fn environment() -> Result<Environment<'static>> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        for kind in ArtifactKind::ALL {
            env.add_template(kind.template_name(), kind.source())?;
        }

        Ok(env)
    }

    /// Derived resource names
    #[must_use]
    pub const fn names(&self) -> &ResourceNames {
        &self.names
    }

    /// Parsed fields
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Parsed relations
    #[must_use]
    pub fn relations(&self) -> &[RelationSpec] {
        &self.relations
    }

    /// Get model metadata for templates
    ///
    /// This generates all the template variables needed for code generation
    fn model_metadata(&self) -> serde_json::Value {
        serde_json::json!({
            "names": self.names,
            "fields": self.build_field_metadata(),
            "fillable": self.fillable(),
            "foreign_keys": self.foreign_keys(),
            "relations": self.collect_relations(),
            "per_page": DEFAULT_PER_PAGE,
            "seed_count": SEED_COUNT,
        })
    }

    /// Build field metadata with rules and fake data
    fn build_field_metadata(&self) -> Vec<serde_json::Value> {
        self.fields
            .iter()
            .map(|f| {
                serde_json::json!({
                    "name": f.name,
                    "column_type": f.field_type.as_str(),
                    "nullable": f.nullable,
                    "store_rule": rules::store_rule(f),
                    "update_rule": rules::update_rule(f),
                    "fake": rules::fake_for(&f.field_type, &f.name),
                })
            })
            .collect()
    }

    /// Quoted, comma separated field names for `$fillable`
    ///
    /// Foreign keys added for `belongsTo` relations are not included.
    #[must_use]
    pub fn fillable(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("'{}'", f.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Foreign key columns added to the migration, one per `belongsTo` relation
    #[must_use]
    pub fn foreign_keys(&self) -> Vec<String> {
        self.relations
            .iter()
            .filter(|r| r.kind == RelationKind::BelongsTo)
            .map(|r| TemplateHelpers::to_foreign_key(&r.target_model))
            .collect()
    }

    /// Collect accessor definitions for handled relations
    fn collect_relations(&self) -> Vec<serde_json::Value> {
        self.relations
            .iter()
            .filter_map(|relation| {
                let method = match relation.kind {
                    RelationKind::BelongsTo => {
                        TemplateHelpers::to_singular_accessor(&relation.target_model)
                    }
                    RelationKind::HasMany => {
                        TemplateHelpers::to_plural_accessor(&relation.target_model)
                    }
                    RelationKind::Other(_) => return None,
                };

                Some(serde_json::json!({
                    "method": method,
                    "kind": relation.kind.as_str(),
                    "model": relation.target_model,
                }))
            })
            .collect()
    }

    /// Render one artifact
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self, kind: ArtifactKind) -> Result<String> {
        let metadata = self.model_metadata();
        let content = self
            .env
            .get_template(kind.template_name())?
            .render(&metadata)?;
        Ok(content)
    }

    /// Render the schema migration
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_migration(&self) -> Result<String> {
        self.render(ArtifactKind::Migration)
    }

    /// Render the Eloquent model
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_model(&self) -> Result<String> {
        self.render(ArtifactKind::Model)
    }

    /// Render the API controller
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_controller(&self) -> Result<String> {
        self.render(ArtifactKind::Controller)
    }

    /// Render the store form request
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_store_request(&self) -> Result<String> {
        self.render(ArtifactKind::StoreRequest)
    }

    /// Render the update form request
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_update_request(&self) -> Result<String> {
        self.render(ArtifactKind::UpdateRequest)
    }

    /// Render the JSON resource
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_resource(&self) -> Result<String> {
        self.render(ArtifactKind::Resource)
    }

    /// Render the routes file
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_routes(&self) -> Result<String> {
        self.render(ArtifactKind::Routes)
    }

    /// Render the model factory
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_factory(&self) -> Result<String> {
        self.render(ArtifactKind::Factory)
    }

    /// Render the seeder
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_seeder(&self) -> Result<String> {
        self.render(ArtifactKind::Seeder)
    }

    /// Render the feature test
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render_test(&self) -> Result<String> {
        self.render(ArtifactKind::Test)
    }

    /// Render every artifact and place it in `layout`
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails for any file
    pub fn generate(&self, layout: &PathLayout) -> Result<Vec<GeneratedFile>> {
        ArtifactKind::ALL
            .into_iter()
            .map(|kind| -> Result<GeneratedFile> {
                Ok(GeneratedFile {
                    kind,
                    path: layout.path_for(kind, &self.names),
                    content: self.render(kind)?,
                    description: kind.description(&self.names),
                })
            })
            .collect()
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Which artifact this is
    pub kind: ArtifactKind,
    /// Relative path from the base path
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PathSettings;

    fn generator(name: &str, fields: &str, relations: &str) -> ScaffoldGenerator {
        ScaffoldGenerator::from_specs(name, Some(fields), Some(relations)).unwrap()
    }

    #[test]
    fn test_new_generator() {
        let generator = generator("Product", "title:string,price:decimal:nullable", "");
        assert_eq!(generator.names().class, "Product");
        assert_eq!(generator.fields().len(), 2);
        assert!(generator.relations().is_empty());
    }

    #[test]
    fn test_no_fields_is_accepted() {
        let generator = ScaffoldGenerator::from_specs("Tag", None, None).unwrap();
        assert!(generator.fields().is_empty());

        let store = generator.render_store_request().unwrap();
        assert!(store.contains("return [\n        ];"));
    }

    #[test]
    fn test_generate_migration() {
        let generator = generator("Product", "title:string,price:decimal:nullable", "");
        let migration = generator.render_migration().unwrap();

        assert!(migration.contains("Schema::create('products', function (Blueprint $table) {"));
        assert!(migration.contains("            $table->id();\n"));
        assert!(migration.contains("            $table->string('title');\n"));
        assert!(migration.contains("            $table->decimal('price')->nullable();\n"));
        assert!(migration.contains("            $table->timestamps();\n"));
        assert!(migration.contains("Schema::dropIfExists('products');"));
        assert!(!migration.contains("foreignId"));
    }

    #[test]
    fn test_migration_column_order() {
        let generator = generator("Product", "title,body:text", "belongsTo:Author");
        let migration = generator.render_migration().unwrap();

        let id = migration.find("$table->id();").unwrap();
        let title = migration.find("$table->string('title');").unwrap();
        let body = migration.find("$table->text('body');").unwrap();
        let fk = migration.find("$table->foreignId('author_id')").unwrap();
        let timestamps = migration.find("$table->timestamps();").unwrap();
        assert!(id < title && title < body && body < fk && fk < timestamps);
    }

    #[test]
    fn test_unknown_type_emitted_verbatim() {
        let generator = generator("Product", "rating:tinyInteger", "");
        let migration = generator.render_migration().unwrap();
        assert!(migration.contains("$table->tinyInteger('rating');"));

        let store = generator.render_store_request().unwrap();
        assert!(store.contains("'rating' => 'required|string',"));
    }

    #[test]
    fn test_belongs_to_foreign_key_not_fillable() {
        let generator = generator("Category", "title", "belongsTo:Author");
        let migration = generator.render_migration().unwrap();
        assert!(migration.contains(
            "$table->foreignId('author_id')->constrained()->onDelete('cascade');"
        ));

        let model = generator.render_model().unwrap();
        assert!(model.contains("protected $fillable = ['title'];"));
        assert!(!model.contains("author_id"));

        let store = generator.render_store_request().unwrap();
        assert!(!store.contains("author_id"));
        let update = generator.render_update_request().unwrap();
        assert!(!update.contains("author_id"));
    }

    #[test]
    fn test_has_many_adds_no_foreign_key() {
        let generator = generator("Author", "name", "hasMany:Post");
        assert!(generator.foreign_keys().is_empty());
        assert!(!generator.render_migration().unwrap().contains("foreignId"));
    }

    #[test]
    fn test_generate_model() {
        let generator = generator(
            "Post",
            "title:string,body:text",
            "belongsTo:Author,hasMany:Comment,morphTo:Imageable",
        );
        let model = generator.render_model().unwrap();

        assert!(model.contains("namespace App\\Models;"));
        assert!(model.contains("class Post extends Model"));
        assert!(model.contains("protected $fillable = ['title', 'body'];"));
        assert!(model.contains(
            "    public function author()\n    {\n        return $this->belongsTo(Author::class);\n    }"
        ));
        assert!(model.contains(
            "    public function comments()\n    {\n        return $this->hasMany(Comment::class);\n    }"
        ));
        assert!(!model.contains("morphTo"));
        assert!(!model.contains("Imageable"));
    }

    #[test]
    fn test_model_without_relations() {
        let generator = generator("Post", "title", "");
        let model = generator.render_model().unwrap();
        assert!(model.ends_with("        'updated_at' => 'datetime',\n    ];\n}\n"));
    }

    #[test]
    fn test_missing_relation_target_degrades_to_blank() {
        let generator = generator("Post", "title", "belongsTo");
        assert_eq!(generator.foreign_keys(), vec!["_id".to_string()]);

        let model = generator.render_model().unwrap();
        assert!(model.contains("return $this->belongsTo(::class);"));
    }

    #[test]
    fn test_duplicate_fields_are_all_emitted() {
        let generator = generator("Post", "title,title:text", "");
        assert_eq!(generator.fillable(), "'title', 'title'");

        let migration = generator.render_migration().unwrap();
        assert!(migration.contains("$table->string('title');"));
        assert!(migration.contains("$table->text('title');"));
    }

    #[test]
    fn test_handler_generation() {
        let generator = generator("Product", "title:string,price:decimal:nullable", "");
        let controller = generator.render_controller().unwrap();

        assert!(controller.contains("class ProductController extends Controller"));
        assert!(controller.contains("use App\\Http\\Requests\\Product\\StoreProductRequest;"));
        assert!(controller.contains("public function index(Request $request): JsonResponse"));
        assert!(controller.contains("public function store(StoreProductRequest $request): JsonResponse"));
        assert!(controller.contains("public function show(Product $product): JsonResponse"));
        assert!(controller.contains(
            "public function update(UpdateProductRequest $request, Product $product): JsonResponse"
        ));
        assert!(controller.contains("public function destroy(Product $product): JsonResponse"));
        assert_eq!(controller.matches("'success' => true").count(), 5);
        assert!(controller.contains("$products = Product::query()"));
        assert!(controller.contains("$query->where('name', 'like', \"%{$search}%\");"));
        assert!(controller.contains("$request->sort_direction ?? 'asc'"));
        assert!(controller.contains("->paginate($request->per_page ?? 15);"));
        assert!(controller.contains("'meta' => ["));
        assert!(controller.contains("], 201);"));
        assert!(controller.contains("'message' => 'Product deleted successfully'"));
    }

    #[test]
    fn test_generate_requests() {
        let generator = generator("Product", "title:string,price:decimal:nullable,age:integer", "");

        let store = generator.render_store_request().unwrap();
        assert!(store.contains("namespace App\\Http\\Requests\\Product;"));
        assert!(store.contains("class StoreProductRequest extends FormRequest"));
        assert!(store.contains("            'title' => 'required|string|max:255',\n"));
        assert!(store.contains("            'price' => 'nullable|numeric',\n"));
        assert!(store.contains("            'age' => 'required|integer',\n"));
        assert!(store.contains("public function messages()"));

        let update = generator.render_update_request().unwrap();
        assert!(update.contains("class UpdateProductRequest extends FormRequest"));
        assert!(update.contains("            'title' => 'sometimes|string|max:255',\n"));
        assert!(update.contains("            'price' => 'sometimes|numeric',\n"));
        assert!(update.contains("            'age' => 'sometimes|integer',\n"));
        assert!(!update.contains("messages()"));
    }

    #[test]
    fn test_resource_exposes_only_defaults() {
        let generator = generator("Product", "title:string,price:decimal", "");
        let resource = generator.render_resource().unwrap();

        assert!(resource.contains("class ProductResource extends JsonResource"));
        assert!(resource.contains("'id' => $this->id,"));
        assert!(resource.contains("// Add your fields here"));
        assert!(resource.contains("'created_at' => $this->created_at,"));
        assert!(resource.contains("'updated_at' => $this->updated_at,"));
        assert!(!resource.contains("title"));
        assert!(!resource.contains("price"));
    }

    #[test]
    fn test_generate_routes() {
        let generator = generator("UserProfile", "bio:text", "");
        let routes = generator.render_routes().unwrap();

        assert!(routes.contains("use App\\Http\\Controllers\\Api\\UserProfileController;"));
        assert!(routes.contains(
            "Route::apiResource('user-profiles', UserProfileController::class);"
        ));
    }

    #[test]
    fn test_generate_factory() {
        let generator = generator(
            "Customer",
            "full_name,contact_email:string,phone,bio:text,age:integer,active:boolean,meta:json",
            "",
        );
        let factory = generator.render_factory().unwrap();

        assert!(factory.contains("class CustomerFactory extends Factory"));
        assert!(factory.contains("protected $model = Customer::class;"));
        assert!(factory.contains("'full_name' => fake()->name(),"));
        assert!(factory.contains("'contact_email' => fake()->email(),"));
        assert!(factory.contains("'phone' => fake()->phoneNumber(),"));
        assert!(factory.contains("'bio' => fake()->paragraph(),"));
        assert!(factory.contains("'age' => fake()->numberBetween(1, 100),"));
        assert!(factory.contains("'active' => fake()->boolean(),"));
        assert!(factory.contains("'meta' => fake()->word(),"));
    }

    #[test]
    fn test_generate_seeder() {
        let generator = generator("Product", "title", "");
        let seeder = generator.render_seeder().unwrap();

        assert!(seeder.contains("class ProductSeeder extends Seeder"));
        assert!(seeder.contains("Product::factory()->count(50)->create();"));
    }

    #[test]
    fn test_test_generation() {
        let generator = generator("Category", "title", "");
        let test = generator.render_test().unwrap();

        assert!(test.contains("namespace Tests\\Feature\\Category;"));
        assert!(test.contains("class CategoryApiTest extends TestCase"));
        assert!(test.contains("public function test_can_list_categories()"));
        assert!(test.contains("public function test_can_create_category()"));
        assert!(test.contains("public function test_can_show_category()"));
        assert!(test.contains("public function test_can_update_category()"));
        assert!(test.contains("public function test_can_delete_category()"));
        assert!(test.contains("$this->getJson('/api/categories');"));
        assert!(test.contains("$this->getJson(\"/api/categories/{$category->id}\");"));
        assert!(test.contains("$response->assertStatus(201)"));
        assert_eq!(test.matches("assertStatus(200)").count(), 4);
        assert!(test.contains("$this->assertDatabaseHas('categories', $data);"));
        assert!(test.contains(
            "$this->assertDatabaseMissing('categories', ['id' => $category->id]);"
        ));
    }

    #[test]
    fn test_test_uses_table_for_database_assertions() {
        let generator = generator("UserProfile", "bio:text", "");
        let test = generator.render_test().unwrap();

        assert!(test.contains("$this->postJson('/api/user-profiles', $data);"));
        assert!(test.contains("$this->assertDatabaseHas('user_profiles', $data);"));
        assert!(test.contains("public function test_can_list_userProfiles()"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = generator("Product", "title,price:decimal:nullable", "belongsTo:Shop");
        let second = generator("Product", "title,price:decimal:nullable", "belongsTo:Shop");

        for kind in ArtifactKind::ALL {
            assert_eq!(first.render(kind).unwrap(), second.render(kind).unwrap(), "{kind}");
        }
    }

    #[test]
    fn test_complete_generation() {
        let generator = generator("Product", "title:string,price:decimal:nullable", "");
        let layout = PathLayout::with_timestamp(PathSettings::default(), "2024_01_02_030405");

        let files = generator.generate(&layout).unwrap();
        assert_eq!(files.len(), 10);

        let paths: Vec<String> = files
            .iter()
            .map(|f| f.path.to_string_lossy().replace('\\', "/"))
            .collect();
        assert!(paths.contains(&"database/migrations/2024_01_02_030405_create_products_table.php".to_string()));
        assert!(paths.contains(&"app/Models/Product.php".to_string()));
        assert!(paths.contains(&"app/Http/Controllers/Api/ProductController.php".to_string()));
        assert!(paths.contains(&"app/Http/Requests/Product/StoreProductRequest.php".to_string()));
        assert!(paths.contains(&"app/Http/Requests/Product/UpdateProductRequest.php".to_string()));
        assert!(paths.contains(&"app/Http/Resources/ProductResource.php".to_string()));
        assert!(paths.contains(&"routes/api/Product.php".to_string()));
        assert!(paths.contains(&"database/factories/ProductFactory.php".to_string()));
        assert!(paths.contains(&"database/seeders/ProductSeeder.php".to_string()));
        assert!(paths.contains(&"tests/Feature/Product/ProductApiTest.php".to_string()));

        assert!(files.iter().all(|f| f.content.starts_with("<?php\n")));
    }
}
