//! `generate` command: scaffold a Laravel CRUD resource
//!
//! # Example
//!
//! ```bash
//! crudgen generate Product \
//!   --fields "title:string,price:decimal:nullable" \
//!   --relations "belongsTo:Category"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use console::{style, Emoji};
use crudgen_lib::config::GeneratorConfig;
use crudgen_lib::scaffold::{Emitter, PathLayout, ScaffoldGenerator};
use tracing::debug;

static SUCCESS: Emoji = Emoji("✓", "√");
static SPARKLE: Emoji = Emoji("✨", "*");

/// Generate a complete REST CRUD resource
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Model name (`PascalCase`, e.g. `Product`, `UserProfile`)
    pub name: String,

    /// Field definitions: `name:type[:nullable]`, comma separated
    /// (e.g. `title:string,price:decimal:nullable`)
    #[arg(long, value_name = "SPEC")]
    pub fields: Option<String>,

    /// Relation definitions: `kind:Model`, comma separated
    /// (e.g. `belongsTo:Category,hasMany:Review`)
    #[arg(long, value_name = "SPEC")]
    pub relations: Option<String>,

    /// Overwrite existing files (files are always overwritten)
    #[arg(long)]
    pub force: bool,

    /// Project root to write into (overrides `base_path` from configuration)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,
}

impl GenerateCommand {
    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A template fails to render
    /// - A directory cannot be created
    /// - A file cannot be written
    pub fn execute(&self, mut config: GeneratorConfig) -> Result<()> {
        if let Some(path) = &self.path {
            config = config.with_base_path(path);
        }
        debug!(force = self.force, base_path = %config.base_path.display(), "generate");

        println!(
            "\n{} {} {}",
            style("Generating CRUD for").cyan().bold(),
            style(&self.name).green().bold(),
            style("...").cyan().bold()
        );

        let generator = ScaffoldGenerator::from_specs(
            &self.name,
            self.fields.as_deref(),
            self.relations.as_deref(),
        )
        .context("Failed to create scaffold generator")?;

        let layout = PathLayout::new(config.paths, Utc::now());
        let files = generator
            .generate(&layout)
            .context("Failed to generate scaffold files")?;

        let emitter = Emitter::new(config.base_path);
        emitter.write_all(&files).with_context(|| {
            format!("Failed to write scaffold into {}", emitter.base_path().display())
        })?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            files.len()
        );
        for file in &files {
            println!(
                "  {} {} ({})",
                style(SUCCESS).green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        println!(
            "\n{} CRUD for {} generated successfully!",
            style(SPARKLE).green().bold(),
            style(&self.name).green().bold()
        );

        println!("\n{}", style("Next steps:").cyan().bold());
        println!("  1. Run the migration: {}", style("php artisan migrate").yellow());
        println!(
            "  2. Register the routes if routes/api is not auto-loaded: {}",
            style(format!("require __DIR__.'/api/{}.php';", generator.names().class)).yellow()
        );

        Ok(())
    }
}
