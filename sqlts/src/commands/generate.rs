use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, eyre};
use sqlts_catalog::Catalog;
use sqlts_codegen_typescript::{Generator, LanguageCodegen};
use sqlts_core::Config;
use tracing::info;

use super::UnwrapOrExit;
use crate::reports::{GenerateReport, GenerationResult, Report, TableSummary, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Schema file containing SQLite DDL
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Directory to write the generated modules to
    #[arg(short, long, required_unless_present = "ir")]
    pub output: Option<PathBuf>,

    /// Path to sqlts.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Module exporting the shared `db` handle, relative to the output directory
    #[arg(long, value_name = "MODULE")]
    pub db_import: Option<String>,

    /// Leave out the generated-file header comment
    #[arg(long)]
    pub no_header: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Print the introspected schema as JSON instead of generating code
    #[arg(long)]
    pub ir: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.load_config()?;

        let schema = Catalog::open(&self.schema)
            .and_then(|catalog| catalog.read())
            .unwrap_or_exit();
        info!(tables = schema.len(), schema = %self.schema.display(), "introspected schema");

        if self.ir {
            let json =
                serde_json::to_string_pretty(&schema).wrap_err("Failed to serialize schema")?;
            println!("{}", json);
            return Ok(());
        }

        let generator = Generator::new(&schema, config.typescript);
        generator.validate().unwrap_or_exit();

        let result = if self.dry_run {
            GenerationResult::Preview(generator.preview()?)
        } else {
            let output_dir = self
                .output
                .clone()
                .ok_or_else(|| eyre!("--output is required"))?;
            let written = generator
                .generate(&output_dir)
                .wrap_err("Failed to generate code")?;
            GenerationResult::Written {
                output_dir,
                files: written.written,
            }
        };

        let report = GenerateReport {
            schema_path: self.schema.clone(),
            tables: schema
                .tables
                .iter()
                .map(|table| TableSummary {
                    name: table.name().to_string(),
                    columns: table.columns().len(),
                    key: table
                        .primary_key()
                        .into_iter()
                        .map(|column| column.name.clone())
                        .collect(),
                })
                .collect(),
            result,
        };
        report.render(&mut TerminalOutput);

        Ok(())
    }

    /// Read the config file, if any, then apply command-line overrides.
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::open(path)?,
            None => Config::default(),
        };

        if let Some(module) = &self.db_import {
            config.typescript.database_import = module.clone();
        }
        if self.no_header {
            config.typescript.header = false;
        }

        Ok(config)
    }
}
