//! TypeScript code generator targeting `bun:sqlite`.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use eyre::Result;
use indexmap::IndexMap;
use sqlts_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use sqlts_core::{GeneratedFile, TypeScriptConfig, is_identifier};
use sqlts_ir::Schema;
use tracing::{debug, info};

use crate::{
    Error,
    files::{IndexTs, MANIFEST_FILE, TableTs},
};

/// TypeScript code generator that produces one data-access module per table.
pub struct Generator<'a> {
    schema: &'a Schema,
    config: TypeScriptConfig,
}

impl LanguageCodegen for Generator<'_> {
    fn render_units(&self) -> Result<IndexMap<String, String>> {
        self.validate()?;
        let units = self
            .schema
            .tables
            .iter()
            .zip(self.units())
            .map(|(table, unit)| {
                debug!(table = table.name(), "rendered table module");
                (table.name().to_string(), unit.contents())
            })
            .collect();
        Ok(units)
    }

    fn render_manifest(&self) -> String {
        self.manifest().contents()
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.validate()?;
        let mut files: Vec<PreviewFile> = self
            .units()
            .map(|unit| PreviewFile {
                path: unit.file_name(),
                content: unit.contents(),
            })
            .collect();
        files.push(PreviewFile {
            path: MANIFEST_FILE.to_string(),
            content: self.render_manifest(),
        });
        Ok(files)
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        // Nothing is written unless every table passes
        self.validate()?;

        let mut result = GenerateResult::default();
        for unit in self.units() {
            let path = unit.write(output_dir)?;
            debug!(path = %path.display(), "wrote table module");
            result.written.push(path);
        }
        result.written.push(self.manifest().write(output_dir)?);

        info!(
            tables = self.schema.len(),
            output = %output_dir.display(),
            "generated TypeScript modules"
        );
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(schema: &'a Schema, config: TypeScriptConfig) -> Self {
        Self { schema, config }
    }

    /// Check that every table yields a usable module.
    ///
    /// Fails on the first table whose type name is not an identifier, whose
    /// module would replace the manifest, whose key parameters clash inside
    /// its own module, or which exports a name another table already exports.
    pub fn validate(&self) -> crate::Result<()> {
        let mut exported: HashMap<String, &str> = HashMap::new();

        for (table, unit) in self.schema.tables.iter().zip(self.units()) {
            if !is_identifier(unit.type_name()) {
                return Err(Box::new(Error::InvalidTypeName {
                    table: table.name().to_string(),
                    type_name: unit.type_name().to_string(),
                }));
            }

            if unit.file_name().eq_ignore_ascii_case(MANIFEST_FILE) {
                return Err(Box::new(Error::ManifestConflict {
                    table: table.name().to_string(),
                    manifest: MANIFEST_FILE.to_string(),
                }));
            }

            Self::check_key_parameters(table.name(), &unit)?;

            for name in unit.exported_names() {
                if let Some(first) = exported.insert(name.clone(), table.name()) {
                    return Err(Box::new(Error::NameCollision {
                        name,
                        first: first.to_string(),
                        second: table.name().to_string(),
                    }));
                }
            }
        }

        Ok(())
    }

    /// Key parameters must differ from each other, from the input parameter
    /// and from every module-level name their functions could shadow.
    fn check_key_parameters(table: &str, unit: &TableTs<'_>) -> crate::Result<()> {
        let module_names: HashSet<String> = unit.module_names().into_iter().collect();
        let mut seen = HashSet::new();

        for (column, parameter) in unit.key_parameters() {
            let clash = if !seen.insert(parameter.clone()) {
                Some("another key parameter".to_string())
            } else if parameter == unit.input_param_name() {
                Some("the input parameter".to_string())
            } else if module_names.contains(&parameter) {
                Some(format!("the generated name '{}'", parameter))
            } else {
                None
            };

            if let Some(clash) = clash {
                return Err(Box::new(Error::KeyParameterConflict {
                    table: table.to_string(),
                    column,
                    parameter,
                    clash,
                }));
            }
        }

        Ok(())
    }

    fn units(&self) -> impl Iterator<Item = TableTs<'_>> {
        self.schema
            .tables
            .iter()
            .map(|table| TableTs::new(table, &self.config))
    }

    fn manifest(&self) -> IndexTs<'_> {
        IndexTs::new(&self.schema.tables, self.config.header)
    }
}
