//! Generate command report data structures.

use std::path::{Path, PathBuf};

use sqlts_codegen_typescript::PreviewFile;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema file that was introspected.
    pub schema_path: PathBuf,

    /// Tables in catalog order.
    pub tables: Vec<TableSummary>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// One introspected table.
#[derive(Debug)]
pub struct TableSummary {
    pub name: String,
    pub columns: usize,
    /// Primary key columns in key order.
    pub key: Vec<String>,
}

impl TableSummary {
    fn describe(&self) -> String {
        let key = if self.key.is_empty() {
            "no key".to_string()
        } else {
            format!("key: {}", self.key.join(", "))
        };
        format!("{} ({}, {})", self.name, count(self.columns, "column"), key)
    }
}

/// `1 file`, `2 files`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written {
        output_dir: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written { output_dir, files } => {
                self.render_written(out, output_dir, files)
            }
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, output_dir: &Path, files: &[PathBuf]) {
        out.key_value("Schema", &self.schema_path.display().to_string());
        out.newline();

        out.section(&format!("Tables ({})", self.tables.len()));
        for table in &self.tables {
            out.list_item(&table.describe());
        }
        out.newline();

        out.key_value("Generated", &output_dir.display().to_string());
        for file in files {
            out.added_item(&file.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{}, {} would be generated",
            count(self.tables.len(), "table"),
            count(files.len(), "file")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records rendered lines for assertions.
    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Output for Recorder {
        fn section(&mut self, name: &str) {
            self.0.push(format!("{}:", name));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.0.push(format!("{}: {}", key, value));
        }

        fn list_item(&mut self, text: &str) {
            self.0.push(format!("- {}", text));
        }

        fn added_item(&mut self, text: &str) {
            self.0.push(format!("+ {}", text));
        }

        fn divider(&mut self, label: &str) {
            self.0.push(format!("== {}", label));
        }

        fn preformatted(&mut self, text: &str) {
            self.0.push(text.to_string());
        }

        fn newline(&mut self) {
            self.0.push(String::new());
        }
    }

    fn tables() -> Vec<TableSummary> {
        vec![
            TableSummary {
                name: "users".to_string(),
                columns: 3,
                key: vec!["id".to_string()],
            },
            TableSummary {
                name: "events".to_string(),
                columns: 1,
                key: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_count_pluralizes() {
        assert_eq!(count(0, "file"), "0 files");
        assert_eq!(count(1, "file"), "1 file");
        assert_eq!(count(2, "table"), "2 tables");
    }

    #[test]
    fn test_written_report() {
        let report = GenerateReport {
            schema_path: PathBuf::from("schema.sql"),
            tables: tables(),
            result: GenerationResult::Written {
                output_dir: PathBuf::from("out"),
                files: vec![PathBuf::from("out/users.ts"), PathBuf::from("out/index.ts")],
            },
        };
        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.0,
            [
                "Schema: schema.sql",
                "",
                "Tables (2):",
                "- users (3 columns, key: id)",
                "- events (1 column, no key)",
                "",
                "Generated: out",
                "+ out/users.ts",
                "+ out/index.ts",
            ]
        );
    }

    #[test]
    fn test_preview_report() {
        let report = GenerateReport {
            schema_path: PathBuf::from("schema.sql"),
            tables: tables(),
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "index.ts".to_string(),
                content: "export * from \"./users.ts\";\n".to_string(),
            }]),
        };
        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(out.0[0], "== index.ts");
        assert_eq!(out.0.last().unwrap(), "2 tables, 1 file would be generated");
    }
}
