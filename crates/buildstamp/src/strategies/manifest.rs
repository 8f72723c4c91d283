// Manifest-file strategy: read one entry from a TOML-shaped manifest.

use crate::error::StrategyError;
use crate::resolver::Strategy;
use std::fs;
use std::path::PathBuf;

/// Reads a single `key = "value"` entry from a named table of a manifest
/// such as `Cargo.toml`.
///
/// The scan is deliberately narrow: it tracks which `[table]` it is inside
/// and matches plain `key = value` lines, trimming quotes. Absence of the
/// file, table, or key is reported as unavailable, never as a hard error.
pub struct ManifestField {
    path: PathBuf,
    table: String,
    key: String,
}

impl ManifestField {
    pub fn new(
        path: impl Into<PathBuf>,
        table: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            table: table.into(),
            key: key.into(),
        }
    }

    fn scan(&self, content: &str) -> Option<String> {
        let header = format!("[{}]", self.table);
        let mut in_table = false;

        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('[') {
                in_table = line == header;
                continue;
            }
            if !in_table || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            if lhs.trim() != self.key {
                continue;
            }
            let value = rhs.trim().trim_matches('"').trim_matches('\'');
            if value.is_empty() {
                return None;
            }
            return Some(value.to_string());
        }

        None
    }
}

impl Strategy for ManifestField {
    fn describe(&self) -> String {
        format!("manifest:{}", self.path.display())
    }

    fn attempt(&self) -> Result<String, StrategyError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StrategyError::Io {
            path: self.path.display().to_string(),
            source,
        })?;

        self.scan(&content).ok_or_else(|| StrategyError::MissingField {
            table: self.table.clone(),
            key: self.key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn manifest_with(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_quoted_value_from_table() {
        let file = manifest_with("[package]\nname = \"demo\"\nversion = \"1.4.0\"\n");
        let strategy = ManifestField::new(file.path(), "package", "version");
        assert_eq!(strategy.attempt().unwrap(), "1.4.0");
    }

    #[test]
    fn reads_single_quoted_value() {
        let file = manifest_with("[project]\nversion = '2.0.1'\n");
        let strategy = ManifestField::new(file.path(), "project", "version");
        assert_eq!(strategy.attempt().unwrap(), "2.0.1");
    }

    #[test]
    fn key_outside_table_is_not_matched() {
        let file = manifest_with("[dependencies]\nversion = \"9.9.9\"\n[package]\nname = \"demo\"\n");
        let strategy = ManifestField::new(file.path(), "package", "version");
        assert!(matches!(
            strategy.attempt(),
            Err(StrategyError::MissingField { .. })
        ));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let strategy = ManifestField::new("/no/such/manifest.toml", "package", "version");
        assert!(matches!(strategy.attempt(), Err(StrategyError::Io { .. })));
    }

    #[test]
    fn missing_key_is_unavailable() {
        let file = manifest_with("[package]\nname = \"demo\"\n");
        let strategy = ManifestField::new(file.path(), "package", "version");
        assert!(matches!(
            strategy.attempt(),
            Err(StrategyError::MissingField { .. })
        ));
    }

    #[test]
    fn comment_lines_are_skipped() {
        let file = manifest_with("[package]\n# version = \"0.1.0\"\nversion = \"3.2.1\"\n");
        let strategy = ManifestField::new(file.path(), "package", "version");
        assert_eq!(strategy.attempt().unwrap(), "3.2.1");
    }

    #[test]
    fn describe_names_the_path() {
        let strategy = ManifestField::new("Cargo.toml", "package", "name");
        assert_eq!(strategy.describe(), "manifest:Cargo.toml");
    }
}
