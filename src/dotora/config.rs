//! Configuration loader
//!
//! `defaults/dotora.default.toml` is embedded into the binary so the documented defaults and
//! the runtime behavior stay in sync. A user file and command-line overrides are layered on
//! top through [Loader] before deserializing into [DotOraConfig].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::dotora::ast::Result;

const DEFAULT_TOML: &str = include_str!("../../defaults/dotora.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct DotOraConfig {
    pub write: WriteConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// How edited files are written back
#[derive(Debug, Clone, Deserialize)]
pub struct WriteConfig {
    pub backup: bool,
    pub backup_suffix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    Yaml,
    Text,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Where the per-user configuration lives, if a home can be found
///
/// `$XDG_CONFIG_HOME/dotora/dotora.toml`, else `$HOME/.config/dotora/dotora.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    config_path_in(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
}

fn config_path_in(xdg: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = match xdg.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from(home.filter(|dir| !dir.is_empty())?).join(".config"),
    };
    Some(base.join("dotora").join("dotora.toml"))
}

/// Stacks TOML sources on top of the embedded defaults; later sources win
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file that must exist, such as one named by `--config`
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Add a TOML file that is skipped when absent, such as [user_config_path]
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Pin `key` (dotted, e.g. `write.backup`) above every file
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<DotOraConfig> {
        let merged = self.builder.build()?;
        Ok(merged.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_default_config() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert!(!config.write.backup);
        assert_eq!(config.write.backup_suffix, "%Y-%m-%d@%H:%M:%S~");
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_overrides_win() {
        let config = Loader::new()
            .set_override("write.backup", true)
            .unwrap()
            .set_override("report.format", "yaml")
            .unwrap()
            .build()
            .unwrap();
        assert!(config.write.backup);
        assert_eq!(config.report.format, ReportFormat::Yaml);
    }

    #[test]
    fn test_user_file_is_layered() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn test_missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/dotora.toml")
            .build()
            .unwrap();
        assert!(!config.write.backup);
    }

    #[test]
    fn test_invalid_format_is_an_error() {
        let result = Loader::new()
            .set_override("report.format", "xml")
            .unwrap()
            .build();
        assert!(matches!(result, Err(crate::dotora::ast::DotOraError::Config(_))));
    }

    #[test]
    fn test_user_config_prefers_xdg() {
        let path = config_path_in(Some("/xdg".into()), Some("/home/me".into()));
        assert_eq!(path, Some(PathBuf::from("/xdg/dotora/dotora.toml")));
    }

    #[test]
    fn test_user_config_falls_back_to_home() {
        let path = config_path_in(Some("".into()), Some("/home/me".into()));
        assert_eq!(path, Some(PathBuf::from("/home/me/.config/dotora/dotora.toml")));
        assert_eq!(config_path_in(None, None), None);
    }
}
