//! Configuration loading, validation, and management for CourseRAG.
//!
//! Loads configuration from `~/.courserag/config.toml` (or an explicit path)
//! with environment variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.courserag/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Session history configuration
    #[serde(default)]
    pub session: SessionConfig,

    /// Course catalog served by `/api/courses`
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Developer tooling (`format` and `lint` commands)
    #[serde(default)]
    pub tooling: ToolingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Maximum accepted request body size.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8000
}
fn default_body_limit() -> usize {
    1024 * 1024
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of most recent exchanges included in rendered history.
    #[serde(default = "default_max_history")]
    pub max_history: usize,
}

fn default_max_history() -> usize {
    2
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub course_titles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolingConfig {
    /// Directories searched (recursively) for `.rs` files.
    #[serde(default = "default_source_roots")]
    pub source_roots: Vec<String>,

    #[serde(default = "default_format_steps")]
    pub format: Vec<ToolStep>,

    #[serde(default = "default_lint_steps")]
    pub lint: Vec<ToolStep>,
}

fn default_source_roots() -> Vec<String> {
    vec!["crates".into()]
}

fn default_format_steps() -> Vec<ToolStep> {
    vec![ToolStep {
        description: "rustfmt formatter".into(),
        program: "rustfmt".into(),
        args: vec!["--edition".into(), "2024".into()],
        check_args: vec!["--check".into()],
        pass_files: true,
        advisory: false,
    }]
}

fn default_lint_steps() -> Vec<ToolStep> {
    vec![
        ToolStep {
            description: "clippy linter".into(),
            program: "cargo".into(),
            args: vec![
                "clippy".into(),
                "--workspace".into(),
                "--all-targets".into(),
                "--".into(),
                "-D".into(),
                "warnings".into(),
            ],
            check_args: vec![],
            pass_files: false,
            advisory: false,
        },
        ToolStep {
            description: "cargo type checker".into(),
            program: "cargo".into(),
            args: vec!["check".into(), "--workspace".into(), "--all-targets".into()],
            check_args: vec![],
            pass_files: false,
            advisory: true,
        },
    ]
}

impl Default for ToolingConfig {
    fn default() -> Self {
        Self {
            source_roots: default_source_roots(),
            format: default_format_steps(),
            lint: default_lint_steps(),
        }
    }
}

/// One external command run by the `format` or `lint` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolStep {
    /// Human-readable name printed in the banner.
    pub description: String,

    /// Executable to run.
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Extra arguments added in check-only mode.
    #[serde(default)]
    pub check_args: Vec<String>,

    /// Append every discovered source file to the command line.
    #[serde(default)]
    pub pass_files: bool,

    /// A failing advisory step is reported but does not fail the run.
    #[serde(default)]
    pub advisory: bool,
}

impl AppConfig {
    /// Load from a specific path, then apply environment overrides.
    ///
    /// Environment variables override the file:
    /// - `COURSERAG_HOST`
    /// - `COURSERAG_PORT`
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("COURSERAG_HOST") {
            self.gateway.host = host;
        }

        if let Ok(port) = std::env::var("COURSERAG_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.gateway.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid COURSERAG_PORT"),
            }
        }
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".courserag")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.port == 0 {
            return Err(ConfigError::ValidationError(
                "gateway.port must be non-zero".into(),
            ));
        }

        if self.gateway.body_limit_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "gateway.body_limit_bytes must be > 0".into(),
            ));
        }

        if self.session.max_history == 0 {
            return Err(ConfigError::ValidationError(
                "session.max_history must be at least 1".into(),
            ));
        }

        let mut steps = self.tooling.format.iter().chain(&self.tooling.lint);
        if let Some(step) = steps.find(|s| s.program.trim().is_empty()) {
            return Err(ConfigError::ValidationError(format!(
                "tooling step '{}' has an empty program",
                step.description
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.gateway.port, 8000);
        assert_eq!(config.session.max_history, 2);
        assert!(config.catalog.course_titles.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.gateway.port, config.gateway.port);
        assert_eq!(parsed.tooling.lint, config.tooling.lint);
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.gateway.host, "127.0.0.1");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[gateway]
port = 9100

[catalog]
course_titles = ["Deep Learning Specialization", "NLP with Deep Learning"]
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.gateway.port, 9100);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.catalog.course_titles.len(), 2);
        assert_eq!(config.session.max_history, 2);
    }

    #[test]
    fn zero_history_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nmax_history = 0\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gateway\nport = ").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn empty_tool_program_rejected() {
        let mut config = AppConfig::default();
        config.tooling.lint.push(ToolStep {
            description: "broken".into(),
            program: "  ".into(),
            args: vec![],
            check_args: vec![],
            pass_files: false,
            advisory: true,
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn default_lint_marks_type_check_advisory() {
        let tooling = ToolingConfig::default();
        assert_eq!(tooling.lint.len(), 2);
        assert!(!tooling.lint[0].advisory);
        assert!(tooling.lint[1].advisory);
        assert!(tooling.format[0].pass_files);
    }

    #[test]
    fn default_toml_generation() {
        let toml = AppConfig::default_toml();
        assert!(toml.contains("[gateway]"));
        assert!(toml.contains("max_history"));
    }
}
