//! # Configuration
//!
//! Host settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Settings live at `~/.config/blezz/config.toml`. If missing on first run,
//! a commented-out default is generated so users can discover all options.
//! This is separate from the *content* file, which describes the menus.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::executor::DEFAULT_SHELL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BlezzConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path of the content file.
    pub content: Option<String>,
    /// Directory to open instead of the first one declared.
    pub directory: Option<String>,
    pub shell: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONTENT_PATH: &str = "~/.config/blezz/content";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub content_path: PathBuf,
    pub start_directory: Option<String>,
    pub shell: String,
    pub log_file: PathBuf,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides<'a> {
    pub content: Option<&'a str>,
    pub directory: Option<&'a str>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.config/blezz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("blezz").join("config.toml"))
}

/// Load config from `~/.config/blezz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BlezzConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BlezzConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine config directory, using default config");
            return Ok(BlezzConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<BlezzConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(BlezzConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: BlezzConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# blezz configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# content = "~/.config/blezz/content"   # Or BLEZZ_CONTENT / --content
# directory = "Developer"               # Start here instead of the first directory
# shell = "sh"                          # Runs act(...) commands as `<shell> -c <command>`
# log_file = "~/.cache/blezz/blezz.log"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BlezzConfig, cli: CliOverrides<'_>) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &BlezzConfig,
    cli: CliOverrides<'_>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Content: CLI → env → config → default
    let content = cli
        .content
        .map(|s| s.to_string())
        .or_else(|| env("BLEZZ_CONTENT"))
        .or_else(|| config.general.content.clone())
        .unwrap_or_else(|| DEFAULT_CONTENT_PATH.to_string());

    // Start directory: CLI → env → config → none
    let start_directory = cli
        .directory
        .map(|s| s.to_string())
        .or_else(|| env("BLEZZ_DIRECTORY"))
        .or_else(|| config.general.directory.clone());

    // Shell: env → config → default
    let shell = env("BLEZZ_SHELL")
        .or_else(|| config.general.shell.clone())
        .unwrap_or_else(|| DEFAULT_SHELL.to_string());

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(expand_path)
        .unwrap_or_else(default_log_file);

    ResolvedConfig {
        content_path: expand_path(&content),
        start_directory,
        shell,
        log_file,
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .map(|d| d.join("blezz").join("blezz.log"))
        .unwrap_or_else(|| PathBuf::from("blezz.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = BlezzConfig::default();
        assert!(config.general.content.is_none());
        assert!(config.general.directory.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&BlezzConfig::default(), CliOverrides::default(), no_env);
        assert_eq!(resolved.content_path, expand_path(DEFAULT_CONTENT_PATH));
        assert!(resolved.content_path.ends_with(".config/blezz/content"));
        assert_eq!(resolved.start_directory, None);
        assert_eq!(resolved.shell, "sh");
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = BlezzConfig {
            general: GeneralConfig {
                content: Some("/etc/blezz/content".to_string()),
                directory: Some("Developer".to_string()),
                shell: Some("bash".to_string()),
                log_file: Some("/tmp/blezz-test.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.content_path, PathBuf::from("/etc/blezz/content"));
        assert_eq!(resolved.start_directory.as_deref(), Some("Developer"));
        assert_eq!(resolved.shell, "bash");
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/blezz-test.log"));
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = BlezzConfig {
            general: GeneralConfig {
                content: Some("/from/config".to_string()),
                directory: Some("FromConfig".to_string()),
                ..Default::default()
            },
        };
        let env = |key: &str| match key {
            "BLEZZ_CONTENT" => Some("/from/env".to_string()),
            "BLEZZ_DIRECTORY" => Some("FromEnv".to_string()),
            "BLEZZ_SHELL" => Some("zsh".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.content_path, PathBuf::from("/from/env"));
        assert_eq!(resolved.start_directory.as_deref(), Some("FromEnv"));
        assert_eq!(resolved.shell, "zsh");

        let cli = CliOverrides {
            content: Some("/from/cli"),
            directory: Some("FromCli"),
        };
        let resolved = resolve_with_env(&config, cli, env);
        assert_eq!(resolved.content_path, PathBuf::from("/from/cli"));
        assert_eq!(resolved.start_directory.as_deref(), Some("FromCli"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
shell = "dash"
"#;
        let config: BlezzConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.shell.as_deref(), Some("dash"));
        assert!(config.general.content.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: BlezzConfig = toml::from_str("").unwrap();
        assert!(config.general.directory.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: BlezzConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.content.is_none());
    }

    #[test]
    fn test_load_config_generates_default_when_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("blezz").join("config.toml");
        let config = load_config_from(&path).unwrap();
        assert!(config.general.shell.is_none());
        assert!(path.exists());
    }

    #[test]
    fn test_load_config_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\nshell = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_expand_path_leaves_absolute_paths() {
        assert_eq!(expand_path("/abs/path"), PathBuf::from("/abs/path"));
    }
}
