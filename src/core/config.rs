//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.factfinder/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FactFinderConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SubmissionConfig {
    pub webhook_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExportConfig {
    pub directory: Option<PathBuf>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Where submissions POST to. `None` means Submit completes locally.
    pub webhook_url: Option<String>,
    /// Where the JSON and HTML exports are written.
    pub export_dir: PathBuf,
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

/// Returns the path to `~/.factfinder/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".factfinder").join("config.toml"))
}

/// Load config from `~/.factfinder/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FactFinderConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FactFinderConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FactFinderConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FactFinderConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FactFinderConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Fact Finder Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [submission]
# webhook_url = "https://hooks.example.com/intake"   # Or set FACTFINDER_WEBHOOK_URL

# [export]
# directory = "/home/clare/Documents/ipw"            # Defaults to your download folder
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_webhook` is the `--webhook` flag (None = not specified). An empty
/// webhook string at any layer counts as unset, so an env var can be blanked
/// out to force offline behaviour.
pub fn resolve(config: &FactFinderConfig, cli_webhook: Option<&str>) -> ResolvedConfig {
    // Webhook: CLI → env → config → none
    let webhook_url = cli_webhook
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FACTFINDER_WEBHOOK_URL").ok())
        .or_else(|| config.submission.webhook_url.clone())
        .filter(|url| !url.is_empty());

    // Export directory: config → download folder → current directory
    let export_dir = config
        .export
        .directory
        .clone()
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    ResolvedConfig {
        webhook_url,
        export_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FactFinderConfig::default();
        assert!(config.submission.webhook_url.is_none());
        assert!(config.export.directory.is_none());
    }

    #[test]
    fn test_resolve_cli_webhook_wins() {
        let config = FactFinderConfig {
            submission: SubmissionConfig {
                webhook_url: Some("https://config.example.com/hook".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("https://cli.example.com/hook"));
        assert_eq!(
            resolved.webhook_url.as_deref(),
            Some("https://cli.example.com/hook")
        );
    }

    #[test]
    fn test_resolve_falls_back_to_config_webhook() {
        let config = FactFinderConfig {
            submission: SubmissionConfig {
                webhook_url: Some("https://config.example.com/hook".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(
            resolved.webhook_url.as_deref(),
            Some("https://config.example.com/hook")
        );
    }

    #[test]
    fn test_resolve_empty_webhook_counts_as_unset() {
        let config = FactFinderConfig::default();
        let resolved = resolve(&config, Some(""));
        assert!(resolved.webhook_url.is_none());
    }

    #[test]
    fn test_resolve_export_dir_prefers_config() {
        let config = FactFinderConfig {
            export: ExportConfig {
                directory: Some(PathBuf::from("/tmp/ipw-exports")),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.export_dir, PathBuf::from("/tmp/ipw-exports"));
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[submission]
webhook_url = "https://hooks.example.com/intake"

[export]
directory = "/home/clare/Documents/ipw"
"#;
        let config: FactFinderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.submission.webhook_url.as_deref(),
            Some("https://hooks.example.com/intake")
        );
        assert_eq!(
            config.export.directory,
            Some(PathBuf::from("/home/clare/Documents/ipw"))
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[export]
directory = "/tmp"
"#;
        let config: FactFinderConfig = toml::from_str(toml_str).unwrap();
        assert!(config.submission.webhook_url.is_none());
        assert_eq!(config.export.directory, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = toml::from_str::<FactFinderConfig>("submission = 3").unwrap_err();
        assert!(err.to_string().contains("submission"));
    }
}
