//! Configuration management for robodocs.
//!
//! Parses `robodocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.output_dir`
//! - `document.source`

mod expand;

use robodocs_renderer::ExtractPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override source document path.
    pub source: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override extraction policy.
    pub policy: Option<ExtractPolicy>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "robodocs.toml";

const DEFAULT_TITLE: &str = "Android Robot Control via REST API";
const DEFAULT_OUTPUT_DIR: &str = "site";
const DEFAULT_SOURCE: &str = "docs/robot-api.md";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Source document configuration (paths are relative strings from TOML).
    document: DocumentConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved document configuration (set after loading).
    #[serde(skip)]
    pub document_resolved: DocumentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    title: Option<String>,
    output_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocumentConfigRaw {
    source: Option<String>,
    policy: Option<ExtractPolicy>,
    gfm: Option<bool>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Title shown in page headers and `<title>`.
    pub title: String,
    /// Directory the generated pages are written to.
    pub output_dir: PathBuf,
}

/// Resolved source document configuration.
#[derive(Debug, Default)]
pub struct DocumentConfig {
    /// Markdown source document.
    pub source: PathBuf,
    /// How the closing fence of the markdown block is located.
    pub policy: ExtractPolicy,
    /// Whether GitHub Flavored Markdown extensions are enabled.
    pub gfm: bool,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`document.source`").
        field: String,
        /// Error message (e.g., "${`ROBODOCS_SOURCE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `robodocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.document_resolved.source.clone_from(source);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.site_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(policy) = settings.policy {
            self.document_resolved.policy = policy;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(&current)
    }

    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            document: DocumentConfigRaw::default(),
            site_resolved: SiteConfig {
                title: DEFAULT_TITLE.to_owned(),
                output_dir: base.join(DEFAULT_OUTPUT_DIR),
            },
            document_resolved: DocumentConfig {
                source: base.join(DEFAULT_SOURCE),
                policy: ExtractPolicy::default(),
                gfm: true,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate raw configuration values.
    ///
    /// Only values present in the file are checked; missing ones fall back
    /// to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(title) = &self.site.title {
            require_non_empty(title, "site.title")?;
        }
        if let Some(output_dir) = &self.site.output_dir {
            require_non_empty(output_dir, "site.output_dir")?;
        }
        if let Some(source) = &self.document.source {
            require_non_empty(source, "document.source")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref title) = self.site.title {
            self.site.title = Some(expand::expand_env(title, "site.title")?);
        }
        if let Some(ref output_dir) = self.site.output_dir {
            self.site.output_dir = Some(expand::expand_env(output_dir, "site.output_dir")?);
        }
        if let Some(ref source) = self.document.source {
            self.document.source = Some(expand::expand_env(source, "document.source")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            title: self
                .site
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            output_dir: resolve(self.site.output_dir.as_deref(), DEFAULT_OUTPUT_DIR),
        };

        self.document_resolved = DocumentConfig {
            source: resolve(self.document.source.as_deref(), DEFAULT_SOURCE),
            policy: self.document.policy.unwrap_or_default(),
            gfm: self.document.gfm.unwrap_or(true),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site_resolved.title, DEFAULT_TITLE);
        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/test/site"));
        assert_eq!(
            config.document_resolved.source,
            PathBuf::from("/test/docs/robot-api.md")
        );
        assert_eq!(config.document_resolved.policy, ExtractPolicy::LastFence);
        assert!(config.document_resolved.gfm);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let mut config: Config = toml::from_str("").unwrap();
        config.resolve(Path::new("/project"));
        assert_eq!(config.site_resolved.title, DEFAULT_TITLE);
        assert_eq!(
            config.document_resolved.source,
            PathBuf::from("/project/docs/robot-api.md")
        );
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[site]
title = "Robot Docs"
output_dir = "public"

[document]
source = "notes/api.md"
policy = "first-fence-after-start"
gfm = false
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project"));

        assert_eq!(config.site_resolved.title, "Robot Docs");
        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/project/public"));
        assert_eq!(
            config.document_resolved.source,
            PathBuf::from("/project/notes/api.md")
        );
        assert_eq!(
            config.document_resolved.policy,
            ExtractPolicy::FirstFenceAfterStart
        );
        assert!(!config.document_resolved.gfm);
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let toml = r#"
[document]
policy = "strict"
"#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_validate_empty_title() {
        let toml = r#"
[site]
title = "  "
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title cannot be empty"));
    }

    #[test]
    fn test_validate_empty_source() {
        let toml = r#"
[document]
source = ""
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("document.source")
        ));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/robodocs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[document]\nsource = \"api.md\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.document_resolved.source, dir.path().join("api.md"));
        assert_eq!(config.site_resolved.output_dir, dir.path().join("site"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_cli_settings_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[document]\nsource = \"api.md\"\n").unwrap();

        let settings = CliSettings {
            source: Some(PathBuf::from("/elsewhere/doc.md")),
            output_dir: Some(PathBuf::from("/out")),
            policy: Some(ExtractPolicy::FirstFenceAfterStart),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(
            config.document_resolved.source,
            PathBuf::from("/elsewhere/doc.md")
        );
        assert_eq!(config.site_resolved.output_dir, PathBuf::from("/out"));
        assert_eq!(
            config.document_resolved.policy,
            ExtractPolicy::FirstFenceAfterStart
        );
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();

        assert_eq!(Config::discover_config_from(&nested), Some(path));
    }

    #[test]
    fn test_env_default_in_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[document]\nsource = \"${ROBODOCS_TEST_UNSET_SOURCE:-fallback.md}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.document_resolved.source, dir.path().join("fallback.md"));
    }

    #[test]
    fn test_env_unset_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\ntitle = \"${ROBODOCS_TEST_UNSET_TITLE}\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        match err {
            ConfigError::EnvVar { field, .. } => assert_eq!(field, "site.title"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
