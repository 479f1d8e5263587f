//! Site configuration.
//!
//! Parses `guidemark.toml` with serde. Relative paths in the file are
//! resolved against the file's directory; without a file they resolve
//! against the current directory.
//!
//! CLI settings are applied last via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "guidemark.toml";

const DEFAULT_SOURCE_DIR: &str = "markdown_content";
const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_INDEX_DIR: &str = "user_guide";
const DEFAULT_SITE_NAME: &str = "Documentation";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config. `disabled` slugs are
/// added to the configured ones.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override output root.
    pub output_dir: Option<PathBuf>,
    /// Override site name.
    pub site_name: Option<String>,
    /// Extra slugs to publish as "coming soon".
    pub disabled: Vec<String>,
    /// Override heading id generation.
    pub heading_ids: Option<bool>,
}

/// Raw configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct SiteConfigRaw {
    source_dir: Option<String>,
    output_dir: Option<String>,
    index_dir: Option<String>,
    site_name: Option<String>,
    disabled: Vec<String>,
    heading_ids: Option<bool>,
}

/// Resolved site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory scanned for `*.md` files.
    pub source_dir: PathBuf,
    /// Root that output paths mirror the source tree under.
    pub output_dir: PathBuf,
    /// Directory for `index.json`, relative to `output_dir`.
    pub index_dir: PathBuf,
    /// Name shown in page titles and the hero header.
    pub site_name: String,
    /// Slugs published as "coming soon".
    pub disabled: Vec<String>,
    /// Give headings `id` attributes.
    pub heading_ids: bool,
    /// Path to the config file (set after loading).
    pub config_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
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
}

impl SiteConfig {
    /// Load configuration with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise looks
    /// for `guidemark.toml` in the current directory and its parents, and
    /// falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, the file
    /// cannot be read or parsed, or validation fails.
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

        config.validate()?;
        Ok(config)
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join(&self.index_dir).join("index.json")
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Validation("site_name cannot be empty".to_owned()));
        }
        if self.index_dir.is_absolute() {
            return Err(ConfigError::Validation(format!(
                "index_dir must be relative to output_dir, got {}",
                self.index_dir.display()
            )));
        }
        if let Some(slug) = self.disabled.iter().find(|slug| slug.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "disabled contains an empty slug: {slug:?}"
            )));
        }
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.source_dir.clone_from(source_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir.clone_from(output_dir);
        }
        if let Some(site_name) = &settings.site_name {
            self.site_name.clone_from(site_name);
        }
        for slug in &settings.disabled {
            if !self.disabled.contains(slug) {
                self.disabled.push(slug.clone());
            }
        }
        if let Some(heading_ids) = settings.heading_ids {
            self.heading_ids = heading_ids;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self::from_raw(SiteConfigRaw::default(), base)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let raw: SiteConfigRaw = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_raw(raw, config_dir);
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Resolve raw values against `base`.
    fn from_raw(raw: SiteConfigRaw, base: &Path) -> Self {
        let resolve = |path: Option<&str>, default: &str| base.join(path.unwrap_or(default));

        Self {
            source_dir: resolve(raw.source_dir.as_deref(), DEFAULT_SOURCE_DIR),
            output_dir: resolve(raw.output_dir.as_deref(), DEFAULT_OUTPUT_DIR),
            index_dir: PathBuf::from(raw.index_dir.as_deref().unwrap_or(DEFAULT_INDEX_DIR)),
            site_name: raw.site_name.unwrap_or_else(|| DEFAULT_SITE_NAME.to_owned()),
            disabled: raw.disabled,
            heading_ids: raw.heading_ids.unwrap_or(true),
            config_path: None,
        }
    }
}
