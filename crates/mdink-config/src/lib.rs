//! Configuration management for mdink.
//!
//! Parses `mdink.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! theme_name = "grace"
//! primary_color = "#F6C344"
//! font_size = "15px"
//! cite = true
//!
//! [theme]
//! file = "themes/brand.toml"
//!
//! [output]
//! document = true
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `${VAR}` and `${VAR:-default}` are expanded in `theme.file`,
//! `render.font_family` and `render.code_theme`.

mod expand;

use std::path::{Path, PathBuf};

use mdink_convert::{RenderOptions, parse_font_size};
use mdink_theme::{Theme, ThemeError};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Built-in theme name. Replaces any theme file from the config.
    pub theme_name: Option<String>,
    /// Custom theme file.
    pub theme_file: Option<PathBuf>,
    pub primary_color: Option<String>,
    pub font_size: Option<String>,
    pub font_family: Option<String>,
    pub code_theme: Option<String>,
    pub legend: Option<String>,
    pub cite: Option<bool>,
    pub count_words: Option<bool>,
    pub mac_code_block: Option<bool>,
    pub use_indent: Option<bool>,
    /// Emit a full HTML page.
    pub document: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdink.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion options.
    pub render: RenderOptions,
    /// Theme file section (path relative to the config file).
    theme: ThemeConfigRaw,
    /// Output configuration.
    pub output: OutputConfig,

    /// Resolved custom theme path (set after loading).
    #[serde(skip)]
    pub theme_file: Option<PathBuf>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeConfigRaw {
    file: Option<String>,
}

/// Output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Wrap the article in a standalone HTML page.
    pub document: bool,
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
    /// Custom theme could not be loaded.
    #[error(transparent)]
    Theme(#[from] ThemeError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.file`").
        field: String,
        /// Error message (e.g., "${`THEME_DIR`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdink.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated last.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the merged configuration is invalid.
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
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Conversion options with the custom theme file loaded, if any.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Theme` if the theme file cannot be read or parsed.
    pub fn render_options(&self) -> Result<RenderOptions, ConfigError> {
        let mut options = self.render.clone();
        if let Some(path) = &self.theme_file {
            options.theme = Some(Theme::from_file(path)?);
        }
        Ok(options)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(theme_name) = &settings.theme_name {
            self.render.theme_name = Some(theme_name.clone());
            self.render.theme = None;
            self.theme_file = None;
        }
        if let Some(theme_file) = &settings.theme_file {
            self.theme_file = Some(theme_file.clone());
        }
        if let Some(primary_color) = &settings.primary_color {
            self.render.primary_color = Some(primary_color.clone());
        }
        if let Some(font_size) = &settings.font_size {
            self.render.font_size = Some(font_size.clone());
        }
        if let Some(font_family) = &settings.font_family {
            self.render.font_family = Some(font_family.clone());
        }
        if let Some(code_theme) = &settings.code_theme {
            self.render.code_theme = Some(code_theme.clone());
        }
        if let Some(legend) = &settings.legend {
            self.render.legend.clone_from(legend);
        }
        if let Some(cite) = settings.cite {
            self.render.cite = cite;
        }
        if let Some(count_words) = settings.count_words {
            self.render.count_words = count_words;
        }
        if let Some(mac_code_block) = settings.mac_code_block {
            self.render.mac_code_block = mac_code_block;
        }
        if let Some(use_indent) = settings.use_indent {
            self.render.use_indent = use_indent;
        }
        if let Some(document) = settings.document {
            self.output.document = document;
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

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.render.legend, "render.legend")?;

        if let Some(font_size) = &self.render.font_size
            && parse_font_size(font_size).is_err()
        {
            return Err(ConfigError::Validation(format!(
                "render.font_size must be a pixel value such as 15px, got '{font_size}'"
            )));
        }

        if let Some(path) = &self.theme_file
            && !path.is_file()
        {
            return Err(ConfigError::Validation(format!(
                "theme.file does not exist: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref file) = self.theme.file {
            self.theme.file = Some(expand::expand_env(file, "theme.file")?);
        }
        if let Some(ref family) = self.render.font_family {
            self.render.font_family = Some(expand::expand_env(family, "render.font_family")?);
        }
        if let Some(ref code_theme) = self.render.code_theme {
            self.render.code_theme = Some(expand::expand_env(code_theme, "render.code_theme")?);
        }
        Ok(())
    }

    /// Resolve the theme file path relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.theme_file = self.theme.file.as_deref().map(|file| config_dir.join(file));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.render, RenderOptions::default());
        assert!(!config.output.document);
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn test_parse_render_config() {
        let toml = r##"
[render]
theme_name = "grace"
primary_color = "#F6C344"
font_size = "15px"
cite = true
legend = "title-alt"

[output]
document = true
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.render.theme_name.as_deref(), Some("grace"));
        assert_eq!(config.render.primary_color.as_deref(), Some("#F6C344"));
        assert_eq!(config.render.font_size.as_deref(), Some("15px"));
        assert!(config.render.cite);
        assert!(!config.render.count_words);
        assert_eq!(config.render.legend, "title-alt");
        assert!(config.output.document);
    }

    #[test]
    fn test_resolve_theme_path() {
        let toml = r#"
[theme]
file = "themes/brand.toml"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(
            config.theme_file,
            Some(PathBuf::from("/project/themes/brand.toml"))
        );
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        config.render.primary_color = Some("#111111".to_owned());
        let overrides = CliSettings {
            cite: Some(true),
            font_size: Some("18px".to_owned()),
            document: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(config.render.cite);
        assert_eq!(config.render.font_size.as_deref(), Some("18px"));
        assert!(config.output.document);
        assert_eq!(config.render.primary_color.as_deref(), Some("#111111")); // Unchanged
    }

    #[test]
    fn test_cli_theme_name_replaces_theme_file() {
        let mut config = Config {
            theme_file: Some(PathBuf::from("/project/brand.toml")),
            ..Default::default()
        };
        config.apply_cli_settings(&CliSettings {
            theme_name: Some("simple".to_owned()),
            ..Default::default()
        });
        assert_eq!(config.render.theme_name.as_deref(), Some("simple"));
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_legend() {
        let mut config = Config::default();
        config.render.legend = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("render.legend"));
    }

    #[test]
    fn test_validate_rejects_bad_font_size() {
        let mut config = Config::default();
        config.render.font_size = Some("1.5em".to_owned());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("render.font_size"));
    }

    #[test]
    fn test_validate_rejects_missing_theme_file() {
        let config = Config {
            theme_file: Some(PathBuf::from("/nonexistent/theme.toml")),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("theme.file"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/mdink.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_with_theme() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("brand.toml"),
            "[block.p]\n\"color\" = \"navy\"\n",
        )
        .unwrap();
        let config_path = dir.path().join("mdink.toml");
        std::fs::write(
            &config_path,
            "[render]\ncount_words = true\n\n[theme]\nfile = \"brand.toml\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path), None).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(config_path.as_path()));
        assert!(config.render.count_words);

        let options = config.render_options().unwrap();
        let theme = options.theme.unwrap();
        assert_eq!(theme.block["p"]["color"], "navy");
    }

    #[test]
    fn test_load_validates_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("mdink.toml");
        std::fs::write(&config_path, "").unwrap();

        let settings = CliSettings {
            font_size: Some("huge".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&config_path), Some(&settings)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("mdink.toml");
        std::fs::write(&config_path, "[render\n").unwrap();
        let err = Config::load(Some(&config_path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
