//! cardlink runtime configuration handling

use crate::error::{Error, Result};
use crate::qr::{BackendKind, EcLevel, QrColor, QrStyle};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level configuration structure persisted to disk or environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardlinkConfig {
    /// Portfolio URL resolution overrides
    pub site: SiteOptions,
    /// QR symbol styling and backend selection
    pub qr: QrOptions,
    /// PNG export configuration
    pub export: ExportOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl CardlinkConfig {
    /// Load configuration from an explicit path or fall back to discovered defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit_path {
            Self::from_file(path)?
        } else if let Some(path) = Self::discover_file()? {
            tracing::info!("Using configuration file: {}", path.display());
            Self::from_file(&path)?
        } else {
            tracing::debug!("No cardlink.toml / cardlink.yaml found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Attempt to locate a configuration file in common locations.
    fn discover_file() -> Result<Option<PathBuf>> {
        let cwd =
            env::current_dir().map_err(|e| Error::Config(format!("Failed to read cwd: {e}")))?;
        for candidate in ["cardlink.toml", "cardlink.yaml", "cardlink.yml"] {
            let path = cwd.join(candidate);
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if let Some(xdg_config) = env::var_os("XDG_CONFIG_HOME") {
            let base = PathBuf::from(xdg_config).join("cardlink");
            for candidate in ["config.toml", "config.yaml"] {
                let path = base.join(candidate);
                if path.exists() {
                    return Ok(Some(path));
                }
            }
        }

        Ok(None)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }

    /// Apply environment variable overrides after file/default loading.
    fn apply_env_overrides(&mut self) {
        self.site.apply_env_overrides();
        self.qr.apply_env_overrides();
        self.export.apply_env_overrides();
        self.logging.apply_env_overrides();
    }
}

/// Where the encoded portfolio URL comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Canonical origin of the deployed portfolio. Falls back to the
    /// published address when unset.
    pub origin: Option<String>,
}

impl SiteOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(origin) = env::var("CARDLINK_ORIGIN") {
            self.origin = Some(origin);
        }
    }
}

/// QR styling overrides merged on top of the published defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QrOptions {
    /// Rendering backend used by both views
    pub backend: BackendKind,
    /// Symbol edge length on the landing view, in pixels
    pub landing_size: u32,
    /// Symbol edge length on the dedicated QR view, in pixels
    pub page_size: u32,
    /// Error-correction level
    pub ec_level: EcLevel,
    /// Module color as a hex triplet
    pub foreground: String,
    /// Background color as a hex triplet
    pub background: String,
    /// Whether a quiet-zone margin surrounds the symbol
    pub quiet_zone: bool,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            landing_size: 220,
            page_size: 280,
            ec_level: EcLevel::default(),
            foreground: "#1a237e".to_string(),
            background: "#ffffff".to_string(),
            quiet_zone: true,
        }
    }
}

impl QrOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(backend) = env::var("CARDLINK_QR_BACKEND") {
            if let Some(parsed) = BackendKind::parse(&backend) {
                self.backend = parsed;
            }
        }
        if let Ok(level) = env::var("CARDLINK_QR_EC_LEVEL") {
            if let Some(parsed) = EcLevel::parse(&level) {
                self.ec_level = parsed;
            }
        }
        if let Ok(fg) = env::var("CARDLINK_QR_FOREGROUND") {
            self.foreground = fg;
        }
        if let Ok(bg) = env::var("CARDLINK_QR_BACKGROUND") {
            self.background = bg;
        }
    }

    /// Resolve the style applied at `size`, parsing the color triplets.
    pub fn style_at(&self, size: u32) -> Result<QrStyle> {
        Ok(QrStyle {
            size,
            ec_level: self.ec_level,
            foreground: QrColor::from_hex(&self.foreground)?,
            background: QrColor::from_hex(&self.background)?,
            quiet_zone: self.quiet_zone,
        })
    }

    /// Style used by the landing view's inline panel.
    pub fn landing_style(&self) -> Result<QrStyle> {
        self.style_at(self.landing_size)
    }

    /// Style used by the dedicated QR view.
    pub fn page_style(&self) -> Result<QrStyle> {
        self.style_at(self.page_size)
    }
}

/// PNG export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Directory the artifact is written into
    pub out_dir: PathBuf,
    /// Decode each exported artifact and check it against the portfolio URL
    pub verify: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            verify: false,
        }
    }
}

impl ExportOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(dir) = env::var("CARDLINK_OUT_DIR") {
            if !dir.trim().is_empty() {
                self.out_dir = PathBuf::from(dir);
            }
        }
        if let Ok(verify) = env::var("CARDLINK_QR_VERIFY") {
            match verify.to_ascii_lowercase().as_str() {
                "1" | "true" | "on" => self.verify = true,
                "0" | "false" | "off" => self.verify = false,
                _ => {}
            }
        }
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `CARDLINK_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in stderr logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("CARDLINK_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("CARDLINK_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("CARDLINK_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("CARDLINK_LOG_ROTATION") {
            if let Ok(parsed) = rotation.parse::<LogRotation>() {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl FromStr for LogRotation {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            other => Err(format!(
                "Unsupported rotation '{other}', expected 'hourly' or 'daily'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_card() {
        let config = CardlinkConfig::default();
        assert!(config.site.origin.is_none());
        assert_eq!(config.qr.landing_size, 220);
        assert_eq!(config.qr.page_size, 280);
        assert_eq!(config.qr.ec_level, EcLevel::High);
        assert_eq!(config.qr.foreground, "#1a237e");
        assert!(!config.export.verify);
    }

    #[test]
    fn toml_sections_merge_onto_defaults() {
        let config: CardlinkConfig = toml::from_str(
            r#"
            [site]
            origin = "https://cards.example.com"

            [qr]
            backend = "vector"
            page_size = 512

            [export]
            verify = true
            "#,
        )
        .unwrap();

        assert_eq!(config.site.origin.as_deref(), Some("https://cards.example.com"));
        assert_eq!(config.qr.backend, BackendKind::Vector);
        assert_eq!(config.qr.page_size, 512);
        // untouched sections keep their defaults
        assert_eq!(config.qr.landing_size, 220);
        assert!(config.export.verify);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn yaml_is_accepted_too() {
        let config: CardlinkConfig = serde_yaml::from_str(
            "qr:\n  ec_level: quartile\nlogging:\n  level: debug\n",
        )
        .unwrap();
        assert_eq!(config.qr.ec_level, EcLevel::Quartile);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn styles_carry_parsed_colors_and_per_view_sizes() {
        let options = QrOptions::default();
        let landing = options.landing_style().unwrap();
        let page = options.page_style().unwrap();
        assert_eq!(landing.size, 220);
        assert_eq!(page.size, 280);
        assert_eq!(landing.foreground, page.foreground);
    }

    #[test]
    fn malformed_color_is_a_config_error() {
        let options = QrOptions {
            foreground: "#blue".to_string(),
            ..QrOptions::default()
        };
        assert!(matches!(options.landing_style(), Err(Error::Config(_))));
    }
}
