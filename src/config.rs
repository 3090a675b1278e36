//! Application configuration read from an optional JSON file.

use crate::charts::{ChartStyle, Rgb};
use crate::data::Grouping;
use crate::view::DEFAULT_KIND;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid colour '{0}', expected #rrggbb")]
    Color(String),
}

/// User settings; every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Kind charted when the chart view is first opened
    pub default_kind: String,
    pub grouping: Grouping,
    pub window_size: [f32; 2],
    /// PNG export size in pixels
    pub export_size: [u32; 2],
    pub tick_color: String,
    pub bar_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_kind: DEFAULT_KIND.to_string(),
            grouping: Grouping::Player,
            window_size: [1280.0, 760.0],
            export_size: [1200, 700],
            tick_color: "#ffffff".to_string(),
            bar_color: "#36a2eb".to_string(),
        }
    }
}

impl AppConfig {
    /// Looked up in the working directory when no path is given.
    pub const FILE_NAME: &'static str = "match_charts.json";

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else [`AppConfig::FILE_NAME`] if it exists,
    /// else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(Self::FILE_NAME);
                if local.exists() {
                    Self::load(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn chart_style(&self) -> Result<ChartStyle, ConfigError> {
        let parse = |text: &str| Rgb::parse_hex(text).ok_or_else(|| ConfigError::Color(text.to_string()));
        Ok(ChartStyle {
            bar_color: parse(&self.bar_color)?,
            tick_color: parse(&self.tick_color)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_kind": "kills", "grouping": "team"}"#).unwrap();

        let config = AppConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.default_kind, "kills");
        assert_eq!(config.grouping, Grouping::Team);
        assert_eq!(config.export_size, AppConfig::default().export_size);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            AppConfig::load_or_default(Some(&missing)),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn default_style_has_white_ticks() {
        let style = AppConfig::default().chart_style().unwrap();
        assert_eq!(style.tick_color, Rgb::WHITE);
    }

    #[test]
    fn bad_colour_is_reported() {
        let config = AppConfig {
            bar_color: "blue".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.chart_style(), Err(ConfigError::Color(c)) if c == "blue"));
    }
}
