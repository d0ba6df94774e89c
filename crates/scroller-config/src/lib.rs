mod appearance;

pub use appearance::{
    DEFAULT_FONT_SIZE, FONT_FAMILIES, FONT_STYLES, FONT_WEIGHTS, FontDescriptor, FontFamily,
    FontStyle, FontWeight, MAX_FONT_SIZE, MIN_FONT_SIZE, ParseRgbError, Rgb,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_SPEED_MS: u8 = 1;
pub const MAX_SPEED_MS: u8 = 100;
pub const DEFAULT_SPEED_MS: u8 = 50;

const DEFAULT_WINDOW_WIDTH: f32 = 600.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 400.0;
const MIN_WINDOW_EDGE: f32 = 200.0;

/// Settings the viewer starts with. Read once at startup and never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StartupConfig {
    #[serde(default = "default_speed")]
    pub speed_ms: u8,
    #[serde(default)]
    pub font: FontDescriptor,
    #[serde(default)]
    pub color: Rgb,
    #[serde(default)]
    pub window: WindowConfig,
}

fn default_speed() -> u8 {
    DEFAULT_SPEED_MS
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            font: FontDescriptor::default(),
            color: Rgb::default(),
            window: WindowConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl StartupConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies a speed given on the command line.
    pub fn with_speed_override(mut self, speed_ms: Option<u8>) -> Result<Self, ConfigError> {
        if let Some(speed_ms) = speed_ms {
            self.speed_ms = speed_ms;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&self.speed_ms) {
            return Err(ConfigError::SpeedOutOfRange(self.speed_ms));
        }
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&self.font.size) {
            return Err(ConfigError::FontSizeOutOfRange(self.font.size));
        }
        if !self.window.width.is_finite()
            || !self.window.height.is_finite()
            || self.window.width < MIN_WINDOW_EDGE
            || self.window.height < MIN_WINDOW_EDGE
        {
            return Err(ConfigError::WindowTooSmall {
                width: self.window.width,
                height: self.window.height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for StartupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StartupConfig(speed={}ms, font={}, color={})",
            self.speed_ms, self.font, self.color
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read startup profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse startup profile: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("scroll speed {0} ms is outside 1..=100")]
    SpeedOutOfRange(u8),
    #[error("font size {0} is outside 8..=72")]
    FontSizeOutOfRange(u16),
    #[error("window {width}x{height} is smaller than 200px on a side")]
    WindowTooSmall { width: f32, height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn empty_profile_uses_defaults() {
        let config = StartupConfig::from_toml_str("").unwrap();
        assert_eq!(config, StartupConfig::default());
        assert_eq!(config.speed_ms, DEFAULT_SPEED_MS);
    }

    #[test]
    fn profile_overrides_font_and_color() {
        let config = StartupConfig::from_toml_str(
            r##"
            speed_ms = 20
            color = "#FFCC00"

            [font]
            family = "monospace"
            size = 24
            weight = "bold"
            "##,
        )
        .unwrap();

        assert_eq!(config.speed_ms, 20);
        assert_eq!(config.color, Rgb::new(255, 204, 0));
        assert_eq!(config.font.family, FontFamily::Monospace);
        assert_eq!(config.font.size, 24);
        assert_eq!(config.font.weight, FontWeight::Bold);
        assert_eq!(config.font.style, FontStyle::Normal);
    }

    #[test]
    fn out_of_range_speed_is_rejected() {
        let err = StartupConfig::from_toml_str("speed_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::SpeedOutOfRange(0)));

        let err = StartupConfig::default()
            .with_speed_override(Some(101))
            .unwrap_err();
        assert!(matches!(err, ConfigError::SpeedOutOfRange(101)));
    }

    #[test]
    fn unknown_keys_and_bad_colors_fail_to_parse() {
        assert!(matches!(
            StartupConfig::from_toml_str("sped_ms = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            StartupConfig::from_toml_str("color = \"blue\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn tiny_window_is_rejected() {
        let err = StartupConfig::from_toml_str("[window]\nwidth = 10.0\nheight = 400.0")
            .unwrap_err();
        assert!(matches!(err, ConfigError::WindowTooSmall { .. }));
    }

    #[test]
    fn load_reads_profile_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scroller.toml");
        fs::write(&path, "speed_ms = 7\n").unwrap();

        let config = StartupConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.speed_ms, 7);

        let missing = StartupConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Io { .. }));
    }
}
