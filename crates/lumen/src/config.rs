//! # Application Configuration
//!
//! One TOML file drives the whole page: scene generation, reveal timing and
//! the headless preview run. Every table and key is optional.
//!
//! ```toml
//! [scene]
//! seed = 2024
//!
//! [scene.graph]
//! node_count = 80
//!
//! [reveal.trigger]
//! threshold = 0.2
//!
//! [preview]
//! frames = 600
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use lumen_procedural::GeneratorConfig;

use crate::error::{LumenError, LumenResult};
use crate::reveal::RevealConfig;

/// Headless preview run settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Frames to simulate.
    pub frames: u32,
    /// Simulated frames per second.
    pub frame_rate: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Height of each page section in pixels.
    pub section_height: f32,
    /// Pixels scrolled per frame.
    pub scroll_speed: f32,
}

impl PreviewConfig {
    /// Slowest simulated frame rate accepted.
    pub const MIN_FRAME_RATE: f32 = 1.0;
    /// Fastest simulated frame rate accepted.
    pub const MAX_FRAME_RATE: f32 = 1000.0;

    /// Checks that the run can be simulated.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::InvalidPreview`] for a frame rate outside
    /// `[MIN_FRAME_RATE, MAX_FRAME_RATE]`, a non-positive viewport or section
    /// size, or a negative scroll speed. Non-finite values are rejected.
    pub fn validate(&self) -> LumenResult<()> {
        let invalid = |reason: String| Err(LumenError::InvalidPreview(reason));

        if !(Self::MIN_FRAME_RATE..=Self::MAX_FRAME_RATE).contains(&self.frame_rate) {
            return invalid(format!(
                "frame_rate must be in [{}, {}], got {}",
                Self::MIN_FRAME_RATE,
                Self::MAX_FRAME_RATE,
                self.frame_rate
            ));
        }
        for (name, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("section_height", self.section_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{name} must be positive, got {value}"));
            }
        }
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return invalid(format!(
                "scroll_speed must be non-negative, got {}",
                self.scroll_speed
            ));
        }
        Ok(())
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            frames: 360,
            frame_rate: 60.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
            section_height: 900.0,
            scroll_speed: 12.0,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LumenConfig {
    /// Hero scene generation.
    pub scene: GeneratorConfig,
    /// Section reveal behaviour.
    pub reveal: RevealConfig,
    /// Preview run.
    pub preview: PreviewConfig,
}

impl LumenConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, or out-of-range
    /// scene or preview settings.
    pub fn from_toml_str(text: &str) -> LumenResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.scene.validate()?;
        config.preview.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails
    /// [`LumenConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> LumenResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LumenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Seconds per simulated preview frame. The rate is clamped to the
    /// accepted range, so the interval is at most one second.
    #[must_use]
    pub fn frame_interval(&self) -> f32 {
        let rate = if self.preview.frame_rate.is_nan() {
            PreviewConfig::default().frame_rate
        } else {
            self.preview
                .frame_rate
                .clamp(PreviewConfig::MIN_FRAME_RATE, PreviewConfig::MAX_FRAME_RATE)
        };
        1.0 / rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = LumenConfig::from_toml_str("").unwrap();
        assert_eq!(config, LumenConfig::default());
        assert_eq!(config.scene.graph.node_count, 50);
        assert!((config.frame_interval() - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn test_nested_tables() {
        let config = LumenConfig::from_toml_str(
            r#"
            [scene]
            seed = 7

            [scene.graph]
            node_count = 12

            [reveal.trigger]
            threshold = 0.3

            [preview]
            frames = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.scene.seed, Some(7));
        assert_eq!(config.scene.graph.node_count, 12);
        assert!((config.reveal.trigger.threshold - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.preview.frames, 10);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = LumenConfig::from_toml_str("[preview]\nfps = 30\n").unwrap_err();
        assert!(matches!(err, LumenError::Parse(_)));
    }

    #[test]
    fn test_invalid_scene_rejected() {
        let err = LumenConfig::from_toml_str("[scene.graph]\nedge_probability = 2.0\n").unwrap_err();
        assert!(matches!(err, LumenError::Scene(_)));
    }

    #[test]
    fn test_tiny_frame_rate_rejected() {
        let err = LumenConfig::from_toml_str("[preview]\nframe_rate = 1e-30\n").unwrap_err();
        assert!(matches!(err, LumenError::InvalidPreview(_)));

        let err = LumenConfig::from_toml_str("[preview]\nframe_rate = nan\n").unwrap_err();
        assert!(matches!(err, LumenError::InvalidPreview(_)));
    }

    #[test]
    fn test_bad_sizes_rejected() {
        for text in [
            "[preview]\nviewport_width = 0.0\n",
            "[preview]\nsection_height = -10.0\n",
            "[preview]\nscroll_speed = -1.0\n",
        ] {
            let err = LumenConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, LumenError::InvalidPreview(_)), "{text}");
        }
    }

    #[test]
    fn test_frame_interval_bounded() {
        let mut config = LumenConfig::default();
        config.preview.frame_rate = 1e-30;
        assert!((config.frame_interval() - 1.0).abs() < f32::EPSILON);
        config.preview.frame_rate = f32::NAN;
        assert!((config.frame_interval() - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn test_bad_root_margin_is_parse_error() {
        let err =
            LumenConfig::from_toml_str("[reveal.trigger]\nroot_margin = \"10em\"\n").unwrap_err();
        assert!(matches!(err, LumenError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LumenConfig::from_file("/nonexistent/lumen.toml").unwrap_err();
        assert!(matches!(err, LumenError::Io { .. }));
    }
}
