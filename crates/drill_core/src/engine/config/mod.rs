//! # Render Configuration Module
//!
//! All tuning constants for bounds, arrows, styling and animation live here
//! instead of as magic numbers in the renderers.
//!
//! ## Usage
//! ```rust
//! use drill_core::engine::config::RenderConfig;
//!
//! let config = RenderConfig::default();
//! let slides = RenderConfig::presentation();
//! ```
//!
//! ## Environment Variables
//!
//! - `DRILL_RENDER_PROFILE`: Select preset (presentation, compact, default)

mod animation_config;
mod arrow_config;
mod style_config;
mod viewport_config;

pub use animation_config::AnimationConfig;
pub use arrow_config::ArrowConfig;
pub use style_config::StyleConfig;
pub use viewport_config::ViewportConfig;

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RenderConfig {
    #[serde(default)]
    pub arrows: ArrowConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl RenderConfig {
    /// Thicker lines and larger heads
    pub fn presentation() -> Self {
        Self {
            arrows: ArrowConfig::presentation(),
            style: StyleConfig::presentation(),
            ..Self::default()
        }
    }

    /// Tighter crop
    pub fn compact() -> Self {
        Self { viewport: ViewportConfig::compact(), ..Self::default() }
    }

    /// Load from environment variable DRILL_RENDER_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        match env::var("DRILL_RENDER_PROFILE").unwrap_or_default().to_lowercase().as_str() {
            "presentation" => Self::presentation(),
            "compact" => Self::compact(),
            _ => Self::default(),
        }
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = RenderConfig::default();
        assert!((cfg.arrows.player_offset - 2.5).abs() < 0.001);
        assert!((cfg.arrows.chain_gap - 0.8).abs() < 0.001);
        assert!((cfg.viewport.padding - 8.0).abs() < 0.001);
        assert!((cfg.viewport.min_extent - 30.0).abs() < 0.001);
        assert_eq!(cfg.animation.pass_ms, 800);
    }

    #[test]
    fn test_presentation_is_heavier() {
        let base = RenderConfig::default();
        let slides = RenderConfig::presentation();
        assert!(slides.arrows.line_width > base.arrows.line_width);
        assert!(slides.arrows.head_length > base.arrows.head_length);
        assert_eq!(slides.viewport, base.viewport);
    }

    #[test]
    fn test_compact_crops_tighter() {
        let compact = RenderConfig::compact();
        assert!(compact.viewport.padding < RenderConfig::default().viewport.padding);
        assert!(compact.viewport.min_extent < 30.0);
    }

    #[test]
    fn test_from_env_default() {
        // Without env var, should return default
        if env::var("DRILL_RENDER_PROFILE").is_err() {
            assert_eq!(RenderConfig::from_env_or_default(), RenderConfig::default());
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg: RenderConfig =
            serde_json::from_str(r#"{"viewport": {"padding": 2.0, "min_extent": 40.0,
                "empty_min": 25.0, "empty_max": 75.0, "goal_proximity": 30.0,
                "goal_reach": 22.0, "goalkeeper_edge": 10.0, "penalty_visibility": 15.0}}"#)
                .unwrap();
        assert!((cfg.viewport.padding - 2.0).abs() < 0.001);
        assert_eq!(cfg.arrows, ArrowConfig::default());
    }
}
