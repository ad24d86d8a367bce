//! Viewport Configuration

use serde::{Deserialize, Serialize};

/// Bounds calculation thresholds (all in field units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Margin added on every side of the content box (default: 8.0)
    pub padding: f32,
    /// Smallest allowed width/height of the viewport (default: 30.0)
    pub min_extent: f32,
    /// Content box used when the drill has no points at all (default: 25..75)
    pub empty_min: f32,
    pub empty_max: f32,

    // === Goal rules ===
    /// Content this close to a goal line pulls the viewport out to it (default: 30.0)
    pub goal_proximity: f32,
    /// Once extended to a goal line, the viewport spans at least this much of the field (default: 22.0)
    pub goal_reach: f32,
    /// A goalkeeper this close to an end line forces that edge (default: 10.0)
    pub goalkeeper_edge: f32,
    /// Viewport within this distance of a goal line shows the penalty area (default: 15.0)
    pub penalty_visibility: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            padding: 8.0,
            min_extent: 30.0,
            empty_min: 25.0,
            empty_max: 75.0,

            goal_proximity: 30.0,
            goal_reach: 22.0,
            goalkeeper_edge: 10.0,
            penalty_visibility: 15.0,
        }
    }
}

impl ViewportConfig {
    /// Tight crop for thumbnails.
    pub fn compact() -> Self {
        Self { padding: 4.0, min_extent: 20.0, ..Self::default() }
    }
}
