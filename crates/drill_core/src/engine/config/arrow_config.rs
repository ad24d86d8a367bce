//! Arrow Configuration
//!
//! Distances are in field units; `line_width` is in output pixels.

use serde::{Deserialize, Serialize};

/// Arrow trimming and shape parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowConfig {
    // === Stroke ===
    /// Arrow body stroke width in pixels (default: 1.8)
    pub line_width: f32,
    /// Arrowhead base width (default: 1.2)
    pub head_width: f32,
    /// Arrowhead length; the body stops this far before the tip (default: 1.0)
    pub head_length: f32,

    // === Anchors ===
    /// Clearance around a player marker that has not moved yet (default: 2.5)
    pub player_offset: f32,
    /// Clearance at a point left behind by an earlier action (default: 0.8)
    pub chain_gap: f32,
    /// Distance the held ball is nudged toward the holder's first action (default: 1.8)
    pub ball_offset: f32,

    // === Dribble wave ===
    /// Perpendicular wave amplitude (default: 1.0)
    pub wave_amplitude: f32,
    /// Full oscillations over the body (default: 2.0)
    pub wave_cycles: f32,
    /// Polyline samples along the body (default: 80)
    pub wave_samples: usize,
    /// Samples for straight bodies (default: 2)
    pub straight_samples: usize,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            line_width: 1.8,
            head_width: 1.2,
            head_length: 1.0,

            player_offset: 2.5,
            chain_gap: 0.8,
            ball_offset: 1.8,

            wave_amplitude: 1.0,
            wave_cycles: 2.0,
            wave_samples: 80,
            straight_samples: 2,
        }
    }
}

impl ArrowConfig {
    /// Heavier strokes for slides and projectors.
    pub fn presentation() -> Self {
        Self { line_width: 2.6, head_width: 1.6, head_length: 1.4, ..Self::default() }
    }
}
