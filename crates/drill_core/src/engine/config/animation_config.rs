//! Animation Configuration

use serde::{Deserialize, Serialize};

use crate::engine::animation::Easing;
use crate::models::ActionKind;

/// Per-action keyframe durations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Pass duration in ms (default: 800)
    pub pass_ms: u32,
    /// Run duration in ms (default: 1000)
    pub run_ms: u32,
    /// Dribble duration in ms (default: 1200)
    pub dribble_ms: u32,
    /// Shot duration in ms (default: 700)
    pub shot_ms: u32,
    #[serde(default)]
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { pass_ms: 800, run_ms: 1000, dribble_ms: 1200, shot_ms: 700, easing: Easing::EaseInOut }
    }
}

impl AnimationConfig {
    pub fn duration_ms(&self, kind: ActionKind) -> u32 {
        match kind {
            ActionKind::Pass => self.pass_ms,
            ActionKind::Run => self.run_ms,
            ActionKind::Dribble => self.dribble_ms,
            ActionKind::Shot => self.shot_ms,
        }
    }
}
