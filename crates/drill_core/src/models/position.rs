//! Normalized field coordinates
//!
//! ## Coordinate System
//! - x: 0 = left sideline, 100 = right sideline, 50 = center
//! - y: 0 = bottom of diagram, 100 = top of diagram
//!
//! Which goal line is "attacking" depends on [`AttackingDirection`](super::AttackingDirection).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const FIELD_MIN: f32 = 0.0;
pub const FIELD_MAX: f32 = 100.0;

/// Absolute position on the 0-100 x 0-100 drill plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    #[schemars(range(min = 0, max = 100))]
    pub x: f32,
    #[schemars(range(min = 0, max = 100))]
    pub y: f32,
}

impl Position {
    /// Build a position, clamping both components into the field.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x: x.clamp(FIELD_MIN, FIELD_MAX), y: y.clamp(FIELD_MIN, FIELD_MAX) }
    }

    pub fn is_on_field(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && (FIELD_MIN..=FIELD_MAX).contains(&self.x)
            && (FIELD_MIN..=FIELD_MAX).contains(&self.y)
    }

    pub fn distance_to(&self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Unit vector pointing from `self` to `target`, `None` when they coincide.
    pub fn unit_toward(&self, target: Position) -> Option<(f32, f32)> {
        let dist = self.distance_to(target);
        if dist <= f32::EPSILON {
            return None;
        }
        Some(((target.x - self.x) / dist, (target.y - self.y) / dist))
    }

    /// Move `distance` units from `self` toward `target`; unchanged when they coincide.
    pub fn offset_toward(&self, target: Position, distance: f32) -> Position {
        match self.unit_toward(target) {
            Some((ux, uy)) => Position { x: self.x + ux * distance, y: self.y + uy * distance },
            None => *self,
        }
    }

    /// Linear interpolation; `t` is clamped to [0, 1] so the result stays on the field.
    pub fn lerp(&self, other: Position, t: f32) -> Position {
        let t = t.clamp(0.0, 1.0);
        Position { x: self.x + (other.x - self.x) * t, y: self.y + (other.y - self.y) * t }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl From<(f32, f32)> for Position {
    fn from((x, y): (f32, f32)) -> Self {
        Position::new(x, y)
    }
}
