//! Players and training equipment placed on the field.
//!
//! All entities are immutable for the lifetime of a drill document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::position::{Position, FIELD_MAX, FIELD_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRole {
    Attacker,
    Defender,
    Goalkeeper,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    /// Player id (e.g. A1, D2, GK); upper-cased on load
    pub id: String,
    pub role: PlayerRole,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Player {
    /// Text drawn under the player marker.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.role == PlayerRole::Goalkeeper
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Cone {
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateOrientation {
    Horizontal,
    Vertical,
}

/// A gate formed by two cones. Stored as center + width; expanded at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConeGate {
    pub id: String,
    pub center: Position,
    #[schemars(range(min = 0, max = 30))]
    pub width: f32,
    pub orientation: GateOrientation,
}

impl ConeGate {
    /// The two cones that make up the gate.
    pub fn cone_positions(&self) -> [Position; 2] {
        let half = self.width / 2.0;
        let (cx, cy) = (self.center.x, self.center.y);
        match self.orientation {
            GateOrientation::Horizontal => [Position::new(cx - half, cy), Position::new(cx + half, cy)],
            GateOrientation::Vertical => [Position::new(cx, cy - half), Position::new(cx, cy + half)],
        }
    }

    /// Both cones land on the field without clamping.
    pub fn fits_on_field(&self) -> bool {
        let half = self.width / 2.0;
        let (c, lo, hi) = match self.orientation {
            GateOrientation::Horizontal => (self.center.x, self.center.x - half, self.center.x + half),
            GateOrientation::Vertical => (self.center.y, self.center.y - half, self.center.y + half),
        };
        c.is_finite() && lo >= FIELD_MIN && hi <= FIELD_MAX
    }

    /// Extreme points used for bounds; identical to the cone positions.
    pub fn edge_points(&self) -> [Position; 2] {
        self.cone_positions()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Ball {
    pub position: Position,
}

/// A training mannequin standing in for a defender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Mannequin {
    pub id: String,
    pub position: Position,
}

/// Compass direction a goal mouth opens toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// Snap an angle in degrees to the nearest quarter turn (0 = north, 90 = east).
    pub fn from_degrees(degrees: f32) -> Self {
        let quarter = (degrees / 90.0).round() as i64;
        match quarter.rem_euclid(4) {
            0 => Facing::North,
            1 => Facing::East,
            2 => Facing::South,
            _ => Facing::West,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::North => Facing::South,
            Facing::East => Facing::West,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
        }
    }

    /// Unit vector in field coordinates (y grows toward north).
    pub fn unit(self) -> (f32, f32) {
        match self {
            Facing::North => (0.0, 1.0),
            Facing::East => (1.0, 0.0),
            Facing::South => (0.0, -1.0),
            Facing::West => (-1.0, 0.0),
        }
    }
}

/// Small pugg goal placed anywhere on the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MiniGoal {
    pub position: Position,
    /// Degrees; snapped to quarter turns
    #[serde(default)]
    pub rotation: f32,
}

impl MiniGoal {
    /// Mini goal input rotation is read flipped: 0° means the frame is drawn facing south.
    pub fn facing(&self) -> Facing {
        Facing::from_degrees(self.rotation).flipped()
    }
}

/// Full-size goal placed at an explicit position, independent of the end-line goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Goal {
    pub position: Position,
    #[serde(default)]
    pub rotation: f32,
}

impl Goal {
    pub fn facing(&self) -> Facing {
        Facing::from_degrees(self.rotation)
    }
}

/// Boundary line drawn between two cones (indices into the drill's cone list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConeLine {
    pub from_cone: usize,
    pub to_cone: usize,
}
