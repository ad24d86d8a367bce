use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Horizontal center of both goals.
pub const GOAL_CENTER_X: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    #[default]
    Half,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttackingDirection {
    /// Attacking toward the top of the diagram (y = 100)
    #[default]
    North,
    /// Attacking toward the bottom of the diagram (y = 0)
    South,
}

impl AttackingDirection {
    #[inline]
    pub fn attacking_goal_y(self) -> f32 {
        match self {
            AttackingDirection::North => 100.0,
            AttackingDirection::South => 0.0,
        }
    }

    #[inline]
    pub fn defending_goal_y(self) -> f32 {
        100.0 - self.attacking_goal_y()
    }

    /// Center of the goal line the drill attacks; the default shot target.
    pub fn goal_center(self) -> Position {
        Position { x: GOAL_CENTER_X, y: self.attacking_goal_y() }
    }
}

/// Soccer field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldConfig {
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub attacking_direction: AttackingDirection,
    #[serde(default = "default_markings")]
    pub markings: bool,
    /// Built-in goals on the end lines: 0, 1 (attacking end) or 2 (both ends).
    #[serde(default = "default_goals")]
    #[schemars(range(max = 2))]
    pub goals: u8,
}

fn default_markings() -> bool {
    true
}

fn default_goals() -> u8 {
    1
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_type: FieldType::Half,
            attacking_direction: AttackingDirection::North,
            markings: true,
            goals: 1,
        }
    }
}

impl FieldConfig {
    pub fn is_full(&self) -> bool {
        self.field_type == FieldType::Full
    }

    pub fn has_attacking_goal(&self) -> bool {
        self.goals >= 1
    }

    pub fn has_defending_goal(&self) -> bool {
        self.goals >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_lines_follow_direction() {
        assert_eq!(AttackingDirection::North.attacking_goal_y(), 100.0);
        assert_eq!(AttackingDirection::North.defending_goal_y(), 0.0);
        assert_eq!(AttackingDirection::South.attacking_goal_y(), 0.0);
        assert_eq!(AttackingDirection::South.goal_center(), Position { x: 50.0, y: 0.0 });
    }

    #[test]
    fn test_field_config_defaults_from_empty_json() {
        let cfg: FieldConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, FieldConfig::default());
    }

    #[test]
    fn test_field_type_wire_names() {
        let cfg: FieldConfig = serde_json::from_str(
            r#"{"type": "FULL", "attacking_direction": "SOUTH", "markings": false, "goals": 2}"#,
        )
        .unwrap();
        assert!(cfg.is_full());
        assert_eq!(cfg.attacking_direction, AttackingDirection::South);
        assert!(cfg.has_defending_goal());
    }
}
