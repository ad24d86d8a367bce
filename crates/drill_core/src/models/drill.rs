//! Drill document - the validated, immutable input to every render call.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::action::Action;
use super::entity::{Ball, Cone, ConeGate, ConeLine, Goal, Mannequin, MiniGoal, Player};
use super::field::FieldConfig;
use super::position::Position;
use crate::error::{RenderError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Drill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub field: FieldConfig,
    pub players: Vec<Player>,
    #[serde(default)]
    pub cones: Vec<Cone>,
    #[serde(default)]
    pub cone_gates: Vec<ConeGate>,
    #[serde(default)]
    pub balls: Vec<Ball>,
    #[serde(default)]
    pub mannequins: Vec<Mannequin>,
    #[serde(default)]
    pub mini_goals: Vec<MiniGoal>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub cone_lines: Vec<ConeLine>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub coaching_points: Vec<String>,
    #[serde(default)]
    pub variations: Vec<String>,
}

impl Drill {
    /// Parse, normalize ids to upper case, then check structural validity.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut drill: Drill = serde_json::from_str(json)?;
        drill.normalize_ids();
        drill.validate()?;
        Ok(drill)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| RenderError::Serialization(e.to_string()))
    }

    /// JSON schema of the document format.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Drill)
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn gate(&self, id: &str) -> Option<&ConeGate> {
        self.cone_gates.iter().find(|g| g.id == id)
    }

    pub fn first_ball(&self) -> Option<Position> {
        self.balls.first().map(|b| b.position)
    }

    pub fn goalkeepers(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_goalkeeper())
    }

    fn normalize_ids(&mut self) {
        for player in &mut self.players {
            player.id = player.id.to_uppercase();
        }
        for gate in &mut self.cone_gates {
            gate.id = gate.id.to_uppercase();
        }
        for mannequin in &mut self.mannequins {
            mannequin.id = mannequin.id.to_uppercase();
        }
        for action in &mut self.actions {
            action.normalize_ids();
        }
    }

    /// Structural checks only. Referential integrity of action ids is left to the
    /// tracker, which fails with a typed error on the first dangling reference.
    pub fn validate(&self) -> Result<()> {
        if self.players.is_empty() {
            return Err(RenderError::InvalidDocument("drill has no players".into()));
        }
        if self.field.goals > 2 {
            return Err(RenderError::InvalidDocument(format!(
                "field.goals must be 0, 1 or 2 (got {})",
                self.field.goals
            )));
        }
        for gate in &self.cone_gates {
            if gate.width.is_nan() || gate.width <= 0.0 {
                return Err(RenderError::InvalidDocument(format!(
                    "cone gate '{}' has non-positive width {}",
                    gate.id, gate.width
                )));
            }
            if !gate.fits_on_field() {
                return Err(RenderError::InvalidDocument(format!(
                    "cone gate '{}' of width {} does not fit on the field",
                    gate.id, gate.width
                )));
            }
        }
        if let Some(id) = first_duplicate(self.players.iter().map(|p| p.id.as_str())) {
            return Err(RenderError::InvalidDocument(format!("duplicate player id '{id}'")));
        }
        if let Some(id) = first_duplicate(self.cone_gates.iter().map(|g| g.id.as_str())) {
            return Err(RenderError::InvalidDocument(format!("duplicate cone gate id '{id}'")));
        }
        if let Some((what, pos)) = self.placed_positions().find(|(_, p)| !p.is_on_field()) {
            return Err(RenderError::InvalidDocument(format!(
                "{what} at ({}, {}) is outside the 0-100 field",
                pos.x, pos.y
            )));
        }
        Ok(())
    }

    fn placed_positions(&self) -> impl Iterator<Item = (&'static str, Position)> + '_ {
        let players = self.players.iter().map(|p| ("player", p.position));
        let cones = self.cones.iter().map(|c| ("cone", c.position));
        let gates = self.cone_gates.iter().map(|g| ("cone gate", g.center));
        let balls = self.balls.iter().map(|b| ("ball", b.position));
        let mannequins = self.mannequins.iter().map(|m| ("mannequin", m.position));
        let mini_goals = self.mini_goals.iter().map(|g| ("mini goal", g.position));
        let goals = self.goals.iter().map(|g| ("goal", g.position));
        let targets = self.actions.iter().filter_map(|a| match a {
            Action::Run { to_position, .. } | Action::Dribble { to_position, .. } => {
                Some(("action target", *to_position))
            }
            Action::Shot { to_position: Some(p), .. } => Some(("shot target", *p)),
            _ => None,
        });
        players
            .chain(cones)
            .chain(gates)
            .chain(balls)
            .chain(mannequins)
            .chain(mini_goals)
            .chain(goals)
            .chain(targets)
    }
}

/// Ids are compared after upper-casing, so `a1` and `A1` collide.
fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerRole;

    const MINIMAL: &str = r#"{
        "name": "Rondo",
        "players": [{"id": "a1", "role": "ATTACKER", "position": {"x": 40, "y": 40}}],
        "actions": [{"type": "RUN", "player": "a1", "to_position": {"x": 60, "y": 60}}]
    }"#;

    #[test]
    fn test_from_json_normalizes_ids() {
        let drill = Drill::from_json(MINIMAL).unwrap();
        assert_eq!(drill.players[0].id, "A1");
        assert_eq!(drill.actions[0].actor(), "A1");
        assert!(drill.player("A1").is_some());
        assert_eq!(drill.players[0].role, PlayerRole::Attacker);
        assert!(drill.balls.is_empty());
        assert_eq!(drill.field.goals, 1);
    }

    #[test]
    fn test_rejects_empty_player_list() {
        let err = Drill::from_json(r#"{"name": "x", "players": []}"#).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDocument(_)));
    }

    #[test]
    fn test_rejects_off_field_position() {
        let json = r#"{
            "name": "x",
            "players": [{"id": "A1", "role": "ATTACKER", "position": {"x": 40, "y": 140}}]
        }"#;
        let err = Drill::from_json(json).unwrap_err();
        assert!(err.to_string().contains("outside"), "{err}");
    }

    #[test]
    fn test_rejects_ids_colliding_after_upper_casing() {
        let json = r#"{
            "name": "x",
            "players": [
                {"id": "A1", "role": "ATTACKER", "position": {"x": 10, "y": 10}},
                {"id": "a1", "role": "ATTACKER", "position": {"x": 90, "y": 90}}
            ],
            "actions": [{"type": "RUN", "player": "A1", "to_position": {"x": 50, "y": 50}}]
        }"#;
        let err = Drill::from_json(json).unwrap_err();
        assert_eq!(err, RenderError::InvalidDocument("duplicate player id 'A1'".into()));
    }

    #[test]
    fn test_rejects_duplicate_gate_ids() {
        let json = r#"{
            "name": "x",
            "players": [{"id": "A1", "role": "ATTACKER", "position": {"x": 50, "y": 30}}],
            "cone_gates": [
                {"id": "g1", "center": {"x": 50, "y": 45}, "width": 8, "orientation": "HORIZONTAL"},
                {"id": "G1", "center": {"x": 50, "y": 60}, "width": 8, "orientation": "HORIZONTAL"}
            ]
        }"#;
        let err = Drill::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate cone gate id 'G1'"), "{err}");
    }

    #[test]
    fn test_rejects_gate_hanging_off_field() {
        let gate = |x: f32, orientation: &str| {
            format!(
                r#"{{
                "name": "x",
                "players": [{{"id": "A1", "role": "ATTACKER", "position": {{"x": 50, "y": 50}}}}],
                "cone_gates": [{{"id": "G1", "center": {{"x": {x}, "y": 50}}, "width": 10, "orientation": "{orientation}"}}]
            }}"#
            )
        };
        let err = Drill::from_json(&gate(2.0, "HORIZONTAL")).unwrap_err();
        assert!(err.to_string().contains("does not fit"), "{err}");
        // Same center is fine when the gate runs along y
        assert!(Drill::from_json(&gate(2.0, "VERTICAL")).is_ok());
        assert!(Drill::from_json(&gate(5.0, "HORIZONTAL")).is_ok());
    }

    #[test]
    fn test_rejects_three_goals() {
        let json = r#"{
            "name": "x",
            "field": {"goals": 3},
            "players": [{"id": "A1", "role": "ATTACKER", "position": {"x": 40, "y": 40}}]
        }"#;
        assert!(matches!(Drill::from_json(json), Err(RenderError::InvalidDocument(_))));
    }

    #[test]
    fn test_unknown_action_type_is_deserialization_error() {
        let json = r#"{
            "name": "x",
            "players": [{"id": "A1", "role": "ATTACKER", "position": {"x": 40, "y": 40}}],
            "actions": [{"type": "CROSS", "player": "A1"}]
        }"#;
        assert!(matches!(Drill::from_json(json), Err(RenderError::Deserialization(_))));
    }

    #[test]
    fn test_schema_lists_required_fields() {
        let schema = serde_json::to_value(Drill::json_schema()).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "players"));
        assert!(required.iter().any(|v| v == "name"));
    }
}
