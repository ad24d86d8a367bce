//! Position Tracker
//!
//! Simulated world state while a drill's actions are walked in order: the
//! live position of every player, whether they have moved, and who holds the
//! ball. Every arrow starts from the tracker's *pre-action* state, so a
//! player's second action begins where the first one ended.
//!
//! A tracker is created fresh for each render call and never shared.

use std::collections::HashMap;

use crate::error::{RenderError, Result};
use crate::models::{Action, AttackingDirection, Drill, Position};

#[derive(Debug, Clone)]
struct TrackedPlayer {
    id: String,
    position: Position,
    moved: bool,
}

#[derive(Debug, Clone)]
pub struct PositionTracker {
    /// Document order is preserved for snapshots
    players: Vec<TrackedPlayer>,
    index: HashMap<String, usize>,
    holder: Option<String>,
    /// Where the ball rests while nobody holds it
    loose_ball: Option<Position>,
    direction: AttackingDirection,
}

impl PositionTracker {
    /// Fails with `UnknownPlayer` when the first action's ball carrier is not in the drill.
    pub fn new(drill: &Drill) -> Result<Self> {
        let players: Vec<TrackedPlayer> = drill
            .players
            .iter()
            .map(|p| TrackedPlayer { id: p.id.clone(), position: p.position, moved: false })
            .collect();
        let index = players.iter().enumerate().map(|(i, p)| (p.id.clone(), i)).collect();

        let mut tracker = Self {
            players,
            index,
            holder: None,
            loose_ball: drill.first_ball(),
            direction: drill.field.attacking_direction,
        };

        tracker.holder = match initial_holder(drill) {
            Some(id) => {
                tracker.slot(&id).map_err(|e| e.at_action(0))?;
                Some(id)
            }
            None => None,
        };
        log::debug!("tracker: initial holder {:?}", tracker.holder);
        Ok(tracker)
    }

    fn slot(&self, id: &str) -> Result<usize> {
        self.index.get(id).copied().ok_or_else(|| RenderError::unknown_player(id))
    }

    pub fn position(&self, id: &str) -> Result<Position> {
        Ok(self.players[self.slot(id)?].position)
    }

    pub fn has_moved(&self, id: &str) -> Result<bool> {
        Ok(self.players[self.slot(id)?].moved)
    }

    pub fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    /// Holder's live position, else the loose ball.
    pub fn ball_position(&self) -> Option<Position> {
        match &self.holder {
            Some(id) => self.index.get(id).map(|&i| self.players[i].position),
            None => self.loose_ball,
        }
    }

    /// Live positions in document order.
    pub fn positions(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.players.iter().map(|p| (p.id.as_str(), p.position))
    }

    pub fn apply_pass(&mut self, to: &str) -> Result<()> {
        self.slot(to)?;
        self.holder = Some(to.to_string());
        self.loose_ball = None;
        Ok(())
    }

    /// The ball follows implicitly when `id` is the holder.
    pub fn apply_movement(&mut self, id: &str, position: Position) -> Result<()> {
        let slot = self.slot(id)?;
        let player = &mut self.players[slot];
        player.position = position;
        player.moved = true;
        Ok(())
    }

    /// Ball leaves the holder and rests at the target.
    pub fn apply_shot(&mut self, target: Position) {
        self.holder = None;
        self.loose_ball = Some(target);
    }

    /// Advance the state by one action.
    pub fn apply(&mut self, action: &Action, drill: &Drill) -> Result<()> {
        match action {
            Action::Pass { from_player, to_player } => {
                self.slot(from_player)?;
                self.apply_pass(to_player)?;
            }
            Action::Run { player, to_position } => {
                self.apply_movement(player, *to_position)?;
            }
            Action::Dribble { player, to_position, through_gate } => {
                if let Some(gate) = through_gate {
                    if drill.gate(gate).is_none() {
                        return Err(RenderError::UnknownGate { id: gate.clone(), action_index: None });
                    }
                }
                self.apply_movement(player, *to_position)?;
            }
            Action::Shot { player, .. } => {
                self.slot(player)?;
                let target = action
                    .shot_target(self.direction)
                    .unwrap_or_else(|| self.direction.goal_center());
                self.apply_shot(target);
            }
        }
        log::debug!(
            "tracker: {} by {} -> holder {:?}, ball {:?}",
            action.kind().as_str(),
            action.actor(),
            self.holder,
            self.ball_position()
        );
        Ok(())
    }
}

/// Holder at the start of the drill.
///
/// The first action decides when it needs the ball. Otherwise the player
/// nearest the first ball holds it; ties keep the earlier player.
pub fn initial_holder(drill: &Drill) -> Option<String> {
    if let Some(carrier) = drill.actions.first().and_then(Action::ball_carrier) {
        return Some(carrier.to_string());
    }
    let ball = drill.first_ball()?;
    let mut best: Option<(&str, f32)> = None;
    for player in &drill.players {
        let dist = player.position.distance_to(ball);
        if best.map_or(true, |(_, d)| dist < d) {
            best = Some((&player.id, dist));
        }
    }
    best.map(|(id, _)| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_first_action_pass_sets_holder() {
        let drill = fixtures::passing_triangle();
        let tracker = PositionTracker::new(&drill).unwrap();
        assert_eq!(tracker.holder(), Some("A1"));
        assert_eq!(tracker.ball_position(), Some(drill.players[0].position));
    }

    #[test]
    fn test_first_action_holder_overrides_ball_proximity() {
        // Ball sits on A2, but A1 dribbles first
        let mut drill = fixtures::chained_demo();
        drill.balls[0].position = drill.players[1].position;
        let tracker = PositionTracker::new(&drill).unwrap();
        assert_eq!(tracker.holder(), Some("A1"));
    }

    #[test]
    fn test_run_first_falls_back_to_nearest_player() {
        let mut drill = fixtures::chained_demo();
        drill.actions.remove(0);
        drill.balls[0].position = Position::new(68.0, 50.0);
        let tracker = PositionTracker::new(&drill).unwrap();
        assert_eq!(tracker.holder(), Some("A2"));
    }

    #[test]
    fn test_nearest_player_tie_keeps_document_order() {
        let mut drill = fixtures::single_player();
        drill.players.push(crate::models::Player {
            id: "A2".into(),
            role: crate::models::PlayerRole::Attacker,
            position: Position::new(60.0, 50.0),
            label: None,
        });
        drill.players[0].position = Position::new(40.0, 50.0);
        drill.balls[0].position = Position::new(50.0, 50.0);
        assert_eq!(initial_holder(&drill).as_deref(), Some("A1"));
    }

    #[test]
    fn test_no_ball_no_actions_has_no_holder() {
        let mut drill = fixtures::single_player();
        drill.balls.clear();
        let tracker = PositionTracker::new(&drill).unwrap();
        assert_eq!(tracker.holder(), None);
        assert_eq!(tracker.ball_position(), None);
    }

    #[test]
    fn test_movement_carries_ball_with_holder() {
        let drill = fixtures::chained_demo();
        let mut tracker = PositionTracker::new(&drill).unwrap();
        tracker.apply(&drill.actions[0], &drill).unwrap();
        assert_eq!(tracker.position("A1").unwrap(), Position::new(35.0, 70.0));
        assert!(tracker.has_moved("A1").unwrap());
        assert!(!tracker.has_moved("A2").unwrap());
        assert_eq!(tracker.ball_position(), Some(Position::new(35.0, 70.0)));
    }

    #[test]
    fn test_run_does_not_move_ball() {
        let drill = fixtures::chained_demo();
        let mut tracker = PositionTracker::new(&drill).unwrap();
        tracker.apply(&drill.actions[1], &drill).unwrap();
        assert_eq!(tracker.holder(), Some("A1"));
        assert_eq!(tracker.ball_position(), Some(drill.players[0].position));
    }

    #[test]
    fn test_shot_leaves_ball_loose_at_target() {
        let drill = fixtures::chained_demo();
        let mut tracker = PositionTracker::new(&drill).unwrap();
        for action in &drill.actions {
            tracker.apply(action, &drill).unwrap();
        }
        assert_eq!(tracker.holder(), None);
        assert_eq!(tracker.ball_position(), Some(Position::new(50.0, 100.0)));
    }

    #[test]
    fn test_unknown_player_fails() {
        let drill = fixtures::chained_demo();
        let mut tracker = PositionTracker::new(&drill).unwrap();
        let err = tracker.position("ZZ").unwrap_err();
        assert_eq!(err, RenderError::unknown_player("ZZ"));

        let bad = Action::Pass { from_player: "A1".into(), to_player: "A9".into() };
        assert!(matches!(
            tracker.apply(&bad, &drill),
            Err(RenderError::UnknownPlayer { ref id, .. }) if id == "A9"
        ));
    }

    #[test]
    fn test_unknown_first_carrier_fails_at_construction() {
        let mut drill = fixtures::single_player();
        drill.actions =
            vec![Action::Shot { player: "B7".into(), target: Default::default(), to_position: None }];
        let err = PositionTracker::new(&drill).unwrap_err();
        assert_eq!(err.to_string(), "Unknown player 'B7' in action 1");
    }

    #[test]
    fn test_dribble_through_missing_gate_fails() {
        let drill = fixtures::chained_demo();
        let mut tracker = PositionTracker::new(&drill).unwrap();
        let action = Action::Dribble {
            player: "A1".into(),
            to_position: Position::new(40.0, 60.0),
            through_gate: Some("G9".into()),
        };
        assert!(matches!(tracker.apply(&action, &drill), Err(RenderError::UnknownGate { .. })));
    }
}
