//! Drill actions
//!
//! Actions form the drill's chronology. Their order is the only driver of
//! the position tracker, so the enum is closed and every consumer matches it
//! exhaustively.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::field::AttackingDirection;
use super::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Pass,
    Run,
    Dribble,
    Shot,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Pass => "pass",
            ActionKind::Run => "run",
            ActionKind::Dribble => "dribble",
            ActionKind::Shot => "shot",
        }
    }
}

/// Fixed shot target marker. Only the attacking goal exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotTarget {
    #[default]
    Goal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Ball pass from one player to another
    Pass { from_player: String, to_player: String },
    /// Player movement without the ball
    Run { player: String, to_position: Position },
    /// Player moving with the ball
    Dribble {
        player: String,
        to_position: Position,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        through_gate: Option<String>,
    },
    /// Shot at the goal marker, or at an explicit point when `to_position` is set
    Shot {
        player: String,
        #[serde(default)]
        target: ShotTarget,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_position: Option<Position>,
    },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Pass { .. } => ActionKind::Pass,
            Action::Run { .. } => ActionKind::Run,
            Action::Dribble { .. } => ActionKind::Dribble,
            Action::Shot { .. } => ActionKind::Shot,
        }
    }

    /// Player whose live position the arrow starts from.
    pub fn actor(&self) -> &str {
        match self {
            Action::Pass { from_player, .. } => from_player,
            Action::Run { player, .. } | Action::Dribble { player, .. } | Action::Shot { player, .. } => {
                player
            }
        }
    }

    /// Player who must have the ball for this action; runs are ball-free.
    pub fn ball_carrier(&self) -> Option<&str> {
        match self {
            Action::Pass { from_player, .. } => Some(from_player),
            Action::Dribble { player, .. } | Action::Shot { player, .. } => Some(player),
            Action::Run { .. } => None,
        }
    }

    /// Every player id the action references, actor first.
    pub fn player_refs(&self) -> Vec<&str> {
        match self {
            Action::Pass { from_player, to_player } => vec![from_player, to_player],
            Action::Run { player, .. } | Action::Dribble { player, .. } | Action::Shot { player, .. } => {
                vec![player]
            }
        }
    }

    /// Fixed end point of the action, if it has one independent of the tracker.
    ///
    /// Passes end wherever the receiver currently is, so they return `None`.
    pub fn fixed_endpoint(&self, direction: AttackingDirection) -> Option<Position> {
        match self {
            Action::Pass { .. } => None,
            Action::Run { to_position, .. } | Action::Dribble { to_position, .. } => {
                Some(*to_position)
            }
            Action::Shot { .. } => self.shot_target(direction),
        }
    }

    /// Explicit target first, then the goal center of the attacking direction.
    pub fn shot_target(&self, direction: AttackingDirection) -> Option<Position> {
        match self {
            Action::Shot { to_position: Some(p), .. } => Some(*p),
            Action::Shot { target: ShotTarget::Goal, to_position: None, .. } => {
                Some(direction.goal_center())
            }
            _ => None,
        }
    }

    /// Upper-case every id reference in place.
    pub(crate) fn normalize_ids(&mut self) {
        match self {
            Action::Pass { from_player, to_player } => {
                *from_player = from_player.to_uppercase();
                *to_player = to_player.to_uppercase();
            }
            Action::Run { player, .. } | Action::Shot { player, .. } => {
                *player = player.to_uppercase();
            }
            Action::Dribble { player, through_gate, .. } => {
                *player = player.to_uppercase();
                if let Some(gate) = through_gate {
                    *gate = gate.to_uppercase();
                }
            }
        }
    }
}
