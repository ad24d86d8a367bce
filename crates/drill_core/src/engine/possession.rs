//! Possession audit
//!
//! Walks the action list with the tracker's holder rules and reports ball
//! actions made by someone other than the current holder. Warnings never
//! fail a render.

use std::fmt;

use serde::Serialize;

use super::tracker::initial_holder;
use crate::models::{Action, ActionKind, Drill};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PossessionWarning {
    pub action_index: usize,
    pub kind: ActionKind,
    pub actor: String,
    pub holder: String,
}

impl fmt::Display for PossessionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            ActionKind::Pass => "passes",
            ActionKind::Dribble => "dribbles",
            ActionKind::Shot => "shoots",
            ActionKind::Run => "runs",
        };
        write!(
            f,
            "Action {}: {} {} but {} has the ball",
            self.action_index + 1,
            self.actor,
            verb,
            self.holder
        )
    }
}

pub fn audit_possession(drill: &Drill) -> Vec<PossessionWarning> {
    let mut holder = initial_holder(drill);
    let mut warnings = Vec::new();

    for (index, action) in drill.actions.iter().enumerate() {
        if let (Some(carrier), Some(current)) = (action.ball_carrier(), holder.as_deref()) {
            if carrier != current {
                warnings.push(PossessionWarning {
                    action_index: index,
                    kind: action.kind(),
                    actor: carrier.to_string(),
                    holder: current.to_string(),
                });
            }
        }
        match action {
            Action::Pass { to_player, .. } => holder = Some(to_player.clone()),
            Action::Shot { .. } => holder = None,
            Action::Run { .. } | Action::Dribble { .. } => {}
        }
    }
    warnings
}
