//! Animation timeline
//!
//! One keyframe per action, derived from the same tracker walk the composer
//! uses. Keyframe 0 holds every entity; later keyframes hold only what moved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::config::AnimationConfig;
use super::tracker::PositionTracker;
use crate::error::Result;
use crate::models::{Action, ActionKind, Drill, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in [0, 1] onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Key used for the n-th ball in keyframe position maps.
pub fn ball_key(n: usize) -> String {
    format!("ball_{n}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyframe {
    pub duration_ms: u32,
    pub easing: Easing,
    /// Action that produced this keyframe; `None` for the opening frame
    pub action: Option<ActionKind>,
    pub positions: BTreeMap<String, Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub keyframes: Vec<Keyframe>,
}

impl Timeline {
    pub fn total_duration_ms(&self) -> u32 {
        self.keyframes.iter().skip(1).map(|k| k.duration_ms).sum()
    }

    /// Full position map after `index` keyframes have been applied.
    pub fn positions_at_keyframe(&self, index: usize) -> BTreeMap<String, Position> {
        let mut positions = BTreeMap::new();
        for keyframe in self.keyframes.iter().take(index + 1) {
            positions.extend(keyframe.positions.iter().map(|(k, v)| (k.clone(), *v)));
        }
        positions
    }

    /// Interpolated positions at `ms` from the start; clamps past the end.
    pub fn positions_at(&self, ms: u32) -> BTreeMap<String, Position> {
        let last = self.keyframes.len().saturating_sub(1);
        let mut elapsed = 0u32;
        for (i, next) in self.keyframes.iter().enumerate().skip(1) {
            let end = elapsed + next.duration_ms;
            if ms < end {
                let from = self.positions_at_keyframe(i - 1);
                let to = self.positions_at_keyframe(i);
                let t = next.easing.apply((ms - elapsed) as f32 / next.duration_ms as f32);
                return from
                    .into_iter()
                    .map(|(k, a)| {
                        let b = to.get(&k).copied().unwrap_or(a);
                        (k, a.lerp(b, t))
                    })
                    .collect();
            }
            elapsed = end;
        }
        self.positions_at_keyframe(last)
    }
}

pub fn build_timeline(drill: &Drill, cfg: &AnimationConfig) -> Result<Timeline> {
    let mut tracker = PositionTracker::new(drill)?;
    let direction = drill.field.attacking_direction;

    let mut opening: BTreeMap<String, Position> =
        tracker.positions().map(|(id, p)| (id.to_string(), p)).collect();
    for (n, ball) in drill.balls.iter().enumerate() {
        let at = if n == 0 { tracker.ball_position().unwrap_or(ball.position) } else { ball.position };
        opening.insert(ball_key(n), at);
    }

    let mut keyframes = vec![Keyframe {
        duration_ms: 0,
        easing: Easing::Linear,
        action: None,
        positions: opening,
    }];
    let has_ball = !drill.balls.is_empty();

    for (index, action) in drill.actions.iter().enumerate() {
        let step = || -> Result<BTreeMap<String, Position>> {
            let mut moved = BTreeMap::new();
            match action {
                Action::Run { player, to_position } => {
                    tracker.position(player)?;
                    moved.insert(player.clone(), *to_position);
                }
                Action::Dribble { player, to_position, .. } => {
                    tracker.position(player)?;
                    moved.insert(player.clone(), *to_position);
                    if has_ball && tracker.holder() == Some(player.as_str()) {
                        moved.insert(ball_key(0), *to_position);
                    }
                }
                Action::Pass { to_player, .. } => {
                    let receiver = tracker.position(to_player)?;
                    if has_ball {
                        moved.insert(ball_key(0), receiver);
                    }
                }
                Action::Shot { .. } => {
                    if has_ball {
                        let target =
                            action.shot_target(direction).unwrap_or_else(|| direction.goal_center());
                        moved.insert(ball_key(0), target);
                    }
                }
            }
            Ok(moved)
        };
        let positions = step().map_err(|e| e.at_action(index))?;
        tracker.apply(action, drill).map_err(|e| e.at_action(index))?;

        keyframes.push(Keyframe {
            duration_ms: cfg.duration_ms(action.kind()),
            easing: cfg.easing,
            action: Some(action.kind()),
            positions,
        });
    }

    Ok(Timeline { keyframes })
}
