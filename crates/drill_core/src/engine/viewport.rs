//! Viewport / Bounds Calculator
//!
//! Picks the visible rectangle of the field from every piece of drill
//! content, then decides which fixed markings fall inside it. Both are pure
//! functions of the document; the tracker is not involved.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::config::ViewportConfig;
use crate::models::{Action, AttackingDirection, Drill, Position, FIELD_MAX, FIELD_MIN};

/// Visible rectangle in field units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Viewport {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Viewport {
    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        self.x_min <= x && x <= self.x_max
    }

    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        self.y_min <= y && y <= self.y_max
    }

    pub fn contains(&self, p: Position) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }
}

pub fn compute_viewport(drill: &Drill) -> Viewport {
    compute_viewport_with(drill, &ViewportConfig::default())
}

pub fn compute_viewport_with(drill: &Drill, cfg: &ViewportConfig) -> Viewport {
    let points = content_points(drill);
    let (cx_min, cx_max, cy_min, cy_max) = if points.is_empty() {
        (cfg.empty_min, cfg.empty_max, cfg.empty_min, cfg.empty_max)
    } else {
        points.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY, f32::NEG_INFINITY),
            |(x0, x1, y0, y1), p| (x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y)),
        )
    };

    let mut vp = Viewport {
        x_min: (cx_min - cfg.padding).max(FIELD_MIN),
        x_max: (cx_max + cfg.padding).min(FIELD_MAX),
        y_min: (cy_min - cfg.padding).max(FIELD_MIN),
        y_max: (cy_max + cfg.padding).min(FIELD_MAX),
    };

    let field = &drill.field;
    let near_top = cy_max > FIELD_MAX - cfg.goal_proximity;
    let near_bottom = cy_min < FIELD_MIN + cfg.goal_proximity;

    if field.has_attacking_goal() {
        match field.attacking_direction {
            AttackingDirection::North if near_top => {
                vp.y_max = FIELD_MAX;
                vp.y_min = vp.y_min.min(FIELD_MAX - cfg.goal_reach);
            }
            AttackingDirection::South if near_bottom => {
                vp.y_min = FIELD_MIN;
                vp.y_max = vp.y_max.max(FIELD_MIN + cfg.goal_reach);
            }
            _ => {}
        }
    }

    if field.has_defending_goal() {
        match field.attacking_direction {
            AttackingDirection::North if near_bottom => vp.y_min = FIELD_MIN,
            AttackingDirection::South if near_top => vp.y_max = FIELD_MAX,
            _ => {}
        }
        if drill.goalkeepers().any(|gk| gk.position.y > FIELD_MAX - cfg.goalkeeper_edge) {
            vp.y_max = FIELD_MAX;
        }
        if drill.goalkeepers().any(|gk| gk.position.y < FIELD_MIN + cfg.goalkeeper_edge) {
            vp.y_min = FIELD_MIN;
        }
    }

    let min_extent = cfg.min_extent.min(FIELD_MAX - FIELD_MIN);
    (vp.x_min, vp.x_max) = grow_to_min(vp.x_min, vp.x_max, min_extent);
    (vp.y_min, vp.y_max) = grow_to_min(vp.y_min, vp.y_max, min_extent);
    vp
}

/// Grow `[lo, hi]` symmetrically to `min`; whatever the field edge cuts off
/// is added on the other side.
fn grow_to_min(lo: f32, hi: f32, min: f32) -> (f32, f32) {
    if hi - lo >= min {
        return (lo, hi);
    }
    let center = (lo + hi) / 2.0;
    let (mut lo, mut hi) = (center - min / 2.0, center + min / 2.0);
    if lo < FIELD_MIN {
        hi += FIELD_MIN - lo;
        lo = FIELD_MIN;
    }
    if hi > FIELD_MAX {
        lo = (lo - (hi - FIELD_MAX)).max(FIELD_MIN);
        hi = FIELD_MAX;
    }
    (lo, hi)
}

/// Every point the diagram must show.
pub fn content_points(drill: &Drill) -> Vec<Position> {
    let direction = drill.field.attacking_direction;
    let mut points = Vec::with_capacity(drill.players.len() + drill.actions.len() + 8);
    points.extend(drill.players.iter().map(|p| p.position));
    points.extend(drill.cones.iter().map(|c| c.position));
    points.extend(drill.cone_gates.iter().flat_map(|g| g.edge_points()));
    points.extend(drill.balls.iter().map(|b| b.position));
    points.extend(drill.mannequins.iter().map(|m| m.position));
    points.extend(drill.mini_goals.iter().map(|g| g.position));
    points.extend(drill.goals.iter().map(|g| g.position));
    points.extend(drill.actions.iter().filter_map(|a| match a {
        Action::Pass { .. } => None,
        Action::Run { .. } | Action::Dribble { .. } | Action::Shot { .. } => {
            a.fixed_endpoint(direction)
        }
    }));
    points
}

// ============================================================================
// Marking visibility
// ============================================================================

/// Penalty box, six-yard box and spot at one end of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyArea {
    pub goal_line_y: f32,
    /// Draw the goal frame with the area
    pub with_goal: bool,
}

/// Which fixed markings fall inside the viewport.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkingPlan {
    pub halfway_line: bool,
    pub center_circle: bool,
    pub penalty_areas: Vec<PenaltyArea>,
    /// Goal lines that get a bare goal frame (markings off)
    pub bare_goals: Vec<f32>,
}

impl MarkingPlan {
    pub fn for_drill(drill: &Drill, viewport: &Viewport) -> Self {
        Self::for_drill_with(drill, viewport, &ViewportConfig::default())
    }

    pub fn for_drill_with(drill: &Drill, viewport: &Viewport, cfg: &ViewportConfig) -> Self {
        let field = &drill.field;
        let attacking_y = field.attacking_direction.attacking_goal_y();
        let defending_y = field.attacking_direction.defending_goal_y();

        if !field.markings {
            // Explicit goal entities replace the built-in frames entirely
            let mut bare_goals = Vec::new();
            if drill.goals.is_empty() {
                if field.has_attacking_goal() {
                    bare_goals.push(attacking_y);
                }
                if field.has_defending_goal() {
                    bare_goals.push(defending_y);
                }
            }
            return Self { bare_goals, ..Self::default() };
        }

        let mid = (FIELD_MIN + FIELD_MAX) / 2.0;
        let halfway_line = viewport.contains_y(mid);
        let center_circle = field.is_full() && viewport.contains(Position { x: mid, y: mid });

        let reaches = |goal_y: f32| {
            if goal_y >= mid {
                viewport.y_max >= goal_y - cfg.penalty_visibility
            } else {
                viewport.y_min <= goal_y + cfg.penalty_visibility
            }
        };

        let mut penalty_areas = Vec::new();
        if reaches(attacking_y) {
            penalty_areas.push(PenaltyArea {
                goal_line_y: attacking_y,
                with_goal: field.has_attacking_goal(),
            });
        }
        if field.is_full() && reaches(defending_y) {
            penalty_areas.push(PenaltyArea {
                goal_line_y: defending_y,
                with_goal: field.has_defending_goal(),
            });
        }

        Self { halfway_line, center_circle, penalty_areas, bare_goals: Vec::new() }
    }
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use crate::fixtures;
    use crate::models::{Ball, Cone, ConeGate, GateOrientation};
    use proptest::prelude::*;

    fn arb_position() -> impl Strategy<Value = Position> {
        (0.0f32..=100.0, 0.0f32..=100.0).prop_map(|(x, y)| Position::new(x, y))
    }

    /// Gates sized and placed so both cones stay on the field.
    fn arb_gate() -> impl Strategy<Value = ConeGate> {
        (1.0f32..=12.0, 0.0f32..=1.0, 0.0f32..=100.0, any::<bool>()).prop_map(|(width, t, across, vertical)| {
            let half = width / 2.0;
            let along = half + t * (100.0 - width);
            let (center, orientation) = if vertical {
                (Position::new(across, along), GateOrientation::Vertical)
            } else {
                (Position::new(along, across), GateOrientation::Horizontal)
            };
            ConeGate { id: String::new(), center, width, orientation }
        })
    }

    /// Run, dribble or explicit-target shot by the first player.
    fn arb_action() -> impl Strategy<Value = Action> {
        (0u8..3, arb_position()).prop_map(|(kind, to)| {
            let player = "A1".to_string();
            match kind {
                0 => Action::Run { player, to_position: to },
                1 => Action::Dribble { player, to_position: to, through_gate: None },
                _ => Action::Shot { player, target: Default::default(), to_position: Some(to) },
            }
        })
    }

    fn arb_drill() -> impl Strategy<Value = Drill> {
        (
            prop::collection::vec(arb_position(), 1..6),
            prop::collection::vec(arb_position(), 0..4),
            prop::collection::vec(arb_gate(), 0..3),
            prop::collection::vec(arb_action(), 0..5),
            0u8..=2,
            any::<bool>(),
        )
            .prop_map(|(players, cones, gates, actions, goals, south)| {
                let mut drill = fixtures::single_player();
                drill.players[0].position = players[0];
                drill.balls = vec![Ball { position: players[0] }];
                drill.cones = cones.into_iter().map(|position| Cone { position }).collect();
                for (i, p) in players.iter().enumerate().skip(1) {
                    let mut extra = drill.players[0].clone();
                    extra.id = format!("A{}", i + 1);
                    extra.position = *p;
                    drill.players.push(extra);
                }
                drill.cone_gates = gates
                    .into_iter()
                    .enumerate()
                    .map(|(i, gate)| ConeGate { id: format!("G{}", i + 1), ..gate })
                    .collect();
                drill.actions = actions;
                drill.field.goals = goals;
                if south {
                    drill.field.attacking_direction = AttackingDirection::South;
                }
                drill
            })
    }

    proptest! {
        #[test]
        fn prop_viewport_contains_all_content(drill in arb_drill()) {
            let vp = compute_viewport(&drill);
            for p in content_points(&drill) {
                prop_assert!(vp.contains(p), "{:?} outside {:?}", p, vp);
            }
            let direction = drill.field.attacking_direction;
            for p in drill.actions.iter().filter_map(|a| a.fixed_endpoint(direction)) {
                prop_assert!(vp.contains(p), "action endpoint {:?} outside {:?}", p, vp);
            }
            for p in drill.cone_gates.iter().flat_map(|g| g.edge_points()) {
                prop_assert!(vp.contains(p), "gate cone {:?} outside {:?}", p, vp);
            }
        }

        #[test]
        fn prop_viewport_respects_minimum_extent(drill in arb_drill()) {
            let vp = compute_viewport(&drill);
            prop_assert!(vp.width() >= 30.0 - 1e-3);
            prop_assert!(vp.height() >= 30.0 - 1e-3);
            prop_assert!(vp.x_min >= 0.0 && vp.x_max <= 100.0);
            prop_assert!(vp.y_min >= 0.0 && vp.y_max <= 100.0);
        }

        #[test]
        fn prop_viewport_is_deterministic(drill in arb_drill()) {
            prop_assert_eq!(compute_viewport(&drill), compute_viewport(&drill.clone()));
        }
    }
}
