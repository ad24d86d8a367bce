//! Scene Composer
//!
//! Emits the layered scene in a fixed back-to-front order and drives the
//! position tracker through the action list. Each arrow is computed from the
//! tracker's state *before* its action is applied.

use super::config::{RenderConfig, StyleConfig};
use super::geometry::{arrow_for, Anchor, ArrowPath, LineStyle};
use super::possession::audit_possession;
use super::tracker::{initial_holder, PositionTracker};
use super::viewport::{compute_viewport_with, MarkingPlan, Viewport};
use crate::error::Result;
use crate::models::{Action, ActionKind, Drill, Facing, Player, Position};
use crate::scene::{ActionTrace, Element, Layer, LayerKind, Point, Scene, Style};

// Fixed marking geometry (field units)
const PENALTY_BOX_X: (f32, f32) = (30.0, 70.0);
const PENALTY_BOX_DEPTH: f32 = 18.0;
const SIX_YARD_X: (f32, f32) = (42.0, 58.0);
const SIX_YARD_DEPTH: f32 = 6.0;
const PENALTY_SPOT_DEPTH: f32 = 12.0;
const CENTER_CIRCLE_RADIUS: f32 = 10.0;

pub fn render(drill: &Drill) -> Result<Scene> {
    render_with(drill, &RenderConfig::default())
}

pub fn render_with(drill: &Drill, cfg: &RenderConfig) -> Result<Scene> {
    let viewport = compute_viewport_with(drill, &cfg.viewport);
    let plan = MarkingPlan::for_drill_with(drill, &viewport, &cfg.viewport);

    for warning in audit_possession(drill) {
        log::warn!("{}: {}", drill.name, warning);
    }

    let mut tracker = PositionTracker::new(drill)?;

    let mut layers = Vec::with_capacity(LayerKind::ORDER.len());
    layers.push(surface_layer(&viewport, &cfg.style));
    layers.push(markings_layer(&viewport, &plan, &cfg.style));
    layers.push(equipment_layer(drill, &cfg.style));
    layers.push(players_layer(drill, &cfg.style));
    layers.push(ball_layer(drill, cfg));
    let (actions, traces) = actions_layer(drill, &mut tracker, cfg)?;
    layers.push(actions);

    Ok(Scene { viewport, layers, traces })
}

// ============================================================================
// Surface
// ============================================================================

fn surface_layer(vp: &Viewport, style: &StyleConfig) -> Layer {
    let mut layer = Layer::new(LayerKind::Surface);
    let sw = style.stripe_width.max(1.0);
    let mut stripe = (vp.x_min / sw).floor() as i64;
    loop {
        let left = stripe as f32 * sw;
        if left >= vp.x_max {
            break;
        }
        let x0 = left.max(vp.x_min);
        let x1 = (left + sw).min(vp.x_max);
        let color = if stripe.rem_euclid(2) == 0 { &style.grass_light } else { &style.grass_dark };
        layer.push(Element::Rect {
            origin: Point::new(x0, vp.y_min),
            width: x1 - x0,
            height: vp.height(),
            style: Style::filled(color),
        });
        stripe += 1;
    }
    layer
}

// ============================================================================
// Markings
// ============================================================================

fn markings_layer(vp: &Viewport, plan: &MarkingPlan, style: &StyleConfig) -> Layer {
    let mut layer = Layer::new(LayerKind::Markings);
    let line = Style::stroked(&style.line_color, style.line_width);

    layer.push(Element::Polyline {
        points: vec![
            Point::new(vp.x_min, vp.y_min),
            Point::new(vp.x_max, vp.y_min),
            Point::new(vp.x_max, vp.y_max),
            Point::new(vp.x_min, vp.y_max),
            Point::new(vp.x_min, vp.y_min),
        ],
        style: line.clone().with_opacity(0.5),
    });

    if plan.halfway_line {
        layer.push(Element::line(Point::new(vp.x_min, 50.0), Point::new(vp.x_max, 50.0), line.clone()));
    }
    if plan.center_circle {
        layer.push(Element::Circle {
            center: Point::new(50.0, 50.0),
            radius: CENTER_CIRCLE_RADIUS,
            style: line.clone(),
        });
        layer.push(Element::Circle {
            center: Point::new(50.0, 50.0),
            radius: 0.4,
            style: Style::filled(&style.line_color),
        });
    }

    for area in &plan.penalty_areas {
        let goal_y = area.goal_line_y;
        let into = if goal_y >= 50.0 { -1.0 } else { 1.0 };
        let pen_y = goal_y + into * PENALTY_BOX_DEPTH;
        let six_y = goal_y + into * SIX_YARD_DEPTH;

        for (x0, x1, depth_y) in [(PENALTY_BOX_X.0, PENALTY_BOX_X.1, pen_y), (SIX_YARD_X.0, SIX_YARD_X.1, six_y)] {
            layer.push(Element::line(Point::new(x0, depth_y), Point::new(x1, depth_y), line.clone()));
            layer.push(Element::line(Point::new(x0, depth_y), Point::new(x0, goal_y), line.clone()));
            layer.push(Element::line(Point::new(x1, depth_y), Point::new(x1, goal_y), line.clone()));
        }
        layer.push(Element::Circle {
            center: Point::new(50.0, goal_y + into * PENALTY_SPOT_DEPTH),
            radius: 0.5,
            style: Style::filled(&style.line_color),
        });

        if area.with_goal {
            end_line_goal(&mut layer, goal_y, style);
        }
    }

    for &goal_y in &plan.bare_goals {
        end_line_goal(&mut layer, goal_y, style);
    }
    layer
}

/// Built-in goal on an end line; the frame extends into the field.
fn end_line_goal(layer: &mut Layer, goal_line_y: f32, style: &StyleConfig) {
    let facing = if goal_line_y >= 50.0 { Facing::South } else { Facing::North };
    goal_frame(layer, Point::new(50.0, goal_line_y), facing, &FULL_GOAL, style);
}

struct FrameSpec {
    width: f32,
    depth: f32,
    post_width: f32,
    strings: usize,
    /// Full goals draw a crossbar at the front and a gray back line;
    /// mini goals only a frame-colored back bar.
    crossbar: bool,
}

const FULL_GOAL: FrameSpec = FrameSpec { width: 8.0, depth: 3.0, post_width: 3.0, strings: 9, crossbar: true };
const MINI_GOAL: FrameSpec = FrameSpec { width: 4.0, depth: 2.0, post_width: 2.0, strings: 5, crossbar: false };

/// Goal frame whose posts run from `base` toward `facing`.
fn goal_frame(layer: &mut Layer, base: Point, facing: Facing, spec: &FrameSpec, style: &StyleConfig) {
    let (ox, oy) = facing.unit();
    let (ax, ay) = (oy, -ox);
    let half = spec.width / 2.0;
    let at = |across: f32, out: f32| base.offset(ax * across + ox * out, ay * across + oy * out);

    let net = Style::stroked(&style.net_color, 0.5).with_opacity(0.4);
    for i in 0..spec.strings {
        let across = -half + spec.width * i as f32 / (spec.strings - 1) as f32;
        layer.push(Element::line(at(across, 0.0), at(across, spec.depth), net.clone()));
    }

    let frame = Style::stroked(&style.goal_color, spec.post_width);
    if spec.crossbar {
        layer.push(Element::line(
            at(-half, 0.0),
            at(half, 0.0),
            Style::stroked(&style.net_color, 1.5).with_opacity(0.6),
        ));
    }
    layer.push(Element::line(at(-half, 0.0), at(-half, spec.depth), frame.clone()));
    layer.push(Element::line(at(half, 0.0), at(half, spec.depth), frame.clone()));
    if spec.crossbar {
        layer.push(Element::line(at(-half, spec.depth), at(half, spec.depth), frame));
    } else {
        layer.push(Element::line(at(-half, 0.0), at(half, 0.0), frame));
    }
}

// ============================================================================
// Equipment
// ============================================================================

fn cone(layer: &mut Layer, p: Position, style: &StyleConfig) {
    let s = style.cone_size;
    layer.push(Element::Polygon {
        points: vec![
            Point::new(p.x, p.y + s * 1.2),
            Point::new(p.x - s, p.y - s * 0.8),
            Point::new(p.x + s, p.y - s * 0.8),
        ],
        style: Style::filled(&style.cone_color).with_stroke("black", 0.8),
    });
}

fn equipment_layer(drill: &Drill, style: &StyleConfig) -> Layer {
    let mut layer = Layer::new(LayerKind::Equipment);

    for gate in &drill.cone_gates {
        for p in gate.cone_positions() {
            cone(&mut layer, p, style);
        }
    }
    for c in &drill.cones {
        cone(&mut layer, c.position, style);
    }

    for line in &drill.cone_lines {
        match (drill.cones.get(line.from_cone), drill.cones.get(line.to_cone)) {
            (Some(from), Some(to)) => layer.push(Element::line(
                from.position,
                to.position,
                Style::stroked(&style.cone_color, 2.0),
            )),
            _ => log::warn!(
                "{}: cone line {} -> {} skipped, only {} cones",
                drill.name,
                line.from_cone,
                line.to_cone,
                drill.cones.len()
            ),
        }
    }

    for m in &drill.mannequins {
        let base = Point::from(m.position);
        let body = Style::filled(&style.mannequin_color).with_stroke("black", 1.0);
        layer.push(Element::Circle { center: base, radius: 1.1, style: body.clone() });
        layer.push(Element::line(base, base.offset(0.0, 2.5), Style::stroked(&style.mannequin_color, 4.0)));
        layer.push(Element::Circle { center: base.offset(0.0, 3.3), radius: 0.8, style: body });
        layer.push(Element::Text {
            at: base.offset(0.0, -2.6),
            content: m.id.clone(),
            font_size: style.font_size - 1.0,
            style: Style::filled("white"),
        });
    }

    for g in &drill.mini_goals {
        goal_frame(&mut layer, g.position.into(), g.facing(), &MINI_GOAL, style);
    }
    for g in &drill.goals {
        goal_frame(&mut layer, g.position.into(), g.facing(), &FULL_GOAL, style);
    }
    layer
}

// ============================================================================
// Players and ball
// ============================================================================

fn players_layer(drill: &Drill, style: &StyleConfig) -> Layer {
    let mut layer = Layer::new(LayerKind::Players);
    for player in &drill.players {
        let center = Point::from(player.position);
        layer.push(Element::Circle {
            center,
            radius: style.player_radius,
            style: Style::filled(style.role_color(player.role)).with_stroke("white", 1.5),
        });
        layer.push(Element::Text {
            at: center.offset(0.0, -(style.player_radius + 1.6)),
            content: player.display_label().to_string(),
            font_size: style.font_size,
            style: Style::filled("white"),
        });
    }
    layer
}

fn ball_layer(drill: &Drill, cfg: &RenderConfig) -> Layer {
    let mut layer = Layer::new(LayerKind::Ball);
    let holder = initial_holder(drill);

    for (i, ball) in drill.balls.iter().enumerate() {
        let mut at = Point::from(ball.position);
        if i == 0 {
            if let Some(holder) = holder.as_deref().and_then(|id| drill.player(id)) {
                at = Point::from(holder.position);
                if let Some((ux, uy)) = first_ball_direction(drill, holder) {
                    at = at.offset(ux * cfg.arrows.ball_offset, uy * cfg.arrows.ball_offset);
                }
            }
        }
        layer.push(Element::Circle {
            center: at,
            radius: cfg.style.ball_radius,
            style: Style::filled("white").with_stroke("black", 1.5),
        });
        layer.push(Element::Circle {
            center: at,
            radius: cfg.style.ball_radius * 0.4,
            style: Style::filled("black"),
        });
    }
    layer
}

/// Direction of the holder's first ball action, measured from spawn positions.
///
/// Actions whose target coincides with the holder are skipped. Dangling
/// receivers are left for the action pass to report.
fn first_ball_direction(drill: &Drill, holder: &Player) -> Option<(f32, f32)> {
    let direction = drill.field.attacking_direction;
    drill
        .actions
        .iter()
        .filter(|a| a.ball_carrier() == Some(holder.id.as_str()))
        .filter_map(|a| match a {
            Action::Pass { to_player, .. } => drill.player(to_player).map(|r| r.position),
            _ => a.fixed_endpoint(direction),
        })
        .find_map(|target| holder.position.unit_toward(target))
}

// ============================================================================
// Actions
// ============================================================================

fn actions_layer(
    drill: &Drill,
    tracker: &mut PositionTracker,
    cfg: &RenderConfig,
) -> Result<(Layer, Vec<ActionTrace>)> {
    let mut layer = Layer::new(LayerKind::Actions);
    let mut traces = Vec::with_capacity(drill.actions.len());

    for (index, action) in drill.actions.iter().enumerate() {
        let (trace, arrow) =
            trace_action(index, action, drill, tracker, cfg).map_err(|e| e.at_action(index))?;
        match arrow {
            Some(arrow) => draw_arrow(&mut layer, &arrow, cfg),
            None => log::debug!(
                "{}: action {} ({}) is degenerate, skipped",
                drill.name,
                index + 1,
                trace.kind.as_str()
            ),
        }
        tracker.apply(action, drill).map_err(|e| e.at_action(index))?;
        traces.push(trace);
    }
    Ok((layer, traces))
}

/// Arrow for one action from the tracker's pre-action state.
fn trace_action(
    index: usize,
    action: &Action,
    drill: &Drill,
    tracker: &PositionTracker,
    cfg: &RenderConfig,
) -> Result<(ActionTrace, Option<ArrowPath>)> {
    let direction = drill.field.attacking_direction;
    let actor = action.actor();
    let raw_start = tracker.position(actor)?;
    let start_anchor = Anchor::for_player(tracker.has_moved(actor)?);
    let (raw_end, end_anchor) = match action {
        Action::Pass { to_player, .. } => {
            (tracker.position(to_player)?, Anchor::for_player(tracker.has_moved(to_player)?))
        }
        Action::Run { to_position, .. } | Action::Dribble { to_position, .. } => {
            (*to_position, Anchor::Bare)
        }
        Action::Shot { .. } => (
            action.shot_target(direction).unwrap_or_else(|| direction.goal_center()),
            Anchor::Flush,
        ),
    };

    let arrow = arrow_for(action.kind(), raw_start, raw_end, (start_anchor, end_anchor), &cfg.arrows);
    let trace = ActionTrace {
        index,
        kind: action.kind(),
        actor: actor.to_string(),
        raw_start,
        raw_end,
        trimmed: arrow.as_ref().map(|a| a.segment),
        start_anchor,
        end_anchor,
    };
    Ok((trace, arrow))
}

fn draw_arrow(layer: &mut Layer, arrow: &ArrowPath, cfg: &RenderConfig) {
    let style = &cfg.style;
    let color = match arrow.kind {
        ActionKind::Pass => &style.pass_color,
        ActionKind::Run => &style.run_color,
        ActionKind::Dribble => &style.dribble_color,
        ActionKind::Shot => &style.shot_color,
    };
    let mut stroke = Style::stroked(color, cfg.arrows.line_width);
    if arrow.line == LineStyle::Dashed {
        stroke = stroke.with_dash(&style.run_dash);
    }
    layer.push(Element::Polyline { points: arrow.body.clone(), style: stroke });
    layer.push(Element::Polygon { points: arrow.head.to_vec(), style: Style::filled(color) });
}
