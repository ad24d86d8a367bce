//! Arrow geometry
//!
//! Pure trim/offset math and per-kind arrow paths. Nothing here knows about
//! the tracker; the composer decides the anchors and passes raw endpoints in.

use serde::Serialize;

use super::config::ArrowConfig;
use crate::models::{ActionKind, Position};
use crate::scene::Point;

/// What sits at an arrow endpoint, which decides how far the arrow stays clear of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Player marker still at its spawn position
    Marker,
    /// Point left behind by an earlier action
    Bare,
    /// Shot target; the arrow touches it
    Flush,
}

impl Anchor {
    #[inline]
    pub fn for_player(has_moved: bool) -> Self {
        if has_moved {
            Anchor::Bare
        } else {
            Anchor::Marker
        }
    }

    pub fn clearance(self, cfg: &ArrowConfig) -> f32 {
        match self {
            Anchor::Marker => cfg.player_offset,
            Anchor::Bare => cfg.chain_gap,
            Anchor::Flush => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.start.distance_to(self.end)
    }

    /// Unit direction, `None` for a zero-length segment.
    pub fn direction(&self) -> Option<(f32, f32)> {
        let len = self.length();
        if len <= f32::EPSILON {
            return None;
        }
        Some(((self.end.x - self.start.x) / len, (self.end.y - self.start.y) / len))
    }
}

/// Shorten both ends along the raw direction by each anchor's clearance.
///
/// Returns `None` when the raw points coincide or the clearances eat the
/// whole segment.
pub fn trim_segment(
    start: Position,
    end: Position,
    start_anchor: Anchor,
    end_anchor: Anchor,
    cfg: &ArrowConfig,
) -> Option<Segment> {
    let (ux, uy) = start.unit_toward(end)?;
    let dist = start.distance_to(end);
    let head = start_anchor.clearance(cfg);
    let tail = end_anchor.clearance(cfg);
    if head + tail >= dist {
        return None;
    }
    Some(Segment {
        start: Point::new(start.x + ux * head, start.y + uy * head),
        end: Point::new(end.x - ux * tail, end.y - uy * tail),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    Wavy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrowPath {
    pub kind: ActionKind,
    pub line: LineStyle,
    /// Stops `head_length` short of the tip
    pub body: Vec<Point>,
    /// Tip first, then the two base corners
    pub head: [Point; 3],
    pub segment: Segment,
}

impl ArrowPath {
    pub fn tip(&self) -> Point {
        self.head[0]
    }
}

fn build(kind: ActionKind, line: LineStyle, segment: Segment, cfg: &ArrowConfig) -> Option<ArrowPath> {
    let (ux, uy) = segment.direction()?;
    let len = segment.length();
    let head_len = cfg.head_length.min(len);
    let body_len = len - head_len;
    let (px, py) = (-uy, ux);

    let along = |d: f32| segment.start.offset(ux * d, uy * d);
    let body_end = along(body_len);

    let body = match line {
        LineStyle::Solid | LineStyle::Dashed => {
            let n = cfg.straight_samples.max(2);
            (0..n).map(|i| along(body_len * i as f32 / (n - 1) as f32)).collect()
        }
        LineStyle::Wavy => {
            let n = cfg.wave_samples.max(2);
            (0..n)
                .map(|i| {
                    let f = i as f32 / (n - 1) as f32;
                    let wave = (f * cfg.wave_cycles * std::f32::consts::TAU).sin() * cfg.wave_amplitude;
                    along(body_len * f).offset(px * wave, py * wave)
                })
                .collect()
        }
    };

    let half = cfg.head_width / 2.0;
    let head = [
        segment.end,
        body_end.offset(px * half, py * half),
        body_end.offset(-px * half, -py * half),
    ];

    Some(ArrowPath { kind, line, body, head, segment })
}

pub fn pass_arrow(segment: Segment, cfg: &ArrowConfig) -> Option<ArrowPath> {
    build(ActionKind::Pass, LineStyle::Solid, segment, cfg)
}

pub fn run_arrow(segment: Segment, cfg: &ArrowConfig) -> Option<ArrowPath> {
    build(ActionKind::Run, LineStyle::Dashed, segment, cfg)
}

pub fn dribble_arrow(segment: Segment, cfg: &ArrowConfig) -> Option<ArrowPath> {
    build(ActionKind::Dribble, LineStyle::Wavy, segment, cfg)
}

pub fn shot_arrow(segment: Segment, cfg: &ArrowConfig) -> Option<ArrowPath> {
    build(ActionKind::Shot, LineStyle::Solid, segment, cfg)
}

/// Trim the raw endpoints and build the arrow for `kind`.
///
/// Degenerate input yields `None`; it is never an error.
pub fn arrow_for(
    kind: ActionKind,
    start: Position,
    end: Position,
    anchors: (Anchor, Anchor),
    cfg: &ArrowConfig,
) -> Option<ArrowPath> {
    let segment = trim_segment(start, end, anchors.0, anchors.1, cfg)?;
    match kind {
        ActionKind::Pass => pass_arrow(segment, cfg),
        ActionKind::Run => run_arrow(segment, cfg),
        ActionKind::Dribble => dribble_arrow(segment, cfg),
        ActionKind::Shot => shot_arrow(segment, cfg),
    }
}
