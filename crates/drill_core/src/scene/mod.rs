//! Vector Scene
//!
//! Format-independent output of the composer: ordered layers of primitive
//! elements in field coordinates (y grows north), plus one trace per action
//! so callers can inspect chaining without parsing any output format.
//!
//! Geometry and sizes are in field units. `stroke_width` and `font_size`
//! are in output pixels.

pub mod svg;

use serde::Serialize;

use crate::engine::geometry::{Anchor, Segment};
use crate::engine::viewport::Viewport;
use crate::models::{ActionKind, Position};

pub use self::svg::{to_svg, SvgOptions};

/// Unclamped point; arrowheads and dribble waves may leave the 0-100 field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    #[inline]
    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

impl From<Position> for Point {
    fn from(p: Position) -> Self {
        Point { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Style {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f32>,
    pub dash: Option<Vec<f32>>,
    pub opacity: Option<f32>,
}

impl Style {
    pub fn filled(color: &str) -> Self {
        Self { fill: Some(color.to_string()), ..Self::default() }
    }

    pub fn stroked(color: &str, width: f32) -> Self {
        Self { stroke: Some(color.to_string()), stroke_width: Some(width), ..Self::default() }
    }

    pub fn with_stroke(mut self, color: &str, width: f32) -> Self {
        self.stroke = Some(color.to_string());
        self.stroke_width = Some(width);
        self
    }

    pub fn with_dash(mut self, dash: &[f32]) -> Self {
        self.dash = Some(dash.to_vec());
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Element {
    /// `origin` is the lower-left corner
    Rect { origin: Point, width: f32, height: f32, style: Style },
    Circle { center: Point, radius: f32, style: Style },
    Line { from: Point, to: Point, style: Style },
    Polyline { points: Vec<Point>, style: Style },
    Polygon { points: Vec<Point>, style: Style },
    /// Centered horizontally on `at`
    Text { at: Point, content: String, font_size: f32, style: Style },
}

impl Element {
    pub fn line(from: impl Into<Point>, to: impl Into<Point>, style: Style) -> Self {
        Element::Line { from: from.into(), to: to.into(), style }
    }

    pub fn style(&self) -> &Style {
        match self {
            Element::Rect { style, .. }
            | Element::Circle { style, .. }
            | Element::Line { style, .. }
            | Element::Polyline { style, .. }
            | Element::Polygon { style, .. }
            | Element::Text { style, .. } => style,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Surface,
    Markings,
    Equipment,
    Players,
    Ball,
    Actions,
}

impl LayerKind {
    /// Back to front.
    pub const ORDER: [LayerKind; 6] = [
        LayerKind::Surface,
        LayerKind::Markings,
        LayerKind::Equipment,
        LayerKind::Players,
        LayerKind::Ball,
        LayerKind::Actions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::Surface => "surface",
            LayerKind::Markings => "markings",
            LayerKind::Equipment => "equipment",
            LayerKind::Players => "players",
            LayerKind::Ball => "ball",
            LayerKind::Actions => "actions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub elements: Vec<Element>,
}

impl Layer {
    pub fn new(kind: LayerKind) -> Self {
        Self { kind, elements: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

/// What the composer decided for one action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionTrace {
    pub index: usize,
    pub kind: ActionKind,
    pub actor: String,
    /// Tracker coordinates before the action was applied
    pub raw_start: Position,
    pub raw_end: Position,
    /// `None` when the arrow was degenerate and skipped
    pub trimmed: Option<Segment>,
    pub start_anchor: Anchor,
    pub end_anchor: Anchor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub viewport: Viewport,
    pub layers: Vec<Layer>,
    pub traces: Vec<ActionTrace>,
}

impl Scene {
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn element_count(&self) -> usize {
        self.layers.iter().map(|l| l.elements.len()).sum()
    }
}
