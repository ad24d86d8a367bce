//! SVG emitter for [`Scene`].
//!
//! Field y grows north; SVG y grows down, so every y is flipped against the
//! viewport's top edge.

use ::svg::node::element::{Circle, Group, Line, Polygon, Polyline, Rectangle, Text};
use ::svg::Document;
use serde::{Deserialize, Serialize};

use super::{Element, Point, Scene, Style};
use crate::engine::viewport::Viewport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    /// Output pixels per field unit (default: 8.0)
    pub scale: f32,
    /// Optional `class` on the root element
    #[serde(default)]
    pub class: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { scale: 8.0, class: None }
    }
}

/// Fixed-precision number formatting keeps output byte-stable across runs.
pub(crate) fn fmt_num(v: f32) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

struct Projection {
    x_min: f32,
    y_max: f32,
    scale: f32,
}

impl Projection {
    fn new(viewport: &Viewport, scale: f32) -> Self {
        Self { x_min: viewport.x_min, y_max: viewport.y_max, scale }
    }

    fn x(&self, x: f32) -> String {
        fmt_num((x - self.x_min) * self.scale)
    }

    fn y(&self, y: f32) -> String {
        fmt_num((self.y_max - y) * self.scale)
    }

    fn len(&self, d: f32) -> String {
        fmt_num(d * self.scale)
    }

    fn points(&self, points: &[Point]) -> String {
        points
            .iter()
            .map(|p| format!("{},{}", self.x(p.x), self.y(p.y)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

macro_rules! styled {
    ($node:expr, $style:expr) => {{
        let style: &Style = $style;
        let mut node = $node.set("fill", style.fill.as_deref().unwrap_or("none"));
        if let Some(stroke) = &style.stroke {
            node = node.set("stroke", stroke.as_str());
        }
        if let Some(width) = style.stroke_width {
            node = node.set("stroke-width", fmt_num(width));
        }
        if let Some(dash) = &style.dash {
            let pattern = dash.iter().map(|d| fmt_num(*d)).collect::<Vec<_>>().join(" ");
            node = node.set("stroke-dasharray", pattern);
        }
        if let Some(opacity) = style.opacity {
            node = node.set("opacity", fmt_num(opacity));
        }
        node
    }};
}

pub fn to_svg(scene: &Scene, options: &SvgOptions) -> String {
    let vp = &scene.viewport;
    let proj = Projection::new(vp, options.scale);
    let width = proj.len(vp.width());
    let height = proj.len(vp.height());

    let mut document = Document::new()
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("width", width.as_str())
        .set("height", height.as_str());
    if let Some(class) = &options.class {
        document = document.set("class", class.as_str());
    }

    for layer in &scene.layers {
        let mut group = Group::new().set("class", layer.kind.name());
        for element in &layer.elements {
            group = append(group, element, &proj);
        }
        document = document.add(group);
    }
    document.to_string()
}

fn append(group: Group, element: &Element, proj: &Projection) -> Group {
    match element {
        Element::Rect { origin, width, height, style } => group.add(styled!(
            Rectangle::new()
                .set("x", proj.x(origin.x))
                .set("y", proj.y(origin.y + height))
                .set("width", proj.len(*width))
                .set("height", proj.len(*height)),
            style
        )),
        Element::Circle { center, radius, style } => group.add(styled!(
            Circle::new()
                .set("cx", proj.x(center.x))
                .set("cy", proj.y(center.y))
                .set("r", proj.len(*radius)),
            style
        )),
        Element::Line { from, to, style } => group.add(styled!(
            Line::new()
                .set("x1", proj.x(from.x))
                .set("y1", proj.y(from.y))
                .set("x2", proj.x(to.x))
                .set("y2", proj.y(to.y))
                .set("stroke-linecap", "round"),
            style
        )),
        Element::Polyline { points, style } => group.add(styled!(
            Polyline::new()
                .set("points", proj.points(points))
                .set("stroke-linejoin", "round"),
            style
        )),
        Element::Polygon { points, style } => {
            group.add(styled!(Polygon::new().set("points", proj.points(points)), style))
        }
        Element::Text { at, content, font_size, style } => group.add(styled!(
            Text::new(content.as_str())
                .set("x", proj.x(at.x))
                .set("y", proj.y(at.y))
                .set("font-size", fmt_num(*font_size))
                .set("font-weight", "bold")
                .set("text-anchor", "middle")
                .set("font-family", "sans-serif"),
            style
        )),
    }
}
