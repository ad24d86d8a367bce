//! # drill_core - Soccer Drill Diagram Renderer
//!
//! Turns a declarative drill document (players, equipment, an ordered list of
//! actions) into a layered vector scene and SVG.
//!
//! ## Features
//! - Position chaining: every action starts where the previous one left its actor
//! - Content-driven viewport with goal, goalkeeper and penalty-area rules
//! - Possession audit and per-action animation keyframes
//! - JSON API for hosts that only speak strings
//!
//! ```rust
//! let json = r#"{
//!     "name": "Rondo",
//!     "players": [{ "id": "a1", "role": "ATTACKER", "position": { "x": 40, "y": 50 } }]
//! }"#;
//! let svg = drill_core::render_drill_json(json)?;
//! assert!(svg.contains("<svg"));
//! # Ok::<(), drill_core::RenderError>(())
//! ```

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod scene;

#[cfg(test)]
mod fixtures;

// Re-export main API functions
pub use api::{
    build_timeline_json, compute_viewport_json, drill_schema_json, render_batch,
    render_drill_json, render_drill_json_with, render_response_json, RenderResponse,
    SCHEMA_VERSION,
};
pub use error::{RenderError, Result};

// Re-export engine entry points
pub use engine::{
    audit_possession, build_timeline, compute_viewport, compute_viewport_with, render,
    render_with, MarkingPlan, PositionTracker, PossessionWarning, RenderConfig, Timeline,
    Viewport,
};

// Re-export document model
pub use models::{Action, ActionKind, Drill, FieldConfig, Player, PlayerRole, Position};

pub use scene::{to_svg, Scene, SvgOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
