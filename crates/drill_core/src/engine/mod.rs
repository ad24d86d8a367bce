pub mod animation; // Keyframe timeline over the chained positions
pub mod composer;
pub mod config;
pub mod geometry; // Arrow trimming and per-kind paths
pub mod possession;
pub mod tracker;
pub mod viewport;

pub use animation::{build_timeline, Easing, Keyframe, Timeline};
pub use composer::{render, render_with};
pub use config::RenderConfig;
pub use geometry::{arrow_for, trim_segment, Anchor, ArrowPath, LineStyle, Segment};
pub use possession::{audit_possession, PossessionWarning};
pub use tracker::PositionTracker;
pub use viewport::{compute_viewport, compute_viewport_with, MarkingPlan, Viewport};
