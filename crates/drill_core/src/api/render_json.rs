//! JSON API for drill rendering
//!
//! String-in, string-out entry points for hosts that only speak JSON. The
//! `*_json` functions return `Result`; [`render_response_json`] always returns
//! an envelope and reports failures inside it.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::engine::animation::{build_timeline, Timeline};
use crate::engine::composer::render_with;
use crate::engine::config::RenderConfig;
use crate::engine::possession::audit_possession;
use crate::engine::viewport::{compute_viewport_with, Viewport};
use crate::error::{RenderError, Result};
use crate::models::Drill;
use crate::scene::{to_svg, SvgOptions};

/// Schema version stamped on every response envelope
pub const SCHEMA_VERSION: &str = "v1";

/// Batches at or below this size render on the calling thread
pub const PARALLEL_BATCH_THRESHOLD: usize = 4;

static DRILL_SCHEMA: Lazy<Result<String>> = Lazy::new(|| {
    serde_json::to_string_pretty(&Drill::json_schema())
        .map_err(|e| RenderError::Serialization(e.to_string()))
});

/// Render envelope for callers that want metadata alongside the SVG
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub success: bool,
    pub svg: Option<String>,
    pub viewport: Option<Viewport>,
    pub warnings: Vec<String>,
    pub error: Option<String>,
    pub schema_version: String,
    pub generated_at: DateTime<Utc>,
}

impl RenderResponse {
    pub fn success(svg: String, viewport: Viewport, warnings: Vec<String>) -> Self {
        Self {
            success: true,
            svg: Some(svg),
            viewport: Some(viewport),
            warnings,
            error: None,
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
        }
    }

    pub fn error(err: &RenderError) -> Self {
        Self {
            success: false,
            svg: None,
            viewport: None,
            warnings: Vec::new(),
            error: Some(err.to_string()),
            schema_version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
        }
    }
}

fn render_svg(drill: &Drill, cfg: &RenderConfig, options: &SvgOptions) -> Result<String> {
    let scene = render_with(drill, cfg)?;
    debug!(drill = %drill.name, elements = scene.element_count(), "rendered drill");
    Ok(to_svg(&scene, options))
}

/// Parse a drill document and return its SVG.
pub fn render_drill_json(drill_json: &str) -> Result<String> {
    render_drill_json_with(drill_json, &RenderConfig::from_env_or_default(), &SvgOptions::default())
}

pub fn render_drill_json_with(
    drill_json: &str,
    cfg: &RenderConfig,
    options: &SvgOptions,
) -> Result<String> {
    let drill = Drill::from_json(drill_json).map_err(|e| {
        warn!("Failed to load drill document: {}", e);
        e
    })?;
    render_svg(&drill, cfg, options)
}

/// Render into a [`RenderResponse`] envelope; never fails.
pub fn render_response_json(drill_json: &str) -> String {
    let cfg = RenderConfig::from_env_or_default();
    let response = match Drill::from_json(drill_json) {
        Ok(drill) => match render_svg(&drill, &cfg, &SvgOptions::default()) {
            Ok(svg) => {
                let viewport = compute_viewport_with(&drill, &cfg.viewport);
                let warnings = audit_possession(&drill).iter().map(|w| w.to_string()).collect();
                RenderResponse::success(svg, viewport, warnings)
            }
            Err(e) => {
                warn!(drill = %drill.name, "Render failed: {}", e);
                RenderResponse::error(&e)
            }
        },
        Err(e) => {
            warn!("Failed to load drill document: {}", e);
            RenderResponse::error(&e)
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|_| "{}".to_string())
}

/// Viewport of a drill document, as JSON.
pub fn compute_viewport_json(drill_json: &str) -> Result<String> {
    let drill = Drill::from_json(drill_json)?;
    let cfg = RenderConfig::from_env_or_default();
    let viewport = compute_viewport_with(&drill, &cfg.viewport);
    Ok(serde_json::to_string(&viewport)?)
}

/// Animation timeline of a drill document, as JSON.
pub fn build_timeline_json(drill_json: &str) -> Result<String> {
    let drill = Drill::from_json(drill_json)?;
    let timeline: Timeline = build_timeline(&drill, &RenderConfig::from_env_or_default().animation)?;
    Ok(serde_json::to_string(&timeline)?)
}

/// JSON Schema of the drill document. Generated once per process.
pub fn drill_schema_json() -> Result<String> {
    (*DRILL_SCHEMA).clone()
}

/// Render several drills to SVG, preserving input order.
pub fn render_batch(drills: &[Drill], cfg: &RenderConfig) -> Vec<Result<String>> {
    let options = SvgOptions::default();
    if drills.len() <= PARALLEL_BATCH_THRESHOLD {
        return drills.iter().map(|d| render_svg(d, cfg, &options)).collect();
    }
    debug!(count = drills.len(), "rendering batch in parallel");
    drills.par_iter().map(|d| render_svg(d, cfg, &options)).collect()
}

// ========== Tests ==========
