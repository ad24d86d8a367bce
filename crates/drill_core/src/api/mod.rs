pub mod render_json;

pub use render_json::{
    build_timeline_json, compute_viewport_json, drill_schema_json, render_batch,
    render_drill_json, render_drill_json_with, render_response_json, RenderResponse,
    PARALLEL_BATCH_THRESHOLD, SCHEMA_VERSION,
};
