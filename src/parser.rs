//! Plan response parsing
//!
//! The generative model replies with free-form text that should contain a
//! JSON plan document, usually fenced or wrapped in prose. This module
//! isolates all of the tolerance and coercion at that boundary: tolerant
//! about the noise around the JSON, strict about the JSON's own shape.
//! Nothing partially parsed ever leaves this module.

use tracing::debug;

use crate::Result;
use crate::error::GezginError;
use crate::models::TravelPlan;

/// Parse the raw model reply into a [`TravelPlan`].
///
/// Fails with [`GezginError::MalformedResponse`] when the text carries no
/// JSON object at all, and with [`GezginError::SchemaMismatch`] when the
/// JSON does not match the plan shape. Unknown fields are ignored and
/// unknown weather icons coerce to the fallback, so a plan from a newer or
/// sloppier model still parses.
pub fn parse_plan(raw: &str) -> Result<TravelPlan> {
    let span = extract_json_span(raw).ok_or_else(|| {
        GezginError::malformed_response("model output contains no JSON object")
    })?;

    debug!(
        raw_len = raw.len(),
        span_len = span.len(),
        "extracted candidate JSON span"
    );

    serde_json::from_str(span).map_err(|e| match e.classify() {
        // Not even valid JSON inside the braces, e.g. a truncated reply.
        serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
            GezginError::malformed_response(format!("JSON span does not parse: {e}"))
        }
        _ => GezginError::schema_mismatch(format!("plan document has unexpected shape: {e}")),
    })
}

/// Locate the outermost brace-delimited span: the first `{` through the
/// last `}`. Mirrors the greedy match the original client used, which
/// strips code fences and prose in one step.
fn extract_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}
