//! Response normalization for `/enhance` replies.
//!
//! The upstream service has shipped several reply shapes over time. Each
//! output field is resolved by probing an ordered table of dotted lookup paths
//! and taking the first value that is present. New shapes are supported by
//! extending the tables, never by adding branches.
//!
//! Presence rules:
//! - scalar fields: the value exists and is not `null`, `""` or `[]`
//! - sequence fields: the value is a non-empty array
//!
//! Normalization is total: missing path segments, wrong types and a `null`
//! root all degrade to the defaults of [`EnhanceResult`].

use serde_json::Value;

use crate::entities::{EmbeddedPolicy, EnhanceResult};

/// Candidate paths for `enriched`, highest priority first.
pub const ENRICHED_PATHS: &[&str] = &[
    "enhanced",
    "enhanced_text",
    "enhancedText",
    "enhancedOutput",
    "output",
    "result.enhanced",
    "data.enhanced",
    "modified",
    "original",
];

/// Candidate paths for `tags`.
pub const TAG_PATHS: &[&str] = &[
    "tags",
    "tagList",
    "result.tags",
    "data.tags",
    "wave_b.matched",
];

/// Candidate paths for `rationale`.
pub const RATIONALE_PATHS: &[&str] = &[
    "rationale",
    "rationaleText",
    "result.rationale",
    "data.rationale",
];

/// Candidate paths for `actions`.
pub const ACTION_PATHS: &[&str] = &[
    "actions",
    "actionItems",
    "result.actions",
    "data.actions",
    "wave_b.do",
];

/// Candidate paths for the embedded policy object.
pub const POLICY_PATHS: &[&str] = &["policy_result", "policyResult"];

/// Candidate paths for the top-level mode used when no policy object exists.
pub const MODE_PATHS: &[&str] = &["mode"];

/// Canonicalize an arbitrary `/enhance` reply.
#[must_use]
pub fn normalize(raw: &Value) -> EnhanceResult {
    let enriched = pick(raw, ENRICHED_PATHS).map(coerce_string).unwrap_or_default();
    let tags = pick_sequence(raw, TAG_PATHS);
    let rationale = pick(raw, RATIONALE_PATHS)
        .map(coerce_string)
        .unwrap_or_default();
    let actions = pick_sequence(raw, ACTION_PATHS);

    EnhanceResult {
        enriched,
        tags,
        rationale,
        actions,
        policy_result: embedded_policy(raw),
    }
}

/// Resolve the embedded policy signal.
///
/// A truthy policy object is read field by field (`allowed` by truthiness, so
/// an object without `allowed` blocks). Anything else falls back to
/// `{allowed: true, mode: <top-level mode or "advisory">}`.
fn embedded_policy(raw: &Value) -> EmbeddedPolicy {
    match pick(raw, POLICY_PATHS) {
        Some(policy) if is_truthy(policy) => EmbeddedPolicy {
            allowed: policy.get("allowed").is_some_and(is_truthy),
            mode: policy
                .get("mode")
                .filter(|mode| is_truthy(mode))
                .map(coerce_string)
                .unwrap_or_default(),
        },
        _ => EmbeddedPolicy {
            allowed: true,
            mode: pick(raw, MODE_PATHS)
                .map(coerce_string)
                .unwrap_or_else(|| String::from("advisory")),
        },
    }
}

/// Walk a dotted path. Object keys match by name; array segments by index.
#[must_use]
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// First present value among `paths`.
#[must_use]
pub fn pick<'a>(root: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths
        .iter()
        .filter_map(|path| lookup(root, path))
        .find(|value| is_present(value))
}

/// First non-empty array among `paths`, with elements coerced to strings.
/// `null` elements are dropped.
#[must_use]
pub fn pick_sequence(root: &Value, paths: &[&str]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| lookup(root, path))
        .find_map(|value| match value {
            Value::Array(items) if !items.is_empty() => Some(items),
            _ => None,
        })
        .map(|items| {
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(coerce_string)
                .collect()
        })
        .unwrap_or_default()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Loose truthiness: `null`, `false`, `0` and `""` are false, everything else true.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of any JSON value.
///
/// Strings are taken verbatim, arrays join their coerced elements with `,`,
/// objects render as compact JSON.
#[must_use]
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(coerce_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}
