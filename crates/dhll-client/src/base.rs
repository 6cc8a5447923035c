//! API base URL resolution.

/// Pick the persisted override when non-empty, else the configured base.
/// A single trailing `/` is dropped.
#[must_use]
pub fn resolve_base(override_base: Option<&str>, configured: &str) -> String {
    let chosen = override_base
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or_else(|| configured.trim());
    trim_base(chosen).to_string()
}

#[must_use]
pub fn trim_base(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}
