/// Effective limit: local arg, then the global `--limit`, then `fallback`.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` items from the front.
pub fn take_limited<T: Clone>(items: &[T], limit: Option<u32>) -> Vec<T> {
    let limit = limit.map_or(items.len(), |l| usize::try_from(l).unwrap_or(usize::MAX));
    items.iter().take(limit).cloned().collect()
}
