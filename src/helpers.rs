/// Prune fragment (#hash) from an href.
/// Returns (`href_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a fragment-free href into pathname and query.
/// The query keeps its leading '?'.
pub fn split_search(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes())
        .map_or((input, None), |pos| (&input[..pos], Some(&input[pos..])))
}

/// Split a `name=value` pair at the first '='.
/// A pair without '=' has an empty value.
pub fn split_pair(pair: &str) -> (&str, &str) {
    memchr::memchr(b'=', pair.as_bytes())
        .map_or((pair, ""), |pos| (&pair[..pos], &pair[pos + 1..]))
}

/// Strip a single leading '?' from a query string.
pub fn strip_question_mark(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}
