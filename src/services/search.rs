/// Case-insensitive substring match. A missing or blank query matches everything.
pub(crate) fn matches_query(haystack: &str, query: Option<&str>) -> bool {
    match query.map(str::trim).filter(|query| !query.is_empty()) {
        Some(query) => haystack.to_lowercase().contains(&query.to_lowercase()),
        None => true,
    }
}
