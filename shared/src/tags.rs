//! Comma-delimited tag handling
//!
//! Tags are stored as a single text column (`"wordle,daily,words"`).

/// Split a comma-delimited tag string into trimmed, non-empty tags
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join tags into their stored form
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}
