//! Parsing of resource ids taken from paths and request bodies.

/// Parses a positive integer id.
///
/// Surrounding whitespace is ignored. Anything that is not a positive `i32`
/// yields `None`.
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}
