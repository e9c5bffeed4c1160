//! Movie identifiers: 8-4-4-4-12 hexadecimal tokens.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("identifier pattern is a valid regex")
});

/// Whether `id` is a well-formed identifier. Surrounding whitespace is not
/// tolerated; callers trim first.
pub fn is_valid_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// A random version 4 token used as a placeholder id for new movies.
pub fn generate_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
