/// values accepted as an affirmative flag in `oneway`-style and direction tags
pub const TRUTHY: [&str; 3] = ["yes", "true", "1"];
/// values accepted as a negative flag in `oneway`-style and direction tags
pub const FALSY: [&str; 3] = ["no", "false", "0"];

pub fn is_truthy(value: &str) -> bool {
    TRUTHY.contains(&value)
}

pub fn is_falsy(value: &str) -> bool {
    FALSY.contains(&value)
}

/// cuts a string to at most `max_chars` characters. returns the (possibly
/// shortened) value and whether it was shortened.
pub fn truncate(value: &str, max_chars: usize) -> (String, bool) {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => (String::from(&value[..idx]), true),
        None => (String::from(value), false),
    }
}

/// removes single and double quote characters
pub fn strip_quotes(value: &str) -> String {
    value.chars().filter(|c| *c != '\'' && *c != '"').collect()
}
