/// Splits a comma-separated CLI list such as `"1, 1,2"` or `"+,-,+"` into trimmed tokens.
/// Empty tokens are kept so the validator can report their position.
pub fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|tok| tok.trim().to_string()).collect()
}
