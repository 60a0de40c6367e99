/// Split a comma separated list into trimmed, non-empty items.
/// A missing input yields an empty list.
pub fn commas_to_vec(input: Option<&str>) -> Vec<&str> {
    let Some(input) = input else {
        return Vec::new();
    };
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Truncate to at most `max_chars` characters.
/// Returns the input untouched when it already fits.
pub fn limit(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}
