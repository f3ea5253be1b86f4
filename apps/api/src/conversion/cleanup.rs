/// Trims surrounding whitespace, then removes one pair of wrapping `"` if the
/// completion both starts and ends with one. Models sometimes quote their answer.
pub fn clean_completion(raw: &str) -> &str {
    strip_wrapping_quotes(raw.trim())
}

fn strip_wrapping_quotes(text: &str) -> &str {
    if text.len() >= 2 {
        if let Some(inner) = text.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
            return inner;
        }
    }
    text
}
