//! Presentation helpers for category labels.

/// Upper-case only the first character of a label, leaving the rest untouched.
/// `"shoes"` becomes `"Shoes"`; `"SHOES"` stays `"SHOES"`.
pub fn capitalize_label(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
