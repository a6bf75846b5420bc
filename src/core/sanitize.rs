// src/core/sanitize.rs

/// Filesystem-safe file stem for a category name.
///
/// Letters and digits are kept (including non-ASCII, so Korean category names
/// survive), whitespace runs become one `_`, `-` and `_` pass through, anything
/// else is dropped. An empty result falls back to `fallback`.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us {
                out.push('_');
                last_us = true;
            }
        } else if ch == '-' {
            out.push(ch);
            last_us = false;
        }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { s!(fallback) } else { s!(out) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_punctuation() {
        assert_eq!(sanitize_filename("Pain / Fever", "x"), "Pain_Fever");
        assert_eq!(sanitize_filename("  anti-hypertensive  ", "x"), "anti-hypertensive");
        assert_eq!(sanitize_filename("a__b", "x"), "a_b");
    }

    #[test]
    fn keeps_hangul_and_falls_back_when_empty() {
        assert_eq!(sanitize_filename("해열 진통제", "x"), "해열_진통제");
        assert_eq!(sanitize_filename("///", "uncategorized"), "uncategorized");
    }
}
