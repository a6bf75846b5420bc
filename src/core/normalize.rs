// src/core/normalize.rs
//
// Comparison keys for ingredient/dose matching and name prefix search.

/// Comparison key for ingredient and dose cells.
///
/// Source data is inconsistent about separators: `"Acetaminophen,"`,
/// `" Acetaminophen , "` and `"Acetaminophen"` all name the same ingredient.
/// Surrounding whitespace is trimmed, a single trailing comma is dropped,
/// then the remainder is trimmed again. Inner text is left untouched.
pub fn normalize_field(s: &str) -> &str {
    let t = s.trim();
    t.strip_suffix(',').unwrap_or(t).trim_end()
}

/// Collapse runs of whitespace into one space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Case-folded form used for prefix matching.
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_comma_and_spaces_are_dropped() {
        assert_eq!(normalize_field("Acetaminophen,"), "Acetaminophen");
        assert_eq!(normalize_field("  Acetaminophen , "), "Acetaminophen");
        assert_eq!(normalize_field("Acetaminophen"), "Acetaminophen");
        assert_eq!(normalize_field("500mg "), "500mg");
    }

    #[test]
    fn only_one_trailing_comma_goes() {
        assert_eq!(normalize_field("a,,"), "a,");
        assert_eq!(normalize_field("Amlodipine, Valsartan"), "Amlodipine, Valsartan");
        assert_eq!(normalize_field(","), "");
        assert_eq!(normalize_field("   "), "");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize_ws("  Tylenol\t 500\n tab "), "Tylenol 500 tab");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn folding_is_unicode_aware() {
        assert_eq!(fold_case("TYLENOL"), "tylenol");
        assert_eq!(fold_case("Ärztin"), "ärztin");
        assert_eq!(fold_case("타이레놀"), "타이레놀");
    }
}
