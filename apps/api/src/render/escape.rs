//! LaTeX escaping — single left-to-right scan over the input.
//!
//! Each input character is mapped independently, so a substitution can never
//! be re-escaped by a later rule (a literal `{` becomes `\{`, never `\\{`).

/// Escapes every LaTeX-special character in `input`.
///
/// `& % $ # _ { }` get a backslash prefix; `~` and `^` become their
/// `\textascii…` macros because the bare escaped forms produce accents.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde"),
            '^' => out.push_str("\\textasciicircum"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_each_special_character() {
        let cases = [
            ("&", "\\&"),
            ("%", "\\%"),
            ("$", "\\$"),
            ("#", "\\#"),
            ("_", "\\_"),
            ("{", "\\{"),
            ("}", "\\}"),
            ("~", "\\textasciitilde"),
            ("^", "\\textasciicircum"),
        ];
        for (input, expected) in cases {
            assert_eq!(escape_latex(input), expected, "escaping {input:?}");
        }
    }

    #[test]
    fn test_braces_are_not_double_escaped() {
        // One pass: the backslash introduced for `{` must not itself be touched.
        assert_eq!(escape_latex("{}"), "\\{\\}");
        assert_eq!(escape_latex("a{b}c"), "a\\{b\\}c");
    }

    #[test]
    fn test_mixed_text_keeps_ordinary_characters() {
        assert_eq!(
            escape_latex("R&D budget: 100% of $5M #1 priority"),
            "R\\&D budget: 100\\% of \\$5M \\#1 priority"
        );
    }

    #[test]
    fn test_empty_input_escapes_to_empty() {
        assert_eq!(escape_latex(""), "");
    }

    #[test]
    fn test_unicode_passes_through() {
        assert_eq!(escape_latex("Éducation — résumé"), "Éducation — résumé");
    }
}
