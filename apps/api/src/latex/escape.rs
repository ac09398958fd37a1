//! LaTeX text sanitization.
//!
//! Every raw text leaf that ends up in the generated source passes through
//! `escape_latex` exactly once. This is the only safety-relevant code in the
//! renderer: the output is fed to a TeX engine, so an unescaped `\` or `{`
//! is macro injection, not a cosmetic bug.

/// Forced line break emitted for every newline in the input.
const LINE_BREAK: &str = "\\\\ ";

/// Escapes raw text for inclusion in LaTeX source.
///
/// - `\r\n`, `\r`, and `\n` each become exactly one forced line break.
/// - All other control characters (C0, DEL, C1) are dropped.
/// - The ten LaTeX-significant characters are replaced with their
///   literal-safe spellings.
///
/// Single-pass, so emitted escape sequences are never re-scanned. NOT
/// idempotent: escaping already-escaped text double-escapes it, so callers
/// must apply this once per raw field and never to generated markup.
pub fn escape_latex(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                // CRLF collapses to a single break.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str(LINE_BREAK);
            }
            '\n' => out.push_str(LINE_BREAK),
            c if c.is_control() => {}
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '&' => out.push_str("\\&"),
            '#' => out.push_str("\\#"),
            '^' => out.push_str("\\textasciicircum{}"),
            '_' => out.push_str("\\_"),
            '%' => out.push_str("\\%"),
            '~' => out.push_str("\\textasciitilde{}"),
            c => out.push(c),
        }
    }

    out
}

/// Builds an `\href`, control-stripping the URL and escaping both URL and
/// label. Falls back to the URL as the label when none is given.
pub fn href(url: &str, label: &str) -> String {
    let safe_url: String = url.chars().filter(|c| !c.is_control()).collect();
    let label = if label.is_empty() { url } else { label };
    format!("\\href{{{}}}{{{}}}", escape_latex(&safe_url), escape_latex(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_every_special_character() {
        let input = r"\ { } $ & # ^ _ % ~";
        let escaped = escape_latex(input);
        assert_eq!(
            escaped,
            "\\textbackslash{} \\{ \\} \\$ \\& \\# \\textasciicircum{} \\_ \\% \\textasciitilde{}"
        );
    }

    #[test]
    fn test_no_unescaped_special_survives() {
        let escaped = escape_latex("a&b#c$d%e_f~g^h{i}j\\k");
        // Tilde and circumflex are spelled out entirely, so none may remain.
        assert!(!escaped.contains('~'));
        assert!(!escaped.contains('^'));
        // The single-char escapes must all be backslash-prefixed.
        for (i, c) in escaped.char_indices() {
            if "&#$%_".contains(c) {
                assert_eq!(&escaped[i - 1..i], "\\", "unescaped {c} at {i} in {escaped}");
            }
        }
    }

    #[test]
    fn test_crlf_is_one_break_not_two() {
        assert_eq!(escape_latex("a\r\nb"), "a\\\\ b");
        assert_eq!(escape_latex("a\rb"), "a\\\\ b");
        assert_eq!(escape_latex("a\nb"), "a\\\\ b");
        assert_eq!(escape_latex("a\n\nb"), "a\\\\ \\\\ b");
    }

    #[test]
    fn test_control_characters_are_stripped() {
        assert_eq!(escape_latex("a\u{0008}b\u{0000}c\u{009F}d\te"), "abcde");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(escape_latex("Jane Doe, Engineer"), "Jane Doe, Engineer");
        assert_eq!(escape_latex(""), "");
    }

    #[test]
    fn test_backslash_escape_is_not_rescanned() {
        // A lone backslash must not have its replacement's braces re-escaped.
        assert_eq!(escape_latex("\\"), "\\textbackslash{}");
        assert_eq!(escape_latex("\\_"), "\\textbackslash{}\\_");
    }

    #[test]
    fn test_href_escapes_url_and_label() {
        assert_eq!(
            href("http://x.com/a_b", "my site"),
            "\\href{http://x.com/a\\_b}{my site}"
        );
        // Label falls back to the URL.
        assert_eq!(href("http://x.com", ""), "\\href{http://x.com}{http://x.com}");
    }
}
