//! Field quoting: `"..."` with backslash escapes.

/// Drops ASCII control characters, escapes `\` and `"`, and wraps the
/// result in double quotes.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars().filter(|c| !c.is_ascii_control()) {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Reverses the escaping inside a quoted field (without the surrounding
/// quotes). A trailing lone backslash is kept.
pub fn unescape(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interior(quoted: &str) -> &str {
        &quoted[1..quoted.len() - 1]
    }

    #[test]
    fn quotes_and_escapes() {
        assert_eq!(quote("Bank"), r#""Bank""#);
        assert_eq!(quote(""), r#""""#);
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r"C:\temp"), r#""C:\\temp""#);
    }

    #[test]
    fn strips_control_characters_before_escaping() {
        assert_eq!(quote("a\tb\r\nc\u{7f}"), r#""abc""#);
        assert_eq!(quote("\u{1}\"\u{2}"), r#""\"""#);
    }

    #[test]
    fn unescape_reverses_quote() {
        for s in ["", "Bank", r#"a "b" c"#, r"back\slash", r#"\""#, "Kassa åäö", r"\\\"] {
            assert_eq!(unescape(interior(&quote(s))), s, "input {s:?}");
        }
    }

    #[test]
    fn control_characters_are_not_round_tripped() {
        assert_eq!(unescape(interior(&quote("line\nbreak"))), "linebreak");
    }

    #[test]
    fn trailing_backslash_is_kept() {
        assert_eq!(unescape(r"abc\"), r"abc\");
    }
}
