//! Source-text scanning helpers for TypeScript style rules
//!
//! Delimiter rules cannot assume the parser includes (or excludes) separator
//! tokens in a node's span, so they inspect the raw source bytes around
//! member spans. Scanning skips comments, and treats string literals as
//! opaque tokens so a `;` inside one is never mistaken for a delimiter.

use oxc_span::Span;

/// Offsets of the first and last significant byte in `[start, end)`.
///
/// A significant byte is anything that is not whitespace and not inside a
/// `//` or `/* */` comment. The quotes of a string literal bound the token;
/// its contents are skipped as a unit.
pub(crate) fn code_byte_bounds(source: &str, start: u32, end: u32) -> (Option<u32>, Option<u32>) {
    let bytes = source.as_bytes();
    let end = (end as usize).min(bytes.len());
    let mut i = (start as usize).min(end);
    let mut first = None;
    let mut last = None;
    while i < end {
        match bytes[i] {
            b'/' if i + 1 < end && bytes[i + 1] == b'/' => {
                while i < end && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if i + 1 < end && bytes[i + 1] == b'*' => {
                i += 2;
                while i + 1 < end && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = (i + 2).min(end);
            }
            quote @ (b'"' | b'\'' | b'`') => {
                first.get_or_insert(i as u32);
                last = Some(i as u32);
                i += 1;
                while i < end && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
                if i < end {
                    last = Some(i as u32);
                    i += 1;
                }
            }
            b if b.is_ascii_whitespace() => i += 1,
            _ => {
                first.get_or_insert(i as u32);
                last = Some(i as u32);
                i += 1;
            }
        }
    }
    (first, last)
}

/// Offset of the last significant byte within `span`, if any.
pub(crate) fn last_code_byte(source: &str, span: Span) -> Option<u32> {
    code_byte_bounds(source, span.start, span.end).1
}

/// Offset of the first significant byte in `[start, end)`, if any.
pub(crate) fn first_code_byte(source: &str, start: u32, end: u32) -> Option<u32> {
    code_byte_bounds(source, start, end).0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(source: &str) -> (Option<u32>, Option<u32>) {
        code_byte_bounds(source, 0, source.len() as u32)
    }

    #[test]
    fn test_plain_text() {
        let (first, last) = bounds("  a: string;  ");
        assert_eq!(first, Some(2));
        assert_eq!(last, Some(11));
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(bounds(""), (None, None));
        assert_eq!(bounds("   \n\t "), (None, None));
    }

    #[test]
    fn test_line_comment_skipped() {
        // the `;` lives inside the comment
        let (first, last) = bounds("a // trailing; note\n");
        assert_eq!(first, Some(0));
        assert_eq!(last, Some(0));
    }

    #[test]
    fn test_block_comment_skipped() {
        let (first, last) = bounds("a /* ; */ ,");
        assert_eq!(first, Some(0));
        assert_eq!(last, Some(10));
    }

    #[test]
    fn test_string_contents_opaque() {
        let source = r#"a: "x;y""#;
        let (first, last) = bounds(source);
        assert_eq!(first, Some(0));
        // last significant byte is the closing quote, not the `;` inside
        assert_eq!(last, Some(source.len() as u32 - 1));
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let source = r#""a\";" ,"#;
        let (_, last) = bounds(source);
        assert_eq!(last, Some(source.len() as u32 - 1));
    }

    #[test]
    fn test_out_of_range_start() {
        assert_eq!(code_byte_bounds("ab", 5, 9), (None, None));
    }
}
