//! Batch application of diagnostic fixes
//!
//! Fixes are applied in ascending start order; a fix that overlaps an
//! already applied one is skipped. Fixes produced by one lint run are each
//! scoped to a single token, so within a run nothing is ever skipped.

use crate::diagnostic::{Diagnostic, Fix};

/// Apply every fix attached to `diagnostics` to `source_text`.
pub fn apply_fixes(source_text: &str, diagnostics: &[Diagnostic]) -> String {
    let fixes: Vec<&Fix> = diagnostics.iter().flat_map(|d| d.fixes.iter()).collect();
    apply_fix_list(source_text, &fixes)
}

fn apply_fix_list(source_text: &str, fixes: &[&Fix]) -> String {
    let mut ordered: Vec<&Fix> = fixes.to_vec();
    ordered.sort_by_key(|fix| (fix.start, fix.end));

    let mut output = String::with_capacity(source_text.len());
    let mut cursor = 0usize;
    for fix in ordered {
        let start = (fix.start as usize).min(source_text.len());
        let end = (fix.end as usize).min(source_text.len()).max(start);
        if start < cursor {
            // overlaps a fix already applied in this batch
            continue;
        }
        output.push_str(&source_text[cursor..start]);
        output.push_str(&fix.replacement);
        cursor = end;
    }
    output.push_str(&source_text[cursor..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_span::Span;

    fn diagnostic_with(fix: Fix) -> Diagnostic {
        Diagnostic::warning("test-rule", fix.span(), "test").with_fix(fix)
    }

    #[test]
    fn test_apply_no_fixes() {
        assert_eq!(apply_fixes("abc", &[]), "abc");
    }

    #[test]
    fn test_apply_insert_replace_remove() {
        let source = "a b c";
        let diagnostics = vec![
            diagnostic_with(Fix::insert_at(1, ";")),
            diagnostic_with(Fix::replace(Span::new(2, 3), "B")),
            diagnostic_with(Fix::remove(Span::new(4, 5))),
        ];
        assert_eq!(apply_fixes(source, &diagnostics), "a; B ");
    }

    #[test]
    fn test_fixes_applied_in_offset_order() {
        let source = "xy";
        // supplied out of order on purpose
        let diagnostics = vec![
            diagnostic_with(Fix::insert_at(2, "!")),
            diagnostic_with(Fix::insert_at(0, "?")),
        ];
        assert_eq!(apply_fixes(source, &diagnostics), "?xy!");
    }

    #[test]
    fn test_overlapping_fix_skipped() {
        let source = "abcdef";
        let diagnostics = vec![
            diagnostic_with(Fix::replace(Span::new(0, 4), "X")),
            diagnostic_with(Fix::replace(Span::new(2, 6), "Y")),
        ];
        assert_eq!(apply_fixes(source, &diagnostics), "Xef");
    }
}
