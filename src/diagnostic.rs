//! Diagnostic types for lint results

use oxc_span::Span;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Info,
    Hint,
}

/// A suggested text edit for a diagnostic.
///
/// An edit is always scoped to a single token's range, or to a zero-width
/// insertion point right after one, so edits computed independently for
/// sibling nodes never overlap and can be applied together in one batch.
#[derive(Debug, Clone)]
pub struct Fix {
    /// Start position of the span to replace
    pub start: u32,
    /// End position of the span to replace
    pub end: u32,
    /// The replacement text
    pub replacement: String,
    /// Description of what the fix does
    pub message: Option<String>,
}

impl Fix {
    /// Replace the text covered by `span` with `replacement`.
    pub fn replace(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            replacement: replacement.into(),
            message: None,
        }
    }

    /// Delete the text covered by `span`.
    pub fn remove(span: Span) -> Self {
        Self::replace(span, "")
    }

    /// Insert `text` at `offset` without replacing anything.
    pub fn insert_at(offset: u32, text: impl Into<String>) -> Self {
        Self::replace(Span::new(offset, offset), text)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn is_insertion(&self) -> bool {
        self.start == self.end
    }
}

/// A lint diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic
    pub rule: String,
    /// Start position of the span
    pub start: u32,
    /// End position of the span
    pub end: u32,
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Suggested fixes
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn new(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            start: span.start,
            end: span.end,
            message: message.into(),
            severity: DiagnosticSeverity::Warning,
            fixes: Vec::new(),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }

    pub fn error(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self::new(rule, span, message).with_severity(DiagnosticSeverity::Error)
    }

    pub fn warning(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self::new(rule, span, message).with_severity(DiagnosticSeverity::Warning)
    }
}
