//! member-delimiter-style
//!
//! Require a specific member delimiter style for interfaces and type literals.

use oxc_ast::ast::{TSInterfaceBody, TSTypeLiteral};
use oxc_span::{GetSpan, Span};
use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::{first_code_byte, last_code_byte};
use crate::{RuleCategory, RuleMeta};

/// A member delimiter token requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// No delimiter
    None,
    /// Semicolon (`;`)
    Semi,
    /// Comma (`,`)
    Comma,
}

impl Delimiter {
    fn token(self) -> &'static str {
        match self {
            Delimiter::None => "",
            Delimiter::Semi => ";",
            Delimiter::Comma => ",",
        }
    }
}

/// Partial delimiter settings: the shape of both the global options and a
/// per-construct override. Absent fields fall through to the previous
/// overlay stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DelimiterOverride {
    #[serde(default)]
    pub delimiter: Option<Delimiter>,
    #[serde(default)]
    pub require_last: Option<bool>,
    #[serde(default)]
    pub single_line: Option<Delimiter>,
}

/// Per-construct overrides
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DelimiterOverrides {
    #[serde(default)]
    pub interface: DelimiterOverride,
    #[serde(default)]
    pub type_literal: DelimiterOverride,
}

/// Configuration for member-delimiter-style
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MemberDelimiterStyleConfig {
    #[serde(default)]
    pub delimiter: Option<Delimiter>,
    #[serde(default)]
    pub require_last: Option<bool>,
    #[serde(default)]
    pub single_line: Option<Delimiter>,
    #[serde(default)]
    pub overrides: DelimiterOverrides,
}

impl MemberDelimiterStyleConfig {
    fn global(&self) -> DelimiterOverride {
        DelimiterOverride {
            delimiter: self.delimiter,
            require_last: self.require_last,
            single_line: self.single_line,
        }
    }
}

/// A fully resolved delimiter policy for one construct kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPolicy {
    /// Required delimiter in multi-line layout
    pub delimiter: Delimiter,
    /// Whether the final member must also carry a delimiter
    pub require_last: bool,
    /// Required delimiter when the whole construct is on one line
    pub single_line: Delimiter,
}

impl Default for DelimiterPolicy {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Semi,
            require_last: true,
            single_line: Delimiter::Semi,
        }
    }
}

impl DelimiterPolicy {
    /// Field-wise overlay: present fields win, absent fields keep `self`.
    fn overlay(mut self, over: DelimiterOverride) -> Self {
        if let Some(delimiter) = over.delimiter {
            self.delimiter = delimiter;
        }
        if let Some(require_last) = over.require_last {
            self.require_last = require_last;
        }
        if let Some(single_line) = over.single_line {
            self.single_line = single_line;
        }
        self
    }
}

/// The two construct kinds governed by this rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructKind {
    Interface,
    TypeLiteral,
}

/// One resolved policy per construct kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedPolicySet {
    pub interface: DelimiterPolicy,
    pub type_literal: DelimiterPolicy,
}

impl ResolvedPolicySet {
    /// Built-in defaults, then the global options, then the per-kind
    /// override; each stage is a shallow field-wise overlay.
    pub fn resolve(config: &MemberDelimiterStyleConfig) -> Self {
        let base = DelimiterPolicy::default().overlay(config.global());
        Self {
            interface: base.overlay(config.overrides.interface),
            type_literal: base.overlay(config.overrides.type_literal),
        }
    }

    pub fn for_kind(&self, kind: ConstructKind) -> DelimiterPolicy {
        match kind {
            ConstructKind::Interface => self.interface,
            ConstructKind::TypeLiteral => self.type_literal,
        }
    }
}

const EXPECTED_SEMI: &str = "Expected a semicolon.";
const EXPECTED_COMMA: &str = "Expected a comma.";
const UNEXPECTED_SEMI: &str = "Unexpected separator (;).";
const UNEXPECTED_COMMA: &str = "Unexpected separator (,).";

/// The trailing token of a member: a delimiter, or nothing at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrailingToken {
    Semi(Span),
    Comma(Span),
    /// No delimiter present; the offset is where one would be inserted.
    Absent(u32),
}

/// member-delimiter-style rule
#[derive(Debug, Clone, Default)]
pub struct MemberDelimiterStyle {
    policies: ResolvedPolicySet,
}

impl RuleMeta for MemberDelimiterStyle {
    const NAME: &'static str = "member-delimiter-style";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl MemberDelimiterStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MemberDelimiterStyleConfig) -> Self {
        Self {
            policies: ResolvedPolicySet::resolve(&config),
        }
    }

    /// Build the rule from an eslint-style JSON options object.
    pub fn from_json_options(options: serde_json::Value) -> serde_json::Result<Self> {
        Ok(Self::with_config(serde_json::from_value(options)?))
    }

    pub fn policies(&self) -> &ResolvedPolicySet {
        &self.policies
    }

    /// Check the members of an interface body
    pub fn check_interface_body(
        &self,
        body: &TSInterfaceBody<'_>,
        source_text: &str,
    ) -> Vec<Diagnostic> {
        let spans: Vec<Span> = body.body.iter().map(|member| member.span()).collect();
        self.check_member_list(ConstructKind::Interface, body.span, &spans, source_text)
    }

    /// Check the members of a type literal
    pub fn check_type_literal(
        &self,
        literal: &TSTypeLiteral<'_>,
        source_text: &str,
    ) -> Vec<Diagnostic> {
        let spans: Vec<Span> = literal.members.iter().map(|member| member.span()).collect();
        self.check_member_list(ConstructKind::TypeLiteral, literal.span, &spans, source_text)
    }

    /// Check every member of one construct.
    ///
    /// `list_span` covers the opening brace through the closing brace. The
    /// construct is single-line iff that span contains no newline, which is
    /// the same comparison as "opening and closing brace share a line" and
    /// deliberately never inspects member content on its own.
    pub fn check_member_list(
        &self,
        kind: ConstructKind,
        list_span: Span,
        member_spans: &[Span],
        source_text: &str,
    ) -> Vec<Diagnostic> {
        let policy = self.policies.for_kind(kind);
        let start = (list_span.start as usize).min(source_text.len());
        let end = (list_span.end as usize).min(source_text.len());
        let is_single_line = !source_text[start..end].contains('\n');

        let mut diagnostics = Vec::new();
        for (index, member_span) in member_spans.iter().copied().enumerate() {
            let is_last = index + 1 == member_spans.len();
            // A delimiter can only live between this member and the next one
            // (or the closing brace).
            let scan_limit = member_spans
                .get(index + 1)
                .map_or_else(|| list_span.end.saturating_sub(1), |next| next.start);

            let required = if is_last && !policy.require_last {
                Delimiter::None
            } else if is_single_line {
                policy.single_line
            } else {
                policy.delimiter
            };

            let observed = trailing_token(source_text, member_span, scan_limit);
            if let Some(diagnostic) = check_member(observed, required) {
                diagnostics.push(diagnostic);
            }
        }
        diagnostics
    }
}

/// Locate the member's trailing token.
///
/// The delimiter is searched inside the member span first, then between the
/// span end and `scan_limit`, so the result does not depend on whether the
/// parser counts the separator as part of the member. A member whose span
/// yields no significant bytes degrades to `Absent` at the span end.
fn trailing_token(source_text: &str, member_span: Span, scan_limit: u32) -> TrailingToken {
    let bytes = source_text.as_bytes();
    let last = last_code_byte(source_text, member_span);
    if let Some(pos) = last {
        match bytes[pos as usize] {
            b';' => return TrailingToken::Semi(Span::new(pos, pos + 1)),
            b',' => return TrailingToken::Comma(Span::new(pos, pos + 1)),
            _ => {}
        }
    }
    if let Some(pos) = first_code_byte(source_text, member_span.end, scan_limit) {
        match bytes[pos as usize] {
            b';' => return TrailingToken::Semi(Span::new(pos, pos + 1)),
            b',' => return TrailingToken::Comma(Span::new(pos, pos + 1)),
            _ => {}
        }
    }
    TrailingToken::Absent(last.map_or(member_span.end, |pos| pos + 1))
}

/// Compare the observed trailing token against the required delimiter and
/// produce at most one diagnostic, with its fix.
fn check_member(observed: TrailingToken, required: Delimiter) -> Option<Diagnostic> {
    use Delimiter::{Comma, None as NoDelimiter, Semi};

    let (message, fix, anchor) = match (observed, required) {
        (TrailingToken::Semi(_), Semi) | (TrailingToken::Comma(_), Comma) => return None,
        (TrailingToken::Absent(_), NoDelimiter) => return None,
        (TrailingToken::Semi(span), Comma) => (
            EXPECTED_COMMA,
            Fix::replace(span, Comma.token()).with_message("Replace `;` with `,`"),
            span.end,
        ),
        (TrailingToken::Comma(span), Semi) => (
            EXPECTED_SEMI,
            Fix::replace(span, Semi.token()).with_message("Replace `,` with `;`"),
            span.end,
        ),
        (TrailingToken::Semi(span), NoDelimiter) => (
            UNEXPECTED_SEMI,
            Fix::remove(span).with_message("Remove `;`"),
            span.end,
        ),
        (TrailingToken::Comma(span), NoDelimiter) => (
            UNEXPECTED_COMMA,
            Fix::remove(span).with_message("Remove `,`"),
            span.end,
        ),
        (TrailingToken::Absent(at), Semi) => (
            EXPECTED_SEMI,
            Fix::insert_at(at, Semi.token()).with_message("Insert `;`"),
            at,
        ),
        (TrailingToken::Absent(at), Comma) => (
            EXPECTED_COMMA,
            Fix::insert_at(at, Comma.token()).with_message("Insert `,`"),
            at,
        ),
    };

    // Point diagnostic at the end of the trailing token; zero-width when the
    // delimiter is missing.
    Some(
        Diagnostic::warning(MemberDelimiterStyle::NAME, Span::new(anchor, anchor), message)
            .with_fix(fix),
    )
}
