//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics efficiently.
//! Construct dispatch is a closed set of visit methods (`TSInterfaceBody`,
//! `TSTypeLiteral`), so adding a construct kind is a compile-time change.

use oxc_ast::ast::{Program, TSInterfaceBody, TSTypeLiteral};
use oxc_ast_visit::{walk, Visit};
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::rules::MemberDelimiterStyle;

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub member_delimiter_style: Option<MemberDelimiterStyle>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            member_delimiter_style: Some(MemberDelimiterStyle::new()),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            member_delimiter_style: None,
        }
    }

    pub fn with_member_delimiter_style(mut self, rule: MemberDelimiterStyle) -> Self {
        self.member_delimiter_style = Some(rule);
        self
    }
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self { ctx, config }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        self.visit_program(program);
        LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        }
    }

    /// Check an interface body with all applicable rules
    fn check_interface_body(&mut self, body: &TSInterfaceBody<'a>) {
        if let Some(rule) = &self.config.member_delimiter_style {
            let diagnostics = rule.check_interface_body(body, self.ctx.source_text());
            self.ctx.report_all(diagnostics);
        }
    }

    /// Check a type literal with all applicable rules
    fn check_type_literal(&mut self, literal: &TSTypeLiteral<'a>) {
        if let Some(rule) = &self.config.member_delimiter_style {
            let diagnostics = rule.check_type_literal(literal, self.ctx.source_text());
            self.ctx.report_all(diagnostics);
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_ts_interface_body(&mut self, body: &TSInterfaceBody<'a>) {
        self.check_interface_body(body);
        walk::walk_ts_interface_body(self, body);
    }

    fn visit_ts_type_literal(&mut self, literal: &TSTypeLiteral<'a>) {
        self.check_type_literal(literal);
        walk::walk_ts_type_literal(self, literal);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, crate::DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text, SourceType::ts());
    let config = RulesConfig::default();
    LintRunner::new(ctx, config).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    source_type: SourceType,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text, source_type);
    LintRunner::new(ctx, config).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;

    fn parse_and_lint(source: &str) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        lint(source, &ret.program)
    }

    fn parse_and_lint_with_config(source: &str, config: RulesConfig) -> LintResult {
        let allocator = Allocator::default();
        let source_type = SourceType::ts();
        let ret = Parser::new(&allocator, source, source_type).parse();
        lint_with_config(source, source_type, &ret.program, config)
    }

    #[test]
    fn test_lint_clean_code() {
        let result = parse_and_lint("interface Foo {\n  name: string;\n  age: number;\n}");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_empty_interface() {
        let result = parse_and_lint("interface Foo {}");
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_missing_delimiters() {
        let result = parse_and_lint("interface Foo {\n  name: string\n  age: number\n}");
        assert_eq!(result.diagnostics.len(), 2);
        assert!(result
            .diagnostics
            .iter()
            .all(|d| d.message == "Expected a semicolon."));
    }

    #[test]
    fn test_lint_type_literal() {
        let result = parse_and_lint("type Foo = {\n  name: string\n};");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message, "Expected a semicolon.");
    }

    #[test]
    fn test_lint_with_disabled_rules() {
        let config = RulesConfig::none();
        let result =
            parse_and_lint_with_config("interface Foo {\n  name: string\n}", config);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_result_counts() {
        let result = parse_and_lint("interface Foo {\n  name: string\n}");
        assert!(result.has_warnings());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_diagnostic_is_zero_width_point() {
        let result = parse_and_lint("interface Foo {\n  name: string\n}");
        assert_eq!(result.diagnostics.len(), 1);
        let d = &result.diagnostics[0];
        assert_eq!(d.start, d.end);
        assert_eq!(d.fixes.len(), 1);
    }
}
