//! TypeScript style lint rules
//!
//! This crate provides style lint rules for TypeScript ported from
//! eslint-plugin-typescript. Rules can be used:
//! 1. Standalone with oxc AST for custom tooling
//! 2. Integrated with oxlint as a plugin (future)

pub mod fixer;
pub mod rules;
pub mod visitor;
mod context;
mod diagnostic;
mod utils;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use fixer::apply_fixes;
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category for TypeScript style rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that is likely to be incorrect
    Correctness,
    /// Rules that suggest improvements
    Pedantic,
    /// Rules that encourage best practices
    Style,
    /// Rules that may have false positives (experimental)
    Nursery,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!(
            "https://github.com/nzakas/eslint-plugin-typescript/blob/master/docs/rules/{}.md",
            Self::NAME
        )
    }
}
