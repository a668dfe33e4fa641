//! TypeScript style lint rules
//!
//! Rules ported from eslint-plugin-typescript

pub mod member_delimiter_style;

// Re-export rule structs
pub use member_delimiter_style::{
    ConstructKind, Delimiter, DelimiterOverride, DelimiterOverrides, DelimiterPolicy,
    MemberDelimiterStyle, MemberDelimiterStyleConfig, ResolvedPolicySet,
};
