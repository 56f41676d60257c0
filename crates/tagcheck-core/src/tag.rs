//! # Annotation Parser
//!
//! Splits a field annotation such as `min:18|max:50` into ordered
//! [`RuleInvocation`]s. The syntax is exact: no whitespace is trimmed, and
//! only the first `:` of each invocation separates the rule name from its
//! argument.

/// Separates rule invocations within one annotation.
pub const RULE_SEPARATOR: char = '|';

/// Separates a rule name from its argument.
pub const ARGUMENT_SEPARATOR: char = ':';

/// One decoded `name:argument` unit of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleInvocation<'a> {
    /// Rule-name token, e.g. `len`.
    pub name: &'a str,
    /// Argument text; empty when the invocation has no `:`.
    pub argument: &'a str,
}

impl<'a> RuleInvocation<'a> {
    /// Decode a single invocation.
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once(ARGUMENT_SEPARATOR) {
            Some((name, argument)) => Self { name, argument },
            None => Self {
                name: raw,
                argument: "",
            },
        }
    }
}

/// Decode an annotation into its invocations, in written order.
///
/// An empty annotation yields no invocations.
pub fn parse(annotation: &str) -> Vec<RuleInvocation<'_>> {
    if annotation.is_empty() {
        return Vec::new();
    }
    annotation
        .split(RULE_SEPARATOR)
        .map(RuleInvocation::parse)
        .collect()
}
