//! Thompson NFA Compiler for a Minimal Operator Set
//!
//! This library turns a regular expression over the operators `|`, `.`, `?`,
//! `*` and `+` (plus parentheses) into a Thompson NFA and simulates it. The
//! pipeline is strictly linear:
//!
//! ```text
//! expression ──insert_concat──> expanded ──to_postfix──> tokens ──Compiler──> NFA ──Matcher──> bool
//! ```
//!
//! Every stage is a pure function of its input. Matching is anchored at both
//! ends: a word either matches the whole pattern or it does not match.

pub mod token;
pub mod expand;
pub mod postfix;
pub mod nfa;
pub mod compiler;
pub mod matcher;

pub use token::Token;
pub use expand::insert_concat;
pub use postfix::to_postfix;
pub use nfa::{NFA, State, StateId, StateSet, Transition, Fragment};
pub use compiler::Compiler;
pub use matcher::Matcher;

/// The result of running one of the construction stages
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur while turning an expression into an NFA
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An operator found fewer fragments on the stack than it needs
    MissingOperand { operator: char, position: usize },
    /// More than one fragment was left once every token was consumed
    DanglingOperands { count: usize },
    /// A `(` was never closed
    UnmatchedOpenParen { position: usize },
    /// A `)` has no `(` to close
    UnmatchedCloseParen { position: usize },
    /// The automaton would exceed the configured number of states
    TooComplex { limit: usize },
}

impl CompileError {
    /// Whether this error comes from a malformed expression rather than a
    /// resource limit
    pub fn is_malformed(&self) -> bool {
        !matches!(self, CompileError::TooComplex { .. })
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::MissingOperand { operator, position } => {
                write!(f, "operator '{}' at postfix position {} is missing an operand", operator, position)
            },
            CompileError::DanglingOperands { count } => {
                write!(f, "{} operands were left without an operator joining them", count)
            },
            CompileError::UnmatchedOpenParen { position } => {
                write!(f, "unclosed '(' at position {}", position)
            },
            CompileError::UnmatchedCloseParen { position } => {
                write!(f, "unopened ')' at position {}", position)
            },
            CompileError::TooComplex { limit } => {
                write!(f, "automaton exceeds the limit of {} states", limit)
            },
        }
    }
}

impl std::error::Error for CompileError {}

/// Runs the whole pipeline with the default compiler configuration.
pub fn is_match(expression: &str, word: &str) -> CompileResult<bool> {
    let tokens = to_postfix(&insert_concat(expression))?;
    let nfa = Compiler::new().compile(&tokens)?;
    Ok(Matcher::new(&nfa).is_match(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_examples() {
        let cases = [
            ("", "", true),
            ("", "a", false),
            ("a", "", false),
            ("a", "a", true),
            ("a*", "", true),
            ("a*", "aaaa", true),
            ("a*", "b", false),
            ("a|b", "a", true),
            ("a|b", "c", false),
            ("(a|b)*abb", "abb", true),
            ("(a|b)*abb", "aabb", true),
            ("(a|b)*abb", "ab", false),
            ("a*bb", "abb", true),
        ];

        for (expression, word, expected) in cases {
            assert_eq!(
                is_match(expression, word),
                Ok(expected),
                "{:?} against {:?}",
                expression,
                word
            );
        }
    }

    #[test]
    fn test_malformed_expression_errors() {
        assert_eq!(
            is_match("a|", "a"),
            Err(CompileError::MissingOperand { operator: '|', position: 1 })
        );
        assert_eq!(is_match("(a", "a"), Err(CompileError::UnmatchedOpenParen { position: 0 }));
        assert_eq!(is_match("a)", "a"), Err(CompileError::UnmatchedCloseParen { position: 1 }));
    }

    #[test]
    fn test_error_classification() {
        assert!(CompileError::MissingOperand { operator: '*', position: 0 }.is_malformed());
        assert!(!CompileError::TooComplex { limit: 4 }.is_malformed());
    }
}
