use thompson_nfa_compiler::CompileError;

/// An error that occurred while building a [`Regex`](crate::Regex).
///
/// Matching itself never fails, so this is only returned by construction.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression is malformed: unbalanced parentheses, or an operator
    /// missing one of its operands.
    ///
    /// The string is a human readable description of the problem.
    Syntax(String),
    /// The automaton would need more states than the configured size limit.
    /// The limit is included.
    CompiledTooBig(usize),
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Error {
        match err {
            CompileError::TooComplex { limit } => Error::CompiledTooBig(limit),
            err => Error::Syntax(err.to_string()),
        }
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::Syntax(ref err) => write!(f, "malformed expression: {}", err),
            Error::CompiledTooBig(limit) => write!(
                f,
                "Compiled regex exceeds size limit of {} states.",
                limit
            ),
        }
    }
}

// We implement our own Debug implementation so that we show nicer syntax
// errors when people use `Regex::new(...).unwrap()`.
impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Error::Syntax(ref err) => {
                let hr: String = core::iter::repeat('~').take(79).collect();
                writeln!(f, "Syntax(")?;
                writeln!(f, "{}", hr)?;
                writeln!(f, "{}", err)?;
                writeln!(f, "{}", hr)?;
                write!(f, ")")?;
                Ok(())
            }
            Error::CompiledTooBig(limit) => {
                f.debug_tuple("CompiledTooBig").field(&limit).finish()
            }
        }
    }
}
