use crate::{error::Error, regex::Regex};

/// The default upper bound on the number of automaton states.
const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// The configuration knobs for building a [`Regex`].
#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub(crate) size_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Config {
        Config { size_limit: Some(DEFAULT_SIZE_LIMIT) }
    }
}

/// A configurable builder for a [`Regex`].
///
/// # Example
///
/// ```
/// use postfix_regex::{Error, RegexBuilder};
///
/// let re = RegexBuilder::new("(a|b)*abb").build().unwrap();
/// assert!(re.is_match("babb"));
///
/// let err = RegexBuilder::new("(a|b)*abb").size_limit(Some(4)).build().unwrap_err();
/// assert_eq!(err, Error::CompiledTooBig(4));
/// ```
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: String,
    config: Config,
}

impl RegexBuilder {
    /// Create a new builder with a default configuration for the given
    /// expression.
    ///
    /// If the expression is malformed, then an error will be returned when
    /// [`RegexBuilder::build`] is called.
    pub fn new(pattern: &str) -> RegexBuilder {
        RegexBuilder { pattern: pattern.to_string(), config: Config::default() }
    }

    /// Compiles the expression given to `RegexBuilder::new` with the
    /// configuration set on this builder.
    pub fn build(&self) -> Result<Regex, Error> {
        Regex::with_config(&self.pattern, &self.config)
    }

    /// Sets the approximate size limit, in states, of the compiled automaton.
    ///
    /// Every literal and every operator other than concatenation adds two
    /// states, so an expression of length `n` never needs more than `2n`.
    /// `None` disables the limit. The default is roughly ten million states.
    pub fn size_limit(&mut self, limit: Option<usize>) -> &mut RegexBuilder {
        self.config.size_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limit_allows_ordinary_expressions() {
        let re = RegexBuilder::new("(a|b)*abb").build().unwrap();
        assert_eq!(re.state_count(), 14);
    }

    #[test]
    fn limit_is_exact() {
        assert!(RegexBuilder::new("ab").size_limit(Some(4)).build().is_ok());
        assert_eq!(
            RegexBuilder::new("ab").size_limit(Some(3)).build().unwrap_err(),
            Error::CompiledTooBig(3),
        );
    }

    #[test]
    fn no_limit() {
        let pattern = "a".repeat(1000);
        let re = RegexBuilder::new(&pattern).size_limit(None).build().unwrap();
        assert!(re.is_match(&pattern));
    }
}
