use std::sync::Arc;

use thompson_nfa_compiler::{insert_concat, postfix, Compiler, Matcher, NFA};

use crate::{builders::Config, builders::RegexBuilder, error::Error};

/// A compiled expression for matching whole words.
///
/// A `Regex` is immutable once built and can be shared across threads. Its
/// automaton is built once by [`Regex::new`] and reused by every call to
/// [`Regex::is_match`].
///
/// Besides matching, a `Regex` exposes the intermediate forms of its
/// expression ([`Regex::expanded`], [`Regex::postfix`]) and the size of its
/// automaton ([`Regex::state_count`]) for callers that want to log them.
///
/// # Example
///
/// ```
/// use postfix_regex::Regex;
///
/// let re = Regex::new("(a|b)*abb").unwrap();
/// assert_eq!(re.expanded(), "(a|b)*.a.b.b");
/// assert_eq!(re.postfix(), "ab|*a.b.b.");
/// assert!(re.is_match("aabb"));
/// assert!(!re.is_match("ab"));
/// ```
#[derive(Clone)]
pub struct Regex {
    pattern: Arc<str>,
    expanded: String,
    postfix: String,
    nfa: Arc<NFA>,
}

impl Regex {
    /// Compiles an expression. Once compiled, it can be used repeatedly to
    /// match words.
    ///
    /// An error is returned if the expression is malformed or if it would
    /// exceed the default size limit (see [`RegexBuilder::size_limit`]).
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        RegexBuilder::new(pattern).build()
    }

    pub(crate) fn with_config(
        pattern: &str,
        config: &Config,
    ) -> Result<Regex, Error> {
        let expanded = insert_concat(pattern);
        let tokens = postfix::to_postfix(&expanded)?;
        let nfa = Compiler::new()
            .size_limit(config.size_limit)
            .compile(&tokens)?;
        let re = Regex {
            pattern: Arc::from(pattern),
            expanded,
            postfix: postfix::render(&tokens),
            nfa: Arc::new(nfa),
        };
        debug!(
            "compiled {:?}: expanded {:?}, postfix {:?}, {} states",
            re.as_str(),
            re.expanded(),
            re.postfix(),
            re.state_count(),
        );
        Ok(re)
    }

    /// Returns true if and only if the whole of `word` is matched by this
    /// expression.
    ///
    /// There is no substring search: `a` does not match `ba`.
    ///
    /// # Example
    ///
    /// ```
    /// use postfix_regex::Regex;
    ///
    /// let re = Regex::new("a*").unwrap();
    /// assert!(re.is_match(""));
    /// assert!(re.is_match("aaaa"));
    /// assert!(!re.is_match("aaab"));
    /// ```
    #[inline]
    pub fn is_match(&self, word: &str) -> bool {
        Matcher::new(&self.nfa).is_match(word)
    }

    /// Returns the original expression.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the expression with every implicit concatenation written out
    /// as `.`.
    #[inline]
    pub fn expanded(&self) -> &str {
        &self.expanded
    }

    /// Returns the expression in postfix (reverse Polish) order.
    #[inline]
    pub fn postfix(&self) -> &str {
        &self.postfix
    }

    /// Returns the number of states in the compiled automaton.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.nfa.len()
    }

    /// Returns the compiled automaton.
    #[inline]
    pub fn nfa(&self) -> &NFA {
        &self.nfa
    }
}

impl core::fmt::Display for Regex {
    /// Shows the original expression.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl core::fmt::Debug for Regex {
    /// Shows the original expression.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl core::str::FromStr for Regex {
    type Err = Error;

    /// Attempts to parse a string into a regular expression
    fn from_str(s: &str) -> Result<Regex, Error> {
        Regex::new(s)
    }
}

impl TryFrom<&str> for Regex {
    type Error = Error;

    /// Attempts to parse a string into a regular expression
    fn try_from(s: &str) -> Result<Regex, Error> {
        Regex::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_accessors() {
        let re = Regex::new("a*bb").unwrap();
        assert_eq!(re.as_str(), "a*bb");
        assert_eq!(re.expanded(), "a*.b.b");
        assert_eq!(re.postfix(), "a*b.b.");
        assert_eq!(re.state_count(), 8);
        assert_eq!(re.nfa().accepting_states().len(), 1);
    }

    #[test]
    fn display_and_debug() {
        let re: Regex = "a|b".parse().unwrap();
        assert_eq!(re.to_string(), "a|b");
        assert_eq!(format!("{:?}", re), r#"Regex("a|b")"#);
    }

    #[test]
    fn malformed() {
        assert!(matches!(Regex::new("a|"), Err(Error::Syntax(_))));
        assert!(matches!(Regex::new("(a"), Err(Error::Syntax(_))));
        assert!(matches!(Regex::new("a)"), Err(Error::Syntax(_))));
        assert!(matches!(Regex::try_from("*"), Err(Error::Syntax(_))));
    }

    #[test]
    fn clones_share_the_automaton() {
        let re = Regex::new("(a|b)*").unwrap();
        let clone = re.clone();
        assert!(core::ptr::eq(re.nfa(), clone.nfa()));
        assert!(clone.is_match("abab"));
    }

    #[test]
    fn send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Regex>();
    }
}
