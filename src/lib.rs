/*!
This crate provides a minimal regular expression matcher. It converts an
expression to postfix form with the shunting-yard algorithm, compiles it to a
Thompson NFA and simulates that automaton, so matching always runs in time
linear in the length of the word.

# Syntax

An expression is a sequence of `char`s. The following characters are special:

```text
x|y     alternation: x or y
xy      concatenation (an explicit x.y is also accepted)
x*      zero or more of x
x+      one or more of x
x?      zero or one of x
(x)     grouping
```

Every other character, including `\`, matches itself. There are no character
classes, no escapes, no anchors and no capture groups.

Precedence, from loosest to tightest: `|`, then concatenation, then the
postfix operators `*`, `+` and `?`. Concatenation and alternation are left
associative.

# Matching

Matching is always anchored at both ends: a word matches only if the whole
word is matched by the whole expression. The empty expression matches only
the empty word.

```
use postfix_regex::matches;

assert!(matches("(a|b)*abb", "aabb").unwrap());
assert!(!matches("(a|b)*abb", "ab").unwrap());
assert!(!matches("a", "ba").unwrap());
assert!(matches("", "").unwrap());
```

To match many words against the same expression, compile it once with
[`Regex::new`].

# Errors

Only construction can fail. An operator without enough operands or an
unbalanced parenthesis is reported as [`Error::Syntax`]; an automaton larger
than the configured limit is reported as [`Error::CompiledTooBig`].

# Crate features

* **logging** - Enables the `log` crate. Compiled expressions are logged at
  debug level together with their expanded and postfix forms and the size of
  their automaton.
*/

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

mod builders;
mod error;
mod regex;

pub use crate::{builders::RegexBuilder, error::Error, regex::Regex};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Returns true if and only if `word` is fully matched by `expression`.
///
/// This compiles `expression` on every call. Use [`Regex`] to compile it once
/// and match it many times.
///
/// # Errors
///
/// Returns an error if `expression` is malformed.
///
/// # Example
///
/// ```
/// use postfix_regex::matches;
///
/// assert!(matches("a|b", "a").unwrap());
/// assert!(!matches("a|b", "c").unwrap());
/// assert!(matches("a*bb", "abb").unwrap());
/// assert!(matches("a|", "a").is_err());
/// ```
pub fn matches(expression: &str, word: &str) -> Result<bool, Error> {
    let re = Regex::new(expression)?;
    let matched = re.is_match(word);
    trace!("{:?} against {:?}: {}", expression, word, matched);
    Ok(matched)
}
