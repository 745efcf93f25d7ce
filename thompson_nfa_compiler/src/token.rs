/// A single character of an expression, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Any character that is not an operator or a parenthesis
    Literal(char),
    /// `|`
    Alternate,
    /// `.`, usually inserted by [`insert_concat`](crate::insert_concat)
    Concat,
    /// `?`
    Optional,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Token {
    /// Classify a character. There is no escaping: every character that is
    /// not one of `|.?*+()` is a literal.
    pub fn from_char(ch: char) -> Self {
        match ch {
            '|' => Token::Alternate,
            '.' => Token::Concat,
            '?' => Token::Optional,
            '*' => Token::Star,
            '+' => Token::Plus,
            '(' => Token::Open,
            ')' => Token::Close,
            ch => Token::Literal(ch),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Token::Literal(ch) => ch,
            Token::Alternate => '|',
            Token::Concat => '.',
            Token::Optional => '?',
            Token::Star => '*',
            Token::Plus => '+',
            Token::Open => '(',
            Token::Close => ')',
        }
    }

    /// Binding strength of an operator; higher binds tighter
    pub fn precedence(self) -> Option<u8> {
        match self {
            Token::Alternate => Some(0),
            Token::Concat => Some(1),
            Token::Optional | Token::Star | Token::Plus => Some(2),
            Token::Literal(_) | Token::Open | Token::Close => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        for ch in "|.?*+()".chars() {
            let token = Token::from_char(ch);
            assert!(!matches!(token, Token::Literal(_)), "{:?}", ch);
            assert_eq!(token.as_char(), ch);
        }
        assert_eq!(Token::from_char('a'), Token::Literal('a'));
        assert_eq!(Token::from_char('é'), Token::Literal('é'));
        assert_eq!(Token::from_char('\\'), Token::Literal('\\'));
    }

    #[test]
    fn test_precedence_order() {
        let alternate = Token::Alternate.precedence().unwrap();
        let concat = Token::Concat.precedence().unwrap();
        let star = Token::Star.precedence().unwrap();

        assert!(alternate < concat);
        assert!(concat < star);
        assert_eq!(Token::Optional.precedence(), Token::Plus.precedence());
        assert_eq!(Token::Open.precedence(), None);
    }
}
