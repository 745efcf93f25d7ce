use crate::token::Token;

/// Insert an explicit concatenation operator (`.`) between every pair of
/// adjacent characters that are meant to be juxtaposed.
///
/// Nothing is inserted after `(`, `|` or an explicit `.`, and nothing is
/// inserted before `*`, `?`, `+`, `|`, `)` or an explicit `.`. Everything
/// else gets a `.` in between, so `(a|b)*c` becomes `(a|b)*.c`.
pub fn insert_concat(expression: &str) -> String {
    let mut output = String::with_capacity(expression.len() * 2);
    let mut chars = expression.chars().peekable();

    while let Some(ch) = chars.next() {
        output.push(ch);

        let Some(&next) = chars.peek() else {
            break;
        };

        if joins_next(Token::from_char(ch), Token::from_char(next)) {
            output.push(Token::Concat.as_char());
        }
    }

    output
}

fn joins_next(current: Token, next: Token) -> bool {
    let opens = matches!(current, Token::Open | Token::Alternate | Token::Concat);
    let attaches = matches!(
        next,
        Token::Star | Token::Optional | Token::Plus | Token::Alternate | Token::Close | Token::Concat
    );
    !opens && !attaches
}
