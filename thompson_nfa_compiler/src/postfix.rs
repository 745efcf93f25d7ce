use crate::{token::Token, CompileError, CompileResult};

/// Convert an expanded infix expression into postfix order with the
/// shunting-yard algorithm.
///
/// Operators of equal precedence are popped before the new one is pushed,
/// which makes `.` and `|` left associative. Positions in errors are `char`
/// offsets into `expanded`.
pub fn to_postfix(expanded: &str) -> CompileResult<Vec<Token>> {
    let mut output = Vec::with_capacity(expanded.len());
    // Each entry remembers where it came from so an unclosed `(` can be reported.
    let mut operators: Vec<(Token, usize)> = Vec::new();

    for (position, ch) in expanded.chars().enumerate() {
        let token = Token::from_char(ch);
        match token {
            Token::Literal(_) => output.push(token),
            Token::Open => operators.push((token, position)),
            Token::Close => loop {
                match operators.pop() {
                    Some((Token::Open, _)) => break,
                    Some((operator, _)) => output.push(operator),
                    None => return Err(CompileError::UnmatchedCloseParen { position }),
                }
            },
            operator => {
                let precedence = operator.precedence();
                while let Some(&(top, _)) = operators.last() {
                    if top == Token::Open || top.precedence() < precedence {
                        break;
                    }
                    output.push(top);
                    operators.pop();
                }
                operators.push((operator, position));
            },
        }
    }

    while let Some((token, position)) = operators.pop() {
        if token == Token::Open {
            return Err(CompileError::UnmatchedOpenParen { position });
        }
        output.push(token);
    }

    Ok(output)
}

/// Render a token sequence back into a string, e.g. for tracing
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.as_char()).collect()
}
