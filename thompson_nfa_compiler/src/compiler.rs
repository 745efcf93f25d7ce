use crate::{nfa::{NFA, Fragment}, token::Token, CompileError, CompileResult};

/// Compiler that converts a postfix token sequence to a Thompson NFA
///
/// Each token is handled once, with an explicit stack of fragments. Every
/// token adds at most two states, so the automaton is linear in the length of
/// the expression.
#[derive(Debug, Clone)]
pub struct Compiler {
    nfa: NFA,
    size_limit: Option<usize>,
}

impl Compiler {
    /// Create a new compiler with no size limit
    pub fn new() -> Self {
        Self {
            nfa: NFA::new(),
            size_limit: None,
        }
    }

    /// Fail with [`CompileError::TooComplex`] once the automaton would need
    /// more than `limit` states
    pub fn size_limit(mut self, limit: Option<usize>) -> Self {
        self.size_limit = limit;
        self
    }

    /// Compile postfix tokens to a Thompson NFA
    pub fn compile(mut self, postfix: &[Token]) -> CompileResult<NFA> {
        let fragment = self.compile_tokens(postfix)?;

        self.nfa.start = fragment.start;
        Ok(self.nfa)
    }

    fn compile_tokens(&mut self, postfix: &[Token]) -> CompileResult<Fragment> {
        let mut stack: Vec<Fragment> = Vec::new();

        for (position, &token) in postfix.iter().enumerate() {
            let operator = token.as_char();
            let mut pop = || {
                stack
                    .pop()
                    .ok_or(CompileError::MissingOperand { operator, position })
            };

            let fragment = match token {
                Token::Literal(symbol) => self.compile_literal(symbol)?,
                Token::Star => {
                    let inner = pop()?;
                    self.compile_star(inner)?
                },
                Token::Optional => {
                    let inner = pop()?;
                    self.compile_question(inner)?
                },
                Token::Plus => {
                    let inner = pop()?;
                    self.compile_plus(inner)?
                },
                Token::Alternate => {
                    let right = pop()?;
                    let left = pop()?;
                    self.compile_alternation(left, right)?
                },
                Token::Concat => {
                    let right = pop()?;
                    let left = pop()?;
                    self.compile_concat(left, right)
                },
                // to_postfix never emits parentheses; any other caller gets
                // them matched literally.
                Token::Open | Token::Close => self.compile_literal(operator)?,
            };
            stack.push(fragment);
        }

        match (stack.pop(), stack.len()) {
            (Some(fragment), 0) => Ok(fragment),
            (Some(_), rest) => Err(CompileError::DanglingOperands { count: rest + 1 }),
            (None, _) => self.compile_empty(),
        }
    }

    /// Allocate a state, enforcing the size limit
    fn state(&mut self, accepting: bool) -> CompileResult<usize> {
        if let Some(limit) = self.size_limit {
            if self.nfa.len() >= limit {
                return Err(CompileError::TooComplex { limit });
            }
        }
        Ok(self.nfa.add_state(accepting))
    }

    /// Compile the empty expression: accepts only the empty word
    fn compile_empty(&mut self) -> CompileResult<Fragment> {
        let start = self.state(false)?;
        let end = self.state(true)?;
        self.nfa.connect(start, end);
        Ok(Fragment { start, end })
    }

    /// Compile a single character
    fn compile_literal(&mut self, symbol: char) -> CompileResult<Fragment> {
        let start = self.state(false)?;
        let end = self.state(true)?;
        self.nfa.set_transition(start, symbol, end);
        Ok(Fragment { start, end })
    }

    /// Compile * (zero or more)
    fn compile_star(&mut self, inner: Fragment) -> CompileResult<Fragment> {
        let start = self.state(false)?;
        let end = self.state(true)?;

        self.nfa.connect(start, end);
        self.nfa.connect(start, inner.start);
        self.nfa.connect(inner.end, end);
        self.nfa.connect(inner.end, inner.start);
        self.nfa.absorb(inner.end);

        Ok(Fragment { start, end })
    }

    /// Compile ? (zero or one)
    fn compile_question(&mut self, inner: Fragment) -> CompileResult<Fragment> {
        let start = self.state(false)?;
        let end = self.state(true)?;

        self.nfa.connect(start, end);
        self.nfa.connect(start, inner.start);
        self.nfa.connect(inner.end, end);
        self.nfa.absorb(inner.end);

        Ok(Fragment { start, end })
    }

    /// Compile + (one or more). Same shape as `*` without the bypass edge.
    fn compile_plus(&mut self, inner: Fragment) -> CompileResult<Fragment> {
        let start = self.state(false)?;
        let end = self.state(true)?;

        self.nfa.connect(start, inner.start);
        self.nfa.connect(inner.end, end);
        self.nfa.connect(inner.end, inner.start);
        self.nfa.absorb(inner.end);

        Ok(Fragment { start, end })
    }

    /// Compile left|right
    fn compile_alternation(&mut self, left: Fragment, right: Fragment) -> CompileResult<Fragment> {
        let start = self.state(false)?;
        let end = self.state(true)?;

        self.nfa.connect(start, left.start);
        self.nfa.connect(start, right.start);
        self.nfa.connect(left.end, end);
        self.nfa.absorb(left.end);
        self.nfa.connect(right.end, end);
        self.nfa.absorb(right.end);

        Ok(Fragment { start, end })
    }

    /// Compile left.right
    fn compile_concat(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.nfa.connect(left.end, right.start);
        self.nfa.absorb(left.end);

        Fragment {
            start: left.start,
            end: right.end,
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
