use postfix_regex::Regex;
use quickcheck::{Arbitrary, Gen, QuickCheck};

/// A well-formed expression over the alphabet `{a, b}`.
#[derive(Clone, Debug)]
enum Expr {
    Literal(char),
    Concat(Box<Expr>, Box<Expr>),
    Alternate(Box<Expr>, Box<Expr>),
    Star(Box<Expr>),
    Plus(Box<Expr>),
    Optional(Box<Expr>),
}

impl Expr {
    fn generate(g: &mut Gen, depth: usize) -> Expr {
        let choice = if depth == 0 { 0 } else { u8::arbitrary(g) % 6 };
        let sub = |g: &mut Gen| Box::new(Expr::generate(g, depth - 1));
        match choice {
            0 => Expr::Literal(*g.choose(&['a', 'b']).unwrap()),
            1 => Expr::Concat(sub(g), sub(g)),
            2 => Expr::Alternate(sub(g), sub(g)),
            3 => Expr::Star(sub(g)),
            4 => Expr::Plus(sub(g)),
            _ => Expr::Optional(sub(g)),
        }
    }

    /// Renders the expression, parenthesizing every compound operand.
    /// The same text is valid for this crate and for the `regex` crate.
    fn render(&self) -> String {
        match self {
            Expr::Literal(c) => c.to_string(),
            Expr::Concat(l, r) => format!("{}{}", l.atom(), r.atom()),
            Expr::Alternate(l, r) => format!("({}|{})", l.render(), r.render()),
            Expr::Star(e) => format!("{}*", e.atom()),
            Expr::Plus(e) => format!("{}+", e.atom()),
            Expr::Optional(e) => format!("{}?", e.atom()),
        }
    }

    fn atom(&self) -> String {
        match self {
            Expr::Literal(c) => c.to_string(),
            e => format!("({})", e.render()),
        }
    }
}

impl Arbitrary for Expr {
    fn arbitrary(g: &mut Gen) -> Expr {
        Expr::generate(g, 4)
    }
}

/// A short word over `{a, b}`.
#[derive(Clone, Debug)]
struct Word(String);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Word {
        let len = usize::arbitrary(g) % 8;
        Word((0..len).map(|_| *g.choose(&['a', 'b']).unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Word>> {
        Box::new(self.0.shrink().map(Word))
    }
}

fn oracle(expression: &str) -> regex::Regex {
    regex::Regex::new(&format!("^(?:{})$", expression)).unwrap()
}

#[test]
fn agrees_with_regex_crate() {
    fn prop(expr: Expr, word: Word) -> bool {
        let expression = expr.render();
        let ours = Regex::new(&expression).unwrap().is_match(&word.0);
        ours == oracle(&expression).is_match(&word.0)
    }

    QuickCheck::new()
        .tests(2_000)
        .quickcheck(prop as fn(Expr, Word) -> bool);
}

#[test]
fn compiling_twice_is_observationally_equivalent() {
    fn prop(expr: Expr, words: Vec<Word>) -> bool {
        let expression = expr.render();
        let first = Regex::new(&expression).unwrap();
        let second = Regex::new(&expression).unwrap();
        words
            .iter()
            .all(|word| first.is_match(&word.0) == second.is_match(&word.0))
    }

    QuickCheck::new().quickcheck(prop as fn(Expr, Vec<Word>) -> bool);
}

#[test]
fn state_count_is_linear() {
    fn prop(expr: Expr) -> bool {
        let re = Regex::new(&expr.render()).unwrap();
        let expanded_len = re.expanded().chars().count().max(1);
        re.state_count() <= 2 * expanded_len
            && re.nfa().accepting_states().len() == 1
    }

    QuickCheck::new().quickcheck(prop as fn(Expr) -> bool);
}
