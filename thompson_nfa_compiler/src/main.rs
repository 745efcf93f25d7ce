use thompson_nfa_compiler::{insert_concat, postfix, Compiler, Matcher};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [expression, word] => run(expression, word),
        [] => {
            println!("Thompson NFA Compiler - Pipeline Demo");
            println!("=====================================");

            let cases = [
                ("a*bb", "abb"),
                ("(a|b)*abb", "aabb"),
                ("a|b", "c"),
                ("ab?c+", "acc"),
                ("", ""),
            ];
            for (expression, word) in cases {
                run(expression, word);
            }
        },
        _ => {
            eprintln!("usage: thompson_nfa_compiler [<expression> <word>]");
            std::process::exit(2);
        },
    }
}

fn run(expression: &str, word: &str) {
    println!("\n=== Pattern: '{}' against '{}' ===", expression, word);

    let expanded = insert_concat(expression);
    println!("Expanded: {}", expanded);

    let tokens = match postfix::to_postfix(&expanded) {
        Ok(tokens) => tokens,
        Err(e) => {
            println!("Failed to convert to postfix: {}", e);
            return;
        }
    };
    println!("Postfix: {}", postfix::render(&tokens));

    let nfa = match Compiler::new().compile(&tokens) {
        Ok(nfa) => nfa,
        Err(e) => {
            println!("Failed to compile: {}", e);
            return;
        }
    };
    println!("States: {}", nfa.len());
    print!("{}", nfa);

    println!("Match: {}", Matcher::new(&nfa).is_match(word));
}
