mod repl {
    use exprtree::{eval_postfix, PostfixParser};

    pub fn eval_line(input: &str) {
        // tokens are single characters; whitespace is only a separator
        let expr: String = input.split_whitespace().collect();
        if expr.is_empty() {
            return;
        }
        let tree = match PostfixParser::parse_str(&expr) {
            Ok(tree) => tree,
            Err(e) => {
                println!("invalid expression: {}", e);
                return;
            }
        };
        println!("Infix expression : {}", tree);
        println!("Tree representation:");
        print!("{}", tree.diagram());
        match eval_postfix(&expr) {
            Ok(value) => println!("Value = {}", value),
            Err(e) => println!("Eval error: {}", e),
        }
    }
}

fn main() {
    env_logger::init();
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::eval_line(&input);
    } else {
        let mut rl = rustyline::Editor::<()>::new();
        while let Ok(input) = rl.readline(">> ") {
            rl.add_history_entry(input.as_str());
            repl::eval_line(&input);
        }
    }
}
