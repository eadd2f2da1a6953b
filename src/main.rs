use std::{env, fs::read_to_string, time::Instant};

use pinelex::{
    display_error,
    lexer::{builtins::BuiltinConfig, lexer::Lexer},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        panic!("Usage: pinelex <script> <builtin-variables-list> <builtin-functions-list>");
    }

    let script_path: &str = &args[1];
    let script_name = if script_path.contains("/") {
        script_path.split("/").last().unwrap()
    } else {
        script_path
    };

    let source = read_to_string(script_path).expect("Failed to read script file!");
    let variables = read_to_string(&args[2]).expect("Failed to read builtin variables list!");
    let functions = read_to_string(&args[3]).expect("Failed to read builtin functions list!");

    let config = BuiltinConfig::from_lists(&variables, &functions);

    let start = Instant::now();

    let lexer = match Lexer::new(&config) {
        Ok(lexer) => lexer,
        Err(error) => {
            display_error(&error, script_name, &source);
            panic!()
        }
    };

    let tokens = match lexer.tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, script_name, &source);
            panic!()
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    for token in &tokens {
        println!("{}", token);
    }

    println!("{} tokens", tokens.len());
}
