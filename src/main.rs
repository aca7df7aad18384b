use std::{env, fs::read_to_string, process, time::Instant};

use minilang::{display_error, parser::parser::parse, tokens::tokens::Token};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let tokens: Vec<Token> =
        serde_json::from_str(&file_contents).expect("Failed to decode token file!");

    let start = Instant::now();
    let parsed = parse(tokens.clone());

    match parsed {
        Ok(program) => {
            println!("Parsed in {:?}", start.elapsed());
            println!("{:#?}", program);
        }
        Err(error) => {
            display_error(error, &tokens);
            process::exit(1);
        }
    }
}
