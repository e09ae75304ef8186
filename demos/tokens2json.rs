use std::env;

use sdb_expr::tokenize;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: tokens2json <expr>");
        return;
    }

    match tokenize(&args[1]) {
        Ok(tokens) => println!("{}", serde_json::to_string_pretty(&tokens).unwrap()),
        Err(err) => eprintln!("{}", err.render(&args[1])),
    }
}
