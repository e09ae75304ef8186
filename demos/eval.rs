use sdb_expr::Program;
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: eval <expr>");
        process::exit(2);
    }

    let source = args[1..].join(" ");
    let res = Program::from_source(&source).and_then(|prog| prog.eval());

    match res {
        Ok(val) => println!("{} = {:#x}", val, val),
        Err(err) => {
            eprintln!("{}", err.render(&source));
            process::exit(1);
        }
    }
}
