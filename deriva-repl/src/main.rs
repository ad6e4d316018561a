//! Command line tool that differentiates simple calculus functions.
//!
//! Run without arguments for an interactive session. With a file argument, or with input piped
//! through stdin, every non-blank line is differentiated and its derivative printed.

mod session;
mod validate;

use rustyline::error::ReadlineError;
use session::{print_instructions, respond, Session};
use std::{fs, io::{self, IsTerminal, Read}, process};

/// Differentiates every non-blank line of the input.
fn batch(input: &str) {
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        if let Some(derivative) = respond(line) {
            println!("{}", derivative);
        }
    }
}

fn main() {
    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // differentiate every function in the file
        match fs::read_to_string(&filename) {
            Ok(input) => batch(&input),
            Err(err) => {
                eprintln!("{}: {}", filename, err);
                process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read functions from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("{}", err);
            process::exit(1);
        }

        batch(&input);
    } else {
        // run the repl / interactive mode
        print_instructions();

        let result = Session::new().and_then(|mut session| session.run());
        match result {
            Ok(()) | Err(ReadlineError::Eof | ReadlineError::Interrupted) => (),
            Err(err) => eprintln!("{}", err),
        }

        println!("Program ended.");
    }
}
