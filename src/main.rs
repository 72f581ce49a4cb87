use std::io::{self, BufRead, Write};
use std::process;

use lexical_analyzer::errors::errors::Error;
use lexical_analyzer::lexer::lexer::scan;
use lexical_analyzer::render_tokens;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        println!("Enter the text to analyze (or 'exit' to quit):");
        stdout.flush().map_err(Error::WriteOutput)?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(Error::ReadInput)?;
        if read == 0 {
            break;
        }

        // Strip the line terminator only, interior text goes to the scanner
        // untouched.
        let input = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if input.eq_ignore_ascii_case("exit") {
            println!("Ending lexical analysis.");
            break;
        }

        print!("{}", render_tokens(&scan(input)));
        println!();
    }

    Ok(())
}
