use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::Parser;
use zlang::run_program;

/// zlang is an interpreter for a minimal imperative teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script file. The program is read from standard input when no
    /// path is given.
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let source = match &args.file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|_| {
                          eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                    path.display());
                          std::process::exit(1);
                      }),
        None => {
            let mut buffer = String::new();
            if io::stdin().read_to_string(&mut buffer).is_err() {
                eprintln!("Failed to read the program from standard input.");
                std::process::exit(1);
            }
            buffer
        },
    };

    if let Err(e) = run_program(&source) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
