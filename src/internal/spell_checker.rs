#![allow(clippy::missing_docs_in_private_items)]

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use log::info;
use wordtable::{
    Interpreter,
    logger::{initialize_logger, verbosity_level},
};

/// Runs a spell-checking command script against a chained hash table
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command script to execute
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Stop at the first failing command
    #[arg(long)]
    fail_fast: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    initialize_logger(verbosity_level(args.verbose));

    let script = File::open(&args.input)
        .map_err(|err| format!("cannot open file {}: {err}", args.input.display()))?;

    let stdout = io::stdout();
    let mut interpreter =
        Interpreter::new(BufWriter::new(stdout.lock())).fail_fast(args.fail_fast);
    let summary = interpreter.run(BufReader::new(script))?;
    interpreter.into_inner().flush()?;

    info!("processed {} lines with {} errors", summary.lines, summary.errors);
    if summary.is_clean() {
        Ok(())
    } else {
        Err(format!("{} of {} commands failed", summary.errors, summary.lines).into())
    }
}
