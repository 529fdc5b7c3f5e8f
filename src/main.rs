//! I Need Ideas - CLI
//!
//! Prints random short phrases built from a word list.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use ineedideas::{
    commands::run_generate,
    core::{
        Options,
        options::{DEFAULT_COUNT, DEFAULT_LOWER, DEFAULT_UPPER},
    },
    generator::{Generator, clock_seed},
    output::{print_error, print_status},
    wordlists::loader::load_store,
};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "ineedideas",
    about = "Generate random short phrases (\"ideas\") from a word list",
    version,
    disable_help_flag = true
)]
struct Cli {
    /// Print usage and exit
    #[arg(short, long)]
    help: bool,

    /// The lower bound on the number of words
    #[arg(
        short,
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_LOWER,
        allow_negative_numbers = true
    )]
    lower: i64,

    /// The upper bound on the number of words
    #[arg(
        short,
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_UPPER,
        allow_negative_numbers = true
    )]
    upper: i64,

    /// The number of "ideas" to generate
    #[arg(
        short,
        long,
        value_name = "NUM",
        default_value_t = DEFAULT_COUNT,
        allow_negative_numbers = true
    )]
    count: i64,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short, long, value_name = "PATH")]
    wordlist: Option<PathBuf>,

    /// Random seed (default: current time in seconds)
    #[arg(short, long, value_name = "NUM")]
    seed: Option<u64>,
}

impl From<Cli> for Options {
    fn from(cli: Cli) -> Self {
        Self {
            help: cli.help,
            lower: cli.lower,
            upper: cli.upper,
            count: cli.count,
            wordlist: cli.wordlist,
            seed: cli.seed,
        }
    }
}

fn main() -> ExitCode {
    let options: Options = match Cli::try_parse() {
        Ok(cli) => cli.into(),
        Err(err) if err.kind() == ErrorKind::DisplayVersion => err.exit(),
        Err(err) => {
            // clap exits with 2 by default; parse failures exit with 1 here.
            // A failed write to stderr leaves nowhere to report it.
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> Result<()> {
    if options.help {
        Cli::command()
            .print_help()
            .context("failed to print usage")?;
        return Ok(());
    }

    let config = options.validate()?;

    // stderr, so stdout carries only phrases
    print_status(&config);

    let store = load_store(options.wordlist.as_deref())?;

    let seed = options.seed.unwrap_or_else(clock_seed);
    let mut generator = Generator::from_seed(seed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_generate(&mut generator, &store, &config, &mut out)?;
    out.flush().context("failed to write phrases")?;

    Ok(())
}
