//! The nthprime CLI tool

mod util;

use clap::{CommandFactory, Parser, Subcommand};
use env_logger::{Builder, Target};
use itertools::Itertools;
use log::LevelFilter;
use nthprime_primes::{find_nth_prime, first_primes, parse_count, PrimeSequence};
use std::io;
use strum::{Display, EnumString, EnumVariantNames};

#[derive(Clone, Copy, EnumString, EnumVariantNames, Display)]
pub enum ListFormat {
    /// One prime per line.
    #[strum(serialize = "lines")]
    Lines,
    /// A single comma separated line.
    #[strum(serialize = "csv")]
    Csv,
}

#[derive(Parser)]
#[command(name = "nthprime", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the COUNT-th prime number, where 2 is the first.
    Nth {
        /// Position of the prime, starting at 1.
        #[arg(allow_hyphen_values = true)]
        count: String,
    },
    /// Prints the first COUNT prime numbers.
    List {
        /// Number of primes to print.
        #[arg(allow_hyphen_values = true)]
        count: String,

        /// How to render the primes
        #[arg(short, long)]
        #[arg(default_value_t = ListFormat::Lines)]
        #[arg(value_parser = clap_enum_variants!(ListFormat))]
        format: ListFormat,
    },
}

fn main() -> Result<(), io::Error> {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        Ok(())
    } else if let Some(command) = args.command {
        run_command(command);
        Ok(())
    } else {
        Cli::command().print_help()
    }
}

#[allow(clippy::print_stderr)]
fn run_command(command: Commands) {
    let result = match command {
        Commands::Nth { count } => nth(&count),
        Commands::List { count, format } => list(&count, format),
    };
    if let Err(errors) = result {
        for error in errors {
            eprintln!("{error}");
        }
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
fn nth(count: &str) -> Result<(), Vec<String>> {
    let prime = parse_count(count)
        .and_then(find_nth_prime)
        .map_err(|e| vec![e.to_string()])?;
    log::info!("Prime number {count} is {prime}");
    println!("{prime}");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn list(count: &str, format: ListFormat) -> Result<(), Vec<String>> {
    let primes = parse_count(count)
        .and_then(first_primes)
        .map_err(|e| vec![e.to_string()])?;
    log::info!("Found {} primes", primes.len());
    println!("{}", render(&primes, format));
    Ok(())
}

fn render(primes: &PrimeSequence, format: ListFormat) -> String {
    match format {
        ListFormat::Lines => primes.iter().join("\n"),
        ListFormat::Csv => primes.to_string(),
    }
}
