//! CLI tool to extract edit templates from before/after text.

use std::fmt::Display;
use std::fs;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::info;
use serde::Serialize;
use tmplrev::{
    Algorithm, Chunk, DiffOptions, Element, Error, Insertions, Template, detect_with, diff_with,
    overlapping_windows, render_with,
};

#[derive(Debug, Parser)]
#[command(name = "tmplrev", version)]
#[command(about = "Extract reusable edit templates from before/after text", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the template describing how BEFORE became AFTER
    Template(PairArgs),
    /// Print the annotated diff stream of BEFORE and AFTER
    Diff(PairArgs),
    /// Print fixed-size windows over a list of tokens
    Windows(WindowArgs),
}

#[derive(Debug, Args)]
struct PairArgs {
    /// Text before the edit
    before: String,
    /// Text after the edit
    after: String,
    /// Read BEFORE and AFTER from files instead of taking them literally
    #[arg(long)]
    files: bool,
    /// How text is split into tokens
    #[arg(long, value_enum, default_value_t = TokenMode::Words)]
    tokens: TokenMode,
    /// Sequence alignment algorithm
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Myers)]
    algorithm: AlgorithmArg,
    /// Keep inserted tokens as literals instead of dropping them
    #[arg(long)]
    emit_insertions: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct WindowArgs {
    /// Window length
    #[arg(long)]
    length: usize,
    /// Distance between window starts (defaults to the length)
    #[arg(long)]
    step: Option<usize>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Tokens to window over
    tokens: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TokenMode {
    /// Whitespace-separated words
    Words,
    /// Individual characters
    Chars,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Myers,
    Patience,
    Lcs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Myers => Self::Myers,
            AlgorithmArg::Patience => Self::Patience,
            AlgorithmArg::Lcs => Self::Lcs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Template(args) => {
            let (before, after) = load_pair(&args)?;
            let options = diff_options(&args);
            match args.tokens {
                TokenMode::Words => print_template(
                    detect_with(before.split_whitespace(), after.split_whitespace(), &options),
                    args.format,
                    " ",
                ),
                TokenMode::Chars => print_template(
                    detect_with(before.chars(), after.chars(), &options),
                    args.format,
                    "",
                ),
            }
        }
        Command::Diff(args) => {
            let (before, after) = load_pair(&args)?;
            let options = diff_options(&args);
            match args.tokens {
                TokenMode::Words => print_stream(
                    diff_with(before.split_whitespace(), after.split_whitespace(), &options),
                    args.format,
                ),
                TokenMode::Chars => print_stream(
                    diff_with(before.chars(), after.chars(), &options),
                    args.format,
                ),
            }
        }
        Command::Windows(args) => {
            let windows: Vec<Vec<String>> =
                overlapping_windows(args.tokens, args.length, args.step)?.collect();
            info!("{} window(s)", windows.len());
            match args.format {
                OutputFormat::Text => {
                    for window in &windows {
                        println!("{}", window.join(" "));
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&windows)?),
            }
            Ok(())
        }
    }
}

fn load_pair(args: &PairArgs) -> Result<(String, String), Error> {
    if !args.files {
        return Ok((args.before.clone(), args.after.clone()));
    }
    let before = fs::read_to_string(&args.before).map_err(|e| Error::io(&args.before, e))?;
    let after = fs::read_to_string(&args.after).map_err(|e| Error::io(&args.after, e))?;
    info!(
        "read {} and {} bytes from {} and {}",
        before.len(),
        after.len(),
        args.before,
        args.after
    );
    Ok((before, after))
}

fn diff_options(args: &PairArgs) -> DiffOptions {
    let insertions = if args.emit_insertions {
        Insertions::Emit
    } else {
        Insertions::Skip
    };
    DiffOptions::new()
        .algorithm(args.algorithm.into())
        .insertions(insertions)
}

fn print_template<T, I>(chunks: I, format: OutputFormat, token_separator: &str) -> Result<(), Error>
where
    I: Iterator<Item = Chunk<T>>,
    T: Display + Serialize,
{
    let template: Template<T> = chunks.collect();
    info!("template has {} chunk(s)", template.len());
    match format {
        OutputFormat::Text => println!("{}", render_with(&template, token_separator)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&template)?),
    }
    Ok(())
}

fn print_stream<T, I>(stream: I, format: OutputFormat) -> Result<(), Error>
where
    I: Iterator<Item = Element<T>>,
    T: Display + Serialize,
{
    let elements: Vec<Element<T>> = stream.collect();
    match format {
        OutputFormat::Text => {
            let line: Vec<String> = elements.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&elements)?),
    }
    Ok(())
}
