//! # funcloc
//!
//! A CLI tool that counts non-blank lines per language and estimates the
//! average function length of each language in a directory tree.
//!
//! ## Usage
//!
//! ```bash
//! # Count lines per language
//! funcloc ./project
//!
//! # Line totals plus average function length per language
//! funcloc ./project --functions
//!
//! # Watch the totals grow as a live bar chart
//! funcloc ./project --plot
//!
//! # Machine-readable output, skipping vendored code
//! funcloc ./project --output json --exclude "**/vendor/**"
//!
//! # No path: ask for the directory and mode interactively
//! funcloc
//! ```

mod plot;
mod prompt;
mod render;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Term;
use funcloclib::{count_directory, count_directory_with, CountOptions, FilterConfig, LanguageTable};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::plot::BarChart;

/// What a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Line totals and average function lengths
    Functions,
    /// Live bar chart followed by the summary
    Plot,
    /// Summary only
    Count,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything a run needs, decided before any counting starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root: PathBuf,
    pub mode: RunMode,
    pub output: OutputFormat,
    pub filter: FilterConfig,
    pub plot_delay: Duration,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("funcloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count lines of code per language and estimate average function length")
        .arg(Arg::new("path").help(
            "Directory to analyze (prompted for, along with the mode, when omitted)",
        ))
        .arg(
            Arg::new("functions")
                .short('f')
                .long("functions")
                .action(ArgAction::SetTrue)
                .conflicts_with("plot")
                .requires("path")
                .help("Report average function length per language"),
        )
        .arg(
            Arg::new("plot")
                .short('p')
                .long("plot")
                .action(ArgAction::SetTrue)
                .requires("path")
                .help("Draw a live bar chart of line counts while counting"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .value_parser(value_parser!(u64))
                .default_value("10")
                .help("Pause after each chart frame, in milliseconds"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }

    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Turn matches into a run configuration.
///
/// Without a path argument the directory and mode come from the interactive
/// prompts instead of the flags.
fn build_config(matches: &ArgMatches) -> anyhow::Result<RunConfig> {
    let output = match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    };
    let plot_delay = Duration::from_millis(*matches.get_one::<u64>("delay-ms").unwrap_or(&10));
    let filter = build_filter(matches)?;

    let (root, mode) = match matches.get_one::<String>("path") {
        Some(path) => {
            let mode = if matches.get_flag("functions") {
                RunMode::Functions
            } else if matches.get_flag("plot") {
                RunMode::Plot
            } else {
                RunMode::Count
            };
            (PathBuf::from(path), mode)
        }
        None => {
            let answers = prompt::prompt_answers(&mut io::stdin().lock(), &mut io::stdout())?;
            (answers.root, answers.mode)
        }
    };

    Ok(RunConfig {
        root,
        mode,
        output,
        filter,
        plot_delay,
    })
}

fn emit(table: &LanguageTable, config: &RunConfig) -> anyhow::Result<()> {
    let text = match (config.output, config.mode) {
        (OutputFormat::Json, _) => render::render_json(table)? + "\n",
        (OutputFormat::Text, RunMode::Functions) => render::render_functions(table),
        (OutputFormat::Text, _) => render::render_summary(table, &config.root),
    };
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Execute one run.
fn run(config: &RunConfig) -> anyhow::Result<()> {
    let options = CountOptions::new()
        .filter(config.filter.clone())
        .functions(config.mode == RunMode::Functions);

    match config.mode {
        RunMode::Functions | RunMode::Count => {
            let result = count_directory(&config.root, &options)?;
            emit(&LanguageTable::from_count_result(&result), config)
        }
        RunMode::Plot => {
            let mut chart = BarChart::new(Term::stdout(), config.plot_delay);
            let result = count_directory_with(&config.root, &options, |_, counts| {
                if let Err(e) = chart.update(counts) {
                    warn!("could not draw chart: {}", e);
                }
            })?;
            chart.finish(&result.lines)?;
            emit(&LanguageTable::from_count_result(&result), config)?;
            chart.wait_for_dismissal()?;
            Ok(())
        }
    }
}

/// Install the stderr logger; `-v` raises the level.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_tracing(matches.get_count("verbose"));

    let result = build_config(&matches).and_then(|config| run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
