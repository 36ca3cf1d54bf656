//! Command-line interface for tagquery
//! Answers attribute path queries over tag markup, or dumps the parsed tag tree.
//!
//! Usage:
//!   tagquery [PATH]                        - Same as run (default command)
//!   tagquery run [PATH]                    - Read `N Q`, markup and queries from PATH or stdin
//!   tagquery inspect [PATH] [--format F]   - Print the tree of a markup-only file
//!   tagquery formats                       - List all available dump formats
use clap::{Arg, ArgMatches, Command};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use tagquery::building::parse_document;
use tagquery::config::{LogLevel, Loader, Settings};
use tagquery::error::{AppError, InputError};
use tagquery::formats::FormatRegistry;
use tagquery::logging::init_logging;
use tagquery::processor;
use tracing::{debug, error};

fn cli() -> Command {
    let path_arg = Arg::new("path")
        .help("Input file (reads stdin when omitted)")
        .index(1);

    Command::new("tagquery")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Answer attribute path queries over tag markup")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML settings file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log level (trace, debug, info, warn, error)"),
        )
        .arg(path_arg.clone())
        .subcommand(
            Command::new("run")
                .about("Answer the queries of a `N Q` input (default command)")
                .arg(path_arg.clone()),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a markup-only file and print its tag tree")
                .arg(path_arg)
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Dump format (e.g., treeviz, json, yaml)"),
                ),
        )
        .subcommand(Command::new("formats").about("List all available dump formats"))
}

fn main() {
    let matches = cli().get_matches();

    let settings = match load_settings(&matches) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(LogLevel::default());
            error!(error = %e, "invalid configuration");
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    init_logging(settings.logging.level);
    debug!(?settings, "loaded settings");

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => handle_run_command(path_of(run_matches), &settings),
        Some(("inspect", inspect_matches)) => handle_inspect_command(
            path_of(inspect_matches),
            inspect_matches.get_one::<String>("format").map(String::as_str),
            &settings,
        ),
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        _ => handle_run_command(path_of(&matches), &settings),
    };

    if let Err(e) = result {
        error!(error = %e, "failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn path_of(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("path").map(String::as_str)
}

/// Defaults, then the --config file, then TAGQUERY_* variables, then flags
fn load_settings(matches: &ArgMatches) -> Result<Settings, AppError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader = loader.with_env();
    if let Some(level) = matches.get_one::<String>("log-level") {
        loader = loader.set_override("logging.level", level.as_str())?;
    }
    Ok(loader.build()?)
}

fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>, InputError> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Handle the run command
fn handle_run_command(path: Option<&str>, settings: &Settings) -> Result<(), AppError> {
    let reader = open_input(path)?;
    processor::run(reader, io::stdout().lock(), settings)
}

/// Handle the inspect command
fn handle_inspect_command(
    path: Option<&str>,
    format: Option<&str>,
    settings: &Settings,
) -> Result<(), AppError> {
    let mut source = String::new();
    open_input(path)?
        .read_to_string(&mut source)
        .map_err(InputError::from)?;

    let tree = parse_document(&source)?;
    let format = format.unwrap_or(&settings.inspect.format);
    let output = FormatRegistry::with_defaults().serialize(&tree, format)?;
    print!("{}", output);
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for (name, description) in FormatRegistry::with_defaults().describe() {
        println!("  {:<10}{}", name, description);
    }
}
