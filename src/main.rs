//! noweb CLI - literate programming tangle and weave

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use noweb::commands::{self, Command};
use noweb::config::{self, ConfigUpdate, UnterminatedPolicy};
use noweb::interface::Context;

#[derive(Parser)]
#[command(name = "noweb")]
#[command(author, version, about = "Literate programming tangle and weave", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fail on chunks that are never closed
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every file-like chunk to disk
    Tangle {
        /// Directory outputs are written below
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Dry run - show what would be done without doing it
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Don't print a summary
        #[arg(short, long)]
        quiet: bool,

        /// Documents to tangle
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Print the names of file-like chunks
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,

        /// Include macro chunks
        #[arg(short, long)]
        all: bool,

        /// Documents to list
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Render documents with escaped, delimited chunks
    Weave {
        /// Directory outputs are written below
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Dry run - show what would be done without doing it
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Don't print a summary
        #[arg(short, long)]
        quiet: bool,

        /// Documents to weave
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

impl Commands {
    /// Splits into the command to run and the config overrides it carries.
    fn into_command(self) -> (Command, ConfigUpdate) {
        let mut update = ConfigUpdate::new();
        let command = match self {
            Commands::Tangle {
                output_dir,
                dry_run,
                quiet,
                files,
            } => {
                update.output_dir = output_dir;
                Command::Tangle(commands::TangleOptions {
                    dry_run,
                    quiet,
                    files,
                })
            }
            Commands::List { json, all, files } => {
                Command::List(commands::ListOptions { json, all, files })
            }
            Commands::Weave {
                output_dir,
                dry_run,
                quiet,
                files,
            } => {
                update.output_dir = output_dir;
                Command::Weave(commands::WeaveOptions {
                    dry_run,
                    quiet,
                    files,
                })
            }
        };
        (command, update)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout carries command output only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let base_dir = match cli.directory {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let loaded = match &cli.config {
        Some(path) => config::read_config_file(path),
        None => config::read_config(&base_dir),
    };
    let base_config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let (command, mut update) = cli.command.into_command();
    if cli.strict {
        update.unterminated = Some(UnterminatedPolicy::Error);
    }
    let ctx = Context::new(update.merge_into(&base_config), base_dir);

    match commands::run(&ctx, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
