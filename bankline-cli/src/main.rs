//! Bankline CLI - a single-user console bank

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{accounts, session, GlobalArgs};

/// Bankline - create accounts, log in, deposit, withdraw and earn interest
#[derive(Parser)]
#[command(name = "bank", version, about, long_about = None)]
struct Cli {
    /// Directory holding settings.json and the accounts file
    #[arg(long, global = true, env = "BANKLINE_DIR")]
    data_dir: Option<PathBuf>,

    /// Accounts file (relative paths resolve against the data directory)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive banking menu (default)
    Run,

    /// List saved accounts
    Accounts {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so they never interleave with menu prompts on stdout
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let args = GlobalArgs {
        data_dir: cli.data_dir,
        data_file: cli.data_file,
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => session::run(&args),
        Commands::Accounts { json } => accounts::run(&args, json),
    }
}
