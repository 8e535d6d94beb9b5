//! CLI Adapter.

mod check;
mod emit;
mod vars;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "siteconf")]
#[command(version)]
#[command(
    about = "Resolve and export the site's build configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration and print it as framework-ready JSON
    #[clap(visible_alias = "e")]
    Emit {
        /// Redirects file (default: ./redirects.toml, optional there)
        #[arg(short = 'r', long)]
        redirects: Option<PathBuf>,
        /// Pretty-print instead of emitting one compact line
        #[arg(long)]
        pretty: bool,
        /// Write to a file instead of stdout
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Resolve the configuration and report each setting and its source
    #[clap(visible_alias = "c")]
    Check {
        /// Redirects file (default: ./redirects.toml, optional there)
        #[arg(short = 'r', long)]
        redirects: Option<PathBuf>,
    },
    /// List the environment variables the resolver reads
    Vars,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Emit { redirects, pretty, out } => {
            emit::run_emit(redirects, pretty, out).map(|_| 0)
        }
        Commands::Check { redirects } => check::run_check(redirects).map(|_| 0),
        Commands::Vars => vars::run_vars().map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
