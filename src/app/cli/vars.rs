//! Vars command implementation.

use crate::app::resolver::DEFAULT_SERVER_URL;
use crate::domain::{AppError, BuildEnv};

pub fn run_vars() -> Result<(), AppError> {
    println!("Environment variables read at build time:");
    for spec in BuildEnv::SPECS {
        println!("  {}", spec.name);
        println!("      {}", spec.description);
        if let Some(default) = spec.default {
            println!("      default: {}", default);
        }
    }
    println!();
    println!("With neither host variable set, the server URL is {}.", DEFAULT_SERVER_URL);
    println!("Empty values count as unset. RUST_LOG controls diagnostic output.");

    Ok(())
}
