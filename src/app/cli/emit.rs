//! Emit command implementation.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_emit(
    redirects: Option<PathBuf>,
    pretty: bool,
    out: Option<PathBuf>,
) -> Result<(), AppError> {
    let config = crate::resolve(redirects.as_deref())?;

    let json = if pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };

    match out {
        Some(path) => {
            fs::write(&path, format!("{json}\n"))?;
            println!("✅ Wrote build configuration to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
