use std::path::PathBuf;

use siteconf::AppError;
use tracing_subscriber::EnvFilter;

fn main() {
    match bootstrap() {
        Ok(dotenv_path) => {
            if let Some(path) = dotenv_path {
                tracing::debug!(path = %path.display(), "loaded .env");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    siteconf::app::cli::run();
}

/// Load `.env` and install the logger, in that order so a `RUST_LOG` set in
/// `.env` takes effect. Returns the `.env` path when one was loaded.
fn bootstrap() -> Result<Option<PathBuf>, AppError> {
    let dotenv_path = match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => return Err(AppError::config_error(format!("Failed to load .env: {err}"))),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::config_error(format!("Failed to initialize logging: {e}")))?;

    Ok(dotenv_path)
}
