//! Check command implementation.

use std::path::PathBuf;

use crate::app::resolver::{resolve_server_url, resolve_site_config};
use crate::domain::{AppError, BuildEnv};
use crate::services::redirects;

pub fn run_check(redirects_path: Option<PathBuf>) -> Result<(), AppError> {
    let env = BuildEnv::from_process();
    let rules = redirects::load(redirects_path.as_deref())?;

    let (server_url, tier) = resolve_server_url(&env);
    let site = resolve_site_config(&env, rules)?;

    println!("Resolved build configuration:");
    println!("  output mode:  {}", site.output_mode);
    println!("  server URL:   {} (from {})", server_url, tier.describe());
    println!(
        "  image origin: {} ({})",
        site.allowed_image_origin.hostname, site.allowed_image_origin.scheme
    );
    println!("  base path:    {}", site.base_path.as_deref().unwrap_or("(none)"));
    println!("  asset prefix: {}", site.asset_prefix.as_deref().unwrap_or("(none)"));
    println!("  redirects:    {} rule(s)", site.redirects.len());
    println!("✅ Configuration resolves cleanly");

    Ok(())
}
