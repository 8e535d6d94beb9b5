//! siteconf: Resolve a CMS-backed site's build configuration and export it
//! for the build pipeline.
//!
//! Resolution is a single synchronous pass: capture the environment, apply
//! the ordered fallbacks, load the sibling redirects file, and wrap the
//! result for the content-management integration. The resolved configuration
//! is immutable from construction.

pub mod app;
pub mod domain;
pub mod services;

use std::path::Path;

pub use app::framework::{CmsSettings, FrameworkConfig, ImageSettings, apply_cms_integration};
pub use app::resolver::{
    DEFAULT_SERVER_URL, ServerUrlTier, resolve_image_origin, resolve_server_url,
    resolve_site_config, resolve_static_export,
};
pub use domain::{
    AppError, BuildEnv, OutputMode, Redirect, RemoteImagePattern, SiteConfig,
    StaticExportSettings,
};

/// Resolve the framework configuration from the process environment and the
/// redirects source, ready for export.
///
/// Captures the environment once, loads the redirect rules (`redirects_path`
/// overrides the default `./redirects.toml` lookup), resolves the site
/// configuration, and applies the CMS integration wrapper.
pub fn resolve(redirects_path: Option<&Path>) -> Result<FrameworkConfig, AppError> {
    let env = BuildEnv::from_process();
    let redirects = services::redirects::load(redirects_path)?;
    let site = resolve_site_config(&env, redirects)?;
    Ok(apply_cms_integration(site))
}
