//! Build-time configuration resolution.
//!
//! Every operation here is a pure function over a captured [`BuildEnv`];
//! nothing reads the process environment or touches the filesystem. The
//! emptiness rule is uniform: only the empty string counts as unset, values
//! are never trimmed.

use tracing::debug;
use url::Url;

use crate::domain::bundler;
use crate::domain::{
    AppError, BuildEnv, OutputMode, Redirect, RemoteImagePattern, SiteConfig,
    StaticExportSettings,
};

/// Server URL used when neither override is present.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Which tier of the server-URL fallback produced the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerUrlTier {
    /// `https://` prepended to the production deployment hostname.
    ProductionHost,
    /// The private origin override, taken as-is.
    PrivateOrigin,
    /// The hardcoded localhost default.
    LocalhostDefault,
}

impl ServerUrlTier {
    pub fn describe(&self) -> &'static str {
        match self {
            ServerUrlTier::ProductionHost => "production host",
            ServerUrlTier::PrivateOrigin => "private origin override",
            ServerUrlTier::LocalhostDefault => "localhost default",
        }
    }
}

/// Resolve the server's own URL with ordered non-empty checks: production
/// hostname (scheme forced to https), then the private origin override, then
/// [`DEFAULT_SERVER_URL`]. Always yields a value.
pub fn resolve_server_url(env: &BuildEnv) -> (String, ServerUrlTier) {
    if let Some(host) = non_empty(&env.production_host) {
        debug!(host, "server URL from production host");
        return (format!("https://{host}"), ServerUrlTier::ProductionHost);
    }

    if let Some(origin) = non_empty(&env.private_origin) {
        debug!(origin, "server URL from private origin override");
        return (origin.to_string(), ServerUrlTier::PrivateOrigin);
    }

    debug!("server URL from localhost default");
    (DEFAULT_SERVER_URL.to_string(), ServerUrlTier::LocalhostDefault)
}

/// Derive the permitted remote image origin from the server URL.
///
/// Total over arbitrary input: an unparseable URL, or one that parses but
/// carries no host, is a hard failure that stops resolution.
pub fn resolve_image_origin(server_url: &str) -> Result<RemoteImagePattern, AppError> {
    let url = Url::parse(server_url).map_err(|source| AppError::MalformedServerUrl {
        value: server_url.to_string(),
        source,
    })?;

    let hostname =
        url.host_str().ok_or_else(|| AppError::ServerUrlMissingHost(server_url.to_string()))?;

    // `Url::scheme` already excludes the trailing colon.
    Ok(RemoteImagePattern { hostname: hostname.to_string(), scheme: url.scheme().to_string() })
}

/// Resolve the output mode and the static-hosting path settings. The export
/// flag is matched exactly against `"1"`; unset and explicitly empty path
/// values both map to `None`, never to `Some("")`.
pub fn resolve_static_export(env: &BuildEnv) -> StaticExportSettings {
    StaticExportSettings {
        output_mode: OutputMode::from_flag(env.static_export.as_deref()),
        base_path: non_empty(&env.base_path).map(str::to_string),
        asset_prefix: non_empty(&env.asset_prefix).map(str::to_string),
    }
}

/// Compose the full build configuration. The server URL is resolved, consumed
/// by the image-origin derivation, and dropped; it is not part of the result.
pub fn resolve_site_config(
    env: &BuildEnv,
    redirects: Vec<Redirect>,
) -> Result<SiteConfig, AppError> {
    let (server_url, tier) = resolve_server_url(env);
    let allowed_image_origin = resolve_image_origin(&server_url)?;
    let export = resolve_static_export(env);

    debug!(
        mode = %export.output_mode,
        image_origin = %allowed_image_origin.hostname,
        server_url_tier = tier.describe(),
        redirects = redirects.len(),
        "resolved site configuration"
    );

    Ok(SiteConfig {
        output_mode: export.output_mode,
        base_path: export.base_path,
        asset_prefix: export.asset_prefix,
        allowed_image_origin,
        extension_aliases: bundler::extension_aliases(),
        strict_runtime_checks: true,
        redirects,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
