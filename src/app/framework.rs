//! Framework-facing export surface and the CMS integration boundary.
//!
//! [`SiteConfig`] is the resolver's domain model; [`FrameworkConfig`] is the
//! object the build pipeline consumes, serialized in the framework's
//! camelCase contract. Absent optional settings are omitted from the output
//! entirely, never emitted as `null` or empty strings.

use serde::Serialize;

use crate::domain::bundler::{BundlerConfig, apply_extension_aliases};
use crate::domain::{Redirect, RemoteImagePattern, SiteConfig};

/// Image optimizer settings in the framework contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings {
    pub remote_patterns: Vec<RemoteImagePattern>,
}

/// Settings contributed by the content-management integration wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsSettings {
    /// The single option the wrapper is invoked with: keep the CMS's server
    /// packages out of the dev-time bundle.
    pub dev_bundle_server_packages: bool,
}

/// The exported configuration object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkConfig {
    /// `"export"` for a static export; omitted for the server default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_prefix: Option<String>,
    pub images: ImageSettings,
    pub bundler: BundlerConfig,
    pub strict_runtime_checks: bool,
    pub redirects: Vec<Redirect>,
    pub cms: CmsSettings,
}

/// Wrap the resolved configuration for the content-management integration.
///
/// The integration is an opaque boundary: it takes the assembled
/// configuration, contributes its own settings, and leaves the rest
/// unchanged in shape. It is always invoked with dev-time server-package
/// bundling disabled.
pub fn apply_cms_integration(site: SiteConfig) -> FrameworkConfig {
    let mut bundler = BundlerConfig::default();
    apply_extension_aliases(&mut bundler, &site.extension_aliases);

    FrameworkConfig {
        output: site.output_mode.framework_value(),
        base_path: site.base_path,
        asset_prefix: site.asset_prefix,
        images: ImageSettings { remote_patterns: vec![site.allowed_image_origin] },
        bundler,
        strict_runtime_checks: site.strict_runtime_checks,
        redirects: site.redirects,
        cms: CmsSettings { dev_bundle_server_packages: false },
    }
}
