//! Resolved build configuration of the site.
//!
//! [`SiteConfig`] is constructed once per build invocation and never mutated
//! afterwards. Callers pass it by value or immutable reference.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::output_mode::OutputMode;
use crate::domain::redirect::Redirect;

/// Module-extension alias table handed to the bundler. Keys are import
/// extensions as written in source; values are resolution candidates in
/// priority order.
pub type ExtensionAliasTable = BTreeMap<&'static str, Vec<&'static str>>;

/// Remote origin the image optimizer may load from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteImagePattern {
    pub hostname: String,
    /// URL scheme without the trailing colon, e.g. `https`.
    pub scheme: String,
}

/// Static-export related settings, resolved together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticExportSettings {
    pub output_mode: OutputMode,
    /// `None` when unset or explicitly empty; never `Some("")`.
    pub base_path: Option<String>,
    /// `None` when unset or explicitly empty; never `Some("")`.
    pub asset_prefix: Option<String>,
}

/// The fully resolved configuration, ready to be wrapped for export.
///
/// The intermediate server URL is consumed while deriving
/// `allowed_image_origin` and is deliberately not stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub output_mode: OutputMode,
    pub base_path: Option<String>,
    pub asset_prefix: Option<String>,
    pub allowed_image_origin: RemoteImagePattern,
    pub extension_aliases: ExtensionAliasTable,
    /// Framework strict-mode runtime checks. Always enabled.
    pub strict_runtime_checks: bool,
    /// Passed through verbatim from the redirects source.
    pub redirects: Vec<Redirect>,
}
