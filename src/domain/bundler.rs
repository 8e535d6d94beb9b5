//! Bundler-facing configuration and the extension-alias hook.
//!
//! The bundler hands its configuration object to the hook and receives it
//! back with the alias table filled in. Fields the hook does not model are
//! held in flattened extras so they flow out unchanged in shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::site_config::ExtensionAliasTable;

/// Fixed module-extension alias table. Sources written in TypeScript import
/// sibling modules with JavaScript extensions; each key lists the candidate
/// files the bundler should try for that import, first match winning.
pub fn extension_aliases() -> ExtensionAliasTable {
    BTreeMap::from([
        (".cjs", vec![".cts", ".cjs"]),
        (".js", vec![".ts", ".tsx", ".js", ".jsx"]),
        (".mjs", vec![".mts", ".mjs"]),
    ])
}

/// Subset of the bundler's configuration object the hook touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    #[serde(default)]
    pub resolve: ResolveOptions,
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

/// Module-resolution options within the bundler configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extension_alias: BTreeMap<String, Vec<String>>,
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

/// The hook contract: take the bundler's mutable configuration, install the
/// alias table, leave every other field untouched.
pub fn apply_extension_aliases(config: &mut BundlerConfig, table: &ExtensionAliasTable) {
    for (import_ext, candidates) in table {
        config
            .resolve
            .extension_alias
            .insert(import_ext.to_string(), candidates.iter().map(|c| c.to_string()).collect());
    }
}
