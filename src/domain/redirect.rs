//! Redirect rules, passed through to the framework verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One redirect rule. `source` and `destination` are the only fields the
/// resolver requires; everything else the site author wrote (permanence,
/// matcher conditions, status overrides) is carried through unchanged via
/// the flattened extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub source: String,
    pub destination: String,
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}
