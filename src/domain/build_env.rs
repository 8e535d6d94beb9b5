//! Snapshot of the build-time environment contract.
//!
//! The resolver never reads the process environment directly; it receives a
//! [`BuildEnv`] captured once at startup. Values are stored exactly as found,
//! including explicit empty strings. Emptiness policy belongs to resolution,
//! not to the snapshot.

/// One variable of the environment contract, for `siteconf vars`.
#[derive(Debug, Clone, Copy)]
pub struct EnvVarSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub default: Option<&'static str>,
}

/// Raw environment inputs consumed by configuration resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    /// Production-deployment hostname (no scheme).
    pub production_host: Option<String>,
    /// Private origin override (full URL).
    pub private_origin: Option<String>,
    /// Static-export flag; only the literal `"1"` selects export mode.
    pub static_export: Option<String>,
    /// Base path for non-root static hosting.
    pub base_path: Option<String>,
    /// Asset prefix for non-root static hosting.
    pub asset_prefix: Option<String>,
}

impl BuildEnv {
    pub const PRODUCTION_HOST: &'static str = "SITE_PRODUCTION_HOST";
    pub const PRIVATE_ORIGIN: &'static str = "SITE_PRIVATE_ORIGIN";
    pub const STATIC_EXPORT: &'static str = "SITE_STATIC_EXPORT";
    pub const BASE_PATH: &'static str = "SITE_BASE_PATH";
    pub const ASSET_PREFIX: &'static str = "SITE_ASSET_PREFIX";

    /// The full contract, in resolution-relevant order.
    pub const SPECS: [EnvVarSpec; 5] = [
        EnvVarSpec {
            name: Self::PRODUCTION_HOST,
            description: "Production deployment hostname; resolves the server URL as https://<host>",
            default: None,
        },
        EnvVarSpec {
            name: Self::PRIVATE_ORIGIN,
            description: "Private origin override (full URL); used when no production host is set",
            default: None,
        },
        EnvVarSpec {
            name: Self::STATIC_EXPORT,
            description: "Set to exactly \"1\" to build a static export instead of the server default",
            default: None,
        },
        EnvVarSpec {
            name: Self::BASE_PATH,
            description: "Base path when the site is hosted below the domain root",
            default: None,
        },
        EnvVarSpec {
            name: Self::ASSET_PREFIX,
            description: "Prefix prepended to asset URLs for non-root hosting",
            default: None,
        },
    ];

    /// Capture the contract variables from the process environment.
    pub fn from_process() -> Self {
        Self {
            production_host: read(Self::PRODUCTION_HOST),
            private_origin: read(Self::PRIVATE_ORIGIN),
            static_export: read(Self::STATIC_EXPORT),
            base_path: read(Self::BASE_PATH),
            asset_prefix: read(Self::ASSET_PREFIX),
        }
    }
}

fn read(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
