pub mod build_env;
pub mod bundler;
pub mod error;
pub mod output_mode;
pub mod redirect;
pub mod site_config;

pub use build_env::{BuildEnv, EnvVarSpec};
pub use error::AppError;
pub use output_mode::OutputMode;
pub use redirect::Redirect;
pub use site_config::{ExtensionAliasTable, RemoteImagePattern, SiteConfig, StaticExportSettings};
