//! Loading of the sibling redirects file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{AppError, Redirect};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_FILE: &str = "redirects.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RedirectsFile {
    #[serde(default)]
    redirects: Vec<Redirect>,
}

/// Load the redirect rules.
///
/// An explicitly requested file must exist and parse. The default file is
/// optional: when `./redirects.toml` is absent the site simply has no
/// redirects.
pub fn load(explicit: Option<&Path>) -> Result<Vec<Redirect>, AppError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::RedirectsFileNotFound(path.display().to_string()));
            }
            read(path)
        }
        None => {
            let default = Path::new(DEFAULT_FILE);
            if !default.exists() {
                debug!("no {DEFAULT_FILE} in working directory, continuing without redirects");
                return Ok(Vec::new());
            }
            read(default)
        }
    }
}

fn read(path: &Path) -> Result<Vec<Redirect>, AppError> {
    let raw = fs::read_to_string(path)?;
    let file: RedirectsFile = toml::from_str(&raw)
        .map_err(|source| AppError::RedirectsParse { path: path.display().to_string(), source })?;
    debug!(path = %path.display(), count = file.redirects.len(), "loaded redirects");
    Ok(file.redirects)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_rules(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(DEFAULT_FILE);
        fs::write(&path, contents).expect("write rules file");
        path
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nowhere.toml");

        let err = load(Some(&missing)).expect_err("must fail");
        assert!(matches!(err, AppError::RedirectsFileNotFound(_)));
    }

    #[test]
    fn parses_rules_with_extra_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_rules(
            &dir,
            r#"
            [[redirects]]
            source = "/old"
            destination = "/new"
            permanent = true

            [[redirects]]
            source = "/blog/:slug"
            destination = "/news/:slug"
            statusCode = 302
            "#,
        );

        let rules = load(Some(&path)).expect("loadable");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].source, "/old");
        assert_eq!(rules[1].extras["statusCode"], serde_json::json!(302));
    }

    #[test]
    fn empty_file_means_no_redirects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_rules(&dir, "");

        let rules = load(Some(&path)).expect("loadable");
        assert!(rules.is_empty());
    }

    #[test]
    fn malformed_file_reports_the_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_rules(&dir, "redirects = 5");

        let err = load(Some(&path)).expect_err("must fail");
        match err {
            AppError::RedirectsParse { path: reported, .. } => {
                assert!(reported.ends_with(DEFAULT_FILE));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn misspelled_table_name_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_rules(
            &dir,
            r#"
            [[redirect]]
            source = "/old"
            destination = "/new"
            "#,
        );

        assert!(load(Some(&path)).is_err());
    }
}
