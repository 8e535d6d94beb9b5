use siteconf::services::redirects;
use siteconf::{
    BuildEnv, OutputMode, ServerUrlTier, apply_cms_integration, resolve_server_url,
    resolve_site_config,
};
use std::fs;
use tempfile::TempDir;

fn env(production_host: Option<&str>, private_origin: Option<&str>) -> BuildEnv {
    BuildEnv {
        production_host: production_host.map(str::to_string),
        private_origin: private_origin.map(str::to_string),
        ..BuildEnv::default()
    }
}

#[test]
fn full_resolution_flow_through_the_library() {
    let temp = TempDir::new().expect("tempdir");
    let rules_path = temp.path().join("redirects.toml");
    fs::write(
        &rules_path,
        r#"
        [[redirects]]
        source = "/old"
        destination = "/new"
        permanent = true
        "#,
    )
    .expect("write redirects");

    let build_env = BuildEnv {
        production_host: Some("example.com".to_string()),
        static_export: Some("1".to_string()),
        base_path: Some("/docs".to_string()),
        ..BuildEnv::default()
    };

    let rules = redirects::load(Some(&rules_path)).expect("redirects load");
    let site = resolve_site_config(&build_env, rules).expect("resolution");

    assert_eq!(site.output_mode, OutputMode::Export);
    assert_eq!(site.base_path.as_deref(), Some("/docs"));
    assert_eq!(site.allowed_image_origin.hostname, "example.com");
    assert_eq!(site.redirects.len(), 1);

    let exported = apply_cms_integration(site);
    let json = serde_json::to_value(&exported).expect("serializable");
    assert_eq!(json["output"], "export");
    assert_eq!(json["basePath"], "/docs");
    assert_eq!(json["redirects"][0]["permanent"], true);
    assert_eq!(json["cms"]["devBundleServerPackages"], false);
}

#[test]
fn each_fallback_tier_is_reported() {
    let (url, tier) = resolve_server_url(&env(Some("example.com"), None));
    assert_eq!((url.as_str(), tier), ("https://example.com", ServerUrlTier::ProductionHost));

    let (url, tier) = resolve_server_url(&env(None, Some("http://192.168.1.10:3000")));
    assert_eq!(
        (url.as_str(), tier),
        ("http://192.168.1.10:3000", ServerUrlTier::PrivateOrigin)
    );

    let (url, tier) = resolve_server_url(&env(None, None));
    assert_eq!((url.as_str(), tier), ("http://localhost:3000", ServerUrlTier::LocalhostDefault));
}
