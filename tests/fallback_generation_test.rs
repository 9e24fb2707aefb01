//! Generators must still produce output when the intermediate index is
//! absent, reconstructing degraded records from the registry alone.

use docspine::core::index;
use docspine::core::landing::LandingPage;
use docspine::core::llms_txt::LlmsTxt;
use docspine::Registry;
use std::fs;
use tempfile::TempDir;

fn registry() -> Registry {
    Registry::from_toml_str(
        r#"
[[repos]]
url = "https://github.com/acme/commerce-docs.git"
services = [
    { docs_path = "services/cart-service/docs" },
    { docs_path = "services/payments-api/docs" },
]

[[repos]]
url = "https://github.com/acme/identity-docs.git"
services = [{ docs_path = "sso-gateway" }]
"#,
    )
    .unwrap()
}

#[test]
fn llms_txt_degrades_to_registry_declared_services() {
    let work = TempDir::new().unwrap();
    let missing_index = work.path().join("_build/services.json");

    let services = index::load_or_fallback(&missing_index, &registry()).unwrap();
    let path = LlmsTxt::new("https://docs.acme.dev".to_string())
        .write(&services, &work.path().join("dist"))
        .unwrap();

    let text = fs::read_to_string(path).unwrap();
    assert!(!text.is_empty());

    // Everything lands under the default domain with zeroed metadata.
    assert!(text.contains("## Other"));
    assert!(text.contains(
        "- [services-cart-service-docs](https://docs.acme.dev/other/services-cart-service-docs/)"
    ));
    assert!(text.contains("- [sso-gateway](https://docs.acme.dev/other/sso-gateway/)"));
}

#[test]
fn landing_page_degrades_to_registry_declared_services() {
    let work = TempDir::new().unwrap();
    let missing_index = work.path().join("_build/services.json");

    let services = index::load_or_fallback(&missing_index, &registry()).unwrap();
    let path = LandingPage::write(&services, &work.path().join("dist")).unwrap();

    let html = fs::read_to_string(path).unwrap();
    assert!(html.contains(r#"data-stat="services">3<"#));
    assert!(html.contains(r#"data-stat="teams">0<"#));
    assert!(html.contains(r#"data-stat="pages">0<"#));
    assert!(html.contains(r#"const DOMAIN_ORDER = ["other"];"#));
}

#[test]
fn index_wins_over_fallback_once_written() {
    let work = TempDir::new().unwrap();
    let index_path = work.path().join("_build/services.json");

    let authoritative = vec![docspine::ServiceSummary {
        id: "cart-service".to_string(),
        name: "Cart Service".to_string(),
        domain: "checkout".to_string(),
        team: "growth".to_string(),
        pages: 4,
        diataxis: vec![],
    }];
    index::write_services_json(&index_path, &authoritative).unwrap();

    let services = index::load_or_fallback(&index_path, &registry()).unwrap();
    assert_eq!(services, authoritative);
}
