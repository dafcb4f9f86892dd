//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const THEME: &str = "ch.Planungszonen";

/// Load fixture file content.
pub fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Write a configuration pointing at `host` and return its path.
pub fn write_config(dir: &TempDir, host: &str) -> PathBuf {
    let config = format!(
        r#"
pyramid_oereb:
  language: [de, fr]
  default_language: de
  oereblex:
    host: {host}
    version: 1.2.2
    pass_version: true
    mapping:
      official_number: number
  plrs:
    - code: {THEME}
      law_status_lookup:
        - data_code: inKraft
          transfer_code: inKraft
          extract_code: inForce
      document_types_lookup:
        - data_code: decree
          transfer_code: Rechtsvorschrift
          extract_code: LegalProvision
        - data_code: edict
          transfer_code: GesetzlicheGrundlage
          extract_code: Law
        - data_code: notice
          transfer_code: Hinweis
          extract_code: Hint
"#
    );
    let path = dir.path().join("pyramid_oereb.yml");
    fs::write(&path, config).unwrap();
    path
}

pub async fn mock_geolink(server: &MockServer, geolink_id: u64, language: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/geolinks/{geolink_id}.xml")))
        .and(query_param("locale", language))
        .and(query_param("version", "1.2.2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture(&format!("geolink_4304_{language}.xml"))),
        )
        .mount(server)
        .await;
}

/// Start a registry serving geoLink 4304 in German and French.
pub async fn start_registry() -> MockServer {
    let server = MockServer::start().await;
    mock_geolink(&server, 4304, "de").await;
    mock_geolink(&server, 4304, "fr").await;
    server
}
