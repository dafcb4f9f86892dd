//! Tests of the `geolink2oereb` binary.

mod common;

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use common::{start_registry, write_config, THEME};

fn geolink2oereb() -> Command {
    Command::cargo_bin("geolink2oereb").unwrap()
}

/// Run `convert` for geoLink 4304 with extra arguments, expecting success.
async fn convert_4304(config: PathBuf, extra: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        geolink2oereb()
            .args(["convert", "-g", "4304", "-t", THEME, "--config"])
            .arg(&config)
            .args(&extra)
            .assert()
            .success()
            .get_output()
            .clone()
    })
    .await
    .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_help_lists_convert() {
    geolink2oereb()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_convert_help_lists_options() {
    geolink2oereb()
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--geolink-id"))
        .stdout(predicate::str::contains("--c2ctemplate-style"))
        .stdout(predicate::str::contains("--unify"));
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("missing.yml");

    geolink2oereb()
        .args(["convert", "--geolink-id", "4304", "--theme-code", "ch.Planungszonen"])
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file does not exist"));
}

#[test]
fn test_missing_geolink_id_fails() {
    geolink2oereb()
        .args(["convert", "--theme-code", "ch.Planungszonen", "--config", "x.yml"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_theme_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = dir.path().join("pyramid_oereb.yml");
    std::fs::write(
        &config,
        "pyramid_oereb:\n  language: [de]\n  oereblex:\n    host: https://oereblex.invalid\n",
    )
    .unwrap();

    geolink2oereb()
        .args(["convert", "-g", "4304", "-t", "ch.Planungszonen", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Theme 'ch.Planungszonen' is not configured"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_convert_prints_pairs_to_stdout() {
    let server = start_registry().await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let output = convert_4304(config, Vec::new()).await;
    let xml = stdout(&output);

    assert!(xml.starts_with("<OeREBKRM_V2_0.Dokumente.Dokument TID="));
    assert!(xml.ends_with('\n'));
    assert_eq!(xml.matches("<OeREBKRM_V2_0.Dokumente.Dokument ").count(), 2);
    assert_eq!(xml.matches("<OeREBKRM_V2_0.Amt.Amt ").count(), 2);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Saved to:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_convert_writes_outfile() {
    let server = start_registry().await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());
    let outfile = dir.path().join("out.xml");

    let printed = stdout(&convert_4304(config.clone(), Vec::new()).await);
    let output = convert_4304(
        config,
        vec!["--outfile".to_string(), outfile.display().to_string()],
    )
    .await;

    assert_eq!(stdout(&output), "");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Saved to:"));
    assert_eq!(std::fs::read_to_string(&outfile).unwrap(), printed);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_convert_unify_puts_offices_first() {
    let server = start_registry().await;
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, &server.uri());

    let xml = stdout(&convert_4304(config, vec!["--unify".to_string()]).await);
    let wrapped = format!("<TRANSFER>{xml}</TRANSFER>");
    let doc = roxmltree::Document::parse(&wrapped).unwrap();
    let entities: Vec<_> = doc.root_element().children().filter(|n| n.is_element()).collect();

    // Both files of the decree share one office
    let names: Vec<_> = entities.iter().map(|n| n.tag_name().name()).collect();
    assert_eq!(
        names,
        [
            "OeREBKRM_V2_0.Amt.Amt",
            "OeREBKRM_V2_0.Dokumente.Dokument",
            "OeREBKRM_V2_0.Dokumente.Dokument",
        ]
    );

    let amt_tid = entities[0].attribute("TID").unwrap();
    for dokument in &entities[1..] {
        let reference = dokument
            .children()
            .find(|n| n.has_tag_name("ZustaendigeStelle"))
            .and_then(|n| n.attribute("REF"));
        assert_eq!(reference, Some(amt_tid));
    }
}
