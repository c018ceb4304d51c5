//! End-to-end tests for the Knowledge Graph commands
//!
//! These tests validate the full upload/delete/attach workflow against a
//! mocked KG API:
//! - Document correction before upload
//! - Per-item status handling (200, 401, 404, 409)
//! - The studiedSpecimen patch payload

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const SUBJECT_UUID: &str = "5f0a3f51-92a5-4e43-8cbb-5a2b78dc54cf";
const STATE_UUID: &str = "0d2f7a40-11f5-46f9-8a8f-8c8b3cb7d316";
const DSV_UUID: &str = "9a3c2f10-6a34-4c8e-9f2d-1b5d7c3e8a21";

/// A document the way an older generator wrote it: local @id, wrong casing
fn legacy_instance(dir: &Path) {
    let document = serde_json::json!({
        "@context": {"@vocab": "https://openminds.ebrains.eu/vocab/"},
        "@id": format!("https://localhost/instances/{}", SUBJECT_UUID),
        "@type": "https://openminds.ebrains.eu/core/Tissuesamplecollection",
        "lookupLabel": "sub-01_tsc",
        "studiedState": [
            {"@id": format!("https://localhost/instances/{}", STATE_UUID)}
        ]
    });
    std::fs::write(
        dir.join(format!("{}.json", SUBJECT_UUID)),
        serde_json::to_string_pretty(&document).unwrap(),
    )
    .unwrap();
}

/// The same document after correction, as the KG must receive it
fn corrected_instance() -> serde_json::Value {
    serde_json::json!({
        "@context": {"@vocab": "https://openminds.ebrains.eu/vocab/"},
        "@id": format!("https://kg.ebrains.eu/api/instances/{}", SUBJECT_UUID),
        "@type": "https://openminds.ebrains.eu/core/TissueSampleCollection",
        "lookupLabel": "sub-01_tsc",
        "studiedState": [
            {"@id": format!("https://kg.ebrains.eu/api/instances/{}", STATE_UUID)}
        ]
    })
}

#[tokio::test]
async fn test_upload_posts_corrected_document() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/instances/{}", SUBJECT_UUID)))
        .and(query_param("space", "dataset"))
        .and(body_json(corrected_instance()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    legacy_instance(dir.path());

    let mut cmd = Command::cargo_bin("specmeta").unwrap();
    cmd.arg("upload")
        .arg("--dir")
        .arg(dir.path())
        .arg("--space")
        .arg("dataset")
        .arg("--token")
        .arg("test-token")
        .arg("--kg-url")
        .arg(mock_server.uri());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1/1 instance(s) uploaded"));
}

#[tokio::test]
async fn test_upload_reports_conflict_as_existing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(409))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    legacy_instance(dir.path());

    let mut cmd = Command::cargo_bin("specmeta").unwrap();
    cmd.arg("upload")
        .arg("--dir")
        .arg(dir.path())
        .arg("--token")
        .arg("test-token")
        .arg("--kg-url")
        .arg(mock_server.uri());

    // An existing instance still counts as present in the store.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1/1 instance(s) uploaded"));
}

#[tokio::test]
async fn test_upload_reports_invalid_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    legacy_instance(dir.path());

    let mut cmd = Command::cargo_bin("specmeta").unwrap();
    cmd.arg("upload")
        .arg("--dir")
        .arg(dir.path())
        .arg("--token")
        .arg("bad-token")
        .arg("--kg-url")
        .arg(mock_server.uri());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0/1 instance(s) uploaded"))
        .stdout(predicate::str::contains("token not valid"));
}

#[tokio::test]
async fn test_delete_instances() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/instances/{}", SUBJECT_UUID)))
        .and(query_param("space", "dataset"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/instances/{}", STATE_UUID)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut cmd = Command::cargo_bin("specmeta").unwrap();
    cmd.arg("delete")
        .arg(SUBJECT_UUID)
        .arg(STATE_UUID)
        .arg("--token")
        .arg("test-token")
        .arg("--kg-url")
        .arg(mock_server.uri());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1/2 instance(s) deleted"))
        .stdout(predicate::str::contains("instance not found"));
}

#[tokio::test]
async fn test_delete_rejects_bad_uuid() {
    let mut cmd = Command::cargo_bin("specmeta").unwrap();
    cmd.arg("delete")
        .arg("not-a-uuid")
        .arg("--token")
        .arg("test-token")
        .arg("--kg-url")
        .arg("http://localhost:1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not a UUID"));
}

#[tokio::test]
async fn test_attach_patches_dataset_version() {
    let mock_server = MockServer::start().await;

    let expected_patch = serde_json::json!({
        "@context": {"@vocab": "https://openminds.ebrains.eu/vocab/"},
        "studiedSpecimen": [
            {"@id": format!("https://kg.ebrains.eu/api/instances/{}", SUBJECT_UUID)}
        ]
    });

    Mock::given(method("PATCH"))
        .and(path(format!("/instances/{}", DSV_UUID)))
        .and(query_param("space", "dataset"))
        .and(body_json(expected_patch))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut cmd = Command::cargo_bin("specmeta").unwrap();
    cmd.arg("attach")
        .arg("--dataset-version")
        .arg(DSV_UUID)
        .arg(SUBJECT_UUID)
        .arg("--token")
        .arg("test-token")
        .arg("--kg-url")
        .arg(mock_server.uri());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Dataset version updated"));
}

#[tokio::test]
async fn test_attach_missing_dataset_version_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let mut cmd = Command::cargo_bin("specmeta").unwrap();
    cmd.arg("attach")
        .arg("--dataset-version")
        .arg(DSV_UUID)
        .arg(SUBJECT_UUID)
        .arg("--token")
        .arg("test-token")
        .arg("--kg-url")
        .arg(mock_server.uri());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("instance not found"));
}
