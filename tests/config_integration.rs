use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command with every relevant environment variable cleared out
fn clean_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cfl-cli").unwrap();
    cmd.env_remove("CFL_URL")
        .env_remove("CFL_EMAIL")
        .env_remove("CFL_API_TOKEN");
    cmd
}

#[test]
fn test_config_set_persists_and_show_reads_back() {
    let tmp = tempfile::tempdir().unwrap();

    clean_cmd()
        .arg("--config-dir")
        .arg(tmp.path())
        .arg("config")
        .arg("set")
        .arg("--url")
        .arg("https://wiki.example.com/wiki")
        .arg("--email")
        .arg("dev@example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set URL to: https://wiki.example.com/wiki"))
        .stdout(predicate::str::contains("Completed: Configuration saved"));

    // The file lands in the directory given on the command line
    let saved = std::fs::read_to_string(tmp.path().join("config.toml")).unwrap();
    assert!(saved.contains("url = \"https://wiki.example.com/wiki\""));
    assert!(saved.contains("email = \"dev@example.com\""));

    clean_cmd()
        .arg("--config-dir")
        .arg(tmp.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wiki URL: https://wiki.example.com/wiki"))
        .stdout(predicate::str::contains("Email: dev@example.com"))
        .stdout(predicate::str::contains("API Token: ❌ Not set"))
        .stdout(predicate::str::contains("Ready to search: no"));
}

#[test]
fn test_config_show_reports_defaults() {
    let tmp = tempfile::tempdir().unwrap();

    clean_cmd()
        .arg("--config-dir")
        .arg(tmp.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wiki URL: (not set, using default https://your-company.atlassian.net/wiki)",
        ))
        .stdout(predicate::str::contains("Email: ❌ Not set"))
        .stdout(predicate::str::contains("Ready to search: no"));
}

#[test]
fn test_config_show_ready_when_fully_configured() {
    let tmp = tempfile::tempdir().unwrap();

    clean_cmd()
        .env("CFL_URL", "https://wiki.example.com/wiki")
        .env("CFL_EMAIL", "dev@example.com")
        .env("CFL_API_TOKEN", "test-token")
        .arg("--config-dir")
        .arg(tmp.path())
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("API Token: ✅ Set (CFL_API_TOKEN)"))
        .stdout(predicate::str::contains("Ready to search: yes"));
}

#[test]
fn test_config_set_requires_a_field() {
    let tmp = tempfile::tempdir().unwrap();

    clean_cmd()
        .arg("--config-dir")
        .arg(tmp.path())
        .arg("config")
        .arg("set")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No configuration values provided"));
}

#[test]
fn test_config_set_rejects_invalid_url() {
    let tmp = tempfile::tempdir().unwrap();

    clean_cmd()
        .arg("--config-dir")
        .arg(tmp.path())
        .arg("config")
        .arg("set")
        .arg("--url")
        .arg("wiki.example.com")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must start with http:// or https://"));

    // Nothing was written
    assert!(!tmp.path().join("config.toml").exists());
}

#[test]
fn test_config_validate_requires_token() {
    let tmp = tempfile::tempdir().unwrap();

    clean_cmd()
        .arg("--config-dir")
        .arg(tmp.path())
        .arg("config")
        .arg("validate")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "CFL_API_TOKEN environment variable is not set",
        ))
        .stderr(predicate::str::contains("Missing configuration: API token"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_validate_reports_signed_in_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/user/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "displayName": "Dev User",
            "username": "dev"
        })))
        .expect(1)
        .mount(&server)
        .await;

    clean_cmd()
        .env("CFL_URL", server.uri())
        .env("CFL_EMAIL", "dev@example.test")
        .env("CFL_API_TOKEN", "test-token")
        .arg("config")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("API token validated successfully"))
        .stdout(predicate::str::contains(format!(
            "Authenticated against: {}",
            server.uri()
        )))
        .stdout(predicate::str::contains("Signed in as: Dev User"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_validate_rejected_token_exits_nonzero() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/api/user/current"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Basic auth failed"))
        .mount(&server)
        .await;

    clean_cmd()
        .env("CFL_URL", server.uri())
        .env("CFL_EMAIL", "dev@example.test")
        .env("CFL_API_TOKEN", "bad-token")
        .arg("config")
        .arg("validate")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("API token validation failed"))
        .stdout(predicate::str::contains("Possible causes:"))
        .stderr(predicate::str::contains("Authentication failed (HTTP 401)"));
}
