use assert_cmd::cargo::cargo_bin_cmd;
use hermes_test_utils::ConfigFileGuard;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VALID_BODY: &str = r#"{"summary":"Bug","description":{"type":"doc"}}"#;

fn config_for(base_url: &str) -> ConfigFileGuard {
  ConfigFileGuard::new(&format!(
    r#"
[client]
base_url = "{base_url}"
timeout_secs = 5

[notifier]
id = "ops-jira"

[notifier.opts]
project_key = "OPS"
issue_type = "Bug"
cloud_id = "site1"

[notifier.secret]
token = "file-token"
"#
  ))
}

fn hermes(config: &ConfigFileGuard) -> assert_cmd::Command {
  let mut cmd = cargo_bin_cmd!("hermes");
  cmd
    .env_remove("HERMES_JIRA_TOKEN")
    .env_remove("HERMES_JIRA_BASE_URL")
    .arg("--colors")
    .arg("never")
    .arg("--config")
    .arg(config.config_path());
  cmd
}

#[test]
fn help_output_shows_usage() {
  cargo_bin_cmd!("hermes")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("send"))
    .stdout(predicate::str::contains("discover"))
    .stdout(predicate::str::contains("--config"));
}

#[tokio::test(flavor = "multi_thread")]
async fn send_creates_issue_from_body_file() {
  let mock_server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/ex/jira/site1/rest/api/3/issue"))
    .and(bearer_token("file-token"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "10000", "key": "OPS-1" })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let config = config_for(&mock_server.uri());
  let body = config.write_file("body.json", VALID_BODY);

  let assert = hermes(&config).arg("send").arg("--body").arg(&body).assert().success();

  let message: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
  assert_eq!(message["ok"], true);
  assert_eq!(message["payload"]["summary"], "Bug");
  assert_eq!(message["provider_response"]["key"], "OPS-1");
  assert!(message["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test(flavor = "multi_thread")]
async fn send_reads_stdin_and_honours_token_override() {
  let mock_server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(bearer_token("env-token"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "10001", "key": "OPS-2" })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let config = config_for(&mock_server.uri());

  hermes(&config)
    .env("HERMES_JIRA_TOKEN", "env-token")
    .arg("send")
    .write_stdin(VALID_BODY)
    .assert()
    .success()
    .stdout(predicate::str::contains("OPS-2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn send_with_missing_summary_never_calls_jira() {
  let mock_server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(201))
    .expect(0)
    .mount(&mock_server)
    .await;

  let config = config_for(&mock_server.uri());

  hermes(&config)
    .arg("send")
    .write_stdin(r#"{"description":{"type":"doc"}}"#)
    .assert()
    .failure()
    .stderr(predicate::str::contains("validation error (400)"))
    .stderr(predicate::str::contains("summary"));
}

#[tokio::test(flavor = "multi_thread")]
async fn send_reports_remote_error() {
  let mock_server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(401))
    .mount(&mock_server)
    .await;

  let config = config_for(&mock_server.uri());

  hermes(&config)
    .arg("send")
    .write_stdin(VALID_BODY)
    .assert()
    .failure()
    .stderr(predicate::str::contains("remote error (401)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn discover_without_sites_prints_empty_structure() {
  let mock_server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/oauth/token/accessible-resources"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .expect(1)
    .mount(&mock_server)
    .await;

  let config = config_for(&mock_server.uri());

  let assert = hermes(&config).arg("discover").assert().success();

  let values: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
  assert_eq!(values, json!({ "cloud_id": [], "_rel": { "cloud_id": {} } }));
}

#[test]
fn config_show_redacts_token() {
  let config = config_for("https://api.atlassian.com");

  hermes(&config)
    .args(["config", "show"])
    .assert()
    .success()
    .stdout(predicate::str::contains("project_key = \"OPS\""))
    .stdout(predicate::str::contains("<redacted>"))
    .stdout(predicate::str::contains("file-token").not());
}

#[test]
fn config_path_prints_selected_file() {
  let config = config_for("https://api.atlassian.com");

  hermes(&config)
    .args(["config", "path"])
    .assert()
    .success()
    .stdout(predicate::str::contains("config.toml"))
    .stderr(predicate::str::contains("does not exist").not());
}

#[test]
fn config_path_warns_when_file_is_missing() {
  let config = ConfigFileGuard::empty();

  hermes(&config)
    .args(["config", "path"])
    .assert()
    .success()
    .stdout(predicate::str::contains("config.toml"))
    .stderr(predicate::str::contains("does not exist yet"));
}

#[tokio::test(flavor = "multi_thread")]
async fn send_with_array_body_never_calls_jira() {
  let mock_server = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(201))
    .expect(0)
    .mount(&mock_server)
    .await;

  let config = config_for(&mock_server.uri());

  hermes(&config)
    .arg("send")
    .write_stdin(r#"["Bug", {"type":"doc"}]"#)
    .assert()
    .failure()
    .stderr(predicate::str::contains("parse error (400)"));
}

#[test]
fn invalid_config_file_is_reported() {
  let config = ConfigFileGuard::new("[client]\nbase_url = \"not a url\"\n");

  hermes(&config)
    .arg("discover")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid client base_url"));
}
