use assert_cmd::cargo::cargo_bin_cmd;
use httptest::matchers::request;
use httptest::{responders::status_code, Expectation};

mod common;

use common::{gist_cmd, json_response, parse_json, start_server, stderr_text, summary_json};

fn one_gist_listing(server: &httptest::Server) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists")).respond_with(json_response(
            200,
            &serde_json::json!([summary_json("aa11", "first", "2020-01-02T03:04:05Z", &["a.txt"])]),
        )),
    );
}

#[test]
fn json_wraps_the_listing_in_an_envelope() {
    let Some(server) = start_server() else { return };
    one_gist_listing(&server);

    let assert = gist_cmd(&server).args(["--json", "list"]).assert().success();
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "ok");
    let message = payload["message"].as_str().expect("message string");
    assert!(
        message.starts_with("gist list: "),
        "command prefix missing: {message}"
    );
    assert_eq!(payload["details"]["count"], 1);
    assert_eq!(payload["details"]["gists"][0]["id"], "aa11");
    assert_eq!(payload["details"]["gists"][0]["created"], "2020-01-02");
}

#[test]
fn quiet_suppresses_successful_output() {
    let Some(server) = start_server() else { return };
    one_gist_listing(&server);

    let assert = gist_cmd(&server).args(["-q", "list"]).assert().success();
    assert!(
        assert.get_output().stdout.is_empty(),
        "quiet runs must print nothing"
    );
}

#[test]
fn rejected_credentials_exit_with_the_user_error_code() {
    let Some(server) = start_server() else { return };
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists"))
            .respond_with(status_code(401)),
    );

    let assert = gist_cmd(&server).arg("list").assert().code(1);
    let stderr = stderr_text(&assert);
    assert!(
        stderr.contains("GIST101  the gist service rejected the provided credentials"),
        "error header missing: {stderr}"
    );
    assert!(
        stderr.contains("Status: HTTP 401"),
        "status bullet missing: {stderr}"
    );
}

#[test]
fn service_failures_exit_with_the_internal_code() {
    let Some(server) = start_server() else { return };
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists"))
            .respond_with(status_code(500)),
    );

    let assert = gist_cmd(&server).arg("list").assert().code(2);
    let stderr = stderr_text(&assert);
    assert!(stderr.contains("GIST101"), "error code missing: {stderr}");
    assert!(stderr.contains("Why:"), "reason block missing: {stderr}");
}

#[test]
fn user_errors_keep_their_reason_under_json() {
    let Some(server) = start_server() else { return };
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists/nope"))
            .respond_with(status_code(404)),
    );

    let assert = gist_cmd(&server)
        .args(["--json", "cat", "nope"])
        .assert()
        .code(1);
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "user-error");
    assert_eq!(payload["details"]["reason"], "unknown_gist");
    let message = payload["message"].as_str().expect("message string");
    assert!(
        message.contains("no gist found with id nope"),
        "message missing: {message}"
    );
}

#[test]
fn an_invalid_api_url_fails_before_any_request() {
    let assert = cargo_bin_cmd!("gist")
        .env("GIST_API_URL", "not a url")
        .env("GIST_TOKEN", "t")
        .arg("list")
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr");
    assert!(
        stderr.contains("GIST_API_URL"),
        "variable name missing: {stderr}"
    );
}
