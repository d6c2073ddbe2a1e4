use httptest::matchers::{all_of, contains, matches, request};
use httptest::Expectation;

mod common;

use common::{full_json, gist_cmd, json_response, start_server, stderr_text, stdout_text};

const HELLO_DIGEST: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";

#[test]
fn piped_input_is_named_by_its_digest() {
    let Some(server) = start_server() else { return };
    let created = full_json("new1", "", "2022-03-04T05:06:07Z", &[]);
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/gists"),
            request::headers(contains(("authorization", "Bearer sekrit"))),
            request::body(matches(HELLO_DIGEST)),
            request::body(matches("\"public\":true")),
        ])
        .respond_with(json_response(201, &created)),
    );

    let assert = gist_cmd(&server)
        .arg("create-public")
        .write_stdin("hello")
        .assert()
        .success();
    assert_eq!(
        stdout_text(&assert),
        "✔ gist create-public: Gist: https://gists.example/new1\n"
    );
}

#[test]
fn a_named_file_uploads_as_a_secret_gist() {
    let Some(server) = start_server() else { return };
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "remember this").expect("write");

    let created = full_json("new2", "demo", "2022-03-04T05:06:07Z", &[]);
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/gists"),
            request::body(matches("\"notes.txt\"")),
            request::body(matches("\"public\":false")),
            request::body(matches("\"description\":\"demo\"")),
        ])
        .respond_with(json_response(201, &created)),
    );

    let path_arg = path.display().to_string();
    let assert = gist_cmd(&server)
        .args(["create-private", &path_arg, "--description", "demo"])
        .assert()
        .success();
    let stdout = stdout_text(&assert);
    assert!(
        stdout.contains("Gist: https://gists.example/new2"),
        "url line missing: {stdout}"
    );
}

#[test]
fn an_unreadable_path_never_reaches_the_service() {
    let Some(server) = start_server() else { return };

    let assert = gist_cmd(&server)
        .args(["create-public", "/definitely/not/here.txt"])
        .assert()
        .code(1);
    let stderr = stderr_text(&assert);
    assert!(
        stderr.contains("GIST201  cannot read /definitely/not/here.txt"),
        "error header missing: {stderr}"
    );
    assert!(
        stderr.contains("The file to upload could not be read."),
        "reason bullet missing: {stderr}"
    );
}
