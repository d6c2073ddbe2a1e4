use httptest::matchers::request;
use httptest::Expectation;

mod common;

use common::{full_json, gist_cmd, json_response, parse_json, start_server, stdout_text, summary_json};

#[test]
fn a_matching_gist_is_printed_once_with_all_its_files() {
    let Some(server) = start_server() else { return };
    let listing = serde_json::json!([
        summary_json("aa11", "first", "2020-01-02T03:04:05Z", &["a.txt", "b.txt"]),
        summary_json("bb22", "", "2021-06-07T08:09:10Z", &["c.txt"]),
    ]);
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists"))
            .respond_with(json_response(200, &listing)),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists/aa11")).respond_with(
            json_response(
                200,
                &full_json(
                    "aa11",
                    "first",
                    "2020-01-02T03:04:05Z",
                    &[("a.txt", "The NEEDLE is here"), ("b.txt", "also needle here")],
                ),
            ),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists/bb22")).respond_with(
            json_response(
                200,
                &full_json(
                    "bb22",
                    "",
                    "2021-06-07T08:09:10Z",
                    &[("c.txt", "nothing to see")],
                ),
            ),
        ),
    );

    let assert = gist_cmd(&server).args(["grep", "needle"]).assert().success();
    let stdout = stdout_text(&assert);
    assert_eq!(
        stdout.matches("aa11").count(),
        1,
        "a gist with two matching files must print once: {stdout}"
    );
    assert!(
        stdout.contains("   a.txt\nThe NEEDLE is here\n"),
        "first file missing: {stdout}"
    );
    assert!(
        stdout.contains("   b.txt\nalso needle here\n"),
        "second file missing: {stdout}"
    );
    assert!(
        !stdout.contains("bb22"),
        "non-matching gist leaked into the output: {stdout}"
    );
    assert!(
        stdout.ends_with("1 of 2 gists match\n"),
        "count must print after the matches: {stdout}"
    );
}

#[test]
fn pattern_words_join_and_match_any_case() {
    let Some(server) = start_server() else { return };
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists")).respond_with(json_response(
            200,
            &serde_json::json!([summary_json("aa11", "", "2020-01-02T03:04:05Z", &["a.txt"])]),
        )),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/gists/aa11")).respond_with(
            json_response(
                200,
                &full_json(
                    "aa11",
                    "",
                    "2020-01-02T03:04:05Z",
                    &[("a.txt", "SHOUTED two WORDS here")],
                ),
            ),
        ),
    );

    let assert = gist_cmd(&server)
        .args(["--json", "grep", "two", "words"])
        .assert()
        .success();
    let payload = parse_json(&assert);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["message"], "gist grep: 1 of 1 gists match");
    assert_eq!(payload["details"]["pattern"], "two words");
    assert_eq!(payload["details"]["count"], 1);
    assert_eq!(payload["details"]["matches"][0]["id"], "aa11");
}
