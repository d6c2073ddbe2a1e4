#![allow(dead_code)]

use std::panic;

use assert_cmd::assert::Assert;
use assert_cmd::cargo::cargo_bin_cmd;
use httptest::responders::{status_code, Responder};
use httptest::Server;
use serde_json::{json, Value};

/// Starts the in-process HTTP stub, skipping the test when the environment
/// forbids binding a local socket.
pub fn start_server() -> Option<Server> {
    match panic::catch_unwind(Server::run) {
        Ok(server) => Some(server),
        Err(_) => {
            eprintln!("skipping end-to-end test (test server unavailable)");
            None
        }
    }
}

/// A `gist` invocation pointed at the stub service with a known token.
pub fn gist_cmd(server: &Server) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gist");
    cmd.env("GIST_API_URL", server.url_str("/"))
        .env("GIST_TOKEN", "sekrit")
        .env_remove("GIST_DUMP_DIR");
    cmd
}

pub fn parse_json(assert: &Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("valid json")
}

pub fn stdout_text(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

pub fn stderr_text(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).expect("utf8 stderr")
}

/// JSON body with the content type the real service sets.
pub fn json_response(status: u16, body: &Value) -> impl Responder {
    status_code(status)
        .append_header("Content-Type", "application/json")
        .body(body.to_string())
}

/// A gist at listing depth: named files without contents.
pub fn summary_json(id: &str, description: &str, created_at: &str, files: &[&str]) -> Value {
    let entries: serde_json::Map<String, Value> = files
        .iter()
        .map(|name| ((*name).to_string(), json!({ "size": 1 })))
        .collect();
    json!({
        "id": id,
        "description": description,
        "public": true,
        "created_at": created_at,
        "html_url": format!("https://gists.example/{id}"),
        "files": entries,
    })
}

/// A gist at full depth: file contents included.
pub fn full_json(id: &str, description: &str, created_at: &str, files: &[(&str, &str)]) -> Value {
    let entries: serde_json::Map<String, Value> = files
        .iter()
        .map(|(name, content)| {
            (
                (*name).to_string(),
                json!({ "size": content.len(), "content": content }),
            )
        })
        .collect();
    json!({
        "id": id,
        "description": description,
        "public": true,
        "created_at": created_at,
        "html_url": format!("https://gists.example/{id}"),
        "files": entries,
    })
}

/// `Link` header advertising the next listing page.
pub fn next_page_link(server: &Server, page: u32) -> String {
    format!(
        "<{}>; rel=\"next\"",
        server.url_str(&format!("/gists?page={page}"))
    )
}
