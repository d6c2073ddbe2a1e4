use gist_core::{diag_commands, CommandGroup, CommandInfo};
use serde_json::Value;

use super::details::hint_from_details;

pub(super) fn error_code(info: CommandInfo, details: &Value) -> String {
    if let Some(code) = details
        .as_object()
        .and_then(|map| map.get("code"))
        .and_then(Value::as_str)
        .filter(|code| code.starts_with("GIST"))
    {
        return code.to_string();
    }
    default_error_code(info).to_string()
}

fn default_error_code(info: CommandInfo) -> &'static str {
    match info.group {
        CommandGroup::List => diag_commands::LIST,
        CommandGroup::Cat => diag_commands::CAT,
        CommandGroup::DumpFiles => diag_commands::DUMP_FILES,
        CommandGroup::Grep => diag_commands::GREP,
        CommandGroup::CreatePublic => diag_commands::CREATE_PUBLIC,
        CommandGroup::CreatePrivate => diag_commands::CREATE_PRIVATE,
    }
}

pub(super) fn collect_why_bullets(details: &Value, fallback: &str) -> Vec<String> {
    let mut bullets = Vec::new();
    if let Some(reason) = details.get("reason").and_then(Value::as_str) {
        push_unique(
            &mut bullets,
            reason_display(reason).unwrap_or(reason).to_string(),
        );
    }
    if let Some(status) = details.get("status").and_then(Value::as_u64) {
        push_unique(&mut bullets, format!("Status: HTTP {status}"));
    }
    if let Some(error) = details.get("error").and_then(Value::as_str) {
        push_unique(&mut bullets, error.to_string());
    }
    if let Some(issues) = details.get("issues").and_then(Value::as_array) {
        for message in issues.iter().filter_map(Value::as_str) {
            push_unique(&mut bullets, message.to_string());
        }
    }
    if bullets.is_empty() {
        bullets.push(fallback.to_string());
    }
    bullets
}

pub(super) fn collect_fix_bullets(details: &Value) -> Vec<String> {
    let mut fixes = Vec::new();
    if let Some(hint) = hint_from_details(details) {
        push_unique(&mut fixes, hint.to_string());
    }
    if let Some(rec) = details
        .as_object()
        .and_then(|map| map.get("recommendation"))
        .and_then(Value::as_object)
    {
        if let Some(command) = rec.get("command").and_then(Value::as_str) {
            push_unique(&mut fixes, format!("Run `{command}`"));
        }
        if let Some(hint) = rec.get("hint").and_then(Value::as_str) {
            push_unique(&mut fixes, hint.to_string());
        }
    }
    if fixes.is_empty() {
        fixes.push("Re-run with --help for usage or inspect the output above.".to_string());
    }
    fixes
}

fn push_unique(vec: &mut Vec<String>, text: impl Into<String>) {
    let entry = text.into();
    if entry.trim().is_empty() {
        return;
    }
    if !vec.iter().any(|existing| existing == &entry) {
        vec.push(entry);
    }
}

fn reason_display(code: &str) -> Option<&'static str> {
    match code {
        "missing_token" => Some("No token in GIST_TOKEN or the git config key gist.token."),
        "auth_rejected" => Some("The gist service refused the token sent with this request."),
        "unknown_gist" => Some("No gist with that id exists on this account."),
        "unreadable_file" => Some("The file to upload could not be read."),
        "internal_error" => Some("An unexpected error stopped the command."),
        _ => None,
    }
}
