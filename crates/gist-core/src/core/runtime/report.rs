use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::context::CommandInfo;
use crate::outcome::{CommandStatus, ExecutionOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandGroup {
    List,
    Cat,
    DumpFiles,
    Grep,
    CreatePublic,
    CreatePrivate,
}

impl fmt::Display for CommandGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandGroup::List => "list",
            CommandGroup::Cat => "cat",
            CommandGroup::DumpFiles => "dump-files",
            CommandGroup::Grep => "grep",
            CommandGroup::CreatePublic => "create-public",
            CommandGroup::CreatePrivate => "create-private",
        };
        f.write_str(name)
    }
}

/// Renders the `{status, message, details}` envelope emitted under `--json`.
#[must_use]
pub fn to_json_response(info: CommandInfo, outcome: &ExecutionOutcome, _code: i32) -> Value {
    let status = match outcome.status {
        CommandStatus::Ok => "ok",
        CommandStatus::UserError => "user-error",
        CommandStatus::Failure => "error",
    };

    let details = match &outcome.details {
        Value::Object(map) => Value::Object(map.clone()),
        Value::Null => json!({}),
        other => json!({ "value": other }),
    };

    json!({
        "status": status,
        "message": format_status_message(info, &outcome.message),
        "details": details,
    })
}

/// Prefixes a status message with the invoked command, once.
#[must_use]
pub fn format_status_message(info: CommandInfo, message: &str) -> String {
    let group_name = info.group.to_string();
    let prefix = if group_name == info.name {
        format!("gist {}", info.name)
    } else {
        format!("gist {} {}", group_name, info.name)
    };

    if message.is_empty() {
        prefix
    } else if message.starts_with(&prefix) {
        message.to_string()
    } else {
        format!("{prefix}: {message}")
    }
}
