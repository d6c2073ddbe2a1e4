//! Command entry points invoked by the CLI dispatcher.

pub(crate) mod cat;
pub(crate) mod create;
pub(crate) mod dump;
pub(crate) mod grep;
pub(crate) mod list;

use anyhow::Result;
use gist_domain::Gist;
use serde_json::{json, Value};

use crate::client::ApiAccess;
use crate::context::CommandContext;
use crate::outcome::GistUserError;

/// Resolves the endpoint and token a command will talk to, preferring the
/// `GIST_TOKEN` override and falling back to `git config gist.token`.
///
/// The token itself is never logged.
pub(crate) fn resolve_access(ctx: &CommandContext) -> Result<ApiAccess> {
    let token = match ctx.token_override() {
        Some(token) => {
            tracing::debug!("using token from GIST_TOKEN");
            token.to_string()
        }
        None => match ctx.effects().token().git_token()? {
            Some(token) => {
                tracing::debug!("using token from git config");
                token
            }
            None => {
                return Err(GistUserError::new(
                    "no gist token configured",
                    json!({
                        "reason": "missing_token",
                        "recommendation": {
                            "command": "git config --global gist.token <TOKEN>",
                            "hint": "Or export GIST_TOKEN for this invocation only.",
                        },
                    }),
                )
                .into())
            }
        },
    };
    Ok(ApiAccess::new(ctx.api_base(), token))
}

/// Header line shared by the listing and the search output:
/// `<created> <id> <description>`.
pub(crate) fn gist_header_line(gist: &Gist) -> String {
    format!(
        "{} {} {}",
        gist.created_date(),
        gist.id,
        gist.description_text()
    )
}

pub(crate) fn gist_summary_value(gist: &Gist) -> Value {
    json!({
        "id": gist.id,
        "created": gist.created_date(),
        "description": gist.description_text(),
        "files": gist.file_names(),
    })
}
