use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use gist_domain::{draft_filename, GistDraft, STDIN_SENTINEL};
use serde_json::json;

use super::resolve_access;
use crate::context::CommandContext;
use crate::outcome::{ExecutionOutcome, GistUserError};

/// Request shared by `gist create-public` and `gist create-private`.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Path to upload, or `-` for standard input.
    pub source: String,
    pub public: bool,
    pub description: Option<String>,
}

/// Uploads one file as a new gist.
///
/// Standard input is named by the SHA-256 digest of the bytes actually read;
/// a named file keeps its base name. Success reports the new gist's URL.
pub fn create_gist(ctx: &CommandContext, request: &CreateRequest) -> Result<ExecutionOutcome> {
    let access = resolve_access(ctx)?;

    let (filename, content) = if request.source == STDIN_SENTINEL {
        let mut raw = Vec::new();
        std::io::stdin()
            .read_to_end(&mut raw)
            .context("reading standard input")?;
        (
            draft_filename(STDIN_SENTINEL, &raw),
            String::from_utf8_lossy(&raw).into_owned(),
        )
    } else {
        let path = Path::new(&request.source);
        let content = match ctx.effects().fs().read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                return Err(GistUserError::new(
                    format!("cannot read {}", request.source),
                    json!({
                        "reason": "unreadable_file",
                        "path": request.source,
                        "error": format!("{err:#}"),
                    }),
                )
                .into())
            }
        };
        (draft_filename(&request.source, content.as_bytes()), content)
    };

    let draft = GistDraft::single_file(
        filename.clone(),
        content,
        request.public,
        request.description.clone(),
    );
    let gist = ctx.effects().gists().create_gist(&access, &draft)?;
    tracing::debug!(id = %gist.id, "created gist");

    Ok(ExecutionOutcome::success(
        format!("Gist: {}", gist.html_url),
        json!({
            "id": gist.id,
            "url": gist.html_url,
            "file": filename,
            "public": request.public,
        }),
    ))
}
