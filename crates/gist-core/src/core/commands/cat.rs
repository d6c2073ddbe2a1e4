use anyhow::Result;
use serde_json::json;

use super::resolve_access;
use crate::context::CommandContext;
use crate::outcome::ExecutionOutcome;

/// Request for `gist cat`.
#[derive(Debug, Clone)]
pub struct CatRequest {
    /// Gist id as shown by the listing.
    pub id: String,
}

/// Prints every file of one gist in name order, each content chunk followed
/// by a newline.
pub fn cat_gist(ctx: &CommandContext, request: &CatRequest) -> Result<ExecutionOutcome> {
    let access = resolve_access(ctx)?;
    let gist = ctx.effects().gists().fetch_gist(&access, &request.id)?;

    let body = gist
        .files
        .values()
        .map(|file| file.content.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(ExecutionOutcome::success(
        body,
        json!({
            "passthrough": true,
            "id": gist.id,
            "files": gist.file_names(),
        }),
    ))
}
