use anyhow::Result;
use serde_json::json;

use super::{gist_header_line, gist_summary_value, resolve_access};
use crate::context::CommandContext;
use crate::outcome::ExecutionOutcome;

/// Request for `gist list`. The listing takes no options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRequest;

/// Walks every page of the account's gists and renders one two-line block
/// per gist: the header line, then the indented file names.
///
/// Pages are fetched strictly one after another; the next page is requested
/// only after the current one has been rendered, and the walk stops when the
/// service stops reporting a next page.
pub fn list_gists(ctx: &CommandContext, _request: ListRequest) -> Result<ExecutionOutcome> {
    let access = resolve_access(ctx)?;
    let service = ctx.effects().gists();

    let mut lines = Vec::new();
    let mut summaries = Vec::new();
    let mut page = None;
    loop {
        let fetched = service.list_page(&access, page)?;
        for gist in &fetched.gists {
            lines.push(gist_header_line(gist));
            lines.push(format!("   {}", gist.file_names().join(",")));
            summaries.push(gist_summary_value(gist));
        }
        match fetched.next_page {
            Some(next) => page = Some(next),
            None => break,
        }
    }

    Ok(ExecutionOutcome::success(
        lines.join("\n"),
        json!({
            "passthrough": true,
            "count": summaries.len(),
            "gists": summaries,
        }),
    ))
}
