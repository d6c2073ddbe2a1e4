use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;

use super::resolve_access;
use crate::context::CommandContext;
use crate::fanout::fetch_page_gists;
use crate::outcome::ExecutionOutcome;

/// Request for `gist dump-files`.
#[derive(Debug, Clone, Default)]
pub struct DumpRequest {
    /// Overrides the configured dump directory.
    pub dir: Option<PathBuf>,
}

/// Downloads every gist into `<root>/<id>/<filename>`.
///
/// Pages are walked in order; within a page one worker per gist fetches the
/// contents and writes them out, and the page must finish before the next
/// one is requested. Directories are created with mode `0700` on Unix.
pub fn dump_gists(ctx: &CommandContext, request: &DumpRequest) -> Result<ExecutionOutcome> {
    let access = resolve_access(ctx)?;
    let root = request
        .dir
        .clone()
        .unwrap_or_else(|| ctx.dump_root().to_path_buf());

    let effects = ctx.shared_effects();
    let service = ctx.effects().gists();

    let mut gist_count = 0usize;
    let mut file_count = 0usize;
    let mut page = None;
    loop {
        let fetched = service.list_page(&access, page)?;
        let next_page = fetched.next_page;

        let writer = ctx.shared_effects();
        let target = root.clone();
        let written = fetch_page_gists(&effects, &access, fetched.gists, move |gist| {
            let dir = target.join(&gist.id);
            writer.fs().create_dir_all(&dir)?;
            let mut files = 0usize;
            for (name, file) in &gist.files {
                let content = file.content.as_deref().unwrap_or_default();
                writer.fs().write(&dir.join(name), content.as_bytes())?;
                files += 1;
            }
            tracing::debug!(id = %gist.id, files, "dumped gist");
            Ok(files)
        })?;

        gist_count += written.len();
        file_count += written.iter().sum::<usize>();

        match next_page {
            Some(next) => page = Some(next),
            None => break,
        }
    }

    Ok(ExecutionOutcome::success(
        format!(
            "dumped {file_count} files from {gist_count} gists into {}",
            root.display()
        ),
        json!({
            "root": root.display().to_string(),
            "gists": gist_count,
            "files": file_count,
        }),
    ))
}
