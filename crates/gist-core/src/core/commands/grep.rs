use std::io::Write;
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use gist_domain::Gist;
use serde_json::json;

use super::{gist_header_line, gist_summary_value, resolve_access};
use crate::context::CommandContext;
use crate::fanout::fetch_page_gists;
use crate::outcome::ExecutionOutcome;

/// Request for `gist grep`.
#[derive(Debug, Clone, Default)]
pub struct GrepRequest {
    /// Pattern words; they are joined with single spaces before matching.
    pub pattern: Vec<String>,
}

/// Searches every gist's file contents for a case-insensitive substring.
///
/// Full gists are fetched page by page with the usual fan-out. Each worker
/// reports its gist at most once, as soon as the first file containing the
/// pattern is seen, by pushing it onto an unbounded channel drained by a
/// single printer thread. Human output therefore arrives in completion
/// order, while the search is still running; under `--json` nothing is
/// streamed and the matches land in the envelope details instead.
pub fn grep_gists(ctx: &CommandContext, request: &GrepRequest) -> Result<ExecutionOutcome> {
    let access = resolve_access(ctx)?;
    let pattern = request.pattern.join(" ");
    let needle = pattern.to_uppercase();

    let live = !ctx.global.json && !ctx.global.quiet;
    let (match_tx, match_rx) = mpsc::channel::<Gist>();
    let printer = thread::spawn(move || {
        let mut stdout = std::io::stdout();
        let mut matches = Vec::new();
        for gist in match_rx {
            if live {
                let _ = write!(stdout, "{}", render_match(&gist));
                let _ = stdout.flush();
            }
            matches.push(gist);
        }
        matches
    });

    let effects = ctx.shared_effects();
    let service = ctx.effects().gists();

    // Early returns below leave the printer behind; dropping `match_tx` on
    // the way out closes its channel, and the process is about to exit.
    let mut scanned = 0usize;
    let mut page = None;
    loop {
        let fetched = service.list_page(&access, page)?;
        let next_page = fetched.next_page;
        scanned += fetched.gists.len();

        let tx = match_tx.clone();
        let needle = needle.clone();
        fetch_page_gists(&effects, &access, fetched.gists, move |gist| {
            if first_matching_file(&gist, &needle).is_some() {
                tracing::debug!(id = %gist.id, "gist matches");
                let _ = tx.send(gist);
            }
            Ok(())
        })?;

        match next_page {
            Some(next) => page = Some(next),
            None => break,
        }
    }

    // All pages done: close the channel and wait for the printer to drain
    // before reporting the count.
    drop(match_tx);
    let matches = printer
        .join()
        .map_err(|_| anyhow::anyhow!("printer thread panicked"))?;

    let summaries: Vec<_> = matches.iter().map(gist_summary_value).collect();
    Ok(ExecutionOutcome::success(
        format!("{} of {scanned} gists match", summaries.len()),
        json!({
            "pattern": pattern,
            "count": summaries.len(),
            "matches": summaries,
        }),
    ))
}

/// Name of the first file, in name order, whose content contains `needle`.
/// Both sides of the containment test are uppercased.
fn first_matching_file<'a>(gist: &'a Gist, needle: &str) -> Option<&'a str> {
    gist.files
        .iter()
        .find(|(_, file)| {
            file.content
                .as_deref()
                .is_some_and(|content| content.to_uppercase().contains(needle))
        })
        .map(|(name, _)| name.as_str())
}

fn render_match(gist: &Gist) -> String {
    let mut text = String::new();
    text.push_str(&gist_header_line(gist));
    text.push('\n');
    for (name, file) in &gist.files {
        text.push_str(&format!("   {name}\n"));
        text.push_str(file.content.as_deref().unwrap_or_default());
        text.push_str("\n\n");
    }
    text
}
