use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use anyhow::Result;
use gist_domain::{Gist, GistSummary};

use super::client::ApiAccess;
use super::effects::SharedEffects;

/// Fans out over one page of summaries: each worker thread fetches its gist
/// in full and runs `job` on it, and the call returns only after every worker
/// of the page has reported back.
///
/// The first error, from a fetch or from `job`, aborts the page; workers
/// still in flight finish against a closed channel.
pub(crate) fn fetch_page_gists<T, F>(
    effects: &SharedEffects,
    access: &ApiAccess,
    summaries: Vec<GistSummary>,
    job: F,
) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: Fn(Gist) -> Result<T> + Clone + Send + 'static,
{
    if summaries.is_empty() {
        return Ok(Vec::new());
    }

    let expected = summaries.len();
    tracing::debug!(count = expected, "fanning out gist fetches");

    let (result_tx, result_rx) = mpsc::channel();
    for summary in summaries {
        let result_tx = result_tx.clone();
        let effects = Arc::clone(effects);
        let access = access.clone();
        let job = job.clone();
        thread::spawn(move || {
            let outcome = effects
                .gists()
                .fetch_gist(&access, &summary.id)
                .and_then(job);
            let _ = result_tx.send(outcome);
        });
    }
    drop(result_tx);

    let mut results = Vec::with_capacity(expected);
    for result in result_rx {
        match result {
            Ok(value) => results.push(value),
            Err(err) => return Err(err),
        }
    }
    Ok(results)
}
