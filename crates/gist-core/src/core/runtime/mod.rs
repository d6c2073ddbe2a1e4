//! Runtime plumbing: the HTTP client, effect handles, the per-page fan-out
//! helper, and subprocess capture.

pub(crate) mod client;
pub(crate) mod effects;
pub(crate) mod fanout;
pub(crate) mod process;

mod report;

pub use report::{format_status_message, to_json_response, CommandGroup};

pub(crate) const GIST_VERSION: &str = env!("CARGO_PKG_VERSION");
