#![deny(clippy::all, warnings)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod model;
pub mod naming;
pub mod paging;

pub use model::{format_created, DraftFile, Gist, GistDraft, GistFile, GistSummary};
pub use naming::{draft_filename, stdin_filename, STDIN_SENTINEL};
pub use paging::next_page_from_link;
