use std::path::Path;

use sha2::{Digest, Sha256};

/// Positional argument meaning "read the file from standard input".
pub const STDIN_SENTINEL: &str = "-";

/// Filename for a gist created from piped input: the hex digest of the
/// bytes that were actually read.
#[must_use]
pub fn stdin_filename(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Filename recorded in a draft: the base name of a real path, or the
/// content digest for piped input.
#[must_use]
pub fn draft_filename(source: &str, content: &[u8]) -> String {
    if source == STDIN_SENTINEL {
        return stdin_filename(content);
    }
    Path::new(source)
        .file_name()
        .map_or_else(|| source.to_string(), |name| name.to_string_lossy().into_owned())
}
