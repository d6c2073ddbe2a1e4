use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::OffsetDateTime;

/// One hosted gist. The list endpoint returns the same shape at summary
/// depth (file entries without `content`); the single-gist endpoint fills
/// the contents in.
#[derive(Clone, Debug, Deserialize)]
pub struct Gist {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub files: BTreeMap<String, GistFile>,
}

/// A summary is a gist at list depth; the alias marks intent at call sites.
pub type GistSummary = Gist;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Gist {
    /// Creation date as `YYYY-MM-DD`.
    #[must_use]
    pub fn created_date(&self) -> String {
        format_created(self.created_at)
    }

    /// Description with `None` flattened to the empty string.
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// File names in sorted order.
    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }
}

#[must_use]
pub fn format_created(created_at: OffsetDateTime) -> String {
    created_at
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| created_at.date().to_string())
}

/// Payload for the create endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct GistDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
    pub files: BTreeMap<String, DraftFile>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DraftFile {
    pub content: String,
}

impl GistDraft {
    /// Draft holding a single file, which is all the CLI ever uploads.
    #[must_use]
    pub fn single_file(
        filename: impl Into<String>,
        content: impl Into<String>,
        public: bool,
        description: Option<String>,
    ) -> Self {
        let mut files = BTreeMap::new();
        files.insert(
            filename.into(),
            DraftFile {
                content: content.into(),
            },
        );
        Self {
            description,
            public,
            files,
        }
    }
}
