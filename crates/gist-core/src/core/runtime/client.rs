use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use gist_domain::{next_page_from_link, Gist, GistDraft, GistSummary};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{header, StatusCode};
use serde_json::json;

use super::GIST_VERSION;
use crate::outcome::GistUserError;

pub(crate) const DEFAULT_API_URL: &str = "https://api.github.com";

/// Endpoint plus credential for one authenticated API conversation.
#[derive(Clone, Debug)]
pub struct ApiAccess {
    pub(crate) base_url: String,
    pub(crate) token: String,
}

impl ApiAccess {
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: token.into(),
        }
    }
}

/// One page of the authenticated account's gists.
#[derive(Debug)]
pub struct GistPage {
    pub gists: Vec<GistSummary>,
    pub next_page: Option<u32>,
}

pub(crate) fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent(format!("gist/{GIST_VERSION}"))
        .timeout(Duration::from_secs(60))
        .build()
        .context("failed to build HTTP client")
}

fn authorized(request: RequestBuilder, access: &ApiAccess) -> RequestBuilder {
    request
        .header(header::ACCEPT, "application/vnd.github+json")
        .bearer_auth(&access.token)
}

/// Fetches one page of the gist listing along with the next page number, if
/// the service reported one.
///
/// `page` is `None` for the first request; afterwards callers pass the number
/// reported by the previous page until none is reported.
pub(crate) fn list_page(
    client: &Client,
    access: &ApiAccess,
    page: Option<u32>,
) -> Result<GistPage> {
    let mut request = client.get(format!("{}/gists", access.base_url));
    if let Some(page) = page {
        request = request.query(&[("page", page)]);
    }
    let response = authorized(request, access)
        .send()
        .map_err(|err| anyhow!("failed to query {}: {err}", access.base_url))?;
    let response = reject_bad_credentials(response)?;
    let response = response
        .error_for_status()
        .map_err(|err| anyhow!("the gist service returned an error: {err}"))?;

    let next_page = next_page_from_link(
        response
            .headers()
            .get(header::LINK)
            .and_then(|value| value.to_str().ok()),
    );
    let gists: Vec<GistSummary> = response
        .json()
        .context("failed to decode the gist listing")?;
    tracing::debug!(count = gists.len(), next = ?next_page, "fetched gist page");

    Ok(GistPage { gists, next_page })
}

/// Fetches one gist with file contents included.
pub(crate) fn fetch_gist(client: &Client, access: &ApiAccess, id: &str) -> Result<Gist> {
    let request = client.get(format!("{}/gists/{id}", access.base_url));
    let response = authorized(request, access)
        .send()
        .map_err(|err| anyhow!("failed to query {}: {err}", access.base_url))?;
    if response.status() == StatusCode::NOT_FOUND {
        return Err(GistUserError::new(
            format!("no gist found with id {id}"),
            json!({
                "reason": "unknown_gist",
                "id": id,
                "hint": "Run `gist list` to see the ids on this account.",
            }),
        )
        .into());
    }
    let response = reject_bad_credentials(response)?;
    let response = response
        .error_for_status()
        .map_err(|err| anyhow!("the gist service returned an error: {err}"))?;
    response
        .json()
        .with_context(|| format!("failed to decode gist {id}"))
}

/// Creates a gist from a draft, returning the stored record.
pub(crate) fn create_gist(client: &Client, access: &ApiAccess, draft: &GistDraft) -> Result<Gist> {
    let request = client.post(format!("{}/gists", access.base_url)).json(draft);
    let response = authorized(request, access)
        .send()
        .map_err(|err| anyhow!("failed to query {}: {err}", access.base_url))?;
    let response = reject_bad_credentials(response)?;
    let response = response
        .error_for_status()
        .map_err(|err| anyhow!("the gist service rejected the new gist: {err}"))?;
    response.json().context("failed to decode the created gist")
}

fn reject_bad_credentials(response: Response) -> Result<Response> {
    if matches!(
        response.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ) {
        return Err(GistUserError::new(
            "the gist service rejected the provided credentials",
            json!({
                "reason": "auth_rejected",
                "status": response.status().as_u16(),
                "hint": "Set GIST_TOKEN or store a valid token with `git config --global gist.token <TOKEN>`.",
            }),
        )
        .into());
    }
    Ok(response)
}
