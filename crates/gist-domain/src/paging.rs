use url::Url;

/// Extracts the next page number from a `Link` response header.
///
/// The header carries comma-separated entries like
/// `<https://api.github.com/gists?page=3>; rel="next"`. A missing header or
/// a header without a `rel="next"` entry means the listing is complete.
#[must_use]
pub fn next_page_from_link(header: Option<&str>) -> Option<u32> {
    let header = header?;
    for entry in header.split(',') {
        let Some((target, params)) = entry.split_once(';') else {
            continue;
        };
        if !params.split(';').any(|param| param.trim() == "rel=\"next\"") {
            continue;
        }
        let target = target.trim().trim_start_matches('<').trim_end_matches('>');
        let Ok(url) = Url::parse(target) else {
            continue;
        };
        for (key, value) in url.query_pairs() {
            if key == "page" {
                return value.parse().ok();
            }
        }
    }
    None
}
