//! Display label for the loaded page

use url::Url;

/// Label shown while the blank start entry is current
pub const BLANK_PAGE_LABEL: &str = "New Tab";

/// Choose the label for a page.
///
/// The document title reported by the content view wins. When it is missing
/// or blank (cross-origin pages, pages without `<title>`) the host of `url` is
/// used, and URLs without a host fall back to their own text.
pub fn page_label(document_title: Option<&str>, url: &str) -> String {
    if let Some(title) = document_title.map(str::trim).filter(|t| !t.is_empty()) {
        return title.to_string();
    }

    let url = url.trim();
    if url.is_empty() {
        return BLANK_PAGE_LABEL.to_string();
    }

    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None if parsed.as_str() == "about:blank" => BLANK_PAGE_LABEL.to_string(),
            None => url.to_string(),
        },
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "No host for page label");
            url.to_string()
        }
    }
}
