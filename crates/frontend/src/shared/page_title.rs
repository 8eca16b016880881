const SITE_NAME: &str = "PartSearch";

/// Set the document title for the current page view.
///
/// No-op outside a browser context.
pub fn set_page_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if title.is_empty() {
            document.set_title(SITE_NAME);
        } else {
            document.set_title(&format!("{} | {}", title, SITE_NAME));
        }
    }
}
