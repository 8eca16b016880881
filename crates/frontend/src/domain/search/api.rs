use contracts::search::SearchResponse;
use gloo_net::http::Request;

/// Issue the search request. The URL is fully built by
/// [`super::filters::build_query_url`]; a non-2xx status is an error.
pub async fn fetch_search(url: &str) -> Result<SearchResponse, String> {
    let resp = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
