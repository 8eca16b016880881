use crate::shared::api_utils::api_url;
use contracts::catalog::{CategorySummary, SubcategorySummary};
use gloo_net::http::Request;

/// Fetch the top-level category listing with part counts.
pub async fn fetch_categories() -> Result<Vec<CategorySummary>, String> {
    let resp = Request::get(&api_url("/categories"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Fetch the subcategory listing for one category.
pub async fn fetch_subcategories(category: &str) -> Result<Vec<SubcategorySummary>, String> {
    let path = format!("/category/{}/subcategories", urlencoding::encode(category));
    let resp = Request::get(&api_url(&path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}
