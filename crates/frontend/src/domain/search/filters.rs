//! Filter state reconciliation for the search results view.
//!
//! Three representations of the filter selection are kept consistent:
//! the URL query string (authoritative), the applied set derived from
//! it, and a pending working copy the user edits before committing.
//! Every transition here is a pure function; the view layer owns the
//! signals and the navigation side effects.

use crate::shared::api_utils::api_url;
use std::collections::{BTreeMap, HashMap};

/// Separator between multiple selected values of one facet inside a
/// single query parameter.
pub const VALUE_DELIMITER: &str = "||";

/// Query parameters that address the search itself and are never
/// interpreted as filter facets, even if the backend echoes them.
pub const RESERVED_KEYS: [&str; 3] = ["q", "category", "subcategory"];

/// Facet key -> selected values.
pub type FilterSet = BTreeMap<String, Vec<String>>;

/// The full search state carried by the browser URL. Nothing else
/// persists a filter selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchUrlState {
    pub q: String,
    pub category: String,
    pub subcategory: String,
    pub filters: FilterSet,
}

/// Parse a browser query string (with or without the leading `?`) into
/// search state. Total: unparseable input yields the empty state.
pub fn parse_query(query: &str) -> SearchUrlState {
    let raw = query.strip_prefix('?').unwrap_or(query);
    let params: HashMap<String, String> = serde_qs::from_str(raw).unwrap_or_default();

    let mut state = SearchUrlState {
        q: params.get("q").cloned().unwrap_or_default(),
        category: params.get("category").cloned().unwrap_or_default(),
        subcategory: params.get("subcategory").cloned().unwrap_or_default(),
        filters: FilterSet::new(),
    };
    for (key, value) in params {
        if RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        let values: Vec<String> = value
            .split(VALUE_DELIMITER)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if !values.is_empty() {
            state.filters.insert(key, values);
        }
    }
    state
}

/// Applied filter set as a pure function of the URL query string.
pub fn derive_applied_from_query(query: &str) -> FilterSet {
    parse_query(query).filters
}

/// Toggle one facet value in the pending set. Removing the last value
/// of a facet removes the facet key itself. Does not touch the URL and
/// does not trigger a fetch.
pub fn toggle_value(mut pending: FilterSet, key: &str, value: &str) -> FilterSet {
    let values = pending.entry(key.to_string()).or_default();
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
    if values.is_empty() {
        pending.remove(key);
    }
    pending
}

/// Whether the pending set has diverged from the applied set; drives
/// the visibility of the Apply affordance.
pub fn has_pending_changes(pending: &FilterSet, applied: &FilterSet) -> bool {
    pending != applied
}

/// Remove one value from the applied set directly, bypassing pending.
/// Used by the filter chips so removal commits without an Apply step.
pub fn remove_value(mut applied: FilterSet, key: &str, value: &str) -> FilterSet {
    if let Some(values) = applied.get_mut(key) {
        values.retain(|v| v != value);
        if values.is_empty() {
            applied.remove(key);
        }
    }
    applied
}

/// Number of individually selected filter values.
pub fn active_filter_count(filters: &FilterSet) -> usize {
    filters.values().map(Vec::len).sum()
}

/// Serialize search state into a query string: category, subcategory,
/// facets (values `||`-joined within one parameter), then `q`.
pub fn to_page_query(state: &SearchUrlState) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !state.category.is_empty() {
        parts.push(format!("category={}", urlencoding::encode(&state.category)));
    }
    if !state.subcategory.is_empty() {
        parts.push(format!(
            "subcategory={}",
            urlencoding::encode(&state.subcategory)
        ));
    }
    for (key, values) in &state.filters {
        if values.is_empty() {
            continue;
        }
        parts.push(format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(&values.join(VALUE_DELIMITER))
        ));
    }
    if !state.q.is_empty() {
        parts.push(format!("q={}", urlencoding::encode(&state.q)));
    }
    parts.join("&")
}

/// Browser URL for the results page carrying the given state.
pub fn search_page_url(state: &SearchUrlState) -> String {
    let query = to_page_query(state);
    if query.is_empty() {
        "/search".to_string()
    } else {
        format!("/search?{}", query)
    }
}

/// Outbound API request URL, or `None` when no request should be
/// issued: at least one of category, free-text term, or a manufacturer
/// filter must be present.
pub fn build_query_url(state: &SearchUrlState) -> Option<String> {
    let has_manufacturer = state
        .filters
        .get("manufacturer")
        .is_some_and(|values| !values.is_empty());
    if state.category.is_empty() && state.q.is_empty() && !has_manufacturer {
        return None;
    }
    Some(format!("{}?{}", api_url("/search"), to_page_query(state)))
}

/// The state with every filter dropped, keeping only the navigational
/// parameters.
pub fn cleared(state: &SearchUrlState) -> SearchUrlState {
    SearchUrlState {
        filters: FilterSet::new(),
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_set(entries: &[(&str, &[&str])]) -> FilterSet {
        entries
            .iter()
            .map(|(k, vs)| (k.to_string(), vs.iter().map(|v| v.to_string()).collect()))
            .collect()
    }

    #[test]
    fn parse_splits_facets_on_the_delimiter() {
        let state = parse_query("?category=Sensors&temperature_range=0||Wide");
        assert_eq!(state.category, "Sensors");
        assert_eq!(
            state.filters,
            filter_set(&[("temperature_range", &["0", "Wide"])])
        );
    }

    #[test]
    fn reserved_keys_are_never_facets() {
        let applied =
            derive_applied_from_query("q=lm358&category=Amplifiers&subcategory=Op%20Amps&tolerance=1%25");
        assert_eq!(applied, filter_set(&[("tolerance", &["1%"])]));
    }

    #[test]
    fn query_string_roundtrips_through_parse_and_serialize() {
        let original = "category=Passive%20Components&packaging=Reel||Tube&tolerance=1%25&q=resistor";
        let state = parse_query(original);
        let reserialized = to_page_query(&state);
        assert_eq!(parse_query(&reserialized), state);
        assert_eq!(reserialized.matches('&').count(), original.matches('&').count());
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let start = filter_set(&[("manufacturer", &["TI"])]);
        let once = toggle_value(start.clone(), "packaging", "Reel");
        assert_ne!(once, start);
        let twice = toggle_value(once, "packaging", "Reel");
        assert_eq!(twice, start);
    }

    #[test]
    fn toggling_last_value_removes_the_key() {
        let start = filter_set(&[("packaging", &["Reel"])]);
        let toggled = toggle_value(start, "packaging", "Reel");
        assert!(!toggled.contains_key("packaging"));
        assert!(toggled.is_empty());
    }

    #[test]
    fn pending_changes_only_after_divergence() {
        let applied = derive_applied_from_query("category=Sensors&manufacturer=TI");
        let pending = applied.clone();
        assert!(!has_pending_changes(&pending, &applied));
        let pending = toggle_value(pending, "manufacturer", "NXP");
        assert!(has_pending_changes(&pending, &applied));
    }

    #[test]
    fn remove_value_keeps_remaining_selections() {
        let applied = filter_set(&[("manufacturer", &["TI", "NXP"])]);
        let applied = remove_value(applied, "manufacturer", "TI");
        assert_eq!(applied, filter_set(&[("manufacturer", &["NXP"])]));
        let applied = remove_value(applied, "manufacturer", "NXP");
        assert!(applied.is_empty());
    }

    #[test]
    fn no_request_without_category_term_or_manufacturer() {
        let state = parse_query("?");
        assert_eq!(build_query_url(&state), None);

        // Other filters alone do not justify a request.
        let state = parse_query("packaging=Reel&tolerance=1%25");
        assert_eq!(build_query_url(&state), None);

        let state = parse_query("manufacturer=TI");
        assert!(build_query_url(&state).is_some());
    }

    #[test]
    fn outbound_url_encodes_the_delimiter() {
        let state = parse_query("?category=Sensors&temperature_range=0||Wide");
        let url = build_query_url(&state).unwrap();
        assert_eq!(
            url,
            "/api/cs/search?category=Sensors&temperature_range=0%7C%7CWide"
        );
    }

    #[test]
    fn page_query_orders_category_facets_then_term() {
        let state = SearchUrlState {
            q: "precision".to_string(),
            category: "Sensors".to_string(),
            subcategory: "Temperature Sensors".to_string(),
            filters: filter_set(&[("manufacturer", &["TI"])]),
        };
        assert_eq!(
            to_page_query(&state),
            "category=Sensors&subcategory=Temperature%20Sensors&manufacturer=TI&q=precision"
        );
    }

    #[test]
    fn cleared_drops_filters_and_keeps_navigation() {
        let state = parse_query("category=Sensors&subcategory=Pressure&manufacturer=TI&q=abs");
        let cleared = cleared(&state);
        assert!(cleared.filters.is_empty());
        assert_eq!(cleared.category, "Sensors");
        assert_eq!(cleared.subcategory, "Pressure");
        assert_eq!(cleared.q, "abs");
        assert_eq!(search_page_url(&cleared), "/search?category=Sensors&subcategory=Pressure&q=abs");
    }

    #[test]
    fn active_filter_count_counts_values() {
        let filters = filter_set(&[("manufacturer", &["TI", "NXP"]), ("packaging", &["Reel"])]);
        assert_eq!(active_filter_count(&filters), 3);
        assert_eq!(active_filter_count(&FilterSet::new()), 0);
    }
}
