use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Response shape of the part search endpoint.
///
/// Every field is optional on the wire; missing collections deserialize
/// to empty so the results view never has to special-case a partial
/// payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<PartRecord>,
    #[serde(default)]
    pub facets: BTreeMap<String, FacetDescriptor>,
    #[serde(default)]
    pub total: u64,
}

/// Metadata for one filterable facet, scoped to the current result set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetDescriptor {
    /// Display label supplied by the backend. Absent for facets derived
    /// from raw spec columns; the frontend formats the key instead.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub values: Vec<FacetValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub value: String,
    #[serde(default)]
    pub count: u64,
}

/// A single part row of the search results.
///
/// The index emits `part_number` or `partNumber` depending on which
/// pipeline produced the document, so both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    #[serde(default, alias = "partNumber")]
    pub part_number: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(rename = "type", default)]
    pub part_type: Option<String>,
    /// Open-ended spec columns. Keys ending in `.value` carry extra
    /// display specifications; everything else is index bookkeeping.
    #[serde(default)]
    pub part_specs: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_an_empty_response() {
        let r: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(r.results.is_empty());
        assert!(r.facets.is_empty());
        assert_eq!(r.total, 0);
    }

    #[test]
    fn part_number_accepts_both_spellings() {
        let a: PartRecord = serde_json::from_str(r#"{"part_number":"LM358N"}"#).unwrap();
        let b: PartRecord = serde_json::from_str(r#"{"partNumber":"LM358N"}"#).unwrap();
        assert_eq!(a.part_number, "LM358N");
        assert_eq!(b.part_number, "LM358N");
    }

    #[test]
    fn missing_part_fields_default_to_empty() {
        let p: PartRecord = serde_json::from_str("{}").unwrap();
        assert!(p.part_number.is_empty());
        assert!(p.manufacturer.is_none());
        assert!(p.part_specs.is_empty());
    }

    #[test]
    fn facets_deserialize_with_counts() {
        let json = r#"{
            "results": [{"part_number": "RC0402", "type": "Thick Film"}],
            "facets": {
                "manufacturer": {
                    "label": "Manufacturer",
                    "values": [
                        {"value": "Yageo", "count": 120},
                        {"value": "Vishay", "count": 87}
                    ]
                },
                "tolerance": {"values": [{"value": "1%", "count": 42}]}
            },
            "total": 207
        }"#;
        let r: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.total, 207);
        assert_eq!(r.results[0].part_type.as_deref(), Some("Thick Film"));
        let mfr = &r.facets["manufacturer"];
        assert_eq!(mfr.label.as_deref(), Some("Manufacturer"));
        assert_eq!(mfr.values[0].count, 120);
        assert!(r.facets["tolerance"].label.is_none());
    }
}
