//! Grouping of raw part fields into display sections for the
//! specifications tab.

use serde_json::{Map, Value};

/// Display sections, in render order, with the raw keys they own.
const SECTION_FIELDS: [(&str, &[&str]); 6] = [
    (
        "General",
        &[
            "part_number",
            "manufacturer",
            "series",
            "packaging",
            "product_status",
            "category1",
            "category2",
            "supplier_device_package",
        ],
    ),
    (
        "Electrical Characteristics",
        &[
            "resistance",
            "power_watts",
            "tolerance",
            "temperature_coefficient",
            "voltage_rating",
            "current_rating",
            "capacitance",
            "inductance",
        ],
    ),
    (
        "Physical Characteristics",
        &[
            "size_dimension",
            "package_case",
            "height_seated_max",
            "number_of_terminations",
            "mounting_type",
            "lead_spacing",
            "weight",
            "color",
        ],
    ),
    (
        "Environmental & Compliance",
        &[
            "operating_temperature",
            "storage_temperature",
            "moisture_sensitivity",
            "ratings",
            "failure_rate",
            "rohs_status",
            "reach_status",
            "lead_free",
        ],
    ),
    (
        "Features",
        &["features", "composition", "technology", "interface", "applications"],
    ),
    (
        "Availability & Pricing",
        &["quantity_available", "price", "minimum_order_quantity", "lead_time"],
    ),
];

/// Bookkeeping fields never shown to the user.
const EXCLUDED_FIELDS: [&str; 4] = ["url", "created_at", "updated_at", "id"];

const OTHER_SECTION: &str = "Other Specifications";

/// Convert a snake_case key to Title Case for display.
pub fn snake_to_title_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group raw part fields into titled display sections.
///
/// Excluded fields and blank values (`""`, `"-"`, null) are dropped,
/// unknown keys collect under "Other Specifications", and sections
/// that end up empty are omitted entirely.
pub fn categorize_specifications(raw: &Map<String, Value>) -> Vec<(String, Vec<(String, String)>)> {
    let mut sections: Vec<(String, Vec<(String, String)>)> = SECTION_FIELDS
        .iter()
        .map(|(name, _)| (name.to_string(), Vec::new()))
        .collect();
    sections.push((OTHER_SECTION.to_string(), Vec::new()));

    for (key, value) in raw {
        if EXCLUDED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        if text.is_empty() || text == "-" {
            continue;
        }
        let section_idx = SECTION_FIELDS
            .iter()
            .position(|(_, fields)| fields.contains(&key.as_str()))
            .unwrap_or(SECTION_FIELDS.len());
        sections[section_idx].1.push((snake_to_title_case(key), text));
    }

    sections.retain(|(_, entries)| !entries.is_empty());
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_snake_to_title_case() {
        assert_eq!(snake_to_title_case("part_number"), "Part Number");
        assert_eq!(snake_to_title_case("operating_temperature"), "Operating Temperature");
        assert_eq!(snake_to_title_case("price"), "Price");
    }

    #[test]
    fn known_keys_land_in_their_section() {
        let sections = categorize_specifications(&raw(&[
            ("part_number", json!("LM358N")),
            ("resistance", json!("10 kOhms")),
            ("mounting_type", json!("Through Hole")),
        ]));
        let names: Vec<&str> = sections.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["General", "Electrical Characteristics", "Physical Characteristics"]
        );
        assert_eq!(
            sections[0].1,
            vec![("Part Number".to_string(), "LM358N".to_string())]
        );
    }

    #[test]
    fn unknown_keys_fall_into_other() {
        let sections =
            categorize_specifications(&raw(&[("export_control", json!("ECCN 5A992.c"))]));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, "Other Specifications");
        assert_eq!(
            sections[0].1,
            vec![("Export Control".to_string(), "ECCN 5A992.c".to_string())]
        );
    }

    #[test]
    fn excluded_and_blank_fields_are_dropped() {
        let sections = categorize_specifications(&raw(&[
            ("id", json!(42)),
            ("url", json!("https://example.com/p/42")),
            ("updated_at", json!("2025-05-01")),
            ("series", json!("-")),
            ("features", json!("")),
            ("tolerance", Value::Null),
        ]));
        assert!(sections.is_empty());
    }

    #[test]
    fn numeric_values_render_as_text() {
        let sections = categorize_specifications(&raw(&[("power_watts", json!(0.25))]));
        assert_eq!(
            sections[0].1,
            vec![("Power Watts".to_string(), "0.25".to_string())]
        );
    }
}
