//! Display labels for facet keys.
//!
//! Facet keys come straight from index columns (`temperature_range`,
//! `supplierDevicePackage`), so the sidebar formats them unless the
//! backend supplied an explicit label.

use contracts::search::FacetDescriptor;

/// Format a raw facet key for display: underscores become spaces,
/// camelCase boundaries split into words, and each word is title-cased.
pub fn format_facet_label(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    for chunk in key.split(|c| c == '_' || c == ' ') {
        let mut current = String::new();
        let mut prev_lower = false;
        for ch in chunk.chars() {
            if ch.is_uppercase() && prev_lower {
                words.push(current.clone());
                current.clear();
            }
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
            current.push(ch);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }

    words
        .iter()
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

/// Label for a facet: the backend-supplied one when present, otherwise
/// derived from the key.
pub fn facet_label(key: &str, descriptor: &FacetDescriptor) -> String {
    match &descriptor.label {
        Some(label) if !label.is_empty() => label.clone(),
        _ => format_facet_label(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_keys_become_title_case() {
        assert_eq!(format_facet_label("temperature_range"), "Temperature Range");
        assert_eq!(format_facet_label("manufacturer"), "Manufacturer");
        assert_eq!(format_facet_label("rohs_status"), "Rohs Status");
    }

    #[test]
    fn camel_case_keys_split_into_words() {
        assert_eq!(format_facet_label("camelCaseKey"), "Camel Case Key");
        assert_eq!(
            format_facet_label("supplierDevicePackage"),
            "Supplier Device Package"
        );
    }

    #[test]
    fn mixed_and_degenerate_keys() {
        assert_eq!(format_facet_label("voltage_ratingMax"), "Voltage Rating Max");
        assert_eq!(format_facet_label(""), "");
        assert_eq!(format_facet_label("q2"), "Q2");
    }

    #[test]
    fn backend_label_wins_when_present() {
        let with_label = FacetDescriptor {
            label: Some("Operating Temp".to_string()),
            values: Vec::new(),
        };
        assert_eq!(facet_label("temperature_range", &with_label), "Operating Temp");

        let without = FacetDescriptor::default();
        assert_eq!(facet_label("temperature_range", &without), "Temperature Range");
    }
}
