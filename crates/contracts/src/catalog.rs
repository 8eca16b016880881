use serde::{Deserialize, Serialize};

/// One row of the top-level category listing (`GET /categories`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    #[serde(default)]
    pub count: u64,
}

/// One row of a category's subcategory listing
/// (`GET /category/{category}/subcategories`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategorySummary {
    pub subcategory: String,
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_count_defaults_to_zero() {
        let c: CategorySummary = serde_json::from_str(r#"{"category":"Sensors"}"#).unwrap();
        assert_eq!(c.category, "Sensors");
        assert_eq!(c.count, 0);
    }

    #[test]
    fn subcategory_row_roundtrip() {
        let s = SubcategorySummary {
            subcategory: "Temperature Sensors".to_string(),
            count: 1250,
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<SubcategorySummary>(&json).unwrap(), s);
    }
}
