//! Fixed catalog behind the featured-products rail and the part detail
//! view. Supplier offers are mock data; live distributor feeds are a
//! later integration.

use super::pricing::{PriceBreak, SupplierOffer};
use super::specs::categorize_specifications;
use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedPart {
    pub part_number: String,
    pub manufacturer: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub stock: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLink {
    pub doc_type: String,
    pub name: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartDetails {
    pub part: FeaturedPart,
    pub lead_time: String,
    pub suppliers: Vec<SupplierOffer>,
    pub specifications: Vec<(String, Vec<(String, String)>)>,
    pub documents: Vec<DocumentLink>,
    pub related: Vec<FeaturedPart>,
}

pub const FEATURED_MANUFACTURERS: [&str; 10] = [
    "Texas Instruments",
    "Analog Devices",
    "STMicroelectronics",
    "Microchip",
    "NXP",
    "Infineon",
    "Broadcom",
    "Intel",
    "AMD",
    "Qualcomm",
];

pub static FEATURED_PARTS: Lazy<Vec<FeaturedPart>> = Lazy::new(|| {
    let rows: [(&str, &str, &str, &str, f64, u64); 8] = [
        (
            "STM32F103C8T6",
            "STMicroelectronics",
            "ARM Cortex-M3 32-bit Microcontroller, 64KB Flash, 20KB RAM, 72MHz",
            "Microcontrollers",
            2.85,
            15420,
        ),
        (
            "LM358N",
            "Texas Instruments",
            "Dual Operational Amplifier, DIP-8 Package",
            "Amplifiers",
            0.45,
            42300,
        ),
        (
            "ESP32-WROOM-32",
            "Espressif",
            "Wi-Fi+BT+BLE MCU Module, 4MB Flash",
            "RF Modules",
            3.20,
            8950,
        ),
        (
            "1N4148",
            "Multiple",
            "Small Signal Fast Switching Diode, DO-35",
            "Diodes",
            0.02,
            185000,
        ),
        (
            "ATMEGA328P-PU",
            "Microchip",
            "8-bit AVR Microcontroller, 32KB Flash, DIP-28",
            "Microcontrollers",
            3.50,
            6780,
        ),
        (
            "NE555P",
            "Texas Instruments",
            "Precision Timer IC, DIP-8",
            "Timers",
            0.35,
            52100,
        ),
        (
            "74HC595",
            "NXP",
            "8-bit Serial-In/Parallel-Out Shift Register",
            "Logic ICs",
            0.28,
            31500,
        ),
        (
            "LM7805",
            "STMicroelectronics",
            "5V 1A Positive Voltage Regulator, TO-220",
            "Voltage Regulators",
            0.48,
            28900,
        ),
    ];
    rows.into_iter()
        .map(
            |(part_number, manufacturer, description, category, price, stock)| FeaturedPart {
                part_number: part_number.to_string(),
                manufacturer: manufacturer.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                price,
                stock,
            },
        )
        .collect()
});

/// Distributor templates: name, share of total stock, MOQ, lead time,
/// and (tier quantity, multiplier on the base price) breaks.
const SUPPLIER_TEMPLATES: [(&str, f64, u32, &str, &[(u32, f64)]); 5] = [
    (
        "Digi-Key Electronics",
        0.30,
        1,
        "Ships Today",
        &[(1, 1.0), (10, 0.95), (100, 0.85), (1000, 0.75)],
    ),
    (
        "Mouser Electronics",
        0.25,
        1,
        "Ships Today",
        &[(1, 1.02), (10, 0.97), (100, 0.87), (1000, 0.77)],
    ),
    (
        "Arrow Electronics",
        0.20,
        10,
        "Ships in 2 days",
        &[(10, 0.98), (100, 0.88), (1000, 0.78)],
    ),
    (
        "Newark",
        0.15,
        5,
        "Ships in 3 days",
        &[(5, 1.05), (50, 0.92), (500, 0.82)],
    ),
    (
        "RS Components",
        0.10,
        1,
        "Ships in 5 days",
        &[(1, 1.08), (25, 0.95), (250, 0.85)],
    ),
];

fn supplier_offers(base_price: f64, total_stock: u64) -> Vec<SupplierOffer> {
    SUPPLIER_TEMPLATES
        .into_iter()
        .map(|(name, share, moq, lead_time, tiers)| SupplierOffer {
            name: name.to_string(),
            stock: (total_stock as f64 * share) as u64,
            moq,
            lead_time: lead_time.to_string(),
            breaks: tiers
                .iter()
                .map(|&(qty, multiplier)| PriceBreak {
                    qty,
                    unit_price: base_price * multiplier,
                })
                .collect(),
        })
        .collect()
}

fn raw_specifications(part: &FeaturedPart) -> Map<String, Value> {
    let mut raw = Map::new();
    raw.insert("part_number".to_string(), json!(part.part_number));
    raw.insert("manufacturer".to_string(), json!(part.manufacturer));
    raw.insert("category1".to_string(), json!(part.category));
    raw.insert("series".to_string(), json!("Standard"));
    raw.insert("packaging".to_string(), json!("Tape & Reel"));
    raw.insert("product_status".to_string(), json!("Active"));
    raw.insert("operating_temperature".to_string(), json!("-40°C ~ 85°C"));
    raw.insert("voltage_rating".to_string(), json!("2.7V ~ 5.5V"));
    raw.insert("package_case".to_string(), json!("DIP-8"));
    raw.insert("mounting_type".to_string(), json!("Through Hole"));
    raw.insert("lead_spacing".to_string(), json!("2.54mm"));
    raw.insert("moisture_sensitivity".to_string(), json!("MSL 1"));
    raw.insert("rohs_status".to_string(), json!("RoHS Compliant"));
    raw.insert("reach_status".to_string(), json!("Compliant"));
    raw.insert("lead_free".to_string(), json!("Yes"));
    raw.insert("quantity_available".to_string(), json!(part.stock));
    raw.insert("export_control".to_string(), json!("ECCN 5A992.c"));
    raw
}

/// Detailed record for one part number, or `None` when it is not in
/// the catalog.
pub fn part_details(part_number: &str) -> Option<PartDetails> {
    let part = FEATURED_PARTS
        .iter()
        .find(|p| p.part_number == part_number)?
        .clone();

    let related: Vec<FeaturedPart> = FEATURED_PARTS
        .iter()
        .filter(|p| p.category == part.category && p.part_number != part.part_number)
        .take(4)
        .cloned()
        .collect();

    let documents = vec![
        DocumentLink {
            doc_type: "Datasheet".to_string(),
            name: format!("{}_Datasheet.pdf", part.part_number),
            size: "2.3 MB".to_string(),
        },
        DocumentLink {
            doc_type: "Application Note".to_string(),
            name: format!("{}_AppNote.pdf", part.part_number),
            size: "1.1 MB".to_string(),
        },
        DocumentLink {
            doc_type: "3D Model".to_string(),
            name: format!("{}_3D.step", part.part_number),
            size: "450 KB".to_string(),
        },
        DocumentLink {
            doc_type: "PCB Footprint".to_string(),
            name: format!("{}_Footprint.zip", part.part_number),
            size: "25 KB".to_string(),
        },
    ];

    Some(PartDetails {
        suppliers: supplier_offers(part.price, part.stock),
        specifications: categorize_specifications(&raw_specifications(&part)),
        lead_time: "In Stock".to_string(),
        documents,
        related,
        part,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_part_has_full_details() {
        let details = part_details("STM32F103C8T6").unwrap();
        assert_eq!(details.part.manufacturer, "STMicroelectronics");
        assert_eq!(details.suppliers.len(), 5);
        assert_eq!(details.documents.len(), 4);
    }

    #[test]
    fn unknown_part_is_none() {
        assert!(part_details("NOT-A-PART").is_none());
    }

    #[test]
    fn related_parts_share_the_category_and_exclude_self() {
        let details = part_details("ATMEGA328P-PU").unwrap();
        assert!(!details.related.is_empty());
        for related in &details.related {
            assert_eq!(related.category, "Microcontrollers");
            assert_ne!(related.part_number, "ATMEGA328P-PU");
        }
    }

    #[test]
    fn specifications_are_sectioned() {
        let details = part_details("LM358N").unwrap();
        let general = details
            .specifications
            .iter()
            .find(|(name, _)| name == "General")
            .unwrap();
        assert!(general.1.iter().any(|(k, v)| k == "Part Number" && v == "LM358N"));
        assert!(details
            .specifications
            .iter()
            .any(|(name, _)| name == "Other Specifications"));
    }

    #[test]
    fn supplier_stock_splits_the_total() {
        let details = part_details("NE555P").unwrap();
        let split: u64 = details.suppliers.iter().map(|s| s.stock).sum();
        assert!(split <= details.part.stock);
    }
}
