/// Icon name for a catalog category. Category names come from the
/// backend listing; anything unrecognized falls back to the chip icon.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Integrated Circuits ICs" | "Semiconductors" => "cpu",
        "Discrete Semiconductors" | "Passive Components" => "package",
        "Electromechanical" | "Development Tools" => "tool",
        "Circuit Protection" => "shield",
        "Power Products" | "Power Management" => "battery",
        "Optoelectronics" => "lightbulb",
        "Sensors" => "radio",
        "Connectors" => "plug",
        "RF & Wireless" => "wifi",
        _ => "cpu",
    }
}
