use crate::domain::search::filters::FilterSet;
use crate::domain::search::labels::format_facet_label;
use contracts::search::PartRecord;
use leptos::prelude::*;
use serde_json::Value;

/// Part fields the card layout already renders on its own.
const HANDLED_FIELDS: [&str; 4] = ["part_number", "manufacturer", "packaging", "type"];

/// Extra display specifications from the open-ended `part_specs`
/// mapping: keys ending in `.value`, excluding explicitly handled
/// fields and facets the user is already filtering on.
pub fn extra_specs(part: &PartRecord, applied: &FilterSet) -> Vec<(String, String)> {
    let mut specs: Vec<(String, String)> = part
        .part_specs
        .iter()
        .filter_map(|(key, value)| {
            let base = key.strip_suffix(".value")?;
            if HANDLED_FIELDS.contains(&base) || applied.contains_key(base) {
                return None;
            }
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            if text.is_empty() || text == "-" {
                return None;
            }
            Some((format_facet_label(base), text))
        })
        .collect();
    specs.sort();
    specs
}

#[component]
pub fn PartCard(part: PartRecord, applied: FilterSet) -> impl IntoView {
    let specs = extra_specs(&part, &applied);
    let detail_href = format!("/part/{}", urlencoding::encode(&part.part_number));

    view! {
        <div class="product-card">
            <a href=detail_href class="product-card__link">
                <h6 class="product-card__number">{part.part_number.clone()}</h6>
                <small class="text-muted product-card__manufacturer">
                    {part.manufacturer.clone().unwrap_or_default()}
                </small>
                <div class="product-card__badges">
                    {part
                        .part_type
                        .clone()
                        .map(|t| view! { <span class="badge badge--secondary">{t}</span> })}
                    {part
                        .packaging
                        .clone()
                        .map(|p| view! { <span class="badge badge--light">{p}</span> })}
                </div>
                <ul class="product-card__specs">
                    {specs
                        .into_iter()
                        .take(4)
                        .map(|(label, value)| {
                            view! {
                                <li>
                                    <span class="text-muted">{label}": "</span>
                                    {value}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn part_with_specs(entries: &[(&str, Value)]) -> PartRecord {
        PartRecord {
            part_number: "RC0402FR-0710KL".to_string(),
            part_specs: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<HashMap<_, _>>(),
            ..PartRecord::default()
        }
    }

    #[test]
    fn only_value_suffixed_keys_are_shown() {
        let part = part_with_specs(&[
            ("resistance.value", Value::String("10 kOhms".to_string())),
            ("resistance.unit", Value::String("Ohms".to_string())),
            ("score", Value::String("0.93".to_string())),
        ]);
        let specs = extra_specs(&part, &FilterSet::new());
        assert_eq!(specs, vec![("Resistance".to_string(), "10 kOhms".to_string())]);
    }

    #[test]
    fn active_filter_keys_and_handled_fields_are_skipped() {
        let part = part_with_specs(&[
            ("tolerance.value", Value::String("1%".to_string())),
            ("packaging.value", Value::String("Reel".to_string())),
            ("manufacturer.value", Value::String("Yageo".to_string())),
        ]);
        let mut applied = FilterSet::new();
        applied.insert("tolerance".to_string(), vec!["1%".to_string()]);
        assert!(extra_specs(&part, &applied).is_empty());
    }

    #[test]
    fn numbers_render_and_blanks_are_dropped() {
        let part = part_with_specs(&[
            ("power_watts.value", Value::from(0.063)),
            ("series.value", Value::String("-".to_string())),
            ("features.value", Value::String(String::new())),
        ]);
        let specs = extra_specs(&part, &FilterSet::new());
        assert_eq!(specs, vec![("Power Watts".to_string(), "0.063".to_string())]);
    }
}
