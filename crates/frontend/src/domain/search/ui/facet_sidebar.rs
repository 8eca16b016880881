use crate::domain::search::filters::{self, FilterSet};
use crate::domain::search::labels::facet_label;
use crate::shared::format::format_count;
use crate::shared::icons::icon;
use contracts::search::FacetDescriptor;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Sidebar of facet checkbox groups.
///
/// Checkboxes edit the pending set only; nothing is fetched until the
/// Apply button commits the selection to the URL. The button is shown
/// only while pending differs from applied.
#[component]
pub fn FacetSidebar(
    /// Facet descriptors for the current result set
    #[prop(into)]
    facets: Signal<BTreeMap<String, FacetDescriptor>>,

    /// In-progress filter edits
    pending: RwSignal<FilterSet>,

    /// Committed filter selection (URL-derived)
    #[prop(into)]
    applied: Signal<FilterSet>,

    /// Commit pending to the URL
    on_apply: Callback<()>,

    /// Drop every filter
    on_clear: Callback<()>,
) -> impl IntoView {
    let has_changes = move || filters::has_pending_changes(&pending.get(), &applied.get());
    let active_count = move || filters::active_filter_count(&applied.get());

    view! {
        <aside class="facet-sidebar card">
            <div class="card-header facet-sidebar__header">
                <span class="facet-sidebar__title">
                    {icon("filter")}
                    <span>"Filters"</span>
                    {move || {
                        let count = active_count();
                        if count > 0 {
                            view! { <span class="badge badge--primary">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </span>
                <button class="btn btn-link" on:click=move |_| on_clear.run(())>
                    "Clear All"
                </button>
            </div>
            <div class="card-body">
                {move || {
                    facets
                        .get()
                        .into_iter()
                        // A facet with no values in the current result set is hidden.
                        .filter(|(_, descriptor)| !descriptor.values.is_empty())
                        .map(|(key, descriptor)| {
                            let label = facet_label(&key, &descriptor);
                            view! {
                                <div class="facet-group">
                                    <h6 class="facet-group__label">{label}</h6>
                                    {descriptor
                                        .values
                                        .into_iter()
                                        .map(|facet_value| {
                                            let check_key = key.clone();
                                            let check_value = facet_value.value.clone();
                                            let toggle_key = key.clone();
                                            let toggle_value = facet_value.value.clone();
                                            view! {
                                                <label class="facet-option">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            pending
                                                                .get()
                                                                .get(&check_key)
                                                                .is_some_and(|vs| vs.contains(&check_value))
                                                        }
                                                        on:change=move |_| {
                                                            pending
                                                                .set(
                                                                    filters::toggle_value(
                                                                        pending.get_untracked(),
                                                                        &toggle_key,
                                                                        &toggle_value,
                                                                    ),
                                                                );
                                                        }
                                                    />
                                                    <span class="facet-option__value">{facet_value.value.clone()}</span>
                                                    <span class="facet-option__count">{format_count(facet_value.count)}</span>
                                                </label>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}

                <Show when=has_changes>
                    <button
                        class="btn btn-primary facet-sidebar__apply"
                        on:click=move |_| on_apply.run(())
                    >
                        "Apply Filters"
                    </button>
                </Show>
            </div>
        </aside>
    }
}
