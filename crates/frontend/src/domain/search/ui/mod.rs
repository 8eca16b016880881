pub mod facet_sidebar;
pub mod part_card;

use crate::domain::search::api;
use crate::domain::search::filters::{self, FilterSet};
use crate::domain::search::labels::format_facet_label;
use crate::shared::components::{FilterTag, SearchBar};
use crate::shared::format::format_count;
use crate::shared::page_title::set_page_title;
use contracts::search::{FacetDescriptor, PartRecord};
use facet_sidebar::FacetSidebar;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use part_card::PartCard;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Relevance,
    PriceLowToHigh,
    PriceHighToLow,
    StockAvailability,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::Relevance,
        SortOrder::PriceLowToHigh,
        SortOrder::PriceHighToLow,
        SortOrder::StockAvailability,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PriceLowToHigh => "price-low",
            SortOrder::PriceHighToLow => "price-high",
            SortOrder::StockAvailability => "stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Sort by: Relevance",
            SortOrder::PriceLowToHigh => "Price: Low to High",
            SortOrder::PriceHighToLow => "Price: High to Low",
            SortOrder::StockAvailability => "Stock Availability",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "price-low" => SortOrder::PriceLowToHigh,
            "price-high" => SortOrder::PriceHighToLow,
            "stock" => SortOrder::StockAvailability,
            _ => SortOrder::Relevance,
        }
    }
}

#[component]
pub fn SearchResultsPage() -> impl IntoView {
    let location = use_location();

    // The URL is the authoritative filter state; everything below is
    // re-derived on every navigation.
    let url_state = Memo::new(move |_| filters::parse_query(&location.search.get()));
    let applied = Memo::new(move |_| url_state.get().filters);

    let pending = RwSignal::new(FilterSet::new());
    Effect::new(move |_| {
        // Pending resets to the applied set on every URL change and
        // diverges only through checkbox toggles.
        pending.set(applied.get());
    });

    let (results, set_results) = signal(Vec::<PartRecord>::new());
    let (facets, set_facets) = signal(BTreeMap::<String, FacetDescriptor>::new());
    let (total, set_total) = signal(0u64);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    // Sort selection is view-local: it is not sent to the backend and
    // not persisted in the URL.
    // TODO: wire the selected order into the rendered list once sort
    // semantics are settled product-side.
    let sort_order = RwSignal::new(SortOrder::Relevance);

    Effect::new(move |_| {
        let state = url_state.get();
        if !state.q.is_empty() {
            set_page_title(&format!("Search results for \"{}\"", state.q));
        } else if !state.category.is_empty() {
            set_page_title(&state.category);
        } else {
            set_page_title("Search");
        }
    });

    let request_url = Memo::new(move |_| filters::build_query_url(&url_state.get()));

    // Requests are neither debounced nor canceled; a sequence counter
    // makes the newest issued request win over late completions.
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| match request_url.get() {
        Some(url) => {
            let seq = request_seq.get_value() + 1;
            request_seq.set_value(seq);
            set_loading.set(true);
            spawn_local(async move {
                let outcome = api::fetch_search(&url).await;
                if request_seq.get_value() != seq {
                    log::debug!("stale search response discarded: {url}");
                    return;
                }
                match outcome {
                    Ok(resp) => {
                        set_results.set(resp.results);
                        set_facets.set(resp.facets);
                        set_total.set(resp.total);
                        set_error.set(None);
                    }
                    Err(e) => {
                        log::warn!("search request failed: {e}");
                        set_results.set(Vec::new());
                        set_facets.set(BTreeMap::new());
                        set_total.set(0);
                        set_error.set(Some(e));
                    }
                }
                set_loading.set(false);
            });
        }
        None => {
            set_results.set(Vec::new());
            set_facets.set(BTreeMap::new());
            set_total.set(0);
            set_error.set(None);
            set_loading.set(false);
        }
    });

    let navigate = use_navigate();

    let apply_pending = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            let mut state = url_state.get_untracked();
            state.filters = pending.get_untracked();
            navigate(
                &filters::search_page_url(&state),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        })
    };

    let clear_all = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| {
            sort_order.set(SortOrder::Relevance);
            let state = filters::cleared(&url_state.get_untracked());
            navigate(
                &filters::search_page_url(&state),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        })
    };

    let remove_applied = {
        let navigate = navigate.clone();
        Callback::new(move |(key, value): (String, String)| {
            let mut state = url_state.get_untracked();
            state.filters = filters::remove_value(state.filters, &key, &value);
            navigate(
                &filters::search_page_url(&state),
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        })
    };

    let heading = move || {
        let state = url_state.get();
        if !state.q.is_empty() {
            format!("Search results for \"{}\"", state.q)
        } else if !state.category.is_empty() && !state.subcategory.is_empty() {
            format!("{} / {}", state.category, state.subcategory)
        } else if !state.category.is_empty() {
            state.category
        } else if let Some(m) = state.filters.get("manufacturer").and_then(|v| v.first()) {
            format!("Parts by {}", m)
        } else {
            "Search".to_string()
        }
    };

    view! {
        <div class="container page-section search-results">
            <div class="search-results__bar">
                <SearchBar />
            </div>

            {move || match request_url.get() {
                None => {
                    view! {
                        <div class="card">
                            <div class="card-body text-center prompt-state">
                                <h5>"Start your search"</h5>
                                <p class="text-muted">
                                    "Enter a search term or pick a category to browse parts."
                                </p>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                Some(_) => {
                    view! {
                        <div class="search-results__header">
                            <h5>
                                {heading}
                                <span class="text-muted search-results__count">
                                    {move || format!(" ({} results)", format_count(total.get()))}
                                </span>
                            </h5>
                            <select
                                class="form-control search-results__sort"
                                prop:value=move || sort_order.get().value().to_string()
                                on:change=move |ev| {
                                    sort_order.set(SortOrder::from_value(&event_target_value(&ev)))
                                }
                            >
                                {SortOrder::ALL
                                    .into_iter()
                                    .map(|order| {
                                        view! { <option value=order.value()>{order.label()}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                        <div class="filter-tags">
                            {move || {
                                let mut chips = Vec::new();
                                for (key, values) in applied.get() {
                                    let label = format_facet_label(&key);
                                    for value in values {
                                        let chip_label = format!("{}: {}", label, value);
                                        let key = key.clone();
                                        let value_for_remove = value.clone();
                                        chips
                                            .push(
                                                view! {
                                                    <FilterTag
                                                        label=chip_label
                                                        on_remove=Callback::new(move |_| {
                                                            remove_applied.run((key.clone(), value_for_remove.clone()))
                                                        })
                                                    />
                                                },
                                            );
                                    }
                                }
                                chips
                            }}
                        </div>

                        <div class="search-results__layout">
                            <FacetSidebar
                                facets=facets
                                pending=pending
                                applied=applied
                                on_apply=apply_pending
                                on_clear=clear_all
                            />

                            <section class="search-results__content">
                                {move || {
                                    if loading.get() {
                                        return view! {
                                            <div class="loading-state">
                                                <div class="spinner"></div>
                                                <p class="text-muted">"Loading results..."</p>
                                            </div>
                                        }
                                            .into_any();
                                    }
                                    if error.get().is_some() {
                                        return view! { <></> }.into_any();
                                    }
                                    let items = results.get();
                                    if items.is_empty() {
                                        let any_filters = filters::active_filter_count(&applied.get()) > 0;
                                        view! {
                                            <div class="card">
                                                <div class="card-body text-center">
                                                    <h5>"No results found"</h5>
                                                    <p class="text-muted">"Try adjusting your search or filters"</p>
                                                    {any_filters
                                                        .then(|| {
                                                            view! {
                                                                <button
                                                                    class="btn btn-primary"
                                                                    on:click=move |_| clear_all.run(())
                                                                >
                                                                    "Clear All Filters"
                                                                </button>
                                                            }
                                                        })}
                                                </div>
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        let applied_now = applied.get();
                                        view! {
                                            <div class="search-results__grid">
                                                {items
                                                    .into_iter()
                                                    .map(|part| {
                                                        view! { <PartCard part=part applied=applied_now.clone() /> }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }}
                            </section>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
