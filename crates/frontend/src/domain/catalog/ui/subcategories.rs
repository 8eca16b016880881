use crate::domain::catalog::api::fetch_subcategories;
use crate::domain::catalog::icons::category_icon;
use crate::domain::search::filters::{search_page_url, SearchUrlState};
use crate::shared::components::SearchBar;
use crate::shared::format::format_count;
use crate::shared::icons::icon;
use crate::shared::page_title::set_page_title;
use contracts::catalog::SubcategorySummary;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

#[component]
pub fn SubcategoryPage() -> impl IntoView {
    let params = use_params_map();
    let category = Memo::new(move |_| params.get().get("category_name").unwrap_or_default());

    let (subcategories, set_subcategories) = signal(Vec::<SubcategorySummary>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Reloads whenever the route parameter changes.
    Effect::new(move |_| {
        let name = category.get();
        set_page_title(&format!("{} - Browse Subcategories", name));
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_subcategories(&name).await {
                Ok(v) => set_subcategories.set(v),
                Err(e) => {
                    log::warn!("subcategory listing failed: {e}");
                    set_error.set(Some(
                        "Failed to load subcategories. Please try again later.".to_string(),
                    ));
                    set_subcategories.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    });

    let navigate = use_navigate();

    let open_subcategory = {
        let navigate = navigate.clone();
        move |subcategory: String| {
            let state = SearchUrlState {
                category: category.get_untracked(),
                subcategory,
                ..SearchUrlState::default()
            };
            navigate(&search_page_url(&state), NavigateOptions::default());
        }
    };

    let view_all = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            let state = SearchUrlState {
                category: category.get_untracked(),
                ..SearchUrlState::default()
            };
            navigate(&search_page_url(&state), NavigateOptions::default());
        }
    };

    let retry = move |_: leptos::ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class="container page-section subcategory-page">
            <nav class="breadcrumb">
                <a href="/">"Home"</a>
                <span>" / "</span>
                <span class="breadcrumb__current">{move || category.get()}</span>
            </nav>

            <div class="subcategory-page__search">
                <SearchBar />
            </div>

            <div class="text-center subcategory-page__heading">
                <div class="subcategory-page__icon">
                    {move || icon(category_icon(&category.get()))}
                </div>
                <h1>{move || category.get()}</h1>
                <p class="lead text-muted">"Browse by Subcategory"</p>
            </div>

            <Show when=move || loading.get()>
                <div class="loading-state">
                    <div class="spinner"></div>
                    <p class="text-muted">"Loading subcategories..."</p>
                </div>
            </Show>

            {move || {
                if loading.get() {
                    return view! { <></> }.into_any();
                }
                if let Some(e) = error.get() {
                    return view! {
                        <div class="alert alert--danger text-center">
                            <h5>"Error Loading Subcategories"</h5>
                            <p>{e}</p>
                            <button class="btn btn-outline" on:click=retry>"Try Again"</button>
                            <a href="/" class="btn btn-outline">"Back to Home"</a>
                        </div>
                    }
                        .into_any();
                }
                let items = subcategories.get();
                if items.is_empty() {
                    return view! {
                        <div class="alert alert--info text-center">
                            <h5>"No Subcategories Found"</h5>
                            <p>
                                {format!("No subcategories are available for {}.", category.get())}
                            </p>
                            <button class="btn btn-primary" on:click=view_all.clone()>
                                {format!("Browse All {} Products", category.get())}
                            </button>
                        </div>
                    }
                        .into_any();
                }
                view! {
                    <div class="text-center subcategory-page__view-all">
                        <button class="btn btn-primary btn-lg" on:click=view_all.clone()>
                            {icon("search")}
                            {format!(" View All {} Products", category.get())}
                        </button>
                    </div>

                    <div class="category-grid">
                        {items
                            .into_iter()
                            .map(|row| {
                                let name = row.subcategory.clone();
                                let open = open_subcategory.clone();
                                view! {
                                    <div
                                        class="category-card subcategory-card"
                                        on:click=move |_| open(name.clone())
                                    >
                                        <div class="category-card__icon">{icon("folder")}</div>
                                        <h5>{row.subcategory.clone()}</h5>
                                        <span class="badge badge--secondary">
                                            {format!("{} Parts", format_count(row.count))}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}

            <div class="text-center subcategory-page__back">
                <a href="/" class="btn btn-outline">
                    {icon("arrow-left")}
                    " Back to All Categories"
                </a>
            </div>
        </div>
    }
}
