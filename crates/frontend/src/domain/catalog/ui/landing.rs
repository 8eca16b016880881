use crate::domain::catalog::api::fetch_categories;
use crate::domain::catalog::icons::category_icon;
use crate::domain::part::mock::{FEATURED_MANUFACTURERS, FEATURED_PARTS};
use crate::shared::components::SearchBar;
use crate::shared::format::{format_count, format_total_price};
use crate::shared::icons::icon;
use crate::shared::page_title::set_page_title;
use contracts::catalog::CategorySummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LandingPage() -> impl IntoView {
    let (categories, set_categories) = signal(Vec::<CategorySummary>::new());
    let (error, set_error) = signal(None::<String>);

    let load_categories = move || {
        spawn_local(async move {
            match fetch_categories().await {
                Ok(v) => {
                    set_categories.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("category listing failed: {e}");
                    set_error.set(Some("Failed to load categories. Please try again later.".to_string()));
                }
            }
        });
    };

    set_page_title("Electronic Components & Parts Search");
    load_categories();

    view! {
        <section class="hero-section">
            <div class="container text-center">
                <h1>"Find Electronic Components Instantly"</h1>
                <p class="lead">"Search millions of parts from authorized distributors worldwide"</p>
                <SearchBar />
                <small class="hero-section__hint">
                    "Popular searches: STM32, ESP32, Arduino, Raspberry Pi, LM358"
                </small>
            </div>
        </section>

        <section class="trust-strip">
            <div class="container trust-strip__items">
                <div>{icon("truck")}<small>"Fast Shipping"</small></div>
                <div>{icon("shield")}<small>"100% Authentic"</small></div>
                <div>{icon("check")}<small>"ISO Certified"</small></div>
                <div>{icon("wifi")}<small>"24/7 Support"</small></div>
            </div>
        </section>

        <section class="page-section">
            <div class="container">
                <h2 class="text-center">"Browse by Category"</h2>
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
                <div class="category-grid">
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| {
                                let href = format!("/category/{}", urlencoding::encode(&c.category));
                                view! {
                                    <a href=href class="category-card">
                                        <div class="category-card__icon">{icon(category_icon(&c.category))}</div>
                                        <h6>{c.category.clone()}</h6>
                                        <small class="text-muted">
                                            {format!("{} Parts", format_count(c.count))}
                                        </small>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>

        <section class="page-section page-section--muted">
            <div class="container">
                <div class="section-heading">
                    <h2>"Featured Products"</h2>
                    <a href="/search" class="btn btn-outline">"View All"</a>
                </div>
                <div class="product-grid">
                    {FEATURED_PARTS
                        .iter()
                        .cloned()
                        .map(|part| {
                            let href = format!("/part/{}", urlencoding::encode(&part.part_number));
                            view! {
                                <div class="product-card">
                                    <a href=href class="product-card__link">
                                        <h6 class="product-card__number">{part.part_number.clone()}</h6>
                                        <small class="text-muted">{part.manufacturer.clone()}</small>
                                        <p class="product-card__description">{part.description.clone()}</p>
                                        <div class="product-card__meta">
                                            <span class="text-accent">{format_total_price(part.price)}</span>
                                            <small class="text-muted">
                                                {format!("{} units", format_count(part.stock))}
                                            </small>
                                        </div>
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="page-section" id="manufacturers">
            <div class="container text-center">
                <h2>"Trusted Manufacturers"</h2>
                <div class="manufacturer-row">
                    {FEATURED_MANUFACTURERS
                        .into_iter()
                        .map(|manufacturer| {
                            let href = format!(
                                "/search?manufacturer={}",
                                urlencoding::encode(manufacturer),
                            );
                            view! {
                                <a href=href class="btn btn-outline btn-sm">
                                    {manufacturer}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="cta-section">
            <div class="container text-center">
                <h3>"Need Help Finding Parts?"</h3>
                <p>"Our experts are ready to help you source hard-to-find components"</p>
                <button class="btn btn-light">"Request a Quote"</button>
            </div>
        </section>
    }
}
