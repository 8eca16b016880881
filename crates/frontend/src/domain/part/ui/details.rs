use crate::domain::part::mock;
use crate::domain::part::pricing;
use crate::shared::format::{format_count, format_total_price, format_unit_price};
use crate::shared::icons::icon;
use crate::shared::page_title::set_page_title;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

const PRICE_COLUMNS: [u32; 4] = [1, 10, 100, 1000];

#[component]
pub fn PartDetailPage() -> impl IntoView {
    let params = use_params_map();
    let part_number = Memo::new(move |_| params.get().get("part_number").unwrap_or_default());
    let details = Memo::new(move |_| mock::part_details(&part_number.get()));

    let selected_supplier = RwSignal::new(0usize);
    let quantity = RwSignal::new(1u32);
    let active_tab = RwSignal::new("pricing");

    // Supplier and quantity choices do not survive navigating to a
    // different part.
    Effect::new(move |_| {
        part_number.track();
        selected_supplier.set(0);
        quantity.set(1);
        active_tab.set("pricing");
    });

    Effect::new(move |_| match details.get() {
        Some(d) => set_page_title(&format!("{} - {}", d.part.part_number, d.part.manufacturer)),
        None => set_page_title("Part Not Found"),
    });

    view! {
        <div class="container page-section part-detail">
            {move || match details.get() {
                None => {
                    view! {
                        <div class="card">
                            <div class="card-body text-center">
                                <h4>"Part Not Found"</h4>
                                <p class="text-muted">
                                    {format!(
                                        "The part number \"{}\" could not be found in our database.",
                                        part_number.get(),
                                    )}
                                </p>
                                <a href="/" class="btn btn-primary">"Back to Search"</a>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                Some(d) => {
                    let part = d.part.clone();
                    let lead_time = d.lead_time.clone();
                    let suppliers = d.suppliers.clone();
                    let specifications = d.specifications.clone();
                    let documents = d.documents.clone();
                    let related = d.related.clone();

                    let category_href = format!(
                        "/search?category={}",
                        urlencoding::encode(&part.category),
                    );
                    let manufacturer_href = format!(
                        "/search?manufacturer={}",
                        urlencoding::encode(&part.manufacturer),
                    );

                    view! {
                        <nav class="breadcrumb">
                            <a href="/">"Home"</a>
                            <span>" / "</span>
                            <a href="/search">"Search"</a>
                            <span>" / "</span>
                            <a href=category_href.clone()>{part.category.clone()}</a>
                            <span>" / "</span>
                            <span class="breadcrumb__current">{part.part_number.clone()}</span>
                        </nav>

                        <div class="part-detail__header card">
                            <div class="card-body">
                                <h2>{part.part_number.clone()}</h2>
                                <p class="text-muted">
                                    "by " <a href=manufacturer_href>{part.manufacturer.clone()}</a>
                                </p>
                                <p class="part-detail__description">{part.description.clone()}</p>

                                <div class="part-detail__facts">
                                    <div>
                                        <small class="text-muted">"Category"</small>
                                        <strong>{part.category.clone()}</strong>
                                    </div>
                                    <div>
                                        <small class="text-muted">"Total Stock"</small>
                                        <strong class="text-success">
                                            {icon("check")}
                                            {format!(" {} units", format_count(part.stock))}
                                        </strong>
                                    </div>
                                    <div>
                                        <small class="text-muted">"Lead Time"</small>
                                        <strong>{lead_time.clone()}</strong>
                                    </div>
                                    <div>
                                        <small class="text-muted">"RoHS Status"</small>
                                        <strong class="text-success">"Compliant"</strong>
                                    </div>
                                </div>

                                <div class="part-detail__actions">
                                    <button class="btn btn-primary btn-sm">
                                        {icon("file-text")}
                                        "Datasheet"
                                    </button>
                                    <button class="btn btn-outline btn-sm">
                                        {icon("package")}
                                        "3D Model"
                                    </button>
                                    <button class="btn btn-outline btn-sm">
                                        {icon("download")}
                                        "Request Sample"
                                    </button>
                                </div>
                            </div>
                        </div>

                        <nav class="tab-nav">
                            {[
                                ("pricing", "Pricing & Availability"),
                                ("specifications", "Specifications"),
                                ("documents", "Documents"),
                                ("related", "Related Products"),
                            ]
                                .into_iter()
                                .map(|(tab, label)| {
                                    view! {
                                        <button
                                            class=move || {
                                                if active_tab.get() == tab {
                                                    "tab-link tab-link--active"
                                                } else {
                                                    "tab-link"
                                                }
                                            }
                                            on:click=move |_| active_tab.set(tab)
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </nav>

                        {move || match active_tab.get() {
                            "specifications" => {
                                view! {
                                    <div class="card">
                                        <div class="card-body">
                                            {specifications
                                                .iter()
                                                .cloned()
                                                .map(|(section, entries)| {
                                                    view! {
                                                        <div class="spec-section">
                                                            <h5>{section}</h5>
                                                            <table class="table table-striped">
                                                                <tbody>
                                                                    {entries
                                                                        .into_iter()
                                                                        .map(|(key, value)| {
                                                                            view! {
                                                                                <tr>
                                                                                    <td class="spec-section__key">
                                                                                        <strong>{key}</strong>
                                                                                    </td>
                                                                                    <td>{value}</td>
                                                                                </tr>
                                                                            }
                                                                        })
                                                                        .collect_view()}
                                                                </tbody>
                                                            </table>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            "documents" => {
                                view! {
                                    <div class="card">
                                        <div class="card-body">
                                            <h5>"Available Documents"</h5>
                                            <div class="document-grid">
                                                {documents
                                                    .iter()
                                                    .cloned()
                                                    .map(|doc| {
                                                        view! {
                                                            <div class="document-card">
                                                                <div>
                                                                    <h6>{doc.doc_type}</h6>
                                                                    <small class="text-muted">
                                                                        {format!("{} • {}", doc.name, doc.size)}
                                                                    </small>
                                                                </div>
                                                                <button class="btn btn-outline btn-sm">
                                                                    {icon("download")}
                                                                </button>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                            "related" => {
                                view! {
                                    <div class="product-grid">
                                        {related
                                            .iter()
                                            .cloned()
                                            .map(|p| {
                                                let href = format!(
                                                    "/part/{}",
                                                    urlencoding::encode(&p.part_number),
                                                );
                                                view! {
                                                    <div class="product-card">
                                                        <a href=href class="product-card__link">
                                                            <h6 class="product-card__number">{p.part_number.clone()}</h6>
                                                            <small class="text-muted">{p.manufacturer.clone()}</small>
                                                            <p class="product-card__description">{p.description.clone()}</p>
                                                            <div class="product-card__meta">
                                                                <span class="text-accent">{format_total_price(p.price)}</span>
                                                                <span class="badge badge--success">"In Stock"</span>
                                                            </div>
                                                        </a>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            _ => {
                                let offers = suppliers.clone();
                                let offers_for_unit = suppliers.clone();
                                let offers_for_total = suppliers.clone();
                                let offers_for_moq = suppliers.clone();
                                view! {
                                    <div class="card">
                                        <div class="card-body">
                                            <h5>"Supplier Pricing & Availability"</h5>
                                            <table class="table pricing-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Supplier"</th>
                                                        <th>"Stock"</th>
                                                        <th>"MOQ"</th>
                                                        <th>"1+"</th>
                                                        <th>"10+"</th>
                                                        <th>"100+"</th>
                                                        <th>"1000+"</th>
                                                        <th>"Lead Time"</th>
                                                        <th>"Action"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {offers
                                                        .iter()
                                                        .cloned()
                                                        .enumerate()
                                                        .map(|(index, offer)| {
                                                            let tiers = offer.breaks.clone();
                                                            let stock_badge = if offer.stock > 1000 {
                                                                "badge badge--success"
                                                            } else {
                                                                "badge badge--warning"
                                                            };
                                                            view! {
                                                                <tr class=move || {
                                                                    if selected_supplier.get() == index {
                                                                        "supplier-row supplier-row--selected"
                                                                    } else {
                                                                        "supplier-row"
                                                                    }
                                                                }>
                                                                    <td class="fw-semibold">{offer.name.clone()}</td>
                                                                    <td>
                                                                        <span class=stock_badge>{format_count(offer.stock)}</span>
                                                                    </td>
                                                                    <td>{offer.moq}</td>
                                                                    {PRICE_COLUMNS
                                                                        .into_iter()
                                                                        .map(|column| {
                                                                            let cell = pricing::break_at_quantity(&tiers, column)
                                                                                .map(|b| format_unit_price(b.unit_price))
                                                                                .unwrap_or_else(|| "-".to_string());
                                                                            view! { <td>{cell}</td> }
                                                                        })
                                                                        .collect_view()}
                                                                    <td>
                                                                        {icon("truck")}
                                                                        {format!(" {}", offer.lead_time)}
                                                                    </td>
                                                                    <td>
                                                                        <button
                                                                            class=move || {
                                                                                if selected_supplier.get() == index {
                                                                                    "btn btn-success btn-sm"
                                                                                } else {
                                                                                    "btn btn-outline btn-sm"
                                                                                }
                                                                            }
                                                                            on:click=move |_| selected_supplier.set(index)
                                                                        >
                                                                            {move || {
                                                                                if selected_supplier.get() == index {
                                                                                    "Selected"
                                                                                } else {
                                                                                    "Select"
                                                                                }
                                                                            }}
                                                                        </button>
                                                                    </td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </tbody>
                                            </table>

                                            <div class="order-box">
                                                <div>
                                                    <label class="form-label">"Quantity"</label>
                                                    <input
                                                        type="number"
                                                        class="form-control"
                                                        min=move || {
                                                            offers_for_moq
                                                                .get(selected_supplier.get())
                                                                .map(|o| o.moq)
                                                                .unwrap_or(1)
                                                                .to_string()
                                                        }
                                                        prop:value=move || quantity.get().to_string()
                                                        on:input=move |ev| {
                                                            let parsed = event_target_value(&ev)
                                                                .parse::<u32>()
                                                                .unwrap_or(1);
                                                            quantity.set(parsed.max(1));
                                                        }
                                                    />
                                                </div>
                                                <div>
                                                    <label class="form-label">"Unit Price"</label>
                                                    <div class="order-box__unit">
                                                        {move || {
                                                            offers_for_unit
                                                                .get(selected_supplier.get())
                                                                .and_then(|o| pricing::unit_price(o, quantity.get()))
                                                                .map(format_unit_price)
                                                                .unwrap_or_else(|| "-".to_string())
                                                        }}
                                                    </div>
                                                </div>
                                                <div>
                                                    <label class="form-label">"Total Price"</label>
                                                    <div class="order-box__total">
                                                        {move || {
                                                            offers_for_total
                                                                .get(selected_supplier.get())
                                                                .and_then(|o| pricing::total_price(o, quantity.get()))
                                                                .map(format_total_price)
                                                                .unwrap_or_else(|| "-".to_string())
                                                        }}
                                                    </div>
                                                </div>
                                                <div>
                                                    <button class="btn btn-primary order-box__submit">
                                                        {icon("cart")}
                                                        "Add to Cart"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
