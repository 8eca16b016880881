use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn Header() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let navigate = use_navigate();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let q = query.get();
        let q = q.trim();
        if q.is_empty() {
            return;
        }
        navigate(
            &format!("/search?q={}", urlencoding::encode(q)),
            NavigateOptions::default(),
        );
    };

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a href="/" class="site-header__brand">
                    {icon("cpu")}
                    <span>"PartSearch"</span>
                </a>

                <form class="site-header__search" on:submit=on_search>
                    <input
                        type="search"
                        placeholder="Search by part number, keyword, or description..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">
                        {icon("search")}
                    </button>
                </form>

                <nav class="site-header__nav">
                    <a href="/">"Categories"</a>
                    <a href="#manufacturers">"Manufacturers"</a>
                    <a href="#resources">"Resources"</a>
                    <a href="#cart" class="site-header__cart">
                        {icon("cart")}
                    </a>
                </nav>
            </div>
        </header>
    }
}
