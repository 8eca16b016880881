use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Free-text part search box. Submitting navigates to the results page
/// with only `q` set; any previous filter selection is dropped.
#[component]
pub fn SearchBar(
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search millions of parts by number, keyword, or description...".to_string()
    } else {
        placeholder
    };

    let (query, set_query) = signal(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
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
        <form class="search-bar" on:submit=on_submit>
            <input
                type="search"
                class="search-bar__input"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
                aria-label="Search for electronic parts"
            />
            <button type="submit" class="btn btn-primary search-bar__submit">
                {icon("search")}
                <span>"Search"</span>
            </button>
        </form>
    }
}
