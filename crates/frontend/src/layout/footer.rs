use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container site-footer__columns">
                <div>
                    <h6>"PartSearch"</h6>
                    <p class="text-muted">
                        "Find electronic components from authorized distributors worldwide."
                    </p>
                </div>
                <div>
                    <h6>"Browse"</h6>
                    <ul>
                        <li><a href="/">"All Categories"</a></li>
                        <li><a href="/search?category=Sensors">"Sensors"</a></li>
                        <li><a href="/search?category=Passive%20Components">"Passive Components"</a></li>
                        <li><a href="/search?category=Connectors">"Connectors"</a></li>
                    </ul>
                </div>
                <div>
                    <h6>"Resources"</h6>
                    <ul>
                        <li><a href="#datasheets">"Datasheets"</a></li>
                        <li><a href="#reference">"Reference Designs"</a></li>
                        <li><a href="#support">"Support"</a></li>
                    </ul>
                </div>
            </div>
            <div class="container site-footer__legal">
                <small class="text-muted">"© 2025 PartSearch. All rights reserved."</small>
            </div>
        </footer>
    }
}
