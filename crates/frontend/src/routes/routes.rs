use crate::domain::catalog::ui::landing::LandingPage;
use crate::domain::catalog::ui::subcategories::SubcategoryPage;
use crate::domain::part::ui::details::PartDetailPage;
use crate::domain::search::ui::SearchResultsPage;
use crate::layout::footer::Footer;
use crate::layout::header::Header;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container page-section">
            <div class="card">
                <div class="card-body text-center">
                    <h4>"Page Not Found"</h4>
                    <p class="text-muted">"The page you requested does not exist."</p>
                    <a href="/" class="btn btn-primary">"Back to Search"</a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/category/:category_name") view=SubcategoryPage />
                    <Route path=path!("/search") view=SearchResultsPage />
                    <Route path=path!("/part/:part_number") view=PartDetailPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
