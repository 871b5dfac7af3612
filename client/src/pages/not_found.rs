use leptos::prelude::*;

/// Fallback for unknown routes and unknown learning programs.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1 class="page__title">"Page not found"</h1>
            <p class="page__sub">"The page you are looking for does not exist or has moved."</p>
            <a href="/" class="btn btn--primary">"Back to IAISO"</a>
        </div>
    }
}
