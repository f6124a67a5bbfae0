use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Shown for any path the display does not own, such as floor pages that are
/// not deployed alongside it.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-container">
            <div class="not-found-card">
                <h1 class="not-found-code">"404"</h1>
                <h2>"Page Not Found"</h2>
                <p>"This page is not available on the EIEAB room display."</p>
                <button
                    class="custom-button"
                    on:click=move |_| navigate("/", Default::default())
                >
                    "Back to Room Availability"
                </button>
            </div>
        </div>
    }
}
