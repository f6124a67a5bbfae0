use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// Sole content of the landing page until the slot request settles.
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading-container" role="status">
            <Spinner size=SpinnerSize::Large />
            <span class="visually-hidden">"Loading..."</span>
            <p class="loading-text">"Loading room information..."</p>
        </div>
    }
}
