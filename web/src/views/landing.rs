use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    AvailabilityModal, Carousel, FloorSelector, LoadingView, NoticeBanner, BUILDING_SLIDES,
};
use crate::config::DisplayConfig;
use crate::dialog::SignalDialog;
use crate::slots::{load_slots, HttpSlotSource, SlotState};

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = use_context::<DisplayConfig>().unwrap_or_default();
    let dialog = use_context::<SignalDialog>().unwrap_or_default();
    let state = SlotState::new();

    // Effects only run in the browser, so the fetch happens once, after hydration.
    Effect::new(move |_| {
        spawn_local(async move {
            let source = HttpSlotSource::same_origin();
            load_slots(&source, config.normalization, &state).await;
        });
    });

    view! {
        <Show
            when=move || !state.loading.get()
            fallback=|| view! { <LoadingView /> }
        >
            <div
                class="landing-container"
                style="background-image: url(/assets/cs-building.jpg)"
            >
                <div class="header-div">
                    <img class="header-image" src="/assets/utrgv-logo.png" alt="UTRGV Logo" />
                    <p class="header-writing">"EIEAB Room Reservation System"</p>
                </div>
                <Carousel slides={&BUILDING_SLIDES[..]} interval_ms=config.carousel_interval_ms />
                <div class="parent-box">
                    <Show when=move || config.surface_fetch_errors>
                        <NoticeBanner notice=state.notice />
                    </Show>
                    <FloorSelector dialog=dialog />
                </div>
                <AvailabilityModal
                    dialog=dialog
                    slots=state.slots
                    slot_limit=config.slot_limit
                />
            </div>
        </Show>
    }
}
