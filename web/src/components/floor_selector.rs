use leptos::prelude::*;
use shared_types::FLOORS;
use thaw::{Button, ButtonAppearance};

use crate::controls::{dispatch, BrowserNavigator, Control};
use crate::dialog::SignalDialog;

#[component]
pub fn FloorSelector(dialog: SignalDialog) -> impl IntoView {
    let navigator = BrowserNavigator;

    view! {
        <div class="floor-selection-div">
            <h1>"Room Reservation"</h1>
            <div class="buttons">
                {FLOORS.into_iter().map(|floor| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        class="custom-button"
                        on_click=move |_| dispatch(Control::Floor(floor), &dialog, &navigator)
                    >
                        {format!("Floor {}", floor)}
                    </Button>
                }).collect::<Vec<_>>()}
            </div>
        </div>
        <div class="rooms-available-div">
            <Button
                appearance=ButtonAppearance::Primary
                class="custom-button"
                attr:id="room-availability-button"
                on_click=move |_| dispatch(Control::AvailabilityTrigger, &dialog, &navigator)
            >
                "Availability"
            </Button>
        </div>
    }
}
