use leptos::prelude::*;
use shared_types::{rooms_on_floor, Room, SlotList, TimeSlot, FLOORS};
use thaw::{Button, ButtonAppearance};

use crate::components::slot_row::SlotRow;
use crate::controls::{dispatch, BrowserNavigator, Control};
use crate::dialog::{DialogController, SignalDialog};

#[derive(Clone, Debug, PartialEq)]
pub struct FloorSection {
    pub floor: u8,
    pub rooms: Vec<RoomRow>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoomRow {
    pub room: Room,
    pub cells: Vec<TimeSlot>,
}

/// Builds one section per floor. Every room row is cut from the same list.
pub fn floor_sections(slots: &SlotList, limit: Option<usize>) -> Vec<FloorSection> {
    let cells = slots.limited(limit).to_vec();

    FLOORS
        .into_iter()
        .map(|floor| FloorSection {
            floor,
            rooms: rooms_on_floor(floor)
                .map(|room| RoomRow {
                    room,
                    cells: cells.clone(),
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn AvailabilityModal(
    dialog: SignalDialog,
    slots: RwSignal<SlotList>,
    slot_limit: Option<usize>,
) -> impl IntoView {
    let navigator = BrowserNavigator;

    view! {
        <Show when=move || dialog.is_open()>
            <div
                class="modal show"
                style="display: block"
                id="availabilityModal"
                tabindex="-1"
                role="dialog"
                aria-labelledby="availabilityModalLabel"
            >
                <div class="modal-dialog modal-lg modal-dialog-centered modal-dialog-scrollable">
                    <div class="modal-content">
                        <div class="modal-header">
                            <h3 class="modal-title" id="availabilityModalLabel">"Room Availability"</h3>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| dispatch(Control::CloseButton, &dialog, &navigator)
                            ></button>
                        </div>
                        <div class="modal-body">
                            <div class="modal-body-headers">
                                {move || {
                                    slots.with(|list| floor_sections(list, slot_limit))
                                        .into_iter()
                                        .map(|section| view! { <FloorBlock section=section dialog=dialog /> })
                                        .collect::<Vec<_>>()
                                }}
                            </div>
                        </div>
                        <div class="modal-footer">
                            <div class="modal-footer-text-div">
                                <span class="label label-avail"></span>
                                <p>"Available"</p>
                                <span class="label label-booked"></span>
                                <p>"Unavailable"</p>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                class="custom-button"
                                on_click=move |_| dispatch(Control::CloseButton, &dialog, &navigator)
                            >
                                "Close"
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
            <div
                class="modal-backdrop show"
                on:click=move |_| dispatch(Control::Backdrop, &dialog, &navigator)
            ></div>
        </Show>
    }
}

#[component]
fn FloorBlock(section: FloorSection, dialog: SignalDialog) -> impl IntoView {
    let navigator = BrowserNavigator;

    view! {
        <h4>{format!("Floor {}", section.floor)}</h4>
        {section.rooms.into_iter().map(|row| {
            let room = row.room;
            view! {
                <h5
                    class="room-link"
                    on:click=move |_| dispatch(Control::Room(room), &dialog, &navigator)
                >
                    {room.display_name()}
                </h5>
                <SlotRow cells=row.cells />
            }
        }).collect::<Vec<_>>()}
    }
}
