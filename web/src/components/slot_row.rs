use leptos::prelude::*;
use shared_types::TimeSlot;

#[component]
pub fn SlotRow(cells: Vec<TimeSlot>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table>
                <tbody>
                    <tr>
                        {cells.into_iter().map(|slot| {
                            let class = format!("time-slot {}", slot.status_class());
                            view! { <td class=class>{slot.time_label}</td> }
                        }).collect::<Vec<_>>()}
                    </tr>
                </tbody>
            </table>
        </div>
    }
}
