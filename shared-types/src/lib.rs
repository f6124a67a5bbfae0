mod room;
mod slot;

pub use room::{rooms_on_floor, Room, FLOORS, ROOMS};
pub use slot::{Normalization, SlotList, TimeSlot, FALLBACK_SLOT_COUNT};
