pub mod availability_modal;
pub mod carousel;
pub mod error;
pub mod floor_selector;
pub mod loading;
pub mod slot_row;

// Re-export commonly used types
pub use availability_modal::AvailabilityModal;
pub use carousel::{Carousel, BUILDING_SLIDES};
pub use error::NoticeBanner;
pub use floor_selector::FloorSelector;
pub use loading::LoadingView;
pub use slot_row::SlotRow;
