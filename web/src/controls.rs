use leptos::logging::log;
use shared_types::Room;

use crate::dialog::DialogController;

/// Full-page navigation, supplied by the host.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}

/// Every user-activated control on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Floor(u8),
    Room(Room),
    AvailabilityTrigger,
    CloseButton,
    Backdrop,
}

pub fn floor_path(floor: u8) -> String {
    format!("/floor{}", floor)
}

/// Room pages are addressed by floor only; the room code is not part of the path.
pub fn room_path(room: Room) -> String {
    format!("/room{}", room.floor)
}

/// Applies a control activation. Only the trigger, close button and backdrop
/// touch the dialog.
pub fn dispatch<D, N>(control: Control, dialog: &D, navigator: &N)
where
    D: DialogController,
    N: Navigator,
{
    match control {
        Control::Floor(floor) => {
            log!("Navigating to floor {}", floor);
            navigator.navigate(&floor_path(floor));
        }
        Control::Room(room) => {
            log!("Navigating to room {} on floor {}", room.code, room.floor);
            navigator.navigate(&room_path(room));
        }
        Control::AvailabilityTrigger => dialog.open(),
        Control::CloseButton | Control::Backdrop => dialog.close(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use shared_types::ROOMS;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FlagDialog {
        open: Cell<bool>,
    }

    impl DialogController for FlagDialog {
        fn open(&self) {
            self.open.set(true);
        }

        fn close(&self) {
            self.open.set(false);
        }

        fn is_open(&self) -> bool {
            self.open.get()
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    #[rstest]
    #[case(1, "/floor1")]
    #[case(2, "/floor2")]
    #[case(3, "/floor3")]
    fn floor_buttons_navigate_to_floor_page(#[case] floor: u8, #[case] expected: &str) {
        let dialog = FlagDialog::default();
        let navigator = RecordingNavigator::default();

        dispatch(Control::Floor(floor), &dialog, &navigator);

        assert_eq!(navigator.visited.borrow().as_slice(), &[expected.to_string()]);
    }

    #[test]
    fn room_headers_navigate_by_floor_only() {
        let dialog = FlagDialog::default();
        let navigator = RecordingNavigator::default();
        let room = Room::new("3.205", 3);

        dispatch(Control::Room(room), &dialog, &navigator);

        assert_eq!(navigator.visited.borrow().as_slice(), &["/room3".to_string()]);
    }

    #[test]
    fn rooms_sharing_a_floor_share_a_path() {
        let paths: Vec<_> = ROOMS
            .iter()
            .filter(|room| room.floor == 1)
            .map(|room| room_path(*room))
            .collect();

        assert_eq!(paths, vec!["/room1", "/room1"]);
    }

    #[test]
    fn trigger_opens_and_close_controls_close() {
        let dialog = FlagDialog::default();
        let navigator = RecordingNavigator::default();

        dispatch(Control::AvailabilityTrigger, &dialog, &navigator);
        assert!(dialog.is_open());

        dispatch(Control::CloseButton, &dialog, &navigator);
        assert!(!dialog.is_open());

        dispatch(Control::AvailabilityTrigger, &dialog, &navigator);
        dispatch(Control::Backdrop, &dialog, &navigator);
        assert!(!dialog.is_open());
        assert!(navigator.visited.borrow().is_empty());
    }

    #[rstest]
    #[case(Control::Floor(2))]
    #[case(Control::Room(Room::new("1.204", 1)))]
    fn navigation_controls_leave_dialog_alone(#[case] control: Control) {
        let dialog = FlagDialog::default();
        let navigator = RecordingNavigator::default();

        dispatch(Control::AvailabilityTrigger, &dialog, &navigator);
        dispatch(control, &dialog, &navigator);
        assert!(dialog.is_open());

        dispatch(Control::CloseButton, &dialog, &navigator);
        dispatch(control, &dialog, &navigator);
        assert!(!dialog.is_open());
    }
}
