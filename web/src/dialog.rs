use leptos::prelude::*;

/// Show/hide capability for a layered panel with a backdrop.
///
/// The page receives this from its host instead of reaching for a global
/// widget library.
pub trait DialogController {
    fn open(&self);
    fn close(&self);
    fn is_open(&self) -> bool;
}

/// Dialog visibility held in a signal, rendered by the page itself.
#[derive(Clone, Copy)]
pub struct SignalDialog {
    open: RwSignal<bool>,
}

impl SignalDialog {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }
}

impl Default for SignalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogController for SignalDialog {
    fn open(&self) {
        self.open.set(true);
    }

    fn close(&self) {
        self.open.set(false);
    }

    /// Tracked read, so views depending on it re-render.
    fn is_open(&self) -> bool {
        self.open.get()
    }
}
