use std::time::Duration;

use leptos::logging::warn;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
}

pub static BUILDING_SLIDES: [Slide; 3] = [
    Slide {
        src: "/assets/cs-building.jpg",
        alt: "EIEAB Building",
    },
    Slide {
        src: "/assets/Room2200.jpg",
        alt: "Study Room",
    },
    Slide {
        src: "/assets/map.jpg",
        alt: "Floor Map",
    },
];

/// Active slide index; wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

/// Running autoplay timer. Restarting clears the previous one first, so a
/// manual step always gets a full interval before the next automatic one.
#[derive(Debug)]
struct Autoplay<H> {
    handle: Option<H>,
}

impl<H> Default for Autoplay<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Autoplay<H> {
    fn restart(&mut self, clear: impl FnOnce(H), start: impl FnOnce() -> Option<H>) {
        self.stop(clear);
        self.handle = start();
    }

    fn stop(&mut self, clear: impl FnOnce(H)) {
        if let Some(handle) = self.handle.take() {
            clear(handle);
        }
    }
}

#[component]
pub fn Carousel(slides: &'static [Slide], interval_ms: u64) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(slides.len()));
    let autoplay = StoredValue::new(Autoplay::<IntervalHandle>::default());

    let rearm = move || {
        if interval_ms == 0 || slides.len() < 2 {
            return;
        }
        autoplay.update_value(|timer| {
            timer.restart(
                |handle| handle.clear(),
                || match set_interval_with_handle(
                    move || state.update(|s| s.advance()),
                    Duration::from_millis(interval_ms),
                ) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        warn!("Carousel autoplay unavailable: {:?}", e);
                        None
                    }
                },
            )
        });
    };

    // Autoplay only runs in the browser; the interval is cleared with the page.
    Effect::new(move |_| rearm());
    on_cleanup(move || {
        autoplay.try_update_value(|timer| timer.stop(|handle| handle.clear()));
    });

    view! {
        <div class="slideshow-div">
            <div class="carousel slide carousel-fade">
                <div class="carousel-inner">
                    {slides.iter().enumerate().map(|(i, slide)| {
                        view! {
                            <div class=move || {
                                if state.get().index() == i { "carousel-item active" } else { "carousel-item" }
                            }>
                                <img class="slideshow d-block w-100" src=slide.src alt=slide.alt />
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
                <button
                    class="carousel-control-prev"
                    type="button"
                    on:click=move |_| {
                        state.update(|s| s.retreat());
                        rearm();
                    }
                >
                    <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                    <span class="visually-hidden">"Previous"</span>
                </button>
                <button
                    class="carousel-control-next"
                    type="button"
                    on:click=move |_| {
                        state.update(|s| s.advance());
                        rearm();
                    }
                >
                    <span class="carousel-control-next-icon" aria-hidden="true"></span>
                    <span class="visually-hidden">"Next"</span>
                </button>
            </div>
        </div>
    }
}
