use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, MessageBar, MessageBarIntent};

/// Dismissible warning shown while the page runs on the fallback schedule.
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || notice.get().map(|message| view! {
            <div class="notice-banner" role="alert">
                <MessageBar intent=MessageBarIntent::Warning>
                    {message}
                </MessageBar>
                <Button
                    appearance=ButtonAppearance::Subtle
                    class="notice-dismiss"
                    on_click=move |_| notice.set(None)
                >
                    "×"
                </Button>
            </div>
        })}
    }
}
