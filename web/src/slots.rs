//! Time slot retrieval with the fallback policy.
//!
//! The page calls [`load_slots`] once after mount. A failed fetch never reaches
//! the caller: it is logged and the generated schedule is stored instead.

use std::future::Future;

use leptos::logging::{error, log};
use leptos::prelude::*;
use shared_types::{Normalization, SlotList};

use crate::config::SLOTS_PATH;
use crate::error::SlotFetchError;

pub trait SlotSource {
    fn fetch(&self) -> impl Future<Output = Result<SlotList, SlotFetchError>>;
}

/// Receives the outcome of a load. Implemented by [`SlotState`] for the page.
pub trait SlotSink {
    fn set_loading(&self, loading: bool);
    fn set_slots(&self, slots: SlotList);
    fn set_notice(&self, notice: Option<String>);
}

/// Reads the slot list over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpSlotSource {
    client: reqwest::Client,
    url: Option<String>,
}

impl HttpSlotSource {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: Some(endpoint_url(base)),
        }
    }

    /// Targets the endpoint on the origin the page was served from.
    pub fn same_origin() -> Self {
        Self {
            client: reqwest::Client::new(),
            url: browser_origin().map(|origin| endpoint_url(&origin)),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl SlotSource for HttpSlotSource {
    async fn fetch(&self) -> Result<SlotList, SlotFetchError> {
        let url = self.url.as_deref().ok_or(SlotFetchError::NoOrigin)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SlotFetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_slots(&body)
    }
}

pub fn endpoint_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), SLOTS_PATH)
}

pub fn decode_slots(body: &str) -> Result<SlotList, SlotFetchError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(feature = "hydrate")]
fn browser_origin() -> Option<String> {
    web_sys::window().and_then(|window| window.location().origin().ok())
}

#[cfg(not(feature = "hydrate"))]
fn browser_origin() -> Option<String> {
    None
}

/// Clears the loading flag when dropped, whichever way the load ends.
struct LoadingGuard<'a, S: SlotSink>(&'a S);

impl<S: SlotSink> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.0.set_loading(false);
    }
}

/// Fetches the slot list once and hands either the normalized response or the
/// fallback schedule to `sink`.
pub async fn load_slots<Src, Snk>(source: &Src, normalization: Normalization, sink: &Snk)
where
    Src: SlotSource,
    Snk: SlotSink,
{
    sink.set_loading(true);
    let _guard = LoadingGuard(sink);

    match source.fetch().await {
        Ok(slots) => {
            log!("Loaded {} time slots", slots.len());
            sink.set_slots(slots.normalized(normalization));
            sink.set_notice(None);
        }
        Err(e) => {
            error!("Failed to fetch time slots: {}", e);
            sink.set_slots(SlotList::fallback());
            sink.set_notice(Some(
                "Live availability could not be loaded. Showing the default schedule.".to_string(),
            ));
        }
    }
}

/// Reactive slot state owned by the landing page.
#[derive(Clone, Copy)]
pub struct SlotState {
    pub loading: RwSignal<bool>,
    pub slots: RwSignal<SlotList>,
    pub notice: RwSignal<Option<String>>,
}

impl SlotState {
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(true),
            slots: RwSignal::new(SlotList::default()),
            notice: RwSignal::new(None),
        }
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self::new()
    }
}

// `try_set` makes a load that finishes after the page is disposed a no-op.
impl SlotSink for SlotState {
    fn set_loading(&self, loading: bool) {
        let _ = self.loading.try_set(loading);
    }

    fn set_slots(&self, slots: SlotList) {
        let _ = self.slots.try_set(slots);
    }

    fn set_notice(&self, notice: Option<String>) {
        let _ = self.notice.try_set(notice);
    }
}
