//! Browser capabilities the page state depends on.
//!
//! Consent persistence and anchor scrolling only ever touch the browser through
//! [`KeyValueStore`] and [`Viewport`], so the state logic can run against the
//! in-memory doubles in [`testing`] without a DOM.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{window, ScrollBehavior, ScrollToOptions, Storage};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("persistent storage is not available in this context")]
    Unavailable,
    #[error("failed to read key: {0}")]
    Read(String),
    #[error("failed to write key: {0}")]
    Write(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait Viewport {
    /// Top edge of the element with `id`, measured from the top of the document.
    fn element_top(&self, id: &str) -> Option<f64>;
    fn smooth_scroll_to(&self, top: f64);
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<Storage, StorageError> {
        // local_storage() throws in sandboxed iframes and with storage disabled
        window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(js_error(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(js_error(e)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn element_top(&self, id: &str) -> Option<f64> {
        let window = window()?;
        let element = window.document()?.get_element_by_id(id)?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(element.get_bounding_client_rect().top() + scroll_y)
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
