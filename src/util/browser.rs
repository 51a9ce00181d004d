//! Browser services: confirmation prompts, timers and mount-element config.
//!
//! Requires a browser environment. Native builds get inert fallbacks
//! (prompts decline, timers never fire, config is the default) so the
//! controller can be constructed anywhere.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use std::time::Duration;

use crate::board::Host;
use crate::config::{BoardConfig, ConfigError};

/// Id of the element the app mounts into and reads `data-*` config from.
pub const MOUNT_ID: &str = "app";

/// [`Host`] backed by `window.confirm` and `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn confirm(&self, prompt: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(prompt).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = prompt;
            false
        }
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        #[cfg(feature = "csr")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, task).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, task);
        }
    }
}

/// The `#app` element, if the page has one.
#[cfg(feature = "csr")]
pub fn mount_element() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast as _;

    web_sys::window()?
        .document()?
        .get_element_by_id(MOUNT_ID)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Read [`BoardConfig`] from the mount element's attributes.
///
/// # Errors
///
/// Propagates [`ConfigError`] from [`BoardConfig::from_lookup`].
pub fn read_config() -> Result<BoardConfig, ConfigError> {
    #[cfg(feature = "csr")]
    {
        let root = mount_element();
        BoardConfig::from_lookup(|key| root.as_ref().and_then(|el| el.get_attribute(key)))
    }
    #[cfg(not(feature = "csr"))]
    {
        Ok(BoardConfig::default())
    }
}
