use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlMediaElement, HtmlVideoElement, ScrollBehavior, ScrollIntoViewOptions, Storage, Window};

use crate::config;
use crate::state::navigation::SectionScroller;
use crate::state::theme::{Theme, ThemeHost};
use crate::state::video::MediaSink;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("local storage unavailable")]
    StorageUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn local_storage() -> Result<Storage, DomError> {
    window()?.local_storage()?.ok_or(DomError::StorageUnavailable)
}

/// Current location fragment including the leading `#`, empty when absent.
pub fn location_hash() -> Result<String, DomError> {
    Ok(window()?.location().hash()?)
}

/// Theme preference in `localStorage`, painted as a class on `<html>`.
pub struct BrowserThemeHost;

impl ThemeHost for BrowserThemeHost {
    fn stored_preference(&self) -> Result<Option<String>, DomError> {
        Ok(local_storage()?.get_item(config::THEME_STORAGE_KEY)?)
    }

    fn store_preference(&self, theme: Theme) -> Result<(), DomError> {
        local_storage()?.set_item(config::THEME_STORAGE_KEY, theme.as_str())?;
        Ok(())
    }

    fn prefers_dark(&self) -> bool {
        window()
            .ok()
            .and_then(|w| w.match_media(config::PREFERS_DARK_QUERY).ok())
            .flatten()
            .map_or(false, |mq| mq.matches())
    }

    fn mark_document(&self, theme: Theme) -> Result<(), DomError> {
        let root = document()?.document_element().ok_or(DomError::NoRootElement)?;
        let classes = root.class_list();
        if theme.is_dark() {
            classes.add_1(config::DARK_CLASS)?;
        } else {
            classes.remove_1(config::DARK_CLASS)?;
        }
        Ok(())
    }
}

pub struct BrowserScroller;

impl SectionScroller for BrowserScroller {
    fn scroll_to(&self, anchor: &str) -> bool {
        let Some(element) = document().ok().and_then(|doc| doc.get_element_by_id(anchor)) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

impl MediaSink for HtmlVideoElement {
    fn play(&self) {
        match HtmlMediaElement::play(self) {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Video refused to play: {}", DomError::from(e));
                }
            }),
            Err(e) => log::warn!("Video play failed: {}", DomError::from(e)),
        }
    }

    fn pause(&self) {
        if let Err(e) = HtmlMediaElement::pause(self) {
            log::warn!("Video pause failed: {}", DomError::from(e));
        }
    }

    fn set_muted(&self, muted: bool) {
        HtmlMediaElement::set_muted(self, muted);
    }

    fn set_volume(&self, amount: f64) {
        HtmlMediaElement::set_volume(self, amount);
    }
}
