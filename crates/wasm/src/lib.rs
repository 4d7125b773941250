#![deny(unsafe_code)]

pub mod dom;
pub mod error;
pub mod http;
/// Listener registration for the dashboard widgets.
pub mod mount;

use gloo_events::EventListener;
use mindful_widgets::WidgetConfig;
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use error::{MountError, MountResult};
pub use mount::{Mounted, mount};

/// Id of the optional inline JSON element holding [`WidgetConfig`] overrides.
pub const CONFIG_ELEMENT_ID: &str = "mindful-config";

/// Initialize WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Mindful widgets module initialized");

    let document = dom::document()?;
    if document.ready_state() == "loading" {
        mount_on_load(document);
    } else {
        mount_page(&document);
    }

    Ok(())
}

/// Defers [`mount_page`] until the document fires `DOMContentLoaded`.
pub fn mount_on_load(document: Document) {
    let target = document.clone();
    EventListener::once(&target, "DOMContentLoaded", move |_| {
        mount_page(&document);
    })
    .forget();
}

/// Reads page config overrides and mounts both widgets.
pub fn mount_page(document: &Document) -> Mounted {
    let overrides = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let config = WidgetConfig::load(overrides.as_deref());
    mount(document, &config)
}
