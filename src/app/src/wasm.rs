//! WebAssembly FFI bindings for the Crux Core
//!
//! The page calls `process_event` with `Event::Initialize` once it is
//! mounted, which loads the device list. After that it forwards input-row
//! edits and button clicks as events, performs the returned `Http` and
//! `Timer` effects and hands their results back through `handle_response`.
//! `view` returns the registry, the draft and the feedback banners.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Initialize the WASM module and route `log` output to the browser console
///
/// This runs automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // a second init (e.g. hot reload) keeps the existing logger
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger already installed: {e}");
    }
}

/// Process a bincode-encoded `Event` from the page
///
/// Takes a bincode-serialized Event and returns bincode-serialized Effects.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.update(event_bytes, &mut effects)
        .expect("Failed to process event");
    effects
}

/// Snapshot of the model for the render cycle
///
/// Returns a bincode-serialized ViewModel.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    CORE.view(&mut view).expect("Failed to get view model");
    view
}

/// Resolve an `Http` or `Timer` effect
///
/// Takes an effect ID and bincode-serialized response data (HTTP responses
/// and timer outputs).
/// Returns bincode-serialized Effects that should be processed.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    )
    .expect("Failed to handle response");
    effects
}
