//! Browser bindings for the selection reporter.

mod app;
mod channel;
mod dom;
mod logging;
mod timer;

pub use app::{attach, AttachError};
pub use channel::ParentWindowChannel;
pub use dom::{WebElement, WebSelection};
pub use timer::{DateClock, WindowTimer};

use bridge_core::ReporterConfig;
use bridge_logging::bridge_error;
use wasm_bindgen::prelude::*;

/// Module entry point, run by the `wasm-bindgen` glue once loaded.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::initialize(log::LevelFilter::Info);

    if let Err(err) = attach(ReporterConfig::default()) {
        bridge_error!("Selection reporter failed to attach: {}", err);
    }
}
