use std::time::Duration;

use bridge_engine::{Clock, DebounceTimer};
use bridge_logging::bridge_warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// `setTimeout`-backed debounce timer.
///
/// The expiry callback is bound after the reporter that owns this timer has
/// been placed behind an `Rc`, since the callback needs a handle back to it.
pub struct WindowTimer {
    window: Window,
    handle: Option<i32>,
    on_elapsed: Option<Closure<dyn FnMut()>>,
}

impl WindowTimer {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            handle: None,
            on_elapsed: None,
        }
    }

    pub fn bind(&mut self, on_elapsed: Closure<dyn FnMut()>) {
        self.on_elapsed = Some(on_elapsed);
    }
}

impl DebounceTimer for WindowTimer {
    fn schedule(&mut self, delay: Duration) {
        let Some(callback) = self.on_elapsed.as_ref() else {
            bridge_warn!("Debounce requested before a timer callback was bound");
            return;
        };
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => bridge_warn!("setTimeout failed: {:?}", err),
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

/// Wall clock from `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateClock;

impl Clock for DateClock {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}
