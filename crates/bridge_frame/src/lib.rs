#![forbid(unsafe_code)]

//! Selection reporter frame script.
//!
//! Compiled to `wasm32-unknown-unknown` and loaded inside an embedded page.
//! On start it announces itself to `window.parent`, then reports every
//! debounced text selection (or its disappearance) with positional and
//! source-mapping metadata. All behaviour lives in `bridge_core` and
//! `bridge_engine`; this crate only binds them to the browser.

#[cfg(target_arch = "wasm32")]
mod platform;

#[cfg(target_arch = "wasm32")]
pub use platform::{
    attach, AttachError, DateClock, ParentWindowChannel, WebElement, WebSelection, WindowTimer,
};
