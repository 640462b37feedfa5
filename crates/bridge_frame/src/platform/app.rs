use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bridge_core::{ConfigError, ReporterConfig, TargetOrigin};
use bridge_engine::Reporter;
use bridge_logging::{bridge_info, bridge_trace};
use js_sys::Reflect;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DomStringList, Event, Window};

use super::{DateClock, ParentWindowChannel, WebSelection, WindowTimer};

type FrameReporter = Reporter<WebSelection, WindowTimer, ParentWindowChannel, DateClock>;

thread_local! {
    /// The frame's single reporter; kept here so it lives as long as the page.
    static REPORTER: RefCell<Option<Rc<RefCell<FrameReporter>>>> = const { RefCell::new(None) };
}

#[derive(Debug, Error)]
pub enum AttachError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("selection reporter is already attached")]
    AlreadyAttached,
    #[error("invalid reporter config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to register `{event}` listener: {message}")]
    Listener { event: &'static str, message: String },
}

/// Attaches the selection reporter to the current window.
///
/// Posts readiness to the parent immediately, then starts listening for
/// `mouseup` and `selectionchange` on the document.
pub fn attach(config: ReporterConfig) -> Result<(), AttachError> {
    if REPORTER.with(|slot| slot.borrow().is_some()) {
        return Err(AttachError::AlreadyAttached);
    }

    let window = web_sys::window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;

    let target = TargetOrigin::resolve(&ancestor_origins(&window));
    bridge_info!("Posting selections to origin {}", target.as_str());

    let reporter = Rc::new(RefCell::new(Reporter::new(
        config,
        target,
        WebSelection::new(window.clone()),
        WindowTimer::new(window.clone()),
        ParentWindowChannel::new(&window),
        DateClock,
    )?));

    let weak = Rc::downgrade(&reporter);
    reporter
        .borrow_mut()
        .timer_mut()
        .bind(Closure::new(move || {
            with_reporter(&weak, FrameReporter::on_debounce_elapsed);
        }));

    reporter.borrow_mut().attach();

    listen(&document, "mouseup", &reporter, FrameReporter::on_pointer_release)?;
    listen(
        &document,
        "selectionchange",
        &reporter,
        FrameReporter::on_selection_change,
    )?;

    REPORTER.with(|slot| *slot.borrow_mut() = Some(reporter));
    Ok(())
}

fn listen(
    document: &Document,
    event: &'static str,
    reporter: &Rc<RefCell<FrameReporter>>,
    handler: fn(&mut FrameReporter),
) -> Result<(), AttachError> {
    let weak = Rc::downgrade(reporter);
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        with_reporter(&weak, handler);
    });
    document
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(|err| AttachError::Listener {
            event,
            message: format!("{err:?}"),
        })?;
    // Listeners stay registered for the lifetime of the page.
    callback.forget();
    Ok(())
}

fn with_reporter(weak: &Weak<RefCell<FrameReporter>>, handler: fn(&mut FrameReporter)) {
    let Some(reporter) = weak.upgrade() else {
        return;
    };
    match reporter.try_borrow_mut() {
        Ok(mut guard) => handler(&mut *guard),
        Err(_) => bridge_trace!("Reporter busy; event dropped"),
    }
}

/// Reads `location.ancestorOrigins`, which some browsers do not expose.
fn ancestor_origins(window: &Window) -> Vec<String> {
    let location: JsValue = window.location().into();
    let Ok(value) = Reflect::get(&location, &JsValue::from_str("ancestorOrigins")) else {
        return Vec::new();
    };
    let Ok(list) = value.dyn_into::<DomStringList>() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}
