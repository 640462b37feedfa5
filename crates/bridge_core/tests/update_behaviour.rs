mod common;

use std::time::Duration;

use bridge_core::{
    update, Effect, Msg, OutboundMessage, ReporterConfig, ReporterState, SelectionRect,
    SelectionSnapshot,
};
use common::init_logging;
use pretty_assertions::assert_eq;

fn snapshot(text: &str) -> SelectionSnapshot {
    SelectionSnapshot {
        text: text.to_string(),
        html: Some("<p>hello</p>".to_string()),
        tag_name: Some("P".to_string()),
        class_name: None,
        id: None,
        text_content: Some("hello".to_string()),
        path: "/html/body/p".to_string(),
        file: None,
        line: None,
        rect: SelectionRect::default(),
        url: "http://localhost/".to_string(),
        timestamp: 0,
    }
}

fn attached() -> ReporterState {
    let (state, _) = update(
        ReporterState::default(),
        Msg::Attached {
            url: "http://localhost/".to_string(),
        },
    );
    state
}

#[test]
fn attach_posts_readiness_once() {
    init_logging();
    let (state, effects) = update(
        ReporterState::default(),
        Msg::Attached {
            url: "http://localhost/page".to_string(),
        },
    );
    assert!(state.is_attached());
    assert_eq!(
        effects,
        vec![Effect::Post(OutboundMessage::ready("http://localhost/page"))]
    );

    let (_state, effects) = update(
        state,
        Msg::Attached {
            url: "http://localhost/page".to_string(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn triggers_cancel_then_reschedule() {
    init_logging();
    let config = ReporterConfig {
        debounce: Duration::from_millis(300),
        ..ReporterConfig::default()
    };
    let state = ReporterState::new(&config);

    for trigger in [Msg::PointerReleased, Msg::SelectionChanged] {
        let (next, effects) = update(state.clone(), trigger);
        assert!(next.capture_pending());
        assert_eq!(
            effects,
            vec![
                Effect::CancelPendingCapture,
                Effect::ScheduleCapture {
                    delay: Duration::from_millis(300)
                },
            ]
        );
    }
}

#[test]
fn elapsed_debounce_requests_a_read() {
    init_logging();
    let (state, _) = update(attached(), Msg::SelectionChanged);
    let (state, effects) = update(state, Msg::DebounceElapsed);
    assert!(!state.capture_pending());
    assert_eq!(effects, vec![Effect::ReadSelection]);
}

#[test]
fn stray_elapsed_is_ignored() {
    init_logging();
    let state = attached();
    let (next, effects) = update(state.clone(), Msg::DebounceElapsed);
    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn captured_selection_is_stored_and_posted() {
    init_logging();
    let (state, effects) = update(attached(), Msg::SelectionRead(Some(snapshot("hello"))));
    assert_eq!(state.last_selection(), Some(&snapshot("hello")));
    assert_eq!(
        effects,
        vec![Effect::Post(OutboundMessage::SelectionCaptured {
            data: snapshot("hello")
        })]
    );

    let (state, _) = update(state, Msg::SelectionRead(Some(snapshot("world"))));
    assert_eq!(state.last_selection(), Some(&snapshot("world")));
}

#[test]
fn empty_read_without_prior_selection_is_silent() {
    init_logging();
    let (state, effects) = update(attached(), Msg::SelectionRead(None));
    assert_eq!(state.last_selection(), None);
    assert!(effects.is_empty());
}

#[test]
fn clearing_is_reported_exactly_once() {
    init_logging();
    let (state, _) = update(attached(), Msg::SelectionRead(Some(snapshot("hello"))));

    let (state, effects) = update(state, Msg::SelectionRead(None));
    assert_eq!(state.last_selection(), None);
    assert_eq!(effects, vec![Effect::Post(OutboundMessage::SelectionCleared)]);

    let (state, effects) = update(state, Msg::SelectionRead(None));
    assert_eq!(state.last_selection(), None);
    assert!(effects.is_empty());
}
