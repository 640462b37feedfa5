use bridge_logging::{bridge_debug, bridge_info, bridge_trace};

use crate::{Effect, Msg, OutboundMessage, ReporterState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ReporterState, msg: Msg) -> (ReporterState, Vec<Effect>) {
    let effects = match msg {
        Msg::Attached { url } => {
            if state.is_attached() {
                return (state, Vec::new());
            }
            state.mark_attached();
            bridge_info!("Selection reporter attached url={}", url);
            vec![Effect::Post(OutboundMessage::ready(url))]
        }
        trigger @ (Msg::PointerReleased | Msg::SelectionChanged) => {
            // Cancel before scheduling so at most one callback is ever armed.
            bridge_trace!("Debounce restarted by {:?}", trigger);
            state.set_capture_pending(true);
            vec![
                Effect::CancelPendingCapture,
                Effect::ScheduleCapture {
                    delay: state.debounce(),
                },
            ]
        }
        Msg::DebounceElapsed => {
            if !state.capture_pending() {
                return (state, Vec::new());
            }
            state.set_capture_pending(false);
            vec![Effect::ReadSelection]
        }
        Msg::SelectionRead(Some(snapshot)) => {
            bridge_debug!(
                "Selection captured text_len={} path={}",
                snapshot.text.len(),
                snapshot.path
            );
            state.store_selection(snapshot.clone());
            vec![Effect::Post(OutboundMessage::SelectionCaptured {
                data: snapshot,
            })]
        }
        Msg::SelectionRead(None) => {
            if state.clear_selection() {
                bridge_debug!("Selection cleared");
                vec![Effect::Post(OutboundMessage::SelectionCleared)]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
