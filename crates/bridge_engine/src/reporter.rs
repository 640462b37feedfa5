use std::collections::VecDeque;

use bridge_core::{
    capture_selection, update, ConfigError, Effect, Msg, ReporterConfig, ReporterState,
    SelectionSnapshot, SelectionSource, TargetOrigin,
};
use bridge_logging::{bridge_trace, bridge_warn};

use crate::{Clock, DebounceTimer, ParentChannel};

/// Runs the selection-reporter state machine against live collaborators.
///
/// One instance exists per page/frame. It owns the last-known selection (via
/// [`ReporterState`]) and the debounce timer, and it resolves nothing after
/// construction: the delivery target is fixed for its lifetime.
pub struct Reporter<S, T, C, K> {
    state: ReporterState,
    config: ReporterConfig,
    target: TargetOrigin,
    source: S,
    timer: T,
    channel: C,
    clock: K,
}

impl<S, T, C, K> Reporter<S, T, C, K>
where
    S: SelectionSource,
    T: DebounceTimer,
    C: ParentChannel,
    K: Clock,
{
    pub fn new(
        config: ReporterConfig,
        target: TargetOrigin,
        source: S,
        timer: T,
        channel: C,
        clock: K,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: ReporterState::new(&config),
            config,
            target,
            source,
            timer,
            channel,
            clock,
        })
    }

    /// Announces readiness to the parent. Only the first call has an effect.
    pub fn attach(&mut self) {
        let url = self.source.page_url();
        self.dispatch(Msg::Attached { url });
    }

    pub fn on_pointer_release(&mut self) {
        self.dispatch(Msg::PointerReleased);
    }

    pub fn on_selection_change(&mut self) {
        self.dispatch(Msg::SelectionChanged);
    }

    /// Called by the timer when the debounce period has passed.
    pub fn on_debounce_elapsed(&mut self) {
        self.dispatch(Msg::DebounceElapsed);
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                if let Some(follow_up) = self.run_effect(effect) {
                    inbox.push_back(follow_up);
                }
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::Post(message) => {
                if let Err(err) = self.channel.post(&message, &self.target) {
                    bridge_warn!("Dropped {} message: {}", message.kind(), err);
                }
                None
            }
            Effect::CancelPendingCapture => {
                self.timer.cancel_pending();
                None
            }
            Effect::ScheduleCapture { delay } => {
                bridge_trace!("Capture scheduled in {:?}", delay);
                self.timer.schedule(delay);
                None
            }
            Effect::ReadSelection => {
                let snapshot =
                    capture_selection(&self.source, &self.config, self.clock.now_millis());
                Some(Msg::SelectionRead(snapshot))
            }
        }
    }

    pub fn state(&self) -> &ReporterState {
        &self.state
    }

    pub fn last_selection(&self) -> Option<&SelectionSnapshot> {
        self.state.last_selection()
    }

    pub fn config(&self) -> &ReporterConfig {
        &self.config
    }

    pub fn target(&self) -> &TargetOrigin {
        &self.target
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
