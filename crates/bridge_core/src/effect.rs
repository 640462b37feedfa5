use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Deliver a notification to the parent frame.
    Post(crate::OutboundMessage),
    /// Drop the pending debounce callback, if any.
    CancelPendingCapture,
    /// Arm the debounce timer; it reports back with `Msg::DebounceElapsed`.
    ScheduleCapture { delay: Duration },
    /// Read the page selection and report back with `Msg::SelectionRead`.
    ReadSelection,
}
