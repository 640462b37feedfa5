//! Bridge engine: effect execution and DOM backends for the selection reporter.
mod channel;
mod html;
mod reporter;
mod timer;

pub use channel::{ChannelError, ParentChannel, PostedMessage, RecordingChannel};
pub use html::{HtmlElement, HtmlPage, SelectError};
pub use reporter::Reporter;
pub use timer::{Clock, DebounceTimer, ManualTimer};
