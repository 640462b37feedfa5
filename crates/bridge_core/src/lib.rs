//! Bridge core: pure selection-reporter state machine and capture helpers.
mod config;
mod effect;
mod element;
mod message;
mod msg;
mod origin;
mod path;
mod snapshot;
mod source;
mod state;
mod update;

pub use config::{
    ConfigError, ReporterConfig, DEFAULT_DEBOUNCE, DEFAULT_SOURCE_FILE_ATTRIBUTE,
    DEFAULT_SOURCE_LINE_ATTRIBUTE,
};
pub use effect::Effect;
pub use element::{AncestorNode, ElementLike, SelectionRange, SelectionRect, SelectionSource};
pub use message::{OutboundMessage, ReadyPayload};
pub use msg::Msg;
pub use origin::TargetOrigin;
pub use path::structural_path;
pub use snapshot::{build_snapshot, capture_selection, truncate_chars, SelectionSnapshot};
pub use source::{find_source_location, parse_line_number, SourceLocation};
pub use state::ReporterState;
pub use update::update;
