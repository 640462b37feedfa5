use serde::Serialize;

use crate::SelectionSnapshot;

/// Notifications posted from the frame to its parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    /// Sent once when the reporter attaches.
    #[serde(rename = "VIBEHAMMER_READY")]
    Ready { data: ReadyPayload },
    #[serde(rename = "VIBEHAMMER_SELECTION")]
    SelectionCaptured { data: SelectionSnapshot },
    /// The selection went from non-empty to empty.
    #[serde(rename = "VIBEHAMMER_SELECTION_CLEARED")]
    SelectionCleared,
}

/// Body of the readiness notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadyPayload {
    pub url: String,
}

impl OutboundMessage {
    pub fn ready(url: impl Into<String>) -> Self {
        OutboundMessage::Ready {
            data: ReadyPayload { url: url.into() },
        }
    }

    /// The `type` tag the parent frame dispatches on.
    pub fn kind(&self) -> &'static str {
        match self {
            OutboundMessage::Ready { .. } => "VIBEHAMMER_READY",
            OutboundMessage::SelectionCaptured { .. } => "VIBEHAMMER_SELECTION",
            OutboundMessage::SelectionCleared => "VIBEHAMMER_SELECTION_CLEARED",
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
