use std::cell::RefCell;
use std::rc::Rc;

use bridge_core::{OutboundMessage, TargetOrigin};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("parent window rejected message: {0}")]
    Rejected(String),
    #[error("no parent window to post to")]
    NoParent,
}

/// Outbound link to the embedding frame.
pub trait ParentChannel {
    fn post(&mut self, message: &OutboundMessage, target: &TargetOrigin)
        -> Result<(), ChannelError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostedMessage {
    pub message: OutboundMessage,
    pub target: TargetOrigin,
    /// The payload exactly as it would cross the frame boundary.
    pub json: String,
}

/// Channel that keeps every posted message for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingChannel {
    posted: Rc<RefCell<Vec<PostedMessage>>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<PostedMessage> {
        self.posted.borrow().clone()
    }

    /// `type` tags of everything posted so far, oldest first.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.posted
            .borrow()
            .iter()
            .map(|posted| posted.message.kind())
            .collect()
    }

    pub fn take(&self) -> Vec<PostedMessage> {
        std::mem::take(&mut *self.posted.borrow_mut())
    }
}

impl ParentChannel for RecordingChannel {
    fn post(
        &mut self,
        message: &OutboundMessage,
        target: &TargetOrigin,
    ) -> Result<(), ChannelError> {
        let json = message.to_json()?;
        self.posted.borrow_mut().push(PostedMessage {
            message: message.clone(),
            target: target.clone(),
            json,
        });
        Ok(())
    }
}
