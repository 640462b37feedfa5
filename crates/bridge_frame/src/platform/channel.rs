use bridge_core::{OutboundMessage, TargetOrigin};
use bridge_engine::{ChannelError, ParentChannel};
use web_sys::Window;

/// Posts to `window.parent`, which is the window itself on a top-level page.
pub struct ParentWindowChannel {
    parent: Option<Window>,
}

impl ParentWindowChannel {
    pub fn new(window: &Window) -> Self {
        Self {
            parent: window.parent().ok().flatten(),
        }
    }
}

impl ParentChannel for ParentWindowChannel {
    fn post(
        &mut self,
        message: &OutboundMessage,
        target: &TargetOrigin,
    ) -> Result<(), ChannelError> {
        let parent = self.parent.as_ref().ok_or(ChannelError::NoParent)?;
        let json = message.to_json()?;
        // Structured clone needs a plain object, not the JSON text.
        let payload = js_sys::JSON::parse(&json)
            .map_err(|err| ChannelError::Rejected(format!("{err:?}")))?;
        parent
            .post_message(&payload, target.as_str())
            .map_err(|err| ChannelError::Rejected(format!("{err:?}")))
    }
}
