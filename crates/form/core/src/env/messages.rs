//! Message collaborator.
//!
//! The turn/message/UI layer decides how text reaches the player; the
//! controller only hands it finished sentences.

/// Kind of message, so the UI can colour or filter it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageChannel {
    /// Entering a form or changing between forms.
    Transform,
    /// Leaving a form.
    Untransform,
    /// Swimming state changes and other body-state notes.
    Status,
}

pub trait MessageSink {
    fn emit(&mut self, channel: MessageChannel, text: &str);
}
