use crate::{MessageKind, PromptKind, Sender};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Oldest first; the newest entry is always last.
    pub messages: Vec<MessageView>,
    pub prompt: Option<PromptKind>,
    /// A complete draft exists and no confirmation is outstanding.
    pub can_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub sender: Sender,
    pub kind: MessageKind,
    /// Text revealed so far.
    pub text: String,
    pub complete: bool,
}
