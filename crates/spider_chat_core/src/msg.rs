#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted a line from the input box.
    InputSubmitted(String),
    /// User clicked the start control.
    StartSpiderClicked,
    /// User clicked the stop control.
    StopSpiderClicked,
    /// Draft card: add URL.
    AddUrlClicked,
    /// Draft card: edit description.
    EditDescriptionClicked,
    /// Draft card: confirm setup.
    ConfirmClicked,
    /// Stop waiting on an outstanding confirmation.
    AbandonClicked,
    /// User answered the pending prompt.
    PromptAnswered(String),
    /// User dismissed the pending prompt.
    PromptCancelled,
    /// Transport finished a request. `Err` carries the failure reason.
    BackendReplied {
        request_id: crate::RequestId,
        result: Result<String, String>,
    },
    /// Reveal timer tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}

impl Msg {
    /// Messages that originate from the user rather than from timers or the backend.
    ///
    /// Blank input is not an action: it is dropped before anything happens.
    pub(crate) fn is_user_action(&self) -> bool {
        match self {
            Msg::InputSubmitted(text) => !text.trim().is_empty(),
            Msg::PromptAnswered(_)
            | Msg::PromptCancelled
            | Msg::BackendReplied { .. }
            | Msg::Tick
            | Msg::NoOp => false,
            _ => true,
        }
    }
}
