use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, MessageView};
use crate::{
    MessageKind, MessageLog, Operation, PromptKind, RequestId, Sender, SpiderWizard, WizardPhase,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A local precondition failed; nothing was sent.
    Validation,
    /// A request failed on the wire or its reply could not be decoded.
    Transport,
}

/// Blocking alert for the user. Never part of the message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    log: MessageLog,
    wizard: SpiderWizard,
    prompt: Option<PromptKind>,
    /// Outstanding requests, keyed in issue order.
    in_flight: BTreeMap<RequestId, Operation>,
    next_request_id: RequestId,
    notifications: Vec<Notification>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            messages: self
                .log
                .messages()
                .iter()
                .map(|message| MessageView {
                    sender: message.sender(),
                    kind: message.kind(),
                    text: message.displayed().to_string(),
                    complete: message.is_fully_revealed(),
                })
                .collect(),
            prompt: self.prompt,
            can_confirm: self.wizard.phase() != WizardPhase::Confirming
                && self.wizard.draft().is_some_and(|draft| draft.is_complete()),
        }
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn wizard(&self) -> &SpiderWizard {
        &self.wizard
    }

    pub fn pending_prompt(&self) -> Option<PromptKind> {
        self.prompt
    }

    pub fn in_flight(&self) -> impl Iterator<Item = (RequestId, Operation)> + '_ {
        self.in_flight.iter().map(|(id, op)| (*id, *op))
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Drains notifications queued since the last call, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub(crate) fn wizard_mut(&mut self) -> &mut SpiderWizard {
        &mut self.wizard
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn push_user_message(&mut self, text: &str) {
        self.log
            .push_instant(Sender::User, MessageKind::Text, text.to_string());
        self.dirty = true;
    }

    pub(crate) fn push_draft_card(&mut self) {
        if let Some(summary) = self.wizard.draft().map(|draft| draft.summary()) {
            self.log
                .push_instant(Sender::Assistant, MessageKind::DraftCard, summary);
            self.dirty = true;
        }
    }

    pub(crate) fn push_assistant_reply(&mut self, text: String) {
        self.log.push_typed(Sender::Assistant, text);
        self.dirty = true;
    }

    pub(crate) fn advance_reveals(&mut self) {
        if self.log.advance_reveals() > 0 {
            self.dirty = true;
        }
    }

    pub(crate) fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(kind);
        self.dirty = true;
    }

    pub(crate) fn close_prompt(&mut self) -> Option<PromptKind> {
        let closed = self.prompt.take();
        if closed.is_some() {
            self.dirty = true;
        }
        closed
    }

    pub(crate) fn register_request(&mut self, operation: Operation) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight.insert(request_id, operation);
        self.dirty = true;
        request_id
    }

    pub(crate) fn complete_request(&mut self, request_id: RequestId) -> Option<Operation> {
        let operation = self.in_flight.remove(&request_id);
        if operation.is_some() {
            self.dirty = true;
        }
        operation
    }

    pub(crate) fn notify(&mut self, kind: NotificationKind, text: impl Into<String>) {
        self.notifications.push(Notification {
            kind,
            text: text.into(),
        });
        self.dirty = true;
    }
}
