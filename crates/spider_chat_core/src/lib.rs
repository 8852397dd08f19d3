//! Spider chat core: pure state machine for the chat dispatcher, the spider
//! configuration wizard and the message log.
mod command;
mod effect;
mod message_log;
mod msg;
mod prompt;
mod state;
mod update;
mod view_model;
mod wizard;

pub use command::{classify, Command};
pub use effect::{Effect, Operation, RequestId};
pub use message_log::{Message, MessageKind, MessageLog, Sender};
pub use msg::Msg;
pub use prompt::PromptKind;
pub use state::{AppState, Notification, NotificationKind};
pub use update::update;
pub use view_model::{AppViewModel, MessageView};
pub use wizard::{ConfirmRejected, SpiderConfigDraft, SpiderWizard, WizardPhase};
