use chat_logging::{chat_debug, chat_info, chat_warn};

use crate::{
    classify, AppState, Command, ConfirmRejected, Effect, Msg, NotificationKind, Operation,
    PromptKind, RequestId,
};

const INCOMPLETE_DRAFT_NOTICE: &str = "Please add at least one URL and a description.";
const CONFIRM_PENDING_NOTICE: &str = "Spider setup is already being submitted.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // A prompt blocks the conversation; any other user action dismisses it.
    if msg.is_user_action() {
        if let Some(kind) = state.close_prompt() {
            chat_debug!("Prompt {:?} dismissed by {:?}", kind, msg);
        }
    }

    let effects = match msg {
        Msg::InputSubmitted(raw) => {
            let text = raw.trim();
            if text.is_empty() {
                return (state, Vec::new());
            }
            // The utterance is echoed before anything it triggers.
            state.push_user_message(text);
            dispatch(&mut state, classify(text), text)
        }
        Msg::StartSpiderClicked => {
            start_setup(&mut state);
            Vec::new()
        }
        Msg::StopSpiderClicked => vec![stop_crawl(&mut state)],
        Msg::AddUrlClicked => {
            open_draft_prompt(&mut state, PromptKind::SpiderUrl);
            Vec::new()
        }
        Msg::EditDescriptionClicked => {
            open_draft_prompt(&mut state, PromptKind::SpiderDescription);
            Vec::new()
        }
        Msg::ConfirmClicked => confirm(&mut state),
        Msg::AbandonClicked => {
            if state.wizard_mut().abandon() {
                chat_info!("Outstanding spider confirmation abandoned");
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PromptAnswered(answer) => answer_prompt(&mut state, answer),
        Msg::PromptCancelled => {
            if let Some(kind) = state.close_prompt() {
                chat_debug!("Prompt {:?} cancelled", kind);
            }
            Vec::new()
        }
        Msg::BackendReplied { request_id, result } => {
            apply_reply(&mut state, request_id, result);
            Vec::new()
        }
        Msg::Tick => {
            state.advance_reveals();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn dispatch(state: &mut AppState, command: Command, text: &str) -> Vec<Effect> {
    chat_debug!("Dispatching {:?}", command);
    match command {
        Command::PlainChat => {
            let request_id = state.register_request(Operation::Chat);
            vec![Effect::SendChat {
                request_id,
                message: text.to_string(),
            }]
        }
        // Editing restarts from an empty draft; prior URLs are not carried over.
        Command::StartSpider | Command::EditSpider => {
            start_setup(state);
            Vec::new()
        }
        Command::StopSpider => vec![stop_crawl(state)],
        Command::UpdateMappings => {
            state.open_prompt(PromptKind::KeywordMappings);
            Vec::new()
        }
        Command::UpdateRules => {
            state.open_prompt(PromptKind::SpiderRules);
            Vec::new()
        }
    }
}

fn start_setup(state: &mut AppState) {
    if state.wizard().draft().is_some() {
        chat_info!("Replacing existing spider draft");
    }
    state.wizard_mut().start_setup();
    state.push_draft_card();
}

fn stop_crawl(state: &mut AppState) -> Effect {
    let request_id = state.register_request(Operation::StopCrawl);
    Effect::StopCrawl { request_id }
}

fn open_draft_prompt(state: &mut AppState, kind: PromptKind) {
    if state.wizard().draft().is_none() {
        chat_debug!("Ignoring {:?}: no spider draft", kind);
        return;
    }
    state.open_prompt(kind);
}

fn confirm(state: &mut AppState) -> Vec<Effect> {
    match state.wizard_mut().begin_confirm() {
        Ok(draft) => {
            let request_id = state.register_request(Operation::StartCrawl);
            let (urls, description) = draft.into_parts();
            chat_info!(
                "Submitting spider config request_id={} urls={}",
                request_id,
                urls.len()
            );
            vec![Effect::StartCrawl {
                request_id,
                urls,
                description,
            }]
        }
        Err(ConfirmRejected::Incomplete) => {
            state.notify(NotificationKind::Validation, INCOMPLETE_DRAFT_NOTICE);
            Vec::new()
        }
        Err(ConfirmRejected::InFlight) => {
            chat_debug!("Ignoring confirm: previous confirmation still outstanding");
            state.notify(NotificationKind::Validation, CONFIRM_PENDING_NOTICE);
            Vec::new()
        }
    }
}

fn answer_prompt(state: &mut AppState, answer: String) -> Vec<Effect> {
    let Some(kind) = state.close_prompt() else {
        chat_warn!("Prompt answer received with no prompt pending");
        return Vec::new();
    };
    if answer.is_empty() {
        return Vec::new();
    }

    match kind {
        PromptKind::SpiderUrl => {
            if state.wizard_mut().add_url(answer).is_some() {
                state.push_draft_card();
            }
            Vec::new()
        }
        PromptKind::SpiderDescription => {
            if state.wizard_mut().set_description(answer).is_some() {
                state.push_draft_card();
            }
            Vec::new()
        }
        PromptKind::KeywordMappings => {
            let request_id = state.register_request(Operation::UpdateKeywordMappings);
            vec![Effect::UpdateKeywordMappings {
                request_id,
                body: answer,
            }]
        }
        PromptKind::SpiderRules => {
            let request_id = state.register_request(Operation::UpdateSpiderRules);
            vec![Effect::UpdateSpiderRules {
                request_id,
                body: answer,
            }]
        }
    }
}

fn apply_reply(state: &mut AppState, request_id: RequestId, result: Result<String, String>) {
    let Some(operation) = state.complete_request(request_id) else {
        chat_warn!("Reply for unknown request_id={}", request_id);
        return;
    };
    if operation == Operation::StartCrawl {
        state.wizard_mut().finish_confirm();
    }

    match result {
        Ok(status) => {
            chat_debug!(
                "{:?} request_id={} replied ({} bytes)",
                operation,
                request_id,
                status.len()
            );
            state.push_assistant_reply(format!("{}{}", operation.reply_prefix(), status));
        }
        Err(reason) => {
            chat_warn!(
                "{:?} request_id={} failed: {}",
                operation,
                request_id,
                reason
            );
            state.notify(NotificationKind::Transport, operation.failure_notice());
        }
    }
}
