use std::sync::Once;

use spider_chat_core::{
    update, AppState, Effect, MessageKind, Msg, NotificationKind, PromptKind, Sender, WizardPhase,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(chat_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::InputSubmitted(input.to_string()))
}

fn add_url(state: AppState, url: &str) -> AppState {
    let (state, _) = update(state, Msg::AddUrlClicked);
    assert_eq!(state.pending_prompt(), Some(PromptKind::SpiderUrl));
    let (state, effects) = update(state, Msg::PromptAnswered(url.to_string()));
    assert!(effects.is_empty());
    state
}

fn set_description(state: AppState, description: &str) -> AppState {
    let (state, _) = update(state, Msg::EditDescriptionClicked);
    assert_eq!(state.pending_prompt(), Some(PromptKind::SpiderDescription));
    let (state, _) = update(state, Msg::PromptAnswered(description.to_string()));
    state
}

fn draft_cards(state: &AppState) -> usize {
    state
        .log()
        .messages()
        .iter()
        .filter(|m| m.kind() == MessageKind::DraftCard)
        .count()
}

#[test]
fn urls_are_appended_in_order() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let state = add_url(state, "http://b");
    let state = add_url(state, "http://a");

    let draft = state.wizard().draft().unwrap();
    assert_eq!(draft.urls(), ["http://a", "http://b", "http://a"]);
    assert_eq!(draft_cards(&state), 4);
    assert_eq!(
        state.log().last().unwrap().text(),
        "Spider Configuration:\nURLs: http://a, http://b, http://a\nDescription: "
    );
}

#[test]
fn empty_or_cancelled_prompt_changes_nothing() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let log_len = state.log().len();

    let (state, _) = update(state, Msg::AddUrlClicked);
    let (state, effects) = update(state, Msg::PromptAnswered(String::new()));
    assert!(effects.is_empty());
    assert_eq!(state.wizard().draft().unwrap().urls(), ["http://a"]);
    assert_eq!(state.log().len(), log_len);
    assert_eq!(state.pending_prompt(), None);

    let (state, _) = update(state, Msg::EditDescriptionClicked);
    let (state, _) = update(state, Msg::PromptCancelled);
    assert_eq!(state.wizard().draft().unwrap().description(), "");
    assert_eq!(state.log().len(), log_len);
    assert_eq!(state.pending_prompt(), None);
}

#[test]
fn description_is_overwritten_not_appended() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = set_description(state, "prices");
    let state = set_description(state, "compliance notes");

    assert_eq!(
        state.wizard().draft().unwrap().description(),
        "compliance notes"
    );
}

#[test]
fn confirm_without_urls_only_notifies() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = set_description(state, "prices");
    let log_len = state.log().len();

    let (mut state, effects) = update(state, Msg::ConfirmClicked);
    assert!(effects.is_empty());
    assert_eq!(state.log().len(), log_len);
    assert_eq!(state.wizard().phase(), WizardPhase::Collecting);
    let notifications = state.take_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::Validation);
    assert_eq!(
        notifications[0].text,
        "Please add at least one URL and a description."
    );
}

#[test]
fn confirm_without_description_only_notifies() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");

    let (mut state, effects) = update(state, Msg::ConfirmClicked);
    assert!(effects.is_empty());
    assert_eq!(state.take_notifications().len(), 1);
}

#[test]
fn confirm_before_any_setup_only_notifies() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::ConfirmClicked);
    assert!(effects.is_empty());
    assert_eq!(
        state.take_notifications()[0].kind,
        NotificationKind::Validation
    );
}

#[test]
fn complete_draft_is_submitted_once() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let state = set_description(state, "prices");

    let (mut state, effects) = update(state, Msg::ConfirmClicked);
    assert_eq!(
        effects,
        vec![Effect::StartCrawl {
            request_id: 1,
            urls: vec!["http://a".to_string()],
            description: "prices".to_string(),
        }]
    );
    assert_eq!(state.wizard().phase(), WizardPhase::Confirming);
    assert!(state.take_notifications().is_empty());

    // Clicking again while the request is outstanding sends nothing more.
    let (mut state, effects) = update(state, Msg::ConfirmClicked);
    assert!(effects.is_empty());
    assert_eq!(state.in_flight().count(), 1);
    let notices = state.take_notifications();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NotificationKind::Validation);
    assert_eq!(notices[0].text, "Spider setup is already being submitted.");
}

#[test]
fn view_offers_confirm_only_for_a_complete_idle_draft() {
    init_logging();
    assert!(!AppState::new().view().can_confirm);

    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    assert!(!state.view().can_confirm);

    let state = set_description(state, "prices");
    assert!(state.view().can_confirm);

    let (state, _) = update(state, Msg::ConfirmClicked);
    assert!(!state.view().can_confirm);

    let (state, _) = update(
        state,
        Msg::BackendReplied {
            request_id: 1,
            result: Ok("ok".to_string()),
        },
    );
    assert!(state.view().can_confirm);
}

#[test]
fn confirm_success_reveals_status_and_keeps_draft() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let state = set_description(state, "prices");
    let (state, effects) = update(state, Msg::ConfirmClicked);

    let (state, _) = update(
        state,
        Msg::BackendReplied {
            request_id: effects[0].request_id(),
            result: Ok("Spider started successfully for all URLs".to_string()),
        },
    );

    let reply = state.log().last().unwrap();
    assert_eq!(reply.sender(), Sender::Assistant);
    assert_eq!(
        reply.text(),
        "Spider started: Spider started successfully for all URLs"
    );
    assert_eq!(state.wizard().phase(), WizardPhase::Idle);
    assert_eq!(state.wizard().draft().unwrap().urls(), ["http://a"]);

    // Confirming again resubmits the retained draft.
    let (_state, effects) = update(state, Msg::ConfirmClicked);
    assert_eq!(effects.len(), 1);
}

#[test]
fn confirm_failure_notifies_and_returns_to_idle() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let state = set_description(state, "prices");
    let (state, effects) = update(state, Msg::ConfirmClicked);
    let log_len = state.log().len();

    let (mut state, _) = update(
        state,
        Msg::BackendReplied {
            request_id: effects[0].request_id(),
            result: Err("connection refused".to_string()),
        },
    );

    assert_eq!(state.log().len(), log_len);
    assert_eq!(state.wizard().phase(), WizardPhase::Idle);
    let notifications = state.take_notifications();
    assert_eq!(notifications[0].kind, NotificationKind::Transport);
    assert_eq!(notifications[0].text, "There was an error starting the spider.");
}

#[test]
fn abandon_returns_to_collecting_but_late_reply_still_shows() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let state = set_description(state, "prices");
    let (state, effects) = update(state, Msg::ConfirmClicked);

    let (state, _) = update(state, Msg::AbandonClicked);
    assert_eq!(state.wizard().phase(), WizardPhase::Collecting);

    let (state, _) = update(
        state,
        Msg::BackendReplied {
            request_id: effects[0].request_id(),
            result: Ok("ok".to_string()),
        },
    );
    assert_eq!(state.wizard().phase(), WizardPhase::Collecting);
    assert_eq!(state.log().last().unwrap().text(), "Spider started: ok");
}

// "edit spider" currently discards the draft instead of resuming it.
#[test]
fn edit_spider_resets_existing_draft() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let state = set_description(state, "prices");

    let (state, effects) = submit(state, "edit spider");
    assert!(effects.is_empty());
    let draft = state.wizard().draft().unwrap();
    assert!(draft.urls().is_empty());
    assert_eq!(draft.description(), "");
    assert_eq!(state.wizard().phase(), WizardPhase::Collecting);
}

#[test]
fn start_control_resets_like_the_command() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let state = add_url(state, "http://a");
    let log_len = state.log().len();

    let (state, effects) = update(state, Msg::StartSpiderClicked);
    assert!(effects.is_empty());
    assert!(state.wizard().draft().unwrap().urls().is_empty());
    // The control is not echoed as a user message; only a new card appears.
    assert_eq!(state.log().len(), log_len + 1);
    assert_eq!(state.log().last().unwrap().kind(), MessageKind::DraftCard);
}

#[test]
fn draft_prompts_need_a_draft() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::AddUrlClicked);
    assert_eq!(state.pending_prompt(), None);
    let (state, _) = update(state, Msg::EditDescriptionClicked);
    assert_eq!(state.pending_prompt(), None);
}

#[test]
fn new_input_dismisses_pending_prompt() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let (state, _) = update(state, Msg::AddUrlClicked);
    assert_eq!(state.pending_prompt(), Some(PromptKind::SpiderUrl));

    // Blank input is ignored entirely and keeps the prompt.
    let (state, _) = submit(state, "   ");
    assert_eq!(state.pending_prompt(), Some(PromptKind::SpiderUrl));

    let (state, effects) = submit(state, "hello");
    assert_eq!(state.pending_prompt(), None);
    assert_eq!(effects.len(), 1);

    // A late answer has nothing to answer.
    let (state, effects) = update(state, Msg::PromptAnswered("http://a".to_string()));
    assert!(effects.is_empty());
    assert!(state.wizard().draft().unwrap().urls().is_empty());
}

#[test]
fn opening_a_prompt_replaces_the_previous_one() {
    init_logging();
    let (state, _) = submit(AppState::new(), "start spider");
    let (state, _) = update(state, Msg::AddUrlClicked);
    let (state, _) = update(state, Msg::EditDescriptionClicked);
    assert_eq!(state.pending_prompt(), Some(PromptKind::SpiderDescription));

    let (state, _) = update(state, Msg::PromptAnswered("prices".to_string()));
    let draft = state.wizard().draft().unwrap();
    assert!(draft.urls().is_empty());
    assert_eq!(draft.description(), "prices");
}
