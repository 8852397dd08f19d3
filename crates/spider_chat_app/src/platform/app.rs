use std::io::{self, BufRead};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use chat_logging::{chat_debug, chat_info, chat_warn};
use spider_chat_core::{update, AppState, Msg};
use spider_chat_transport::ReqwestBackend;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::input::{interpret, Action, LineAssembler};
use super::ui::render::TerminalRenderer;

/// Everything the main loop reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Line(String),
    InputClosed,
    Tick,
    Backend(Msg),
}

pub fn run_app(config: AppConfig) -> Result<()> {
    let settings = config.backend_settings()?;
    chat_info!("Starting spider chat against {}", settings.base_url);
    let base_url = settings.base_url.to_string();
    let backend = ReqwestBackend::new(settings).context("building http client")?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(Arc::new(backend), event_tx.clone())?;

    spawn_stdin_reader(event_tx.clone());

    // Background tick that drives the typed reveal.
    let interval = config.reveal_interval();
    thread::spawn(move || {
        while event_tx.send(AppEvent::Tick).is_ok() {
            thread::sleep(interval);
        }
    });

    let mut renderer = TerminalRenderer::new(io::stdout(), io::stderr());
    renderer.greet(&base_url)?;

    let mut state = AppState::new();
    let mut assembler = LineAssembler::default();
    let mut input_closed = false;

    for event in event_rx {
        let action = match event {
            AppEvent::Line(line) => {
                let Some(text) = assembler.push(&line) else {
                    continue;
                };
                interpret(text, state.pending_prompt())
            }
            AppEvent::InputClosed => {
                chat_debug!("Input closed; waiting for outstanding work");
                input_closed = true;
                match assembler.finish() {
                    Some(text) => {
                        chat_info!("Submitting continued line left open at end of input");
                        interpret(text, state.pending_prompt())
                    }
                    None => Action::Core(Msg::NoOp),
                }
            }
            AppEvent::Tick => Action::Core(Msg::Tick),
            AppEvent::Backend(msg) => Action::Core(msg),
        };
        let msg = match action {
            Action::Core(msg) => msg,
            Action::Help => {
                renderer.help()?;
                continue;
            }
            Action::Quit => break,
            Action::UnknownAffordance(name) => {
                renderer.unknown_affordance(&name)?;
                continue;
            }
        };

        let (next, new_effects) = update(state, msg);
        state = next;
        effects.enqueue(new_effects);

        for notification in state.take_notifications() {
            renderer.notify(&notification)?;
        }
        if state.consume_dirty() {
            renderer.render(&state.view())?;
        }

        if input_closed && state.in_flight().next().is_none() && !state.log().is_revealing() {
            break;
        }
    }

    chat_info!("Spider chat finished");
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    chat_warn!("Stopped reading input: {}", err);
                    break;
                }
            };
            if event_tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
