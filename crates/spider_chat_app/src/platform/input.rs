use spider_chat_core::{Msg, PromptKind};

/// Joins physical lines ending in `\` into one submission, keeping the newline.
#[derive(Debug, Default)]
pub struct LineAssembler {
    pending: Option<String>,
}

impl LineAssembler {
    /// Returns the submitted text once a line does not continue.
    pub fn push(&mut self, line: &str) -> Option<String> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        match line.strip_suffix('\\') {
            Some(head) => {
                let pending = self.pending.get_or_insert_with(String::new);
                pending.push_str(head);
                pending.push('\n');
                None
            }
            None => {
                let mut text = self.pending.take().unwrap_or_default();
                text.push_str(line);
                Some(text)
            }
        }
    }

    /// Hands out text still waiting on a continuation, for end of input.
    pub fn finish(&mut self) -> Option<String> {
        let mut text = self.pending.take()?;
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Core(Msg),
    Help,
    Quit,
    UnknownAffordance(String),
}

/// Maps one submission to what it means given the pending prompt.
///
/// While a prompt is open every submission answers it and a blank one
/// cancels it. Otherwise `:name` triggers an affordance and anything else is
/// an utterance for the dispatcher.
pub fn interpret(text: String, prompt: Option<PromptKind>) -> Action {
    if prompt.is_some() {
        return if text.is_empty() {
            Action::Core(Msg::PromptCancelled)
        } else {
            Action::Core(Msg::PromptAnswered(text))
        };
    }

    match affordance_name(&text) {
        Some(name) => match name {
            "start" => Action::Core(Msg::StartSpiderClicked),
            "stop" => Action::Core(Msg::StopSpiderClicked),
            "url" => Action::Core(Msg::AddUrlClicked),
            "desc" => Action::Core(Msg::EditDescriptionClicked),
            "confirm" => Action::Core(Msg::ConfirmClicked),
            "abandon" => Action::Core(Msg::AbandonClicked),
            "help" => Action::Help,
            "quit" | "q" => Action::Quit,
            other => Action::UnknownAffordance(other.to_string()),
        },
        None => Action::Core(Msg::InputSubmitted(text)),
    }
}

fn affordance_name(text: &str) -> Option<&str> {
    let name = text.trim().strip_prefix(':')?;
    if !name.is_empty() && name.chars().all(|ch| ch.is_ascii_lowercase()) {
        Some(name)
    } else {
        None
    }
}
