use std::io::{self, Write};

use spider_chat_core::{
    AppViewModel, MessageKind, MessageView, Notification, NotificationKind, PromptKind, Sender,
};

use super::constants::*;

/// Output held back while a message is mid-reveal.
enum Deferred {
    Out(String),
    Err(String),
}

/// Streams the message log to a terminal.
///
/// Only the oldest unfinished message is written to; later messages wait
/// until it completes, so two reveals never interleave on screen. Help text
/// and notifications raised mid-reveal are held until the line is finished.
pub struct TerminalRenderer<O: Write, E: Write> {
    out: O,
    err: E,
    deferred: Vec<Deferred>,
    /// Messages written in full.
    flushed: usize,
    /// Whether the label of `messages[flushed]` is already on screen.
    label_written: bool,
    /// Bytes of `messages[flushed]` already on screen.
    written: usize,
    shown_prompt: Option<PromptKind>,
}

impl<O: Write, E: Write> TerminalRenderer<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            deferred: Vec::new(),
            flushed: 0,
            label_written: false,
            written: 0,
            shown_prompt: None,
        }
    }

    pub fn greet(&mut self, base_url: &str) -> io::Result<()> {
        writeln!(self.out, "Spider chat connected to {base_url}")?;
        writeln!(self.out, "Type :help for commands.")?;
        self.out.flush()
    }

    pub fn help(&mut self) -> io::Result<()> {
        self.emit(Deferred::Out(HELP_TEXT.to_string()))
    }

    pub fn unknown_affordance(&mut self, name: &str) -> io::Result<()> {
        self.emit(Deferred::Out(format!("Unknown control :{name} (try :help)")))
    }

    pub fn notify(&mut self, notification: &Notification) -> io::Result<()> {
        let title = match notification.kind {
            NotificationKind::Validation => "Check",
            NotificationKind::Transport => "Error",
        };
        self.emit(Deferred::Err(format!("!! {title}: {}", notification.text)))
    }

    pub fn render(&mut self, view: &AppViewModel) -> io::Result<()> {
        while let Some(message) = view.messages.get(self.flushed) {
            self.write_progress(message)?;
            if !message.complete {
                break;
            }
            writeln!(self.out)?;
            if message.kind == MessageKind::DraftCard {
                let hint = if view.can_confirm {
                    DRAFT_ACTIONS_HINT
                } else {
                    DRAFT_EDIT_HINT
                };
                writeln!(self.out, "{hint}")?;
            }
            self.flushed += 1;
            self.label_written = false;
            self.written = 0;
            self.flush_deferred()?;
        }
        self.render_prompt(view)?;
        self.out.flush()
    }

    fn emit(&mut self, line: Deferred) -> io::Result<()> {
        if self.label_written {
            self.deferred.push(line);
            return Ok(());
        }
        self.write_line(line)
    }

    fn flush_deferred(&mut self) -> io::Result<()> {
        for line in std::mem::take(&mut self.deferred) {
            self.write_line(line)?;
        }
        Ok(())
    }

    fn write_line(&mut self, line: Deferred) -> io::Result<()> {
        match line {
            Deferred::Out(text) => {
                writeln!(self.out, "{text}")?;
                self.out.flush()
            }
            Deferred::Err(text) => {
                self.out.flush()?;
                writeln!(self.err, "{text}")?;
                self.err.flush()
            }
        }
    }

    fn write_progress(&mut self, message: &MessageView) -> io::Result<()> {
        if !self.label_written {
            write!(self.out, "{} ", sender_label(message.sender))?;
            self.label_written = true;
        }
        let fresh = message.text.get(self.written..).unwrap_or_default();
        if !fresh.is_empty() {
            write!(self.out, "{}", fresh.replace('\n', CONTINUATION_INDENT))?;
            self.written = message.text.len();
        }
        Ok(())
    }

    fn render_prompt(&mut self, view: &AppViewModel) -> io::Result<()> {
        let Some(prompt) = view.prompt else {
            self.shown_prompt = None;
            return Ok(());
        };
        // Wait for the log to settle before asking.
        if self.flushed < view.messages.len() || self.shown_prompt == Some(prompt) {
            return Ok(());
        }
        writeln!(self.out, "? {} {PROMPT_CANCEL_HINT}", prompt.question())?;
        self.shown_prompt = Some(prompt);
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

fn sender_label(sender: Sender) -> &'static str {
    match sender {
        Sender::User => USER_LABEL,
        Sender::Assistant => ASSISTANT_LABEL,
    }
}
