#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// How a message is presented; a draft card carries the wizard affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    DraftCard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    sender: Sender,
    kind: MessageKind,
    /// Byte offset of the revealed prefix; always on a char boundary.
    revealed: usize,
}

impl Message {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// The part of the text currently visible.
    pub fn displayed(&self) -> &str {
        &self.text[..self.revealed]
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed == self.text.len()
    }

    fn reveal_next_char(&mut self) -> bool {
        match self.text[self.revealed..].chars().next() {
            Some(ch) => {
                self.revealed += ch.len_utf8();
                true
            }
            None => false,
        }
    }
}

/// Append-only, insertion-ordered log of the session's messages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message that is fully visible immediately.
    pub fn push_instant(&mut self, sender: Sender, kind: MessageKind, text: impl Into<String>) {
        let text = text.into();
        let revealed = text.len();
        self.messages.push(Message {
            text,
            sender,
            kind,
            revealed,
        });
    }

    /// Appends a message that starts empty and grows one char per tick.
    pub fn push_typed(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(Message {
            text: text.into(),
            sender,
            kind: MessageKind::Text,
            revealed: 0,
        });
    }

    /// Reveals one more char of every unfinished message.
    ///
    /// Returns the number of messages whose displayed text grew.
    pub fn advance_reveals(&mut self) -> usize {
        self.messages
            .iter_mut()
            .filter(|message| !message.is_fully_revealed())
            .map(Message::reveal_next_char)
            .filter(|advanced| *advanced)
            .count()
    }

    pub fn is_revealing(&self) -> bool {
        self.messages.iter().any(|message| !message.is_fully_revealed())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
