/// Routing decision for one submitted utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlainChat,
    StartSpider,
    StopSpider,
    EditSpider,
    UpdateMappings,
    UpdateRules,
}

// Checked in order; the first matching prefix wins.
const PREFIXES: [(&str, Command); 5] = [
    ("start spider", Command::StartSpider),
    ("stop spider", Command::StopSpider),
    ("edit spider", Command::EditSpider),
    ("update keyword mappings", Command::UpdateMappings),
    ("update spider rules", Command::UpdateRules),
];

/// Classifies an utterance by case-sensitive literal prefix.
pub fn classify(text: &str) -> Command {
    PREFIXES
        .iter()
        .find(|(prefix, _)| text.starts_with(*prefix))
        .map(|(_, command)| *command)
        .unwrap_or(Command::PlainChat)
}

