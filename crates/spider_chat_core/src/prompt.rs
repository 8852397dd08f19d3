/// A question the core is waiting on the user to answer.
///
/// An empty answer, or a cancelled prompt, never changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SpiderUrl,
    SpiderDescription,
    KeywordMappings,
    SpiderRules,
}

impl PromptKind {
    pub fn question(self) -> &'static str {
        match self {
            PromptKind::SpiderUrl => "Enter the URL to scrape:",
            PromptKind::SpiderDescription => "Enter the description of specific info to target:",
            PromptKind::KeywordMappings => "Enter new keyword mappings in JSON format:",
            PromptKind::SpiderRules => "Enter new spider rules in JSON format:",
        }
    }
}
