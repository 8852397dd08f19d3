pub type RequestId = u64;

/// Backend operations the chat can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Chat,
    StartCrawl,
    StopCrawl,
    UpdateKeywordMappings,
    UpdateSpiderRules,
}

impl Operation {
    /// Prepended to the backend's status text in the revealed reply.
    pub fn reply_prefix(self) -> &'static str {
        match self {
            Operation::Chat => "",
            Operation::StartCrawl => "Spider started: ",
            Operation::StopCrawl => "Spider stopped: ",
            Operation::UpdateKeywordMappings => "Keyword mappings updated: ",
            Operation::UpdateSpiderRules => "Spider rules updated: ",
        }
    }

    /// Notification shown when the request could not be completed.
    pub fn failure_notice(self) -> &'static str {
        match self {
            Operation::Chat => "There was an error sending the message to the server.",
            Operation::StartCrawl => "There was an error starting the spider.",
            Operation::StopCrawl => "There was an error stopping the spider.",
            Operation::UpdateKeywordMappings => "There was an error updating keyword mappings.",
            Operation::UpdateSpiderRules => "There was an error updating spider rules.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendChat {
        request_id: RequestId,
        message: String,
    },
    StartCrawl {
        request_id: RequestId,
        urls: Vec<String>,
        description: String,
    },
    StopCrawl {
        request_id: RequestId,
    },
    /// `body` is forwarded exactly as the user typed it.
    UpdateKeywordMappings {
        request_id: RequestId,
        body: String,
    },
    /// `body` is forwarded exactly as the user typed it.
    UpdateSpiderRules {
        request_id: RequestId,
        body: String,
    },
}

impl Effect {
    pub fn request_id(&self) -> RequestId {
        match self {
            Effect::SendChat { request_id, .. }
            | Effect::StartCrawl { request_id, .. }
            | Effect::StopCrawl { request_id }
            | Effect::UpdateKeywordMappings { request_id, .. }
            | Effect::UpdateSpiderRules { request_id, .. } => *request_id,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Effect::SendChat { .. } => Operation::Chat,
            Effect::StartCrawl { .. } => Operation::StartCrawl,
            Effect::StopCrawl { .. } => Operation::StopCrawl,
            Effect::UpdateKeywordMappings { .. } => Operation::UpdateKeywordMappings,
            Effect::UpdateSpiderRules { .. } => Operation::UpdateSpiderRules,
        }
    }
}
