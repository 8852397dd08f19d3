/// The single in-progress spider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpiderConfigDraft {
    urls: Vec<String>,
    description: String,
}

impl SpiderConfigDraft {
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// A draft can be submitted once it names a target and says what to look for.
    pub fn is_complete(&self) -> bool {
        !self.urls.is_empty() && !self.description.is_empty()
    }

    /// Text of the configuration card shown in the chat.
    pub fn summary(&self) -> String {
        format!(
            "Spider Configuration:\nURLs: {}\nDescription: {}",
            self.urls.join(", "),
            self.description
        )
    }

    pub fn into_parts(self) -> (Vec<String>, String) {
        (self.urls, self.description)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPhase {
    /// No draft is being edited. A confirmed draft may still be retained.
    #[default]
    Idle,
    Collecting,
    /// A start-crawl request for the draft is outstanding.
    Confirming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmRejected {
    /// No URL or no description yet (or no draft at all).
    Incomplete,
    /// The previous confirmation has not been answered.
    InFlight,
}

/// Owns the draft; the only way to change it is through these transitions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpiderWizard {
    draft: Option<SpiderConfigDraft>,
    phase: WizardPhase,
}

impl SpiderWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> Option<&SpiderConfigDraft> {
        self.draft.as_ref()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Discards any previous draft, confirmed or not, and starts a fresh one.
    pub fn start_setup(&mut self) -> &SpiderConfigDraft {
        self.phase = WizardPhase::Collecting;
        self.draft.insert(SpiderConfigDraft::default())
    }

    /// Appends a URL. Empty input and a missing draft leave everything unchanged.
    pub fn add_url(&mut self, url: String) -> Option<&SpiderConfigDraft> {
        if url.is_empty() {
            return None;
        }
        let draft = self.draft.as_mut()?;
        draft.urls.push(url);
        self.touch();
        self.draft.as_ref()
    }

    /// Overwrites the description. Empty input and a missing draft are no-ops.
    pub fn set_description(&mut self, description: String) -> Option<&SpiderConfigDraft> {
        if description.is_empty() {
            return None;
        }
        let draft = self.draft.as_mut()?;
        draft.description = description;
        self.touch();
        self.draft.as_ref()
    }

    /// Checks the guard and, on success, hands out the payload to submit.
    ///
    /// The draft itself is kept after confirming.
    pub fn begin_confirm(&mut self) -> Result<SpiderConfigDraft, ConfirmRejected> {
        if self.phase == WizardPhase::Confirming {
            return Err(ConfirmRejected::InFlight);
        }
        match &self.draft {
            Some(draft) if draft.is_complete() => {
                self.phase = WizardPhase::Confirming;
                Ok(draft.clone())
            }
            _ => Err(ConfirmRejected::Incomplete),
        }
    }

    /// The start-crawl request finished, successfully or not.
    pub fn finish_confirm(&mut self) {
        if self.phase == WizardPhase::Confirming {
            self.phase = WizardPhase::Idle;
        }
    }

    /// Stops waiting on an outstanding confirmation and resumes editing.
    pub fn abandon(&mut self) -> bool {
        if self.phase == WizardPhase::Confirming {
            self.phase = WizardPhase::Collecting;
            true
        } else {
            false
        }
    }

    fn touch(&mut self) {
        if self.phase == WizardPhase::Idle {
            self.phase = WizardPhase::Collecting;
        }
    }
}
