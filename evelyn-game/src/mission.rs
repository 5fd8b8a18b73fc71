//! Transient mission draft shared by the briefing screens.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::backstory::{BackstoryRequest, generate};
use crate::commanders::{Commander, CommanderRoster};
use crate::constants::DEFAULT_RIVAL_NAME;
use crate::edition::Edition;
use crate::language::Language;

/// Parent-chosen options on the compose screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeOptions {
    pub rival_name: String,
    pub require_ar: bool,
}

impl ComposeOptions {
    #[must_use]
    pub fn for_edition(edition: Edition) -> Self {
        Self {
            rival_name: DEFAULT_RIVAL_NAME.to_string(),
            require_ar: edition.supports_ar(),
        }
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self::for_edition(Edition::default())
    }
}

/// One task cycle from creation to completion or abandonment. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub task: String,
    pub backstory: String,
    pub commander: Commander,
    pub require_ar: bool,
}

impl Mission {
    /// Draft a mission for `task`. Returns `None` when the trimmed task is empty.
    pub fn draft<R: Rng + ?Sized>(
        task: &str,
        roster: &CommanderRoster,
        language: Language,
        options: &ComposeOptions,
        edition: Edition,
        rng: &mut R,
    ) -> Option<Self> {
        let task = task.trim();
        if task.is_empty() {
            return None;
        }
        let commander = roster.pick(rng);
        let backstory = Self::write_backstory(task, &commander, language, options, edition, rng);
        Some(Self {
            task: task.to_string(),
            backstory,
            commander,
            require_ar: edition.supports_ar() && options.require_ar,
        })
    }

    /// Regenerate the backstory. Task and commander stay fixed.
    pub fn reshuffle<R: Rng + ?Sized>(
        &mut self,
        language: Language,
        options: &ComposeOptions,
        edition: Edition,
        rng: &mut R,
    ) {
        self.backstory =
            Self::write_backstory(&self.task, &self.commander, language, options, edition, rng);
    }

    fn write_backstory<R: Rng + ?Sized>(
        task: &str,
        commander: &Commander,
        language: Language,
        options: &ComposeOptions,
        edition: Edition,
        rng: &mut R,
    ) -> String {
        let request = BackstoryRequest::new(task, commander, language)
            .with_rival(Some(options.rival_name.as_str()))
            .with_hazard(edition.includes_hazard());
        generate(&request, rng)
    }
}
