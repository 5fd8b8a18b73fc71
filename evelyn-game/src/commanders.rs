use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::edition::Edition;

/// Narrative persona that hands a mission to the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commander {
    pub name: String,
    pub emblem: String,
}

impl Commander {
    #[must_use]
    pub fn new(name: impl Into<String>, emblem: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emblem: emblem.into(),
        }
    }
}

const BADGE_ROSTER: [(&str, &str); 5] = [
    ("Commander Nova", "🌟"),
    ("Director Axiom", "🛰️"),
    ("Chief Tempest", "⚡"),
    ("Marshal Quill", "🛡️"),
    ("Admiral Mirage", "🎯"),
];

const PHOTO_ROSTER: [(&str, &str); 1] = [("Commander Nova", "🌟")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommanderRoster(pub Vec<Commander>);

impl CommanderRoster {
    /// Fixed roster shipped with the given edition.
    #[must_use]
    pub fn for_edition(edition: Edition) -> Self {
        let source: &[(&str, &str)] = match edition {
            Edition::Badges => &BADGE_ROSTER,
            Edition::Photos => &PHOTO_ROSTER,
        };
        Self(
            source
                .iter()
                .map(|(name, emblem)| Commander::new(*name, *emblem))
                .collect(),
        )
    }

    /// Uniform pick from the roster. An empty roster yields Commander Nova.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Commander {
        self.0.choose(rng).cloned().unwrap_or_else(|| {
            let (name, emblem) = BADGE_ROSTER[0];
            Commander::new(name, emblem)
        })
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&Commander> {
        self.0.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Commander> {
        self.0.iter()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a CommanderRoster {
    type Item = &'a Commander;
    type IntoIter = std::slice::Iter<'a, Commander>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn badge_edition_ships_five_commanders() {
        let roster = CommanderRoster::for_edition(Edition::Badges);
        assert_eq!(roster.len(), 5);
        assert!(roster.get_by_name("Marshal Quill").is_some());
    }

    #[test]
    fn photo_edition_always_picks_the_single_commander() {
        let roster = CommanderRoster::for_edition(Edition::Photos);
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(roster.pick(&mut rng).name, "Commander Nova");
        }
    }

    #[test]
    fn picks_cover_the_whole_roster_eventually() {
        let roster = CommanderRoster::for_edition(Edition::Badges);
        let mut rng = ChaCha20Rng::seed_from_u64(0xE7E1);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            seen.insert(roster.pick(&mut rng).name);
        }
        assert_eq!(seen.len(), roster.len());
    }

    #[test]
    fn empty_roster_falls_back_instead_of_panicking() {
        let roster = CommanderRoster(Vec::new());
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(roster.pick(&mut rng).name, "Commander Nova");
    }
}
