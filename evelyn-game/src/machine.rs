//! Mission controller: the phase state machine behind every screen.
//!
//! Every user action goes through [`MissionControl::dispatch`]. A rejected
//! event leaves the controller untouched and returns a [`PhaseError`].
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::ar::ArScan;
use crate::backstory::global_lore;
use crate::badge::Badge;
use crate::commanders::CommanderRoster;
use crate::constants::{DEFAULT_VOICE_RATE, LORE_PITCH};
use crate::edition::Edition;
use crate::effects::{Effect, Effects, Tone};
use crate::language::Language;
use crate::log_store::{LogEntry, LogStorage, MissionLogStore, Reward};
use crate::mission::{ComposeOptions, Mission};
use crate::phase::{Event, Phase};
use crate::progress::Progress;
use crate::settings::{PinGate, SettingsDraft, VoiceConfig};

/// Reasons an event was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhaseError {
    #[error("`{event}` is not accepted in the {phase} phase")]
    InvalidTransition { phase: Phase, event: &'static str },
    #[error("mission task is empty")]
    EmptyTask,
    #[error("no mission is in progress")]
    NoMission,
    #[error("the area must be scanned before the mission can begin")]
    ArGateLocked,
    #[error("this mission has no scanner step")]
    ScannerUnavailable,
    #[error("scanner is not running")]
    NoScan,
    #[error("drone {target} cannot be tagged")]
    TargetUnavailable { target: u8 },
    #[error("{remaining} drone(s) still untagged")]
    ScanIncomplete { remaining: usize },
    #[error("parent settings are locked")]
    SettingsLocked,
}

/// Session state for one running app.
#[derive(Debug, Clone)]
pub struct MissionControl<S> {
    edition: Edition,
    phase: Phase,
    mission: Option<Mission>,
    ar_cleared: bool,
    scan: Option<ArScan>,
    pending_photos: Vec<String>,
    last_reward: Option<Reward>,
    roster: CommanderRoster,
    options: ComposeOptions,
    voice: VoiceConfig,
    pin: PinGate,
    log: MissionLogStore<S>,
    rng: ChaCha20Rng,
}

impl<S: LogStorage> MissionControl<S> {
    /// Start at `home` with the log loaded from `storage`.
    pub fn new(edition: Edition, storage: S, seed: u64) -> Self {
        Self {
            edition,
            phase: Phase::Home,
            mission: None,
            ar_cleared: false,
            scan: None,
            pending_photos: Vec::new(),
            last_reward: None,
            roster: CommanderRoster::for_edition(edition),
            options: ComposeOptions::for_edition(edition),
            voice: VoiceConfig::default(),
            pin: PinGate::default(),
            log: MissionLogStore::open(storage),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Apply an event and return the effects the shell should play.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError`] when the event is not in the transition table
    /// for the current phase or a guard refuses it. State is unchanged.
    pub fn dispatch(&mut self, event: Event) -> Result<Effects, PhaseError> {
        let from = self.phase;
        let name = event.name();
        match self.transition(event) {
            Ok(effects) => {
                log::debug!("{from} --{name}--> {}", self.phase);
                Ok(effects)
            }
            Err(err) => {
                log::debug!("rejected {name} in {from}: {err}");
                Err(err)
            }
        }
    }

    fn transition(&mut self, event: Event) -> Result<Effects, PhaseError> {
        let mut effects = Effects::new();
        let next = match (self.phase, event) {
            (Phase::Home, Event::Start) => Phase::Compose,
            (Phase::Home, Event::ShowStory) => {
                effects.push(Effect::Narrate {
                    text: global_lore(self.voice.language).to_string(),
                    voice: VoiceConfig {
                        language: self.voice.language,
                        rate: DEFAULT_VOICE_RATE,
                        pitch: LORE_PITCH,
                    },
                });
                Phase::Lore
            }
            (Phase::Home, Event::OpenTrophies) => Phase::Trophies,
            (Phase::Home, Event::OpenSettings) => Phase::Settings,
            (Phase::Lore, Event::Back) => {
                effects.push(Effect::CancelNarration);
                Phase::Home
            }

            (Phase::Compose, Event::Generate { task }) => {
                let mission = Mission::draft(
                    &task,
                    &self.roster,
                    self.voice.language,
                    &self.options,
                    self.edition,
                    &mut self.rng,
                )
                .ok_or(PhaseError::EmptyTask)?;
                self.mission = Some(mission);
                self.ar_cleared = false;
                self.pending_photos.clear();
                Phase::Approve
            }
            (Phase::Compose, Event::Cancel) => {
                self.discard_mission();
                Phase::Home
            }

            (Phase::Approve, Event::Approve) => Phase::Alert,
            (Phase::Approve, Event::Edit) => Phase::Compose,
            (Phase::Approve, Event::Shuffle) => {
                let mission = self.mission.as_mut().ok_or(PhaseError::NoMission)?;
                mission.reshuffle(
                    self.voice.language,
                    &self.options,
                    self.edition,
                    &mut self.rng,
                );
                Phase::Approve
            }

            (Phase::Alert, Event::Answer) => {
                let mission = self.mission.as_ref().ok_or(PhaseError::NoMission)?;
                effects.push(Effect::Tone(Tone::RadioBeep));
                effects.push(Effect::Narrate {
                    text: mission.backstory.clone(),
                    voice: self.voice,
                });
                Phase::Briefing
            }
            (Phase::Alert, Event::Dismiss) => {
                effects.push(Effect::CancelNarration);
                self.discard_mission();
                Phase::Home
            }

            (Phase::Briefing, Event::Begin) => {
                let mission = self.mission.as_ref().ok_or(PhaseError::NoMission)?;
                if mission.require_ar && !self.ar_cleared {
                    return Err(PhaseError::ArGateLocked);
                }
                if self.edition.captures_photos() {
                    effects.push(Effect::AcquireCamera);
                }
                Phase::Active
            }
            (Phase::Briefing, Event::OpenScanner) => {
                let mission = self.mission.as_ref().ok_or(PhaseError::NoMission)?;
                if !(self.edition.supports_ar() && mission.require_ar) {
                    return Err(PhaseError::ScannerUnavailable);
                }
                self.scan = Some(ArScan::new(&mut self.rng));
                effects.push(Effect::AcquireCamera);
                Phase::Ar
            }

            (Phase::Ar, Event::Tag { target }) => {
                let scan = self.scan.as_mut().ok_or(PhaseError::NoScan)?;
                if !scan.tag(target) {
                    return Err(PhaseError::TargetUnavailable { target });
                }
                effects.push(Effect::Tone(Tone::TagBlip));
                Phase::Ar
            }
            (Phase::Ar, Event::ScanDone) => {
                let scan = self.scan.as_ref().ok_or(PhaseError::NoScan)?;
                if !scan.is_complete() {
                    return Err(PhaseError::ScanIncomplete {
                        remaining: scan.total() - scan.found(),
                    });
                }
                self.scan = None;
                self.ar_cleared = true;
                effects.push(Effect::ReleaseCamera);
                Phase::Briefing
            }
            (Phase::Ar, Event::CloseScanner) => {
                self.scan = None;
                effects.push(Effect::ReleaseCamera);
                Phase::Briefing
            }

            (Phase::Active, Event::CapturePhotos { photos }) if self.edition.captures_photos() => {
                self.pending_photos.extend(photos);
                Phase::Active
            }
            (Phase::Active, Event::MarkComplete { date }) => {
                let mission = self.mission.as_ref().ok_or(PhaseError::NoMission)?;
                let reward = match self.edition {
                    Edition::Badges => Reward::Badge {
                        badge: Badge::roll(&mut self.rng, &mission.task, &date),
                    },
                    Edition::Photos => Reward::Photos {
                        photos: std::mem::take(&mut self.pending_photos),
                    },
                };
                self.log.append(LogEntry {
                    date,
                    task: mission.task.clone(),
                    reward: reward.clone(),
                });
                self.last_reward = Some(reward);
                effects.push(Effect::ReleaseCamera);
                Phase::Success
            }

            (Phase::Success, Event::ViewRewards) => Phase::Trophies,
            (Phase::Success, Event::GoHome) | (Phase::Trophies, Event::Back) => {
                self.discard_mission();
                Phase::Home
            }
            (Phase::Settings, Event::Close) => Phase::Home,

            (phase, event) => {
                return Err(PhaseError::InvalidTransition {
                    phase,
                    event: event.name(),
                });
            }
        };
        self.phase = next;
        Ok(effects)
    }

    fn discard_mission(&mut self) {
        self.mission = None;
        self.scan = None;
        self.ar_cleared = false;
        self.pending_photos.clear();
    }

    /// Try the parent PIN while on the settings screen.
    pub fn unlock_settings(&mut self, pin: &str) -> bool {
        self.phase == Phase::Settings && self.pin.try_unlock(pin)
    }

    /// Merge the edited voice settings and return home.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::SettingsLocked`] before the PIN is accepted and
    /// [`PhaseError::InvalidTransition`] outside the settings screen.
    pub fn apply_settings(&mut self, draft: &SettingsDraft) -> Result<(), PhaseError> {
        if self.phase != Phase::Settings {
            return Err(PhaseError::InvalidTransition {
                phase: self.phase,
                event: "apply_settings",
            });
        }
        if !self.pin.is_unlocked() {
            return Err(PhaseError::SettingsLocked);
        }
        self.voice = draft.resolve();
        self.phase = Phase::Home;
        Ok(())
    }

    /// Narration language, also used for new backstories.
    pub fn set_language(&mut self, language: Language) {
        self.voice.language = language;
    }

    pub fn set_rival_name(&mut self, name: impl Into<String>) {
        self.options.rival_name = name.into();
    }

    pub fn set_require_ar(&mut self, require: bool) {
        self.options.require_ar = require && self.edition.supports_ar();
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn edition(&self) -> Edition {
        self.edition
    }

    #[must_use]
    pub const fn mission(&self) -> Option<&Mission> {
        self.mission.as_ref()
    }

    #[must_use]
    pub const fn ar_cleared(&self) -> bool {
        self.ar_cleared
    }

    #[must_use]
    pub const fn scan(&self) -> Option<&ArScan> {
        self.scan.as_ref()
    }

    #[must_use]
    pub fn pending_photos(&self) -> &[String] {
        &self.pending_photos
    }

    #[must_use]
    pub const fn last_reward(&self) -> Option<&Reward> {
        self.last_reward.as_ref()
    }

    #[must_use]
    pub const fn options(&self) -> &ComposeOptions {
        &self.options
    }

    #[must_use]
    pub const fn voice(&self) -> &VoiceConfig {
        &self.voice
    }

    #[must_use]
    pub const fn settings_unlocked(&self) -> bool {
        self.pin.is_unlocked()
    }

    #[must_use]
    pub const fn log(&self) -> &MissionLogStore<S> {
        &self.log
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.log.progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_store::MemoryLogStorage;

    fn control(edition: Edition) -> MissionControl<MemoryLogStorage> {
        MissionControl::new(edition, MemoryLogStorage::new(), 42)
    }

    fn to_briefing(mc: &mut MissionControl<MemoryLogStorage>) {
        mc.dispatch(Event::Start).unwrap();
        mc.dispatch(Event::Generate {
            task: "tidy the room".into(),
        })
        .unwrap();
        mc.dispatch(Event::Approve).unwrap();
        mc.dispatch(Event::Answer).unwrap();
    }

    #[test]
    fn starts_at_home_with_empty_log() {
        let mc = control(Edition::Badges);
        assert_eq!(mc.phase(), Phase::Home);
        assert!(mc.mission().is_none());
        assert!(mc.log().is_empty());
    }

    #[test]
    fn events_outside_the_table_are_rejected_without_change() {
        let mut mc = control(Edition::Badges);
        let err = mc.dispatch(Event::Begin).unwrap_err();
        assert_eq!(
            err,
            PhaseError::InvalidTransition {
                phase: Phase::Home,
                event: "begin"
            }
        );
        assert_eq!(mc.phase(), Phase::Home);
    }

    #[test]
    fn empty_task_stays_in_compose() {
        let mut mc = control(Edition::Badges);
        mc.dispatch(Event::Start).unwrap();
        let err = mc
            .dispatch(Event::Generate {
                task: "  \t ".into(),
            })
            .unwrap_err();
        assert_eq!(err, PhaseError::EmptyTask);
        assert_eq!(mc.phase(), Phase::Compose);
        assert!(mc.mission().is_none());
    }

    #[test]
    fn answer_beeps_then_narrates_backstory() {
        let mut mc = control(Edition::Badges);
        mc.dispatch(Event::Start).unwrap();
        mc.dispatch(Event::Generate {
            task: "brush teeth".into(),
        })
        .unwrap();
        mc.dispatch(Event::Approve).unwrap();
        let effects = mc.dispatch(Event::Answer).unwrap();
        assert_eq!(effects[0], Effect::Tone(Tone::RadioBeep));
        match &effects[1] {
            Effect::Narrate { text, .. } => {
                assert_eq!(text, &mc.mission().unwrap().backstory);
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn ar_gate_blocks_begin_until_cleared() {
        let mut mc = control(Edition::Badges);
        to_briefing(&mut mc);
        assert_eq!(mc.dispatch(Event::Begin), Err(PhaseError::ArGateLocked));
        assert_eq!(mc.phase(), Phase::Briefing);

        let effects = mc.dispatch(Event::OpenScanner).unwrap();
        assert_eq!(effects.as_slice(), [Effect::AcquireCamera]);
        assert_eq!(
            mc.dispatch(Event::ScanDone),
            Err(PhaseError::ScanIncomplete { remaining: 3 })
        );
        for id in 1..=3 {
            let effects = mc.dispatch(Event::Tag { target: id }).unwrap();
            assert_eq!(effects.as_slice(), [Effect::Tone(Tone::TagBlip)]);
        }
        assert_eq!(
            mc.dispatch(Event::Tag { target: 1 }),
            Err(PhaseError::TargetUnavailable { target: 1 })
        );
        let effects = mc.dispatch(Event::ScanDone).unwrap();
        assert_eq!(effects.as_slice(), [Effect::ReleaseCamera]);
        assert!(mc.ar_cleared());
        mc.dispatch(Event::Begin).unwrap();
        assert_eq!(mc.phase(), Phase::Active);
    }

    #[test]
    fn closing_scanner_keeps_gate_locked() {
        let mut mc = control(Edition::Badges);
        to_briefing(&mut mc);
        mc.dispatch(Event::OpenScanner).unwrap();
        mc.dispatch(Event::Tag { target: 2 }).unwrap();
        mc.dispatch(Event::CloseScanner).unwrap();
        assert_eq!(mc.phase(), Phase::Briefing);
        assert!(!mc.ar_cleared());
        assert!(mc.scan().is_none());
    }

    #[test]
    fn gate_off_skips_scanner() {
        let mut mc = control(Edition::Badges);
        mc.set_require_ar(false);
        to_briefing(&mut mc);
        assert_eq!(
            mc.dispatch(Event::OpenScanner),
            Err(PhaseError::ScannerUnavailable)
        );
        mc.dispatch(Event::Begin).unwrap();
        assert_eq!(mc.phase(), Phase::Active);
    }

    #[test]
    fn new_mission_resets_ar_clearance() {
        let mut mc = control(Edition::Badges);
        to_briefing(&mut mc);
        mc.dispatch(Event::OpenScanner).unwrap();
        for id in 1..=3 {
            mc.dispatch(Event::Tag { target: id }).unwrap();
        }
        mc.dispatch(Event::ScanDone).unwrap();
        mc.dispatch(Event::Begin).unwrap();
        mc.dispatch(Event::MarkComplete {
            date: "16/10/2026".into(),
        })
        .unwrap();
        mc.dispatch(Event::GoHome).unwrap();
        assert!(!mc.ar_cleared());

        to_briefing(&mut mc);
        assert_eq!(mc.dispatch(Event::Begin), Err(PhaseError::ArGateLocked));
        assert_eq!(mc.log().len(), 1);
    }

    #[test]
    fn shuffle_stays_in_approve_with_same_task() {
        let mut mc = control(Edition::Badges);
        mc.dispatch(Event::Start).unwrap();
        mc.dispatch(Event::Generate {
            task: "walk the dog".into(),
        })
        .unwrap();
        let commander = mc.mission().unwrap().commander.clone();
        mc.dispatch(Event::Shuffle).unwrap();
        assert_eq!(mc.phase(), Phase::Approve);
        let mission = mc.mission().unwrap();
        assert_eq!(mission.task, "walk the dog");
        assert_eq!(mission.commander, commander);
    }

    #[test]
    fn dismiss_discards_mission() {
        let mut mc = control(Edition::Badges);
        mc.dispatch(Event::Start).unwrap();
        mc.dispatch(Event::Generate { task: "x".into() }).unwrap();
        mc.dispatch(Event::Approve).unwrap();
        let effects = mc.dispatch(Event::Dismiss).unwrap();
        assert_eq!(effects.as_slice(), [Effect::CancelNarration]);
        assert_eq!(mc.phase(), Phase::Home);
        assert!(mc.mission().is_none());
    }

    #[test]
    fn photo_edition_records_captured_photos() {
        let mut mc = control(Edition::Photos);
        to_briefing(&mut mc);
        let effects = mc.dispatch(Event::Begin).unwrap();
        assert_eq!(effects.as_slice(), [Effect::AcquireCamera]);
        mc.dispatch(Event::CapturePhotos {
            photos: vec!["data:image/jpeg;base64,AA".into()],
        })
        .unwrap();
        mc.dispatch(Event::CapturePhotos {
            photos: vec!["data:image/jpeg;base64,BB".into()],
        })
        .unwrap();
        mc.dispatch(Event::MarkComplete {
            date: "16/10/2026".into(),
        })
        .unwrap();
        let entry = &mc.log().entries()[0];
        assert_eq!(entry.reward.photos().len(), 2);
        assert!(entry.reward.badge().is_none());
        assert!(mc.pending_photos().is_empty());
    }

    #[test]
    fn badge_edition_rejects_photo_capture() {
        let mut mc = control(Edition::Badges);
        mc.set_require_ar(false);
        to_briefing(&mut mc);
        mc.dispatch(Event::Begin).unwrap();
        assert!(matches!(
            mc.dispatch(Event::CapturePhotos { photos: vec![] }),
            Err(PhaseError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn settings_need_pin_before_apply() {
        let mut mc = control(Edition::Badges);
        mc.dispatch(Event::OpenSettings).unwrap();
        let draft = SettingsDraft {
            language: Language::French,
            rate: 1.0,
            pitch: 1.0,
            style: crate::settings::VoiceStyle::Playful,
        };
        assert_eq!(mc.apply_settings(&draft), Err(PhaseError::SettingsLocked));
        assert!(!mc.unlock_settings("12"));
        assert!(mc.unlock_settings("2468"));
        mc.apply_settings(&draft).unwrap();
        assert_eq!(mc.phase(), Phase::Home);
        assert_eq!(mc.voice().language, Language::French);
    }

    #[test]
    fn lore_narrates_in_current_language() {
        let mut mc = control(Edition::Badges);
        let effects = mc.dispatch(Event::ShowStory).unwrap();
        match &effects[0] {
            Effect::Narrate { text, voice } => {
                assert!(text.starts_with("The world needs Agent Evelyn."));
                assert!((voice.pitch - 1.03).abs() < 1e-6);
            }
            other => panic!("unexpected effect {other:?}"),
        }
        let effects = mc.dispatch(Event::Back).unwrap();
        assert_eq!(effects.as_slice(), [Effect::CancelNarration]);
    }

    #[test]
    fn language_switch_applies_to_new_backstories() {
        let mut mc = control(Edition::Photos);
        mc.set_language(Language::French);
        mc.dispatch(Event::Start).unwrap();
        mc.dispatch(Event::Generate {
            task: "ranger ta chambre".into(),
        })
        .unwrap();
        let mission = mc.mission().unwrap();
        assert!(mission.backstory.contains("Votre prochaine mission: ranger ta chambre"));
    }
}
