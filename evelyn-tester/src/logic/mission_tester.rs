//! Headless driver that plays a scripted session against the mission controller.
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;
use twox_hash::XxHash64;

use evelyn_game::{
    Edition, Effect, Event, Language, LogEntry, MemoryLogStorage, Mission, MissionControl, Phase,
    PhaseError, Progress, Reward, SettingsDraft, VoiceConfig,
};

/// One scripted action. Most are plain events; the rest poke the
/// controller the way the settings and compose screens do.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Send(Event),
    /// Tag every drone still pending in the running scan.
    TagAll,
    SetRequireAr(bool),
    SetRival(&'static str),
    SetLanguage(Language),
    Unlock(&'static str),
    ApplySettings(SettingsDraft),
}

impl Step {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Send(event) => event.name(),
            Self::TagAll => "tag_all",
            Self::SetRequireAr(_) => "set_require_ar",
            Self::SetRival(_) => "set_rival",
            Self::SetLanguage(_) => "set_language",
            Self::Unlock(_) => "unlock",
            Self::ApplySettings(_) => "apply_settings",
        }
    }
}

/// State of the log backend before the session opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageSetup {
    #[default]
    Empty,
    Raw(&'static str),
    /// Seeded with `payload`, then reads and/or writes fail.
    Failing {
        payload: &'static str,
        reads: bool,
        writes: bool,
    },
}

impl StorageSetup {
    fn build(self) -> MemoryLogStorage {
        match self {
            Self::Empty => MemoryLogStorage::new(),
            Self::Raw(payload) => MemoryLogStorage::with_raw(payload),
            Self::Failing {
                payload,
                reads,
                writes,
            } => {
                let storage = MemoryLogStorage::with_raw(payload);
                storage.set_fail_reads(reads);
                storage.set_fail_writes(writes);
                storage
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct MissionPlan {
    pub edition: Edition,
    pub storage: StorageSetup,
    pub script: Vec<Step>,
    /// How many times the script is replayed in one session.
    pub rounds: usize,
    pub expectations: Vec<MissionExpectation>,
}

impl MissionPlan {
    #[must_use]
    pub fn new(edition: Edition) -> Self {
        Self {
            edition,
            storage: StorageSetup::Empty,
            script: Vec::new(),
            rounds: 1,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_storage(mut self, storage: StorageSetup) -> Self {
        self.storage = storage;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.script.extend(steps);
        self
    }

    #[must_use]
    pub fn with_events(self, events: impl IntoIterator<Item = Event>) -> Self {
        self.with_steps(events.into_iter().map(Step::Send))
    }

    #[must_use]
    pub const fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: impl Into<MissionExpectation>) -> Self {
        self.expectations.push(expectation.into());
        self
    }
}

type MissionExpectationFn = Arc<dyn Fn(&MissionSummary) -> Result<()> + Send + Sync + 'static>;

/// Assertion run over a finished session.
#[derive(Clone)]
pub struct MissionExpectation(MissionExpectationFn);

impl std::fmt::Debug for MissionExpectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MissionExpectation").finish()
    }
}

impl MissionExpectation {
    /// # Errors
    ///
    /// Returns the expectation's failure message.
    pub fn evaluate(&self, summary: &MissionSummary) -> Result<()> {
        (self.0)(summary)
    }
}

impl<F> From<F> for MissionExpectation
where
    F: Fn(&MissionSummary) -> Result<()> + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self(Arc::new(f))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Accepted { effects: usize },
    Rejected(PhaseError),
    /// PIN refused.
    Denied,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub round: usize,
    pub label: &'static str,
    pub outcome: StepOutcome,
    pub phase: Phase,
}

impl StepRecord {
    #[must_use]
    pub const fn accepted(&self) -> bool {
        matches!(self.outcome, StepOutcome::Accepted { .. })
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<&PhaseError> {
        match &self.outcome {
            StepOutcome::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Everything a session left behind.
#[derive(Debug, Clone)]
pub struct MissionSummary {
    pub seed: u64,
    pub edition: Edition,
    pub steps: Vec<StepRecord>,
    pub effects: Vec<Effect>,
    /// Every distinct backstory drafted, in order.
    pub backstories: Vec<String>,
    pub initial_entries: usize,
    pub entries: Vec<LogEntry>,
    pub stored_raw: Option<String>,
    pub final_phase: Phase,
    pub mission: Option<Mission>,
    pub last_reward: Option<Reward>,
    pub progress: Progress,
    pub voice: VoiceConfig,
    pub digest: u64,
}

impl MissionSummary {
    pub fn rejections(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps.iter().filter(|step| !step.accepted())
    }

    #[must_use]
    pub fn first_step(&self, label: &str) -> Option<&StepRecord> {
        self.steps.iter().find(|step| step.label == label)
    }

    pub fn narrations(&self) -> impl Iterator<Item = &str> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Narrate { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn count_effect(&self, wanted: &Effect) -> usize {
        self.effects.iter().filter(|effect| *effect == wanted).count()
    }
}

/// Plays [`MissionPlan`]s against an in-memory log.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionTester {
    verbose: bool,
}

impl MissionTester {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    #[must_use]
    pub fn run_plan(&self, plan: &MissionPlan, seed: u64) -> MissionSummary {
        let storage = plan.storage.build();
        let mut control = MissionControl::new(plan.edition, storage.clone(), seed);
        let initial_entries = control.log().len();
        let mut steps = Vec::new();
        let mut effects = Vec::new();
        let mut backstories: Vec<String> = Vec::new();

        for round in 0..plan.rounds.max(1) {
            for step in &plan.script {
                for (label, outcome) in apply_step(&mut control, step, &mut effects) {
                    if self.verbose {
                        print_step(round, label, &outcome, control.phase());
                    }
                    log::debug!("round {round} {label}: {outcome:?} -> {}", control.phase());
                    steps.push(StepRecord {
                        round,
                        label,
                        outcome,
                        phase: control.phase(),
                    });
                }
                if let Some(mission) = control.mission()
                    && backstories.last() != Some(&mission.backstory)
                {
                    backstories.push(mission.backstory.clone());
                }
            }
        }

        let entries = control.log().entries().to_vec();
        let digest = session_digest(&backstories, &entries);

        MissionSummary {
            seed,
            edition: plan.edition,
            steps,
            effects,
            backstories,
            initial_entries,
            entries,
            stored_raw: storage.raw(),
            final_phase: control.phase(),
            mission: control.mission().cloned(),
            last_reward: control.last_reward().cloned(),
            progress: control.progress(),
            voice: *control.voice(),
            digest,
        }
    }
}

fn apply_step(
    control: &mut MissionControl<MemoryLogStorage>,
    step: &Step,
    effects: &mut Vec<Effect>,
) -> Vec<(&'static str, StepOutcome)> {
    let mut dispatch = |control: &mut MissionControl<MemoryLogStorage>, event: Event| {
        match control.dispatch(event) {
            Ok(emitted) => {
                let count = emitted.len();
                effects.extend(emitted);
                StepOutcome::Accepted { effects: count }
            }
            Err(err) => StepOutcome::Rejected(err),
        }
    };

    match step {
        Step::Send(event) => vec![(step.label(), dispatch(control, event.clone()))],
        Step::TagAll => {
            let pending: Vec<u8> = control
                .scan()
                .map(|scan| {
                    scan.targets()
                        .iter()
                        .filter(|t| !t.tagged)
                        .map(|t| t.id)
                        .collect()
                })
                .unwrap_or_default();
            if pending.is_empty() {
                return vec![(
                    step.label(),
                    StepOutcome::Rejected(PhaseError::NoScan),
                )];
            }
            pending
                .into_iter()
                .map(|target| ("tag", dispatch(control, Event::Tag { target })))
                .collect()
        }
        Step::SetRequireAr(require) => {
            control.set_require_ar(*require);
            vec![(step.label(), StepOutcome::Accepted { effects: 0 })]
        }
        Step::SetRival(name) => {
            control.set_rival_name(*name);
            vec![(step.label(), StepOutcome::Accepted { effects: 0 })]
        }
        Step::SetLanguage(language) => {
            control.set_language(*language);
            vec![(step.label(), StepOutcome::Accepted { effects: 0 })]
        }
        Step::Unlock(pin) => {
            let outcome = if control.unlock_settings(pin) {
                StepOutcome::Accepted { effects: 0 }
            } else {
                StepOutcome::Denied
            };
            vec![(step.label(), outcome)]
        }
        Step::ApplySettings(draft) => {
            let outcome = match control.apply_settings(draft) {
                Ok(()) => StepOutcome::Accepted { effects: 0 },
                Err(err) => StepOutcome::Rejected(err),
            };
            vec![(step.label(), outcome)]
        }
    }
}

fn print_step(round: usize, label: &str, outcome: &StepOutcome, phase: Phase) {
    let marker = match outcome {
        StepOutcome::Accepted { effects } => format!("ok ({effects} fx)").green(),
        StepOutcome::Rejected(err) => format!("rejected: {err}").yellow(),
        StepOutcome::Denied => "denied".yellow(),
    };
    println!("    [{round}] {label:16} {marker} -> {phase}");
}

fn session_digest(backstories: &[String], entries: &[LogEntry]) -> u64 {
    let mut material = backstories.join("\n");
    material.push_str(&serde_json::to_string(entries).unwrap_or_default());
    XxHash64::oneshot(0, material.as_bytes())
}
