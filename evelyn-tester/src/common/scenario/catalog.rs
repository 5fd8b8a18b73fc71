use anyhow::{Context, Result, ensure};

use super::TestScenario;
use crate::logic::mission_tester::{
    MissionPlan, MissionSummary, MissionTester, Step, StepOutcome, StorageSetup,
};
use evelyn_game::{
    Edition, Effect, Event, Language, LogEntry, Phase, PhaseError, RARITY_TABLE, SettingsDraft,
    Tone, VoiceStyle, global_lore,
};

const DATE: &str = "16/10/2026";
const TASK: &str = "tidy your room";
const PHOTO: &str = "data:image/png;base64,iVBORw0KGgo=";
const RARITY_ROUNDS: usize = 120;
const SAVED_LOG: &str = r#"[{"date":"01/09/2026","task":"feed the cat","photos":[]}]"#;

pub struct CatalogEntry {
    pub key: &'static str,
    pub title: &'static str,
    build: fn() -> MissionPlan,
}

pub const CATALOG: [CatalogEntry; 11] = [
    CatalogEntry {
        key: "smoke",
        title: "Smoke Test",
        build: smoke_plan,
    },
    CatalogEntry {
        key: "ar-gate",
        title: "Scanner Gate",
        build: ar_gate_plan,
    },
    CatalogEntry {
        key: "shuffle",
        title: "Backstory Shuffle",
        build: shuffle_plan,
    },
    CatalogEntry {
        key: "rarity-distribution",
        title: "Badge Rarity Distribution",
        build: rarity_plan,
    },
    CatalogEntry {
        key: "log-recovery",
        title: "Malformed Log Recovery",
        build: log_recovery_plan,
    },
    CatalogEntry {
        key: "storage-faults",
        title: "Storage Faults",
        build: storage_fault_plan,
    },
    CatalogEntry {
        key: "photo-edition",
        title: "Photo Edition Capture",
        build: photo_plan,
    },
    CatalogEntry {
        key: "settings-lock",
        title: "Parent Settings Lock",
        build: settings_plan,
    },
    CatalogEntry {
        key: "invalid-events",
        title: "Out Of Phase Events",
        build: invalid_events_plan,
    },
    CatalogEntry {
        key: "language-switch",
        title: "French Narration",
        build: language_plan,
    },
    CatalogEntry {
        key: "deterministic",
        title: "Deterministic Replay",
        build: deterministic_plan,
    },
];

pub fn find_catalog_scenario(key: &str) -> Option<TestScenario> {
    CATALOG
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| TestScenario::new(entry.title, (entry.build)()))
}

fn mission_events(task: &str) -> Vec<Event> {
    vec![
        Event::Start,
        Event::Generate { task: task.into() },
        Event::Approve,
        Event::Answer,
    ]
}

fn complete() -> Event {
    Event::MarkComplete { date: DATE.into() }
}

fn quick_badge_plan() -> MissionPlan {
    MissionPlan::new(Edition::Badges)
        .with_steps([Step::SetRequireAr(false)])
        .with_events(mission_events(TASK))
        .with_events([Event::Begin, complete()])
}

fn no_rejections(summary: &MissionSummary) -> Result<()> {
    if let Some(step) = summary.rejections().next() {
        anyhow::bail!("`{}` was refused: {:?}", step.label, step.outcome);
    }
    Ok(())
}

fn rejected_with(summary: &MissionSummary, label: &str, expected: &PhaseError) -> Result<()> {
    let step = summary
        .first_step(label)
        .with_context(|| format!("no `{label}` step ran"))?;
    ensure!(
        step.rejection() == Some(expected),
        "`{label}` should be refused with {expected}, got {:?}",
        step.outcome
    );
    Ok(())
}

fn stored_entries(summary: &MissionSummary) -> Result<Vec<LogEntry>> {
    let raw = summary
        .stored_raw
        .as_deref()
        .context("nothing was written to storage")?;
    serde_json::from_str(raw).context("stored log is not a valid entry array")
}

fn smoke_plan() -> MissionPlan {
    quick_badge_plan()
        .with_events([Event::ViewRewards, Event::Back])
        .with_expectation(no_rejections)
        .with_expectation(smoke_expectation)
}

fn smoke_expectation(summary: &MissionSummary) -> Result<()> {
    ensure!(
        summary.final_phase == Phase::Home,
        "should end at home, ended in {}",
        summary.final_phase
    );
    ensure!(summary.mission.is_none(), "mission should be discarded at home");
    ensure!(summary.entries.len() == 1, "exactly one log entry expected");
    let entry = &summary.entries[0];
    ensure!(entry.task == TASK && entry.date == DATE, "entry fields: {entry:?}");
    ensure!(entry.reward.badge().is_some(), "badge edition must award a badge");
    ensure!(
        summary.progress.xp == 25 && summary.progress.level == 0,
        "one mission should give 25 XP at level 0, got {:?}",
        summary.progress
    );
    ensure!(
        summary.narrations().any(|text| text.contains(TASK)),
        "backstory narration should mention the task"
    );
    ensure!(
        summary.count_effect(&Effect::Tone(Tone::RadioBeep)) == 1,
        "answering plays one radio beep"
    );
    ensure!(stored_entries(summary)? == summary.entries, "storage and memory disagree");
    Ok(())
}

fn ar_gate_plan() -> MissionPlan {
    MissionPlan::new(Edition::Badges)
        .with_events(mission_events("brush your teeth"))
        .with_events([Event::Begin, Event::OpenScanner, Event::ScanDone])
        .with_steps([Step::TagAll])
        .with_events([Event::ScanDone, Event::Begin, complete()])
        .with_expectation(ar_gate_expectation)
}

fn ar_gate_expectation(summary: &MissionSummary) -> Result<()> {
    rejected_with(summary, "begin", &PhaseError::ArGateLocked)?;
    rejected_with(summary, "scan_done", &PhaseError::ScanIncomplete { remaining: 3 })?;
    ensure!(
        summary.rejections().count() == 2,
        "only the gated begin and early scan_done should be refused"
    );
    ensure!(
        summary.count_effect(&Effect::Tone(Tone::TagBlip)) == 3,
        "each drone tag plays a blip"
    );
    ensure!(
        summary.count_effect(&Effect::AcquireCamera) == 1,
        "camera acquired once for the scanner"
    );
    ensure!(
        summary.count_effect(&Effect::ReleaseCamera) == 2,
        "camera released after the scan and after completion"
    );
    ensure!(summary.final_phase == Phase::Success, "mission should complete");
    Ok(())
}

fn shuffle_plan() -> MissionPlan {
    let task = "water the plants";
    MissionPlan::new(Edition::Badges)
        .with_steps([Step::SetRequireAr(false)])
        .with_events([Event::Start, Event::Generate { task: task.into() }])
        .with_events(std::iter::repeat_n(Event::Shuffle, 4))
        .with_events([Event::Approve])
        .with_expectation(no_rejections)
        .with_expectation(move |summary: &MissionSummary| {
            ensure!(
                summary.backstories.len() >= 2,
                "shuffling should produce a new backstory"
            );
            for story in &summary.backstories {
                ensure!(story.contains(task), "backstory lost the task: {story}");
            }
            let mission = summary.mission.as_ref().context("mission dropped")?;
            ensure!(
                summary
                    .backstories
                    .iter()
                    .all(|story| story.starts_with(&mission.commander.name)),
                "commander changed during shuffle"
            );
            ensure!(summary.final_phase == Phase::Alert, "approve leads to the alert");
            Ok(())
        })
}

fn rarity_plan() -> MissionPlan {
    quick_badge_plan()
        .with_events([Event::GoHome])
        .with_rounds(RARITY_ROUNDS)
        .with_expectation(no_rejections)
        .with_expectation(rarity_expectation)
}

fn rarity_expectation(summary: &MissionSummary) -> Result<()> {
    ensure!(
        summary.entries.len() == RARITY_ROUNDS,
        "expected {RARITY_ROUNDS} entries, found {}",
        summary.entries.len()
    );
    let mut counts = [0_usize; RARITY_TABLE.len()];
    for entry in &summary.entries {
        let badge = entry.reward.badge().context("entry without badge")?;
        let slot = RARITY_TABLE
            .iter()
            .position(|tier| tier.name == badge.rarity)
            .with_context(|| format!("unknown rarity {}", badge.rarity))?;
        ensure!(badge.color == RARITY_TABLE[slot].color, "color/rarity mismatch");
        counts[slot] += 1;
    }
    #[allow(clippy::cast_precision_loss)]
    let bronze_share = counts[0] as f64 / RARITY_ROUNDS as f64;
    ensure!(
        (0.3..=0.7).contains(&bronze_share),
        "bronze share {bronze_share:.2} is far from 0.50 (counts {counts:?})"
    );
    ensure!(counts[0] > counts[3], "ultra outnumbered bronze: {counts:?}");
    ensure!(
        summary.progress.is_max_level(),
        "{RARITY_ROUNDS} missions should reach the top level"
    );
    Ok(())
}

fn log_recovery_plan() -> MissionPlan {
    quick_badge_plan()
        .with_storage(StorageSetup::Raw("{\"date\": broken"))
        .with_expectation(no_rejections)
        .with_expectation(|summary: &MissionSummary| {
            ensure!(summary.initial_entries == 0, "malformed log should load empty");
            let stored = stored_entries(summary)?;
            ensure!(stored.len() == 1, "log should be rewritten with the new entry");
            Ok(())
        })
}

fn storage_fault_plan() -> MissionPlan {
    quick_badge_plan()
        .with_storage(StorageSetup::Failing {
            payload: SAVED_LOG,
            reads: true,
            writes: true,
        })
        .with_expectation(no_rejections)
        .with_expectation(|summary: &MissionSummary| {
            ensure!(summary.initial_entries == 0, "unreadable log should load empty");
            ensure!(summary.final_phase == Phase::Success, "storage faults must not block");
            ensure!(summary.entries.len() == 1, "entry kept in memory");
            ensure!(
                summary.last_reward.as_ref() == Some(&summary.entries[0].reward),
                "success screen shows the logged reward"
            );
            ensure!(
                summary.stored_raw.as_deref() == Some(SAVED_LOG),
                "saved log must be left untouched"
            );
            Ok(())
        })
}

fn photo_plan() -> MissionPlan {
    MissionPlan::new(Edition::Photos)
        .with_events(mission_events(TASK))
        .with_events([
            Event::OpenScanner,
            Event::Begin,
            Event::CapturePhotos {
                photos: vec![PHOTO.into(), PHOTO.into()],
            },
            Event::CapturePhotos {
                photos: vec![PHOTO.into()],
            },
            complete(),
        ])
        .with_expectation(photo_expectation)
}

fn photo_expectation(summary: &MissionSummary) -> Result<()> {
    rejected_with(summary, "open_scanner", &PhaseError::ScannerUnavailable)?;
    ensure!(summary.rejections().count() == 1, "only the scanner should be refused");
    let entry = summary.entries.first().context("no log entry")?;
    ensure!(entry.reward.badge().is_none(), "photo edition awards no badge");
    ensure!(
        entry.reward.photos().len() == 3,
        "all captured photos belong to the entry, got {}",
        entry.reward.photos().len()
    );
    ensure!(
        summary.count_effect(&Effect::AcquireCamera) == 1
            && summary.count_effect(&Effect::ReleaseCamera) == 1,
        "camera should be held from begin until completion"
    );
    ensure!(
        summary.count_effect(&Effect::Tone(Tone::TagBlip)) == 0,
        "no drones in the photo edition"
    );
    Ok(())
}

fn settings_plan() -> MissionPlan {
    let draft = SettingsDraft {
        language: Language::French,
        rate: 1.0,
        pitch: 1.0,
        style: VoiceStyle::Playful,
    };
    MissionPlan::new(Edition::Badges)
        .with_events([Event::OpenSettings])
        .with_steps([
            Step::ApplySettings(draft),
            Step::Unlock("12"),
            Step::Unlock("2468"),
            Step::ApplySettings(draft),
            Step::Send(Event::ShowStory),
        ])
        .with_expectation(settings_expectation)
}

fn settings_expectation(summary: &MissionSummary) -> Result<()> {
    rejected_with(summary, "apply_settings", &PhaseError::SettingsLocked)?;
    let unlocks: Vec<&StepOutcome> = summary
        .steps
        .iter()
        .filter(|step| step.label == "unlock")
        .map(|step| &step.outcome)
        .collect();
    ensure!(
        matches!(
            unlocks.as_slice(),
            [StepOutcome::Denied, StepOutcome::Accepted { .. }]
        ),
        "short PIN must be denied and a four digit PIN accepted: {unlocks:?}"
    );
    ensure!(summary.voice.language == Language::French, "language not applied");
    ensure!(
        (summary.voice.rate - 1.1).abs() < 1e-4 && (summary.voice.pitch - 1.2).abs() < 1e-4,
        "playful style should lift rate and pitch: {:?}",
        summary.voice
    );
    ensure!(
        summary.narrations().next() == Some(global_lore(Language::French)),
        "lore should be read in French"
    );
    ensure!(summary.final_phase == Phase::Lore, "story screen expected");
    Ok(())
}

fn invalid_events_plan() -> MissionPlan {
    MissionPlan::new(Edition::Badges)
        .with_events([
            Event::ScanDone,
            complete(),
            Event::Tag { target: 1 },
            Event::Approve,
            Event::Back,
            Event::Start,
            Event::Generate {
                task: "   ".into(),
            },
            Event::Cancel,
        ])
        .with_expectation(invalid_events_expectation)
}

fn invalid_events_expectation(summary: &MissionSummary) -> Result<()> {
    let out_of_phase = summary
        .rejections()
        .filter(|step| matches!(step.rejection(), Some(PhaseError::InvalidTransition { .. })))
        .count();
    ensure!(out_of_phase == 5, "five events are invalid at home, saw {out_of_phase}");
    ensure!(
        summary
            .steps
            .iter()
            .take(5)
            .all(|step| step.phase == Phase::Home),
        "refused events must not move the phase"
    );
    rejected_with(summary, "generate", &PhaseError::EmptyTask)?;
    ensure!(summary.effects.is_empty(), "refused events emit nothing");
    ensure!(summary.entries.is_empty(), "nothing should be logged");
    ensure!(
        summary.final_phase == Phase::Home && summary.mission.is_none(),
        "cancel returns home without a mission"
    );
    Ok(())
}

fn language_plan() -> MissionPlan {
    let task = "ranger ta chambre";
    MissionPlan::new(Edition::Badges)
        .with_steps([
            Step::SetLanguage(Language::French),
            Step::SetRequireAr(false),
            Step::SetRival("Agent Cobalt"),
        ])
        .with_events(mission_events(task))
        .with_expectation(no_rejections)
        .with_expectation(move |summary: &MissionSummary| {
            let narrated = summary.effects.iter().find_map(|effect| match effect {
                Effect::Narrate { text, voice } => Some((text, voice)),
                _ => None,
            });
            let (text, voice) = narrated.context("backstory was not narrated")?;
            ensure!(voice.language == Language::French, "narration voice not French");
            ensure!(
                text.contains(&format!("Votre prochaine mission: {task}")),
                "French template expected: {text}"
            );
            ensure!(text.contains("Agent Cobalt se rapproche"), "rival missing: {text}");
            Ok(())
        })
}

fn deterministic_plan() -> MissionPlan {
    quick_badge_plan().with_expectation(|summary: &MissionSummary| {
        let tester = MissionTester::new(false);
        let replay = tester.run_plan(&quick_badge_plan(), summary.seed);
        ensure!(
            replay.digest == summary.digest,
            "replaying seed {} diverged",
            summary.seed
        );
        ensure!(
            replay.entries == summary.entries,
            "replayed log differs for seed {}",
            summary.seed
        );
        let other = tester.run_plan(&quick_badge_plan(), summary.seed.wrapping_add(1));
        ensure!(
            other.digest != summary.digest,
            "neighbouring seeds produced identical sessions"
        );
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(key: &str, seed: u64) -> Result<()> {
        let scenario = find_catalog_scenario(key).expect("catalog entry");
        let summary = MissionTester::new(false).run_plan(&scenario.plan, seed);
        scenario
            .plan
            .expectations
            .iter()
            .try_for_each(|expectation| expectation.evaluate(&summary))
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = CATALOG.iter().map(|entry| entry.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATALOG.len());
    }

    #[test]
    fn catalog_passes_on_reference_seeds() {
        for entry in &CATALOG {
            for seed in [1337, 42] {
                if let Err(err) = run(entry.key, seed) {
                    panic!("{} failed on seed {seed}: {err:#}", entry.key);
                }
            }
        }
    }

    #[test]
    fn broken_expectation_is_caught() {
        let plan = smoke_plan().with_expectation(|summary: &MissionSummary| {
            ensure!(summary.entries.len() == 2, "wanted two entries");
            Ok(())
        });
        let summary = MissionTester::new(false).run_plan(&plan, 7);
        let failed = plan
            .expectations
            .iter()
            .find_map(|expectation| expectation.evaluate(&summary).err());
        assert_eq!(failed.map(|e| e.to_string()).as_deref(), Some("wanted two entries"));
    }
}
