use evelyn_game::{
    Edition, Effect, Event, LogStorage, MemoryLogStorage, MissionControl, MissionLogStore, Phase,
    PhaseError, Tone, constants::LOG_STORAGE_KEY,
};

const DATE: &str = "16/10/2026";

fn run_badge_mission(mc: &mut MissionControl<MemoryLogStorage>, task: &str) {
    mc.dispatch(Event::Start).unwrap();
    mc.dispatch(Event::Generate { task: task.into() }).unwrap();
    mc.dispatch(Event::Approve).unwrap();
    mc.dispatch(Event::Answer).unwrap();
    if mc.mission().is_some_and(|m| m.require_ar) {
        mc.dispatch(Event::OpenScanner).unwrap();
        let ids: Vec<u8> = mc.scan().unwrap().targets().iter().map(|t| t.id).collect();
        for id in ids {
            mc.dispatch(Event::Tag { target: id }).unwrap();
        }
        mc.dispatch(Event::ScanDone).unwrap();
    }
    mc.dispatch(Event::Begin).unwrap();
    mc.dispatch(Event::MarkComplete { date: DATE.into() }).unwrap();
}

#[test]
fn tidy_the_room_end_to_end() {
    let storage = MemoryLogStorage::new();
    let mut mc = MissionControl::new(Edition::Badges, storage.clone(), 0x00C0_FFEE);

    run_badge_mission(&mut mc, "tidy the room");

    assert_eq!(mc.phase(), Phase::Success);
    assert_eq!(mc.log().len(), 1);
    let entry = &mc.log().entries()[0];
    assert_eq!(entry.task, "tidy the room");
    assert_eq!(entry.date, DATE);
    let badge = entry.reward.badge().unwrap();
    assert_eq!(badge.task, "tidy the room");
    assert_eq!(mc.last_reward(), Some(&entry.reward));

    let reopened = MissionLogStore::open(storage);
    assert_eq!(reopened.entries(), mc.log().entries());
}

#[test]
fn rewards_then_back_returns_home_without_mission() {
    let mut mc = MissionControl::new(Edition::Badges, MemoryLogStorage::new(), 5);
    run_badge_mission(&mut mc, "read a book");
    mc.dispatch(Event::ViewRewards).unwrap();
    assert_eq!(mc.phase(), Phase::Trophies);
    mc.dispatch(Event::Back).unwrap();
    assert_eq!(mc.phase(), Phase::Home);
    assert!(mc.mission().is_none());
}

#[test]
fn progress_accumulates_across_sessions() {
    let storage = MemoryLogStorage::new();
    {
        let mut mc = MissionControl::new(Edition::Badges, storage.clone(), 1);
        for task in ["one", "two", "three"] {
            run_badge_mission(&mut mc, task);
            mc.dispatch(Event::GoHome).unwrap();
        }
        assert_eq!(mc.progress().xp, 75);
        assert_eq!(mc.progress().level, 1);
    }
    let mut mc = MissionControl::new(Edition::Badges, storage, 2);
    assert_eq!(mc.log().len(), 3);
    run_badge_mission(&mut mc, "four");
    mc.dispatch(Event::GoHome).unwrap();
    run_badge_mission(&mut mc, "five");
    assert_eq!(mc.progress().xp, 125);
    assert_eq!(mc.progress().level, 2);
    let newest: Vec<&str> = mc.log().newest_first().map(|e| e.task.as_str()).collect();
    assert_eq!(newest, ["five", "four", "three", "two", "one"]);
}

#[test]
fn failed_storage_still_completes_mission() {
    let storage = MemoryLogStorage::new();
    storage.set_fail_writes(true);
    let mut mc = MissionControl::new(Edition::Badges, storage.clone(), 9);
    run_badge_mission(&mut mc, "offline mission");
    assert_eq!(mc.phase(), Phase::Success);
    assert_eq!(mc.log().len(), 1);
    assert_eq!(storage.read(LOG_STORAGE_KEY).unwrap(), None);
}

#[test]
fn photo_edition_walkthrough() {
    let storage = MemoryLogStorage::new();
    let mut mc = MissionControl::new(Edition::Photos, storage.clone(), 77);
    mc.dispatch(Event::Start).unwrap();
    mc.dispatch(Event::Generate {
        task: "build a fort".into(),
    })
    .unwrap();
    let mission = mc.mission().unwrap();
    assert_eq!(mission.commander.name, "Commander Nova");
    assert!(!mission.require_ar);
    assert!(!mission.backstory.contains("Sensors report"));

    mc.dispatch(Event::Approve).unwrap();
    mc.dispatch(Event::Answer).unwrap();
    assert_eq!(
        mc.dispatch(Event::OpenScanner),
        Err(PhaseError::ScannerUnavailable)
    );
    let effects = mc.dispatch(Event::Begin).unwrap();
    assert_eq!(effects.as_slice(), [Effect::AcquireCamera]);
    mc.dispatch(Event::CapturePhotos {
        photos: vec!["data:image/jpeg;base64,/9j/".into()],
    })
    .unwrap();
    let effects = mc.dispatch(Event::MarkComplete { date: DATE.into() }).unwrap();
    assert_eq!(effects.as_slice(), [Effect::ReleaseCamera]);

    let raw = storage.read(LOG_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["task"], "build a fort");
    assert_eq!(json[0]["photos"][0], "data:image/jpeg;base64,/9j/");
    assert!(json[0].get("badge").is_none());
}

#[test]
fn alert_dismiss_and_lore_cancel_narration() {
    let mut mc = MissionControl::new(Edition::Badges, MemoryLogStorage::new(), 3);
    mc.dispatch(Event::ShowStory).unwrap();
    assert_eq!(mc.phase(), Phase::Lore);
    let effects = mc.dispatch(Event::Back).unwrap();
    assert_eq!(effects.as_slice(), [Effect::CancelNarration]);

    mc.dispatch(Event::Start).unwrap();
    mc.dispatch(Event::Generate { task: "nap".into() }).unwrap();
    mc.dispatch(Event::Edit).unwrap();
    assert_eq!(mc.phase(), Phase::Compose);
    mc.dispatch(Event::Generate { task: "nap".into() }).unwrap();
    mc.dispatch(Event::Approve).unwrap();
    let effects = mc.dispatch(Event::Dismiss).unwrap();
    assert_eq!(effects.as_slice(), [Effect::CancelNarration]);
    assert_eq!(mc.phase(), Phase::Home);
    assert!(mc.mission().is_none());
    assert!(!effects.contains(&Effect::Tone(Tone::RadioBeep)));
}

#[test]
fn every_phase_rejects_unknown_events() {
    let mut mc = MissionControl::new(Edition::Badges, MemoryLogStorage::new(), 4);
    mc.dispatch(Event::OpenSettings).unwrap();
    for event in [Event::Start, Event::Begin, Event::Back, Event::ScanDone] {
        assert!(matches!(
            mc.dispatch(event),
            Err(PhaseError::InvalidTransition {
                phase: Phase::Settings,
                ..
            })
        ));
    }
    mc.dispatch(Event::Close).unwrap();
    assert_eq!(mc.phase(), Phase::Home);
}
