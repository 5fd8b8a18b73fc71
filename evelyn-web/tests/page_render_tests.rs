use evelyn_game::{
    ArScan, Badge, Commander, LogEntry, Mission, Progress, Reward, VoiceConfig,
};
use evelyn_web::pages::{
    alert::{AlertPage, AlertPageProps},
    approve::{ApprovePage, ApprovePageProps},
    briefing::{BriefingPage, BriefingPageProps},
    lore::{LorePage, LorePageProps},
    not_found::{NotFound, Props as NotFoundProps},
    success::{SuccessPage, SuccessPageProps},
    trophies::{TrophiesPage, TrophiesPageProps},
};
use futures::executor::block_on;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use yew::{Callback, LocalServerRenderer};

fn mission(require_ar: bool) -> Mission {
    Mission {
        task: "tidy the room".to_string(),
        backstory: "Commander Nova: For your next mission, you must tidy the room before the clocktower gears are spinning out of control.".to_string(),
        commander: Commander::new("Commander Nova", "🌟"),
        require_ar,
    }
}

fn badge_entry(task: &str) -> LogEntry {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    LogEntry {
        date: "16/10/2026".to_string(),
        task: task.to_string(),
        reward: Reward::Badge {
            badge: Badge::roll(&mut rng, task, "16/10/2026"),
        },
    }
}

#[test]
fn lore_page_shows_text_and_back() {
    evelyn_web::i18n::set_lang("en");
    let props = LorePageProps {
        lore: evelyn_game::global_lore(evelyn_game::Language::English).into(),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LorePage>::with_props(props).render());
    assert!(html.contains("Why Agent Evelyn is Needed"));
    assert!(html.contains("The world needs Agent Evelyn."));
    assert!(html.contains("Back"));
}

#[test]
fn approve_page_flags_ar_requirement() {
    evelyn_web::i18n::set_lang("en");
    let props = ApprovePageProps {
        mission: mission(true),
        on_edit: Callback::noop(),
        on_shuffle: Callback::noop(),
        on_approve: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ApprovePage>::with_props(props).render());
    assert!(html.contains("Mission: tidy the room"));
    assert!(html.contains("Commander Nova"));
    assert!(html.contains("requires an AR scan"));
    assert!(html.contains("Shuffle Story"));
}

#[test]
fn alert_page_names_the_caller() {
    evelyn_web::i18n::set_lang("en");
    let props = AlertPageProps {
        commander: Commander::new("Chief Tempest", "⚡"),
        intensity: 1,
        voice: VoiceConfig::default(),
        on_answer: Callback::noop(),
        on_dismiss: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AlertPage>::with_props(props).render());
    assert!(html.contains("INCOMING MISSION CALL"));
    assert!(html.contains("⚡ Chief Tempest"));
    assert!(html.contains("urgency meter"));
}

#[test]
fn briefing_swaps_scanner_for_begin_once_cleared() {
    evelyn_web::i18n::set_lang("en");
    let gated = BriefingPageProps {
        mission: mission(true),
        ar_cleared: false,
        on_begin: Callback::noop(),
        on_open_scanner: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<BriefingPage>::with_props(gated.clone()).render());
    assert!(html.contains("Open Scanner"));
    assert!(!html.contains("Begin Mission"));

    let cleared = BriefingPageProps {
        ar_cleared: true,
        ..gated
    };
    let html = block_on(LocalServerRenderer::<BriefingPage>::with_props(cleared).render());
    assert!(html.contains("Begin Mission"));
    assert!(html.contains("Area secured."));
}

#[test]
fn success_page_describes_reward_kind() {
    evelyn_web::i18n::set_lang("en");
    let entry = badge_entry("tidy the room");
    let props = SuccessPageProps {
        reward: Some(entry.reward.clone()),
        confetti_seed: 1,
        on_view_rewards: Callback::noop(),
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SuccessPage>::with_props(props).render());
    assert!(html.contains("Mission Complete!"));
    assert!(html.contains("You earned a new badge."));
    assert!(html.contains(" Agent"));

    let props = SuccessPageProps {
        reward: Some(Reward::Photos { photos: vec![] }),
        confetti_seed: 1,
        on_view_rewards: Callback::noop(),
        on_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<SuccessPage>::with_props(props).render());
    assert!(html.contains("Your photos were added"));
}

#[test]
fn trophy_room_lists_entries_or_empty_state() {
    evelyn_web::i18n::set_lang("en");
    let empty = TrophiesPageProps {
        entries: vec![],
        progress: Progress::from_missions(0),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TrophiesPage>::with_props(empty).render());
    assert!(html.contains("No missions yet. Complete one to earn a badge!"));

    let photo = LogEntry {
        date: "17/10/2026".to_string(),
        task: "feed the cat".to_string(),
        reward: Reward::Photos {
            photos: vec!["data:image/png;base64,AAAA".to_string()],
        },
    };
    let listed = TrophiesPageProps {
        entries: vec![photo, badge_entry("tidy the room")],
        progress: Progress::from_missions(2),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TrophiesPage>::with_props(listed).render());
    assert!(html.contains("Level 1 • XP 50"));
    assert!(html.contains("2 missions logged"));
    assert!(html.contains("17/10/2026 • feed the cat"));
    assert!(html.contains("data:image/png;base64,AAAA"));
    assert!(html.contains("Rarity: "));
    assert!(html.find("feed the cat") < html.find("tidy the room"));
}

#[test]
fn french_chrome_renders_translated() {
    evelyn_web::i18n::set_lang("fr");
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(!html.contains("not_found."));
    evelyn_web::i18n::set_lang("en");
}

#[test]
fn scanner_page_lists_three_drones() {
    evelyn_web::i18n::set_lang("en");
    let props = evelyn_web::pages::ar_scan::ArScanPageProps {
        scan: ArScan::new(&mut ChaCha20Rng::seed_from_u64(8)),
        on_tag: Callback::noop(),
        on_done: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(
        LocalServerRenderer::<evelyn_web::pages::ar_scan::ArScanPage>::with_props(props).render(),
    );
    assert_eq!(html.matches(">DRONE<").count(), 3);
    assert!(html.contains("camera-feed"));
}
