use std::collections::BTreeMap;

use evelyn_game::{Badge, CommanderRoster, Edition, RARITY_TABLE, roll_rarity, tier_for_draw};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const ROLLS: usize = 10_000;

#[test]
#[allow(clippy::cast_precision_loss)]
fn rarity_distribution_matches_table() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xBADE);
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for _ in 0..ROLLS {
        *counts.entry(roll_rarity(&mut rng).name).or_default() += 1;
    }
    for tier in RARITY_TABLE {
        let observed = counts.get(tier.name).copied().unwrap_or_default() as f64 / ROLLS as f64;
        let tolerance = if tier.chance < 0.05 { 0.01 } else { 0.03 };
        assert!(
            (observed - tier.chance).abs() < tolerance,
            "{} observed {observed:.3} expected {:.2}",
            tier.name,
            tier.chance
        );
    }
}

#[test]
fn badge_rolls_use_table_colors() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    for _ in 0..500 {
        let badge = Badge::roll(&mut rng, "practice piano", "16/10/2026");
        let tier = RARITY_TABLE
            .iter()
            .find(|t| t.name == badge.rarity)
            .unwrap();
        assert_eq!(badge.color, tier.color);
    }
}

#[test]
fn threshold_edges_are_inclusive() {
    assert_eq!(tier_for_draw(0.98).name, "Gold");
    assert_eq!(tier_for_draw(0.999_999).name, "Ultra");
}

#[test]
fn commander_picks_are_roughly_uniform() {
    let roster = CommanderRoster::for_edition(Edition::Badges);
    let mut rng = ChaCha20Rng::seed_from_u64(0xA6E7);
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for _ in 0..ROLLS {
        *counts.entry(roster.pick(&mut rng).name).or_default() += 1;
    }
    assert_eq!(counts.len(), 5);
    for (name, count) in counts {
        assert!((1_700..2_300).contains(&count), "{name} picked {count} times");
    }
}
