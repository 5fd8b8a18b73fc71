//! Rarity-tiered badges awarded when a mission is completed.
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One row of the rarity table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityTier {
    pub name: &'static str,
    pub color: &'static str,
    pub chance: f64,
}

pub const RARITY_TABLE: [RarityTier; 4] = [
    RarityTier {
        name: "Bronze",
        color: "#a16207",
        chance: 0.5,
    },
    RarityTier {
        name: "Silver",
        color: "#9ca3af",
        chance: 0.3,
    },
    RarityTier {
        name: "Gold",
        color: "#f59e0b",
        chance: 0.18,
    },
    RarityTier {
        name: "Ultra",
        color: "#8b5cf6",
        chance: 0.02,
    },
];

pub const BADGE_ICONS: [&str; 8] = ["⭐", "🛡️", "⚡", "🎯", "🛰️", "🧭", "🗝️", "🪪"];

/// Map a draw in `[0, 1)` onto the rarity table.
///
/// Walks the cumulative thresholds in table order and returns the first tier
/// whose threshold covers the draw. Draws past the final threshold (float
/// drift) resolve to the first tier.
#[must_use]
pub fn tier_for_draw(draw: f64) -> RarityTier {
    let mut cumulative = 0.0;
    for tier in RARITY_TABLE {
        cumulative += tier.chance;
        if draw <= cumulative {
            return tier;
        }
    }
    RARITY_TABLE[0]
}

pub fn roll_rarity<R: Rng + ?Sized>(rng: &mut R) -> RarityTier {
    tier_for_draw(rng.r#gen::<f64>())
}

/// A rolled badge as stored in the mission log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: u64,
    pub title: String,
    pub color: String,
    pub icon: String,
    pub rarity: String,
    pub task: String,
    pub date: String,
}

impl Badge {
    /// Roll a fresh badge for a completed task.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, task: &str, date: &str) -> Self {
        let tier = roll_rarity(rng);
        let icon = BADGE_ICONS.choose(rng).copied().unwrap_or("⭐");
        Self {
            id: rng.next_u64(),
            title: format!("{} Agent", tier.name),
            color: tier.color.to_string(),
            icon: icon.to_string(),
            rarity: tier.name.to_string(),
            task: task.to_string(),
            date: date.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn cumulative_thresholds_pick_expected_tiers() {
        assert_eq!(tier_for_draw(0.0).name, "Bronze");
        assert_eq!(tier_for_draw(0.5).name, "Bronze");
        assert_eq!(tier_for_draw(0.500_001).name, "Silver");
        assert_eq!(tier_for_draw(0.79).name, "Silver");
        assert_eq!(tier_for_draw(0.81).name, "Gold");
        assert_eq!(tier_for_draw(0.979).name, "Gold");
        assert_eq!(tier_for_draw(0.99).name, "Ultra");
    }

    #[test]
    fn out_of_range_draw_falls_back_to_first_tier() {
        assert_eq!(tier_for_draw(1.5).name, "Bronze");
    }

    #[test]
    fn chances_sum_to_one() {
        let total: f64 = RARITY_TABLE.iter().map(|t| t.chance).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rolled_badge_carries_task_date_and_tier_title() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let badge = Badge::roll(&mut rng, "tidy the room", "16/10/2026");
        assert_eq!(badge.task, "tidy the room");
        assert_eq!(badge.date, "16/10/2026");
        assert_eq!(badge.title, format!("{} Agent", badge.rarity));
        assert!(BADGE_ICONS.contains(&badge.icon.as_str()));
        assert!(RARITY_TABLE.iter().any(|t| t.color == badge.color));
    }
}
