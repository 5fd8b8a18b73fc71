pub mod badge_card;
pub mod confetti;
pub mod neon_frame;
pub mod top_bar;
pub mod urgency_meter;
