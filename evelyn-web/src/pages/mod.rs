pub mod active;
pub mod alert;
pub mod approve;
pub mod ar_scan;
pub mod briefing;
pub mod compose;
pub mod home;
pub mod lore;
pub mod not_found;
pub mod settings;
pub mod success;
pub mod trophies;
