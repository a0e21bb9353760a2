pub mod broadcast;
pub mod config;
pub mod menu;
pub mod preferences;
pub mod status;
