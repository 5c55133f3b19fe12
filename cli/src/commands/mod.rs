//! Command implementations

pub mod config;
pub mod providers;
pub mod ship;
pub mod version;
