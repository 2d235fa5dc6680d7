//! Configuration module for Spendwise
//!
//! - Path resolution for the data directory
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendwisePaths;
pub use settings::Settings;
