pub mod config;
pub mod content;
pub mod error;
pub mod site;
pub mod skills;
pub mod telemetry;
