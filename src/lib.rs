pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use crate::core::{checker::InteractionChecker, rxnav::RxNavSettings};
pub use utils::error::{Result, RxError};
