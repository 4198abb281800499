pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;

pub use crate::adapters::{FileStorage, MemoryStorage};
pub use crate::config::AppConfig;
pub use crate::core::codec::{decode, encode};
pub use crate::core::{Department, DirectoryStore, Employee, EmployeeId, Roster, Storage};
pub use crate::utils::error::{Result, RosterError};
