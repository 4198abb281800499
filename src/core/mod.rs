pub mod codec;
pub mod directory;
pub mod roster;

pub use crate::domain::model::{Department, Employee, EmployeeId};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
pub use directory::DirectoryStore;
pub use roster::Roster;
