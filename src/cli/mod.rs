// Command interface: prompts, display and error reporting only. All
// invariants are enforced by the core it calls into.

pub mod menu;

pub use menu::Menu;
