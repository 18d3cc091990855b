//! Controllers - orchestration between the UI and the services layer.

pub mod prompt;
pub mod tabs;
pub mod workspace;

pub use prompt::{notify_not_found, notify_replaced, CloseChoice, Prompter};
pub use tabs::TabManager;
pub use workspace::{CloseOutcome, OpenOutcome, SaveOutcome, Screen, Workspace};
