//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Recent-document records
//! - Editing sessions and their formatting
//! - Application settings
//! - Message types for the event system

pub mod messages;
pub mod record;
pub mod session;
pub mod settings;
pub mod style;

pub use messages::Message;
pub use record::DocumentRecord;
pub use session::{EditingSession, SessionId, SessionKind};
pub use settings::AppSettings;
pub use style::{FontFamily, Rgb, TextStyle};
