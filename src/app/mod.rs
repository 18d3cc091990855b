//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (sessions, records, settings, styles, messages)
//! - `controllers/` - Orchestration (TabManager, Workspace, Prompter)
//! - `services/` - Business operations (file I/O, recent list, settings store, find/replace)
//! - `infrastructure/` - External integrations (errors, config paths, logging)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{CloseChoice, Prompter, Screen, Workspace};
pub use domain::{AppSettings, DocumentRecord, EditingSession, Message, SessionId, TextStyle};
pub use infrastructure::error::{AppError, Result};
pub use services::recent::{RecentDocuments, RecentDocumentsStore};
pub use services::settings_store::SettingsStore;
