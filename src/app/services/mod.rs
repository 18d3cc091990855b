//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - File reading and writing
//! - Recent-documents bookkeeping and persistence
//! - Settings persistence
//! - Find and replace
//! - Open/save dialog filters

pub mod file_filters;
pub mod file_io;
pub mod find_replace;
pub mod recent;
pub mod settings_store;
