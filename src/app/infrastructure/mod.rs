//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with the host system:
//! - Error types
//! - Config file locations
//! - Logging setup

pub mod error;
pub mod logging;
pub mod paths;
