//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `record`: Record and schema types
//! - `warning`: Non-fatal merge diagnostics
//! - `error`: Error types for the balancer

pub mod error;
pub mod record;
pub mod warning;

pub use error::BalancerError;
pub use record::{Record, Schema, NAME_COLUMN};
pub use warning::MergeWarning;
