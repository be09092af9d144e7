//! Core types for stagehand
//!
//! This is the foundation crate (Layer 0) that all other stagehand crates
//! depend on. It provides:
//! - Base error types
//! - Callback identity type used by the dispatch table
//!
//! This crate has no dependencies on other stagehand crates.

pub mod error;
pub mod identity;

pub use error::{Error, Result};
pub use identity::CallbackId;
