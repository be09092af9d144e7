//! Command implementations

pub mod hook;
