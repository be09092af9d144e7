//! Callback identity
//!
//! Every registration in a hook table carries a stable identity so that
//! re-registering the same callback at the same priority replaces the
//! previous entry instead of duplicating it.

use std::fmt;

/// Stable key distinguishing a registration within a priority tier
///
/// Named callbacks are keyed by their name; anonymous closures get an
/// opaque token minted by the hook table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallbackId {
    /// A callback with a user-visible name
    Named(String),
    /// An unnamed closure, keyed by a table-minted token
    Anonymous(u64),
}

impl CallbackId {
    /// Create a named identity
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The user-visible name, if this is a named callback
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Anonymous(_) => None,
        }
    }
}

impl fmt::Display for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Anonymous(_) => f.write_str("closure"),
        }
    }
}
