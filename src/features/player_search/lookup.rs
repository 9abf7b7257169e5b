//! Remote lookup seam
//!
//! The controller only sees this trait; `StatsApi` implements it for the
//! real backend and tests plug in scripted fakes.

use futures_util::future::BoxFuture;
use std::fmt;

/// Message shown for any failed lookup; the cause is only logged
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to search players";

/// Search-as-you-type backend
pub trait PlayerLookup: Send + Sync {
    /// Fetch usernames matching `term`, in the order the backend ranks them
    fn search(&self, term: &str) -> BoxFuture<'static, Result<Vec<String>, LookupError>>;
}

/// A failed remote search (network, timeout, non-success status, bad body)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    detail: String,
}

impl LookupError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Underlying cause, for logs only
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Fixed text for the UI
    pub fn user_message(&self) -> &'static str {
        LOOKUP_FAILED_MESSAGE
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player search failed: {}", self.detail)
    }
}

impl std::error::Error for LookupError {}
