//! Username validation
//!
//! Client-side check applied before a submitted name becomes a navigation
//! target. Names picked from the suggestion list skip this check.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref USERNAME_CHARS: Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

/// Shortest accepted username
pub const MIN_USERNAME_LEN: usize = 3;
/// Longest accepted username
pub const MAX_USERNAME_LEN: usize = 16;

/// Check a candidate username against the length and character rules
pub fn is_valid_username(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        return false;
    }
    USERNAME_CHARS.is_match(candidate)
}

/// A username that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate `input` verbatim (no trimming or case folding)
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        if !is_valid_username(input) {
            return Err(ValidationError::Format);
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Why a submitted username was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace was entered
    Empty,
    /// Wrong length or a character outside `[A-Za-z0-9_]`
    Format,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Please enter a username"),
            ValidationError::Format => write!(
                f,
                "Username must be {}-{} characters long and contain only letters, numbers, and underscores",
                MIN_USERNAME_LEN, MAX_USERNAME_LEN
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("a_valid_name1"));
        assert!(is_valid_username("abc"));
        assert!(is_valid_username("Player_1"));
        assert!(is_valid_username("sixteen_chars_ok"));
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("bad name!"));
        assert!(!is_valid_username("seventeen_chars_x"));
        assert!(!is_valid_username("dash-name"));
        assert!(!is_valid_username("ünï"));
    }

    #[test]
    fn test_parse_keeps_input_verbatim() {
        let name = Username::parse("Player_1").unwrap();
        assert_eq!(name.as_str(), "Player_1");
        assert_eq!(name.to_string(), "Player_1");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Username::parse(""), Err(ValidationError::Empty));
        assert_eq!(Username::parse("   "), Err(ValidationError::Empty));
        assert_eq!(Username::parse(" abc"), Err(ValidationError::Format));
        assert_eq!(Username::parse("ab"), Err(ValidationError::Format));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "Please enter a username");
        assert_eq!(
            ValidationError::Format.to_string(),
            "Username must be 3-16 characters long and contain only letters, numbers, and underscores"
        );
    }
}
