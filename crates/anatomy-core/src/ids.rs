//! Prefixed ID generation.
//!
//! IDs look like `user-1767225600000-9f3a61c2`: a prefix, the creation time in
//! Unix milliseconds, and 4 random bytes as hex. The random suffix keeps IDs
//! unique when several are minted within the same millisecond.

use chrono::{DateTime, Utc};

use crate::errors::CoreError;

pub const PREFIX_USER: &str = "user";
pub const PREFIX_ADMIN: &str = "admin";
pub const PREFIX_SUBSCRIPTION: &str = "sub";

const RANDOM_BYTES: usize = 4;

/// Mint a new ID with the given prefix.
///
/// # Errors
///
/// Returns `CoreError::IdGeneration` if the OS random source is unavailable.
pub fn prefixed_id(prefix: &str, now: DateTime<Utc>) -> Result<String, CoreError> {
    let mut bytes = [0u8; RANDOM_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| CoreError::IdGeneration(e.to_string()))?;
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("{prefix}-{}-{suffix}", now.timestamp_millis()))
}
