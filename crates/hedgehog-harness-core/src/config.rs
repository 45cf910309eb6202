//! Session configuration.

use serde::{Deserialize, Serialize};

/// Limits governing a single property-test session.
///
/// Immutable once built; one value is owned by each session. The
/// limits are independent of each other, so there is no cross-field
/// validation beyond what the option parsers already enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Successful test cases required before the property passes.
    pub test_limit: u32,
    /// Discarded generation attempts allowed before giving up.
    pub discard_limit: u32,
    /// Shrink steps allowed while searching for a minimal
    /// counterexample. Zero disables shrinking.
    pub shrink_limit: u32,
    /// Re-executions of a failing shrink candidate used to rule out
    /// flaky failures. Zero accepts a candidate on its first failure.
    pub shrink_retries: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            test_limit: 100,
            discard_limit: 100,
            shrink_limit: 100,
            shrink_retries: 10,
        }
    }
}
