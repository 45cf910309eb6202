//! Session status and report types.
//!
//! A session is one full execution of a property under a fixed
//! configuration and seed. While it runs, the engine streams
//! [`SessionStatus`] values through the adapter's progress callback;
//! when it returns, it hands back exactly one [`SessionReport`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// In-flight status reported by the engine during a session.
///
/// Transient: one value at a time, each callback overwrites the last.
/// Final states are not expressed here; they arrive as the session's
/// [`SessionReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Generating and executing test cases.
    Running {
        /// Successful test cases completed so far.
        completed: u32,
    },
    /// Searching for a minimal counterexample.
    Shrinking {
        /// Shrink steps performed so far.
        steps: u32,
    },
}

/// Final report of a completed session.
///
/// Produced exactly once by the engine and consumed exactly once by
/// the result renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Successful test cases executed.
    pub tests: u32,
    /// Generation attempts the property discarded.
    pub discards: u32,
    /// How the session ended.
    pub outcome: SessionOutcome,
}

/// Terminal status of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The property held for the required number of test cases.
    Ok,
    /// The discard limit was exceeded before enough cases ran.
    GaveUp,
    /// A counterexample was found.
    Failed(FailureDetail),
}

/// Detail carried by a failed session, used for rendering and replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    /// Size at which the minimal counterexample failed.
    pub size: u32,
    /// Seed that reproduces the failure.
    pub seed: u64,
    /// Shrink steps taken to reach the minimal counterexample.
    pub shrinks: u32,
    /// Engine-rendered annotations for the counterexample, echoed by
    /// the engine's formatter when verbose output is requested.
    #[serde(default)]
    pub annotations: Vec<String>,
}

impl SessionReport {
    /// Did the session pass?
    pub fn is_ok(&self) -> bool {
        matches!(self.outcome, SessionOutcome::Ok)
    }

    /// Did the session end in a failure (counterexample or give-up)?
    pub fn is_failure(&self) -> bool {
        !self.is_ok()
    }

    /// Failure detail, if the session found a counterexample.
    pub fn failure(&self) -> Option<&FailureDetail> {
        match &self.outcome {
            SessionOutcome::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::GaveUp => write!(f, "gave up"),
            Self::Failed(_) => write!(f, "failed"),
        }
    }
}
