//! Progress translation.
//!
//! Maps the engine's in-flight [`SessionStatus`] onto the normalized
//! progress surface the host runner consumes: a phase label and a
//! completion ratio in `[0, 1]`. Pure and stateless: one call per
//! status callback, each independent of the last. Discards carry no
//! progress phase; only the test and shrink limits are reported
//! against.

use hedgehog_harness_core::{SessionConfig, SessionStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of an in-flight session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Generating and executing test cases.
    Running,
    /// Searching for a minimal counterexample.
    Shrinking,
}

impl Phase {
    /// Host-facing label for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Shrinking => "Shrinking",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized progress event delivered to the host runner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Current phase.
    pub phase: Phase,
    /// Completion ratio within the phase, always in `[0, 1]`.
    pub ratio: f64,
}

/// Translate an in-flight status into a progress event.
///
/// Running progress is `completed / test_limit`, shrinking progress is
/// `steps / shrink_limit`, both clamped so a counter transiently
/// beyond its limit never reports a ratio above 1.
pub fn translate(config: &SessionConfig, status: SessionStatus) -> ProgressEvent {
    match status {
        SessionStatus::Running { completed } => ProgressEvent {
            phase: Phase::Running,
            ratio: ratio(completed, config.test_limit),
        },
        SessionStatus::Shrinking { steps } => ProgressEvent {
            phase: Phase::Shrinking,
            ratio: ratio(steps, config.shrink_limit),
        },
    }
}

fn ratio(done: u32, limit: u32) -> f64 {
    if limit == 0 {
        // A zero limit means the phase cannot make progress; report it
        // as already complete rather than dividing by zero.
        return 1.0;
    }
    (f64::from(done) / f64::from(limit)).clamp(0.0, 1.0)
}
