//! Result rendering.
//!
//! Turns a final [`SessionReport`] into the host runner's pass/fail
//! verdict plus output text. The base text always comes from the
//! engine's own formatter; the renderer only decides what to append:
//! a replay suggestion when the run failed and replay reporting is
//! enabled. Total over every possible report: there is no unknown
//! status.

use hedgehog_harness_core::{PropertyEngine, SessionReport};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::HarnessOptions;
use crate::replay::ReplayToken;

/// Verdict and output for one test invocation, as handed back to the
/// host runner. Both a counterexample and a give-up count as a failed
/// test; only a counterexample carries a replay token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Did the property pass?
    pub passed: bool,
    /// Human-readable output for the host runner to display.
    pub output: String,
}

/// Render a session report for the host runner.
///
/// The `verbose` flag is forwarded to the engine's formatter untouched;
/// it controls whether generated values are echoed there.
pub fn render_outcome<E: PropertyEngine>(
    engine: &E,
    name: &str,
    report: &SessionReport,
    options: &HarnessOptions,
) -> TestOutcome {
    let mut output = engine.render_report(report, options.verbose);

    if options.show_replay {
        if let Some(failure) = report.failure() {
            let token = ReplayToken::new(failure.size, failure.seed);
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("Use '--hedgehog-replay \"{token}\"' to reproduce."));
        }
    }

    let passed = report.is_ok();
    debug!(test = name, passed, outcome = %report.outcome, "rendered property result");
    TestOutcome { passed, output }
}
