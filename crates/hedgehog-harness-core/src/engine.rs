//! The generation-engine capability.

use crate::config::SessionConfig;
use crate::session::{SessionReport, SessionStatus};

/// A property-generation engine, as seen by the harness.
///
/// The engine owns value generation, shrinking, and the textual
/// rendering of its own reports; the harness owns nothing but the
/// translation between this contract and the host runner's. A session
/// is synchronous: `run_session` drives its internal
/// generate/execute/shrink loop to completion, calling `on_status`
/// once per step, and only then returns the final report.
pub trait PropertyEngine {
    /// The opaque property definition this engine executes.
    type Property;

    /// Run one property under one configuration, starting from the
    /// given size and seed.
    ///
    /// Status callbacks are delivered in the order the engine produces
    /// them and must not be buffered or reordered downstream. Given
    /// the same property, configuration, size, and seed, the returned
    /// report is identical across runs.
    fn run_session(
        &self,
        config: &SessionConfig,
        size: u32,
        seed: u64,
        property: &Self::Property,
        on_status: &mut dyn FnMut(SessionStatus),
    ) -> SessionReport;

    /// Render a report with the engine's own formatter.
    ///
    /// This is the base text the harness builds its final output on;
    /// counterexample and diff formatting live here, not in the
    /// harness. `verbose` asks the formatter to echo the generated
    /// values behind a failure.
    fn render_report(&self, report: &SessionReport, verbose: bool) -> String;
}
