//! Binding to the host runner's single-test contract.
//!
//! The host runner sees every test the same way: a name, a list of
//! configurable options, and a run operation that streams progress
//! and returns a verdict. [`TestCase`] is that capability;
//! [`PropertyTest`] is its one concrete variant, binding a name and a
//! property to a generation engine.

use hedgehog_harness_core::{OsSeedSource, PropertyEngine, SeedSource};
use tracing::trace;

use crate::driver::run_property;
use crate::options::{HarnessOptions, OptionDecl, OptionSet, OPTION_DECLS};
use crate::progress::ProgressEvent;
use crate::render::{render_outcome, TestOutcome};
use crate::Result;

/// A single named test, as the host runner schedules and reports it.
///
/// Implementations hold no state across invocations: each `run` is an
/// independent session, and whether two tests run concurrently is
/// entirely the host's decision.
pub trait TestCase {
    /// Name the host runner displays and selects by.
    fn name(&self) -> &str;

    /// The options this test understands, for the host to advertise
    /// and resolve.
    fn options(&self) -> &'static [OptionDecl];

    /// Execute once with the given resolved option values, streaming
    /// progress into `on_progress`.
    ///
    /// A value that fails its parse rule aborts the run before any
    /// test executes.
    fn run(
        &self,
        options: &OptionSet,
        on_progress: &mut dyn FnMut(ProgressEvent),
    ) -> Result<TestOutcome>;
}

/// A named property bound to a generation engine.
pub struct PropertyTest<E: PropertyEngine, S: SeedSource = OsSeedSource> {
    name: String,
    engine: E,
    property: E::Property,
    seeds: S,
}

impl<E: PropertyEngine> PropertyTest<E> {
    /// Bind `property` under `name`, drawing fresh seeds from the
    /// operating system.
    pub fn new(name: impl Into<String>, engine: E, property: E::Property) -> Self {
        Self::with_seed_source(name, engine, property, OsSeedSource)
    }
}

impl<E: PropertyEngine, S: SeedSource> PropertyTest<E, S> {
    /// Bind `property` under `name` with an explicit seed source.
    pub fn with_seed_source(
        name: impl Into<String>,
        engine: E,
        property: E::Property,
        seeds: S,
    ) -> Self {
        Self {
            name: name.into(),
            engine,
            property,
            seeds,
        }
    }
}

impl<E: PropertyEngine, S: SeedSource> TestCase for PropertyTest<E, S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> &'static [OptionDecl] {
        OPTION_DECLS
    }

    fn run(
        &self,
        options: &OptionSet,
        on_progress: &mut dyn FnMut(ProgressEvent),
    ) -> Result<TestOutcome> {
        let resolved = HarnessOptions::resolve(options)?;
        trace!(test = %self.name, ?resolved, "resolved harness options");

        let report = run_property(
            &self.engine,
            &self.property,
            &resolved.config,
            resolved.replay,
            &self.seeds,
            on_progress,
        );
        Ok(render_outcome(&self.engine, &self.name, &report, &resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionError, OPT_REPLAY, OPT_TESTS};
    use assert_matches::assert_matches;
    use hedgehog_harness_core::{SessionConfig, SessionOutcome, SessionReport, SessionStatus};
    use std::cell::Cell;

    /// Engine double that counts sessions and always passes.
    struct CountingEngine {
        sessions: Cell<u32>,
    }

    impl CountingEngine {
        fn new() -> Self {
            Self {
                sessions: Cell::new(0),
            }
        }
    }

    impl PropertyEngine for CountingEngine {
        type Property = ();

        fn run_session(
            &self,
            config: &SessionConfig,
            _size: u32,
            _seed: u64,
            _property: &(),
            _on_status: &mut dyn FnMut(SessionStatus),
        ) -> SessionReport {
            self.sessions.set(self.sessions.get() + 1);
            SessionReport {
                tests: config.test_limit,
                discards: 0,
                outcome: SessionOutcome::Ok,
            }
        }

        fn render_report(&self, report: &SessionReport, _verbose: bool) -> String {
            format!("passed {} tests.", report.tests)
        }
    }

    #[test]
    fn test_advertises_the_full_option_surface() {
        let test = PropertyTest::new("prop", CountingEngine::new(), ());
        assert_eq!(test.options(), OPTION_DECLS);
        assert_eq!(test.name(), "prop");
    }

    #[test]
    fn test_run_executes_one_session() {
        let test = PropertyTest::new("prop", CountingEngine::new(), ());
        let outcome = test.run(&OptionSet::new(), &mut |_| {}).unwrap();
        assert!(outcome.passed);
        assert_eq!(outcome.output, "passed 100 tests.");
        assert_eq!(test.engine.sessions.get(), 1);
    }

    #[test]
    fn test_runs_are_independent_sessions() {
        let test = PropertyTest::new("prop", CountingEngine::new(), ());
        let set = OptionSet::new().with(OPT_TESTS, "5");
        let first = test.run(&set, &mut |_| {}).unwrap();
        let second = test.run(&set, &mut |_| {}).unwrap();
        assert_eq!(first, second);
        assert_eq!(test.engine.sessions.get(), 2);
    }

    #[test]
    fn test_parse_error_prevents_execution() {
        let test = PropertyTest::new("prop", CountingEngine::new(), ());
        let set = OptionSet::new().with(OPT_REPLAY, "abc");
        let err = test.run(&set, &mut |_| {}).unwrap_err();
        assert_matches!(err, OptionError::Invalid { option, .. } if option == OPT_REPLAY);
        assert_eq!(test.engine.sessions.get(), 0);
    }
}
