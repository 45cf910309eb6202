//! Test utilities for the harness crates.
//!
//! [`ScriptedEngine`] is a deterministic [`PropertyEngine`] double:
//! everything it does is a pure function of the supplied seed, so
//! harness tests can assert replay and determinism guarantees without
//! a real generation engine. It is a test double, not an engine:
//! "generation" is a per-case seed split off the session seed, and
//! "shrinking" is a linear walk down the size that produced the
//! failure.

use hedgehog_harness_core::{
    FailureDetail, PropertyEngine, SessionConfig, SessionOutcome, SessionReport, SessionStatus,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Outcome of evaluating a property against one generated case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The property held.
    Pass,
    /// The property rejected the case as invalid input.
    Discard,
    /// The property was falsified.
    Fail,
}

/// A property executed by the scripted engine: a pure function of the
/// case's size and seed.
pub struct ScriptedProperty {
    eval: Box<dyn Fn(u32, u64) -> Verdict + Send + Sync>,
}

impl ScriptedProperty {
    /// Property from an arbitrary evaluation function.
    pub fn new(eval: impl Fn(u32, u64) -> Verdict + Send + Sync + 'static) -> Self {
        Self {
            eval: Box::new(eval),
        }
    }

    /// Holds for every case.
    pub fn always_pass() -> Self {
        Self::new(|_, _| Verdict::Pass)
    }

    /// Falsified by every case, including the first.
    pub fn always_fail() -> Self {
        Self::new(|_, _| Verdict::Fail)
    }

    /// Falsified by every case of size `min_size` or larger; shrinks
    /// down to exactly `min_size`.
    pub fn fail_at_or_above(min_size: u32) -> Self {
        Self::new(move |size, _| {
            if size >= min_size {
                Verdict::Fail
            } else {
                Verdict::Pass
            }
        })
    }

    /// Discards every case.
    pub fn discard_all() -> Self {
        Self::new(|_, _| Verdict::Discard)
    }

    fn eval(&self, size: u32, seed: u64) -> Verdict {
        (self.eval)(size, seed)
    }
}

/// Deterministic engine double.
///
/// The first generation attempt of a session uses the session seed
/// itself as the case seed, so a failure report's (size, seed) pair,
/// fed back in as a session's starting point, reproduces the failing
/// case immediately. Subsequent case seeds are split off the session
/// seed through a seeded RNG, and the size grows by one per successful
/// case, wrapping below 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedEngine;

impl ScriptedEngine {
    fn shrink(
        &self,
        config: &SessionConfig,
        property: &ScriptedProperty,
        failed_size: u32,
        case_seed: u64,
        on_status: &mut dyn FnMut(SessionStatus),
    ) -> FailureDetail {
        let mut size = failed_size;
        let mut shrinks = 0;
        while shrinks < config.shrink_limit && size > 0 {
            let candidate = size - 1;
            if !self.confirms_failure(config, property, candidate, case_seed) {
                break;
            }
            size = candidate;
            shrinks += 1;
            on_status(SessionStatus::Shrinking { steps: shrinks });
        }
        FailureDetail {
            size,
            seed: case_seed,
            shrinks,
            annotations: vec![format!("counterexample at size {size}")],
        }
    }

    // A candidate counts as failing only if the initial run and every
    // configured retry all fail; one flaky pass rejects it.
    fn confirms_failure(
        &self,
        config: &SessionConfig,
        property: &ScriptedProperty,
        size: u32,
        seed: u64,
    ) -> bool {
        (0..=config.shrink_retries).all(|_| property.eval(size, seed) == Verdict::Fail)
    }
}

impl PropertyEngine for ScriptedEngine {
    type Property = ScriptedProperty;

    fn run_session(
        &self,
        config: &SessionConfig,
        size: u32,
        seed: u64,
        property: &ScriptedProperty,
        on_status: &mut dyn FnMut(SessionStatus),
    ) -> SessionReport {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tests = 0;
        let mut discards = 0;
        let mut case_size = size;
        let mut first_case = true;

        loop {
            if tests >= config.test_limit {
                return SessionReport {
                    tests,
                    discards,
                    outcome: SessionOutcome::Ok,
                };
            }
            if discards >= config.discard_limit {
                return SessionReport {
                    tests,
                    discards,
                    outcome: SessionOutcome::GaveUp,
                };
            }

            let case_seed = if first_case {
                first_case = false;
                seed
            } else {
                rng.gen()
            };

            match property.eval(case_size, case_seed) {
                Verdict::Pass => {
                    tests += 1;
                    on_status(SessionStatus::Running { completed: tests });
                    case_size = (case_size + 1) % 100;
                }
                Verdict::Discard => discards += 1,
                Verdict::Fail => {
                    let detail = self.shrink(config, property, case_size, case_seed, on_status);
                    return SessionReport {
                        tests,
                        discards,
                        outcome: SessionOutcome::Failed(detail),
                    };
                }
            }
        }
    }

    fn render_report(&self, report: &SessionReport, verbose: bool) -> String {
        match &report.outcome {
            SessionOutcome::Ok => {
                if report.discards > 0 {
                    format!(
                        "passed {} tests ({} discards).",
                        report.tests, report.discards
                    )
                } else {
                    format!("passed {} tests.", report.tests)
                }
            }
            SessionOutcome::GaveUp => format!(
                "gave up after {} discards, passed {} tests.",
                report.discards, report.tests
            ),
            SessionOutcome::Failed(detail) => {
                let mut text = format!(
                    "failed after {} tests and {} shrinks.",
                    report.tests, detail.shrinks
                );
                if verbose {
                    for annotation in &detail.annotations {
                        text.push('\n');
                        text.push_str(annotation);
                    }
                }
                text
            }
        }
    }
}
