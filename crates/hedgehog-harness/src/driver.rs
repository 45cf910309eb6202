//! Execution driver.
//!
//! Runs exactly one property under one configuration and reports the
//! outcome, forwarding live progress. The driver performs no retries
//! of its own; shrink-candidate retry policy belongs to the engine,
//! governed by the `shrink_retries` limit passed through in the
//! configuration.

use hedgehog_harness_core::{PropertyEngine, SeedSource, SessionConfig, SessionReport};
use tracing::debug;

use crate::progress::{translate, ProgressEvent};
use crate::replay::ReplayToken;

/// Run one property-test session.
///
/// With a replay token, the session starts from the token's (size,
/// seed) and is bit-for-bit deterministic; without one, a fresh seed
/// is drawn from `seeds` and the session starts at size 0. Every
/// status the engine reports is translated into a [`ProgressEvent`]
/// and forwarded to `on_progress` in engine order. The engine's final
/// report is returned unchanged.
pub fn run_property<E: PropertyEngine>(
    engine: &E,
    property: &E::Property,
    config: &SessionConfig,
    replay: Option<ReplayToken>,
    seeds: &dyn SeedSource,
    on_progress: &mut dyn FnMut(ProgressEvent),
) -> SessionReport {
    let (size, seed) = match replay {
        Some(token) => (token.size, token.seed),
        None => (0, seeds.next_seed()),
    };
    debug!(size, seed, replayed = replay.is_some(), "starting property session");

    let report = engine.run_session(config, size, seed, property, &mut |status| {
        on_progress(translate(config, status));
    });

    debug!(
        tests = report.tests,
        discards = report.discards,
        outcome = %report.outcome,
        "property session finished"
    );
    report
}
