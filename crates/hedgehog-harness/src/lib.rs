//! Adapter between a hedgehog-style property-testing engine and a
//! generic host test runner.
//!
//! A property-test session (configuration, randomness, progress, and
//! final verdict) is owned by the generation engine; test naming,
//! selection, and option delivery are owned by the host runner. This
//! crate is the translation layer between the two: it declares the
//! configurable options, derives a configuration and a starting
//! (size, seed) pair for each run, forwards the engine's in-flight
//! status as normalized progress events, and renders the final report
//! as a pass/fail verdict with human-readable output, including a
//! deterministic replay token on failure.
//!
//! The engine and the fresh-seed source are capabilities
//! ([`PropertyEngine`], [`SeedSource`]) defined in
//! `hedgehog-harness-core`; the host runner's single-test contract is
//! the [`TestCase`] trait with [`PropertyTest`] as its concrete
//! variant.

pub mod adapter;
pub mod driver;
pub mod options;
pub mod progress;
pub mod render;
pub mod replay;

pub use adapter::{PropertyTest, TestCase};
pub use driver::run_property;
pub use options::{HarnessOptions, OptionDecl, OptionError, OptionKind, OptionSet};
pub use progress::{translate, Phase, ProgressEvent};
pub use render::{render_outcome, TestOutcome};
pub use replay::{ReplayParseError, ReplayToken};

pub use hedgehog_harness_core::{
    FailureDetail, FixedSeedSource, OsSeedSource, PropertyEngine, SeedSource, SessionConfig,
    SessionOutcome, SessionReport, SessionStatus,
};

/// Result type for option resolution, the adapter's only fallible
/// surface.
pub type Result<T> = std::result::Result<T, OptionError>;
