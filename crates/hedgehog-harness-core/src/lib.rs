//! Boundary types shared between the harness adapter and its two
//! external collaborators: the property-generation engine and the
//! host test runner.
//!
//! The adapter never generates or shrinks values itself; it speaks to
//! an engine through the [`PropertyEngine`] capability and draws fresh
//! seeds through the [`SeedSource`] capability. Everything in this
//! crate is the vocabulary of that conversation.

pub mod config;
pub mod engine;
pub mod seed;
pub mod session;

pub use config::SessionConfig;
pub use engine::PropertyEngine;
pub use seed::{FixedSeedSource, OsSeedSource, SeedSource};
pub use session::{FailureDetail, SessionOutcome, SessionReport, SessionStatus};
