//! Replay token codec.
//!
//! A replay token is the textual form of the (size, seed) pair that
//! makes a session reproducible: `"<size> <seed>"`, two
//! whitespace-separated numeric literals. `Display` encodes,
//! `FromStr` decodes, and `decode(encode(t)) == t` for every valid
//! token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Starting point of a deterministic session: generation size and RNG
/// seed. Parsed once from an option string at session start; never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReplayToken {
    /// Generation magnitude the session starts at.
    pub size: u32,
    /// Full RNG seed driving the session.
    pub seed: u64,
}

impl ReplayToken {
    /// Token for the given size and seed.
    pub fn new(size: u32, seed: u64) -> Self {
        Self { size, seed }
    }
}

/// Why a replay token string failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayParseError {
    /// The string did not split into exactly two fields.
    #[error("expected two whitespace-separated fields, found {found}")]
    FieldCount {
        /// Number of fields actually present.
        found: usize,
    },
    /// The size field was not a valid non-negative integer.
    #[error("invalid size `{0}`")]
    InvalidSize(String),
    /// The seed field was not a valid integer.
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
}

impl fmt::Display for ReplayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.size, self.seed)
    }
}

impl FromStr for ReplayToken {
    type Err = ReplayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[size, seed] = fields.as_slice() else {
            return Err(ReplayParseError::FieldCount {
                found: fields.len(),
            });
        };
        Ok(Self {
            size: size
                .parse()
                .map_err(|_| ReplayParseError::InvalidSize(size.to_string()))?,
            seed: seed
                .parse()
                .map_err(|_| ReplayParseError::InvalidSeed(seed.to_string()))?,
        })
    }
}
