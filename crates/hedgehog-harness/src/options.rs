//! The adapter's configurable-option model.
//!
//! Every knob the host runner can set is declared here with its name,
//! default, and parse rule. The host owns how values are supplied
//! (CLI, env, config file); the adapter only ever sees raw strings in
//! an [`OptionSet`] and resolves them through
//! [`HarnessOptions::resolve`], the single validated construction
//! path. A value that fails its parse rule is an error, never a
//! silent fall-back to the default.

use hedgehog_harness_core::SessionConfig;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::replay::ReplayToken;

/// Option name: replay token, `"<size> <seed>"`.
pub const OPT_REPLAY: &str = "hedgehog-replay";
/// Option name: append a replay suggestion to failure output.
pub const OPT_SHOW_REPLAY: &str = "hedgehog-show-replay";
/// Option name: echo generated values in failure output.
pub const OPT_VERBOSE: &str = "hedgehog-verbose";
/// Option name: successful tests required to pass.
pub const OPT_TESTS: &str = "hedgehog-tests";
/// Option name: discarded cases allowed before giving up.
pub const OPT_DISCARDS: &str = "hedgehog-discards";
/// Option name: shrink steps allowed before failing.
pub const OPT_SHRINKS: &str = "hedgehog-shrinks";
/// Option name: re-runs of a failing shrink candidate.
pub const OPT_RETRIES: &str = "hedgehog-retries";

/// How the host may supply an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Requires a value.
    Value,
    /// May be given bare (meaning `true`) or with a boolean value.
    Flag,
}

/// Description of one configurable option, as advertised to the host
/// runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDecl {
    /// Host-facing option name.
    pub name: &'static str,
    /// How the option is supplied.
    pub kind: OptionKind,
    /// Default value text, if the option has one.
    pub default: Option<&'static str>,
    /// One-line help text.
    pub help: &'static str,
}

/// The full option surface, in declaration order.
pub const OPTION_DECLS: &[OptionDecl] = &[
    OptionDecl {
        name: OPT_REPLAY,
        kind: OptionKind::Value,
        default: None,
        help: "Replay a previous failure from a '<size> <seed>' token",
    },
    OptionDecl {
        name: OPT_SHOW_REPLAY,
        kind: OptionKind::Value,
        default: Some("true"),
        help: "Show a replay token when a property fails",
    },
    OptionDecl {
        name: OPT_VERBOSE,
        kind: OptionKind::Flag,
        default: Some("false"),
        help: "Echo generated values in failure output",
    },
    OptionDecl {
        name: OPT_TESTS,
        kind: OptionKind::Value,
        default: Some("100"),
        help: "Number of successful tests required to pass",
    },
    OptionDecl {
        name: OPT_DISCARDS,
        kind: OptionKind::Value,
        default: Some("100"),
        help: "Number of discarded cases allowed before giving up",
    },
    OptionDecl {
        name: OPT_SHRINKS,
        kind: OptionKind::Value,
        default: Some("100"),
        help: "Number of shrink steps allowed before failing",
    },
    OptionDecl {
        name: OPT_RETRIES,
        kind: OptionKind::Value,
        default: Some("10"),
        help: "Number of re-runs used to confirm a failing shrink",
    },
];

/// An option string did not satisfy its parse rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The supplied text failed the option's grammar.
    #[error("invalid value `{value}` for option `{option}`: {reason}")]
    Invalid {
        /// Option name as declared in [`OPTION_DECLS`].
        option: &'static str,
        /// The offending text.
        value: String,
        /// What the parse rule expected.
        reason: String,
    },
    /// A value-bearing option was supplied bare.
    #[error("option `{option}` requires a value")]
    MissingValue {
        /// Option name as declared in [`OPTION_DECLS`].
        option: &'static str,
    },
}

/// Raw option values supplied by the host runner for one run.
///
/// Each entry is either a value (`set`) or a bare flag (`set_flag`).
/// Entries for names the adapter does not declare are the host's
/// concern and are ignored during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    entries: BTreeMap<String, Option<String>>,
}

impl OptionSet {
    /// Empty set; every option resolves to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a value for an option.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Some(value.into()));
    }

    /// Supply an option as a bare flag.
    pub fn set_flag(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), None);
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Builder form of [`set_flag`](Self::set_flag).
    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.set_flag(name);
        self
    }

    /// Raw entry for an option: `None` if unset, `Some(None)` if given
    /// as a bare flag, `Some(Some(value))` if given with a value.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(Option::as_deref)
    }
}

/// Fully resolved adapter options for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Starting (size, seed), if the run replays a previous failure.
    pub replay: Option<ReplayToken>,
    /// Append a replay suggestion to failure output.
    pub show_replay: bool,
    /// Echo generated values in failure output.
    pub verbose: bool,
    /// Session limits.
    pub config: SessionConfig,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            replay: None,
            show_replay: true,
            verbose: false,
            config: SessionConfig::default(),
        }
    }
}

impl HarnessOptions {
    /// Resolve raw host-supplied values against the declared options.
    ///
    /// Unset options take their defaults. Any value that fails its
    /// parse rule aborts resolution with an [`OptionError`] naming the
    /// option and the offending text.
    pub fn resolve(set: &OptionSet) -> Result<Self, OptionError> {
        let replay = match set.get(OPT_REPLAY) {
            None => None,
            Some(None) => return Err(OptionError::MissingValue { option: OPT_REPLAY }),
            Some(Some(raw)) => Some(raw.parse::<ReplayToken>().map_err(|e| {
                OptionError::Invalid {
                    option: OPT_REPLAY,
                    value: raw.to_string(),
                    reason: e.to_string(),
                }
            })?),
        };
        Ok(Self {
            replay,
            show_replay: parse_bool(set, OPT_SHOW_REPLAY, true)?,
            verbose: parse_flag(set, OPT_VERBOSE, false)?,
            config: SessionConfig {
                test_limit: parse_limit(set, OPT_TESTS, 100)?,
                discard_limit: parse_limit(set, OPT_DISCARDS, 100)?,
                shrink_limit: parse_limit(set, OPT_SHRINKS, 100)?,
                shrink_retries: parse_limit(set, OPT_RETRIES, 10)?,
            },
        })
    }
}

fn parse_bool(set: &OptionSet, option: &'static str, default: bool) -> Result<bool, OptionError> {
    match set.get(option) {
        None => Ok(default),
        Some(None) => Err(OptionError::MissingValue { option }),
        Some(Some(raw)) => raw.parse().map_err(|_| OptionError::Invalid {
            option,
            value: raw.to_string(),
            reason: "expected `true` or `false`".to_string(),
        }),
    }
}

// Like `parse_bool`, but a bare occurrence means `true`.
fn parse_flag(set: &OptionSet, option: &'static str, default: bool) -> Result<bool, OptionError> {
    match set.get(option) {
        Some(None) => Ok(true),
        _ => parse_bool(set, option, default),
    }
}

fn parse_limit(set: &OptionSet, option: &'static str, default: u32) -> Result<u32, OptionError> {
    match set.get(option) {
        None => Ok(default),
        Some(None) => Err(OptionError::MissingValue { option }),
        Some(Some(raw)) => raw.parse().map_err(|_| OptionError::Invalid {
            option,
            value: raw.to_string(),
            reason: "expected an unsigned integer".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_empty_set_resolves_to_defaults() {
        let options = HarnessOptions::resolve(&OptionSet::new()).unwrap();
        assert_eq!(options, HarnessOptions::default());
        assert_eq!(options.config.test_limit, 100);
        assert_eq!(options.config.discard_limit, 100);
        assert_eq!(options.config.shrink_limit, 100);
        assert_eq!(options.config.shrink_retries, 10);
        assert!(options.replay.is_none());
        assert!(options.show_replay);
        assert!(!options.verbose);
    }

    #[test]
    fn test_declared_defaults_match_resolution() {
        // The advertised default text must resolve to the same values
        // an empty set does.
        let mut set = OptionSet::new();
        for decl in OPTION_DECLS {
            if let Some(default) = decl.default {
                set.set(decl.name, default);
            }
        }
        assert_eq!(
            HarnessOptions::resolve(&set).unwrap(),
            HarnessOptions::default()
        );
    }

    #[test]
    fn test_limits_resolve() {
        let set = OptionSet::new()
            .with(OPT_TESTS, "50")
            .with(OPT_DISCARDS, "5")
            .with(OPT_SHRINKS, "0")
            .with(OPT_RETRIES, "3");
        let options = HarnessOptions::resolve(&set).unwrap();
        assert_eq!(options.config.test_limit, 50);
        assert_eq!(options.config.discard_limit, 5);
        assert_eq!(options.config.shrink_limit, 0);
        assert_eq!(options.config.shrink_retries, 3);
    }

    #[test]
    fn test_replay_resolves() {
        let set = OptionSet::new().with(OPT_REPLAY, "7 42");
        let options = HarnessOptions::resolve(&set).unwrap();
        assert_eq!(options.replay, Some(ReplayToken::new(7, 42)));
    }

    #[test]
    fn test_verbose_as_bare_flag() {
        let options = HarnessOptions::resolve(&OptionSet::new().with_flag(OPT_VERBOSE)).unwrap();
        assert!(options.verbose);
    }

    #[test]
    fn test_verbose_as_value() {
        let options =
            HarnessOptions::resolve(&OptionSet::new().with(OPT_VERBOSE, "true")).unwrap();
        assert!(options.verbose);
        let options =
            HarnessOptions::resolve(&OptionSet::new().with(OPT_VERBOSE, "false")).unwrap();
        assert!(!options.verbose);
    }

    #[test]
    fn test_show_replay_disabled() {
        let options =
            HarnessOptions::resolve(&OptionSet::new().with(OPT_SHOW_REPLAY, "false")).unwrap();
        assert!(!options.show_replay);
    }

    #[test_case(OPT_TESTS, "abc" ; "non-numeric limit")]
    #[test_case(OPT_TESTS, "-1" ; "negative limit")]
    #[test_case(OPT_SHRINKS, "1.5" ; "fractional limit")]
    #[test_case(OPT_SHOW_REPLAY, "yes" ; "non-boolean")]
    #[test_case(OPT_REPLAY, "abc" ; "replay wrong field count")]
    #[test_case(OPT_REPLAY, "1 2 3" ; "replay three fields")]
    #[test_case(OPT_REPLAY, "a b" ; "replay non-numeric fields")]
    fn test_invalid_value_is_an_error_not_a_default(option: &'static str, value: &str) {
        let err = HarnessOptions::resolve(&OptionSet::new().with(option, value)).unwrap_err();
        match err {
            OptionError::Invalid {
                option: name,
                value: text,
                ..
            } => {
                assert_eq!(name, option);
                assert_eq!(text, value);
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_value_option_given_bare_is_an_error() {
        let err = HarnessOptions::resolve(&OptionSet::new().with_flag(OPT_TESTS)).unwrap_err();
        assert_eq!(err, OptionError::MissingValue { option: OPT_TESTS });
    }

    #[test]
    fn test_unknown_entries_are_ignored() {
        let set = OptionSet::new().with("quickcheck-tests", "7");
        let options = HarnessOptions::resolve(&set).unwrap();
        assert_eq!(options, HarnessOptions::default());
    }

    #[test]
    fn test_error_text_names_option_and_value() {
        let err = HarnessOptions::resolve(&OptionSet::new().with(OPT_TESTS, "lots")).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("hedgehog-tests"));
        assert!(text.contains("lots"));
    }

    #[test]
    fn test_decls_cover_every_option() {
        let names: Vec<_> = OPTION_DECLS.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                OPT_REPLAY,
                OPT_SHOW_REPLAY,
                OPT_VERBOSE,
                OPT_TESTS,
                OPT_DISCARDS,
                OPT_SHRINKS,
                OPT_RETRIES
            ]
        );
        // Only the replay token has no default.
        for decl in OPTION_DECLS {
            assert_eq!(decl.default.is_none(), decl.name == OPT_REPLAY);
        }
    }
}
