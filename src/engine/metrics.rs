//! Parse traces and timings.
//!
//! The normal [`parse`](crate::InputParser::parse) path returns only the
//! sequence. [`BareParser::parse_verbose`](crate::BareParser::parse_verbose)
//! additionally returns what the matcher saw, which is what the CLI's debug
//! report prints:
//!
//! - every matched token with the definition it was attributed to,
//! - set spans, hold offsets and repeat digits,
//! - the rejection reason if the message was refused,
//! - timings for the match and assembly phases.

use super::assemble::Rejection;
use super::matcher::TokenSlot;
use crate::sequence::InputSequence;
use std::time::Duration;

/// A token as matched by the grammar, before its definition parsed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedToken {
    /// Description of the definition the token was attributed to.
    pub definition: String,
    pub slot: TokenSlot,
    /// Start byte offset.
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Default, Clone)]
pub struct ParseTimings {
    /// Time spent in the backtracking matcher.
    pub matching: Duration,
    /// Time spent parsing tokens and building sets.
    pub assembly: Duration,
    pub total: Duration,
}

/// Result of [`BareParser::parse_verbose`](crate::BareParser::parse_verbose).
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub text: String,
    pub result: Option<InputSequence>,
    pub rejection: Option<Rejection>,
    pub tokens: Vec<MatchedToken>,
    /// Byte spans of each input set, including its hold marker and repeat digit.
    pub sets: Vec<(usize, usize)>,
    pub holds: Vec<usize>,
    /// `(offset, count)` of each repeat digit.
    pub repeats: Vec<(usize, usize)>,
    pub timings: ParseTimings,
}
