//! Input parsers.
//!
//! Parsers are stacked by composition. Each layer owns the next one, calls it
//! and applies its own checks or transforms to the result:
//!
//! ```text
//! text ──> SidedParser ──> ContextualParser ──> BareParser
//!          strips l/r       duplicate, touch,    unified grammar,
//!          prefix, adds     conflict and lone    token parsing,
//!          Side marker      input checks         repeat expansion
//! ```
//!
//! Every layer implements [`InputParser`], so any stack is itself a parser.
//! A rejected message is always `None`; the reason is logged at `debug`
//! level and never surfaced as an error.

#[path = "parsing/bare.rs"]
mod bare;
#[path = "parsing/contextual.rs"]
mod contextual;
#[path = "parsing/sided.rs"]
mod sided;


pub use bare::BareParser;
pub use contextual::{ContextualParser, DEFAULT_LONE_BUTTONS, Violation};
pub use sided::{SideDisambiguator, SidePrefixes, SideResolution, SidedParser};

use crate::sequence::InputSequence;
use std::fmt;
use std::sync::Arc;

/// Turns a chat message into an input sequence, or rejects it.
///
/// Implementations are immutable after construction and may be shared
/// across threads.
pub trait InputParser: Send + Sync + fmt::Debug {
    fn parse(&self, text: &str) -> Option<InputSequence>;
}

impl<P: InputParser + ?Sized> InputParser for Box<P> {
    fn parse(&self, text: &str) -> Option<InputSequence> {
        (**self).parse(text)
    }
}

impl<P: InputParser + ?Sized> InputParser for Arc<P> {
    fn parse(&self, text: &str) -> Option<InputSequence> {
        (**self).parse(text)
    }
}

impl<P: InputParser + ?Sized> InputParser for &P {
    fn parse(&self, text: &str) -> Option<InputSequence> {
        (**self).parse(text)
    }
}
