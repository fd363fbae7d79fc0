//! Chat-message input grammar for crowd-controlled games.
//!
//! Viewers type short messages like `a`, `up2`, `a+b`, `a-`, `120,80` or
//! `lup`. A parser built from a set of input definitions either turns such a
//! message into an [`InputSequence`] or rejects it, so ordinary chatter is
//! ignored.
//!
//! ```
//! use crowdinput::{InputParser, InputParserBuilder};
//!
//! let parser = InputParserBuilder::from_bare()
//!     .length_restrictions(2, 4)
//!     .buttons(["a", "b", "start", "select"])
//!     .dpad("")
//!     .start_select_conflict()
//!     .build()
//!     .unwrap();
//!
//! let parsed = parser.parse("a+b2up").unwrap();
//! assert_eq!(parsed.len(), 3);
//! assert!(parser.parse("start+select").is_none());
//! assert!(parser.parse("hello chat").is_none());
//! ```
//!
//! The stack is assembled from three layers, see [`parsing`]. A parser can
//! also be described in TOML through [`ParserConfig`].

#[macro_use]
mod macros;

pub mod builder;
pub mod config;
pub mod definitions;
mod engine;
pub mod error;
pub mod game_aliases;
pub mod input;
pub mod parsing;
pub mod sequence;

pub use builder::{DirectionNames, InputParserBuilder};
pub use config::ParserConfig;
pub use definitions::{
    AnalogDefinition, AnyAsTouchscreenDefinition, ButtonDefinition, InputDefinition, TouchscreenDefinition,
    TouchscreenDragDefinition, TouchscreenGeometry,
};
pub use engine::{Fragment, GrammarLimits, LeadMask, MatchedToken, ParseDetails, ParseTimings, Rejection, TokenSlot};
pub use error::{ConfigError, InputError};
pub use game_aliases::GameAliases;
pub use input::{Input, InputKind, InputSide, TOUCHSCREEN};
pub use parsing::{
    BareParser, ContextualParser, InputParser, SideDisambiguator, SidePrefixes, SideResolution, SidedParser,
    Violation,
};
pub use sequence::{InputSequence, InputSet};
