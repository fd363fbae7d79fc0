//! Input definitions.
//!
//! An input definition is one pluggable piece of the chat grammar. It knows
//! two things:
//!
//! 1. which token shape it accepts, as a [`Fragment`] the engine folds into
//!    the unified grammar, and
//! 2. how to turn a token of that shape into an [`Input`].
//!
//! ```text
//! ButtonDefinition("honk" -> y)        Literal("honk")
//! AnalogDefinition("up")               Literal("up") ('.' [1-9])?
//! TouchscreenDefinition(240x160)       [0-9]{1,3} ',' [0-9]{1,3}
//! TouchscreenDragDefinition(240x160)   point '>' point
//! AnyAsTouchscreenDefinition(base)     <base fragment>, executed as a point
//! ```
//!
//! `parse` is only ever called with text the fragment matched. It returns
//! `None` solely for values that have the right shape but fail an
//! out-of-band check, like a touchscreen coordinate past the screen edge.

#[path = "definitions/analog.rs"]
mod analog;
#[path = "definitions/button.rs"]
mod button;
#[path = "definitions/touchscreen.rs"]
mod touchscreen;
#[path = "definitions/touchscreen_alias.rs"]
mod touchscreen_alias;

pub use analog::AnalogDefinition;
pub use button::ButtonDefinition;
pub use touchscreen::{TouchscreenDefinition, TouchscreenDragDefinition, TouchscreenGeometry};
pub use touchscreen_alias::AnyAsTouchscreenDefinition;

use crate::engine::Fragment;
use crate::input::Input;
use std::fmt;

/// A token shape plus the rule for turning matched text into an [`Input`].
pub trait InputDefinition: Send + Sync + fmt::Debug {
    /// The sub-pattern this definition contributes to the grammar.
    fn fragment(&self) -> Fragment;

    /// Parse text previously matched by [`fragment`](InputDefinition::fragment).
    fn parse(&self, text: &str) -> Option<Input>;

    /// Short human-readable label used in logs and debug reports.
    fn describe(&self) -> String;
}
