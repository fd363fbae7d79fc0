//! Side-prefixed inputs.
//!
//! Some control schemes have two identical halves, and chat picks one by
//! prefixing a letter: `lup` is "up on the left", `r:a` is "a on the right".
//! Names can collide with prefixed forms (`rup` may be its own button), so
//! the whole text is always tried first and prefixes are stripped one letter
//! at a time only while that fails:
//!
//! ```text
//! known {up, rup}, right prefix 'r'
//!   "up"    -> up,  side undetermined
//!   "rup"   -> rup, side undetermined     (whole text wins)
//!   "rrup"  -> "rup" -> rup, right, direct
//!   "r:up"  -> "up"  -> up,  right, direct
//! ```
//!
//! An undetermined side is still recorded as a `Side` input with no side, so
//! a later stage can assign one.

use super::InputParser;
use crate::error::ConfigError;
use crate::input::{Input, InputSide};
use crate::sequence::InputSequence;
use std::collections::HashMap;

/// Prefix letters selecting a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidePrefixes {
    pub left: char,
    pub right: char,
    /// When false, prefixes are never stripped and every input is undetermined.
    pub allow_directed: bool,
}

impl Default for SidePrefixes {
    fn default() -> Self {
        SidePrefixes { left: 'l', right: 'r', allow_directed: true }
    }
}

impl SidePrefixes {
    /// Build from config strings, each of which must be a single character.
    pub fn from_strs(left: &str, right: &str, allow_directed: bool) -> Result<Self, ConfigError> {
        Ok(SidePrefixes { left: single_char(left)?, right: single_char(right)?, allow_directed })
    }

    fn side_of(&self, c: char) -> Option<InputSide> {
        if same_letter(c, self.left) {
            Some(InputSide::Left)
        } else if same_letter(c, self.right) {
            Some(InputSide::Right)
        } else {
            None
        }
    }

    /// Find the shortest prefix strip under which `recognize` accepts the
    /// rest of `text`. Returns the recognized value and the side of the last
    /// stripped letter, or `None` for the side if nothing was stripped.
    pub fn disambiguate<'t, T>(
        &self,
        text: &'t str,
        mut recognize: impl FnMut(&'t str) -> Option<T>,
    ) -> Option<(T, Option<InputSide>)> {
        if let Some(value) = recognize(text) {
            return Some((value, None));
        }
        if !self.allow_directed {
            return None;
        }
        let mut rest = text;
        loop {
            let first = rest.chars().next()?;
            let side = self.side_of(first)?;
            rest = &rest[first.len_utf8()..];
            let separator = regex!(r"^[:.@#]?").find(rest).map_or(0, |m| m.end());
            rest = &rest[separator..];
            log::trace!("side {side}: trying {rest:?}");
            if let Some(value) = recognize(rest) {
                return Some((value, Some(side)));
            }
        }
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn single_char(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::MalformedSidePrefix(s.to_string())),
    }
}

/// Outcome of resolving a single token against known button names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideResolution {
    /// The known button name, as configured.
    pub button: String,
    pub side: Option<InputSide>,
    /// Whether the side was spelled out in the token.
    pub direct: bool,
}

impl SideResolution {
    /// The marker input carrying this resolution's side.
    pub fn side_input(&self) -> Input {
        Input::side(self.side, self.direct)
    }
}

/// Token-level disambiguation over a fixed set of button names.
#[derive(Debug, Clone)]
pub struct SideDisambiguator {
    prefixes: SidePrefixes,
    known: HashMap<String, String>,
}

impl SideDisambiguator {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(known: I, prefixes: SidePrefixes) -> Self {
        let known = known
            .into_iter()
            .map(|name| {
                let name = name.into();
                (name.to_lowercase(), name)
            })
            .collect();
        SideDisambiguator { prefixes, known }
    }

    pub fn resolve(&self, token: &str) -> Option<SideResolution> {
        let (button, side) = self.prefixes.disambiguate(token, |rest| self.known.get(&rest.to_lowercase()))?;
        Some(SideResolution { button: button.clone(), side, direct: side.is_some() })
    }
}

/// Wraps a parser so every set of its result carries a `Side` input.
///
/// The delegate decides what counts as a recognized remainder: a prefix is
/// only stripped if the delegate rejects the text with it.
#[derive(Debug)]
pub struct SidedParser<P> {
    delegate: P,
    prefixes: SidePrefixes,
}

impl<P: InputParser> SidedParser<P> {
    pub fn new(delegate: P, prefixes: SidePrefixes) -> Self {
        SidedParser { delegate, prefixes }
    }

    pub fn prefixes(&self) -> &SidePrefixes {
        &self.prefixes
    }
}

impl<P: InputParser> InputParser for SidedParser<P> {
    fn parse(&self, text: &str) -> Option<InputSequence> {
        let (sequence, side) = self.prefixes.disambiguate(text, |rest| self.delegate.parse(rest))?;
        let marker = Input::side(side, side.is_some());
        Some(sequence.map_sets(|set| set.with(marker.clone())))
    }
}
