//! Grammar compilation and indexing.
//!
//! This module holds the *static* side of the engine: everything derived once
//! from the configured input definitions when a parser is built.
//!
//! Parsing is split into two phases:
//!
//! 1. **Compile** (this module): collect one [`Fragment`] per definition into
//!    an ordered list of alternatives and index them by the class of
//!    character they can start with.
//! 2. **Match** (see `matcher.rs`): walk the input, trying at each token
//!    position only the alternatives whose lead class fits, in registration
//!    order.
//!
//! ## Invariants
//!
//! - `AltId` is an index into `CompiledGrammar::alternatives`, and the
//!   alternative at index `i` belongs to definition `i`.
//! - Every `by_lead` bucket lists ids in ascending order, so filtering by lead
//!   class never changes which alternative wins an ambiguous prefix.
//! - Limits are validated here; a compiled grammar always has
//!   `max_set_length >= 1` and `max_sequence_length >= 1`.

use super::fragment::Fragment;
use crate::definitions::InputDefinition;
use crate::error::ConfigError;

/// Alternative identifier (index into the alternatives vector).
pub(crate) type AltId = usize;

/// Repeat counts are a single digit.
pub(crate) const MAX_REPEAT: usize = 9;

bitflags::bitflags! {
    /// Coarse classes of the first character of a token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LeadMask: u8 {
        const DIGIT  = 1 << 0;
        const LETTER = 1 << 1;
        const OTHER  = 1 << 2;
    }
}

pub const LEAD_COUNT: usize = 3;
const LEAD_DIGIT: usize = 0;
const LEAD_LETTER: usize = 1;
const LEAD_OTHER: usize = 2;

impl LeadMask {
    pub fn of_char(c: char) -> Self {
        if c.is_ascii_digit() {
            LeadMask::DIGIT
        } else if c.is_alphabetic() {
            LeadMask::LETTER
        } else {
            LeadMask::OTHER
        }
    }

    fn bucket(self) -> usize {
        if self == LeadMask::DIGIT {
            LEAD_DIGIT
        } else if self == LeadMask::LETTER {
            LEAD_LETTER
        } else {
            LEAD_OTHER
        }
    }
}

/// Structural limits of the unified grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrammarLimits {
    /// Maximum concurrent inputs per set.
    pub max_set_length: usize,
    /// Maximum sets per sequence, after repeat expansion.
    pub max_sequence_length: usize,
    /// Whether a trailing `-` may mark a set as held.
    pub hold_enabled: bool,
}

impl Default for GrammarLimits {
    fn default() -> Self {
        GrammarLimits { max_set_length: 2, max_sequence_length: 1, hold_enabled: true }
    }
}

/// One branch of the token alternation.
#[derive(Debug, Clone)]
pub(crate) struct Alternative {
    pub fragment: Fragment,
    /// Human-readable description of the owning definition.
    pub label: String,
}

#[derive(Debug, Default)]
pub(crate) struct LeadIndex {
    /// Alternatives that can match the empty string; tried at every position.
    pub always_on: Vec<AltId>,
    pub by_lead: [Vec<AltId>; LEAD_COUNT],
}

/// The unified grammar: alternatives, their index and the structural limits.
#[derive(Debug)]
pub(crate) struct CompiledGrammar {
    pub alternatives: Vec<Alternative>,
    pub index: LeadIndex,
    pub limits: GrammarLimits,
}

impl CompiledGrammar {
    pub fn new(definitions: &[Box<dyn InputDefinition>], limits: GrammarLimits) -> Result<Self, ConfigError> {
        if definitions.is_empty() {
            return Err(ConfigError::NoDefinitions);
        }
        if limits.max_set_length == 0 {
            return Err(ConfigError::ZeroSetLength);
        }
        if limits.max_sequence_length == 0 {
            return Err(ConfigError::ZeroSequenceLength);
        }

        let alternatives: Vec<Alternative> = definitions
            .iter()
            .map(|def| Alternative { fragment: def.fragment(), label: def.describe() })
            .collect();

        let mut index = LeadIndex::default();
        for (id, alt) in alternatives.iter().enumerate() {
            let (mask, nullable) = alt.fragment.lead();
            if nullable {
                index.always_on.push(id);
                continue;
            }
            for flag in [LeadMask::DIGIT, LeadMask::LETTER, LeadMask::OTHER] {
                if mask.contains(flag) {
                    index.by_lead[flag.bucket()].push(id);
                }
            }
        }

        log::info!(
            "compiled input grammar: {} alternatives, max_set_length={}, max_sequence_length={}, hold={}",
            alternatives.len(),
            limits.max_set_length,
            limits.max_sequence_length,
            limits.hold_enabled
        );

        Ok(CompiledGrammar { alternatives, index, limits })
    }

    /// Alternatives worth trying at byte offset `pos`, in registration order.
    pub fn candidates_at(&self, text: &str, pos: usize) -> Vec<AltId> {
        let Some(c) = text[pos..].chars().next() else {
            return self.index.always_on.clone();
        };
        let bucket = &self.index.by_lead[LeadMask::of_char(c).bucket()];
        if self.index.always_on.is_empty() {
            return bucket.clone();
        }
        let mut ids: Vec<AltId> = bucket.iter().chain(&self.index.always_on).copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Largest repeat digit the grammar accepts.
    pub fn max_repeat(&self) -> usize {
        self.limits.max_sequence_length.min(MAX_REPEAT)
    }
}
