//! Turning a successful match into an [`InputSequence`].
//!
//! The matcher only proves the text has the right *shape*. This step hands
//! each matched token to the definition that produced it, rebuilds every set
//! in left-to-right order, applies hold markers and repeat counts, and
//! enforces the sequence limit that the grammar cannot express on its own
//! (repeat digits are only known after matching).
//!
//! ```text
//! captures ──> per-definition queues ──┐
//!                                      │  for each set boundary:
//!                                      │    drain tokens before boundary
//!                                      │    parse via owning definition
//!                                      │    sort by offset, add hold
//!                                      │    replicate by repeat count
//!                                      v
//!                                InputSequence
//! ```

use super::compiled_grammar::GrammarLimits;
use super::matcher::Capture;
use crate::definitions::InputDefinition;
use crate::input::Input;
use crate::sequence::{InputSequence, InputSet};
use std::collections::VecDeque;
use std::fmt;

/// Why the bare parser rejected a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The text does not fit the grammar.
    NoMatch,
    /// A token had the right shape but its definition refused it, e.g. an
    /// out-of-bounds touchscreen coordinate.
    TokenRejected { definition: String, text: String, offset: usize },
    /// Repeat counts pushed the sequence past its limit.
    SequenceTooLong { produced: usize, limit: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoMatch => f.write_str("text does not match the input grammar"),
            Rejection::TokenRejected { definition, text, offset } => {
                write!(f, "{definition} rejected {text:?} at offset {offset}")
            }
            Rejection::SequenceTooLong { produced, limit } => {
                write!(f, "sequence expands to at least {produced} sets (limit {limit})")
            }
        }
    }
}

/// Split captures into per-definition token queues and structural markers.
struct Demux {
    tokens: Vec<VecDeque<(usize, usize)>>,
    set_ends: Vec<usize>,
    holds: VecDeque<usize>,
    repeats: VecDeque<(usize, usize)>,
}

impl Demux {
    fn new(captures: &[Capture], definition_count: usize) -> Self {
        let mut demux = Demux {
            tokens: vec![VecDeque::new(); definition_count],
            set_ends: Vec::new(),
            holds: VecDeque::new(),
            repeats: VecDeque::new(),
        };
        for capture in captures {
            match *capture {
                Capture::Token { alt, start, end, .. } => demux.tokens[alt].push_back((start, end)),
                Capture::Hold { offset } => demux.holds.push_back(offset),
                Capture::Repeat { offset, count } => demux.repeats.push_back((offset, count)),
                Capture::Set { end, .. } => demux.set_ends.push(end),
            }
        }
        for queue in &mut demux.tokens {
            queue.make_contiguous().sort_unstable();
        }
        demux.set_ends.sort_unstable();
        demux.holds.make_contiguous().sort_unstable();
        demux.repeats.make_contiguous().sort_unstable();
        demux
    }
}

pub(crate) fn assemble(
    text: &str,
    captures: &[Capture],
    definitions: &[Box<dyn InputDefinition>],
    limits: &GrammarLimits,
) -> Result<InputSequence, Rejection> {
    let mut demux = Demux::new(captures, definitions.len());
    let mut sets: Vec<InputSet> = Vec::new();

    for &boundary in &demux.set_ends {
        let mut positioned: Vec<(usize, Input)> = Vec::new();
        for (def_id, queue) in demux.tokens.iter_mut().enumerate() {
            while let Some(&(start, end)) = queue.front() {
                if start >= boundary {
                    break;
                }
                queue.pop_front();
                let token = &text[start..end];
                let Some(input) = definitions[def_id].parse(token) else {
                    return Err(Rejection::TokenRejected {
                        definition: definitions[def_id].describe(),
                        text: token.to_string(),
                        offset: start,
                    });
                };
                positioned.push((start, input));
            }
        }
        positioned.sort_by_key(|(start, _)| *start);
        let mut inputs: Vec<Input> = positioned.into_iter().map(|(_, input)| input).collect();

        if demux.holds.front().is_some_and(|&offset| offset < boundary) {
            demux.holds.pop_front();
            inputs.push(Input::hold());
        }

        let mut repeat = 1;
        if demux.repeats.front().is_some_and(|&(offset, _)| offset < boundary) {
            if let Some((_, count)) = demux.repeats.pop_front() {
                repeat = count;
            }
        }

        sets.extend(std::iter::repeat_n(InputSet::new(inputs), repeat));
        if sets.len() > limits.max_sequence_length {
            return Err(Rejection::SequenceTooLong { produced: sets.len(), limit: limits.max_sequence_length });
        }
    }

    Ok(InputSequence::new(sets))
}
