//! Backtracking matcher for the unified input grammar.
//!
//! The grammar has a fixed shape; only the token alternation comes from
//! configuration:
//!
//! ```text
//! sequence := set{1,max_sequence_length} END
//! set      := token ('+' token){0,max_set_length-1} hold? repeat??
//! token    := alt_0 | alt_1 | ... | alt_n        (registration order)
//! hold     := '-'                                 (only if hold is enabled)
//! repeat   := [1-9]                               (only if max_sequence_length > 1)
//! ```
//!
//! Quantifiers behave like their regex counterparts: `+token` repetitions and
//! the hold marker are greedy, the repeat digit is lazy (so a following
//! coordinate like `a234,123` is not eaten as a repeat count), and the first
//! alternative that leads to a full match wins.
//!
//! ## Recorded captures
//!
//! While descending, the matcher pushes a [`Capture`] for every token, hold
//! marker, repeat digit and finished set; on backtracking it truncates them
//! again. A successful match therefore leaves exactly the captures of the
//! winning path, each attributable to its alternative and byte offset:
//!
//! ```text
//! "a+b2start"   (buttons a, b, start)
//!   Token{alt:a, Leading, 0..1}
//!   Token{alt:b, Additional, 2..3}
//!   Repeat{offset:3, count:2}
//!   Set{0..4}
//!   Token{alt:start, Leading, 4..9}
//!   Set{4..9}
//! ```
//!
//! ## Failure memo
//!
//! Whether a state can reach the end of the input depends only on
//! `(stage, position, tokens in set, sets so far)`, never on the captures
//! recorded on the way there. Failed states are remembered so ambiguous
//! coordinate runs cannot make matching exponential.

use super::compiled_grammar::{AltId, CompiledGrammar};
use std::collections::HashSet;

/// Position of a token within its input set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSlot {
    /// The first token of a set.
    Leading,
    /// A `+`-joined token after the first.
    Additional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Capture {
    Token { alt: AltId, slot: TokenSlot, start: usize, end: usize },
    Hold { offset: usize },
    Repeat { offset: usize, count: usize },
    Set { start: usize, end: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Stage {
    SetFrom,
    AfterToken,
    AfterHold,
    EndSet,
}

type StateKey = (Stage, usize, usize, usize);

struct Matcher<'g, 't> {
    grammar: &'g CompiledGrammar,
    text: &'t str,
    captures: Vec<Capture>,
    failed: HashSet<StateKey>,
}

/// Match `text` end-to-end against `grammar`. Returns the captures of the
/// winning path in the order they were recorded (which is left to right).
pub(crate) fn match_sequence(grammar: &CompiledGrammar, text: &str) -> Option<Vec<Capture>> {
    if text.is_empty() {
        return None;
    }
    let mut matcher = Matcher { grammar, text, captures: Vec::new(), failed: HashSet::new() };
    if matcher.set_from(0, 0) { Some(matcher.captures) } else { None }
}

impl<'g, 't> Matcher<'g, 't> {
    fn known_failure(&self, key: &StateKey) -> bool {
        self.failed.contains(key)
    }

    fn fail(&mut self, key: StateKey, mark: usize) -> bool {
        self.captures.truncate(mark);
        self.failed.insert(key);
        false
    }

    /// Try every alternative at `pos` as a token in `slot`, continuing with
    /// `after_token` on success.
    fn token_at(&mut self, set_start: usize, pos: usize, slot: TokenSlot, tokens: usize, sets: usize) -> bool {
        let grammar = self.grammar;
        for alt in grammar.candidates_at(self.text, pos) {
            for end in grammar.alternatives[alt].fragment.ends(self.text, pos) {
                if end == pos {
                    continue;
                }
                let mark = self.captures.len();
                log::trace!("token candidate {}..{} as {}", pos, end, grammar.alternatives[alt].label);
                self.captures.push(Capture::Token { alt, slot, start: pos, end });
                if self.after_token(set_start, end, tokens + 1, sets) {
                    return true;
                }
                self.captures.truncate(mark);
            }
        }
        false
    }

    fn set_from(&mut self, pos: usize, sets: usize) -> bool {
        let key = (Stage::SetFrom, pos, 0, sets);
        if self.known_failure(&key) {
            return false;
        }
        let mark = self.captures.len();
        if self.token_at(pos, pos, TokenSlot::Leading, 0, sets) {
            return true;
        }
        self.fail(key, mark)
    }

    fn after_token(&mut self, set_start: usize, pos: usize, tokens: usize, sets: usize) -> bool {
        let key = (Stage::AfterToken, pos, tokens, sets);
        if self.known_failure(&key) {
            return false;
        }
        let mark = self.captures.len();
        if tokens < self.grammar.limits.max_set_length
            && self.text[pos..].starts_with('+')
            && self.token_at(set_start, pos + 1, TokenSlot::Additional, tokens, sets)
        {
            return true;
        }
        if self.grammar.limits.hold_enabled && self.text[pos..].starts_with('-') {
            self.captures.push(Capture::Hold { offset: pos });
            if self.after_hold(set_start, pos + 1, sets) {
                return true;
            }
            self.captures.truncate(mark);
        }
        if self.after_hold(set_start, pos, sets) {
            return true;
        }
        self.fail(key, mark)
    }

    fn after_hold(&mut self, set_start: usize, pos: usize, sets: usize) -> bool {
        let key = (Stage::AfterHold, pos, 0, sets);
        if self.known_failure(&key) {
            return false;
        }
        let mark = self.captures.len();
        // lazy: try ending the set without a repeat digit first
        if self.end_set(set_start, pos, sets) {
            return true;
        }
        if self.grammar.limits.max_sequence_length > 1 {
            if let Some(&b) = self.text.as_bytes().get(pos) {
                let count = usize::from(b.wrapping_sub(b'0'));
                if b.is_ascii_digit() && (1..=self.grammar.max_repeat()).contains(&count) {
                    self.captures.push(Capture::Repeat { offset: pos, count });
                    if self.end_set(set_start, pos + 1, sets) {
                        return true;
                    }
                }
            }
        }
        self.fail(key, mark)
    }

    fn end_set(&mut self, set_start: usize, pos: usize, sets: usize) -> bool {
        let key = (Stage::EndSet, pos, 0, sets);
        if self.known_failure(&key) {
            return false;
        }
        let mark = self.captures.len();
        self.captures.push(Capture::Set { start: set_start, end: pos });
        let sets = sets + 1;
        // greedy: prefer another set over stopping
        if sets < self.grammar.limits.max_sequence_length && pos < self.text.len() && self.set_from(pos, sets) {
            return true;
        }
        if pos == self.text.len() {
            return true;
        }
        self.fail(key, mark)
    }
}
