//! Grammar fragments.
//!
//! A [`Fragment`] is the small sub-pattern an input definition contributes to
//! the unified grammar. Fragments are deliberately tiny: literals, ASCII digit
//! runs, single characters, concatenation and optional parts. That is enough
//! to express every token shape we accept (`honk`, `up.5`, `120,215`,
//! `120,215>80,170`) while keeping the matcher hand-written and portable.
//!
//! ## Matching model
//!
//! Instead of a boolean "does it match", a fragment reports every position
//! where a match starting at `pos` could *end*, in the order a backtracking
//! regex engine would try them:
//!
//! ```text
//! Digits{1,3} at "1234,5"
//!   ends = [3, 2, 1]            (greedy: longest first)
//!
//! Seq[Lit("up"), Opt(Seq[Char('.'), Digit(1..=9)])] at "up.5a"
//!   ends = [4, 2]               (optional part present first)
//! ```
//!
//! The sequence matcher then walks those candidates in order, which gives the
//! same first-match priority as a regex alternation with greedy quantifiers.

use super::compiled_grammar::LeadMask;

/// A sub-pattern contributed by one input definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A literal matched case-insensitively.
    Literal(String),
    /// Between `min` and `max` ASCII digits, greedy.
    Digits { min: usize, max: usize },
    /// Exactly one ASCII digit within `lo..=hi`.
    DigitRange { lo: u8, hi: u8 },
    /// A single character, matched exactly.
    Char(char),
    /// Concatenation.
    Seq(Vec<Fragment>),
    /// Zero or one occurrence, greedy.
    Optional(Box<Fragment>),
}

impl Fragment {
    pub fn literal(text: impl Into<String>) -> Self {
        Fragment::Literal(text.into())
    }

    /// Digits wide enough to spell any value below `bound`.
    pub fn digits_for_bound(bound: u32) -> Self {
        Fragment::Digits { min: 1, max: bound.to_string().len() }
    }

    pub fn optional(inner: Fragment) -> Self {
        Fragment::Optional(Box::new(inner))
    }

    /// All end positions of a match starting at `pos`, in preference order,
    /// without duplicates.
    pub fn ends(&self, text: &str, pos: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_ends(text, pos, &mut out);
        let mut seen = Vec::with_capacity(out.len());
        out.retain(|end| {
            if seen.contains(end) {
                false
            } else {
                seen.push(*end);
                true
            }
        });
        out
    }

    fn collect_ends(&self, text: &str, pos: usize, out: &mut Vec<usize>) {
        match self {
            Fragment::Literal(lit) => {
                if let Some(end) = match_literal(text, pos, lit) {
                    out.push(end);
                }
            }
            Fragment::Digits { min, max } => {
                let bytes = text.as_bytes();
                let available = bytes[pos..].iter().take(*max).take_while(|b| b.is_ascii_digit()).count();
                if available >= *min {
                    out.extend((*min..=available).rev().map(|n| pos + n));
                }
            }
            Fragment::DigitRange { lo, hi } => {
                if let Some(&b) = text.as_bytes().get(pos) {
                    if b.is_ascii_digit() && (*lo..=*hi).contains(&(b - b'0')) {
                        out.push(pos + 1);
                    }
                }
            }
            Fragment::Char(c) => {
                if text[pos..].starts_with(*c) {
                    out.push(pos + c.len_utf8());
                }
            }
            Fragment::Seq(parts) => collect_seq_ends(parts, text, pos, out),
            Fragment::Optional(inner) => {
                inner.collect_ends(text, pos, out);
                out.push(pos);
            }
        }
    }

    /// Which character classes a match can start with, and whether the
    /// fragment can match the empty string.
    pub fn lead(&self) -> (LeadMask, bool) {
        match self {
            Fragment::Literal(lit) => match lit.chars().next() {
                Some(c) => (LeadMask::of_char(c), false),
                None => (LeadMask::empty(), true),
            },
            Fragment::Digits { min, .. } => (LeadMask::DIGIT, *min == 0),
            Fragment::DigitRange { .. } => (LeadMask::DIGIT, false),
            Fragment::Char(c) => (LeadMask::of_char(*c), false),
            Fragment::Seq(parts) => {
                let mut mask = LeadMask::empty();
                for part in parts {
                    let (m, nullable) = part.lead();
                    mask |= m;
                    if !nullable {
                        return (mask, false);
                    }
                }
                (mask, true)
            }
            Fragment::Optional(inner) => (inner.lead().0, true),
        }
    }
}

fn collect_seq_ends(parts: &[Fragment], text: &str, pos: usize, out: &mut Vec<usize>) {
    let Some((first, rest)) = parts.split_first() else {
        out.push(pos);
        return;
    };
    for end in first.ends(text, pos) {
        collect_seq_ends(rest, text, end, out);
    }
}

/// Case-insensitive literal match; returns the byte offset after the match.
fn match_literal(text: &str, pos: usize, lit: &str) -> Option<usize> {
    let mut rest = text[pos..].chars();
    let mut end = pos;
    for expected in lit.chars() {
        let actual = rest.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end += actual.len_utf8();
    }
    Some(end)
}
