//! Grammar compiler and matcher.
//!
//! This module turns the configured input definitions into one unified
//! grammar and matches chat text against it.
//!
//! ## How the parts work together
//!
//! ```text
//! definitions ──┐
//!               │  CompiledGrammar::new          (compiled_grammar.rs)
//!               │    - one Fragment per definition (fragment.rs)
//!               │    - lead-class index
//!               └───────────────┬──────────────
//!                               │
//! text ─────────────────────────┼─ match_sequence   (matcher.rs)
//!                               │    - backtracking, first alternative wins
//!                               │    - captures per token / hold / repeat / set
//!                               v
//!                         assemble                  (assemble.rs)
//!                               - parse tokens via owning definition
//!                               - restore textual order, hold, repeat
//!                               - enforce sequence limit
//!                               │
//!                               v
//!                    Option<InputSequence>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `fragment.rs`: the tiny pattern language definitions contribute, and the
//!   enumeration of candidate match ends in backtracking order.
//! - `compiled_grammar.rs`: validates structural limits, collects alternatives
//!   and indexes them by the class of their first character.
//! - `matcher.rs`: anchored, case-insensitive matching of a whole message with
//!   a failure memo.
//! - `assemble.rs`: capture reconstruction and the post-match limit check.
//! - `metrics.rs`: verbose traces and timings.
//!
//! ## Debugging
//!
//! Matching decisions are logged at `trace` level and rejections at `debug`
//! level through the `log` facade, e.g. `RUST_LOG=crowdinput=trace`.

#[path = "engine/assemble.rs"]
mod assemble;
#[path = "engine/compiled_grammar.rs"]
mod compiled_grammar;
#[path = "engine/fragment.rs"]
mod fragment;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;

pub(crate) use assemble::assemble;
pub use assemble::Rejection;
pub(crate) use compiled_grammar::CompiledGrammar;
pub use compiled_grammar::{GrammarLimits, LeadMask};
pub use fragment::Fragment;
pub(crate) use matcher::{Capture, match_sequence};
pub use matcher::TokenSlot;
pub use metrics::{MatchedToken, ParseDetails, ParseTimings};
