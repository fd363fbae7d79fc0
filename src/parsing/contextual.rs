use super::InputParser;
use crate::input::Input;
use crate::sequence::{InputSequence, InputSet};
use std::collections::HashSet;
use std::fmt;

/// Default outcome identifiers that must stand alone in their set.
pub const DEFAULT_LONE_BUTTONS: &[&str] = &["wait"];

/// A cross-input rule a parsed set broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two non-touch inputs press the same button, e.g. `l+l.3`.
    DuplicateButton(String),
    /// Two inputs do exactly the same thing, e.g. `11,22+move1` when `move1`
    /// taps `11,22`.
    DuplicateOutcome(String),
    /// More than one touch in a set while multitouch is off.
    Multitouch,
    /// Two configured-as-conflicting buttons in one set.
    Conflict(String, String),
    /// A lone button shared its set with other inputs.
    NotAlone(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateButton(button) => write!(f, "button {button:?} pressed twice in one set"),
            Violation::DuplicateOutcome(input) => write!(f, "{input} appears twice in one set"),
            Violation::Multitouch => f.write_str("multiple touches in one set without multitouch"),
            Violation::Conflict(a, b) => write!(f, "{a:?} conflicts with {b:?}"),
            Violation::NotAlone(button) => write!(f, "{button:?} must be the only input in its set"),
        }
    }
}

/// Rejects sequences that are well-formed but make no sense to execute.
///
/// Checks run per input set, in this order: lone buttons, duplicate button
/// names (touch inputs exempt), duplicate outcomes, multitouch, conflicts.
#[derive(Debug)]
pub struct ContextualParser<P> {
    base: P,
    conflicts: HashSet<(String, String)>,
    multitouch: bool,
    lone_buttons: HashSet<String>,
}

/// Conflicts are unordered; store each pair sorted.
fn conflict_key(a: &str, b: &str) -> (String, String) {
    if a <= b { (a.to_string(), b.to_string()) } else { (b.to_string(), a.to_string()) }
}

impl<P: InputParser> ContextualParser<P> {
    pub fn new<I, A, B>(base: P, conflicts: I, multitouch: bool) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        ContextualParser {
            base,
            conflicts: conflicts.into_iter().map(|(a, b)| conflict_key(a.as_ref(), b.as_ref())).collect(),
            multitouch,
            lone_buttons: DEFAULT_LONE_BUTTONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the set of buttons that may only appear alone.
    pub fn with_lone_buttons<I: IntoIterator<Item = S>, S: Into<String>>(mut self, buttons: I) -> Self {
        self.lone_buttons = buttons.into_iter().map(Into::into).collect();
        self
    }

    pub fn base(&self) -> &P {
        &self.base
    }

    pub fn is_conflict(&self, a: &str, b: &str) -> bool {
        self.conflicts.contains(&conflict_key(a, b))
    }

    /// Check every set of `sequence`, returning the first violation found.
    pub fn validate(&self, sequence: &InputSequence) -> Result<(), Violation> {
        sequence.sets().iter().try_for_each(|set| self.validate_set(set))
    }

    fn validate_set(&self, set: &InputSet) -> Result<(), Violation> {
        let inputs = set.inputs();

        if inputs.len() > 1 {
            if let Some(lone) = inputs.iter().find(|i| self.lone_buttons.contains(i.button_name())) {
                return Err(Violation::NotAlone(lone.button_name().to_string()));
            }
        }

        let mut seen = HashSet::new();
        for input in inputs.iter().filter(|i| !i.is_touch()) {
            if !seen.insert(input.button_name()) {
                return Err(Violation::DuplicateButton(input.button_name().to_string()));
            }
        }

        for (idx, input) in inputs.iter().enumerate() {
            if inputs[..idx].iter().any(|earlier: &Input| earlier.has_same_outcome_as(input)) {
                return Err(Violation::DuplicateOutcome(input.to_string()));
            }
        }

        if !self.multitouch && inputs.iter().filter(|i| i.is_touch()).count() > 1 {
            return Err(Violation::Multitouch);
        }

        for (idx, a) in inputs.iter().enumerate() {
            for b in &inputs[idx + 1..] {
                if a.button_name() != b.button_name() && self.is_conflict(a.button_name(), b.button_name()) {
                    return Err(Violation::Conflict(a.button_name().to_string(), b.button_name().to_string()));
                }
            }
        }
        Ok(())
    }
}

impl<P: InputParser> InputParser for ContextualParser<P> {
    fn parse(&self, text: &str) -> Option<InputSequence> {
        let sequence = self.base.parse(text)?;
        match self.validate(&sequence) {
            Ok(()) => Some(sequence),
            Err(violation) => {
                log::debug!("rejected {text:?}: {violation}");
                None
            }
        }
    }
}
