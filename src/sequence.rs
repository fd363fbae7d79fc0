//! Input sets and input sequences.
//!
//! An [`InputSet`] is everything pressed on one frame; an [`InputSequence`]
//! is a run of sets played back one after another. Both mirror the dual
//! equality of [`Input`]: `==` is exact and order-sensitive, while
//! `has_same_outcome_as` ignores order inside a set and compares inputs by
//! outcome.

use crate::input::Input;
use std::fmt;

/// Inputs active on the same frame, in the order they were typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSet {
    inputs: Vec<Input>,
}

impl InputSet {
    pub fn new(inputs: Vec<Input>) -> Self {
        InputSet { inputs }
    }

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Whether this set carries a hold marker.
    pub fn is_held(&self) -> bool {
        self.inputs.iter().any(Input::is_hold)
    }

    /// Returns a copy with `input` appended.
    pub fn with(&self, input: Input) -> Self {
        let mut inputs = self.inputs.clone();
        inputs.push(input);
        InputSet { inputs }
    }

    /// Order-insensitive, outcome-based multiset comparison.
    pub fn has_same_outcome_as(&self, other: &InputSet) -> bool {
        if self.inputs.len() != other.inputs.len() {
            return false;
        }
        let mut claimed = vec![false; other.inputs.len()];
        self.inputs.iter().all(|input| {
            let found = other
                .inputs
                .iter()
                .enumerate()
                .find(|(idx, candidate)| !claimed[*idx] && input.has_same_outcome_as(candidate))
                .map(|(idx, _)| idx);
            match found {
                Some(idx) => {
                    claimed[idx] = true;
                    true
                }
                None => false,
            }
        })
    }

    /// Chat text for this set: original texts joined by `+`, then `-` if held.
    /// Side markers carry no text and are skipped.
    fn representation(&self) -> String {
        let parts: Vec<&str> = self
            .inputs
            .iter()
            .filter(|i| !i.is_hold() && !i.is_side())
            .map(Input::original_text)
            .collect();
        let mut out = parts.join("+");
        if self.is_held() {
            out.push('-');
        }
        out
    }
}

impl fmt::Display for InputSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, input) in self.inputs.iter().enumerate() {
            if idx > 0 {
                f.write_str("+")?;
            }
            write!(f, "{input}")?;
        }
        Ok(())
    }
}

impl From<Vec<Input>> for InputSet {
    fn from(inputs: Vec<Input>) -> Self {
        InputSet::new(inputs)
    }
}

/// Successive input sets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSequence {
    sets: Vec<InputSet>,
}

/// Longest run a single repeat digit can express.
const MAX_REPEAT_DIGIT: usize = 9;

impl InputSequence {
    pub fn new(sets: Vec<InputSet>) -> Self {
        InputSequence { sets }
    }

    pub fn sets(&self) -> &[InputSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn into_sets(self) -> Vec<InputSet> {
        self.sets
    }

    /// Set-wise outcome comparison, in order.
    pub fn has_same_outcome_as(&self, other: &InputSequence) -> bool {
        self.sets.len() == other.sets.len()
            && self.sets.iter().zip(&other.sets).all(|(a, b)| a.has_same_outcome_as(b))
    }

    /// Applies `f` to every set, e.g. to append a marker input.
    pub fn map_sets(self, f: impl FnMut(InputSet) -> InputSet) -> Self {
        InputSequence { sets: self.sets.into_iter().map(f).collect() }
    }

    /// Render this sequence back to chat syntax.
    ///
    /// With `collapse_repeats`, consecutive sets with the same outcome are
    /// written once followed by their count, e.g. `a+b3`.
    ///
    /// ```text
    /// [x] [a+b] [b+a] [a+b] [x]   ──collapse──>   "xa+b3x"
    /// ```
    pub fn to_representation(&self, collapse_repeats: bool) -> String {
        let mut out = String::new();
        let mut idx = 0;
        while idx < self.sets.len() {
            let set = &self.sets[idx];
            let mut run = 1;
            if collapse_repeats {
                while run < MAX_REPEAT_DIGIT
                    && idx + run < self.sets.len()
                    && self.sets[idx + run].has_same_outcome_as(set)
                {
                    run += 1;
                }
            }
            out.push_str(&set.representation());
            if run > 1 {
                out.push_str(&run.to_string());
            }
            idx += run;
        }
        out
    }
}

impl fmt::Display for InputSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InputSequence(")?;
        for (idx, set) in self.sets.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{set}")?;
        }
        f.write_str(")")
    }
}

impl From<Vec<InputSet>> for InputSequence {
    fn from(sets: Vec<InputSet>) -> Self {
        InputSequence::new(sets)
    }
}

impl<'a> IntoIterator for &'a InputSequence {
    type Item = &'a InputSet;
    type IntoIter = std::slice::Iter<'a, InputSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(names: &[&str]) -> InputSet {
        InputSet::new(names.iter().map(|s| Input::button(*s, *s, *s)).collect())
    }

    fn seq(sets: Vec<InputSet>) -> InputSequence {
        InputSequence::new(sets)
    }

    #[test]
    fn set_equality_is_order_sensitive_but_outcome_is_not() {
        assert_eq!(set(&["a", "b"]), set(&["a", "b"]));
        assert_ne!(set(&["a", "b"]), set(&["b", "a"]));
        assert!(set(&["a", "b"]).has_same_outcome_as(&set(&["b", "a"])));
        assert!(!set(&["a", "b"]).has_same_outcome_as(&set(&["a", "x"])));
    }

    #[test]
    fn sequence_outcome_is_set_wise_and_ordered() {
        let reference = seq(vec![set(&["a", "b"]), set(&["c", "d"])]);
        let swapped_inside = seq(vec![set(&["b", "a"]), set(&["d", "c"])]);
        let swapped_sets = seq(vec![set(&["c", "d"]), set(&["a", "b"])]);

        assert_eq!(reference, reference.clone());
        assert_ne!(reference, swapped_inside);
        assert!(reference.has_same_outcome_as(&swapped_inside));
        assert!(!reference.has_same_outcome_as(&swapped_sets));
        assert!(!reference.has_same_outcome_as(&seq(vec![set(&["a", "b"]), set(&["c", "x"])])));
    }

    #[test]
    fn set_outcome_compares_button_names_only() {
        let reference = InputSet::new(vec![Input::button("Foo", "a", "foo"), Input::button("Bar", "b", "bar")]);
        let reordered = InputSet::new(vec![Input::button("Baz", "b", "baz"), Input::button("Quz", "a", "quz")]);
        let shorter = InputSet::new(vec![Input::button("Foo", "a", "foo")]);
        let doubled = InputSet::new(vec![Input::button("Foo", "a", "foo"), Input::button("Bar", "a", "bar")]);

        assert_ne!(reference, reordered);
        assert!(reference.has_same_outcome_as(&reordered));
        assert!(!reference.has_same_outcome_as(&shorter));
        assert!(!reference.has_same_outcome_as(&doubled));
        // multiset semantics: {a, a} is not {a, b}
        assert!(!doubled.has_same_outcome_as(&reference));
    }

    #[test]
    fn representation_collapses_buttons() {
        let s = seq(vec![set(&["x"]), set(&["a", "b"]), set(&["b", "a"]), set(&["a", "b"]), set(&["x"])]);
        assert_eq!(s.to_representation(true), "xa+b3x");
        assert_eq!(s.to_representation(false), "xa+bb+aa+bx");
    }

    #[test]
    fn representation_collapses_touchscreen() {
        let touch = |x: u32, y: u32| {
            InputSet::new(vec![Input::touchscreen(format!("{x},{y}"), "touchscreen", format!("{x},{y}"), x, y)])
        };
        let s = seq(vec![set(&["x"]), touch(123, 234), touch(123, 234), touch(321, 432), set(&["x"])]);
        assert_eq!(s.to_representation(true), "x123,2342321,432x");
        assert_eq!(s.to_representation(false), "x123,234123,234321,432x");
    }

    #[test]
    fn representation_keeps_analog_text_and_hold() {
        let analog = |tenths: u8| {
            let strength = f32::from(tenths) / 10.0;
            InputSet::new(vec![Input::analog(format!("A.{tenths}"), "A", format!("a.{tenths}"), strength).unwrap()])
        };
        let s = seq(vec![set(&["x"]), analog(5), analog(5), analog(6), set(&["x"]).with(Input::hold())]);
        assert_eq!(s.to_representation(true), "xa.52a.6x-");
        assert_eq!(s.to_representation(false), "xa.5a.5a.6x-");
    }

    #[test]
    fn representation_splits_long_runs() {
        let s = seq((0..11).map(|_| set(&["a"])).collect());
        assert_eq!(s.to_representation(true), "a9a2");
    }

    #[test]
    fn display_joins_sets() {
        let s = seq(vec![set(&["a", "b"]), set(&["c"])]);
        assert_eq!(s.to_string(), "InputSequence(a(a)+b(b), c(c))");
    }

    proptest! {
        #[test]
        fn outcome_equality_survives_permutation(names in prop::collection::vec("[a-e]", 1..6), seed in any::<u64>()) {
            let original: Vec<Input> =
                names.iter().map(|n| Input::button(n.as_str(), n.as_str(), n.as_str())).collect();
            let mut shuffled = original.clone();
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            let a = InputSet::new(original);
            let b = InputSet::new(shuffled);
            prop_assert!(a.has_same_outcome_as(&b));
            prop_assert!(b.has_same_outcome_as(&a));
        }

        #[test]
        fn relabeling_never_changes_outcome(name in "[a-z]{1,6}", label in "[A-Z]{1,6}", original in "[a-z]{1,6}") {
            let a = InputSet::new(vec![Input::button(name.as_str(), name.as_str(), name.as_str())]);
            let b = InputSet::new(vec![Input::button(label.as_str(), name.as_str(), original.as_str())]);
            prop_assert!(a.has_same_outcome_as(&b));
        }
    }
}
