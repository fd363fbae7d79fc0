//! The input model: one atomic input and its variants.
//!
//! An [`Input`] is the smallest unit of control a chat message can express: a
//! button press, an analog press at some strength, a touchscreen point or
//! drag, a hold marker, or a side marker. Inputs are plain immutable values.
//!
//! Two notions of equality exist:
//!
//! - **Exact equality** (`==`): every field matches, including the text the
//!   input was displayed as and parsed from.
//! - **Outcome equality** ([`Input::has_same_outcome_as`]): only the parts
//!   that change what happens in the game are compared. `honk` aliased to `y`
//!   and a plain `y` have the same outcome.

use crate::error::InputError;
use std::fmt;

/// Outcome identifier shared by every touchscreen-family input.
pub const TOUCHSCREEN: &str = "touchscreen";

const HOLD_TEXT: &str = "-";
const HOLD_BUTTON: &str = "hold";
const SIDE_BUTTON: &str = "side";

/// Which half of a mirrored control scheme an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSide {
    Left,
    Right,
}

impl InputSide {
    pub fn as_str(self) -> &'static str {
        match self {
            InputSide::Left => "left",
            InputSide::Right => "right",
        }
    }
}

impl fmt::Display for InputSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant-specific payload of an [`Input`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputKind {
    /// A plain digital button.
    Button,
    /// A partially pressable button or stick direction. `strength` is in `[0, 1]`.
    Analog { strength: f32 },
    /// A single touchscreen contact.
    Touchscreen { x: u32, y: u32 },
    /// A touchscreen contact dragged from `(x, y)` to `(x2, y2)`.
    TouchscreenDrag { x: u32, y: u32, x2: u32, y2: u32 },
    /// Keep the set pressed into the next frame.
    Hold,
    /// Side marker. `side` is `None` while undetermined; `direct` records
    /// whether the side was spelled out in the message.
    Side { side: Option<InputSide>, direct: bool },
}

/// One atomic input.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    displayed_text: String,
    button_name: String,
    original_text: String,
    kind: InputKind,
}

impl Input {
    /// A plain button press.
    pub fn button(
        displayed_text: impl Into<String>,
        button_name: impl Into<String>,
        original_text: impl Into<String>,
    ) -> Self {
        Input {
            displayed_text: displayed_text.into(),
            button_name: button_name.into(),
            original_text: original_text.into(),
            kind: InputKind::Button,
        }
    }

    /// An analog press. Fails if `strength` lies outside `[0, 1]`.
    pub fn analog(
        displayed_text: impl Into<String>,
        button_name: impl Into<String>,
        original_text: impl Into<String>,
        strength: f32,
    ) -> Result<Self, InputError> {
        if !(0.0..=1.0).contains(&strength) {
            return Err(InputError::StrengthOutOfRange(strength));
        }
        Ok(Input {
            displayed_text: displayed_text.into(),
            button_name: button_name.into(),
            original_text: original_text.into(),
            kind: InputKind::Analog { strength },
        })
    }

    pub fn touchscreen(
        displayed_text: impl Into<String>,
        button_name: impl Into<String>,
        original_text: impl Into<String>,
        x: u32,
        y: u32,
    ) -> Self {
        Input {
            displayed_text: displayed_text.into(),
            button_name: button_name.into(),
            original_text: original_text.into(),
            kind: InputKind::Touchscreen { x, y },
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn touchscreen_drag(
        displayed_text: impl Into<String>,
        button_name: impl Into<String>,
        original_text: impl Into<String>,
        x: u32,
        y: u32,
        x2: u32,
        y2: u32,
    ) -> Self {
        Input {
            displayed_text: displayed_text.into(),
            button_name: button_name.into(),
            original_text: original_text.into(),
            kind: InputKind::TouchscreenDrag { x, y, x2, y2 },
        }
    }

    /// The hold marker. All hold markers are identical.
    pub fn hold() -> Self {
        Input {
            displayed_text: HOLD_TEXT.to_string(),
            button_name: HOLD_BUTTON.to_string(),
            original_text: HOLD_TEXT.to_string(),
            kind: InputKind::Hold,
        }
    }

    /// A side marker.
    pub fn side(side: Option<InputSide>, direct: bool) -> Self {
        Input {
            displayed_text: side.map(InputSide::as_str).unwrap_or("?").to_string(),
            button_name: SIDE_BUTTON.to_string(),
            original_text: String::new(),
            kind: InputKind::Side { side, direct },
        }
    }

    /// Human-facing label.
    pub fn displayed_text(&self) -> &str {
        &self.displayed_text
    }

    /// Outcome identifier: what a downstream consumer acts on.
    pub fn button_name(&self) -> &str {
        &self.button_name
    }

    /// The exact substring this input was parsed from.
    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn kind(&self) -> &InputKind {
        &self.kind
    }

    pub fn is_hold(&self) -> bool {
        matches!(self.kind, InputKind::Hold)
    }

    pub fn is_side(&self) -> bool {
        matches!(self.kind, InputKind::Side { .. })
    }

    /// True for touchscreen points and drags.
    pub fn is_touch(&self) -> bool {
        matches!(self.kind, InputKind::Touchscreen { .. } | InputKind::TouchscreenDrag { .. })
    }

    /// Analog strength, or `None` for non-analog inputs.
    pub fn strength(&self) -> Option<f32> {
        match self.kind {
            InputKind::Analog { strength } => Some(strength),
            _ => None,
        }
    }

    /// Side payload, or `None` for non-side inputs.
    pub fn side_info(&self) -> Option<(Option<InputSide>, bool)> {
        match self.kind {
            InputKind::Side { side, direct } => Some((side, direct)),
            _ => None,
        }
    }

    /// Whether two inputs would cause the same action in the game.
    ///
    /// Display and original text are ignored. Variants never compare equal
    /// to each other, so an analog `up` and a digital `up` differ.
    pub fn has_same_outcome_as(&self, other: &Input) -> bool {
        if self.button_name != other.button_name {
            return false;
        }
        match (&self.kind, &other.kind) {
            (InputKind::Button, InputKind::Button) => true,
            (InputKind::Hold, InputKind::Hold) => true,
            (InputKind::Analog { strength: a }, InputKind::Analog { strength: b }) => (a - b).abs() < f32::EPSILON,
            (InputKind::Touchscreen { x, y }, InputKind::Touchscreen { x: ox, y: oy }) => x == ox && y == oy,
            (
                InputKind::TouchscreenDrag { x, y, x2, y2 },
                InputKind::TouchscreenDrag { x: ox, y: oy, x2: ox2, y2: oy2 },
            ) => x == ox && y == oy && x2 == ox2 && y2 == oy2,
            (InputKind::Side { side, .. }, InputKind::Side { side: other_side, .. }) => side == other_side,
            _ => false,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InputKind::Analog { strength } => write!(f, "{}({}={})", self.displayed_text, self.button_name, strength),
            _ => write!(f, "{}({})", self.displayed_text, self.button_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_outcome_ignores_texts() {
        let base = Input::button("foo", "a", "bar");
        let other_display = Input::button("X", "a", "bar");
        let other_original = Input::button("foo", "a", "X");
        let other_button = Input::button("foo", "X", "bar");

        assert_eq!(base, base.clone());
        assert_ne!(base, other_display);
        assert_ne!(base, other_original);
        assert_ne!(base, other_button);

        assert!(base.has_same_outcome_as(&base));
        assert!(base.has_same_outcome_as(&other_display));
        assert!(base.has_same_outcome_as(&other_original));
        assert!(!base.has_same_outcome_as(&other_button));
    }

    #[test]
    fn touchscreen_outcome_compares_coordinates() {
        let base = Input::touchscreen("foo", "a", "bar", 11, 12);
        assert!(base.has_same_outcome_as(&Input::touchscreen("X", "a", "Y", 11, 12)));
        assert!(!base.has_same_outcome_as(&Input::touchscreen("foo", "X", "bar", 11, 12)));
        assert!(!base.has_same_outcome_as(&Input::touchscreen("foo", "a", "bar", 999, 12)));
        assert!(!base.has_same_outcome_as(&Input::touchscreen("foo", "a", "bar", 11, 999)));
        assert_ne!(base, Input::touchscreen("X", "a", "bar", 11, 12));
    }

    #[test]
    fn drag_outcome_compares_both_points() {
        let base = Input::touchscreen_drag("foo", "a", "bar", 11, 12, 13, 14);
        assert!(base.has_same_outcome_as(&Input::touchscreen_drag("X", "a", "X", 11, 12, 13, 14)));
        assert!(!base.has_same_outcome_as(&Input::touchscreen_drag("foo", "a", "bar", 999, 12, 13, 14)));
        assert!(!base.has_same_outcome_as(&Input::touchscreen_drag("foo", "a", "bar", 11, 999, 13, 14)));
        assert!(!base.has_same_outcome_as(&Input::touchscreen_drag("foo", "a", "bar", 11, 12, 999, 14)));
        assert!(!base.has_same_outcome_as(&Input::touchscreen_drag("foo", "a", "bar", 11, 12, 13, 999)));
        // a point is never the same outcome as a drag starting there
        assert!(!base.has_same_outcome_as(&Input::touchscreen("foo", "a", "bar", 11, 12)));
    }

    #[test]
    fn analog_outcome_compares_strength() {
        let base = Input::analog("foo", "a", "bar", 0.1).unwrap();
        assert!(base.has_same_outcome_as(&Input::analog("X", "a", "X", 0.1).unwrap()));
        assert!(!base.has_same_outcome_as(&Input::analog("foo", "X", "bar", 0.1).unwrap()));
        assert!(!base.has_same_outcome_as(&Input::analog("foo", "a", "bar", 0.999).unwrap()));
        assert_ne!(base, Input::analog("foo", "a", "bar", 0.999).unwrap());
    }

    #[test]
    fn analog_strength_must_be_a_fraction() {
        assert_eq!(Input::analog("a", "a", "a", 1.5), Err(InputError::StrengthOutOfRange(1.5)));
        assert_eq!(Input::analog("a", "a", "a", -0.1), Err(InputError::StrengthOutOfRange(-0.1)));
        assert!(Input::analog("a", "a", "a", 0.0).is_ok());
        assert!(Input::analog("a", "a", "a", 1.0).is_ok());
    }

    #[test]
    fn analog_and_button_with_same_name_differ() {
        let button = Input::button("up", "up", "up");
        let analog = Input::analog("up", "up", "up", 1.0).unwrap();
        assert!(!button.has_same_outcome_as(&analog));
    }

    #[test]
    fn hold_and_side_markers() {
        assert_eq!(Input::hold(), Input::hold());
        assert!(Input::hold().is_hold());
        let undecided = Input::side(None, false);
        let right = Input::side(Some(InputSide::Right), true);
        assert!(undecided.is_side());
        assert_eq!(right.side_info(), Some((Some(InputSide::Right), true)));
        assert!(!undecided.has_same_outcome_as(&right));
        assert!(right.has_same_outcome_as(&Input::side(Some(InputSide::Right), false)));
    }

    #[test]
    fn display_includes_strength_for_analog() {
        assert_eq!(Input::button("honk", "y", "HONK").to_string(), "honk(y)");
        assert_eq!(Input::analog("up", "up", "up.5", 0.5).unwrap().to_string(), "up(up=0.5)");
    }
}
