//! Fluent construction of parser stacks.
//!
//! ```text
//! InputParserBuilder::from_bare()
//!     .buttons(["a", "b", "start", "select"])
//!     .dpad("")                     // up/down/left/right + opposite conflicts
//!     .touchscreen(240, 160, false, true)
//!     .length_restrictions(2, 4)
//!     .build()?                     // Box<dyn InputParser>
//! ```
//!
//! Definitions are registered in call order, which is also the priority order
//! when two definitions match the same text.

use crate::definitions::{
    AnalogDefinition, AnyAsTouchscreenDefinition, ButtonDefinition, InputDefinition, TouchscreenDefinition,
    TouchscreenDragDefinition, TouchscreenGeometry,
};
use crate::engine::GrammarLimits;
use crate::error::ConfigError;
use crate::game_aliases::GameAliases;
use crate::input::TOUCHSCREEN;
use crate::parsing::{BareParser, ContextualParser, DEFAULT_LONE_BUTTONS, InputParser, SidePrefixes, SidedParser};

/// Chat names for the four directions of a D-pad or stick.
#[derive(Debug, Clone, Copy)]
pub struct DirectionNames<'a> {
    pub up: &'a str,
    pub down: &'a str,
    pub left: &'a str,
    pub right: &'a str,
}

impl<'a> DirectionNames<'a> {
    fn all(&self) -> [&'a str; 4] {
        [self.up, self.down, self.left, self.right]
    }
}

fn prefixed(prefix: &str) -> [String; 4] {
    ["up", "down", "left", "right"].map(|dir| format!("{prefix}{dir}"))
}

/// Collects input definitions and settings, then builds a parser stack.
#[derive(Debug)]
pub struct InputParserBuilder {
    definitions: Vec<Box<dyn InputDefinition>>,
    conflicts: Vec<(String, String)>,
    multitouch: bool,
    limits: GrammarLimits,
    touchscreen: Option<TouchscreenGeometry>,
    lone_buttons: Vec<String>,
    sides: Option<SidePrefixes>,
    error: Option<ConfigError>,
}

impl InputParserBuilder {
    /// A builder without any definitions.
    pub fn from_bare() -> Self {
        InputParserBuilder {
            definitions: Vec::new(),
            conflicts: Vec::new(),
            multitouch: false,
            limits: GrammarLimits::default(),
            touchscreen: None,
            lone_buttons: DEFAULT_LONE_BUTTONS.iter().map(|s| s.to_string()).collect(),
            sides: None,
            error: None,
        }
    }

    // --- Structure -----------------------------------------------------------

    /// Maximum inputs per set and maximum sets per sequence.
    pub fn length_restrictions(mut self, max_set_length: usize, max_sequence_length: usize) -> Self {
        self.limits.max_set_length = max_set_length;
        self.limits.max_sequence_length = max_sequence_length;
        self
    }

    /// Whether a trailing `-` may keep a set pressed.
    pub fn hold_enabled(mut self, enabled: bool) -> Self {
        self.limits.hold_enabled = enabled;
        self
    }

    /// Wrap the finished parser so side prefixes are recognized.
    pub fn sides(mut self, prefixes: SidePrefixes) -> Self {
        self.sides = Some(prefixes);
        self
    }

    // --- Buttons -------------------------------------------------------------

    pub fn buttons<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, names: I) -> Self {
        for name in names {
            let name = name.as_ref();
            self.definitions.push(Box::new(ButtonDefinition::new(name, name, true)));
        }
        self
    }

    /// Buttons recognized and displayed by their own name but executed as
    /// their target, e.g. `("honk", "y")`.
    pub fn aliased_buttons<I: IntoIterator<Item = (A, B)>, A: AsRef<str>, B: AsRef<str>>(
        mut self,
        aliases: I,
    ) -> Self {
        for (name, maps_to) in aliases {
            self.definitions.push(Box::new(ButtonDefinition::new(name.as_ref(), maps_to.as_ref(), true)));
        }
        self
    }

    /// Buttons recognized by their own name but displayed and executed as
    /// their target, e.g. `("select", "back")`.
    pub fn remapped_buttons<I: IntoIterator<Item = (A, B)>, A: AsRef<str>, B: AsRef<str>>(
        mut self,
        remappings: I,
    ) -> Self {
        for (name, maps_to) in remappings {
            self.definitions.push(Box::new(ButtonDefinition::new(name.as_ref(), maps_to.as_ref(), false)));
        }
        self
    }

    // --- Analog inputs -------------------------------------------------------

    pub fn analog_inputs<I: IntoIterator<Item = S>, S: AsRef<str>>(mut self, names: I) -> Self {
        for name in names {
            let name = name.as_ref();
            self.definitions.push(Box::new(AnalogDefinition::new(name, name, true)));
        }
        self
    }

    pub fn aliased_analog_inputs<I: IntoIterator<Item = (A, B)>, A: AsRef<str>, B: AsRef<str>>(
        mut self,
        aliases: I,
    ) -> Self {
        for (name, maps_to) in aliases {
            self.definitions.push(Box::new(AnalogDefinition::new(name.as_ref(), maps_to.as_ref(), true)));
        }
        self
    }

    pub fn remapped_analog_inputs<I: IntoIterator<Item = (A, B)>, A: AsRef<str>, B: AsRef<str>>(
        mut self,
        remappings: I,
    ) -> Self {
        for (name, maps_to) in remappings {
            self.definitions.push(Box::new(AnalogDefinition::new(name.as_ref(), maps_to.as_ref(), false)));
        }
        self
    }

    /// Analog `up`/`down`/`left`/`right` with `prefix` prepended, opposite
    /// directions conflicting. With `allow_spin`, `spinl` and `spinr` buttons
    /// are added that conflict with every direction.
    pub fn analog_stick(self, prefix: &str, allow_spin: bool) -> Self {
        let [up, down, left, right] = prefixed(prefix);
        let mut builder =
            self.analog_inputs([&up, &down, &left, &right]).direction_conflicts(&up, &down, &left, &right);
        if allow_spin {
            let spins = [format!("{prefix}spinl"), format!("{prefix}spinr")];
            builder = builder.buttons(&spins);
            for spin in &spins {
                builder = builder.spin_conflicts(spin, [up.as_str(), down.as_str(), left.as_str(), right.as_str()]);
            }
        }
        builder
    }

    /// A stick whose directions go by custom names, each aliased to
    /// `maps_to_prefix` + direction.
    pub fn aliased_analog_stick(
        self,
        names: DirectionNames<'_>,
        spin_left: Option<&str>,
        spin_right: Option<&str>,
        maps_to_prefix: &str,
    ) -> Self {
        self.custom_stick(names, spin_left, spin_right, maps_to_prefix, true)
    }

    /// Like [`aliased_analog_stick`](Self::aliased_analog_stick), but
    /// displayed as the targets.
    pub fn remapped_analog_stick(
        self,
        names: DirectionNames<'_>,
        spin_left: Option<&str>,
        spin_right: Option<&str>,
        maps_to_prefix: &str,
    ) -> Self {
        self.custom_stick(names, spin_left, spin_right, maps_to_prefix, false)
    }

    fn custom_stick(
        mut self,
        names: DirectionNames<'_>,
        spin_left: Option<&str>,
        spin_right: Option<&str>,
        maps_to_prefix: &str,
        keeps_name: bool,
    ) -> Self {
        let targets = prefixed(maps_to_prefix);
        for (name, target) in names.all().into_iter().zip(&targets) {
            self.definitions.push(Box::new(AnalogDefinition::new(name, target.as_str(), keeps_name)));
        }
        let [up, down, left, right] = &targets;
        self = self.direction_conflicts(up, down, left, right);
        let directions = [up.as_str(), down.as_str(), left.as_str(), right.as_str()];
        for (spin, suffix) in [(spin_left, "spinl"), (spin_right, "spinr")] {
            if let Some(spin) = spin {
                let target = format!("{maps_to_prefix}{suffix}");
                self.definitions.push(Box::new(ButtonDefinition::new(spin, target.as_str(), keeps_name)));
                self = self.spin_conflicts(&target, directions);
            }
        }
        self
    }

    // --- D-pad ---------------------------------------------------------------

    /// Buttons `up`/`down`/`left`/`right` with `prefix` prepended, opposite
    /// directions conflicting.
    pub fn dpad(self, prefix: &str) -> Self {
        let [up, down, left, right] = prefixed(prefix);
        self.buttons([&up, &down, &left, &right]).direction_conflicts(&up, &down, &left, &right)
    }

    pub fn aliased_dpad(self, names: DirectionNames<'_>, maps_to_prefix: &str) -> Self {
        self.custom_dpad(names, maps_to_prefix, true)
    }

    pub fn remapped_dpad(self, names: DirectionNames<'_>, maps_to_prefix: &str) -> Self {
        self.custom_dpad(names, maps_to_prefix, false)
    }

    fn custom_dpad(mut self, names: DirectionNames<'_>, maps_to_prefix: &str, keeps_name: bool) -> Self {
        let targets = prefixed(maps_to_prefix);
        for (name, target) in names.all().into_iter().zip(&targets) {
            self.definitions.push(Box::new(ButtonDefinition::new(name, target.as_str(), keeps_name)));
        }
        let [up, down, left, right] = &targets;
        self.direction_conflicts(up, down, left, right)
    }

    // --- Touchscreen ---------------------------------------------------------

    /// A touchscreen accepting `0 <= x < width`, `0 <= y < height`, plus drags
    /// if `allow_drag`.
    pub fn touchscreen(self, width: u32, height: u32, multitouch: bool, allow_drag: bool) -> Self {
        self.touchscreen_with_geometry(TouchscreenGeometry::new(width, height), multitouch, allow_drag)
    }

    /// A touchscreen whose coordinates are rescaled and offset before execution.
    pub fn touchscreen_with_geometry(
        mut self,
        geometry: TouchscreenGeometry,
        multitouch: bool,
        allow_drag: bool,
    ) -> Self {
        if geometry.width == 0 || geometry.height == 0 {
            let (width, height) = (geometry.width, geometry.height);
            self.record_error(ConfigError::ZeroTouchscreenDimension { width, height });
        }
        self.definitions.push(Box::new(TouchscreenDefinition::with_geometry(TOUCHSCREEN, geometry)));
        if allow_drag {
            self.definitions.push(Box::new(TouchscreenDragDefinition::with_geometry(TOUCHSCREEN, geometry)));
        }
        self.touchscreen = Some(geometry);
        self.multitouch = multitouch;
        self
    }

    /// A named button that taps a fixed point, e.g. `("move2", 252, 78)`.
    /// The point goes through the registered touchscreen's rescale and offset.
    pub fn aliased_touchscreen_input(mut self, name: &str, x: u32, y: u32) -> Self {
        let geometry = self.touchscreen.unwrap_or_else(|| TouchscreenGeometry::new(u32::MAX, u32::MAX));
        let base = Box::new(ButtonDefinition::new(name, name, true));
        let alias = AnyAsTouchscreenDefinition::new(base, TOUCHSCREEN, &geometry, (x, y), true);
        self.definitions.push(Box::new(alias));
        self
    }

    pub fn aliased_touchscreen_inputs<'a, I>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = &'a (&'a str, u32, u32)>,
    {
        for &(name, x, y) in aliases {
            self = self.aliased_touchscreen_input(name, x, y);
        }
        self
    }

    /// Register the touchscreen shortcuts of a specific game.
    pub fn game_aliases(self, game: GameAliases) -> Self {
        self.aliased_touchscreen_inputs(game.aliases())
    }

    // --- Contextual rules ----------------------------------------------------

    /// Pairs of buttons that may not share a set, e.g. `("start", "select")`.
    pub fn conflicts<I: IntoIterator<Item = (A, B)>, A: AsRef<str>, B: AsRef<str>>(mut self, pairs: I) -> Self {
        self.conflicts.extend(pairs.into_iter().map(|(a, b)| (a.as_ref().to_string(), b.as_ref().to_string())));
        self
    }

    pub fn start_select_conflict(self) -> Self {
        self.conflicts([("start", "select")])
    }

    /// Buttons that may only be input alone. Replaces the default `["wait"]`.
    pub fn lone_buttons<I: IntoIterator<Item = S>, S: Into<String>>(mut self, buttons: I) -> Self {
        self.lone_buttons = buttons.into_iter().map(Into::into).collect();
        self
    }

    fn direction_conflicts(self, up: &str, down: &str, left: &str, right: &str) -> Self {
        self.conflicts([(up, down), (left, right)])
    }

    fn spin_conflicts(self, spin: &str, directions: [&str; 4]) -> Self {
        self.conflicts(directions.map(|dir| (spin, dir)))
    }

    fn record_error(&mut self, error: ConfigError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    // --- Build ---------------------------------------------------------------

    /// Only the context-free layer, e.g. for verbose parse traces.
    pub fn build_bare(self) -> Result<BareParser, ConfigError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        BareParser::new(self.definitions, self.limits)
    }

    /// The full stack: bare parser, contextual checks and, if configured,
    /// side prefixes.
    pub fn build(mut self) -> Result<Box<dyn InputParser>, ConfigError> {
        let conflicts = std::mem::take(&mut self.conflicts);
        let lone_buttons = std::mem::take(&mut self.lone_buttons);
        let multitouch = self.multitouch;
        let sides = self.sides;

        let bare = self.build_bare()?;
        let contextual = ContextualParser::new(bare, conflicts, multitouch).with_lone_buttons(lone_buttons);
        let parser: Box<dyn InputParser> = match sides {
            Some(prefixes) => Box::new(SidedParser::new(contextual, prefixes)),
            None => Box::new(contextual),
        };
        Ok(parser)
    }
}

impl Default for InputParserBuilder {
    fn default() -> Self {
        Self::from_bare()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Input, InputKind};

    #[test]
    fn empty_builder_is_a_config_error() {
        assert!(matches!(InputParserBuilder::from_bare().build(), Err(ConfigError::NoDefinitions)));
    }

    #[test]
    fn zero_limits_are_config_errors() {
        let set = InputParserBuilder::from_bare().buttons(["a"]).length_restrictions(0, 1).build();
        assert!(matches!(set, Err(ConfigError::ZeroSetLength)));
        let seq = InputParserBuilder::from_bare().buttons(["a"]).length_restrictions(1, 0).build();
        assert!(matches!(seq, Err(ConfigError::ZeroSequenceLength)));
    }

    #[test]
    fn zero_touchscreen_is_a_config_error() {
        let built = InputParserBuilder::from_bare().touchscreen(0, 160, false, false).build();
        assert!(matches!(built, Err(ConfigError::ZeroTouchscreenDimension { width: 0, height: 160 })));
    }

    #[test]
    fn analog_stick_adds_spin_conflicts() {
        let parser = InputParserBuilder::from_bare()
            .analog_stick("", true)
            .length_restrictions(2, 1)
            .build()
            .unwrap();
        assert!(parser.parse("up+left").is_some());
        assert!(parser.parse("up+down").is_none());
        assert!(parser.parse("spinl+up").is_none());
        assert!(parser.parse("spinr").is_some());
    }

    #[test]
    fn aliased_dpad_conflicts_on_targets() {
        let names = DirectionNames { up: "n", down: "s", left: "w", right: "e" };
        let parser = InputParserBuilder::from_bare().aliased_dpad(names, "d").build().unwrap();
        let parsed = parser.parse("n+w").unwrap();
        assert_eq!(parsed.sets()[0].inputs()[0], Input::button("n", "dup", "n"));
        assert!(parser.parse("n+s").is_none());
    }

    #[test]
    fn remapped_stick_is_displayed_as_target() {
        let names = DirectionNames { up: "n", down: "s", left: "w", right: "e" };
        let parser = InputParserBuilder::from_bare().remapped_analog_stick(names, None, None, "l").build().unwrap();
        let parsed = parser.parse("n.5").unwrap();
        let input = &parsed.sets()[0].inputs()[0];
        assert_eq!(input.displayed_text(), "lup");
        assert_eq!(input.strength(), Some(0.5));
    }

    #[test]
    fn touchscreen_alias_uses_geometry() {
        let geometry = TouchscreenGeometry::new(240, 160).with_offset(100, 0);
        let parser = InputParserBuilder::from_bare()
            .touchscreen_with_geometry(geometry, false, false)
            .aliased_touchscreen_input("move1", 42, 69)
            .build()
            .unwrap();
        let parsed = parser.parse("move1").unwrap();
        assert_eq!(parsed.sets()[0].inputs()[0].kind(), &InputKind::Touchscreen { x: 142, y: 69 });
    }

    #[test]
    fn sides_wrap_the_stack() {
        let parser = InputParserBuilder::from_bare().buttons(["a"]).sides(SidePrefixes::default()).build().unwrap();
        let parsed = parser.parse("la").unwrap();
        assert_eq!(parsed.sets()[0].inputs()[1], Input::side(Some(crate::input::InputSide::Left), true));
    }
}
