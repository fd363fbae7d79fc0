//! File-based parser configuration.
//!
//! A [`ParserConfig`] describes a whole parser stack in TOML, so a stream can
//! switch games without recompiling:
//!
//! ```toml
//! max_set_length = 2
//! max_sequence_length = 4
//! buttons = ["a", "b", "start", "select"]
//! aliased_buttons = [{ name = "honk", maps_to = "b" }]
//! dpad = ""
//! conflicts = [["start", "select"]]
//!
//! [touchscreen]
//! width = 240
//! height = 160
//! allow_drag = true
//!
//! [sides]
//! left = "l"
//! right = "r"
//! ```
//!
//! Definitions are registered in a fixed order: buttons, aliased buttons,
//! remapped buttons, analog inputs, D-pad, analog sticks, touchscreen,
//! touchscreen aliases, game aliases.

use crate::builder::InputParserBuilder;
use crate::definitions::TouchscreenGeometry;
use crate::error::ConfigError;
use crate::game_aliases::GameAliases;
use crate::parsing::{DEFAULT_LONE_BUTTONS, InputParser, SidePrefixes};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Mapping {
    pub name: String,
    pub maps_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StickConfig {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub allow_spin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TouchscreenConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub allow_drag: bool,
    #[serde(default)]
    pub multitouch: bool,
    #[serde(default)]
    pub x_offset: u32,
    #[serde(default)]
    pub y_offset: u32,
    #[serde(default)]
    pub scale_width: u32,
    #[serde(default)]
    pub scale_height: u32,
}

impl TouchscreenConfig {
    fn geometry(&self) -> TouchscreenGeometry {
        TouchscreenGeometry::new(self.width, self.height)
            .with_offset(self.x_offset, self.y_offset)
            .with_scale(self.scale_width, self.scale_height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TouchscreenAlias {
    pub name: String,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SidesConfig {
    #[serde(default = "default_true")]
    pub allow_directed: bool,
    #[serde(default = "default_left")]
    pub left: String,
    #[serde(default = "default_right")]
    pub right: String,
}

/// Serde description of a parser stack. See the module docs for an example.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    #[serde(default = "default_max_set_length")]
    pub max_set_length: usize,
    #[serde(default = "default_max_sequence_length")]
    pub max_sequence_length: usize,
    #[serde(default = "default_true")]
    pub hold_enabled: bool,

    #[serde(default)]
    pub buttons: Vec<String>,
    #[serde(default)]
    pub aliased_buttons: Vec<Mapping>,
    #[serde(default)]
    pub remapped_buttons: Vec<Mapping>,
    #[serde(default)]
    pub analog_inputs: Vec<String>,
    /// Prefix of a D-pad, if any (`""` for plain `up`/`down`/...).
    #[serde(default)]
    pub dpad: Option<String>,
    #[serde(default)]
    pub analog_sticks: Vec<StickConfig>,

    #[serde(default)]
    pub touchscreen: Option<TouchscreenConfig>,
    #[serde(default)]
    pub touchscreen_aliases: Vec<TouchscreenAlias>,
    #[serde(default)]
    pub game_aliases: Option<GameAliases>,

    #[serde(default)]
    pub conflicts: Vec<Vec<String>>,
    #[serde(default = "default_lone_buttons")]
    pub lone_buttons: Vec<String>,
    #[serde(default)]
    pub sides: Option<SidesConfig>,
}

fn default_true() -> bool {
    true
}

fn default_left() -> String {
    "l".to_string()
}

fn default_right() -> String {
    "r".to_string()
}

fn default_max_set_length() -> usize {
    2
}

fn default_max_sequence_length() -> usize {
    1
}

fn default_lone_buttons() -> Vec<String> {
    DEFAULT_LONE_BUTTONS.iter().map(|s| s.to_string()).collect()
}

impl ParserConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        log::debug!("loaded parser config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Translate into builder calls. Fails on malformed conflicts or side
    /// prefixes; structural limits are checked later by `build`.
    pub fn into_builder(self) -> Result<InputParserBuilder, ConfigError> {
        let mut conflicts = Vec::with_capacity(self.conflicts.len());
        for pair in self.conflicts {
            match <[String; 2]>::try_from(pair) {
                Ok([a, b]) => conflicts.push((a, b)),
                Err(pair) => return Err(ConfigError::MalformedConflict(pair)),
            }
        }

        let mut builder = InputParserBuilder::from_bare()
            .length_restrictions(self.max_set_length, self.max_sequence_length)
            .hold_enabled(self.hold_enabled)
            .buttons(&self.buttons)
            .aliased_buttons(self.aliased_buttons.iter().map(|m| (&m.name, &m.maps_to)))
            .remapped_buttons(self.remapped_buttons.iter().map(|m| (&m.name, &m.maps_to)))
            .analog_inputs(&self.analog_inputs);
        if let Some(prefix) = &self.dpad {
            builder = builder.dpad(prefix);
        }
        for stick in &self.analog_sticks {
            builder = builder.analog_stick(&stick.prefix, stick.allow_spin);
        }
        if let Some(ts) = &self.touchscreen {
            builder = builder.touchscreen_with_geometry(ts.geometry(), ts.multitouch, ts.allow_drag);
        }
        for alias in &self.touchscreen_aliases {
            builder = builder.aliased_touchscreen_input(&alias.name, alias.x, alias.y);
        }
        if let Some(game) = self.game_aliases {
            builder = builder.game_aliases(game);
        }
        builder = builder.conflicts(conflicts).lone_buttons(self.lone_buttons);
        if let Some(sides) = &self.sides {
            builder = builder.sides(SidePrefixes::from_strs(&sides.left, &sides.right, sides.allow_directed)?);
        }
        Ok(builder)
    }

    pub fn build(self) -> Result<Box<dyn InputParser>, ConfigError> {
        self.into_builder()?.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Input, InputKind, InputSide};

    const FULL: &str = r#"
        max_set_length = 2
        max_sequence_length = 4
        buttons = ["a", "b", "start", "select", "wait"]
        aliased_buttons = [{ name = "honk", maps_to = "b" }]
        remapped_buttons = [{ name = "back", maps_to = "select" }]
        dpad = ""
        conflicts = [["start", "select"]]

        [touchscreen]
        width = 240
        height = 160
        allow_drag = true
        x_offset = 10

        [[touchscreen_aliases]]
        name = "move1"
        x = 42
        y = 69
    "#;

    #[test]
    fn defaults_match_builder() {
        let config = ParserConfig::from_toml_str(r#"buttons = ["a"]"#).unwrap();
        assert_eq!(config.max_set_length, 2);
        assert_eq!(config.max_sequence_length, 1);
        assert!(config.hold_enabled);
        assert_eq!(config.lone_buttons, vec!["wait".to_string()]);
        assert!(config.sides.is_none());
    }

    #[test]
    fn full_config_builds_a_working_parser() {
        let parser = ParserConfig::from_toml_str(FULL).unwrap().build().unwrap();
        let parsed = parser.parse("honk+up2").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.sets()[0].inputs()[0], Input::button("honk", "b", "honk"));
        assert!(parser.parse("start+back").is_none());
        assert!(parser.parse("up+down").is_none());
        assert!(parser.parse("a+wait").is_none());

        let touch = parser.parse("move1").unwrap();
        assert_eq!(touch.sets()[0].inputs()[0].kind(), &InputKind::Touchscreen { x: 52, y: 69 });
        assert!(parser.parse("1,2>3,4").is_some());
    }

    #[test]
    fn sides_table_wraps_parser() {
        let text = "buttons = [\"a\"]\n[sides]\nright = \"R\"\n";
        let parser = ParserConfig::from_toml_str(text).unwrap().build().unwrap();
        let parsed = parser.parse("ra").unwrap();
        assert_eq!(parsed.sets()[0].inputs()[1], Input::side(Some(InputSide::Right), true));
    }

    #[test]
    fn malformed_entries_are_rejected() {
        let conflict = ParserConfig::from_toml_str("buttons = [\"a\"]\nconflicts = [[\"a\"]]").unwrap().build();
        assert!(matches!(conflict, Err(ConfigError::MalformedConflict(pair)) if pair == vec!["a".to_string()]));

        let side = ParserConfig::from_toml_str("buttons = [\"a\"]\n[sides]\nleft = \"left\"").unwrap().build();
        assert!(matches!(side, Err(ConfigError::MalformedSidePrefix(_))));

        assert!(matches!(ParserConfig::from_toml_str("bogus = 1"), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ParserConfig::from_path("/nonexistent/crowdinput.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
