//! Construction-time errors.
//!
//! Parsing a chat message never fails loudly: a message that is not a valid
//! input command simply yields `None`. The types in this module only cover
//! mistakes made while *setting up* a parser or constructing inputs by hand.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or compiling an input parser.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The parser was built without any input definitions.
    #[error("at least one input definition is required")]
    NoDefinitions,

    /// Input sets must allow at least one input.
    #[error("max set length must be at least 1")]
    ZeroSetLength,

    /// Input sequences must allow at least one input set.
    #[error("max sequence length must be at least 1")]
    ZeroSequenceLength,

    /// A touchscreen was configured with a zero width or height.
    #[error("touchscreen dimensions must be non-zero (got {width}x{height})")]
    ZeroTouchscreenDimension { width: u32, height: u32 },

    /// A conflict entry in a config file did not name exactly two buttons.
    #[error("conflict entries must name exactly two buttons, got {0:?}")]
    MalformedConflict(Vec<String>),

    /// A side prefix must be a single character.
    #[error("side prefix must be a single character, got {0:?}")]
    MalformedSidePrefix(String),

    /// The config file could not be read.
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or does not fit the schema.
    #[error("invalid parser config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised when constructing an [`Input`](crate::Input) directly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Analog strengths are fractions of a full press.
    #[error("analog strength must be between 0 and 1, got {0}")]
    StrengthOutOfRange(f32),
}
