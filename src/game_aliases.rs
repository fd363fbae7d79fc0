//! Touchscreen shortcuts for specific games.
//!
//! Each game gets named regions (`move1`..`move4`, `poke1`..`poke6`, `run`,
//! `bag`, ...) mapped to the point on its lower screen that selects them.
//! Coordinates are in the touchscreen's typed resolution and go through its
//! rescale and offset like any other alias.

use serde::Deserialize;

/// A game with predefined touchscreen aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GameAliases {
    #[serde(rename = "dppt")]
    Platinum,
    #[serde(rename = "hgss")]
    HeartGold,
    #[serde(rename = "bw")]
    BlackWhite,
    #[serde(rename = "bw2")]
    BlackWhite2,
    #[serde(rename = "xy")]
    XY,
    #[serde(rename = "oras")]
    OmegaRuby,
    #[serde(rename = "sm")]
    SunMoon,
    #[serde(rename = "usum")]
    UltraSun,
}

type Alias = (&'static str, u32, u32);

// HGSS and SM reuse their siblings' layouts.
const PLATINUM: &[Alias] = &[
    ("run", 111, 190),
    ("switch", 210, 155),
    ("bag", 4, 190),
    ("poke1", 111, 1),
    ("poke2", 250, 22),
    ("poke3", 3, 72),
    ("poke4", 253, 80),
    ("poke5", 1, 116),
    ("poke6", 250, 116),
    ("move1", 5, 23),
    ("move2", 252, 78),
    ("move3", 126, 94),
    ("move4", 250, 116),
    ("reuse", 38, 189),
    ("heal", 1, 46),
    ("throw", 250, 7),
    ("status", 0, 116),
    ("items", 253, 80),
];

const BLACK_WHITE: &[Alias] = &[
    ("move1", 2, 72),
    ("move2", 252, 32),
    ("move3", 2, 124),
    ("move4", 248, 90),
    ("reuse", 79, 190),
    ("heal", 41, 20),
    ("throw", 225, 20),
    ("status", 120, 132),
    ("items", 254, 90),
    ("bag", 3, 170),
    ("run", 127, 151),
    ("switch", 210, 190),
    ("poke1", 10, 5),
    ("poke2", 149, 10),
    ("poke3", 6, 75),
    ("poke4", 250, 75),
    ("poke5", 5, 98),
    ("poke6", 130, 150),
];

const BLACK_WHITE_2: &[Alias] = &[
    ("move1", 2, 72),
    ("move2", 252, 32),
    ("move3", 2, 124),
    ("move4", 248, 90),
    ("reuse", 79, 190),
    ("heal", 41, 20),
    ("throw", 225, 20),
    ("status", 120, 132),
    ("items", 254, 90),
    ("bag", 3, 170),
    ("run", 127, 161),
    ("switch", 210, 190),
    ("poke1", 10, 5),
    ("poke2", 149, 10),
    ("poke3", 6, 75),
    ("poke4", 250, 75),
    ("poke5", 5, 98),
    ("poke6", 130, 150),
];

const XY: &[Alias] = &[
    ("move1", 40, 70),
    ("move2", 279, 70),
    ("move3", 40, 130),
    ("move4", 279, 130),
    ("reuse", 25, 210),
    ("heal", 45, 25),
    ("throw", 274, 25),
    ("status", 45, 164),
    ("items", 274, 164),
    ("bag", 20, 234),
    ("run", 159, 234),
    ("switch", 249, 229),
    ("poke1", 20, 20),
    ("poke2", 299, 30),
    ("poke3", 20, 90),
    ("poke4", 299, 100),
    ("poke5", 20, 160),
    ("poke6", 299, 170),
    ("mega", 159, 190),
];

const OMEGA_RUBY: &[Alias] = &[
    ("move1", 40, 70),
    ("move2", 279, 70),
    ("move3", 40, 130),
    ("move4", 279, 130),
    ("reuse", 25, 220),
    ("heal", 45, 25),
    ("throw", 274, 40),
    ("status", 45, 149),
    ("items", 274, 164),
    ("bag", 20, 234),
    ("run", 159, 234),
    ("switch", 249, 229),
    ("poke1", 20, 20),
    ("poke2", 299, 30),
    ("poke3", 20, 90),
    ("poke4", 299, 100),
    ("poke5", 20, 160),
    ("poke6", 299, 170),
    ("mega", 159, 190),
];

const ULTRA_SUN: &[Alias] = &[
    ("move1", 315, 50),
    ("move2", 315, 100),
    ("move3", 315, 150),
    ("move4", 315, 180),
    ("reuse", 77, 188),
    ("heal", 80, 20),
    ("throw", 160, 20),
    ("status", 70, 140),
    ("items", 140, 140),
    ("bag", 40, 160),
    ("run", 130, 200),
    ("switch", 20, 80),
    ("poke1", 20, 30),
    ("poke2", 20, 60),
    ("poke3", 20, 90),
    ("poke4", 20, 120),
    ("poke5", 20, 150),
    ("poke6", 20, 180),
];

impl GameAliases {
    /// `(name, x, y)` for every alias of this game, in registration order.
    pub fn aliases(self) -> &'static [(&'static str, u32, u32)] {
        match self {
            GameAliases::Platinum | GameAliases::HeartGold => PLATINUM,
            GameAliases::BlackWhite => BLACK_WHITE,
            GameAliases::BlackWhite2 => BLACK_WHITE_2,
            GameAliases::XY => XY,
            GameAliases::OmegaRuby => OMEGA_RUBY,
            GameAliases::SunMoon | GameAliases::UltraSun => ULTRA_SUN,
        }
    }
}
