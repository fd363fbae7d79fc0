use super::InputDefinition;
use crate::engine::Fragment;
use crate::input::Input;

/// A partially pressable input such as a trigger or a stick direction.
///
/// `r` is a full press, `r.3` presses at 30% strength. Only a single
/// non-zero digit is accepted after the dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalogDefinition {
    name: String,
    maps_to: String,
    keeps_name: bool,
}

impl AnalogDefinition {
    pub fn new(name: impl Into<String>, maps_to: impl Into<String>, keeps_name: bool) -> Self {
        AnalogDefinition { name: name.into(), maps_to: maps_to.into(), keeps_name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strength encoded by the suffix after the name: nothing or `.d`.
    fn strength(suffix: &str) -> Option<f32> {
        match suffix.as_bytes() {
            [] => Some(1.0),
            [b'.', digit @ b'1'..=b'9'] => Some(f32::from(digit - b'0') / 10.0),
            _ => None,
        }
    }
}

impl InputDefinition for AnalogDefinition {
    fn fragment(&self) -> Fragment {
        Fragment::Seq(vec![
            Fragment::literal(self.name.as_str()),
            Fragment::optional(Fragment::Seq(vec![Fragment::Char('.'), Fragment::DigitRange { lo: 1, hi: 9 }])),
        ])
    }

    fn parse(&self, text: &str) -> Option<Input> {
        let name_end = *Fragment::literal(self.name.as_str()).ends(text, 0).first()?;
        let strength = Self::strength(&text[name_end..])?;
        let displayed = if self.keeps_name { &self.name } else { &self.maps_to };
        Input::analog(displayed.as_str(), self.maps_to.as_str(), text, strength).ok()
    }

    fn describe(&self) -> String {
        if self.name == self.maps_to {
            format!("analog {:?}", self.name)
        } else {
            format!("analog {:?} -> {:?}", self.name, self.maps_to)
        }
    }
}
