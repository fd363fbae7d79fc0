use super::InputDefinition;
use crate::engine::Fragment;
use crate::input::Input;

/// A plain button, recognized by its name.
///
/// `maps_to` is the button actually pressed. With `keeps_name` the input is
/// displayed under its own name (an alias like `honk` for `y`); without it the
/// input is displayed as its target (a remap like `select` to `back`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDefinition {
    name: String,
    maps_to: String,
    keeps_name: bool,
}

impl ButtonDefinition {
    pub fn new(name: impl Into<String>, maps_to: impl Into<String>, keeps_name: bool) -> Self {
        ButtonDefinition { name: name.into(), maps_to: maps_to.into(), keeps_name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn maps_to(&self) -> &str {
        &self.maps_to
    }

    fn displayed(&self) -> &str {
        if self.keeps_name { &self.name } else { &self.maps_to }
    }
}

impl InputDefinition for ButtonDefinition {
    fn fragment(&self) -> Fragment {
        Fragment::literal(self.name.as_str())
    }

    fn parse(&self, text: &str) -> Option<Input> {
        Some(Input::button(self.displayed(), self.maps_to.as_str(), text))
    }

    fn describe(&self) -> String {
        if self.name == self.maps_to {
            format!("button {:?}", self.name)
        } else {
            format!("button {:?} -> {:?}", self.name, self.maps_to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_keeps_its_name() {
        let honk = ButtonDefinition::new("honk", "y", true);
        assert_eq!(honk.parse("HONK"), Some(Input::button("honk", "y", "HONK")));
    }

    #[test]
    fn remap_is_displayed_as_target() {
        let select = ButtonDefinition::new("select", "back", false);
        assert_eq!(select.parse("select"), Some(Input::button("back", "back", "select")));
    }

    #[test]
    fn configured_case_is_retained() {
        let a = ButtonDefinition::new("A", "A", true);
        assert_eq!(a.parse("a"), Some(Input::button("A", "A", "a")));
        assert_eq!(a.fragment(), Fragment::literal("A"));
    }
}
