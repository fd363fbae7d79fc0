use super::{InputDefinition, TouchscreenGeometry};
use crate::engine::Fragment;
use crate::input::Input;

/// Recognized like its base definition, executed as a fixed touchscreen point.
///
/// This is how named screen regions work: `move1` is matched as a button but
/// taps the coordinate of the first move. The target goes through the
/// touchscreen's rescale and offset once, at construction.
#[derive(Debug)]
pub struct AnyAsTouchscreenDefinition {
    base: Box<dyn InputDefinition>,
    touchscreen_name: String,
    target_x: u32,
    target_y: u32,
    keeps_name: bool,
}

impl AnyAsTouchscreenDefinition {
    pub fn new(
        base: Box<dyn InputDefinition>,
        touchscreen_name: impl Into<String>,
        geometry: &TouchscreenGeometry,
        (x, y): (u32, u32),
        keeps_name: bool,
    ) -> Self {
        let (target_x, target_y) = geometry.transform(x, y);
        AnyAsTouchscreenDefinition { base, touchscreen_name: touchscreen_name.into(), target_x, target_y, keeps_name }
    }

    pub fn target(&self) -> (u32, u32) {
        (self.target_x, self.target_y)
    }
}

impl InputDefinition for AnyAsTouchscreenDefinition {
    fn fragment(&self) -> Fragment {
        self.base.fragment()
    }

    fn parse(&self, text: &str) -> Option<Input> {
        let inner = self.base.parse(text)?;
        let displayed = if self.keeps_name {
            inner.displayed_text().to_string()
        } else {
            format!("{},{}", self.target_x, self.target_y)
        };
        Some(Input::touchscreen(displayed, self.touchscreen_name.as_str(), text, self.target_x, self.target_y))
    }

    fn describe(&self) -> String {
        format!("{} as touch {},{}", self.base.describe(), self.target_x, self.target_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::ButtonDefinition;
    use crate::input::{InputKind, TOUCHSCREEN};

    fn move1(geometry: &TouchscreenGeometry, keeps_name: bool) -> AnyAsTouchscreenDefinition {
        let base = Box::new(ButtonDefinition::new("move1", "move1", true));
        AnyAsTouchscreenDefinition::new(base, TOUCHSCREEN, geometry, (42, 69), keeps_name)
    }

    #[test]
    fn parses_like_base_and_executes_as_point() {
        let def = move1(&TouchscreenGeometry::new(240, 160), true);
        assert_eq!(def.fragment(), Fragment::literal("move1"));
        assert_eq!(def.parse("MOVE1"), Some(Input::touchscreen("move1", TOUCHSCREEN, "MOVE1", 42, 69)));
    }

    #[test]
    fn renamed_alias_shows_coordinates() {
        let def = move1(&TouchscreenGeometry::new(240, 160), false);
        assert_eq!(def.parse("move1").map(|i| i.displayed_text().to_string()), Some("42,69".to_string()));
    }

    #[test]
    fn target_goes_through_geometry() {
        let geometry = TouchscreenGeometry::new(100, 100).with_scale(200, 100).with_offset(5, 7);
        let def = move1(&geometry, true);
        assert_eq!(def.target(), (89, 76));
        assert_eq!(def.parse("move1").map(|i| i.kind().clone()), Some(InputKind::Touchscreen { x: 89, y: 76 }));
    }
}
