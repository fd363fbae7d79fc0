//! Touchscreen points and drags.
//!
//! Coordinates are typed in the screen's own resolution and validated against
//! it. A [`TouchscreenGeometry`] can then rescale and offset them, for setups
//! where the emulated screen is rendered at a different size or position than
//! the one viewers see.
//!
//! ```text
//! typed "120,80" on 240x160, scale_width 480, x_offset 10
//!   bounds:    120 < 240, 80 < 160      ok
//!   rescale:   x = 120 * (480 / 240) = 240
//!   offset:    x = 240 + 10          = 250
//! ```

use super::InputDefinition;
use crate::engine::Fragment;
use crate::input::Input;

/// Size and placement of a touchscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchscreenGeometry {
    /// Exclusive upper bound for typed x coordinates.
    pub width: u32,
    /// Exclusive upper bound for typed y coordinates.
    pub height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
    /// Width to rescale to, or 0 to keep typed coordinates.
    pub scale_width: u32,
    /// Height to rescale to, or 0 to keep typed coordinates.
    pub scale_height: u32,
}

impl TouchscreenGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        TouchscreenGeometry { width, height, x_offset: 0, y_offset: 0, scale_width: 0, scale_height: 0 }
    }

    pub fn with_offset(mut self, x_offset: u32, y_offset: u32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn with_scale(mut self, scale_width: u32, scale_height: u32) -> Self {
        self.scale_width = scale_width;
        self.scale_height = scale_height;
        self
    }

    pub fn x_scale(&self) -> f32 {
        scale(self.scale_width, self.width)
    }

    pub fn y_scale(&self) -> f32 {
        scale(self.scale_height, self.height)
    }

    /// Whether a typed point lies on the screen.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Map a typed point to the coordinates that get executed.
    pub fn transform(&self, x: u32, y: u32) -> (u32, u32) {
        (apply(x, self.x_scale(), self.x_offset), apply(y, self.y_scale(), self.y_offset))
    }

    /// Grammar fragment for a single `x,y` point.
    fn point_fragment(&self) -> Fragment {
        Fragment::Seq(vec![
            Fragment::digits_for_bound(self.width),
            Fragment::Char(','),
            Fragment::digits_for_bound(self.height),
        ])
    }
}

fn scale(target: u32, dimension: u32) -> f32 {
    if target > 0 && dimension > 0 { target as f32 / dimension as f32 } else { 1.0 }
}

fn apply(value: u32, scale: f32, offset: u32) -> u32 {
    let scaled = if scale == 1.0 { value } else { (value as f32 * scale) as u32 };
    scaled.saturating_add(offset)
}

fn parse_point(caps: &regex::Captures<'_>, x: usize, y: usize) -> Option<(u32, u32)> {
    Some((caps.get(x)?.as_str().parse().ok()?, caps.get(y)?.as_str().parse().ok()?))
}

/// A single touch at `x,y`, e.g. `120,80`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchscreenDefinition {
    name: String,
    geometry: TouchscreenGeometry,
}

impl TouchscreenDefinition {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self::with_geometry(name, TouchscreenGeometry::new(width, height))
    }

    pub fn with_geometry(name: impl Into<String>, geometry: TouchscreenGeometry) -> Self {
        TouchscreenDefinition { name: name.into(), geometry }
    }

    pub fn geometry(&self) -> &TouchscreenGeometry {
        &self.geometry
    }
}

impl InputDefinition for TouchscreenDefinition {
    fn fragment(&self) -> Fragment {
        self.geometry.point_fragment()
    }

    fn parse(&self, text: &str) -> Option<Input> {
        let caps = regex!(r"^([0-9]+),([0-9]+)$").captures(text)?;
        let (x, y) = parse_point(&caps, 1, 2)?;
        if !self.geometry.contains(x, y) {
            return None;
        }
        let (x, y) = self.geometry.transform(x, y);
        Some(Input::touchscreen(text, self.name.as_str(), text, x, y))
    }

    fn describe(&self) -> String {
        format!("touch {}x{}", self.geometry.width, self.geometry.height)
    }
}

/// A drag from one point to another, e.g. `120,80>60,40`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchscreenDragDefinition {
    name: String,
    geometry: TouchscreenGeometry,
}

impl TouchscreenDragDefinition {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self::with_geometry(name, TouchscreenGeometry::new(width, height))
    }

    pub fn with_geometry(name: impl Into<String>, geometry: TouchscreenGeometry) -> Self {
        TouchscreenDragDefinition { name: name.into(), geometry }
    }
}

impl InputDefinition for TouchscreenDragDefinition {
    fn fragment(&self) -> Fragment {
        Fragment::Seq(vec![self.geometry.point_fragment(), Fragment::Char('>'), self.geometry.point_fragment()])
    }

    fn parse(&self, text: &str) -> Option<Input> {
        let caps = regex!(r"^([0-9]+),([0-9]+)>([0-9]+),([0-9]+)$").captures(text)?;
        let (x1, y1) = parse_point(&caps, 1, 2)?;
        let (x2, y2) = parse_point(&caps, 3, 4)?;
        if !self.geometry.contains(x1, y1) || !self.geometry.contains(x2, y2) {
            return None;
        }
        let (x1, y1) = self.geometry.transform(x1, y1);
        let (x2, y2) = self.geometry.transform(x2, y2);
        Some(Input::touchscreen_drag(text, self.name.as_str(), text, x1, y1, x2, y2))
    }

    fn describe(&self) -> String {
        format!("drag {}x{}", self.geometry.width, self.geometry.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputKind, TOUCHSCREEN};
    use proptest::prelude::*;

    #[test]
    fn point_within_bounds() {
        let ts = TouchscreenDefinition::new(TOUCHSCREEN, 240, 160);
        assert_eq!(ts.parse("234,123"), Some(Input::touchscreen("234,123", TOUCHSCREEN, "234,123", 234, 123)));
        assert_eq!(ts.parse("239,159").map(|i| i.kind().clone()), Some(InputKind::Touchscreen { x: 239, y: 159 }));
        assert_eq!(ts.parse("240,159"), None);
        assert_eq!(ts.parse("239,160"), None);
    }

    #[test]
    fn leading_zeros_are_accepted() {
        let ts = TouchscreenDefinition::new(TOUCHSCREEN, 240, 160);
        let parsed = ts.parse("012,023").unwrap();
        assert_eq!(parsed.kind(), &InputKind::Touchscreen { x: 12, y: 23 });
        assert_eq!(parsed.displayed_text(), "012,023");
    }

    #[test]
    fn non_ascii_digits_are_rejected() {
        let ts = TouchscreenDefinition::new(TOUCHSCREEN, 240, 160);
        assert!(ts.fragment().ends("২৩৪,১২৩", 0).is_empty());
        assert_eq!(ts.parse("২৩৪,১২৩"), None);
    }

    #[test]
    fn geometry_rescales_then_offsets() {
        let geometry = TouchscreenGeometry::new(240, 160).with_scale(480, 320).with_offset(10, 20);
        let ts = TouchscreenDefinition::with_geometry(TOUCHSCREEN, geometry);
        let parsed = ts.parse("120,80").unwrap();
        assert_eq!(parsed.kind(), &InputKind::Touchscreen { x: 250, y: 180 });
        // bounds are checked before rescaling
        assert_eq!(ts.parse("300,10"), None);
    }

    #[test]
    fn drag_checks_both_endpoints() {
        let drag = TouchscreenDragDefinition::new(TOUCHSCREEN, 240, 160);
        let parsed = drag.parse("234,123>11,22").unwrap();
        assert_eq!(parsed.kind(), &InputKind::TouchscreenDrag { x: 234, y: 123, x2: 11, y2: 22 });
        assert_eq!(parsed.button_name(), TOUCHSCREEN);
        assert_eq!(drag.parse("240,159>0,0"), None);
        assert_eq!(drag.parse("0,0>239,160"), None);
    }

    proptest! {
        #[test]
        fn point_parses_iff_on_screen(x in 0u32..1000, y in 0u32..1000) {
            let ts = TouchscreenDefinition::new(TOUCHSCREEN, 800, 600);
            let text = format!("{x},{y}");
            let parsed = ts.parse(&text);
            prop_assert_eq!(parsed.is_some(), x < 800 && y < 600);
        }
    }
}
