use glam::Vec4;

use crate::error::{ColorError, ColorResult};

/// An RGBA color with `f32` channels, nominally in `[0, 1]`.
///
/// Construction stores channels verbatim. Only the hex formatter clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub const fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    pub const fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    pub const fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }

    /// HSL construction has no agreed conversion yet, so this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`ColorError::NotImplemented`].
    pub fn hsl(_h: f32, _s: f32, _l: f32) -> ColorResult<Self> {
        Err(ColorError::NotImplemented("hsl"))
    }

    pub fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Returns an owned copy; mutating it leaves `self` alone.
    pub fn to_vec4(&self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Per-channel `self * t + other * (1 - t)`.
    ///
    /// `t = 1.0` yields `self`, `t = 0.0` yields `other`. The result is not clamped.
    pub fn mix(&self, other: &Color, t: f32) -> Color {
        Self::from_vec4(self.to_vec4() * t + other.to_vec4() * (1.0 - t))
    }

    pub fn mix_half(&self, other: &Color) -> Color {
        self.mix(other, 0.5)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn set_r(&mut self, r: f32) -> &mut Self {
        self.r = r;
        self
    }

    pub fn set_g(&mut self, g: f32) -> &mut Self {
        self.g = g;
        self
    }

    pub fn set_b(&mut self, b: f32) -> &mut Self {
        self.b = b;
        self
    }

    pub fn set_a(&mut self, a: f32) -> &mut Self {
        self.a = a;
        self
    }

    pub(crate) fn is_opaque(&self) -> bool {
        self.a == 1.0
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Color> for Vec4 {
    fn from(color: Color) -> Self {
        color.to_vec4()
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Color::black(), [0.0, 0.0, 0.0, 1.0])]
    #[test_case(Color::white(), [1.0, 1.0, 1.0, 1.0])]
    #[test_case(Color::red(), [1.0, 0.0, 0.0, 1.0])]
    #[test_case(Color::green(), [0.0, 1.0, 0.0, 1.0])]
    #[test_case(Color::blue(), [0.0, 0.0, 1.0, 1.0])]
    fn presets(color: Color, expected: [f32; 4]) {
        assert_eq!(color.to_array(), expected);
    }

    #[test]
    fn presets_are_fresh_values() {
        let mut black = Color::black();
        black.set_r(0.7);
        assert_eq!(Color::black().r, 0.0);
    }

    #[test]
    fn new_stores_channels_verbatim() {
        let color = Color::new(-0.5, 2.0, 0.25, 3.0);
        assert_eq!(color.to_array(), [-0.5, 2.0, 0.25, 3.0]);
        assert_eq!(Color::rgb(0.1, 0.2, 0.3).a, 1.0);
        assert_eq!(Color::default(), Color::black());
    }

    #[test]
    fn hsl_is_not_implemented() {
        assert_eq!(Color::hsl(0.0, 0.5, 0.5), Err(ColorError::NotImplemented("hsl")));
    }

    #[test]
    fn mix_midpoint() {
        let mixed = Color::rgb(1.0, 0.0, 0.0).mix(&Color::rgb(0.0, 0.0, 0.0), 0.5);
        assert_eq!(mixed.r, 0.5);
        assert_eq!(Color::red().mix_half(&Color::black()), mixed);
    }

    #[test]
    fn mix_weights_toward_self() {
        let mixed = Color::rgb(1.0, 0.0, 0.0).mix(&Color::rgb(0.0, 1.0, 0.0), 1.0);
        assert_eq!(mixed.r, 1.0);
        assert_eq!(mixed.g, 0.0);

        let mixed = Color::red().mix(&Color::green(), 0.0);
        assert_eq!(mixed.to_array(), Color::green().to_array());
    }

    #[test]
    fn mix_does_not_clamp() {
        let mixed = Color::white().mix(&Color::black(), 2.0);
        assert_eq!(mixed.to_array(), [2.0, 2.0, 2.0, 1.0]);
    }

    #[test]
    fn with_alpha_leaves_original() {
        let color = Color::new(0.1, 0.2, 0.3, 0.9);
        let faded = color.with_alpha(0.2);
        assert_eq!(faded.a, 0.2);
        assert_eq!(color.a, 0.9);
        assert_eq!((faded.r, faded.g, faded.b), (0.1, 0.2, 0.3));
    }

    #[test]
    fn to_vec4_is_a_copy() {
        let color = Color::new(0.1, 0.2, 0.3, 0.4);
        let mut v = color.to_vec4();
        v.x = 0.9;
        v.w = 0.0;
        assert_eq!(v.to_array(), [0.9, 0.2, 0.3, 0.0]);
        assert_eq!(color.to_array(), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn vec4_round_trip() {
        let color = Color::new(0.25, 0.5, 0.75, 0.125);
        assert_eq!(Color::from_vec4(color.to_vec4()).to_array(), color.to_array());
        assert_eq!(Color::from(Vec4::from(color)), color);
        assert_eq!(Color::from(<[f32; 4]>::from(color)), color);
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut color = Color::black();
        color.set_r(0.1).set_g(0.2).set_b(0.3).set_a(0.4);
        assert_eq!(color.to_array(), [0.1, 0.2, 0.3, 0.4]);

        let copy = color;
        color.r = 1.0;
        assert_eq!(copy.r, 0.1);
        assert_eq!(color.r, 1.0);
    }
}
