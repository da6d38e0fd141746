use std::fmt;

use crate::color::Color;

/// `floor(c * 255)` with no clamping; the float-to-int cast saturates.
fn rgb_component(c: f32) -> i64 {
    (c * 255.0).floor() as i64
}

fn hex_component(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).floor() as u8
}

impl Color {
    /// `rgb(R, G, B)`, or `rgba(R, G, B, A)` when alpha is not exactly 1.0.
    pub fn to_rgb_string(&self) -> String {
        self.to_rgb_string_alpha(!self.is_opaque())
    }

    /// Channels are not clamped here, unlike [`Color::to_hex_string_alpha`].
    pub fn to_rgb_string_alpha(&self, include_alpha: bool) -> String {
        let [r, g, b, a] = self.to_array().map(rgb_component);
        if include_alpha {
            format!("rgba({r}, {g}, {b}, {a})")
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when alpha is not exactly 1.0.
    pub fn to_hex_string(&self) -> String {
        self.to_hex_string_alpha(!self.is_opaque())
    }

    pub fn to_hex_string_alpha(&self, include_alpha: bool) -> String {
        let [r, g, b, a] = self.to_array().map(hex_component);
        if include_alpha {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}
