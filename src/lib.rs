//! An RGBA color value with hex, packed-integer and CSS `rgb()` conversions.
//!
//! ```
//! use swatch::Color;
//!
//! let teal = Color::hex("#008080").unwrap();
//! assert_eq!(teal.with_alpha(0.5).to_hex_string(), "#0080807f");
//! assert_eq!(Color::black().to_rgb_string(), "rgb(0, 0, 0)");
//! ```

mod color;
mod error;
mod format;
mod parse;

pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use glam::Vec4;
pub use parse::HexInput;
