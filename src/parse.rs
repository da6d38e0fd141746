use std::str::FromStr;

use crate::color::Color;
use crate::error::{ColorError, ColorResult};

/// Anything [`Color::hex`] accepts: a packed `0xRRGGBB` value or a `#RRGGBB[AA]` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexInput<'a> {
    Packed(u32),
    Text(&'a str),
}

impl From<u32> for HexInput<'_> {
    fn from(v: u32) -> Self {
        Self::Packed(v)
    }
}

impl<'a> From<&'a str> for HexInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for HexInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

fn reject(input: &str, reason: &'static str) -> ColorError {
    tracing::debug!(input, reason, "rejected color string");
    ColorError::invalid(input)
}

/// Two ASCII hex digits to a byte. Anything else, including a lone digit, is `None`.
fn hex_byte(pair: &[u8]) -> Option<u8> {
    let nibble = |c: u8| char::from(c).to_digit(16);
    match pair {
        [hi, lo] => u8::try_from(nibble(*hi)? << 4 | nibble(*lo)?).ok(),
        _ => None,
    }
}

fn parse_hex(input: &str) -> ColorResult<Color> {
    let Some(digits) = input.strip_prefix('#') else {
        return Err(reject(input, "missing '#' prefix"));
    };
    if input.len() != 7 && input.len() != 9 {
        return Err(reject(input, "expected #RRGGBB or #RRGGBBAA"));
    }

    // Alpha stays at 1.0 when only three groups are present.
    let mut channels = [1.0_f32; 4];
    for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks(2)) {
        let byte = hex_byte(pair).ok_or_else(|| reject(input, "non-hex digit"))?;
        *channel = f32::from(byte) / 255.0;
    }
    Ok(Color::from(channels))
}

fn parse_css(input: &str) -> ColorResult<Color> {
    let lower = input.trim().to_ascii_lowercase();
    let (args, arity) = if let Some(args) = lower.strip_prefix("rgba(") {
        (args, 4)
    } else if let Some(args) = lower.strip_prefix("rgb(") {
        (args, 3)
    } else {
        return Err(reject(input, "expected rgb() or rgba()"));
    };
    let Some(args) = args.strip_suffix(')') else {
        return Err(reject(input, "missing closing parenthesis"));
    };

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != arity {
        return Err(reject(input, "wrong number of channels"));
    }

    let mut channels = [1.0_f32; 4];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        let byte: u8 = part
            .parse()
            .map_err(|_| reject(input, "channel must be an integer in 0..=255"))?;
        *channel = f32::from(byte) / 255.0;
    }
    Ok(Color::from(channels))
}

impl Color {
    /// Parses a packed `0xRRGGBB` value or a `#RRGGBB` / `#RRGGBBAA` string.
    ///
    /// Hex digits are case-insensitive. Alpha defaults to 1.0.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidFormat`] if a string is not `#` followed by six or eight hex digits.
    /// Packed values never fail.
    pub fn hex<'a>(input: impl Into<HexInput<'a>>) -> ColorResult<Self> {
        match input.into() {
            HexInput::Packed(v) => Ok(Self::from_packed(v)),
            HexInput::Text(s) => parse_hex(s),
        }
    }

    /// Bits 23..16 are red, 15..8 green, 7..0 blue. Higher bits are ignored.
    pub fn from_packed(v: u32) -> Self {
        let channel = |shift: u32| f32::from(((v >> shift) & 0xff) as u8) / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Parses `rgb(R, G, B)` or `rgba(R, G, B, A)` with integer channels in `0..=255`,
    /// the form produced by [`Color::to_rgb_string`] for in-range colors.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidFormat`] on any other shape or an out-of-range channel.
    pub fn from_rgb_string(input: &str) -> ColorResult<Self> {
        parse_css(input)
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Self::from_packed(v)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            parse_hex(trimmed).map_err(|_| ColorError::invalid(s))
        } else {
            parse_css(s)
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
