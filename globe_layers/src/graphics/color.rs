/// RGBA color and CSS color string parsing.
///
/// Graphic options take colors as CSS strings; they are converted once
/// when the options are resolved, never at draw time.

use crate::error::{Error, Result};

/// Linear RGBA color, each component in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const YELLOW: Color = Color { r: 1.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const TRANSPARENT: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Build an opaque color from 8-bit channels
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Build a color from 8-bit channels including alpha
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Channels as 8-bit values (rounded)
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Parse a CSS color string
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`,
    /// `hsl()`, `hsla()` and the common CSS color keywords.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOptions` if the string is not a recognised color.
    pub fn from_css(css: &str) -> Result<Color> {
        let text = css.trim().to_ascii_lowercase();
        let parsed = if let Some(hex) = text.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = function_args(&text, &["rgba", "rgb"]) {
            parse_rgb(args)
        } else if let Some(args) = function_args(&text, &["hsla", "hsl"]) {
            parse_hsl(args)
        } else {
            named_color(&text)
        };
        parsed.ok_or_else(|| Error::InvalidOptions(format!("unrecognised CSS color '{}'", css)))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

fn function_args<'a>(text: &'a str, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        text.strip_prefix(name)?
            .trim_start()
            .strip_prefix('(')?
            .strip_suffix(')')
    })
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Split `a, b, c / d` or `a b c d` into components
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Finite number (`nan` and `inf` are rejected)
fn number(text: &str) -> Option<f32> {
    text.parse::<f32>().ok().filter(|v| v.is_finite())
}

fn parse_alpha(part: Option<&&str>) -> Option<f32> {
    let Some(value) = part else {
        return Some(1.0);
    };
    let alpha = match value.strip_suffix('%') {
        Some(pct) => number(pct)? / 100.0,
        None => number(value)?,
    };
    Some(alpha.clamp(0.0, 1.0))
}

fn parse_rgb(args: &str) -> Option<Color> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |value: &str| -> Option<f32> {
        let v = match value.strip_suffix('%') {
            Some(pct) => number(pct)? / 100.0,
            None => number(value)? / 255.0,
        };
        Some(v.clamp(0.0, 1.0))
    };
    Some(Color {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
        a: parse_alpha(parts.get(3))?,
    })
}

fn parse_hsl(args: &str) -> Option<Color> {
    let parts = split_args(args);
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let hue = number(parts[0].trim_end_matches("deg"))?.rem_euclid(360.0) / 360.0;
    let percent = |value: &str| -> Option<f32> { number(value.strip_suffix('%')?).map(|v| (v / 100.0).clamp(0.0, 1.0)) };
    let saturation = percent(parts[1])?;
    let lightness = percent(parts[2])?;
    let alpha = parse_alpha(parts.get(3))?;

    if saturation == 0.0 {
        return Some(Color { r: lightness, g: lightness, b: lightness, a: alpha });
    }
    let m2 = if lightness <= 0.5 {
        lightness * (saturation + 1.0)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;
    Some(Color {
        r: hue_to_rgb(m1, m2, hue + 1.0 / 3.0),
        g: hue_to_rgb(m1, m2, hue),
        b: hue_to_rgb(m1, m2, hue - 1.0 / 3.0),
        a: alpha,
    })
}

fn hue_to_rgb(m1: f32, m2: f32, h: f32) -> f32 {
    let h = h.rem_euclid(1.0);
    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "transparent" => Color::TRANSPARENT,
        "black" => Color::rgb8(0, 0, 0),
        "white" => Color::rgb8(255, 255, 255),
        "red" => Color::rgb8(255, 0, 0),
        "lime" => Color::rgb8(0, 255, 0),
        "green" => Color::rgb8(0, 128, 0),
        "blue" => Color::rgb8(0, 0, 255),
        "yellow" => Color::rgb8(255, 255, 0),
        "cyan" | "aqua" => Color::rgb8(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb8(255, 0, 255),
        "gray" | "grey" => Color::rgb8(128, 128, 128),
        "silver" => Color::rgb8(192, 192, 192),
        "maroon" => Color::rgb8(128, 0, 0),
        "olive" => Color::rgb8(128, 128, 0),
        "navy" => Color::rgb8(0, 0, 128),
        "teal" => Color::rgb8(0, 128, 128),
        "purple" => Color::rgb8(128, 0, 128),
        "orange" => Color::rgb8(255, 165, 0),
        "pink" => Color::rgb8(255, 192, 203),
        "brown" => Color::rgb8(165, 42, 42),
        "gold" => Color::rgb8(255, 215, 0),
        "skyblue" => Color::rgb8(135, 206, 235),
        "steelblue" => Color::rgb8(70, 130, 180),
        "tomato" => Color::rgb8(255, 99, 71),
        "crimson" => Color::rgb8(220, 20, 60),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
