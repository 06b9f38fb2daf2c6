use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// A color as configured by the embedding application.
///
/// Alpha is carried through so overlays like the scrim can be blended onto
/// whatever the host has already painted. Cells themselves are opaque [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Oklch { l: f32, c: f32, h: f32, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(170, 170, 170);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub const fn hex(value: u32) -> Self {
        Self::Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    /// Same color with its opacity replaced.
    pub fn alpha(self, a: f32) -> Self {
        match self {
            Self::Rgb { r, g, b } | Self::Rgba { r, g, b, .. } => Self::Rgba { r, g, b, a },
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a },
        }
    }

    pub fn opacity(&self) -> f32 {
        match self {
            Self::Rgb { .. } => 1.0,
            Self::Rgba { a, .. } | Self::Oklch { a, .. } => a.clamp(0.0, 1.0),
        }
    }

    /// The opaque color, ignoring alpha.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } | Self::Rgba { r, g, b, .. } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(l, c, h),
        }
    }

    /// Blend this color over an opaque base using its opacity.
    pub fn composite(&self, base: Rgb) -> Rgb {
        let a = self.opacity();
        if a >= 1.0 {
            return self.to_rgb();
        }
        let top = self.to_rgb();
        let mix = |over: u8, under: u8| -> u8 {
            (over as f32 * a + under as f32 * (1.0 - a)).round() as u8
        };
        Rgb::new(mix(top.r, base.r), mix(top.g, base.g), mix(top.b, base.b))
    }

    pub fn to_dsl(&self) -> String {
        match self {
            Self::Rgb { r, g, b } => format!("rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
            Self::Oklch { l, c, h, a } => {
                if *a >= 1.0 {
                    format!("oklch({l}, {c}, {h})")
                } else {
                    format!("oklch({l}, {c}, {h}, {a})")
                }
            }
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(digits) = input.strip_prefix('#') {
            return parse_hex(input, digits);
        }

        let (name, args) = input
            .strip_suffix(')')
            .and_then(|rest| rest.split_once('('))
            .ok_or_else(|| ColorParseError::Unrecognized(input.to_string()))?;
        let args: Vec<&str> = args.split(',').map(str::trim).collect();

        match name.trim() {
            "rgb" => {
                expect_arity(input, &args, &[3])?;
                Ok(Color::rgb(
                    channel(input, args[0])?,
                    channel(input, args[1])?,
                    channel(input, args[2])?,
                ))
            }
            "rgba" => {
                expect_arity(input, &args, &[4])?;
                Ok(Color::rgba(
                    channel(input, args[0])?,
                    channel(input, args[1])?,
                    channel(input, args[2])?,
                    float(input, args[3])?,
                ))
            }
            "oklch" => {
                expect_arity(input, &args, &[3, 4])?;
                let a = match args.get(3) {
                    Some(a) => float(input, a)?,
                    None => 1.0,
                };
                Ok(Color::oklcha(
                    float(input, args[0])?,
                    float(input, args[1])?,
                    float(input, args[2])?,
                    a,
                ))
            }
            _ => Err(ColorParseError::Unrecognized(input.to_string())),
        }
    }
}

fn parse_hex(input: &str, digits: &str) -> Result<Color, ColorParseError> {
    let byte = |i: usize| {
        digits
            .get(i..i + 2)
            .filter(|pair| pair.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| ColorParseError::component(input, digits))
    };
    match digits.len() {
        6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color::rgba(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)? as f32 / 255.0,
        )),
        _ => Err(ColorParseError::Unrecognized(input.to_string())),
    }
}

fn expect_arity(input: &str, args: &[&str], allowed: &[usize]) -> Result<(), ColorParseError> {
    if allowed.contains(&args.len()) {
        Ok(())
    } else {
        Err(ColorParseError::Arity {
            input: input.to_string(),
            expected: allowed.iter().map(usize::to_string).collect::<Vec<_>>().join(" or "),
            found: args.len(),
        })
    }
}

fn channel(input: &str, value: &str) -> Result<u8, ColorParseError> {
    value
        .parse()
        .map_err(|_| ColorParseError::component(input, value))
}

fn float(input: &str, value: &str) -> Result<f32, ColorParseError> {
    value
        .parse()
        .map_err(|_| ColorParseError::component(input, value))
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_dsl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_what_it_prints() {
        for color in [
            Color::rgb(12, 34, 56),
            Color::rgba(0, 0, 0, 0.1),
            Color::oklch(0.7, 0.1, 250.0),
            Color::oklcha(0.5, 0.2, 30.0, 0.5),
        ] {
            assert_eq!(color.to_dsl().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn parses_hex() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
        let translucent: Color = "#00000080".parse().unwrap();
        assert!((translucent.opacity() - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("".parse::<Color>(), Err(ColorParseError::Empty)));
        assert!(matches!(
            "hsl(1, 2, 3)".parse::<Color>(),
            Err(ColorParseError::Unrecognized(_))
        ));
        assert!(matches!(
            "rgb(1, 2)".parse::<Color>(),
            Err(ColorParseError::Arity { found: 2, .. })
        ));
        assert!(matches!(
            "rgb(1, 2, 300)".parse::<Color>(),
            Err(ColorParseError::Component { .. })
        ));
        assert!(matches!(
            "#12345z".parse::<Color>(),
            Err(ColorParseError::Component { .. })
        ));
        assert!(matches!(
            "#+1+2+3".parse::<Color>(),
            Err(ColorParseError::Component { .. })
        ));
    }

    #[test]
    fn composite_blends_by_opacity() {
        let base = Rgb::new(200, 200, 200);
        assert_eq!(Color::BLACK.composite(base), Rgb::new(0, 0, 0));
        assert_eq!(Color::BLACK.alpha(0.5).composite(base), Rgb::new(100, 100, 100));
        assert_eq!(Color::BLACK.alpha(0.0).composite(base), base);
    }
}
