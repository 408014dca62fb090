use std::fmt;
use std::str::FromStr;

use cubepuzzle::Face;
use serde::{Deserialize, Serialize};

use crate::PrefsError;

/// 24-bit RGB color, written as `#rrggbb`.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub rgb: [u8; 3],
}
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}
impl FromStr for Rgb {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PrefsError::InvalidColor(s.to_owned());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16);
        match (channel(0), channel(1), channel(2)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Rgb { rgb: [r, g, b] }),
            _ => Err(invalid()),
        }
    }
}
impl TryFrom<String> for Rgb {
    type Error = PrefsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}
impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: [r, g, b] }
    }
}

/// Facelet color for each face of the cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorPreferences {
    pub u: Rgb,
    pub d: Rgb,
    pub f: Rgb,
    pub b: Rgb,
    pub l: Rgb,
    pub r: Rgb,
}
impl Default for ColorPreferences {
    fn default() -> Self {
        Self {
            u: Rgb::new(0xff, 0xff, 0xff),
            d: Rgb::new(0xff, 0xeb, 0x3b),
            f: Rgb::new(0x4c, 0xaf, 0x50),
            b: Rgb::new(0x21, 0x96, 0xf3),
            l: Rgb::new(0xff, 0x98, 0x00),
            r: Rgb::new(0xf4, 0x43, 0x36),
        }
    }
}
impl ColorPreferences {
    /// Returns the color of the facelets that start on `face`.
    pub fn get(&self, face: Face) -> Rgb {
        match face {
            Face::U => self.u,
            Face::D => self.d,
            Face::F => self.f,
            Face::B => self.b,
            Face::L => self.l,
            Face::R => self.r,
        }
    }
}
