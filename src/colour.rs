use std::{fmt, str::FromStr};

use thiserror::Error;

/// Which encoding a colour is emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Index into the 6×6×6 cube of the 256-colour palette (`38;5;n`).
    #[default]
    Palette256,
    /// Direct 24-bit RGB (`38;2;r;g;b`).
    TrueColor24,
}

/// Whether a colour applies to the text or to the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Plane {
    #[default]
    Foreground,
    Background,
}

impl Plane {
    /// The leading SGR parameter for extended colours on this plane.
    pub const fn sgr_prefix(self) -> u8 {
        match self {
            Plane::Foreground => 38,
            Plane::Background => 48,
        }
    }
}

/// Reasons a colour could not be built from raw input.
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("hex colour must be 6 digits with an optional leading '#', got {0} bytes")]
    InvalidLength(usize),

    #[error("invalid hex digits: {0}")]
    InvalidDigits(#[from] hex::FromHexError),

    #[error("expected 3 colour components, got {0}")]
    WrongComponentCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// RGB triple, always stored in truecolor space.
    pub rgb: (u8, u8, u8),
}

impl Color {
    // Predefined colours from the Go brand book, with the channel values that
    // have always been emitted for them rather than the book's hex.

    /// Brand book `#00ADD8`, emitted with red 1.
    pub const GOPHER_BLUE: Self = Self::rgb(0x01, 0xAD, 0xD8);
    pub const AQUA: Self = Self::rgb(0x00, 0xA2, 0x9C);
    /// Shade of light blue.
    pub const LIGHT_BLUE: Self = Self::rgb(0xD5, 0xEF, 0xF6);
    /// Brand book `#CE3262`, emitted with green 48.
    pub const FUCHSIA: Self = Self::rgb(0xCE, 0x30, 0x62);
    pub const YELLOW: Self = Self::rgb(0xFD, 0xDD, 0x00);

    /// Create from RGB.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { rgb: (r, g, b) }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    ///
    /// A 7 byte input has its first character dropped whatever it is, so
    /// `"x00ADD8"` parses the same as `"#00ADD8"`.
    ///
    /// ## Error
    /// if the input is not 6 or 7 bytes long, or the digits are not hex
    pub fn from_hex(raw: &str) -> Result<Self, ColorError> {
        let digits = match raw.len() {
            7 => raw.get(1..).ok_or(ColorError::InvalidLength(raw.len()))?,
            6 => raw,
            len => return Err(ColorError::InvalidLength(len)),
        };
        let mut buf = [0u8; 3];
        hex::decode_to_slice(digits, &mut buf)?;
        Ok(Self::rgb(buf[0], buf[1], buf[2]))
    }

    /// Quantize a single channel onto the six levels of the colour cube.
    ///
    /// Truncating division, so only 255 itself reaches level 5.
    pub const fn cube_level(channel: u8) -> u8 {
        ((channel as u16 * 5) / 255) as u8
    }

    /// Convert self to its ANSI-256 index inside the colour cube.
    ///
    /// ## return
    /// an index in `16..=231`; the 16 base colours and the grey ramp are never chosen.
    pub const fn as_ansi256(self) -> u8 {
        let (r, g, b) = self.rgb;
        16 + 36 * Self::cube_level(r) + 6 * Self::cube_level(g) + Self::cube_level(b)
    }

    /// Build the SGR parameters selecting this colour.
    pub fn to_ansi_code(self, plane: Plane, mode: ColorMode) -> crate::AnsiCode {
        let prefix = plane.sgr_prefix();
        let params = match mode {
            ColorMode::Palette256 => format!("{prefix};5;{}", self.as_ansi256()),
            ColorMode::TrueColor24 => {
                let (r, g, b) = self.rgb;
                format!("{prefix};2;{r};{g};{b}")
            }
        };
        crate::AnsiCode::from_params(params)
    }

    /// The same colour as crossterm understands it, quantized when `mode` asks for it.
    pub const fn to_crossterm(self, mode: ColorMode) -> crossterm::style::Color {
        match mode {
            ColorMode::Palette256 => crossterm::style::Color::AnsiValue(self.as_ansi256()),
            ColorMode::TrueColor24 => {
                let (r, g, b) = self.rgb;
                crossterm::style::Color::Rgb { r, g, b }
            }
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl TryFrom<&[u8]> for Color {
    type Error = ColorError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        match *raw {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            _ => Err(ColorError::WrongComponentCount(raw.len())),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}
