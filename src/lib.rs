use std::{fmt, sync::LazyLock};

pub mod check;
pub mod colour;
pub use check::{CheckOptions, ansi_check, color_ansi_check};
pub use colour::{Color, ColorError, ColorMode, Plane};

use tracing::debug;

const TERM_BEFORE: &str = "\x1b[";
const TERM_AFTER: &str = "m";
const TERM_RESET: &str = "\x1b[0;00m";

/// GopherBlue `#01ADD8`
pub static GOPHER_BLUE: LazyLock<AnsiCode> = LazyLock::new(|| brand(Color::GOPHER_BLUE));
/// Same as [`GOPHER_BLUE`]
pub static INFO_COLOR: LazyLock<AnsiCode> = LazyLock::new(|| GOPHER_BLUE.clone());
/// Aqua `#00A29C`
pub static AQUA: LazyLock<AnsiCode> = LazyLock::new(|| brand(Color::AQUA));
/// Shade of light blue `#D5EFF6`
pub static DEBUG_COLOR: LazyLock<AnsiCode> = LazyLock::new(|| brand(Color::LIGHT_BLUE));
/// Fuchsia `#CE3062`
pub static ERROR_COLOR: LazyLock<AnsiCode> = LazyLock::new(|| brand(Color::FUCHSIA));
/// Yellow `#FDDD00`
pub static WARN_COLOR: LazyLock<AnsiCode> = LazyLock::new(|| brand(Color::YELLOW));

fn brand(c: Color) -> AnsiCode {
    c.to_ansi_code(Plane::Foreground, ColorMode::TrueColor24)
}

/// SGR parameters selecting one colour, e.g. `38;5;38` or `48;2;0;173;216`.
///
/// The empty code means "no colour". It is what malformed input turns into,
/// and wrapping it still yields a harmless `\x1b[m`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AnsiCode(String);

impl AnsiCode {
    /// The "no colour" code.
    pub const fn none() -> Self {
        Self(String::new())
    }

    pub(crate) fn from_params(params: String) -> Self {
        Self(params)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Wrap a single value so that displaying it emits start, value and reset.
    pub fn paint<T: fmt::Display>(&self, value: T) -> Painted<'_, T> {
        Painted { code: self, value }
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<[u8]> for AnsiCode {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// A value displayed between a colour start and the reset sequence.
#[derive(Debug, Clone, Copy)]
pub struct Painted<'a, T> {
    code: &'a AnsiCode,
    value: T,
}

impl<T: fmt::Display> fmt::Display for Painted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TERM_BEFORE}{}{TERM_AFTER}{}{TERM_RESET}", self.code, self.value)
    }
}

/// ANSI code for raw RGB bytes.
///
/// Truecolor reads the first 3 components and ignores any extra ones.
///
/// ## return
/// the empty code if `rgb` holds fewer than 3 components, or in palette
/// mode anything other than exactly 3
pub fn get_color(rgb: &[u8], plane: Plane, mode: ColorMode) -> AnsiCode {
    let components = match mode {
        ColorMode::TrueColor24 => rgb.get(..3).unwrap_or(rgb),
        ColorMode::Palette256 => rgb,
    };
    match Color::try_from(components) {
        Ok(c) => c.to_ansi_code(plane, mode),
        Err(err) => {
            debug!(%err, "no colour for rgb input");
            AnsiCode::none()
        }
    }
}

/// ANSI code for a `#RRGGBB` or `RRGGBB` string.
///
/// ## return
/// the empty code if the string has the wrong length or is not hex,
/// use [`Color::from_hex`] to find out why
pub fn get_color_from_hex(hex: &str, plane: Plane, mode: ColorMode) -> AnsiCode {
    match Color::from_hex(hex) {
        Ok(c) => c.to_ansi_code(plane, mode),
        Err(err) => {
            debug!(%err, input = hex, "no colour for hex input");
            AnsiCode::none()
        }
    }
}

/// Start of a coloured section. Can be paired with [`color_after`] by hand
/// for more control than [`color`] gives.
pub fn color_before(code: &AnsiCode) -> String {
    format!("{TERM_BEFORE}{code}{TERM_AFTER}")
}

/// The reset that ends a coloured section. Independent of the colour used.
pub const fn color_after() -> &'static str {
    TERM_RESET
}

/// Surround `payload` with the start of `code` and the reset.
///
/// Each payload item stays its own fragment, in order, so the result can be
/// printed with `concat()` or handed item by item to a writer.
pub fn color<I>(code: &AnsiCode, payload: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let payload = payload.into_iter();
    let mut out = Vec::with_capacity(payload.size_hint().0 + 2);
    out.push(color_before(code));
    out.extend(payload.map(|p| p.to_string()));
    out.push(color_after().to_owned());
    out
}
