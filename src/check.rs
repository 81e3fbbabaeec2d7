//! Brute-force look at which codes the mapper actually produces.
//!
//! Walks the RGB cube, prints a swatch per combination and then one swatch
//! per distinct code. Only meant to be run by hand.

use std::io::{self, BufWriter, Write};

use crossterm::{queue, style::Print};
use tracing::{debug, info, warn};

use crate::{AnsiCode, Color, ColorMode, Plane};

const SWATCH: char = '█';

/// Settings for a scan.
///
/// The default walks every one of the 256³ combinations in the 256-colour
/// palette on the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    pub plane: Plane,
    pub mode: ColorMode,
    /// Distance between visited values of each channel, `0` is treated as `1`.
    pub step: u8,
    /// Print a swatch for every visited combination, not only the summary.
    pub swatches: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            plane: Plane::Foreground,
            mode: ColorMode::Palette256,
            step: 1,
            swatches: true,
        }
    }
}

fn channel_values(step: u8) -> impl Iterator<Item = u8> + Clone {
    (0..=u8::MAX).step_by(step.max(1) as usize)
}

/// Run the default scan against stdout.
///
/// ### Warning
/// Visits 16.7M colours and writes a swatch for each, this takes a while.
pub fn color_ansi_check() {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if let Err(err) = ansi_check(&mut out, CheckOptions::default()) {
        warn!(%err, "ansi check aborted");
    }
}

/// Scan according to `opts`, writing swatches to `w`.
///
/// ## return
/// every distinct code seen, in the order first encountered
pub fn ansi_check<W: Write>(w: &mut W, opts: CheckOptions) -> io::Result<Vec<AnsiCode>> {
    debug!(?opts, "starting ansi check");
    let values = channel_values(opts.step);
    let mut seen: Vec<AnsiCode> = Vec::new();
    let mut visited = 0u64;

    for r in values.clone() {
        for g in values.clone() {
            for b in values.clone() {
                let code = Color::rgb(r, g, b).to_ansi_code(opts.plane, opts.mode);
                if opts.swatches {
                    queue!(w, Print(code.paint(SWATCH)))?;
                }
                if !seen.contains(&code) {
                    seen.push(code);
                }
                visited += 1;
            }
        }
    }

    for code in &seen {
        queue!(w, Print(code.paint(SWATCH)))?;
    }
    w.flush()?;

    info!(visited, distinct = seen.len(), "ansi check finished");
    Ok(seen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_after;

    fn coarse(step: u8) -> CheckOptions {
        CheckOptions {
            step,
            ..CheckOptions::default()
        }
    }

    #[test]
    fn test_channel_values() {
        let v: Vec<u8> = channel_values(51).collect();
        assert_eq!(v, vec![0, 51, 102, 153, 204, 255]);
        assert_eq!(channel_values(0).count(), 256);
        assert_eq!(channel_values(1).count(), 256);
        assert_eq!(channel_values(255).collect::<Vec<_>>(), vec![0, 255]);
    }

    #[test]
    fn test_every_cube_level_once() {
        let mut buf = Vec::new();
        let seen = ansi_check(&mut buf, coarse(51)).unwrap();

        assert_eq!(seen.len(), 216);
        assert_eq!(seen.first().unwrap().as_str(), "38;5;16");
        assert_eq!(seen.last().unwrap().as_str(), "38;5;231");

        let text = String::from_utf8(buf).unwrap();
        // one swatch per combination plus one per distinct code
        assert_eq!(text.matches(SWATCH).count(), 216 * 2);
        assert_eq!(text.matches(color_after()).count(), 216 * 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        // 0, 17, 34 all quantize to level 0
        let mut buf = Vec::new();
        let opts = CheckOptions {
            step: 17,
            swatches: false,
            ..CheckOptions::default()
        };
        let seen = ansi_check(&mut buf, opts).unwrap();
        assert_eq!(seen.len(), 216);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches(SWATCH).count(), 216);
    }

    #[test]
    fn test_background_truecolor() {
        let mut buf = Vec::new();
        let opts = CheckOptions {
            plane: Plane::Background,
            mode: ColorMode::TrueColor24,
            step: 128,
            swatches: false,
        };
        let seen = ansi_check(&mut buf, opts).unwrap();
        assert_eq!(seen.len(), 8);
        assert!(seen.iter().all(|c| c.as_str().starts_with("48;2;")));
        let purple = Color::rgb(128, 0, 128).to_ansi_code(Plane::Background, ColorMode::TrueColor24);
        assert!(seen.contains(&purple));
    }
}
