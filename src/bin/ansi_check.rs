use std::io::{self, BufWriter};

use ansi_hue::{CheckOptions, ColorMode, Plane, ansi_check};
use clap::Parser;

/// Print a swatch for every RGB combination and then every distinct ANSI code it maps to.
#[derive(Debug, Parser)]
#[command(name = "ansi-check", version)]
struct Cli {
    /// Colour the background instead of the text
    #[arg(long)]
    background: bool,

    /// Emit 24-bit codes instead of 256-colour palette indices
    #[arg(long)]
    true_color: bool,

    /// Only visit every Nth value of each channel
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    step: u8,

    /// Skip the per-combination swatches and print only the distinct codes
    #[arg(long)]
    summary_only: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> CheckOptions {
        CheckOptions {
            plane: if self.background {
                Plane::Background
            } else {
                Plane::Foreground
            },
            mode: if self.true_color {
                ColorMode::TrueColor24
            } else {
                ColorMode::Palette256
            },
            step: self.step,
            swatches: !self.summary_only,
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    ansi_check(&mut out, cli.options())?;
    Ok(())
}
