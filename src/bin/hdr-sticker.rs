use std::path::PathBuf;
use std::process;

use clap::Parser;

use hdr_sticker::{RenderOptions, StickerEngine};

#[derive(Parser)]
#[command(
    name = "hdr-sticker",
    about = "Tone-map HDR-intent highlight overlays into SDR chat stickers",
    version,
    after_help = "The overlay's alpha channel marks the region to brighten; everything \
                  else in the base image is darkened. The ICC profile is embedded \
                  verbatim into the output PNG."
)]
struct Cli {
    /// SDR base image
    base_image: PathBuf,

    /// HDR-intent overlay image (alpha marks the highlight region)
    overlay_image: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Highlight brightness boost in linear light (suggested 2.0-4.0)
    #[arg(long, default_value_t = 2.5)]
    hdr_boost: f32,

    /// Background darkening factor (suggested 0.5-0.7)
    #[arg(long, default_value_t = 0.6)]
    sdr_darken: f32,

    /// ICC profile to embed into the output PNG
    #[arg(long, default_value = "rec2100pq-experimental.icc")]
    icc_profile: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let options = RenderOptions {
        hdr_boost: cli.hdr_boost,
        sdr_darken: cli.sdr_darken,
        ..RenderOptions::default()
    };

    // Factor validation happens before any file is touched.
    let engine = match StickerEngine::new(options) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match engine.render_file(&cli.base_image, &cli.overlay_image, &cli.icc_profile, &cli.output) {
        Ok(summary) => {
            println!(
                "Saved {} ({}x{})",
                summary.output.display(),
                summary.width,
                summary.height
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
