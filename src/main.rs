use clap::{Parser, ValueEnum};
use log::LevelFilter;
use memmap2::Mmap;
use simple_logger::SimpleLogger;
use std::fs::{self, File};
use std::path::Path;
use std::path::PathBuf;

use lsbsteg::{engine, raster, BinaryFrame, ImageFrame, TextFrame};

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Any file, behind a 64-bit length
    Binary,
    /// UTF-8 text, behind a 16-bit length
    Text,
    /// An image, stored as RGB behind its 16-bit width and height
    Image,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
enum Args {
    /// Hide a payload in the low bits of a carrier image
    #[command(name = "hide")]
    Hide {
        /// The original image
        #[arg(long)]
        image: PathBuf,

        /// The file to hide in the image
        #[arg(long, visible_alias = "binary")]
        payload: PathBuf,

        /// The resulting steganographic image; must be a lossless format such as PNG
        #[arg(long)]
        steg_out: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Kind::Binary)]
        kind: Kind,

        #[arg(short, long)]
        verbose: bool,
    },

    /// Recover a payload hidden with `hide`
    #[command(name = "reveal")]
    Reveal {
        /// The steganographic image
        #[arg(long)]
        steg_image: PathBuf,

        /// Where to write the recovered payload
        #[arg(short, long)]
        out: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Kind::Binary)]
        kind: Kind,

        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let verbose = match args {
        Args::Hide { verbose, .. } | Args::Reveal { verbose, .. } => verbose,
    };

    SimpleLogger::new()
        .with_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .init()?;

    match args {
        Args::Hide {
            image,
            payload,
            steg_out,
            kind,
            ..
        } => {
            hide(&image, &payload, &steg_out, kind)?;
        }
        Args::Reveal {
            steg_image,
            out,
            kind,
            ..
        } => {
            reveal(&steg_image, &out, kind)?;
        }
    }

    println!("Ok");

    Ok(())
}

fn hide(
    image: &Path,
    payload: &Path,
    steg_out: &Path,
    kind: Kind,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut carrier = raster::load(image)?;

    log::info!(
        "Carrier is {}x{} with {} channels, {} bits in total",
        carrier.width(),
        carrier.height(),
        carrier.channels(),
        engine::capacity_bits(&carrier)
    );

    match kind {
        Kind::Binary => {
            let payload_file = File::open(payload)?;
            let payload_map = unsafe { Mmap::map(&payload_file)? };

            engine::hide::<BinaryFrame>(&mut carrier, &payload_map[..])?;
        }
        Kind::Text => {
            let text = fs::read_to_string(payload)?;

            engine::hide::<TextFrame>(&mut carrier, text.as_str())?;
        }
        Kind::Image => {
            let secret = raster::load_rgb(payload)?;

            engine::hide::<ImageFrame>(&mut carrier, &secret)?;
        }
    }

    // Only reached when the whole frame went in; a partly written carrier is never saved
    raster::save(&carrier, steg_out)?;

    Ok(())
}

fn reveal(steg_image: &Path, out: &Path, kind: Kind) -> Result<(), Box<dyn std::error::Error>> {
    let carrier = raster::load(steg_image)?;

    match kind {
        Kind::Binary => fs::write(out, engine::reveal::<BinaryFrame>(&carrier)?)?,
        Kind::Text => fs::write(out, engine::reveal::<TextFrame>(&carrier)?)?,
        Kind::Image => raster::save(&engine::reveal::<ImageFrame>(&carrier)?, out)?,
    }

    log::info!("Wrote {}", out.display());

    Ok(())
}
