use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use epaper_dither::{ColorScheme, DitherMode, MeasuredDisplay};
use inkmap::pipeline::{DitherJob, PaletteChoice};

#[derive(Parser)]
#[command(name = "inkmap")]
#[command(about = "Inkmap - dither images onto e-paper display palettes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG and write an indexed PNG
    Dither {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Built-in color scheme, by name or firmware value (e.g. "bwr", "3")
        #[arg(short, long, conflicts_with_all = ["display", "palette_file"])]
        scheme: Option<ColorScheme>,

        /// Built-in measured display preset (e.g. "spectra-7.3")
        #[arg(short, long, conflicts_with = "palette_file")]
        display: Option<MeasuredDisplay>,

        /// YAML file with named palette definitions
        #[arg(long, requires = "palette")]
        palette_file: Option<PathBuf>,

        /// Palette to use from --palette-file
        #[arg(short, long, requires = "palette_file")]
        palette: Option<String>,

        /// Dither mode, by name or firmware value
        #[arg(short, long, default_value = "burkes")]
        mode: DitherMode,

        /// Scan every row left to right instead of serpentine
        #[arg(long)]
        raster: bool,

        /// Compress image luminance into the palette's range (0.0 - 1.0)
        #[arg(short, long, default_value_t = 0.0)]
        tone_compression: f32,

        /// Stretch the palette's black..white onto BLACK,WHITE (e.g. "0,255")
        #[arg(long, value_parser = parse_range)]
        range: Option<(u8, u8)>,
    },
    /// List color schemes and measured display presets
    Schemes,
}

fn parse_range(s: &str) -> Result<(u8, u8), String> {
    let (black, white) = s
        .split_once(',')
        .ok_or_else(|| format!("expected BLACK,WHITE, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid level '{v}': {e}"))
    };
    Ok((parse(black)?, parse(white)?))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkmap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Dither {
            input,
            output,
            scheme,
            display,
            palette_file,
            palette,
            mode,
            raster,
            tone_compression,
            range,
        } => {
            let choice = match (scheme, display, palette_file, palette) {
                (Some(scheme), _, _, _) => PaletteChoice::Scheme(scheme),
                (_, Some(display), _, _) => PaletteChoice::Display(display),
                (_, _, Some(path), Some(name)) => PaletteChoice::File { path, name },
                _ => PaletteChoice::default(),
            };
            let job = DitherJob {
                palette: choice,
                mode,
                serpentine: !raster,
                tone_compression,
                range,
            };
            let result = job.run(&input, &output)?;
            println!(
                "Dithered {} ({}x{}, {} colors) -> {}",
                input.display(),
                result.width(),
                result.height(),
                result.palette().len(),
                output.display()
            );
            Ok(())
        }
        Commands::Schemes => {
            run_schemes_command();
            Ok(())
        }
    }
}

fn run_schemes_command() {
    println!("Color Schemes:");
    for scheme in ColorScheme::ALL {
        println!(
            "  {:>2}  {:<12} accent={:<7} {}",
            scheme.value(),
            scheme.name(),
            scheme.accent_name(),
            scheme.color_names().join(", ")
        );
    }

    println!("\nMeasured Displays:");
    for display in MeasuredDisplay::ALL {
        let palette = display.palette();
        let colors: Vec<String> = palette
            .entries()
            .map(|(name, color)| format!("{name}={color}"))
            .collect();
        println!(
            "  {:<12} {:<12} {}",
            display.name(),
            display.scheme().name(),
            colors.join(", ")
        );
    }

    println!("\nDither Modes:");
    for mode in DitherMode::ALL {
        println!("  {:>2}  {}", mode.value(), mode);
    }
}
