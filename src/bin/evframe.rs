use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render event-camera recordings as one image per trigger timestamp.
///
/// Reads `<BASE_DIR>/image_offsets.txt` and the event container in `<BASE_DIR>/events/`, and
/// writes `<BASE_DIR>/images/events/frame_<index>.jpg`.
#[derive(Parser, Debug)]
#[command(name = "evframe", version)]
struct Cli {
    /// Sequence directory.
    base_dir: PathBuf,

    /// Frame width in pixels.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=65535))]
    width: u32,

    /// Frame height in pixels.
    #[arg(value_parser = clap::value_parser!(u32).range(1..=65535))]
    height: u32,

    /// Output image format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Jpeg)]
    format: FormatChoice,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,

    /// Rotate frames by 180 degrees (sensor mounted upside down).
    #[arg(long, default_value_t = false)]
    rotate_180: bool,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Write a JSON run report (per-frame windows, event counts, raster digests, failures).
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpeg,
    Png,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let canvas = evframe::Canvas::new(cli.width, cli.height)?;
    let layout = evframe::DatasetLayout::from_base(&cli.base_dir);

    let dataset = evframe::Dataset::load(&layout)
        .with_context(|| format!("load sequence '{}'", cli.base_dir.display()))?;

    let opts = evframe::RunOpts {
        parallel: cli.parallel,
        threads: cli.threads,
        orientation: if cli.rotate_180 {
            evframe::Orientation::Rotate180
        } else {
            evframe::Orientation::Identity
        },
    };
    let session = evframe::BinningSession::from_dataset(dataset, canvas, opts)?;

    let mut sink = evframe::ImageDirSink::new(evframe::ImageDirSinkOpts {
        out_dir: layout.output_dir.clone(),
        format: match cli.format {
            FormatChoice::Jpeg => evframe::ImageFormatChoice::Jpeg,
            FormatChoice::Png => evframe::ImageFormatChoice::Png,
        },
        jpeg_quality: cli.quality,
    });

    let report = session
        .run(&mut sink)
        .with_context(|| format!("render frames into '{}'", layout.output_dir.display()))?;

    if let Some(path) = &cli.report {
        report
            .write_json(path)
            .with_context(|| format!("write report '{}'", path.display()))?;
    }

    eprintln!(
        "wrote {}/{} frames to {}",
        report.frames_written,
        report.frames_total,
        layout.output_dir.display()
    );
    for f in report.failures() {
        eprintln!(
            "  frame {} failed: {}",
            f.index.0,
            f.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}
