use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skillradar", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one animation frame as a PNG.
    Frame(FrameArgs),
    /// Render every animation frame as a numbered PNG sequence.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct ChartArgs {
    /// Chart config JSON. Uses the built-in portfolio chart when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the displayed width.
    #[arg(long)]
    width: Option<f64>,

    /// Override the displayed height.
    #[arg(long)]
    height: Option<f64>,

    /// Override the device pixel scale.
    #[arg(long)]
    scale: Option<f64>,

    /// Font file for skill labels (overrides the config).
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    chart: ChartArgs,

    /// Frame index (0-based). Indices past the end render the final frame.
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    chart: ChartArgs,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Pace frames at this rate instead of rendering back to back.
    #[arg(long)]
    fps: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_config(args: &ChartArgs) -> anyhow::Result<skillradar::ChartConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let mut cfg = skillradar::ChartConfig::from_path(path)
                .with_context(|| format!("load chart config '{}'", path.display()))?;
            // Font paths in a config file are relative to that file.
            if let Some(font) = cfg.font.take() {
                let dir = path.parent().unwrap_or_else(|| Path::new("."));
                cfg.font = Some(if font.is_relative() { dir.join(font) } else { font });
            }
            cfg
        }
        None => skillradar::ChartConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.width = w;
    }
    if let Some(h) = args.height {
        cfg.height = h;
    }
    if let Some(s) = args.scale {
        cfg.pixel_scale = s;
    }
    if let Some(font) = &args.font {
        cfg.font = Some(font.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Build a renderer for `cfg` and report the surface as fully visible.
fn visible_chart(
    cfg: &skillradar::ChartConfig,
) -> anyhow::Result<skillradar::RadarChartRenderer> {
    let surface = skillradar::Surface::new(cfg.display_size()?, cfg.pixel_scale)?;
    let font = match &cfg.font {
        Some(p) => Some(
            skillradar::LabelFont::from_path(p)
                .with_context(|| format!("load label font '{}'", p.display()))?,
        ),
        None => {
            if !cfg.skills.is_empty() {
                eprintln!(
                    "note: no label font configured (use --font); skill labels are not drawn"
                );
            }
            None
        }
    };

    let mut chart = skillradar::RadarChartRenderer::with_label_font(
        Some(surface),
        cfg.skills.clone(),
        cfg.style.clone(),
        font,
    );
    chart.on_visibility(1.0);
    Ok(chart)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.chart)?;
    let mut chart = visible_chart(&cfg)?;

    let mut drawn = 0u64;
    while drawn <= args.frame {
        let outcome = chart.tick()?;
        drawn += 1;
        if outcome != skillradar::TickOutcome::Continue {
            break;
        }
    }

    let surface = chart.surface().context("chart has no surface (bug)")?;
    surface
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.chart)?;
    let mut chart = visible_chart(&cfg)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let out_dir = args.out_dir.clone();
    let write_frame = |frame: skillradar::FrameIndex, surface: &skillradar::Surface| {
        surface.save_png(&out_dir.join(format!("frame_{:04}.png", frame.0)))
    };

    let frames = match args.fps {
        Some(fps) => {
            let fps = skillradar::Fps::new(fps, 1)?;
            chart.run_to_completion(&mut skillradar::FixedRateScheduler::new(fps), write_frame)?
        }
        None => chart.run_to_completion(&mut skillradar::ImmediateScheduler, write_frame)?,
    };

    eprintln!("wrote {frames} frames to {}", args.out_dir.display());
    Ok(())
}
