use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use glyphcamo::{
    Animator, CamoConfig, GifSink, GifSinkOpts, PaletteChoice, RgbFrame, extract,
};

#[derive(Parser, Debug)]
#[command(name = "glyphcamo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a camouflaged animated GIF from a glyph PNG.
    Render(RenderArgs),
    /// Write a PNG showing the word, contour and background zones of a glyph.
    Zones(ZonesArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Glyph raster: light text on a black background.
    #[arg(long)]
    glyph: PathBuf,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Optional JSON config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames.
    #[arg(long)]
    frames: Option<u32>,

    /// Contour band width in pixels (even).
    #[arg(long)]
    edge: Option<u32>,

    /// Fraction of noise pixels re-rolled per frame.
    #[arg(long)]
    mutation: Option<f64>,

    /// Largest per-axis drift per frame.
    #[arg(long)]
    smoothness: Option<i64>,

    #[arg(long, value_enum)]
    palette: Option<PaletteArg>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Frame display time in milliseconds.
    #[arg(long, default_value_t = 50)]
    delay_ms: u32,

    /// Black rows added above every frame.
    #[arg(long, default_value_t = 0)]
    top_margin: u32,
}

#[derive(Parser, Debug)]
struct ZonesArgs {
    /// Glyph raster: light text on a black background.
    #[arg(long)]
    glyph: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Contour band width in pixels (even).
    #[arg(long, default_value_t = 4)]
    edge: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PaletteArg {
    Paired,
    Set3,
    Grayscale,
}

impl From<PaletteArg> for PaletteChoice {
    fn from(p: PaletteArg) -> Self {
        match p {
            PaletteArg::Paired => PaletteChoice::Paired,
            PaletteArg::Set3 => PaletteChoice::Set3,
            PaletteArg::Grayscale => PaletteChoice::Grayscale,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Zones(args) => cmd_zones(args),
    }
}

fn read_glyph(path: &Path) -> anyhow::Result<RgbFrame> {
    let img = image::open(path)
        .with_context(|| format!("open glyph '{}'", path.display()))?
        .to_rgb8();
    Ok(RgbFrame::from_image(img))
}

fn resolve_config(args: &RenderArgs) -> anyhow::Result<CamoConfig> {
    let mut cfg = match &args.config {
        Some(path) => CamoConfig::from_path(path)?,
        None => CamoConfig::default(),
    };
    if let Some(v) = args.frames {
        cfg.frame_count = v;
    }
    if let Some(v) = args.edge {
        cfg.edge_width = v;
    }
    if let Some(v) = args.mutation {
        cfg.mutation_coefficient = v;
    }
    if let Some(v) = args.smoothness {
        cfg.shift_smoothness = v;
    }
    if let Some(v) = args.palette {
        cfg.palette = v.into();
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args)?;
    let glyph = read_glyph(&args.glyph)?;
    let palette = cfg.palette.build();

    let anim = Animator::new(&glyph, cfg.params(), cfg.rng(), palette.as_ref())?;
    let mut sink = GifSink::new(
        &args.out,
        GifSinkOpts {
            frame_delay_ms: args.delay_ms,
            top_margin: args.top_margin,
            overwrite: true,
        },
    );
    let n = anim.render_to_sink(&mut sink)?;

    eprintln!("wrote {} ({n} frames)", args.out.display());
    Ok(())
}

fn cmd_zones(args: ZonesArgs) -> anyhow::Result<()> {
    let glyph = read_glyph(&args.glyph)?;
    let zones = extract(&glyph, args.edge)?;

    let mut out = RgbFrame::black(glyph.width, glyph.height);
    let (h, w) = glyph.dims();
    for r in 0..h {
        for c in 0..w {
            if zones.word[(r, c)] {
                out.set_pixel(r, c, [255, 255, 255]);
            } else if zones.contour[(r, c)] {
                out.set_pixel(r, c, [128, 128, 128]);
            }
        }
    }

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    out.into_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    let b = zones.bbox;
    println!(
        "bbox rows {}..={} cols {}..={}",
        b.x_min, b.x_max, b.y_min, b.y_max
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
