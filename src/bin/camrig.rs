use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use camrig::{DVec3, ShotConfig, ShotManifest, SubjectProbe, SummaryVisitor};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "camrig", version)]
struct Cli {
    /// Log planning details (debug level) instead of warnings only.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a shot and write its manifest JSON.
    Plan(PlanArgs),
    /// Compose a shot and print a human-readable setup report.
    Summary(ShotArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SubjectArgs {
    /// Image subject, as pixel dimensions `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_image_dims)]
    image: Option<(f64, f64)>,

    /// Mesh subject, as bounding box `x0,y0,z0,x1,y1,z1`.
    #[arg(long, value_parser = parse_bbox, allow_hyphen_values = true)]
    bbox: Option<(DVec3, DVec3)>,

    /// Subject probe JSON file.
    #[arg(long)]
    probe: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ShotArgs {
    #[command(flatten)]
    subject: SubjectArgs,

    /// Shot config JSON (missing fields take defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the lighting style.
    #[arg(long)]
    lighting: Option<String>,

    /// Override the animation length in frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Spin the model instead of orbiting the camera.
    #[arg(long)]
    rotate_model: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    shot: ShotArgs,

    /// Output manifest path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Summary(args) => cmd_summary(args),
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let manifest = compose_from_args(&args.shot)?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create manifest '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            manifest.write_json(&mut w)?;
            w.flush()
                .with_context(|| format!("write manifest '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            manifest.write_json(&mut lock)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

fn cmd_summary(args: ShotArgs) -> anyhow::Result<()> {
    let manifest = compose_from_args(&args)?;
    let mut v = SummaryVisitor::new();
    manifest.accept(&mut v);
    print!("{}", v.finish());
    Ok(())
}

fn compose_from_args(args: &ShotArgs) -> anyhow::Result<ShotManifest> {
    let probe = load_probe(&args.subject)?;
    let mut config = match &args.config {
        Some(path) => ShotConfig::from_path(path)?,
        None => ShotConfig::default(),
    };
    if let Some(style) = &args.lighting {
        config.lighting_style = style.clone();
    }
    if let Some(frames) = args.frames {
        config.frame_count = frames;
    }
    if args.rotate_model {
        config.rotate_model = true;
    }
    Ok(camrig::compose(&probe, &config)?)
}

fn load_probe(args: &SubjectArgs) -> anyhow::Result<SubjectProbe> {
    if let Some((w, h)) = args.image {
        return Ok(SubjectProbe::image(w, h));
    }
    if let Some((min, max)) = args.bbox {
        return Ok(SubjectProbe::mesh(min, max));
    }
    let path = args
        .probe
        .as_ref()
        .context("one of --image, --bbox or --probe is required")?;
    let f = File::open(path).with_context(|| format!("open probe '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse probe JSON '{}'", path.display()))
}

fn parse_image_dims(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<f64>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<f64>().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn parse_bbox(s: &str) -> Result<(DVec3, DVec3), String> {
    let v = s
        .split(',')
        .map(|p| p.trim().parse::<f64>().map_err(|e| format!("'{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    let &[x0, y0, z0, x1, y1, z1] = v.as_slice() else {
        return Err(format!("expected 6 comma-separated numbers, got {}", v.len()));
    };
    Ok((DVec3::new(x0, y0, z0), DVec3::new(x1, y1, z1)))
}
