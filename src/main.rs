use clap::Parser;
use img2svg::{render, PixelBuffer, TraceStats, VectorDocument, VectorizeConfig, VectorizeError};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "img2svg", about = "Raster image to flat SVG shapes")]
struct Cli {
    /// Input images (PNG, JPEG, BMP, GIF, WebP)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory (defaults to each input's directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON preset with vectorization parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the shape list as <name>.json
    #[arg(long)]
    json: bool,

    /// Merge fills closer than this RGB distance (0 = off; 20 is a good start)
    #[arg(long)]
    merge: Option<f64>,

    /// Render the result and report raster IoU against the source
    #[arg(long)]
    compare: bool,

    /// Channel quantization step
    #[arg(long)]
    quantize_step: Option<u8>,

    /// RGB distance below which a pixel counts as background
    #[arg(long)]
    background_distance: Option<f64>,

    /// Bounding-box coverage above which a component becomes a rectangle
    #[arg(long)]
    rect_coverage: Option<f64>,
}

/// Per-input outcome, collected so reports print in input order.
struct Report {
    input: PathBuf,
    svg_path: PathBuf,
    width: u32,
    height: u32,
    load_ms: u128,
    stats: TraceStats,
    document: VectorDocument,
    iou: Option<render::RasterReport>,
    elapsed_ms: u128,
}

fn output_path(cli: &Cli, input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "out".into());
    let dir = match &cli.output {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{stem}{suffix}"))
}

/// First pair of inputs that would write the same SVG file.
fn colliding_outputs(cli: &Cli) -> Option<(&Path, &Path, PathBuf)> {
    let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
    for input in &cli.inputs {
        let svg_path = output_path(cli, input, ".svg");
        if let Some(&first) = seen.get(&svg_path) {
            return Some((first, input.as_path(), svg_path));
        }
        seen.insert(svg_path, input.as_path());
    }
    None
}

fn convert(cli: &Cli, input: &Path, config: &VectorizeConfig) -> Result<Report, VectorizeError> {
    let t_start = Instant::now();
    let img = img2svg::load_rgba(input)?;
    let buffer = PixelBuffer::from_image(&img)?;
    let load_ms = t_start.elapsed().as_millis();
    let (document, stats) = img2svg::vectorize_with_stats(&buffer, config)?;

    let svg_path = output_path(cli, input, ".svg");
    img2svg::output::svg::write_svg(&document, &svg_path)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| VectorizeError::Encode(e.to_string()))?;
        std::fs::write(output_path(cli, input, ".json"), json)?;
    }

    let iou = if cli.compare {
        render::save_png(&document, &output_path(cli, input, "_render.png"))?;
        Some(render::raster_compare(&document, &buffer, config)?)
    } else {
        None
    };

    Ok(Report {
        input: input.to_path_buf(),
        svg_path,
        width: buffer.width(),
        height: buffer.height(),
        load_ms,
        stats,
        document,
        iou,
        elapsed_ms: t_start.elapsed().as_millis(),
    })
}

fn load_config(cli: &Cli) -> Result<VectorizeConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => VectorizeConfig::default(),
    };
    if let Some(tol) = cli.merge {
        config.merge_tolerance = tol;
    }
    if let Some(step) = cli.quantize_step {
        config.quantize_step = step;
    }
    if let Some(d) = cli.background_distance {
        config.background_distance = d;
    }
    if let Some(c) = cli.rect_coverage {
        config.rect_coverage = c;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    if let Some((first, second, svg_path)) = colliding_outputs(&cli) {
        return Err(format!(
            "{} and {} would both write {}",
            first.display(),
            second.display(),
            svg_path.display()
        )
        .into());
    }

    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir)?;
    }

    eprintln!();
    eprintln!("  img2svg \u{00b7} {} input(s)", cli.inputs.len());
    eprintln!();

    // Inputs are independent; convert them in parallel, report in order.
    let results: Vec<Result<Report, VectorizeError>> = cli
        .inputs
        .par_iter()
        .map(|input| convert(&cli, input, &config))
        .collect();

    let mut failures = 0;
    for (input, result) in cli.inputs.iter().zip(results) {
        match result {
            Ok(report) => {
                let (rects, polygons) = report.document.shape_counts();
                let stats = &report.stats;
                eprintln!(
                    "  Load        {}  {}x{} px  ({}ms)",
                    report.input.display(),
                    report.width,
                    report.height,
                    report.load_ms,
                );
                eprintln!(
                    "  Classify    background {} \u{00b7} {} color groups  ({}ms)",
                    stats.background.key(),
                    stats.groups,
                    stats.classify_ms,
                );
                eprintln!(
                    "  Shapes      {} rect + {} polygon  ({}ms)",
                    stats.rects, stats.polygons, stats.shapes_ms,
                );
                eprintln!(
                    "  Result      {} shapes ({} rect, {} polygon)  ({}ms)",
                    report.document.shapes.len(),
                    rects,
                    polygons,
                    report.elapsed_ms,
                );
                if let Some(r) = report.iou {
                    eprintln!(
                        "  Raster IoU  {:.1}%  (overlap={} rendered={} source={})",
                        r.iou * 100.0,
                        r.overlap_px,
                        r.rendered_px,
                        r.source_px,
                    );
                }
                eprintln!("  \u{2713} {}", report.svg_path.display());
            }
            Err(e) => {
                failures += 1;
                eprintln!("  \u{2717} {}: {}", input.display(), e);
            }
        }
        eprintln!();
    }

    if failures > 0 {
        return Err(format!("{failures} of {} input(s) failed", cli.inputs.len()).into());
    }
    Ok(())
}
