//! Rips Demo: Vietoris-Rips Complex of a Planar Point Cloud
//!
//! Builds the 2-skeleton Rips complex of either the clustered demo cloud
//! or a JSON point file, at a single radius or across a radius sweep.
//!
//! ## Protocol
//!
//! 1. Load configuration (defaults, then `--config`, then flags)
//! 2. Generate the seeded demo cloud, or read `--points`
//! 3. Compute edges and triangles at `--radius` (or every sweep radius)
//! 4. Report counts and Betti numbers as a table or JSON

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rips_skeleton::{
    compute_rips_complex, BettiCurve, BettiNumbers, DemoCloud, Point, RipsConfig,
};

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum OutputFormat {
    /// Pretty table output.
    #[default]
    Table,
    /// JSON output.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rips_demo")]
#[command(about = "Compute the 2-skeleton Vietoris-Rips complex of a planar point cloud")]
struct Args {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON file with an array of {"x": .., "y": ..} points (default: demo cloud).
    #[arg(short, long)]
    points: Option<PathBuf>,

    /// Ball radius.
    #[arg(short, long)]
    radius: Option<f64>,

    /// Random seed for the demo cloud.
    #[arg(long)]
    seed: Option<u64>,

    /// Sweep radii from min_radius to max_radius instead of one radius.
    #[arg(long)]
    sweep: bool,

    /// Number of sweep increments.
    #[arg(long)]
    steps: Option<usize>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let mut config = match &args.config {
        Some(path) => RipsConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RipsConfig::default(),
    };
    if let Some(radius) = args.radius {
        config.radius = radius;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(steps) = args.steps {
        config.sweep_steps = steps;
    }
    config.validate()?;

    let points = match &args.points {
        Some(path) => load_points(path)?,
        None => DemoCloud::seeded(&config.fixture, config.seed)?,
    };
    info!(n_points = points.len(), "point cloud ready");

    if args.sweep {
        let curve = BettiCurve::compute(&points, &config.sweep())?;
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
            OutputFormat::Table => print_curve(points.len(), &curve),
        }
    } else {
        let complex = compute_rips_complex(&points, config.radius)?;
        match args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&complex)?),
            OutputFormat::Table => {
                let betti = BettiNumbers::of(&complex);
                println!("═══════════════════════════════════════════════════════════════");
                println!("  Vietoris-Rips Complex");
                println!("═══════════════════════════════════════════════════════════════\n");
                println!("  Points    = {}", complex.n_points);
                println!("  Radius    = {:.4}", complex.radius);
                println!("  Edges     = {}", complex.n_edges());
                println!("  Triangles = {}", complex.n_triangles());
                println!(
                    "  β₀ = {}, β₁ = {}, β₂ = {}, χ = {}",
                    betti.beta_0,
                    betti.beta_1,
                    betti.beta_2,
                    betti.euler_characteristic()
                );
            }
        }
    }

    Ok(())
}

fn load_points(path: &Path) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading points {}", path.display()))?;
    let points: Vec<Point> = serde_json::from_str(&text)
        .with_context(|| format!("parsing points {}", path.display()))?;
    Ok(points)
}

fn print_curve(n_points: usize, curve: &BettiCurve) {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Radius Sweep ({} points)", n_points);
    println!("═══════════════════════════════════════════════════════════════\n");
    println!("  {:>10}  {:>5}  {:>5}  {:>5}  {:>5}", "radius", "β₀", "β₁", "β₂", "χ");
    println!("─────────────────────────────────────────────────────────────");
    for b in &curve.values {
        println!(
            "  {:>10.4}  {:>5}  {:>5}  {:>5}  {:>5}",
            b.radius,
            b.beta_0,
            b.beta_1,
            b.beta_2,
            b.euler_characteristic()
        );
    }
    println!("\n  Integrated β₁ = {:.4}", curve.integrated_beta_1());
}
