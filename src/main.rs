//! sector-grid - Print the neighbor grid for a scene file
//!
//! Usage:
//!   sector-grid scenes/survey_line.yaml
//!   sector-grid scenes/survey_line.yaml --grid-size 7
//!
//! Enable per-candidate decisions with:
//!   RUST_LOG=trace sector-grid scenes/survey_line.yaml

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use sector_grid::core::PointId;
use sector_grid::io::Scene;
use sector_grid::slotting::map_to_grid;
use sector_grid::{GridSize, Result, SectorGridConfig, select_in_region};

/// Slot the neighbors of a focal point into a compass-ordered grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene file (YAML)
    scene: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: PathBuf,

    /// Grid dimension (3, 5 or 7); overrides config and scene
    #[arg(short, long, value_parser = parse_grid_size)]
    grid_size: Option<GridSize>,
}

fn parse_grid_size(value: &str) -> std::result::Result<GridSize, String> {
    let n: u8 = value.parse().map_err(|e| format!("{}", e))?;
    GridSize::try_from(n).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = if args.config.exists() {
        SectorGridConfig::load(&args.config)?
    } else {
        warn!("Config {} not found, using defaults", args.config.display());
        SectorGridConfig::default()
    };

    let scene = Scene::load(&args.scene)?;
    if let Some(size) = args.grid_size.or(scene.grid_size) {
        config.slotting.grid_size = size;
    }
    let slotter = config.to_slotter()?;

    info!(
        "Loaded {} candidates from {}",
        scene.candidates.len(),
        args.scene.display()
    );

    let focal = scene.focal_point()?;

    let assignment = slotter.assign(&focal, &scene.candidates)?;
    let grid = map_to_grid(focal.id, &assignment.slots)?;

    println!("Neighbors of {} ({}):", focal.id, slotter.grid_size());
    print!("{}", grid);

    if !assignment.dropped.is_empty() {
        println!("Dropped: {}", join_ids(&assignment.dropped));
    }
    if !assignment.degenerate.is_empty() {
        println!(
            "Skipped (coincident or non-finite): {}",
            join_ids(&assignment.degenerate)
        );
    }

    if let Some(region) = scene.selection_region()? {
        let selected = select_in_region(&region, &scene.candidates);
        println!("Selected {}: {}", selected.len(), join_ids(&selected));
    }

    Ok(())
}

fn join_ids(ids: &[PointId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
