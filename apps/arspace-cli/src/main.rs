use std::path::PathBuf;

use anyhow::Context;
use arspace_common::{Orientation, TrackingMatrix, Units};
use arspace_convert::{anchor_position, model_matrix_from_tracking, to_render_matrix};
use arspace_display::{DimensionResolver, FixedDisplay};
use clap::{Args, Parser, Subcommand};
use glam::Mat4;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arspace-cli", about = "CLI tool for arspace coordinate adaptation")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Resolve the oriented screen extent
    Extent(DisplayArgs),
    /// Resolve the screen aspect ratio
    Aspect(DisplayArgs),
    /// Print the resolved extent for every orientation and unit system
    Table {
        /// JSON display profile
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },
    /// Model matrix from a tracking transform (16 floats, column-major)
    Model(MatrixArgs),
    /// Anchor position from a renderer matrix (16 floats, column-major)
    Anchor(MatrixArgs),
}

#[derive(Args)]
struct DisplayArgs {
    /// JSON display profile
    #[arg(short, long)]
    profile: Option<PathBuf>,
    /// Override the profile's orientation (e.g. landscape-left)
    #[arg(short, long)]
    orientation: Option<Orientation>,
    /// Use native pixels instead of logical points
    #[arg(short, long)]
    native: bool,
}

#[derive(Args)]
struct MatrixArgs {
    #[arg(num_args = 16, required = true, allow_negative_numbers = true)]
    values: Vec<f32>,
}

impl MatrixArgs {
    fn columns(&self) -> anyhow::Result<[f32; 16]> {
        <[f32; 16]>::try_from(self.values.as_slice())
            .with_context(|| format!("expected 16 values, got {}", self.values.len()))
    }
}

fn load_display(profile: Option<&PathBuf>) -> anyhow::Result<FixedDisplay> {
    match profile {
        Some(path) => FixedDisplay::from_json_file(path)
            .with_context(|| format!("loading display profile {}", path.display())),
        None => Ok(FixedDisplay::default()),
    }
}

impl DisplayArgs {
    fn display(&self) -> anyhow::Result<FixedDisplay> {
        let display = load_display(self.profile.as_ref())?;
        Ok(match self.orientation {
            Some(orientation) => display.with_orientation(orientation),
            None => display,
        })
    }

    fn units(&self) -> Units {
        Units::from_native(self.native)
    }
}

fn print_matrix(m: &Mat4) {
    for row in 0..4 {
        let r = m.row(row);
        println!("  [{:>9.4} {:>9.4} {:>9.4} {:>9.4}]", r.x, r.y, r.z, r.w);
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("arspace-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", arspace_common::crate_info());
            println!("convert: {}", arspace_convert::crate_info());
            println!("display: {}", arspace_display::crate_info());
        }
        Commands::Extent(args) => {
            let display = args.display()?;
            let resolver = DimensionResolver::new(&display, &display);
            let units = args.units();
            let extent = resolver.resolve(units);
            println!(
                "{} {units}: {} x {}",
                display.orientation, extent.width, extent.height
            );
        }
        Commands::Aspect(args) => {
            let display = args.display()?;
            let resolver = DimensionResolver::new(&display, &display);
            let units = args.units();
            let ratio = resolver.aspect_ratio(units)?;
            println!("{} {units}: {ratio:.4}", display.orientation);
        }
        Commands::Table { profile } => {
            let base = load_display(profile.as_ref())?;
            println!("{:<22} {:>20} {:>20}", "orientation", "native", "logical");
            for orientation in Orientation::ALL {
                let display = base.clone().with_orientation(orientation);
                let resolver = DimensionResolver::new(&display, &display);
                let native = resolver.resolve(Units::Native);
                let logical = resolver.resolve(Units::Logical);
                println!(
                    "{:<22} {:>20} {:>20}",
                    orientation.name(),
                    format!("{} x {}", native.width, native.height),
                    format!("{} x {}", logical.width, logical.height)
                );
            }
        }
        Commands::Model(args) => {
            let transform = TrackingMatrix::from_cols_array(&args.columns()?);
            let model = model_matrix_from_tracking(transform);
            println!("Tracking transform:");
            print_matrix(&to_render_matrix(transform));
            println!("Model matrix (Z flipped):");
            print_matrix(&model);
        }
        Commands::Anchor(args) => {
            let matrix = Mat4::from_cols_array(&args.columns()?);
            let p = anchor_position(&matrix);
            println!("Anchor position: ({}, {}, {})", p.x, p.y, p.z);
        }
    }

    Ok(())
}
