use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use cube_viewpoints_lib::config::{AppConfig, Variant, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Three clickable cubes with an orbit camera
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// What clicking a cube does
    #[arg(long, value_enum, default_value_t = VariantArg::Look)]
    variant: VariantArg,

    /// Window width in logical pixels
    #[arg(
        long,
        default_value_t = WINDOW_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    width: u32,

    /// Window height in logical pixels
    #[arg(
        long,
        default_value_t = WINDOW_HEIGHT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    height: u32,

    /// Scene description JSON file (defaults to the built-in scene)
    #[arg(long)]
    scene: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VariantArg {
    /// Move the camera to the clicked cube's viewpoint
    Look,
    /// Toggle the clicked cube's manipulation gizmo
    Edit,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Look => Variant::LookAt,
            VariantArg::Edit => Variant::Edit,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig {
        variant: cli.variant.into(),
        width: cli.width,
        height: cli.height,
        scene_path: cli.scene,
    };
    cube_viewpoints_lib::run(config).context("failed to load scene")
}
