// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::camera::{CameraConfig, DEFAULT_MOVE_SPEED};

pub const DEFAULT_MODEL: &str = "teapot.glb";

#[derive(Parser, Debug, Clone)]
#[command(name = "free-look")]
#[command(about = "First-person free-look camera demo", long_about = None)]
pub struct Cli {
    /// Camera movement speed in world units per second
    #[arg(long, default_value_t = DEFAULT_MOVE_SPEED)]
    pub move_speed: f32,

    /// Initial window width
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Initial window height
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// glTF model drawn as a wireframe
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Directory searched when the model is not found relative to the
    /// working directory
    #[arg(long)]
    pub asset_dir: Option<PathBuf>,

    /// Hide the coordinate axes
    #[arg(long = "no-axes", default_value = "false")]
    pub no_axes: bool,
}

impl Cli {
    pub fn camera_config(&self) -> CameraConfig {
        CameraConfig {
            move_speed: self.move_speed,
            ..CameraConfig::default()
        }
    }

    /// The model to load and whether it was asked for explicitly
    pub fn model_path(&self) -> (PathBuf, bool) {
        match &self.model {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_MODEL), false),
        }
    }
}
