pub mod assets;
pub mod camera;
pub mod cli;
pub mod core;
pub mod input;
pub mod loaders;
pub mod renderer;
pub mod scene;
pub mod traits;
pub mod types;

pub use camera::{CameraConfig, CameraState};
pub use input::{InputSample, MovementKeys};
