pub mod camera;
pub mod config;
pub mod constants;
pub mod event;
pub mod scene;
pub mod sink;
pub mod tracker;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use event::*;
pub use scene::*;
pub use sink::*;
pub use tracker::*;
