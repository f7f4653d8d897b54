pub mod camera;
pub mod core;
pub mod material;
pub mod pdf;
pub mod primitive;
pub mod renderer;
pub mod scenes;
pub mod texture;
