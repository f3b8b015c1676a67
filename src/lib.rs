pub mod ai;
pub mod assets;
pub mod camera;
pub mod collision;
pub mod config;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod input;
pub mod pickup;
pub mod tilemap;
pub mod world;

pub use error::{LoadError, Result};
