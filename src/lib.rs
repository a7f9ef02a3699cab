//! Yet Another RayCaster.
//!
//! A 2D world of rectangles and circles rendered Wolfenstein-style: a fan of
//! marched rays per frame, fisheye-corrected, stretched to one wall strip per
//! screen column, with a top-down minimap in the corner.
//!
//! ```text
//! InputIntents ─► sim::Player ─► engine::RayCaster ─► engine::Projection
//!                                                           │
//!                      renderer::Minimap ──► renderer::Renderer ─► submit
//! ```

pub mod app;
pub mod config;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod world;

pub use app::{App, Tick};
pub use config::{Config, ConfigError};
