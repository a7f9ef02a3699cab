//! Built-in map layouts.
//!
//! Geometry is defined in code at startup; there is no map file format.

use std::str::FromStr;

use glam::Vec2;

use super::geometry::{Obstacle, World, WorldError};

/// Extent of the reference map, in world units.
pub const REFERENCE_SIZE: Vec2 = Vec2::new(480.0, 360.0);
/// Thickness of the boundary walls.
pub const BAR_SIZE: f32 = 10.0;

/// Named startup layouts selectable from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Boundary box plus a few interior blocks and a pillar.
    #[default]
    Reference,
    /// Boundary box only.
    Empty,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown layout `{0}` (expected `reference` or `empty`)")]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reference" => Ok(Layout::Reference),
            "empty" => Ok(Layout::Empty),
            _ => Err(UnknownLayout(s.to_owned())),
        }
    }
}

impl Layout {
    pub fn build(self) -> Result<World, WorldError> {
        match self {
            Layout::Reference => World::reference(),
            Layout::Empty => World::enclosure(REFERENCE_SIZE, BAR_SIZE),
        }
    }
}

impl World {
    /// Four boundary bars of thickness `bar` lining the inside of `size`.
    pub fn enclosure(size: Vec2, bar: f32) -> Result<World, WorldError> {
        World::new(size, boundary_bars(size, bar)?)
    }

    /// The 480×360 reference map.
    pub fn reference() -> Result<World, WorldError> {
        let mut obstacles = boundary_bars(REFERENCE_SIZE, BAR_SIZE)?;
        obstacles.extend([
            Obstacle::rect(100.0, 100.0, 50.0, 50.0)?,
            Obstacle::rect(200.0, 200.0, 100.0, 30.0)?,
            Obstacle::rect(300.0, 270.0, 80.0, 80.0)?,
            Obstacle::circle(400.0, 150.0, 25.0)?,
        ]);
        World::new(REFERENCE_SIZE, obstacles)
    }
}

/// top, bottom, left, right – in that order.
fn boundary_bars(size: Vec2, bar: f32) -> Result<Vec<Obstacle>, WorldError> {
    Ok(vec![
        Obstacle::rect(0.0, 0.0, size.x, bar)?,
        Obstacle::rect(0.0, size.y - bar, size.x, bar)?,
        Obstacle::rect(0.0, 0.0, bar, size.y)?,
        Obstacle::rect(size.x - bar, 0.0, bar, size.y)?,
    ])
}
