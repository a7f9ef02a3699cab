mod geometry;
mod level;

pub use geometry::{Circle, Obstacle, Rect, World, WorldError, heading_vector};

pub use level::{BAR_SIZE, Layout, REFERENCE_SIZE, UnknownLayout};
