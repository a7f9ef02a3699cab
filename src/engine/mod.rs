//! Raycasting pipeline: ray fan → corrected distances → wall columns.

mod projection;
mod raycast;

pub use projection::{
    FOG_PER_UNIT, MIN_DISTANCE, ProjectedColumn, Projection, fog_intensity, interpolate,
    sample_index,
};
pub use raycast::{Fan, HitKind, RayCaster, RayHit, RaySample, fisheye_correct};
