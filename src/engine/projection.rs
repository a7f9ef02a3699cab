use super::raycast::RaySample;
use crate::config::Config;

/// Smallest distance fed into the wall-height division.
pub const MIN_DISTANCE: f32 = 1e-3;
/// Grey levels lost per world unit of distance.
pub const FOG_PER_UNIT: f32 = 0.5;

/// One screen column of wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedColumn {
    pub screen_x: usize,
    pub top: f32,
    pub bottom: f32,
    /// Grey level, 0 = black.
    pub intensity: u8,
}

/// Distance → wall-strip mapping for a fixed screen and FOV.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    screen_w: usize,
    half_h: f32,
    wall_height: f32,
    plane_distance: f32,
    ray_resolution: usize,
}

impl Projection {
    pub fn new(cfg: &Config) -> Self {
        Self {
            screen_w: cfg.screen_w,
            half_h: cfg.screen_h as f32 * 0.5,
            wall_height: cfg.wall_height,
            plane_distance: cfg.projection_plane_distance(),
            ray_resolution: cfg.ray_resolution,
        }
    }

    #[inline]
    pub fn plane_distance(&self) -> f32 {
        self.plane_distance
    }

    /// On-screen wall height for a corrected distance.
    ///
    /// ```text
    /// h = wall_height / max(d, ε) · plane_distance
    /// ```
    #[inline]
    pub fn wall_height(&self, distance: f32) -> f32 {
        self.wall_height / distance.max(MIN_DISTANCE) * self.plane_distance
    }

    /// Wall strip for column `screen_x`, centred on the horizon.
    pub fn column(&self, screen_x: usize, distance: f32) -> ProjectedColumn {
        let h = self.wall_height(distance);
        ProjectedColumn {
            screen_x,
            top: self.half_h - h * 0.5,
            bottom: self.half_h + h * 0.5,
            intensity: fog_intensity(distance),
        }
    }

    /// Stretch the sparse fan to one strip per screen column (into `out`).
    pub fn project_into(&self, samples: &[RaySample], out: &mut Vec<ProjectedColumn>) {
        out.clear();
        out.extend(
            interpolate(samples, self.ray_resolution, self.screen_w)
                .enumerate()
                .map(|(x, s)| self.column(x, s.corrected_distance)),
        );
    }

    pub fn project(&self, samples: &[RaySample]) -> Vec<ProjectedColumn> {
        let mut out = Vec::with_capacity(self.screen_w);
        self.project_into(samples, &mut out);
        out
    }
}

/// Nearest-neighbour source sample for column `x`.
///
/// Plain `x / ray_resolution`, clamped to the last sample; no blending,
/// so groups of `ray_resolution` columns share one value.
#[inline]
pub fn sample_index(x: usize, ray_resolution: usize, len: usize) -> usize {
    (x / ray_resolution.max(1)).min(len.saturating_sub(1))
}

/// Expand sparse values to `width` entries by nearest neighbour.
///
/// Yields nothing when `values` is empty.
pub fn interpolate<T: Copy>(
    values: &[T],
    ray_resolution: usize,
    width: usize,
) -> impl Iterator<Item = T> + '_ {
    let width = if values.is_empty() { 0 } else { width };
    (0..width).map(move |x| values[sample_index(x, ray_resolution, values.len())])
}

/// Linear distance fog: nearer walls are brighter.
#[inline]
pub fn fog_intensity(distance: f32) -> u8 {
    (255.0 - (distance * FOG_PER_UNIT).trunc()).clamp(0.0, 255.0) as u8
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
