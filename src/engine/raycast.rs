//! Fixed-step ray marcher and the per-frame ray fan.
//!
//! A ray walks from the eye in `step`-sized increments and stops at the
//! first point that lands inside an obstacle (first-hit, not globally
//! nearest) or outside the world rectangle. The world edge counts as an
//! implicit wall, so a map without boundary obstacles still terminates.

use glam::Vec2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    sim::{PlayerPose, point_hit_index},
    world::{World, heading_vector},
};

/// Why the march stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Landed inside the obstacle with this index.
    Obstacle(usize),
    /// Left `[0, w) × [0, h)`.
    OutOfBounds,
    /// Ran into the step cap (only reachable with a broken origin).
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec2,
    pub steps: u32,
    pub kind: HitKind,
}

/// One sampled column of the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySample {
    /// Absolute ray angle, degrees.
    pub angle: f32,
    pub raw_distance: f32,
    /// Distance projected onto the view axis.
    pub corrected_distance: f32,
}

pub struct RayCaster<'w> {
    world: &'w World,
    step: f32,
    max_steps: u32,
}

impl<'w> RayCaster<'w> {
    /// `step` must be positive; `Config::validate` guarantees it for the app.
    pub fn new(world: &'w World, step: f32) -> Self {
        // a ray starting inside the world leaves it within one diagonal
        let diagonal = world.width().hypot(world.height());
        let max_steps = ((diagonal / step).ceil() as u32).saturating_add(2);
        Self {
            world,
            step,
            max_steps,
        }
    }

    #[inline]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    /// March from `origin` towards `angle_deg` until something stops the ray.
    pub fn cast(&self, origin: Vec2, angle_deg: f32) -> RayHit {
        let dir = heading_vector(angle_deg) * self.step;
        let mut point = origin;

        for k in 1..=self.max_steps {
            point = origin + dir * k as f32;

            if let Some(idx) = point_hit_index(self.world, point) {
                return RayHit {
                    point,
                    steps: k,
                    kind: HitKind::Obstacle(idx),
                };
            }
            if !self.world.in_bounds(point) {
                return RayHit {
                    point,
                    steps: k,
                    kind: HitKind::OutOfBounds,
                };
            }
        }

        log::warn!(
            "ray from ({:.1}, {:.1}) at {:.1}° exhausted {} steps",
            origin.x,
            origin.y,
            angle_deg,
            self.max_steps
        );
        RayHit {
            point,
            steps: self.max_steps,
            kind: HitKind::Exhausted,
        }
    }

    /// Cast one ray and measure it from the pose's point of view.
    pub fn sample(&self, pose: PlayerPose, angle_deg: f32) -> RaySample {
        let hit = self.cast(pose.pos, angle_deg);
        let raw_distance = hit.point.distance(pose.pos);
        RaySample {
            angle: angle_deg,
            raw_distance,
            corrected_distance: fisheye_correct(raw_distance, pose.heading, angle_deg),
        }
    }

    /// Cast the whole fan for one frame into `out` (cleared first).
    ///
    /// `pose` is taken by value so every ray sees the same snapshot.
    pub fn sweep_into(&self, pose: PlayerPose, fan: &Fan, out: &mut Vec<RaySample>) {
        out.clear();

        #[cfg(feature = "parallel")]
        {
            (0..fan.count())
                .into_par_iter()
                .map(|i| self.sample(pose, fan.angle(pose.heading, i)))
                .collect_into_vec(out);
        }

        #[cfg(not(feature = "parallel"))]
        out.extend((0..fan.count()).map(|i| self.sample(pose, fan.angle(pose.heading, i))));
    }

    pub fn sweep(&self, pose: PlayerPose, fan: &Fan) -> Vec<RaySample> {
        let mut out = Vec::with_capacity(fan.count());
        self.sweep_into(pose, fan, &mut out);
        out
    }
}

/// Layout of the ray fan across the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fan {
    pub fov_deg: f32,
    pub screen_w: usize,
    /// Columns between two consecutive rays.
    pub ray_resolution: usize,
}

impl Fan {
    /// Rays per frame: columns `0, r, 2r, … < screen_w`.
    #[inline]
    pub fn count(&self) -> usize {
        self.screen_w.div_ceil(self.ray_resolution.max(1))
    }

    /// Angle of the `sample`-th ray.
    ///
    /// ```text
    /// angle = heading + fov/2 − column · fov / screen_w
    /// ```
    #[inline]
    pub fn angle(&self, heading: f32, sample: usize) -> f32 {
        let column = (sample * self.ray_resolution) as f32;
        heading + self.fov_deg * 0.5 - column * self.fov_deg / self.screen_w as f32
    }
}

/// Project a radial distance onto the view axis.
#[inline]
pub fn fisheye_correct(raw_distance: f32, heading_deg: f32, angle_deg: f32) -> f32 {
    raw_distance * (heading_deg - angle_deg).to_radians().cos()
}

/*──────────────────────────────── Tests ───────────────────────────────*/
