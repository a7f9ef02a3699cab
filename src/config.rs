//! Startup configuration.
//!
//! Every tunable lives here with the reference defaults. Values are fixed
//! for the lifetime of an [`App`](crate::app::App); the binaries only
//! override them from the command line before construction.

use glam::Vec2;

/// Invalid startup configuration.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("screen size {0}x{1} must be non-zero")]
    ZeroScreen(usize, usize),

    #[error("field of view {0}° must lie strictly between 0° and 180°")]
    BadFov(f32),

    #[error("ray resolution must be at least one pixel")]
    ZeroRayResolution,

    /// A length/speed that has to be a positive finite number.
    #[error("`{name}` must be positive and finite, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("turn rate {0}°/tick must be finite and non-negative")]
    BadTurnRate(f32),

    #[error("minimap of {size}px (+{margin}px margin) does not fit a {w}x{h} screen")]
    MinimapTooLarge {
        size: usize,
        margin: usize,
        w: usize,
        h: usize,
    },

    #[error("tick rate must be non-zero")]
    ZeroTickRate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub screen_w: usize,
    pub screen_h: usize,
    /// Horizontal field of view in degrees.
    pub fov_deg: f32,
    /// Pixel stride between cast rays.
    pub ray_resolution: usize,
    /// March step of a ray, world units.
    pub ray_step: f32,
    /// Wall height constant fed to the projection.
    pub wall_height: f32,
    /// World units per tick.
    pub player_speed: f32,
    /// Degrees per tick.
    pub turn_rate_deg: f32,
    /// Collision footprint (width, height) centred on the player.
    pub player_size: Vec2,
    pub minimap_size: usize,
    pub minimap_margin: usize,
    /// Ticks per second.
    pub tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_w: 480,
            screen_h: 360,
            fov_deg: 50.0,
            ray_resolution: 5,
            ray_step: 1.0,
            wall_height: 50.0,
            player_speed: 2.0,
            turn_rate_deg: 3.0,
            player_size: Vec2::new(16.0, 16.0),
            minimap_size: 100,
            minimap_margin: 10,
            tick_rate: 30,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_w == 0 || self.screen_h == 0 {
            return Err(ConfigError::ZeroScreen(self.screen_w, self.screen_h));
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ConfigError::BadFov(self.fov_deg));
        }
        if self.ray_resolution == 0 {
            return Err(ConfigError::ZeroRayResolution);
        }
        for (name, value) in [
            ("ray_step", self.ray_step),
            ("wall_height", self.wall_height),
            ("player_speed", self.player_speed),
            ("player_size.x", self.player_size.x),
            ("player_size.y", self.player_size.y),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if !(self.turn_rate_deg.is_finite() && self.turn_rate_deg >= 0.0) {
            return Err(ConfigError::BadTurnRate(self.turn_rate_deg));
        }
        let fits = self
            .minimap_size
            .checked_add(self.minimap_margin)
            .is_some_and(|needed| needed <= self.screen_w && needed <= self.screen_h);
        if self.minimap_size == 0 || !fits {
            return Err(ConfigError::MinimapTooLarge {
                size: self.minimap_size,
                margin: self.minimap_margin,
                w: self.screen_w,
                h: self.screen_h,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Distance from the eye to the projection plane, in pixels.
    ///
    /// ```text
    /// d = (w / 2) / tan(fov / 2)
    /// ```
    #[inline]
    pub fn projection_plane_distance(&self) -> f32 {
        (self.screen_w as f32 * 0.5) / (self.fov_deg * 0.5).to_radians().tan()
    }

    /// Rays cast per frame: one every `ray_resolution` columns.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.screen_w.div_ceil(self.ray_resolution)
    }

    /// Top-left pixel of the minimap overlay (top-right corner of the screen).
    #[inline]
    pub fn minimap_origin(&self) -> (usize, usize) {
        (
            self.screen_w
                .saturating_sub(self.minimap_size + self.minimap_margin),
            self.minimap_margin,
        )
    }
}
