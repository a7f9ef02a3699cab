//! Top-down overlay of the world.
//!
//! World coordinates are scaled independently on each axis so the whole
//! world fits a `size × size` square. Circles scale their radius by the
//! X factor only.

use glam::Vec2;

use crate::{
    renderer::{BLACK, FrameBuffer, Rgba, rgb},
    sim::PlayerPose,
    world::{Obstacle, World},
};

pub const OBSTACLE_COLOUR: Rgba = rgb(128, 128, 128);
pub const PLAYER_COLOUR: Rgba = rgb(255, 0, 0);
/// Radius of the player dot, in minimap pixels.
pub const PLAYER_DOT: i32 = 2;

pub struct Minimap {
    size: usize,
    image: FrameBuffer,
}

impl Minimap {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            image: FrameBuffer::new(size, size),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pixels per world unit on each axis.
    #[inline]
    pub fn scale(&self, world: &World) -> Vec2 {
        Vec2::splat(self.size as f32) / world.bounds()
    }

    /// World point → minimap pixel space (unrounded).
    #[inline]
    pub fn to_minimap(&self, world: &World, p: Vec2) -> Vec2 {
        p * self.scale(world)
    }

    /// Last image produced by [`Minimap::draw`].
    #[inline]
    pub fn image(&self) -> &FrameBuffer {
        &self.image
    }

    /// Redraw the overlay for this frame and return it.
    pub fn draw(&mut self, world: &World, pose: &PlayerPose) -> &FrameBuffer {
        let s = self.scale(world);
        self.image.clear(BLACK);

        for obstacle in world.obstacles() {
            match obstacle {
                Obstacle::Rect(r) => {
                    let pos = r.pos * s;
                    let size = r.size * s;
                    self.image.fill_rect(
                        pos.x as i32,
                        pos.y as i32,
                        size.x as i32,
                        size.y as i32,
                        OBSTACLE_COLOUR,
                    );
                }
                Obstacle::Circle(c) => {
                    let center = c.center * s;
                    self.image.fill_circle(
                        center.x as i32,
                        center.y as i32,
                        (c.radius * s.x) as i32,
                        OBSTACLE_COLOUR,
                    );
                }
            }
        }

        let p = pose.pos * s;
        self.image
            .fill_circle(p.x as i32, p.y as i32, PLAYER_DOT, PLAYER_COLOUR);

        &self.image
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Layout, REFERENCE_SIZE};

    #[test]
    fn corners_map_to_corners() {
        let w = World::new(REFERENCE_SIZE, Vec::new()).unwrap();
        let m = Minimap::new(100);
        assert_eq!(m.to_minimap(&w, Vec2::ZERO), Vec2::ZERO);
        let far = m.to_minimap(&w, REFERENCE_SIZE);
        assert!((far - Vec2::splat(100.0)).length() < 1e-4);
        let mid = m.to_minimap(&w, Vec2::new(240.0, 180.0));
        assert!((mid - Vec2::splat(50.0)).length() < 1e-4);
    }

    #[test]
    fn draws_obstacles_and_player() {
        let w = Layout::Reference.build().unwrap();
        let mut m = Minimap::new(100);
        let pose = PlayerPose::new(Vec2::new(240.0, 180.0), 0.0);
        let img = m.draw(&w, &pose);

        // boundary bars: 10 units → 2 px on X, ~2.8 px on Y
        assert_eq!(img.get(0, 50), Some(OBSTACLE_COLOUR));
        assert_eq!(img.get(50, 0), Some(OBSTACLE_COLOUR));
        assert_eq!(img.get(98, 50), Some(OBSTACLE_COLOUR));
        // 50×50 block at (100,100)
        assert_eq!(img.get(25, 33), Some(OBSTACLE_COLOUR));
        // pillar at (400,150) r=25
        assert_eq!(img.get(83, 41), Some(OBSTACLE_COLOUR));
        // player dot at the centre, black floor above it
        assert_eq!(img.get(50, 50), Some(PLAYER_COLOUR));
        assert_eq!(img.get(52, 50), Some(PLAYER_COLOUR));
        assert_eq!(img.get(50, 45), Some(BLACK));
    }

    #[test]
    fn oversized_pillar_fills_the_map() {
        let pillar = Obstacle::circle(240.0, 180.0, 300_000.0).unwrap();
        let w = World::new(REFERENCE_SIZE, vec![pillar]).unwrap();
        let mut m = Minimap::new(100);
        let img = m.draw(&w, &PlayerPose::new(Vec2::new(240.0, 180.0), 0.0));
        assert_eq!(img.get(0, 0), Some(OBSTACLE_COLOUR));
        assert_eq!(img.get(99, 99), Some(OBSTACLE_COLOUR));
        assert_eq!(img.get(50, 50), Some(PLAYER_COLOUR));
    }

    #[test]
    fn redraw_follows_player() {
        let w = World::new(REFERENCE_SIZE, Vec::new()).unwrap();
        let mut m = Minimap::new(100);
        m.draw(&w, &PlayerPose::new(Vec2::new(48.0, 36.0), 0.0));
        assert_eq!(m.image().get(10, 10), Some(PLAYER_COLOUR));
        m.draw(&w, &PlayerPose::new(Vec2::new(432.0, 324.0), 0.0));
        assert_eq!(m.image().get(10, 10), Some(BLACK));
        assert_eq!(m.image().get(90, 90), Some(PLAYER_COLOUR));
    }
}
