use glam::Vec2;

use super::collision::rect_intersects_any;
use super::components::{InputIntents, PlayerPose};
use crate::config::Config;
use crate::world::{Rect, World};

/// What one `update` did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub pose: PlayerPose,
    /// A non-zero move was requested and refused by the collision test.
    pub blocked: bool,
}

/// Movement controller: sole owner of the player pose.
#[derive(Debug, Clone)]
pub struct Player {
    pose: PlayerPose,
    footprint: Vec2,
    speed: f32,
    turn_rate: f32,
}

impl Player {
    pub fn new(pose: PlayerPose, cfg: &Config) -> Self {
        Self {
            pose,
            footprint: cfg.player_size,
            speed: cfg.player_speed,
            turn_rate: cfg.turn_rate_deg,
        }
    }

    /// Spawn at the world centre, facing east.
    pub fn spawn(world: &World, cfg: &Config) -> Self {
        Self::new(PlayerPose::new(world.center(), 0.0), cfg)
    }

    #[inline]
    pub fn pose(&self) -> PlayerPose {
        self.pose
    }

    /// Collision rectangle if the player stood at `pos`.
    #[inline]
    pub fn footprint_at(&self, pos: Vec2) -> Rect {
        Rect::centered(pos, self.footprint)
    }

    /// Advance one tick.
    ///
    /// Translation uses the heading from the start of the tick and is
    /// all-or-nothing; rotation is applied afterwards whether or not the
    /// move went through.
    pub fn update(&mut self, world: &World, intents: InputIntents) -> MoveResult {
        /* 1. translate */
        let wish = self.pose.forward() * intents.thrust();
        let mut blocked = false;
        if wish.length_squared() > 0.0 {
            let target = self.pose.pos + wish.normalize() * self.speed;
            if rect_intersects_any(world, &self.footprint_at(target)) {
                log::debug!(
                    "move to ({:.1}, {:.1}) blocked",
                    target.x,
                    target.y
                );
                blocked = true;
            } else {
                self.pose.pos = target;
            }
        }

        /* 2. rotate, unconditionally */
        let turn = intents.turn();
        if turn != 0.0 {
            self.pose.turn(turn * self.turn_rate);
        }

        MoveResult {
            pose: self.pose,
            blocked,
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
