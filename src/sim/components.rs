use bitflags::bitflags;
use glam::Vec2;

use crate::world::heading_vector;

/// Player position and facing.
///
/// `heading` is in degrees, 0 = east, counter-clockwise positive on screen,
/// kept in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub pos: Vec2,
    pub heading: f32,
}

impl PlayerPose {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            heading: heading.rem_euclid(360.0),
        }
    }

    /// Unit vector the player is facing.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_vector(self.heading)
    }

    /// Rotate by `delta_deg` (positive = turn left).
    #[inline]
    pub fn turn(&mut self, delta_deg: f32) {
        self.heading = (self.heading + delta_deg).rem_euclid(360.0);
    }
}

bitflags! {
    /// Discrete intents sampled once per tick by the platform layer.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct InputIntents: u8 {
        const FORWARD    = 0x01;
        const BACKWARD   = 0x02;
        const TURN_LEFT  = 0x04;
        const TURN_RIGHT = 0x08;
        const QUIT       = 0x10;
    }
}

impl InputIntents {
    /// -1, 0 or +1 along the facing direction.
    #[inline]
    pub fn thrust(self) -> f32 {
        let mut t = 0.0;
        if self.contains(Self::FORWARD) {
            t += 1.0;
        }
        if self.contains(Self::BACKWARD) {
            t -= 1.0;
        }
        t
    }

    /// -1, 0 or +1; positive = left.
    #[inline]
    pub fn turn(self) -> f32 {
        let mut t = 0.0;
        if self.contains(Self::TURN_LEFT) {
            t += 1.0;
        }
        if self.contains(Self::TURN_RIGHT) {
            t -= 1.0;
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_wraps() {
        let mut pose = PlayerPose::new(Vec2::ZERO, -3.0);
        assert!((pose.heading - 357.0).abs() < 1e-4);
        pose.turn(6.0);
        assert!((pose.heading - 3.0).abs() < 1e-4);
    }

    #[test]
    fn opposing_intents_cancel() {
        let both = InputIntents::FORWARD | InputIntents::BACKWARD;
        assert_eq!(both.thrust(), 0.0);
        assert_eq!(InputIntents::BACKWARD.thrust(), -1.0);

        let spin = InputIntents::TURN_LEFT | InputIntents::TURN_RIGHT;
        assert_eq!(spin.turn(), 0.0);
        assert_eq!(InputIntents::TURN_LEFT.turn(), 1.0);
        assert_eq!(InputIntents::empty().turn(), 0.0);
    }
}
