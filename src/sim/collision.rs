//! Static collision queries shared by player movement and ray marching.
//!
//! Two deliberately different rules:
//! * **movement** (`rect_intersects_any`) – open rectangle overlap, and a
//!   circle only blocks when the mover's *centre* is strictly inside it;
//! * **ray points** (`point_hits_any`) – closed tests on every shape.
//!
//! Both walk the obstacles in world order and stop at the first match.

use glam::Vec2;

use crate::world::{Obstacle, Rect, World};

/// `true` if `candidate` would collide with any obstacle.
pub fn rect_intersects_any(world: &World, candidate: &Rect) -> bool {
    let center = candidate.center();
    world.obstacles().iter().any(|obstacle| match obstacle {
        Obstacle::Rect(r) => candidate.overlaps(r),
        // centroid vs. centre only, not true rect/circle overlap
        Obstacle::Circle(c) => center.distance(c.center) < c.radius,
    })
}

/// Index of the first obstacle containing `p`, in world order.
pub fn point_hit_index(world: &World, p: Vec2) -> Option<usize> {
    world.obstacles().iter().position(|obstacle| match obstacle {
        Obstacle::Rect(r) => r.contains(p),
        Obstacle::Circle(c) => c.contains(p),
    })
}

/// First obstacle containing `p`, in world order.
#[inline]
pub fn point_hits_any(world: &World, p: Vec2) -> Option<&Obstacle> {
    point_hit_index(world, p).map(|i| &world.obstacles()[i])
}

/*──────────────────────────────── Tests ───────────────────────────────*/
