use glam::Vec2;

/// Unit vector for an angle in degrees.
///
/// 0° points east (+X) and angles grow counter-clockwise on screen, so the
/// Y component is negated: screen Y grows downward.
#[inline]
pub fn heading_vector(angle_deg: f32) -> Vec2 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Vec2::new(c, -s)
}

/// Things that can go wrong while building a [`World`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WorldError {
    /// World extents must be positive and finite.
    #[error("world bounds {0}x{1} must be positive")]
    BadBounds(f32, f32),

    /// Rectangle width/height must be positive and finite.
    #[error("rectangle at ({x}, {y}) has non-positive size {w}x{h}")]
    BadRect { x: f32, y: f32, w: f32, h: f32 },

    /// Circle radius must be positive and finite.
    #[error("circle at ({x}, {y}) has non-positive radius {r}")]
    BadCircle { x: f32, y: f32, r: f32 },
}

/*----------------------- simple primitives --------------------------*/

/// Axis-aligned rectangle: `pos` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of `size` whose centre sits on `center`.
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Open-interval overlap: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.left()
            || self.left() >= other.right()
            || self.top() >= other.bottom()
            || self.bottom() <= other.top())
    }

    /// Closed-interval containment: points on any edge are inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(x, y),
            radius,
        }
    }

    /// Inclusive: a point exactly `radius` away is inside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.distance(self.center) <= self.radius
    }
}

/*--------------------------- obstacles ------------------------------*/

/// One static blocker in the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Obstacle {
    Rect(Rect),
    Circle(Circle),
}

impl Obstacle {
    /// Checked rectangle constructor.
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Result<Self, WorldError> {
        Self::Rect(Rect::new(x, y, w, h)).validated()
    }

    /// Checked circle constructor.
    pub fn circle(x: f32, y: f32, radius: f32) -> Result<Self, WorldError> {
        Self::Circle(Circle::new(x, y, radius)).validated()
    }

    fn validated(self) -> Result<Self, WorldError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        match self {
            Obstacle::Rect(r) if !(positive(r.size.x) && positive(r.size.y)) => {
                Err(WorldError::BadRect {
                    x: r.pos.x,
                    y: r.pos.y,
                    w: r.size.x,
                    h: r.size.y,
                })
            }
            Obstacle::Circle(c) if !positive(c.radius) => Err(WorldError::BadCircle {
                x: c.center.x,
                y: c.center.y,
                r: c.radius,
            }),
            ok => Ok(ok),
        }
    }
}

/*----------------------------- world --------------------------------*/

/// Runtime snapshot of one map (immutable after construction).
#[derive(Clone, Debug)]
pub struct World {
    bounds: Vec2,
    obstacles: Vec<Obstacle>,
}

impl World {
    /// Build a world, re-checking every obstacle so hand-built variants
    /// cannot sneak in a degenerate shape.
    pub fn new(bounds: Vec2, obstacles: Vec<Obstacle>) -> Result<Self, WorldError> {
        if !(bounds.is_finite() && bounds.x > 0.0 && bounds.y > 0.0) {
            return Err(WorldError::BadBounds(bounds.x, bounds.y));
        }
        let obstacles = obstacles
            .into_iter()
            .map(Obstacle::validated)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bounds, obstacles })
    }

    /// Obstacles in insertion order. Collision ties resolve in this order.
    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bounds.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bounds.y
    }

    /// Half-open bounds test: `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(&self, p: Vec2) -> bool {
        (0.0..self.bounds.x).contains(&p.x) && (0.0..self.bounds.y).contains(&p.y)
    }

    /// Geometric centre of the world, the default spawn point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds * 0.5
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_vector_follows_screen_axes() {
        let east = heading_vector(0.0);
        assert!((east - Vec2::X).length() < 1e-6);
        // 90° is "up" on screen, i.e. towards smaller Y
        let north = heading_vector(90.0);
        assert!((north - Vec2::new(0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
    }

    #[test]
    fn rect_contains_its_edges() {
        let r = Rect::new(10.0, 20.0, 5.0, 5.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(15.0, 25.0)));
        assert!(!r.contains(Vec2::new(15.01, 22.0)));
    }

    #[test]
    fn centered_rect_round_trips_center() {
        let r = Rect::centered(Vec2::new(50.0, 40.0), Vec2::new(16.0, 8.0));
        assert_eq!(r.pos, Vec2::new(42.0, 36.0));
        assert_eq!(r.center(), Vec2::new(50.0, 40.0));
    }

    #[test]
    fn degenerate_obstacles_rejected() {
        assert!(matches!(
            Obstacle::rect(0.0, 0.0, 0.0, 5.0),
            Err(WorldError::BadRect { .. })
        ));
        assert!(matches!(
            Obstacle::circle(1.0, 1.0, -2.0),
            Err(WorldError::BadCircle { .. })
        ));
        assert!(Obstacle::circle(1.0, 1.0, f32::NAN).is_err());

        let raw = Obstacle::Rect(Rect::new(0.0, 0.0, 4.0, -1.0));
        assert!(World::new(Vec2::new(10.0, 10.0), vec![raw]).is_err());
    }

    #[test]
    fn bounds_are_half_open() {
        let w = World::new(Vec2::new(480.0, 360.0), Vec::new()).unwrap();
        assert!(w.in_bounds(Vec2::ZERO));
        assert!(w.in_bounds(Vec2::new(479.9, 359.9)));
        assert!(!w.in_bounds(Vec2::new(480.0, 10.0)));
        assert!(!w.in_bounds(Vec2::new(10.0, -0.1)));
        assert!(!w.in_bounds(Vec2::NAN));
        assert_eq!(
            World::new(Vec2::new(0.0, 5.0), Vec::new()).unwrap_err(),
            WorldError::BadBounds(0.0, 5.0)
        );
    }
}
