//! CPU pixel surface with the few primitives the renderer needs.
//!
//! All drawing is clipped to the surface; off-screen coordinates are
//! silently ignored.

use super::Rgba;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameBuffer {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height],
            width,
            height,
        }
    }

    /// Reallocate if the resolution changed. Contents are unspecified after.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels.resize(width * height, 0);
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn clear(&mut self, colour: Rgba) {
        self.pixels.fill(colour);
    }

    #[inline]
    pub fn put(&mut self, x: i32, y: i32, colour: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.pixels[y as usize * self.width + x as usize] = colour;
        }
    }

    /// Vertical line through rows `y0 ..= y1` (floats are truncated).
    pub fn vline(&mut self, x: i32, y0: f32, y1: f32, colour: Rgba) {
        if !(0..self.width as i32).contains(&x) || self.height == 0 {
            return;
        }
        let (a, b) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        let last = self.height as i32 - 1;
        // NaN casts to 0; saturating casts keep huge walls in range
        let (ya, yb) = (a as i32, b as i32);
        if yb < 0 || ya > last {
            return;
        }
        let mut idx = ya.max(0) as usize * self.width + x as usize;
        for _ in ya.max(0)..=yb.min(last) {
            self.pixels[idx] = colour;
            idx += self.width;
        }
    }

    /// Filled rectangle covering `[x, x + w) × [y, y + h)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Rgba) {
        let (w_max, h_max) = (self.width as i32, self.height as i32);
        let x0 = x.clamp(0, w_max);
        let y0 = y.clamp(0, h_max);
        let x1 = x.saturating_add(w).clamp(x0, w_max);
        let y1 = y.saturating_add(h).min(h_max);
        for yy in y0..y1 {
            let row = yy as usize * self.width;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(colour);
        }
    }

    /// Filled disc: every pixel within `r` of the centre.
    ///
    /// Only the part of the bounding box that lands on the surface is
    /// walked, so oversized discs cost at most one full clear.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, colour: Rgba) {
        if r < 0 || self.width == 0 || self.height == 0 {
            return;
        }
        let (cx, cy, r) = (cx as i64, cy as i64, r as i64);
        let r2 = r * r;
        let x0 = (cx - r).max(0);
        let x1 = (cx + r).min(self.width as i64 - 1);
        let y0 = (cy - r).max(0);
        let y1 = (cy + r).min(self.height as i64 - 1);
        for y in y0..=y1 {
            let dy = y - cy;
            let row = y as usize * self.width;
            for x in x0..=x1 {
                let dx = x - cx;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[row + x as usize] = colour;
                }
            }
        }
    }

    /// Copy `src` with its top-left corner at `(x, y)`, clipped.
    pub fn blit(&mut self, src: &FrameBuffer, x: i32, y: i32) {
        for sy in 0..src.height {
            let dy = y + sy as i32;
            if !(0..self.height as i32).contains(&dy) {
                continue;
            }
            for sx in 0..src.width {
                let dx = x + sx as i32;
                if (0..self.width as i32).contains(&dx) {
                    self.pixels[dy as usize * self.width + dx as usize] =
                        src.pixels[sy * src.width + sx];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = 0x00_FF0000;

    #[test]
    fn vline_is_clipped() {
        let mut fb = FrameBuffer::new(4, 8);
        fb.vline(1, -100.0, 1e9, RED);
        assert!((0..8).all(|y| fb.get(1, y) == Some(RED)));
        assert_eq!(fb.get(0, 0), Some(0));

        fb.vline(9, 0.0, 5.0, RED); // off-screen column: no panic
        fb.vline(2, 20.0, 30.0, RED);
        assert!((0..8).all(|y| fb.get(2, y) == Some(0)));
    }

    #[test]
    fn vline_truncates_endpoints() {
        let mut fb = FrameBuffer::new(1, 10);
        fb.vline(0, 2.7, 5.2, RED);
        let lit: Vec<_> = (0..10).filter(|&y| fb.get(0, y) == Some(RED)).collect();
        assert_eq!(lit, vec![2, 3, 4, 5]);
    }

    #[test]
    fn fill_rect_half_open_and_clipped() {
        let mut fb = FrameBuffer::new(5, 5);
        fb.fill_rect(3, 3, 10, 10, RED);
        assert_eq!(fb.get(3, 3), Some(RED));
        assert_eq!(fb.get(4, 4), Some(RED));
        assert_eq!(fb.get(2, 3), Some(0));

        let mut fb = FrameBuffer::new(5, 5);
        fb.fill_rect(1, 1, 2, 1, RED);
        assert_eq!(fb.pixels().iter().filter(|&&p| p == RED).count(), 2);
        fb.fill_rect(-3, -3, 1, 1, RED); // fully outside
        assert_eq!(fb.pixels().iter().filter(|&&p| p == RED).count(), 2);
    }

    #[test]
    fn circle_radius_two_is_a_diamond_ish_blob() {
        let mut fb = FrameBuffer::new(5, 5);
        fb.fill_circle(2, 2, 2, RED);
        assert_eq!(fb.get(2, 0), Some(RED));
        assert_eq!(fb.get(0, 0), Some(0));
        assert_eq!(fb.pixels().iter().filter(|&&p| p == RED).count(), 13);
    }

    #[test]
    fn huge_circle_is_clipped_to_surface() {
        let mut fb = FrameBuffer::new(6, 4);
        fb.fill_circle(3, 2, i32::MAX, RED);
        assert!(fb.pixels().iter().all(|&p| p == RED));

        // centre far off-screen, rim still crosses the left column
        let mut fb = FrameBuffer::new(6, 4);
        fb.fill_circle(-1_000_000, 2, 1_000_000, RED);
        assert_eq!(fb.get(0, 2), Some(RED));
        assert_eq!(fb.get(1, 2), Some(0));
        assert_eq!(fb.get(0, 0), Some(0));

        fb.fill_circle(i32::MIN, i32::MIN, 5, RED); // nowhere near
    }

    #[test]
    fn blit_clips_to_destination() {
        let mut overlay = FrameBuffer::new(3, 3);
        overlay.clear(RED);
        let mut fb = FrameBuffer::new(4, 4);
        fb.blit(&overlay, 2, -1);
        assert_eq!(fb.get(2, 0), Some(RED));
        assert_eq!(fb.get(3, 1), Some(RED));
        assert_eq!(fb.get(3, 2), Some(0));
        assert_eq!(fb.get(1, 0), Some(0));
    }
}
