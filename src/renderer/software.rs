//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a [`FrameBuffer`] in **0x00RRGGBB** format.
//! * One flat grey vertical strip per screen column on a black background;
//!   no textures, no floor or ceiling.
//! ---------------------------------------------------------------------------

use crate::{
    engine::ProjectedColumn,
    renderer::{BLACK, FrameBuffer, Renderer, Rgba, grey},
};

/// Wolfenstein-style column renderer.
#[derive(Default)]
pub struct Software {
    scratch: FrameBuffer,
}

impl Software {
    /// Last finished (or in-progress) frame.
    #[inline]
    pub fn frame(&self) -> &FrameBuffer {
        &self.scratch
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        self.scratch.resize(w, h);
        self.scratch.clear(BLACK);
    }

    fn draw_column(&mut self, col: &ProjectedColumn) {
        self.scratch
            .vline(col.screen_x as i32, col.top, col.bottom, grey(col.intensity));
    }

    fn draw_overlay(&mut self, overlay: &FrameBuffer, x: usize, y: usize) {
        self.scratch.blit(overlay, x as i32, y as i32);
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(
            self.scratch.pixels(),
            self.scratch.width(),
            self.scratch.height(),
        );
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
