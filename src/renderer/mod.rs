//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! The projection produces one [`ProjectedColumn`] per screen column and
//! the minimap produces an overlay image; both are handed to a type that
//! implements [`Renderer`].
//!
//! * A helper blanket‐impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use crate::engine::ProjectedColumn;

/// Pixel format of the software frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

pub const BLACK: Rgba = rgb(0, 0, 0);

#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub const fn grey(level: u8) -> Rgba {
    rgb(level, level, level)
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear
    /// it to black.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Draw one wall strip.
    fn draw_column(&mut self, column: &ProjectedColumn);

    /// Composite a finished overlay image with its top-left at `(x, y)`.
    fn draw_overlay(&mut self, overlay: &FrameBuffer, x: usize, y: usize);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Window callers pass `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        columns: &[ProjectedColumn],
        overlay: Option<(&FrameBuffer, usize, usize)>,
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for c in columns {
            self.draw_column(c);
        }
        if let Some((img, x, y)) = overlay {
            self.draw_overlay(img, x, y);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

pub mod minimap;
pub mod software;
mod surface;

pub use minimap::Minimap;
pub use software::Software;
pub use surface::FrameBuffer;
