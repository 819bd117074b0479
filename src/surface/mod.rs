//! Drawing surfaces.
//!
//! The engine never draws directly. A [`Presenter`] takes each composed
//! [`Frame`] and replays it onto a [`Surface`]: it first releases every
//! element it drew for the previous frame, resets the canvas, then draws the
//! new elements in paint order and keeps their handles for the next round.
//! Handles therefore never outlive one frame and nothing accumulates.
//!
//! Two surfaces ship with the crate:
//!
//! | Surface | Use |
//! |---------|-----|
//! | [`RecordingSurface`] | retained in-memory scene, for inspection and tests |
//! | [`RasterSurface`] | software rasterizer producing RGBA images / PNG files |

mod font;
mod raster;
mod recording;

pub use font::{glyph_strokes, GLYPH_ASPECT};
pub use raster::RasterSurface;
pub use recording::RecordingSurface;

use crate::element::{Element, ElementId, Frame, Viewport};
use crate::error::SurfaceError;

/// A 2D canvas the presenter can draw on.
pub trait Surface {
    /// Reset the logical bounds and fill the background.
    fn clear(&mut self, viewport: &Viewport) -> Result<(), SurfaceError>;

    /// Draw an element and return its handle.
    fn draw(&mut self, element: &Element) -> Result<ElementId, SurfaceError>;

    /// Release an element previously returned by [`Surface::draw`].
    fn remove(&mut self, id: ElementId) -> Result<(), SurfaceError>;
}

/// Outcome of presenting one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentStats {
    /// Handles released from the previous frame.
    pub removed: usize,
    /// Elements drawn for this frame.
    pub drawn: usize,
}

/// Replays frames onto a surface, owning the handles of what is on screen.
#[derive(Debug)]
pub struct Presenter<S: Surface> {
    surface: S,
    live: Vec<ElementId>,
    frames: u64,
}

impl<S: Surface> Presenter<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: Vec::new(),
            frames: 0,
        }
    }

    /// Release the previous frame, clear, and draw `frame` in paint order.
    ///
    /// On error the frame is abandoned where it failed. Handles drawn before
    /// the failure are kept, so the next present still releases them.
    pub fn present(&mut self, frame: &Frame) -> Result<PresentStats, SurfaceError> {
        let removed = self.release()?;
        self.surface.clear(&frame.viewport)?;

        for element in frame.layered() {
            match self.surface.draw(element) {
                Ok(id) => self.live.push(id),
                Err(err) => {
                    tracing::warn!(
                        frame = frame.index,
                        kind = element.kind(),
                        error = %err,
                        "surface rejected element, dropping frame"
                    );
                    return Err(err);
                }
            }
        }

        self.frames += 1;
        Ok(PresentStats {
            removed,
            drawn: self.live.len(),
        })
    }

    /// Release every live handle, newest first.
    ///
    /// A handle is forgotten only once the surface has removed it, so after
    /// a failed removal the remaining handles are retried on the next call.
    /// Handles the surface no longer knows are dropped.
    pub fn release(&mut self) -> Result<usize, SurfaceError> {
        let mut released = 0;
        while let Some(&id) = self.live.last() {
            match self.surface.remove(id) {
                Ok(()) => released += 1,
                Err(SurfaceError::UnknownElement(_)) => {
                    tracing::debug!(element = %id, "surface already forgot element");
                }
                Err(err) => {
                    tracing::warn!(
                        element = %id,
                        pending = self.live.len(),
                        error = %err,
                        "surface failed to remove element"
                    );
                    return Err(err);
                }
            }
            self.live.pop();
        }
        tracing::trace!(released, "released previous frame");
        Ok(released)
    }

    /// Handles currently on the surface.
    #[inline]
    pub fn live(&self) -> &[ElementId] {
        &self.live
    }

    /// Frames presented successfully.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back, leaving whatever is drawn on it.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
