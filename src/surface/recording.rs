//! Retained in-memory surface.

use super::Surface;
use crate::element::{Element, ElementId, Viewport};
use crate::error::SurfaceError;
use std::collections::BTreeMap;

/// Keeps every live element keyed by its handle, plus call counters.
///
/// Useful for inspecting exactly what a frame put on screen, and for
/// exercising failure paths via [`RecordingSurface::fail_on_draw`] and
/// [`RecordingSurface::fail_on_remove`].
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    live: BTreeMap<ElementId, Element>,
    viewport: Option<Viewport>,
    next_id: u64,
    draws: u64,
    removals: u64,
    clears: u64,
    remove_calls: u64,
    /// 1-based draw call that should be rejected.
    fail_on: Option<u64>,
    /// 1-based remove call that should be rejected.
    fail_remove_on: Option<u64>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the `n`th draw call (counting from 1 over the surface's lifetime).
    pub fn fail_on_draw(mut self, n: u64) -> Self {
        self.fail_on = Some(n);
        self
    }

    /// Reject the `n`th remove call, leaving that element in place.
    pub fn fail_on_remove(mut self, n: u64) -> Self {
        self.fail_remove_on = Some(n);
        self
    }

    /// Elements currently on the surface, in draw order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.live.values()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.live.get(&id)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Live elements of the given kind.
    pub fn count_of(&self, kind: &str) -> usize {
        self.live.values().filter(|e| e.kind() == kind).count()
    }

    /// Viewport from the last clear.
    #[inline]
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    #[inline]
    pub fn removals(&self) -> u64 {
        self.removals
    }

    #[inline]
    pub fn clears(&self) -> u64 {
        self.clears
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: &Viewport) -> Result<(), SurfaceError> {
        self.viewport = Some(*viewport);
        self.clears += 1;
        Ok(())
    }

    fn draw(&mut self, element: &Element) -> Result<ElementId, SurfaceError> {
        self.draws += 1;
        if self.fail_on == Some(self.draws) {
            return Err(SurfaceError::Rejected {
                kind: element.kind(),
                reason: format!("injected failure on draw {}", self.draws),
            });
        }

        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, element.clone());
        Ok(id)
    }

    fn remove(&mut self, id: ElementId) -> Result<(), SurfaceError> {
        self.remove_calls += 1;
        if self.fail_remove_on == Some(self.remove_calls) {
            return Err(SurfaceError::Rejected {
                kind: self.live.get(&id).map_or("unknown", Element::kind),
                reason: format!("injected failure on remove {}", self.remove_calls),
            });
        }
        match self.live.remove(&id) {
            Some(_) => {
                self.removals += 1;
                Ok(())
            }
            None => Err(SurfaceError::UnknownElement(id)),
        }
    }
}
