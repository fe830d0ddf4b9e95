//! The 2D drawing surface the renderers paint onto.

use std::f64::consts::TAU;

use glam::DVec2;
use starfield_config::Rgb;

use crate::viewport::Viewport;

/// Minimal path-based 2D canvas: enough to fill alpha-blended circles.
pub trait DrawSurface {
    /// Start a new path, discarding any pending one.
    fn begin_path(&mut self);

    /// Append a circular arc centred on `(cx, cy)` from `start` to `end` radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);

    /// Set the fill color used by the next [`fill`](Self::fill). `alpha` is in `[0, 1]`.
    fn set_fill_rgba(&mut self, color: Rgb, alpha: f64);

    /// Fill the current path.
    fn fill(&mut self);
}

/// Fill a full circle: begin path, full arc, set color, fill.
pub fn fill_circle<S: DrawSurface + ?Sized>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    radius: f64,
    color: Rgb,
    alpha: f64,
) {
    surface.begin_path();
    surface.arc(cx, cy, radius, 0.0, TAU);
    surface.set_fill_rgba(color, alpha);
    surface.fill();
}

/// Wraps a screen-space surface and applies a viewport's pan/zoom to every arc,
/// so world-space draws land on the right pixels.
pub struct ViewportSurface<'a, S: DrawSurface + ?Sized> {
    inner: &'a mut S,
    viewport: Viewport,
}

impl<'a, S: DrawSurface + ?Sized> ViewportSurface<'a, S> {
    pub fn new(inner: &'a mut S, viewport: Viewport) -> Self {
        Self { inner, viewport }
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for ViewportSurface<'_, S> {
    fn begin_path(&mut self) {
        self.inner.begin_path();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        let screen = self.viewport.world_to_screen(DVec2::new(cx, cy));
        self.inner
            .arc(screen.x, screen.y, radius * self.viewport.zoom, start, end);
    }

    fn set_fill_rgba(&mut self, color: Rgb, alpha: f64) {
        self.inner.set_fill_rgba(color, alpha);
    }

    fn fill(&mut self) {
        self.inner.fill();
    }
}

/// One filled circle as seen by a [`DrawRecorder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
}

/// Surface that records filled circles instead of rasterizing them.
///
/// Only full-circle paths are recorded; each `fill` emits one [`DrawCall`] per
/// arc in the current path.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    pending: Vec<(f64, f64, f64)>,
    fill: Option<(Rgb, f64)>,
    pub calls: Vec<DrawCall>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.fill = None;
        self.calls.clear();
    }
}

impl DrawSurface for DrawRecorder {
    fn begin_path(&mut self) {
        self.pending.clear();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, _start: f64, _end: f64) {
        self.pending.push((cx, cy, radius));
    }

    fn set_fill_rgba(&mut self, color: Rgb, alpha: f64) {
        self.fill = Some((color, alpha));
    }

    fn fill(&mut self) {
        let Some((color, alpha)) = self.fill else {
            return;
        };
        self.calls
            .extend(self.pending.iter().map(|&(x, y, radius)| DrawCall {
                x,
                y,
                radius,
                color,
                alpha,
            }));
    }
}
