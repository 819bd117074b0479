//! Software rasterizer surface.
//!
//! Paints frames into an [`RgbaImage`] with source-over blending. The
//! viewport is fitted into the image with equal x/y scale and centred; y
//! points up in viewport space and down in the image.
//!
//! Rasterization is immediate: [`Surface::remove`] only retires the handle,
//! pixels stay until the next [`Surface::clear`]. The presenter always
//! clears before drawing a frame, so this is invisible in practice.
//!
//! ```ignore
//! let mut presenter = Presenter::new(RasterSurface::new(960, 640));
//! logo.present(0, &mut presenter)?;
//! presenter.surface().save_png("frame-000.png")?;
//! ```

use super::font::{glyph_strokes, GLYPH_ASPECT};
use super::Surface;
use crate::color::Rgba;
use crate::element::{
    Circle, Element, ElementId, FontWeight, Line, Polygon, Shape, Stroke, Text, Viewport,
    POINTS_PER_UNIT,
};
use crate::error::SurfaceError;
use glam::{Mat2, Vec2};
use image::{ImageFormat, Rgba as Pixel, RgbaImage};
use std::collections::BTreeSet;
use std::path::Path;

/// Cap height as a fraction of the font size.
const CAP_HEIGHT: f32 = 0.72;

/// Stroke width of normal-weight glyphs as a fraction of cap height.
const NORMAL_WEIGHT: f32 = 0.12;

/// Stroke width of bold glyphs as a fraction of cap height.
const BOLD_WEIGHT: f32 = 0.18;

/// Gap between consecutive glyphs as a fraction of cap height.
const LETTER_GAP: f32 = 0.25;

/// Thinnest rasterized half-width, in pixels.
const MIN_HALF_WIDTH: f32 = 0.5;

/// A surface that rasterizes elements into an RGBA image.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    viewport: Viewport,
    live: BTreeSet<ElementId>,
    next_id: u64,
}

impl RasterSurface {
    /// A `width`×`height` pixel surface, initially cleared to the default viewport.
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self {
            image: RgbaImage::new(width.max(1), height.max(1)),
            viewport: Viewport::default(),
            live: BTreeSet::new(),
            next_id: 0,
        };
        surface.fill_background();
        surface
    }

    /// The rendered pixels.
    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the rendered pixels, leaving the surface intact.
    pub fn snapshot(&self) -> RgbaImage {
        self.image.clone()
    }

    /// Encode the current image as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Pixel at viewport coordinates `p`, if inside the image.
    pub fn pixel_at(&self, p: Vec2) -> Option<[u8; 4]> {
        let px = self.to_pixel(p);
        let (x, y) = (px.x.floor(), px.y.floor());
        if x < 0.0 || y < 0.0 || x >= self.image.width() as f32 || y >= self.image.height() as f32 {
            return None;
        }
        Some(self.image.get_pixel(x as u32, y as u32).0)
    }

    // ========== Coordinate mapping ==========

    /// Pixels per viewport unit (equal on both axes).
    fn scale(&self) -> f32 {
        let sx = self.image.width() as f32 / self.viewport.width();
        let sy = self.image.height() as f32 / self.viewport.height();
        sx.min(sy)
    }

    fn to_pixel(&self, p: Vec2) -> Vec2 {
        let center = Vec2::new(self.image.width() as f32, self.image.height() as f32) * 0.5;
        let s = self.scale();
        Vec2::new(center.x + p.x * s, center.y - p.y * s)
    }

    /// Half of a stroke width given in points, in pixels.
    fn half_width_px(&self, points: f32) -> f32 {
        (points / POINTS_PER_UNIT * self.scale() * 0.5).max(MIN_HALF_WIDTH)
    }

    // ========== Pixel operations ==========

    fn fill_background(&mut self) {
        let [r, g, b, _] = Rgba::opaque(self.viewport.background).to_rgba8();
        for pixel in self.image.pixels_mut() {
            *pixel = Pixel([r, g, b, 255]);
        }
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgba) {
        let a = color.alpha;
        let src = color.rgb * 255.0;
        let dst = self.image.get_pixel_mut(x, y);
        for (channel, s) in dst.0.iter_mut().zip([src.x, src.y, src.z]) {
            *channel = (s * a + *channel as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8;
        }
        let out_alpha = a + dst.0[3] as f32 / 255.0 * (1.0 - a);
        dst.0[3] = (out_alpha * 255.0).round() as u8;
    }

    /// Pixel centres inside the pixel-space box `min..max`, clipped to the image.
    fn pixels_in(&self, min: Vec2, max: Vec2) -> impl Iterator<Item = (u32, u32, Vec2)> {
        let w = self.image.width() as i64;
        let h = self.image.height() as i64;
        let x0 = (min.x.floor() as i64).clamp(0, w);
        let x1 = (max.x.ceil() as i64).clamp(0, w);
        let y0 = (min.y.floor() as i64).clamp(0, h);
        let y1 = (max.y.ceil() as i64).clamp(0, h);
        (y0..y1).flat_map(move |y| {
            (x0..x1).map(move |x| {
                (x as u32, y as u32, Vec2::new(x as f32 + 0.5, y as f32 + 0.5))
            })
        })
    }

    /// Blend every pixel within `half_width` of segment `a`-`b` (pixel space).
    fn fill_capsule(&mut self, a: Vec2, b: Vec2, half_width: f32, color: Rgba) {
        let pad = Vec2::splat(half_width);
        let covered: Vec<(u32, u32)> = self
            .pixels_in(a.min(b) - pad, a.max(b) + pad)
            .filter(|&(_, _, p)| distance_to_segment(p, a, b) <= half_width)
            .map(|(x, y, _)| (x, y))
            .collect();
        for (x, y) in covered {
            self.blend(x, y, color);
        }
    }

    fn draw_stroke_path(&mut self, points: &[Vec2], closed: bool, stroke: &Stroke) {
        let px: Vec<Vec2> = points.iter().map(|&p| self.to_pixel(p)).collect();
        let hw = self.half_width_px(stroke.width);
        let mut edges: Vec<(Vec2, Vec2)> = px.windows(2).map(|w| (w[0], w[1])).collect();
        if closed && px.len() > 2 {
            edges.push((px[px.len() - 1], px[0]));
        }

        match stroke.dash {
            None => {
                for (a, b) in edges {
                    self.fill_capsule(a, b, hw, stroke.color);
                }
            }
            Some([on, off]) => {
                let to_px = self.scale() / POINTS_PER_UNIT;
                let pattern = [on * to_px, off * to_px];
                for (a, b) in dash_segments(&edges, pattern) {
                    self.fill_capsule(a, b, hw, stroke.color);
                }
            }
        }
    }

    // ========== Shapes ==========

    fn draw_line(&mut self, line: &Line) {
        self.draw_stroke_path(&[line.from, line.to], false, &line.stroke);
    }

    fn draw_polygon(&mut self, polygon: &Polygon) {
        if let Some(fill) = polygon.fill {
            let px: Vec<Vec2> = polygon.points.iter().map(|&p| self.to_pixel(p)).collect();
            self.fill_even_odd(&px, fill);
        }
        if let Some(stroke) = &polygon.stroke {
            self.draw_stroke_path(&polygon.points, true, stroke);
        }
    }

    /// Scanline fill with the even-odd rule, sampling pixel centres.
    fn fill_even_odd(&mut self, px: &[Vec2], color: Rgba) {
        if px.len() < 3 {
            return;
        }
        let (min, max) = px
            .iter()
            .fold((Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            });
        let width = self.image.width() as f32;
        let y0 = min.y.floor().max(0.0) as u32;
        let y1 = (max.y.ceil().max(0.0) as u32).min(self.image.height());

        let mut crossings = Vec::new();
        for y in y0..y1 {
            let sy = y as f32 + 0.5;
            crossings.clear();
            for i in 0..px.len() {
                let a = px[i];
                let b = px[(i + 1) % px.len()];
                if (a.y <= sy) != (b.y <= sy) {
                    crossings.push(a.x + (sy - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil().max(0.0);
                let end = (span[1] - 0.5).floor().min(width - 1.0);
                let mut x = start;
                while x <= end {
                    self.blend(x as u32, y, color);
                    x += 1.0;
                }
            }
        }
    }

    fn draw_circle(&mut self, circle: &Circle) {
        let c = self.to_pixel(circle.center);
        let r = circle.radius * self.scale();

        if let Some(fill) = circle.fill {
            let r = r.max(MIN_HALF_WIDTH);
            let covered: Vec<(u32, u32)> = self
                .pixels_in(c - Vec2::splat(r), c + Vec2::splat(r))
                .filter(|&(_, _, p)| p.distance(c) <= r)
                .map(|(x, y, _)| (x, y))
                .collect();
            for (x, y) in covered {
                self.blend(x, y, fill);
            }
        }

        if let Some(stroke) = &circle.stroke {
            let hw = self.half_width_px(stroke.width);
            let reach = Vec2::splat(r + hw);
            let covered: Vec<(u32, u32)> = self
                .pixels_in(c - reach, c + reach)
                .filter(|&(_, _, p)| (p.distance(c) - r).abs() <= hw)
                .map(|(x, y, _)| (x, y))
                .collect();
            for (x, y) in covered {
                self.blend(x, y, stroke.color);
            }
        }
    }

    fn draw_text(&mut self, text: &Text) {
        let cap = text.size / POINTS_PER_UNIT * CAP_HEIGHT;
        let weight = match text.weight {
            FontWeight::Normal => NORMAL_WEIGHT,
            FontWeight::Bold => BOLD_WEIGHT,
        };
        let glyph_width_pt = cap * weight * POINTS_PER_UNIT;

        let chars: Vec<char> = text.content.chars().collect();
        let advance = cap * (GLYPH_ASPECT + LETTER_GAP);
        let first = -(chars.len().saturating_sub(1) as f32) * advance * 0.5;
        let rotation = Mat2::from_angle(text.rotation.to_radians());

        let mut segments = Vec::new();
        for (i, &ch) in chars.iter().enumerate() {
            let offset = Vec2::new(first + i as f32 * advance, 0.0);
            for (a, b) in glyph_strokes(ch) {
                let place = |p: Vec2| text.position + rotation * (p * cap + offset);
                segments.push((place(a), place(b)));
            }
        }

        // contour under the glyph body
        if let Some(outline) = &text.outline {
            let contour = Stroke::solid(outline.color, glyph_width_pt + 2.0 * outline.width);
            for &(a, b) in &segments {
                self.draw_stroke_path(&[a, b], false, &contour);
            }
        }
        let body = Stroke::solid(text.color, glyph_width_pt);
        for &(a, b) in &segments {
            self.draw_stroke_path(&[a, b], false, &body);
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, viewport: &Viewport) -> Result<(), SurfaceError> {
        if !(viewport.half_extent.x > 0.0 && viewport.half_extent.y > 0.0) {
            return Err(SurfaceError::Rejected {
                kind: "viewport",
                reason: format!("degenerate half-extent {:?}", viewport.half_extent),
            });
        }
        self.viewport = *viewport;
        self.fill_background();
        Ok(())
    }

    fn draw(&mut self, element: &Element) -> Result<ElementId, SurfaceError> {
        match &element.shape {
            Shape::Line(line) => self.draw_line(line),
            Shape::Polygon(polygon) => self.draw_polygon(polygon),
            Shape::Circle(circle) => self.draw_circle(circle),
            Shape::Text(text) => self.draw_text(text),
        }
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        Ok(id)
    }

    fn remove(&mut self, id: ElementId) -> Result<(), SurfaceError> {
        if self.live.remove(&id) {
            Ok(())
        } else {
            Err(SurfaceError::UnknownElement(id))
        }
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Split a path into its "on" pieces for an `[on, off]` dash pattern,
/// carrying the pattern phase across edges.
fn dash_segments(edges: &[(Vec2, Vec2)], pattern: [f32; 2]) -> Vec<(Vec2, Vec2)> {
    let [on, off] = pattern;
    if on <= 0.0 || off <= 0.0 {
        return edges.to_vec();
    }

    let mut pieces = Vec::new();
    let mut drawing = true;
    let mut remaining = on;

    for &(a, b) in edges {
        let length = a.distance(b);
        if length <= f32::EPSILON {
            continue;
        }
        let dir = (b - a) / length;
        let mut pos = 0.0;
        while pos < length {
            let step = remaining.min(length - pos);
            if drawing {
                pieces.push((a + dir * pos, a + dir * (pos + step)));
            }
            pos += step;
            remaining -= step;
            if remaining <= f32::EPSILON {
                drawing = !drawing;
                remaining = if drawing { on } else { off };
            }
        }
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Z_BACKDROP, Z_TEXT};
    use glam::Vec3;

    fn surface() -> RasterSurface {
        // 50 px per unit
        RasterSurface::new(1000, 600)
    }

    #[test]
    fn test_clear_paints_background() {
        let mut s = surface();
        let vp = Viewport::new(Vec2::new(10.0, 6.0), Vec3::new(1.0, 0.0, 0.0));
        s.clear(&vp).unwrap();
        assert_eq!(s.pixel_at(Vec2::ZERO), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel_at(Vec2::new(11.0, 0.0)), None);
    }

    #[test]
    fn test_disc_blends_over_background() {
        let mut s = surface();
        s.clear(&Viewport::new(Vec2::new(10.0, 6.0), Vec3::ZERO)).unwrap();
        s.draw(&Element::disc(Vec2::new(2.0, 2.0), 0.5, Rgba::new(Vec3::ONE, 0.5), Z_BACKDROP))
            .unwrap();

        let [r, g, b, a] = s.pixel_at(Vec2::new(2.0, 2.0)).unwrap();
        assert_eq!((r, g, b, a), (128, 128, 128, 255));
        assert_eq!(s.pixel_at(Vec2::new(3.0, 2.0)), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_polygon_fill() {
        let mut s = surface();
        s.clear(&Viewport::new(Vec2::new(10.0, 6.0), Vec3::ZERO)).unwrap();
        let square = vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        s.draw(&Element::polygon(square, Some(Rgba::opaque(Vec3::new(0.0, 1.0, 0.0))), None, 1))
            .unwrap();
        assert_eq!(s.pixel_at(Vec2::new(0.1, 0.1)), Some([0, 255, 0, 255]));
        assert_eq!(s.pixel_at(Vec2::new(1.5, 0.0)), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_text_marks_pixels() {
        let mut s = surface();
        s.clear(&Viewport::new(Vec2::new(10.0, 6.0), Vec3::ZERO)).unwrap();
        let text = Text {
            content: "T".into(),
            position: Vec2::ZERO,
            size: 60.0,
            color: Rgba::opaque(Vec3::new(0.0, 0.0, 1.0)),
            rotation: 0.0,
            weight: FontWeight::Normal,
            outline: None,
        };
        s.draw(&Element::text(text, Z_TEXT)).unwrap();
        // the T's stem passes through the centre
        assert_eq!(s.pixel_at(Vec2::ZERO), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_remove_retires_handle() {
        let mut s = surface();
        let id = s
            .draw(&Element::disc(Vec2::ZERO, 1.0, Rgba::WHITE, Z_BACKDROP))
            .unwrap();
        assert!(s.remove(id).is_ok());
        assert!(matches!(s.remove(id), Err(SurfaceError::UnknownElement(_))));
    }

    #[test]
    fn test_degenerate_viewport_is_rejected() {
        let mut s = surface();
        let vp = Viewport::new(Vec2::new(0.0, 6.0), Vec3::ZERO);
        assert!(matches!(s.clear(&vp), Err(SurfaceError::Rejected { kind: "viewport", .. })));
    }

    #[test]
    fn test_dash_pattern() {
        let edges = [(Vec2::ZERO, Vec2::new(10.0, 0.0))];
        let pieces = dash_segments(&edges, [2.0, 3.0]);
        // on 0-2, off 2-5, on 5-7, off 7-10
        assert_eq!(pieces.len(), 2);
        assert!((pieces[1].0.x - 5.0).abs() < 1e-5);
        assert!((pieces[1].1.x - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_to_segment() {
        let d = distance_to_segment(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::new(2.0, 0.0));
        assert!((d - 1.0).abs() < 1e-6);
        let d = distance_to_segment(Vec2::new(-3.0, 4.0), Vec2::ZERO, Vec2::new(2.0, 0.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}
