use glam::Vec2;

use crate::math::Color;
use crate::traits::DrawContext;

/// Stroke radius never drops below this, so hairlines still hit a pixel
/// center wherever they pass
const MIN_STROKE_RADIUS: f32 = std::f32::consts::FRAC_1_SQRT_2;

#[derive(Debug, Clone, Default)]
struct Subpath {
    points: Vec<Vec2>,
    closed: bool,
}

/// CPU raster target - RGBA8 pixel buffer implementing [`DrawContext`]
///
/// Fills use the even-odd rule sampled at pixel centers; strokes stamp discs
/// of radius `width / 2` along each segment. Both build a coverage mask first
/// and blend each covered pixel once with source-over.
#[derive(Clone)]
pub struct Canvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    /// Scratch coverage, one entry per pixel
    mask: Vec<bool>,
    path: Vec<Subpath>,
    fill_color: Color,
    stroke_color: Color,
    stroke_width: f32,
}

impl Canvas {
    /// Create new transparent canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = width as usize * height as usize;

        Self {
            pixels: vec![0; pixel_count * 4],
            width,
            height,
            mask: vec![false; pixel_count],
            path: Vec::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
        }
    }

    /// Fill entire canvas with color
    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Reallocate to new dimensions, contents become transparent
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Canvas {
            fill_color: self.fill_color,
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            ..Canvas::new(width, height)
        };
    }

    /// Color at `(x, y)`, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y) * 4;
        let px = &self.pixels[idx..idx + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn blend_pixel(&mut self, index: usize, color: Color) {
        let idx = index * 4;
        let px = &mut self.pixels[idx..idx + 4];
        let dst = Color::rgba(px[0], px[1], px[2], px[3]);
        px.copy_from_slice(&color.over(dst).to_array());
    }

    /// Blend `color` into every masked pixel and reset the mask
    fn flush_mask(&mut self, color: Color) {
        for index in 0..self.mask.len() {
            if std::mem::take(&mut self.mask[index]) {
                self.blend_pixel(index, color);
            }
        }
    }

    /// Even-odd scanline coverage of every subpath (open ones are implicitly closed)
    fn cover_fill(&mut self) {
        let edges: Vec<(Vec2, Vec2)> = self
            .path
            .iter()
            .filter(|sp| sp.points.len() >= 3)
            .flat_map(|sp| {
                let n = sp.points.len();
                (0..n).map(move |i| (sp.points[i], sp.points[(i + 1) % n]))
            })
            .collect();

        if edges.is_empty() {
            return;
        }

        let (min_y, max_y) = edges.iter().fold((f32::MAX, f32::MIN), |(lo, hi), (a, b)| {
            (lo.min(a.y).min(b.y), hi.max(a.y).max(b.y))
        });

        let row_start = min_y.floor().max(0.0) as u32;
        let row_end = (max_y.ceil().max(0.0) as u32).min(self.height);
        let mut crossings: Vec<f32> = Vec::new();

        for row in row_start..row_end {
            let sample_y = row as f32 + 0.5;
            crossings.clear();

            for (a, b) in &edges {
                if (a.y <= sample_y) != (b.y <= sample_y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                // Pixel centers inside [span[0], span[1])
                let start = (span[0] - 0.5).ceil().clamp(0.0, self.width as f32) as u32;
                let end = (span[1] - 0.5).ceil().clamp(0.0, self.width as f32) as u32;
                let row_offset = self.index(0, row);
                for x in start..end {
                    self.mask[row_offset + x as usize] = true;
                }
            }
        }
    }

    fn cover_disc(&mut self, center: Vec2, radius: f32) {
        let r_sq = radius * radius;
        let x0 = (center.x - radius).floor().max(0.0) as u32;
        let y0 = (center.y - radius).floor().max(0.0) as u32;
        let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(self.width);
        let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r_sq {
                    let index = self.index(x, y);
                    self.mask[index] = true;
                }
            }
        }
    }

    fn cover_segment(&mut self, a: Vec2, b: Vec2, radius: f32) {
        let steps = ((b - a).length().ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.cover_disc(a.lerp(b, t), radius);
        }
    }

    fn cover_stroke(&mut self) {
        let radius = (self.stroke_width * 0.5).max(MIN_STROKE_RADIUS);
        let path = std::mem::take(&mut self.path);
        // Discs centered outside this rectangle can't reach a pixel
        let reach_min = Vec2::splat(-radius);
        let reach_max = Vec2::new(self.width as f32, self.height as f32) + radius;

        let stamp = |canvas: &mut Self, a: Vec2, b: Vec2| {
            if let Some((a, b)) = clip_segment(a, b, reach_min, reach_max) {
                canvas.cover_segment(a, b, radius);
            }
        };

        for subpath in &path {
            for pair in subpath.points.windows(2) {
                stamp(self, pair[0], pair[1]);
            }
            if subpath.closed && subpath.points.len() > 2 {
                if let (Some(&last), Some(&first)) = (subpath.points.last(), subpath.points.first()) {
                    stamp(self, last, first);
                }
            }
        }

        self.path = path;
    }
}

/// Part of segment `a..b` inside the rectangle `min..max` (Liang-Barsky),
/// `None` when it misses or an endpoint isn't finite
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !a.is_finite() || !b.is_finite() {
        return None;
    }

    let d = b - a;
    let (mut t0, mut t1) = (0.0f32, 1.0f32);

    for (p, q) in [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ] {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else if r < t0 {
            return None;
        } else {
            t1 = t1.min(r);
        }
    }

    Some((a + d * t0, a + d * t1))
}

impl DrawContext for Canvas {
    fn move_to(&mut self, point: Vec2) {
        self.path.push(Subpath {
            points: vec![point],
            closed: false,
        });
    }

    fn line_to(&mut self, point: Vec2) {
        match self.path.last_mut() {
            Some(subpath) if !subpath.closed => subpath.points.push(point),
            _ => self.move_to(point),
        }
    }

    fn close_path(&mut self) {
        if let Some(subpath) = self.path.last_mut() {
            subpath.closed = true;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width.max(0.0);
    }

    fn fill_and_stroke(&mut self) {
        self.cover_fill();
        self.flush_mask(self.fill_color);

        if self.stroke_width > 0.0 {
            self.cover_stroke();
            self.flush_mask(self.stroke_color);
        }

        self.path.clear();
    }
}
