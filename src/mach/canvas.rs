use super::font::{self, CELL_HEIGHT, CELL_WIDTH};
use super::shape::Point;
use super::{Color, Painter, Path};

const EPSILON: f64 = 1e-9;

/// ## In-memory RGB raster
///
/// Starts black. Rectangles and paths cover the pixels whose centers fall
/// inside them; ellipses cover the integer lattice points inside them,
/// matching how the display library draws circles.

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn px(v: f64) -> i64 {
    v.round() as i64
}

fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for p in self.pixels.iter_mut() {
            *p = color;
        }
    }

    pub fn pixel(&self, x: i64, y: i64) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Number of pixels currently holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }

    /// Binary PPM (P6) image of the raster.
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.reserve(self.pixels.len() * 3);
        for c in &self.pixels {
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }

    fn set(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        }
    }

    // Half-open on both axes.
    fn block(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let (x0, x1) = (x0.max(0), x1.min(self.width as i64));
        let (y0, y1) = (y0.max(0), y1.min(self.height as i64));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let width = self.width as usize;
        for y in y0 as usize..y1 as usize {
            let row = y * width;
            for p in &mut self.pixels[row + x0 as usize..row + x1 as usize] {
                *p = color;
            }
        }
    }

    fn span(&mut self, y: i64, x0: i64, x1: i64, color: Color) {
        self.block(x0, y, x1, y.saturating_add(1), color)
    }

    fn clip_line(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Option<(f64, f64, f64, f64)> {
        let (xmin, ymin) = (-1.0, -1.0);
        let (xmax, ymax) = (self.width as f64, self.height as f64);
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [(-dx, x0 - xmin), (dx, xmax - x0), (-dy, y0 - ymin), (dy, ymax - y0)] {
            if p == 0.0 {
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
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        Some((x0 + t0 * dx, y0 + t0 * dy, x0 + t1 * dx, y0 + t1 * dy))
    }

    fn ellipse_span(cx: f64, cy: f64, rx: f64, ry: f64, py: i64) -> Option<(i64, i64)> {
        let dy = (py as f64 - cy) / ry;
        let t = 1.0 - dy * dy;
        if t < -EPSILON {
            return None;
        }
        let half = rx * t.max(0.0).sqrt();
        let xa = (cx - half - EPSILON).ceil() as i64;
        let xb = (cx + half + EPSILON).floor() as i64;
        if xa <= xb {
            Some((xa, xb))
        } else {
            None
        }
    }

    fn ellipse_rows(&self, cy: f64, ry: f64) -> std::ops::RangeInclusive<i64> {
        let y0 = ((cy - ry).ceil() as i64).max(0);
        let y1 = ((cy + ry).floor() as i64).min(self.height as i64 - 1);
        y0..=y1
    }
}

impl Painter for Canvas {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if !finite(&[x, y, w, h]) {
            return;
        }
        let (x0, x1) = ordered(px(x), px(x + w));
        let (y0, y1) = ordered(px(y), px(y + h));
        self.block(x0, y0, x1, y1, color);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        if !finite(&[x, y, w, h]) {
            return;
        }
        let (x0, x1) = ordered(px(x), px(x + w));
        let (y0, y1) = ordered(px(y), px(y + h));
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        self.span(y0, x0, x1, color);
        self.span(y1 - 1, x0, x1, color);
        self.block(x0, y0, x0 + 1, y1, color);
        self.block(x1 - 1, y0, x1, y1, color);
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        if !path.is_finite() {
            return;
        }
        let mut edges: Vec<(Point, Point)> = vec![];
        for polyline in path.flatten() {
            let points = &polyline.points;
            if points.len() < 2 {
                continue;
            }
            for pair in points.windows(2) {
                edges.push((pair[0], pair[1]));
            }
            edges.push((points[points.len() - 1], points[0]));
        }
        if edges.is_empty() {
            return;
        }
        let ymin = edges
            .iter()
            .map(|(a, b)| a.y.min(b.y))
            .fold(f64::INFINITY, f64::min);
        let ymax = edges
            .iter()
            .map(|(a, b)| a.y.max(b.y))
            .fold(f64::NEG_INFINITY, f64::max);
        let y0 = ((ymin - 0.5).ceil() as i64).max(0);
        let y1 = ((ymax - 0.5).ceil() as i64).min(self.height as i64);
        let mut xs: Vec<f64> = vec![];
        for py in y0..y1 {
            let yc = py as f64 + 0.5;
            xs.clear();
            for (a, b) in &edges {
                if (a.y <= yc) != (b.y <= yc) {
                    xs.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            xs.sort_by(f64::total_cmp);
            for pair in xs.chunks_exact(2) {
                let xa = (pair[0] - 0.5).ceil() as i64;
                let xb = (pair[1] - 0.5).ceil() as i64;
                self.span(py, xa, xb, color);
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, color: Color) {
        if !path.is_finite() {
            return;
        }
        for polyline in path.flatten() {
            let points = &polyline.points;
            if points.len() == 1 {
                self.line(points[0].x, points[0].y, points[0].x, points[0].y, color);
            }
            for pair in points.windows(2) {
                self.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
            }
            if polyline.closed && points.len() > 2 {
                let (first, last) = (points[0], points[points.len() - 1]);
                self.line(last.x, last.y, first.x, first.y, color);
            }
        }
    }

    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
        if !finite(&[cx, cy, rx, ry]) || rx < 0.0 || ry < 0.0 {
            return;
        }
        if rx == 0.0 || ry == 0.0 {
            self.line(cx - rx, cy - ry, cx + rx, cy + ry, color);
            return;
        }
        for py in self.ellipse_rows(cy, ry) {
            if let Some((xa, xb)) = Canvas::ellipse_span(cx, cy, rx, ry, py) {
                self.span(py, xa, xb + 1, color);
            }
        }
    }

    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
        if !finite(&[cx, cy, rx, ry]) || rx < 0.0 || ry < 0.0 {
            return;
        }
        if rx == 0.0 || ry == 0.0 {
            self.line(cx - rx, cy - ry, cx + rx, cy + ry, color);
            return;
        }
        let contains = |span: Option<(i64, i64)>, x: i64| match span {
            Some((a, b)) => a <= x && x <= b,
            None => false,
        };
        for py in self.ellipse_rows(cy, ry) {
            let (xa, xb) = match Canvas::ellipse_span(cx, cy, rx, ry, py) {
                Some(span) => span,
                None => continue,
            };
            let above = Canvas::ellipse_span(cx, cy, rx, ry, py - 1);
            let below = Canvas::ellipse_span(cx, cy, rx, ry, py + 1);
            for x in xa.max(0)..=xb.min(self.width as i64 - 1) {
                if x == xa || x == xb || !contains(above, x) || !contains(below, x) {
                    self.set(x, py, color);
                }
            }
        }
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        if !finite(&[x0, y0, x1, y1]) {
            return;
        }
        let (x0, y0, x1, y1) = match self.clip_line(x0, y0, x1, y1) {
            Some(clipped) => clipped,
            None => return,
        };
        let (mut x, mut y) = (px(x0), px(y0));
        let (x1, y1) = (px(x1), px(y1));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.set(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
        if !finite(&[x, y, size]) {
            return;
        }
        let scale = (px(size / CELL_HEIGHT as f64)).max(1);
        let (x0, y0) = (px(x), px(y));
        let advance = CELL_WIDTH.saturating_mul(scale);
        for (i, ch) in text.chars().enumerate() {
            let cx = x0.saturating_add((i as i64).saturating_mul(advance));
            if cx >= self.width as i64 {
                break;
            }
            for (col, bits) in font::glyph(ch).iter().enumerate() {
                for row in 0..CELL_HEIGHT {
                    if (*bits >> row) & 1 == 1 {
                        let gx = cx.saturating_add((col as i64).saturating_mul(scale));
                        let gy = y0.saturating_add(row.saturating_mul(scale));
                        self.block(gx, gy, gx.saturating_add(scale), gy.saturating_add(scale), color);
                    }
                }
            }
        }
    }
}
