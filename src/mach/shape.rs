//! Outlines handed to a [`Painter`](super::Painter) for fill or stroke.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEl {
    MoveTo(Point),
    LineTo(Point),
    /// Control point, then end point.
    QuadTo(Point, Point),
    Close,
}

/// Segment count used when flattening one quadratic curve.
const CURVE_SEGMENTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: Vec<PathEl>,
}

/// A flattened subpath.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl Path {
    pub fn new() -> Path {
        Path::default()
    }

    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.elements.push(PathEl::MoveTo(Point::new(x, y)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.elements.push(PathEl::LineTo(Point::new(x, y)));
    }

    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.elements
            .push(PathEl::QuadTo(Point::new(cx, cy), Point::new(x, y)));
    }

    pub fn close(&mut self) {
        self.elements.push(PathEl::Close);
    }

    /// A closed polygon through `points`.
    pub fn polygon(points: &[Point]) -> Path {
        let mut path = Path::new();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            path.move_to(first.x, first.y);
            for p in iter {
                path.line_to(p.x, p.y);
            }
            path.close();
        }
        path
    }

    /// Rectangle whose corners are replaced by quarter rounds of radius `r`.
    /// Each straight edge runs between tangent points; each corner is a
    /// curve controlled by the corner itself into the next tangent point.
    pub fn rounded_rect(x: f64, y: f64, w: f64, h: f64, r: f64) -> Path {
        let mut path = Path::new();
        path.move_to(x + r, y);
        path.line_to(x + w - r, y);
        path.quad_to(x + w, y, x + w, y + r);
        path.line_to(x + w, y + h - r);
        path.quad_to(x + w, y + h, x + w - r, y + h);
        path.line_to(x + r, y + h);
        path.quad_to(x, y + h, x, y + h - r);
        path.line_to(x, y + r);
        path.quad_to(x, y, x + r, y);
        path.close();
        path
    }

    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => p.is_finite(),
            PathEl::QuadTo(c, p) => c.is_finite() && p.is_finite(),
            PathEl::Close => true,
        })
    }

    pub fn flatten(&self) -> Vec<Polyline> {
        let mut lines: Vec<Polyline> = vec![];
        let mut current: Vec<Point> = vec![];
        let finish = |current: &mut Vec<Point>, lines: &mut Vec<Polyline>, closed: bool| {
            if !current.is_empty() {
                lines.push(Polyline {
                    points: std::mem::take(current),
                    closed,
                });
            }
        };
        for el in &self.elements {
            match *el {
                PathEl::MoveTo(p) => {
                    finish(&mut current, &mut lines, false);
                    current.push(p);
                }
                PathEl::LineTo(p) => current.push(p),
                PathEl::QuadTo(c, p) => {
                    let start = current.last().copied().unwrap_or(c);
                    for i in 1..=CURVE_SEGMENTS {
                        let t = i as f64 / CURVE_SEGMENTS as f64;
                        let mt = 1.0 - t;
                        current.push(Point::new(
                            mt * mt * start.x + 2.0 * mt * t * c.x + t * t * p.x,
                            mt * mt * start.y + 2.0 * mt * t * c.y + t * t * p.y,
                        ));
                    }
                }
                PathEl::Close => finish(&mut current, &mut lines, true),
            }
        }
        finish(&mut current, &mut lines, false);
        lines
    }
}
