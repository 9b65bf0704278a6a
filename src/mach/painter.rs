use super::{Color, Path};

/// A raster surface the runtime draws onto.
///
/// Coordinates are pixels with the origin at the top left, x to the right
/// and y downward. Implementations must treat any non-finite coordinate as
/// a no-op and clip everything else to their bounds.
pub trait Painter {
    /// Fill the axis-aligned rectangle at (x, y) of size w by h.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    /// Outline the axis-aligned rectangle at (x, y) of size w by h.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    /// Fill the path using the even-odd rule.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke the path one pixel wide.
    fn stroke_path(&mut self, path: &Path, color: Color);

    /// Fill the ellipse centered at (cx, cy) with radii rx and ry.
    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color);

    /// Outline the ellipse centered at (cx, cy) with radii rx and ry.
    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color);

    /// Draw a straight segment including both end points.
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color);

    /// Draw text with its top left corner at (x, y); `size` is the font
    /// height in pixels.
    fn text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color);
}
