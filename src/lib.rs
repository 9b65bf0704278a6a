//! # TFT sketch interpreter
//!
//! Runs the drawing subset of Arduino TFT sketches against a raster.
//!
//! A sketch is plain text, one statement per line:
//! ```text
//! int margin = 10;
//! tft.fillScreen(TFT_BLACK);
//! tft.fillRect(margin, margin, WIDTH - 2 * margin, 50, TFT_BLUE);
//! tft.setTextColor(TFT_WHITE);
//! tft.setCursor(margin, 80);
//! tft.println("Hello");
//! ```
//! `WIDTH` and `HEIGHT` are replaced by the surface dimensions before the
//! sketch runs. Lines that fail are reported and skipped, the rest still
//! draw.
//!
//! ```
//! let mut canvas = tft::mach::Canvas::new(240, 320);
//! let errors = tft::parse("tft.fillScreen(TFT_RED);", 240, 320, &mut canvas);
//! assert!(errors.is_empty());
//! assert_eq!(canvas.pixel(0, 0), Some(tft::mach::Color::rgb(255, 0, 0)));
//! ```

pub mod lang;
pub mod mach;

use mach::{Painter, Runtime};

/// Runs `source` against `painter`, a surface of `width` by `height`
/// pixels, and returns one diagnostic per failing line in source order.
pub fn parse<P: Painter + ?Sized>(
    source: &str,
    width: u32,
    height: u32,
    painter: &mut P,
) -> Vec<String> {
    Runtime::new(width, height)
        .run(source, painter)
        .iter()
        .map(|error| error.to_string())
        .collect()
}
