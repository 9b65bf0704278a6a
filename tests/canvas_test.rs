mod common;
use common::*;
use tft::mach::Canvas;

fn white_bounds(canvas: &Canvas) -> Option<(i64, i64, i64, i64)> {
    let mut bounds: Option<(i64, i64, i64, i64)> = None;
    for y in 0..canvas.height() as i64 {
        for x in 0..canvas.width() as i64 {
            if canvas.pixel(x, y) == Some(WHITE) {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }
    bounds
}

#[test]
fn test_fill_screen_covers_everything() {
    let (canvas, errors) = paint("tft.fillScreen(TFT_RED);", 240, 320);
    assert!(errors.is_empty());
    assert_eq!(canvas.count(RED), 240 * 320);
}

#[test]
fn test_fill_rect_region() {
    let (canvas, errors) = paint(
        "int margin = 10;\ntft.fillRect(margin, margin, WIDTH - 2*margin, 50, TFT_BLUE);",
        100,
        100,
    );
    assert!(errors.is_empty());
    assert_eq!(canvas.count(BLUE), 80 * 50);
    assert_eq!(canvas.pixel(10, 10), Some(BLUE));
    assert_eq!(canvas.pixel(89, 59), Some(BLUE));
    assert_eq!(canvas.pixel(90, 10), Some(BLACK));
    assert_eq!(canvas.pixel(10, 60), Some(BLACK));
}

#[test]
fn test_clipping() {
    let (canvas, _) = paint("tft.fillRect(-10, -10, 20, 20, TFT_RED);\ntft.drawLine(-50, 5, 500, 5, TFT_GREEN);", 30, 30);
    assert_eq!(canvas.count(GREEN), 30);
    assert_eq!(canvas.count(RED), 10 * 10 - 10);
}

#[test]
fn test_rect_outline() {
    let (canvas, _) = paint("tft.drawRect(0, 0, 10, 10, TFT_RED);", 20, 20);
    assert_eq!(canvas.count(RED), 36);
    assert_eq!(canvas.pixel(5, 5), Some(BLACK));
    assert_eq!(canvas.pixel(9, 9), Some(RED));
}

#[test]
fn test_circle() {
    let (canvas, _) = paint("tft.fillCircle(50, 50, 10, TFT_RED);", 100, 100);
    assert_eq!(canvas.pixel(50, 50), Some(RED));
    assert_eq!(canvas.pixel(60, 50), Some(RED));
    assert_eq!(canvas.pixel(61, 50), Some(BLACK));
    assert_eq!(canvas.pixel(57, 57), Some(RED));
    assert_eq!(canvas.pixel(58, 58), Some(BLACK));
}

#[test]
fn test_circle_outline_is_hollow() {
    let (canvas, _) = paint("tft.drawCircle(50, 50, 10, TFT_RED);", 100, 100);
    assert_eq!(canvas.pixel(50, 50), Some(BLACK));
    assert_eq!(canvas.pixel(60, 50), Some(RED));
    assert_eq!(canvas.pixel(50, 40), Some(RED));
}

#[test]
fn test_triangle() {
    let (canvas, _) = paint("tft.fillTriangle(0, 0, 20, 0, 0, 20, TFT_GREEN);", 30, 30);
    assert_eq!(canvas.pixel(2, 2), Some(GREEN));
    assert_eq!(canvas.pixel(18, 18), Some(BLACK));
    assert_eq!(canvas.pixel(25, 1), Some(BLACK));
}

#[test]
fn test_text_stays_in_its_cells() {
    let (canvas, errors) = paint("tft.setCursor(10, 20);\ntft.println(\"Hi\");", 64, 64);
    assert!(errors.is_empty());
    let (x0, y0, x1, y1) = white_bounds(&canvas).expect("text drew nothing");
    assert!(x0 >= 10 && x1 < 10 + 2 * 6);
    assert!(y0 >= 20 && y1 < 20 + 8);
}

#[test]
fn test_text_scales() {
    let (canvas, _) = paint("tft.setTextSize(3);\ntft.drawString(\"I\", 0, 0);", 64, 64);
    let (_, _, x1, y1) = white_bounds(&canvas).expect("text drew nothing");
    assert!(x1 < 18 && x1 >= 6);
    assert!(y1 < 24 && y1 >= 8);
}

#[test]
fn test_non_finite_is_ignored() {
    let (canvas, errors) = paint("float z = 1 / 0;\ntft.fillRect(z, 0, 5, 5, TFT_RED);\ntft.fillCircle(5, 5, z, TFT_RED);", 10, 10);
    assert!(errors.is_empty());
    assert_eq!(canvas.count(RED), 0);
}

#[test]
fn test_later_draws_overwrite() {
    let (canvas, _) = paint("tft.fillScreen(TFT_RED);\ntft.fillRect(0, 0, 2, 2, TFT_BLUE);", 4, 4);
    assert_eq!(canvas.count(BLUE), 4);
    assert_eq!(canvas.count(RED), 12);
}

#[test]
fn test_ppm() {
    let (canvas, _) = paint("tft.fillScreen(TFT_GREEN);", 4, 2);
    let ppm = canvas.to_ppm();
    let header = b"P6\n4 2\n255\n";
    assert_eq!(&ppm[..header.len()], header);
    assert_eq!(ppm.len(), header.len() + 4 * 2 * 3);
    assert_eq!(&ppm[header.len()..header.len() + 3], &[0, 255, 0]);
}
