#![allow(dead_code)]
use tft::mach::{Canvas, Color, Painter, Path, Runtime};

/// One primitive call as seen by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FillRect(f64, f64, f64, f64, Color),
    StrokeRect(f64, f64, f64, f64, Color),
    FillPath(Path, Color),
    StrokePath(Path, Color),
    FillEllipse(f64, f64, f64, f64, Color),
    StrokeEllipse(f64, f64, f64, f64, Color),
    Line(f64, f64, f64, f64, Color),
    Text(String, f64, f64, f64, Color),
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Painter for Recorder {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.calls.push(Call::FillRect(x, y, w, h, color));
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.calls.push(Call::StrokeRect(x, y, w, h, color));
    }
    fn fill_path(&mut self, path: &Path, color: Color) {
        self.calls.push(Call::FillPath(path.clone(), color));
    }
    fn stroke_path(&mut self, path: &Path, color: Color) {
        self.calls.push(Call::StrokePath(path.clone(), color));
    }
    fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
        self.calls.push(Call::FillEllipse(cx, cy, rx, ry, color));
    }
    fn stroke_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, color: Color) {
        self.calls.push(Call::StrokeEllipse(cx, cy, rx, ry, color));
    }
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        self.calls.push(Call::Line(x0, y0, x1, y1, color));
    }
    fn text(&mut self, text: &str, x: f64, y: f64, size: f64, color: Color) {
        self.calls.push(Call::Text(text.to_string(), x, y, size, color));
    }
}

pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const WHITE: Color = Color::WHITE;
pub const BLACK: Color = Color::BLACK;

/// Runs `source` on a 240x320 recorder, returning calls and diagnostics.
pub fn record(source: &str) -> (Vec<Call>, Vec<String>) {
    record_on(source, 240, 320)
}

pub fn record_on(source: &str, width: u32, height: u32) -> (Vec<Call>, Vec<String>) {
    let mut recorder = Recorder::default();
    let errors = tft::parse(source, width, height, &mut recorder);
    (recorder.calls, errors)
}

/// Runs `source` on a fresh canvas.
pub fn paint(source: &str, width: u32, height: u32) -> (Canvas, Vec<String>) {
    let mut canvas = Canvas::new(width, height);
    let errors = tft::parse(source, width, height, &mut canvas);
    (canvas, errors)
}

/// Runs `source` and keeps the runtime around for state inspection.
pub fn run_state(source: &str) -> (Runtime, Vec<Call>) {
    let mut runtime = Runtime::new(240, 320);
    let mut recorder = Recorder::default();
    let errors = runtime.run(source, &mut recorder);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    (runtime, recorder.calls)
}
