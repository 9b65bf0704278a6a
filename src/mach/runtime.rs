use super::shape::Point;
use super::{eval, Color, Command, Painter, Path, Val, Var};
use crate::error;
use crate::lang::{ast::Statement, substitute_dimensions, Error, Line};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Font height in pixels at text size 1.
pub const BASE_FONT_SIZE: f64 = 8.0;

/// Horizontal advance per character at text size 1.
pub const CHAR_ADVANCE: f64 = 6.0;

const MIN_TEXT_SIZE: i64 = 1;
const MAX_TEXT_SIZE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

/// ## Sketch runtime
///
/// Holds the state of one run: variables, text cursor and text style.
/// Every call to [`Runtime::run`] starts from a fresh state.

#[derive(Debug)]
pub struct Runtime {
    width: u32,
    height: u32,
    var: Var,
    cursor: Cursor,
    text_color: Color,
    text_size: u8,
}

impl Runtime {
    pub fn new(width: u32, height: u32) -> Runtime {
        Runtime {
            width,
            height,
            var: Var::new(),
            cursor: Cursor::default(),
            text_color: Color::WHITE,
            text_size: 1,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn var(&self) -> &Var {
        &self.var
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn text_size(&self) -> u8 {
        self.text_size
    }

    fn reset(&mut self) {
        self.var.clear();
        self.cursor = Cursor::default();
        self.text_color = Color::WHITE;
        self.text_size = 1;
    }

    /// Runs a whole sketch against `painter`.
    ///
    /// A failing line never stops the run; its error is returned tagged with
    /// the 1-based source line, in source order.
    pub fn run<P: Painter + ?Sized>(&mut self, source: &str, painter: &mut P) -> Vec<Error> {
        self.reset();
        let source = substitute_dimensions(source, self.width, self.height);
        let mut errors: Vec<Error> = vec![];
        for line in Line::from_source(&source) {
            if let Err(error) = self.line(&line, painter) {
                let error = error.in_line_number(Some(line.number()));
                debug!("{}", error);
                errors.push(error);
            }
        }
        errors
    }

    fn line<P: Painter + ?Sized>(&mut self, line: &Line, painter: &mut P) -> Result<()> {
        match line.statement() {
            None => {
                trace!(line = line.number(), "inert: {}", line);
                Ok(())
            }
            Some(Statement::Declare(var_type, name, init)) => {
                let value = eval::evaluate_str(&init, &self.var)?;
                debug!(line = line.number(), "{} {} = {}", var_type, name, value);
                self.var.declare(var_type, &name, value)
            }
            Some(Statement::Call(name, args)) => {
                let command = Command::check(&name, args.len())?;
                let args: Vec<Val> = args.iter().map(|arg| Val::resolve(arg, &self.var)).collect();
                debug!(line = line.number(), "{}{:?}", command, args);
                self.execute(command, &args, painter)
            }
        }
    }

    fn execute<P: Painter + ?Sized>(
        &mut self,
        command: Command,
        args: &[Val],
        painter: &mut P,
    ) -> Result<()> {
        let num = |i: usize| number(command, args, i);
        let color = |i: usize| Color::resolve(&args[i]);
        use Command::*;
        match command {
            Init | Begin => {}
            FillScreen => {
                painter.fill_rect(0.0, 0.0, self.width as f64, self.height as f64, color(0))
            }
            FillRect => painter.fill_rect(num(0)?, num(1)?, num(2)?, num(3)?, color(4)),
            DrawRect => painter.stroke_rect(num(0)?, num(1)?, num(2)?, num(3)?, color(4)),
            FillRoundRect => {
                let path = Path::rounded_rect(num(0)?, num(1)?, num(2)?, num(3)?, num(4)?);
                painter.fill_path(&path, color(5))
            }
            DrawRoundRect => {
                let path = Path::rounded_rect(num(0)?, num(1)?, num(2)?, num(3)?, num(4)?);
                painter.stroke_path(&path, color(5))
            }
            FillCircle => {
                let r = num(2)?;
                painter.fill_ellipse(num(0)?, num(1)?, r, r, color(3))
            }
            DrawCircle => {
                let r = num(2)?;
                painter.stroke_ellipse(num(0)?, num(1)?, r, r, color(3))
            }
            FillEllipse => painter.fill_ellipse(num(0)?, num(1)?, num(2)?, num(3)?, color(4)),
            DrawEllipse => painter.stroke_ellipse(num(0)?, num(1)?, num(2)?, num(3)?, color(4)),
            DrawLine => painter.line(num(0)?, num(1)?, num(2)?, num(3)?, color(4)),
            DrawFastHLine => painter.fill_rect(num(0)?, num(1)?, num(2)?, 1.0, color(3)),
            DrawFastVLine => painter.fill_rect(num(0)?, num(1)?, 1.0, num(2)?, color(3)),
            DrawPixel => painter.fill_rect(num(0)?, num(1)?, 1.0, 1.0, color(2)),
            FillTriangle | DrawTriangle => {
                let path = Path::polygon(&[
                    Point::new(num(0)?, num(1)?),
                    Point::new(num(2)?, num(3)?),
                    Point::new(num(4)?, num(5)?),
                ]);
                if command == FillTriangle {
                    painter.fill_path(&path, color(6))
                } else {
                    painter.stroke_path(&path, color(6))
                }
            }
            DrawString => {
                let text = args[0].to_text();
                painter.text(&text, num(1)?, num(2)?, self.font_size(), self.text_color)
            }
            SetTextColor => self.text_color = color(0),
            SetTextSize => self.text_size = clamp_text_size(num(0)?),
            SetCursor => {
                self.cursor = Cursor {
                    x: num(0)?,
                    y: num(1)?,
                }
            }
            Print => {
                let text = args[0].to_text();
                let Cursor { x, y } = self.cursor;
                painter.text(&text, x, y, self.font_size(), self.text_color);
                self.cursor.x +=
                    text.chars().count() as f64 * CHAR_ADVANCE * f64::from(self.text_size);
            }
            Println => {
                let text = args[0].to_text();
                let Cursor { x, y } = self.cursor;
                painter.text(&text, x, y, self.font_size(), self.text_color);
                self.cursor.y += self.font_size() * 1.5;
            }
        }
        trace!(command = command.name(), "painted");
        Ok(())
    }

    fn font_size(&self) -> f64 {
        BASE_FONT_SIZE * f64::from(self.text_size)
    }
}

fn number(command: Command, args: &[Val], i: usize) -> Result<f64> {
    match &args[i] {
        Val::Number(n) => Ok(*n),
        other => Err(error!(TypeMismatch;
            format!("{} argument {} expects a number, found '{}'", command, i + 1, other.to_text()))),
    }
}

// Truncates toward zero, then clamps; NaN lands on the minimum.
fn clamp_text_size(size: f64) -> u8 {
    (size as i64).clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE) as u8
}
