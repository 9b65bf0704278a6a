/*!
## Rust Machine Module

This Rust module runs TFT sketches. It resolves arguments, keeps the
variable environment and text state, and issues primitive paint calls
to a [`Painter`](trait.Painter.html).

*/

mod canvas;
mod color;
mod command;
mod eval;
mod font;
mod painter;
mod runtime;
mod shape;
mod stack;
mod val;
mod var;

pub use canvas::Canvas;
pub use color::{lookup as lookup_color, Color, COLOR_PREFIX};
pub use command::Command;
pub use eval::{evaluate, evaluate_str};
pub use painter::Painter;
pub use runtime::{Cursor, Runtime, BASE_FONT_SIZE, CHAR_ADVANCE};
pub use shape::{Path, PathEl, Point, Polyline};
pub use stack::Stack;
pub use val::{format_number, Val};
pub use var::Var;
