//! # tft
//!
//! Arduino TFT sketches in the terminal.
//!

mod term;

fn main() {
    term::main()
}
