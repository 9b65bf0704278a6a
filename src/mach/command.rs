use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Every `tft.<name>(...)` call the runtime understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Init,
    Begin,
    FillScreen,
    FillRect,
    DrawRect,
    FillRoundRect,
    DrawRoundRect,
    FillCircle,
    DrawCircle,
    FillEllipse,
    DrawEllipse,
    DrawLine,
    DrawFastHLine,
    DrawFastVLine,
    DrawPixel,
    FillTriangle,
    DrawTriangle,
    DrawString,
    SetTextColor,
    SetTextSize,
    SetCursor,
    Print,
    Println,
}

impl Command {
    pub const ALL: [Command; 23] = [
        Command::Init,
        Command::Begin,
        Command::FillScreen,
        Command::FillRect,
        Command::DrawRect,
        Command::FillRoundRect,
        Command::DrawRoundRect,
        Command::FillCircle,
        Command::DrawCircle,
        Command::FillEllipse,
        Command::DrawEllipse,
        Command::DrawLine,
        Command::DrawFastHLine,
        Command::DrawFastVLine,
        Command::DrawPixel,
        Command::FillTriangle,
        Command::DrawTriangle,
        Command::DrawString,
        Command::SetTextColor,
        Command::SetTextSize,
        Command::SetCursor,
        Command::Print,
        Command::Println,
    ];

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn name(&self) -> &'static str {
        use Command::*;
        match self {
            Init => "init",
            Begin => "begin",
            FillScreen => "fillScreen",
            FillRect => "fillRect",
            DrawRect => "drawRect",
            FillRoundRect => "fillRoundRect",
            DrawRoundRect => "drawRoundRect",
            FillCircle => "fillCircle",
            DrawCircle => "drawCircle",
            FillEllipse => "fillEllipse",
            DrawEllipse => "drawEllipse",
            DrawLine => "drawLine",
            DrawFastHLine => "drawFastHLine",
            DrawFastVLine => "drawFastVLine",
            DrawPixel => "drawPixel",
            FillTriangle => "fillTriangle",
            DrawTriangle => "drawTriangle",
            DrawString => "drawString",
            SetTextColor => "setTextColor",
            SetTextSize => "setTextSize",
            SetCursor => "setCursor",
            Print => "print",
            Println => "println",
        }
    }

    /// Minimum argument count. Extra arguments are ignored.
    pub fn arity(&self) -> usize {
        use Command::*;
        match self {
            Init | Begin => 0,
            FillScreen | SetTextColor | SetTextSize | Print | Println => 1,
            SetCursor => 2,
            DrawString | DrawPixel => 3,
            FillCircle | DrawCircle | DrawFastHLine | DrawFastVLine => 4,
            FillRect | DrawRect | DrawLine | FillEllipse | DrawEllipse => 5,
            FillRoundRect | DrawRoundRect => 6,
            FillTriangle | DrawTriangle => 7,
        }
    }

    /// Looks up `name` and checks that `len` arguments are enough.
    pub fn check(name: &str, len: usize) -> Result<Command> {
        let command = match Command::from_name(name) {
            Some(command) => command,
            None => return Err(error!(UnknownCommand; name)),
        };
        if len < command.arity() {
            return Err(error!(WrongArity;
                format!("{} requires {} arguments, got {}", name, command.arity(), len)));
        }
        Ok(command)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
