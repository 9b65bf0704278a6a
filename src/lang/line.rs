use super::args::{split_args, strip_comment};
use super::ast::Statement;
use super::lex::{is_ident_char, is_ident_start};
use super::VarType;

pub const WIDTH_SYMBOL: &str = "WIDTH";
pub const HEIGHT_SYMBOL: &str = "HEIGHT";
const RECEIVER: &str = "tft";

/// One source line that survived comment and blank filtering.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    text: String,
}

impl Line {
    pub fn new(number: usize, text: &str) -> Line {
        Line {
            number,
            text: text.to_string(),
        }
    }

    /// Splits a whole sketch into executable lines, numbered from 1.
    /// Lines starting with `//`, `/*` or `*` are comments.
    pub fn from_source(source: &str) -> Vec<Line> {
        source
            .lines()
            .enumerate()
            .filter_map(|(index, text)| {
                let trimmed = text.trim();
                if trimmed.is_empty()
                    || trimmed.starts_with("//")
                    || trimmed.starts_with("/*")
                    || trimmed.starts_with('*')
                {
                    None
                } else {
                    Some(Line::new(index + 1, trimmed))
                }
            })
            .collect()
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// Classifies the line. `None` means neither a declaration nor a call,
    /// which is not an error.
    pub fn statement(&self) -> Option<Statement> {
        let mut s = strip_comment(&self.text).trim();
        if let Some(stripped) = s.strip_suffix(';') {
            s = stripped.trim();
        }
        declaration(s).or_else(|| call(s))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Replaces every whole-word `WIDTH` and `HEIGHT` with the surface size.
/// This is plain text substitution: string literals and comments are
/// rewritten too.
pub fn substitute_dimensions(source: &str, width: u32, height: u32) -> String {
    let mut out = String::with_capacity(source.len());
    let mut word = String::new();
    let flush = |word: &mut String, out: &mut String| {
        match word.as_str() {
            WIDTH_SYMBOL => out.push_str(&width.to_string()),
            HEIGHT_SYMBOL => out.push_str(&height.to_string()),
            _ => out.push_str(word),
        }
        word.clear();
    };
    for ch in source.chars() {
        if is_ident_char(ch) {
            word.push(ch);
        } else {
            flush(&mut word, &mut out);
            out.push(ch);
        }
    }
    flush(&mut word, &mut out);
    out
}

fn split_ident(s: &str) -> Option<(&str, &str)> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, ch)) if is_ident_start(ch) => {}
        _ => return None,
    }
    let end = chars
        .find(|(_, ch)| !is_ident_char(*ch))
        .map(|(index, _)| index)
        .unwrap_or_else(|| s.len());
    Some((&s[..end], &s[end..]))
}

fn declaration(s: &str) -> Option<Statement> {
    let (mut keyword, mut rest) = split_ident(s)?;
    if keyword == "const" {
        let (next, after) = split_ident(rest.trim_start())?;
        keyword = next;
        rest = after;
    }
    let var_type = VarType::from_keyword(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let (name, rest) = split_ident(rest.trim_start())?;
    let init = rest.trim_start().strip_prefix('=')?.trim();
    if init.is_empty() {
        return None;
    }
    Some(Statement::Declare(var_type, name.into(), init.to_string()))
}

fn call(s: &str) -> Option<Statement> {
    let rest = s.strip_prefix(RECEIVER)?.strip_prefix('.')?;
    let (name, rest) = split_ident(rest)?;
    let inner = rest.trim_start().strip_prefix('(')?.strip_suffix(')')?;
    Some(Statement::Call(name.to_string(), split_args(inner)))
}
