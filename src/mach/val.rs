use super::color::COLOR_PREFIX;
use super::{eval, Var};
use std::rc::Rc;

/// A resolved call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    Text(Rc<str>),
    Color(Rc<str>),
}

impl Val {
    /// Classifies one trimmed argument token, first match wins:
    /// quoted string, color constant, hex literal, arithmetic expression
    /// (falling back to a plain number), plain number, declared variable.
    /// Anything else stays opaque text.
    pub fn resolve(token: &str, var: &Var) -> Val {
        if let Some(text) = unquote(token) {
            return Val::Text(text.into());
        }
        if token.starts_with(COLOR_PREFIX) {
            return Val::Color(token.into());
        }
        if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
            if let Ok(n) = i64::from_str_radix(hex, 16) {
                return Val::Number(n as f64);
            }
        }
        if token.contains(|c| matches!(c, '+' | '-' | '*' | '/' | '(' | ')')) {
            if let Ok(n) = eval::evaluate_str(token, var) {
                return Val::Number(n);
            }
        }
        if let Some(n) = parse_number(token) {
            return Val::Number(n);
        }
        match var.fetch(token) {
            Some(n) => Val::Number(n),
            None => Val::Text(token.into()),
        }
    }

    /// Text as a sketch would print it: numbers in shortest decimal form.
    pub fn to_text(&self) -> String {
        match self {
            Val::Text(s) | Val::Color(s) => s.to_string(),
            Val::Number(n) => format_number(*n),
        }
    }
}

fn unquote(token: &str) -> Option<&str> {
    let first = token.chars().next()?;
    if (first == '"' || first == '\'') && token.len() >= 2 && token.ends_with(first) {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

fn parse_number(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' => {}
        _ => return None,
    }
    if !token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
    {
        return None;
    }
    token.parse::<f64>().ok()
}

pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
