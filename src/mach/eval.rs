use super::{color, Stack, Var};
use crate::error;
use crate::lang::ast::{self, AcceptVisitor, Expression};
use crate::lang::{lex, parse, Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// Lexes, parses and evaluates one expression.
///
/// Syntax errors come back as `InvalidExpression` naming the whole text.
pub fn evaluate_str(s: &str, var: &Var) -> Result<f64> {
    let expr = match parse(&lex(s)) {
        Ok(expr) => expr,
        Err(e) if e.is(ErrorCode::SyntaxError) => {
            return Err(error!(InvalidExpression, ..&e.column(); s.trim()))
        }
        Err(e) => return Err(e),
    };
    evaluate(&expr, var)
}

/// Division is plain floating point; dividing by zero yields infinity or NaN.
pub fn evaluate(expr: &Expression, var: &Var) -> Result<f64> {
    let mut this = Evaluator {
        var,
        stack: Stack::new("EXPRESSION TOO COMPLEX"),
        error: None,
    };
    expr.accept(&mut this);
    if let Some(error) = this.error {
        return Err(error);
    }
    let value = this.stack.pop()?;
    debug_assert!(this.stack.is_empty());
    Ok(value)
}

struct Evaluator<'a> {
    var: &'a Var,
    stack: Stack<f64>,
    error: Option<Error>,
}

impl<'a> Evaluator<'a> {
    fn expression(&mut self, expr: &Expression) -> Result<()> {
        fn binary(this: &mut Evaluator, op: fn(f64, f64) -> f64) -> Result<()> {
            let (lhs, rhs) = this.stack.pop_2()?;
            this.stack.push(op(lhs, rhs))
        }
        match expr {
            Expression::Number(_, n) => self.stack.push(*n),
            Expression::Var(col, name) => {
                let value = match self.var.fetch(name) {
                    Some(value) => value,
                    None => match color::lookup(name) {
                        Some(rgb565) => rgb565 as f64,
                        None => return Err(error!(UndefinedVariable, ..col; name.to_string())),
                    },
                };
                self.stack.push(value)
            }
            Expression::Negation(_, _) => {
                let n = self.stack.pop()?;
                self.stack.push(-n)
            }
            Expression::Multiply(..) => binary(self, |l, r| l * r),
            Expression::Divide(..) => binary(self, |l, r| l / r),
            Expression::Add(..) => binary(self, |l, r| l + r),
            Expression::Subtract(..) => binary(self, |l, r| l - r),
        }
    }
}

impl<'a> ast::Visitor for Evaluator<'a> {
    fn visit_expression(&mut self, expr: &Expression) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.expression(expr) {
            self.error = Some(error);
        }
    }
}
