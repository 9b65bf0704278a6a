use super::{Column, VarType};
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum Statement {
    Declare(VarType, Rc<str>, String),
    Call(String, Vec<String>),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(Column, f64),
    Var(Column, Rc<str>),
    Negation(Column, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
}

pub trait Visitor {
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Number(..) | Var(..) => {}
            Negation(_, expr) => expr.accept(visitor),
            Multiply(_, lhs, rhs)
            | Divide(_, lhs, rhs)
            | Add(_, lhs, rhs)
            | Subtract(_, lhs, rhs) => {
                lhs.accept(visitor);
                rhs.accept(visitor);
            }
        }
        visitor.visit_expression(self);
    }
}
