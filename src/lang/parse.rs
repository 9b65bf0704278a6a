use super::{ast::*, token::*, Column, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

// Bounds keep the tree shallow enough for recursive evaluation and drop.
const MAX_NESTING: usize = 100;
const MAX_OPERATORS: usize = 1000;

pub fn parse(tokens: &[Token]) -> Result<Expression> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    nesting: usize,
    operators: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Expression> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            nesting: 0,
            operators: 0,
        };
        let expr = match parse.expression() {
            Ok(expr) => expr,
            Err(e) => return Err(e.in_column(&parse.col)),
        };
        match parse.next() {
            None => Ok(expr),
            Some(_) => Err(error!(SyntaxError, ..&parse.col; "UNEXPECTED TOKEN")),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn enter(&mut self) -> Result<()> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING {
            return Err(error!(SyntaxError; "EXPRESSION TOO COMPLEX"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn operator(&mut self) -> Result<()> {
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(error!(SyntaxError; "EXPRESSION TOO COMPLEX"));
        }
        Ok(())
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    this.enter()?;
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    this.leave();
                    expr
                }
                Some(Token::Operator(Operator::Minus)) => {
                    let column = this.column();
                    this.enter()?;
                    this.operator()?;
                    let expr = parse(this, Expression::UNARY_PRECEDENCE)?;
                    this.leave();
                    Expression::Negation(column, Box::new(expr))
                }
                Some(Token::Operator(Operator::Plus)) => {
                    this.enter()?;
                    let expr = parse(this, Expression::UNARY_PRECEDENCE)?;
                    this.leave();
                    expr
                }
                Some(Token::Ident(i)) => Expression::Var(this.column(), i.as_str().into()),
                Some(Token::Literal(l)) => Expression::for_literal(this.column(), l)?,
                _ => return Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
            };
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => *op,
                    _ => break,
                };
                let op_precedence = Expression::op_precedence(&op);
                if op_precedence < precedence {
                    break;
                }
                this.next();
                this.operator()?;
                let column = this.column();
                let rhs = parse(this, op_precedence + 1)?;
                lhs = Expression::for_binary_op(column, &op, lhs, rhs);
            }
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError;
            match token {
                Unknown(_) | Whitespace(_) => "UNEXPECTED TOKEN",
                Literal(_) => "EXPECTED LITERAL",
                Operator(_) => "EXPECTED OPERATOR",
                Ident(_) => "EXPECTED IDENTIFIER",
                LParen => "EXPECTED LEFT PARENTHESIS",
                RParen => "EXPECTED RIGHT PARENTHESIS",
            }
        ))
    }
}

impl Expression {
    const UNARY_PRECEDENCE: usize = 30;

    fn for_binary_op(col: Column, op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
        }
    }

    fn op_precedence(op: &Operator) -> usize {
        use Operator::*;
        match op {
            Plus | Minus => 10,
            Multiply | Divide => 20,
        }
    }

    fn for_literal(col: Column, lit: &Literal) -> Result<Expression> {
        let number = match lit {
            Literal::Decimal(s) => s.parse::<f64>().ok(),
            Literal::Hex(s) => i64::from_str_radix(&s[2..], 16).ok().map(|n| n as f64),
        };
        match number {
            Some(n) => Ok(Expression::Number(col, n)),
            None => Err(error!(SyntaxError; "INVALID NUMBER")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::*;

    fn parse_str(s: &str) -> Expression {
        match parse(&lex(s)) {
            Ok(expr) => expr,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse_str("12"), Expression::Number(0..2, 12.0));
        assert_eq!(parse_str("1.5e1"), Expression::Number(0..5, 15.0));
        assert_eq!(parse_str("0x1F"), Expression::Number(0..4, 31.0));
    }

    #[test]
    fn test_precedence_and_paren() {
        let answer = Expression::Subtract(
            1..2,
            Box::new(Expression::Number(0..1, 2.0)),
            Box::new(Expression::Multiply(
                7..8,
                Box::new(Expression::Add(
                    4..5,
                    Box::new(Expression::Number(3..4, 3.0)),
                    Box::new(Expression::Var(5..6, "a".into())),
                )),
                Box::new(Expression::Number(8..9, 4.0)),
            )),
        );
        assert_eq!(parse_str("2-(3+a)*4"), answer);
    }

    #[test]
    fn test_left_assoc() {
        let answer = Expression::Subtract(
            3..4,
            Box::new(Expression::Subtract(
                1..2,
                Box::new(Expression::Number(0..1, 8.0)),
                Box::new(Expression::Number(2..3, 4.0)),
            )),
            Box::new(Expression::Number(4..5, 2.0)),
        );
        assert_eq!(parse_str("8-4-2"), answer);
    }

    #[test]
    fn test_unary_minus() {
        let answer = Expression::Multiply(
            2..3,
            Box::new(Expression::Negation(
                0..1,
                Box::new(Expression::Var(1..2, "x".into())),
            )),
            Box::new(Expression::Number(3..4, 2.0)),
        );
        assert_eq!(parse_str("-x*2"), answer);
    }

    #[test]
    fn test_errors() {
        let e = parse(&lex("10 + * 2")).unwrap_err();
        assert!(e.to_string().contains("EXPECTED EXPRESSION"));
        assert_eq!(e.column(), 5..6);
        let e = parse(&lex("(1 + 2")).unwrap_err();
        assert!(e.to_string().contains("EXPECTED RIGHT PARENTHESIS"));
        let e = parse(&lex("1 2")).unwrap_err();
        assert!(e.to_string().contains("UNEXPECTED TOKEN"));
        assert!(parse(&lex("")).is_err());
    }

    #[test]
    fn test_too_complex() {
        let nested = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        let e = parse(&lex(&nested)).unwrap_err();
        assert!(e.to_string().contains("EXPRESSION TOO COMPLEX"));
        let e = parse(&lex(&"-".repeat(10_000))).unwrap_err();
        assert!(e.to_string().contains("EXPRESSION TOO COMPLEX"));
        let sum = vec!["1"; 100_000].join("+");
        let e = parse(&lex(&sum)).unwrap_err();
        assert!(e.to_string().contains("EXPRESSION TOO COMPLEX"));
        let within = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse_str(&within), Expression::Number(100..101, 1.0));
        let sum = vec!["1"; 1000].join("+");
        assert!(parse(&lex(&sum)).is_ok());
    }
}
