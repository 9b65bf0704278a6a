use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    ExprLexer {
        chars: s.chars().peekable(),
    }
    .collect()
}

fn is_expr_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_expr_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        loop {
            self.chars().next();
            len += 1;
            if let Some(pk) = self.chars().peek() {
                if is_expr_whitespace(*pk) {
                    continue;
                }
            }
            return Some(Token::Whitespace(len));
        }
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        let mut exp = false;
        loop {
            let ch = self.chars().next()?;
            s.push(ch);
            if s == "0" {
                if let Some('x') | Some('X') = self.chars().peek() {
                    return self.hex(s);
                }
            }
            if ch == '.' {
                decimal = true;
            }
            if let Some(pk) = self.chars().peek() {
                if ch == 'e' || ch == 'E' {
                    if *pk == '+' || *pk == '-' {
                        continue;
                    }
                }
                if is_expr_digit(*pk) {
                    continue;
                }
                if !decimal && !exp && *pk == '.' {
                    continue;
                }
                if !exp && (*pk == 'e' || *pk == 'E') {
                    exp = true;
                    continue;
                }
            }
            break;
        }
        Some(Token::Literal(Literal::Decimal(s)))
    }

    fn hex(&mut self, mut s: String) -> Option<Token> {
        if let Some(x) = self.chars().next() {
            s.push(x);
        }
        while let Some(pk) = self.chars().peek() {
            if !pk.is_ascii_hexdigit() {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Literal(Literal::Hex(s)))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if !is_ident_char(*pk) {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Ident(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        if let Some(t) = Token::from_char(ch) {
            return Some(t);
        }
        let mut s = String::from(ch);
        while let Some(pk) = self.chars().peek() {
            if is_ident_char(*pk) || is_expr_whitespace(*pk) || Token::from_char(*pk).is_some() {
                break;
            }
            s.push(*pk);
            self.chars().next();
        }
        Some(Token::Unknown(s))
    }
}

struct ExprLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for ExprLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for ExprLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_expr_whitespace(pk) {
            return self.whitespace();
        }
        if is_expr_digit(pk) || pk == '.' {
            return self.number();
        }
        if is_ident_start(pk) {
            return self.alphabetic();
        }
        self.minutia()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(s: &str) -> Token {
        Token::Literal(Literal::Decimal(s.to_string()))
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            lex("10+margin*2"),
            vec![
                decimal("10"),
                Token::Operator(Operator::Plus),
                Token::Ident("margin".to_string()),
                Token::Operator(Operator::Multiply),
                decimal("2"),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(lex("1.5e-3"), vec![decimal("1.5e-3")]);
        assert_eq!(lex(".25"), vec![decimal(".25")]);
        assert_eq!(
            lex("0xF800"),
            vec![Token::Literal(Literal::Hex("0xF800".to_string()))]
        );
        assert_eq!(
            lex("3-1"),
            vec![decimal("3"), Token::Operator(Operator::Minus), decimal("1")]
        );
    }

    #[test]
    fn test_whitespace_and_unknown() {
        assert_eq!(
            lex("( 2 )%"),
            vec![
                Token::LParen,
                Token::Whitespace(1),
                decimal("2"),
                Token::Whitespace(1),
                Token::RParen,
                Token::Unknown("%".to_string()),
            ]
        );
    }
}
