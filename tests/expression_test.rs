use std::rc::Rc;
use tft::lang::{ErrorCode, VarType};
use tft::mach::{evaluate_str, Var};

fn eval(s: &str) -> f64 {
    evaluate_str(s, &Var::new()).unwrap()
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2 + 3 * 4"), 14.0);
    assert_eq!(eval("(2 + 3) * 4"), 20.0);
    assert_eq!(eval("2 * (3 + 4) - 1"), 13.0);
}

#[test]
fn test_left_associative() {
    assert_eq!(eval("10 - 4 - 3"), 3.0);
    assert_eq!(eval("8 / 4 / 2"), 1.0);
}

#[test]
fn test_unary() {
    assert_eq!(eval("-5 + 2"), -3.0);
    assert_eq!(eval("-(2 + 3)"), -5.0);
    assert_eq!(eval("+4"), 4.0);
}

#[test]
fn test_literals() {
    assert_eq!(eval("0x10 + 1"), 17.0);
    assert_eq!(eval("1e3"), 1000.0);
    assert_eq!(eval("2.5 * 2"), 5.0);
    assert_eq!(eval("TFT_RED"), 63488.0);
}

#[test]
fn test_division() {
    assert!(eval("1 / 0").is_infinite());
    assert!(eval("0 / 0").is_nan());
    assert_eq!(eval("5 / 2"), 2.5);
}

#[test]
fn test_variables() {
    let mut var = Var::new();
    let name: Rc<str> = "margin".into();
    var.declare(VarType::Int, &name, 10.0).unwrap();
    assert_eq!(evaluate_str("margin * 2 + 1", &var).unwrap(), 21.0);
    let e = evaluate_str("margin + other", &var).unwrap_err();
    assert!(e.is(ErrorCode::UndefinedVariable));
}

#[test]
fn test_invalid() {
    for s in &["2 +", "(1 + 2", "3 4", "* 2", ""] {
        let e = evaluate_str(s, &Var::new()).unwrap_err();
        assert!(e.is(ErrorCode::InvalidExpression), "{}: {}", s, e);
    }
}
