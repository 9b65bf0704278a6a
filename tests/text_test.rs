mod common;
use common::*;
use tft::mach::Color;
use pretty_assertions::assert_eq;

#[test]
fn test_println_advances_by_line_height() {
    let source = "tft.setTextSize(1);\ntft.setCursor(10, 20);\ntft.println(\"Hi\");\ntft.println(\"there\");";
    let (runtime, calls) = run_state(source);
    assert_eq!(
        calls,
        vec![
            Call::Text("Hi".to_string(), 10.0, 20.0, 8.0, WHITE),
            Call::Text("there".to_string(), 10.0, 32.0, 8.0, WHITE),
        ]
    );
    assert_eq!(runtime.cursor().y, 44.0);
    assert_eq!(runtime.cursor().x, 10.0);
}

#[test]
fn test_println_scales_with_size() {
    let (runtime, calls) = run_state("tft.setTextSize(2);\ntft.println(\"x\");");
    assert_eq!(calls, vec![Call::Text("x".to_string(), 0.0, 0.0, 16.0, WHITE)]);
    assert_eq!(runtime.cursor().y, 24.0);
}

#[test]
fn test_print_advances_horizontally() {
    let (runtime, calls) = run_state("tft.setTextSize(2);\ntft.setCursor(4, 6);\ntft.print(\"abc\");\ntft.print(7);");
    assert_eq!(
        calls,
        vec![
            Call::Text("abc".to_string(), 4.0, 6.0, 16.0, WHITE),
            Call::Text("7".to_string(), 40.0, 6.0, 16.0, WHITE),
        ]
    );
    assert_eq!(runtime.cursor().x, 52.0);
    assert_eq!(runtime.cursor().y, 6.0);
}

#[test]
fn test_text_size_is_clamped() {
    let (runtime, calls) = run_state("tft.setTextSize(99);\ntft.drawString(\"A\", 0, 0);");
    assert_eq!(runtime.text_size(), 10);
    assert_eq!(calls, vec![Call::Text("A".to_string(), 0.0, 0.0, 80.0, WHITE)]);
    let (runtime, calls) = run_state("tft.setTextSize(0);\ntft.println(\"A\");");
    assert_eq!(runtime.text_size(), 1);
    assert_eq!(calls, vec![Call::Text("A".to_string(), 0.0, 0.0, 8.0, WHITE)]);
    assert_eq!(runtime.cursor().y, 12.0);
    let (runtime, _) = run_state("tft.setTextSize(-4);");
    assert_eq!(runtime.text_size(), 1);
}

#[test]
fn test_text_color() {
    let (runtime, calls) = run_state("tft.setTextColor(TFT_YELLOW);\ntft.drawString(\"A\", 1, 2);");
    assert_eq!(runtime.text_color(), Color::rgb(255, 255, 0));
    assert_eq!(calls, vec![Call::Text("A".to_string(), 1.0, 2.0, 8.0, Color::rgb(255, 255, 0))]);
}

#[test]
fn test_numbers_print_in_short_form() {
    let (_, calls) = run_state("float f = 5 / 2;\nint n = 40 + 2;\ntft.println(f);\ntft.println(n);");
    let texts: Vec<&str> = calls
        .iter()
        .filter_map(|call| match call {
            Call::Text(text, ..) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["2.5", "42"]);
}

#[test]
fn test_unquoted_text_is_literal() {
    let (_, calls) = run_state("tft.println(hello);");
    assert_eq!(calls, vec![Call::Text("hello".to_string(), 0.0, 0.0, 8.0, WHITE)]);
}
