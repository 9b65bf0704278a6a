/// Splits the text between a call's parentheses into argument tokens.
///
/// Commas separate arguments except inside a quoted string or a nested
/// parenthesis. A quote preceded by a backslash does not close its string.
/// Each token is trimmed; an empty list yields no tokens.
pub fn split_args(s: &str) -> Vec<String> {
    let mut args: Vec<String> = vec![];
    if s.trim().is_empty() {
        return args;
    }
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth: usize = 0;
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        match quote {
            Some(q) => {
                if ch == q && prev != Some('\\') {
                    quote = None;
                }
                current.push(ch);
            }
            None => match ch {
                '"' | '\'' => {
                    quote = Some(ch);
                    current.push(ch);
                }
                '(' => {
                    depth += 1;
                    current.push(ch);
                }
                ')' => {
                    depth = depth.saturating_sub(1);
                    current.push(ch);
                }
                ',' if depth == 0 => {
                    args.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(ch),
            },
        }
        prev = Some(ch);
    }
    args.push(current.trim().to_string());
    args
}

/// Strips a trailing `//` comment that is not inside a quoted string.
pub fn strip_comment(s: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;
    for (index, ch) in s.char_indices() {
        match quote {
            Some(q) => {
                if ch == q && prev != Some('\\') {
                    quote = None;
                }
            }
            None => {
                if ch == '"' || ch == '\'' {
                    quote = Some(ch);
                } else if ch == '/' && prev == Some('/') {
                    return &s[..index - 1];
                }
            }
        }
        prev = Some(ch);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty() {
        assert!(split_args("").is_empty());
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn test_plain() {
        assert_eq!(split_args(" 0, 0 ,10"), vec!["0", "0", "10"]);
        assert_eq!(split_args("1,,2"), vec!["1", "", "2"]);
    }

    #[test]
    fn test_nested_parens() {
        assert_eq!(
            split_args("(a, b), max(1, 2) * 3, c"),
            vec!["(a, b)", "max(1, 2) * 3", "c"]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            split_args(r#""Hello, world", 10, 'a,b'"#),
            vec![r#""Hello, world""#, "10", "'a,b'"]
        );
        assert_eq!(
            split_args(r#""say \"hi, there\"", 1"#),
            vec![r#""say \"hi, there\"""#, "1"]
        );
        assert_eq!(split_args(r#""it's, fine", 2"#), vec![r#""it's, fine""#, "2"]);
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("tft.fillScreen(0); // clear"), "tft.fillScreen(0); ");
        assert_eq!(strip_comment(r#"tft.println("http://x")"#), r#"tft.println("http://x")"#);
        assert_eq!(strip_comment("int a = 4 / 2"), "int a = 4 / 2");
    }
}
