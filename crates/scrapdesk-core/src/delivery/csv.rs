//! CSV tokenizer for delivery exports.
//!
//! Tolerant by design: unterminated quotes close at end of line, blank
//! lines disappear, and every field is trimmed after extraction. The
//! tokenizer itself never fails; shape validation is the transformer's
//! job.

/// Tokenize raw CSV text into rows of trimmed fields.
///
/// Line-ending variants (`\r\n`, `\r`) are normalized first, and blank
/// lines are dropped rather than producing empty rows. A `"` toggles
/// quote state except that `""` inside quotes emits a literal quote;
/// `,` separates fields only outside quotes.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    normalized
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(tokenize_line)
        .collect()
}

fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_unquoted_row() {
        assert_eq!(tokenize("a,b,c"), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_quoted_comma_preserved() {
        assert_eq!(tokenize(r#"a,"b,c",d"#), vec![vec!["a", "b,c", "d"]]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(tokenize(r#"a,"b""c""#), vec![vec!["a", "b\"c"]]);
    }

    #[test]
    fn test_line_ending_variants() {
        let rows = tokenize("a,b\r\nc,d\re,f\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let rows = tokenize("a,b\n\n   \nc,d");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(tokenize("  a , b  ,c "), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_unterminated_quote_closes_at_eol() {
        assert_eq!(tokenize(r#"a,"b,c"#), vec![vec!["a", "b,c"]]);
    }

    #[test]
    fn test_empty_fields_survive() {
        assert_eq!(tokenize("a,,c"), vec![vec!["a", "", "c"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\r\n\n").is_empty());
    }
}
