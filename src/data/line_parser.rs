// Splits one line of delimited text into fields.
//
// Not an RFC 4180 reader: quotes only suppress
// delimiter splitting and are kept in the field text, and an empty
// trailing field is dropped.

/// Character that toggles a quoted span
pub const QUOTE: char = '"';

/// Tokenizes lines using a single delimiter character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParser {
    delimiter: char,
}

impl LineParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Split `line` into fields.
    ///
    /// A delimiter inside a quoted span is kept as text. Quote characters
    /// stay in the field. If the line ends with an empty field (for example
    /// `a,b,`) that field is not returned.
    pub fn parse(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quoted_span = false;

        for ch in line.chars() {
            if ch == self.delimiter && !in_quoted_span {
                fields.push(std::mem::take(&mut current));
                continue;
            }
            if ch == QUOTE {
                in_quoted_span = !in_quoted_span;
            }
            current.push(ch);
        }

        if !current.is_empty() {
            fields.push(current);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Vec<String> {
        LineParser::new(',').parse(line)
    }

    #[test]
    fn test_simple_fields() {
        assert_eq!(parse("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_empty_field_is_dropped() {
        // Intentional: a trailing delimiter does not produce an empty cell
        assert_eq!(parse("a,b,"), vec!["a", "b"]);
    }

    #[test]
    fn test_inner_empty_fields_are_kept() {
        assert_eq!(parse("a,,b"), vec!["a", "", "b"]);
        assert_eq!(parse(",x"), vec!["", "x"]);
    }

    #[test]
    fn test_empty_line_has_no_fields() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_lone_delimiter_keeps_leading_field_only() {
        assert_eq!(parse(","), vec![""]);
    }

    #[test]
    fn test_quotes_are_retained_and_protect_delimiters() {
        assert_eq!(
            parse(r#"1,"hello, world",2"#),
            vec!["1", r#""hello, world""#, "2"]
        );
    }

    #[test]
    fn test_unbalanced_quote_swallows_rest_of_line() {
        assert_eq!(parse(r#"a,"b,c"#), vec!["a", r#""b,c"#]);
    }

    #[test]
    fn test_doubled_quotes_are_not_unescaped() {
        assert_eq!(parse(r#""say ""hi""",x"#), vec![r#""say ""hi""""#, "x"]);
    }

    #[test]
    fn test_tab_and_custom_delimiters() {
        assert_eq!(LineParser::new('\t').parse("a\tb c"), vec!["a", "b c"]);
        assert_eq!(LineParser::new('|').parse("x|y,z"), vec!["x", "y,z"]);
        assert_eq!(LineParser::new(' ').parse("x y"), vec!["x", "y"]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(parse("é,日本,ß"), vec!["é", "日本", "ß"]);
    }
}
