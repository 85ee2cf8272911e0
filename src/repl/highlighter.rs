//! Syntax highlighter for Query DSL documents
//!
//! Keys naming a known clause, aggregation or keyword are emphasized so a
//! misspelled `"bool"` or `"aggs"` stands out while typing.

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::completion::catalog;

/// JSON highlighter aware of Query DSL names
pub struct DslHighlighter {
    enabled: bool,
}

impl DslHighlighter {
    /// Create a new highlighter
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn is_dsl_name(name: &str) -> bool {
        catalog::find_clause(name).is_some()
            || catalog::is_bool_clause(name)
            || catalog::root_properties().iter().any(|p| p.name == name)
    }

    fn key_style(name: &str) -> Style {
        if Self::is_dsl_name(name) {
            Color::Blue.bold()
        } else {
            Color::Cyan.normal()
        }
    }

    fn word_style(word: &str) -> Style {
        match word {
            "true" | "false" | "null" => Color::Yellow.normal(),
            _ if word.parse::<f64>().is_ok() => Color::Magenta.normal(),
            _ => Style::default(),
        }
    }

    /// Whether the next non-whitespace character after `rest` is a colon
    fn followed_by_colon(rest: &str) -> bool {
        rest.trim_start().starts_with(':')
    }
}

impl Default for DslHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Highlighter for DslHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let mut word = String::new();
        let mut chars = line.char_indices();

        while let Some((i, ch)) = chars.next() {
            if ch == '"' {
                if !word.is_empty() {
                    styled.push((Self::word_style(&word), std::mem::take(&mut word)));
                }

                // Consume through the closing quote, honoring escapes
                let mut end = line.len();
                let mut escaped = false;
                for (j, c) in chars.by_ref() {
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        end = j + 1;
                        break;
                    }
                }

                let literal = &line[i..end];
                let style = if Self::followed_by_colon(&line[end..]) {
                    Self::key_style(literal.trim_matches('"'))
                } else {
                    Color::Green.normal()
                };
                styled.push((style, literal.to_string()));
                continue;
            }

            if ch.is_alphanumeric() || matches!(ch, '_' | '.' | '-' | '+') {
                word.push(ch);
                continue;
            }

            if !word.is_empty() {
                styled.push((Self::word_style(&word), std::mem::take(&mut word)));
            }

            let style = match ch {
                '{' | '}' | '[' | ']' => Color::White.bold(),
                ':' | ',' => Color::DarkGray.normal(),
                _ => Style::default(),
            };
            styled.push((style, ch.to_string()));
        }

        if !word.is_empty() {
            styled.push((Self::word_style(&word), word));
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_of(styled: &StyledText, text: &str) -> Option<Style> {
        styled
            .buffer
            .iter()
            .find(|(_, segment)| segment == text)
            .map(|(style, _)| *style)
    }

    #[test]
    fn test_render_preserves_text() {
        let line = r#"{"query": {"match": {"title": "a \"b\" c"}}, "size": 10}"#;
        let result = DslHighlighter::default().highlight(line, 0);
        assert_eq!(result.render_simple(), line);
    }

    #[test]
    fn test_key_styles() {
        let result = DslHighlighter::default().highlight(r#"{"query": {"match": {"title": "x"}}}"#, 0);
        assert_eq!(style_of(&result, "\"query\""), Some(Color::Blue.bold()));
        assert_eq!(style_of(&result, "\"match\""), Some(Color::Blue.bold()));
        assert_eq!(style_of(&result, "\"title\""), Some(Color::Cyan.normal()));
        assert_eq!(style_of(&result, "\"x\""), Some(Color::Green.normal()));
    }

    #[test]
    fn test_literals() {
        let result = DslHighlighter::default().highlight(r#"{"size": 10, "explain": true}"#, 0);
        assert_eq!(style_of(&result, "10"), Some(Color::Magenta.normal()));
        assert_eq!(style_of(&result, "true"), Some(Color::Yellow.normal()));
    }

    #[test]
    fn test_unterminated_string() {
        let line = r#"{"query": {"ma"#;
        let result = DslHighlighter::default().highlight(line, line.len());
        assert_eq!(result.render_simple(), line);
        assert_eq!(style_of(&result, "\"ma"), Some(Color::Green.normal()));
    }

    #[test]
    fn test_disabled_highlighting() {
        let result = DslHighlighter::new(false).highlight(r#"{"size": 1}"#, 0);
        assert_eq!(result.buffer.len(), 1);
        assert_eq!(result.render_simple(), r#"{"size": 1}"#);
    }
}
