//! Top-level template parsing
//!
//! An input starting with `@` (but not `@@` or `@{`) is one bare expression
//! spanning the whole string. Everything else is a joined string: literal
//! text, `@@` unescaping to `@`, and `@{...}` splices.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::expression_parser::parse_method;
use weft_core::ast::{Segment, Template};

/// Template parser entry point
pub struct TemplateParser;

impl TemplateParser {
    /// Parse one input string into a template
    pub fn parse(input: &str) -> Result<Template> {
        if input.starts_with('@') && !input.starts_with("@@") && !input.starts_with("@{") {
            let mut cur = Cursor::new(input);
            cur.bump(); // leading '@'
            let rule = parse_method(&mut cur)?;
            if !cur.is_eof() {
                return Err(cur.error("end of input"));
            }
            Ok(Template::Expression(rule))
        } else {
            Self::parse_joined(input)
        }
    }

    fn parse_joined(input: &str) -> Result<Template> {
        let mut cur = Cursor::new(input);
        let mut segments = Vec::new();
        let mut literal = String::new();

        while !cur.is_eof() {
            if cur.eat_str("@@") {
                literal.push('@');
            } else if cur.starts_with("@{") {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                cur.eat_str("@{");
                let rule = parse_method(&mut cur)?;
                cur.expect_char('}')?;
                segments.push(Segment::Expression(rule));
            } else if let Some(c) = cur.bump() {
                literal.push(c);
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Template::JoinedString(segments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::ast::Rule;
    use weft_core::types::Value;

    #[test]
    fn test_bare_expression_input() {
        let template = TemplateParser::parse("@concat('a', 'b')").unwrap();
        assert_eq!(
            template,
            Template::Expression(Rule::invocation(
                "concat",
                vec![Rule::string_literal("a"), Rule::string_literal("b")]
            ))
        );
    }

    #[test]
    fn test_plain_text_is_one_literal_segment() {
        let template = TemplateParser::parse("no at-sign here").unwrap();
        assert_eq!(
            template,
            Template::JoinedString(vec![Segment::Literal("no at-sign here".to_string())])
        );
    }

    #[test]
    fn test_empty_input_is_empty_joined_string() {
        assert_eq!(
            TemplateParser::parse("").unwrap(),
            Template::JoinedString(vec![])
        );
    }

    #[test]
    fn test_escaped_at_prefix_falls_through_to_text() {
        let template = TemplateParser::parse("@@notACall").unwrap();
        assert_eq!(
            template,
            Template::JoinedString(vec![Segment::Literal("@notACall".to_string())])
        );
    }

    #[test]
    fn test_enclosed_expression_between_text() {
        let template = TemplateParser::parse("pre@{f()}post").unwrap();
        assert_eq!(
            template,
            Template::JoinedString(vec![
                Segment::Literal("pre".to_string()),
                Segment::Expression(Rule::invocation("f", vec![])),
                Segment::Literal("post".to_string()),
            ])
        );
    }

    #[test]
    fn test_enclosed_expression_at_input_start() {
        let template = TemplateParser::parse("@{f()}tail").unwrap();
        assert_eq!(
            template,
            Template::JoinedString(vec![
                Segment::Expression(Rule::invocation("f", vec![])),
                Segment::Literal("tail".to_string()),
            ])
        );
    }

    #[test]
    fn test_lone_at_inside_text_is_literal() {
        let template = TemplateParser::parse("a@b").unwrap();
        assert_eq!(
            template,
            Template::JoinedString(vec![Segment::Literal("a@b".to_string())])
        );
    }

    #[test]
    fn test_bare_expression_with_accessors() {
        let template = TemplateParser::parse("@f()?['k']").unwrap();
        assert_eq!(
            template,
            Template::Expression(Rule::access(
                Rule::invocation("f", vec![]),
                Rule::index(Rule::string_literal("k"), true),
            ))
        );
    }

    #[test]
    fn test_trailing_garbage_after_expression() {
        let error = TemplateParser::parse("@f() tail").unwrap_err();
        assert_eq!(error.expected, "end of input");
        assert_eq!(error.position, 4);
    }

    #[test]
    fn test_unclosed_enclosed_expression() {
        let error = TemplateParser::parse("x@{f()").unwrap_err();
        assert_eq!(error.expected, "'}'");
    }

    #[test]
    fn test_bare_at_without_function_fails() {
        assert!(TemplateParser::parse("@").is_err());
        assert!(TemplateParser::parse("@name").is_err());
    }

    #[test]
    fn test_constant_folding_of_numeric_literals() {
        let template = TemplateParser::parse("@f(10, 2.25)").unwrap();
        assert_eq!(
            template,
            Template::Expression(Rule::invocation(
                "f",
                vec![
                    Rule::constant(Value::Integer(10)),
                    Rule::constant(Value::Decimal("2.25".parse().unwrap())),
                ]
            ))
        );
    }
}
