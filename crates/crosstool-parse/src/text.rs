//! Generic text-format tree.
//!
//! The grammar only knows about fields, scalars, and nested messages. The
//! schema (which names exist, which are repeated or required) is applied
//! afterwards by [`crate::decode`].

use pest::error::{ErrorVariant, LineColLocation};
use pest::iterators::{Pair, Pairs};
use pest::Parser;

#[derive(pest_derive::Parser)]
#[grammar = "crosstool.pest"]
struct TextParser;

/// A brace-delimited list of fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Message {
    pub fields: Vec<Field>,
}

/// One `name: value` or `name { ... }` entry.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Field {
    pub name: String,
    pub line: usize,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    /// Quoted string, unescaped, adjacent literals concatenated.
    Str(String),
    /// Bare identifier: booleans and enum values.
    Ident(String),
    Number(String),
    Message(Message),
}

impl Value {
    /// Short description used in schema errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "a string",
            Value::Ident(_) => "an identifier",
            Value::Number(_) => "a number",
            Value::Message(_) => "a message",
        }
    }
}

/// Parse a whole document into its top-level message.
pub(crate) fn parse_document(input: &str) -> Result<Message, String> {
    let mut pairs = TextParser::parse(Rule::document, input).map_err(describe_error)?;
    let document = pairs
        .next()
        .ok_or_else(|| "empty parse result".to_string())?;
    build_message(document.into_inner())
}

fn build_message(pairs: Pairs<'_, Rule>) -> Result<Message, String> {
    let fields = pairs
        .filter(|p| p.as_rule() == Rule::field)
        .map(build_field)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Message { fields })
}

fn build_field(pair: Pair<'_, Rule>) -> Result<Field, String> {
    let line = pair.as_span().start_pos().line_col().0;
    let mut inner = pair.into_inner();
    let name = inner
        .next()
        .ok_or_else(|| format!("line {line}: field without a name"))?
        .as_str()
        .to_string();
    let value_pair = inner
        .next()
        .ok_or_else(|| format!("line {line}: field '{name}' has no value"))?;
    let value = match value_pair.as_rule() {
        Rule::message => Value::Message(build_message(value_pair.into_inner())?),
        Rule::scalar => build_scalar(value_pair, line)?,
        other => return Err(format!("line {line}: unexpected {other:?} in field '{name}'")),
    };
    Ok(Field { name, line, value })
}

fn build_scalar(pair: Pair<'_, Rule>, line: usize) -> Result<Value, String> {
    let mut parts = pair.into_inner().peekable();
    let first_rule = parts
        .peek()
        .map(Pair::as_rule)
        .ok_or_else(|| format!("line {line}: empty value"))?;
    match first_rule {
        Rule::string => {
            let mut text = String::new();
            for part in parts {
                let chars = part.into_inner().next().map(|p| p.as_str()).unwrap_or("");
                text.push_str(&unescape(chars).map_err(|e| format!("line {line}: {e}"))?);
            }
            Ok(Value::Str(text))
        }
        Rule::number => Ok(Value::Number(joined(parts))),
        Rule::identifier => Ok(Value::Ident(joined(parts))),
        other => Err(format!("line {line}: unexpected {other:?} in value")),
    }
}

fn joined<'i>(parts: impl Iterator<Item = Pair<'i, Rule>>) -> String {
    parts.map(|p| p.as_str()).collect()
}

/// Resolve C-style escapes inside a quoted literal.
fn unescape(raw: &str) -> Result<String, String> {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        let escaped = chars
            .next()
            .ok_or_else(|| "dangling escape at end of string".to_string())?;
        match escaped {
            'n' => bytes.push(b'\n'),
            't' => bytes.push(b'\t'),
            'r' => bytes.push(b'\r'),
            'a' => bytes.push(0x07),
            'b' => bytes.push(0x08),
            'f' => bytes.push(0x0c),
            'v' => bytes.push(0x0b),
            '\\' | '\'' | '"' | '?' => bytes.push(escaped as u8),
            'x' | 'X' => {
                let mut value = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match chars.peek().and_then(|d| d.to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            digits += 1;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    return Err("'\\x' escape without hex digits".to_string());
                }
                bytes.push(value as u8);
            }
            '0'..='7' => {
                let mut value = escaped.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                if value > 0xff {
                    return Err(format!("octal escape '\\{value:o}' out of range"));
                }
                bytes.push(value as u8);
            }
            other => return Err(format!("unknown escape '\\{other}'")),
        }
    }
    String::from_utf8(bytes).map_err(|_| "string is not valid UTF-8 after unescaping".to_string())
}

fn describe_error(error: pest::error::Error<Rule>) -> String {
    let (line, column) = match error.line_col {
        LineColLocation::Pos(pos) => pos,
        LineColLocation::Span(start, _) => start,
    };
    let what = match &error.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
            let expected: Vec<&str> = positives.iter().map(|r| rule_name(*r)).collect();
            format!("expected {}", expected.join(" or "))
        }
        ErrorVariant::ParsingError { .. } => "unexpected input".to_string(),
        ErrorVariant::CustomError { message } => message.clone(),
    };
    format!("line {line}, column {column}: {what}")
}

fn rule_name(rule: Rule) -> &'static str {
    match rule {
        Rule::EOI => "end of input",
        Rule::field | Rule::name => "a field name",
        Rule::message => "'{' or '<'",
        Rule::scalar | Rule::number | Rule::identifier => "a value",
        Rule::string | Rule::dq_chars | Rule::sq_chars | Rule::escape => "a string",
        _ => "more input",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(input: &str) -> Field {
        let mut doc = parse_document(input).unwrap();
        assert_eq!(doc.fields.len(), 1);
        doc.fields.remove(0)
    }

    #[test]
    fn scalar_fields() {
        let doc = parse_document("a: \"x\" b: true c: 12 d: FASTBUILD").unwrap();
        let values: Vec<&Value> = doc.fields.iter().map(|f| &f.value).collect();
        assert_eq!(values[0], &Value::Str("x".into()));
        assert_eq!(values[1], &Value::Ident("true".into()));
        assert_eq!(values[2], &Value::Number("12".into()));
        assert_eq!(values[3], &Value::Ident("FASTBUILD".into()));
    }

    #[test]
    fn nested_messages_and_separators() {
        let field = single("tool_path { name: \"ar\"; path: 'bin/ar', }");
        let Value::Message(msg) = field.value else {
            panic!("expected message");
        };
        assert_eq!(msg.fields.len(), 2);
        assert_eq!(msg.fields[1].value, Value::Str("bin/ar".into()));

        let field = single("block: < mode: OPT >");
        assert!(matches!(field.value, Value::Message(_)));
    }

    #[test]
    fn comments_and_line_numbers() {
        let doc = parse_document("# leading\na: \"1\"\n  # skip\nb: \"2\" # trailing\n").unwrap();
        assert_eq!(doc.fields[0].line, 2);
        assert_eq!(doc.fields[1].line, 4);
    }

    #[test]
    fn adjacent_strings_concatenate() {
        let field = single("v: \"with \" 'spaces' \" in\"");
        assert_eq!(field.value, Value::Str("with spaces in".into()));
    }

    #[test]
    fn escapes() {
        let field = single(r#"v: "a\"b\\c\n\x41\101""#);
        assert_eq!(field.value, Value::Str("a\"b\\c\nAA".into()));
    }

    #[test]
    fn hash_inside_string_is_not_a_comment() {
        let field = single("v: \"#include\"");
        assert_eq!(field.value, Value::Str("#include".into()));
    }

    #[test]
    fn garbage_is_rejected_with_location() {
        let err = parse_document("some xxx : yak \"").unwrap_err();
        assert!(err.starts_with("line 1, column"), "{err}");
    }

    #[test]
    fn unterminated_message_is_rejected() {
        assert!(parse_document("toolchain { compiler: \"gcc\"").is_err());
    }

    #[test]
    fn bad_escape_is_rejected() {
        assert!(parse_document(r#"v: "\q""#).is_err());
    }

    #[test]
    fn empty_document() {
        assert!(parse_document("  # nothing\n").unwrap().fields.is_empty());
    }
}
