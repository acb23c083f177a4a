//! Reader for XML-RPC value fragments.
//!
//! The server keeps the result of a finished task as an XML-RPC `<value>`
//! element, whichever protocol created the task. [`parse_value`] turns such a
//! fragment into the JSON shape the [`codec`](crate::codec) reads, so a task
//! result decodes through [`FromWire`](crate::codec::FromWire) exactly like a
//! synchronous one.

use std::borrow::Cow;
use std::fmt;
use std::iter::Peekable;
use std::vec::IntoIter;

use quick_xml::escape::unescape;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Number, Value};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open(String),
    Close(String),
    Text(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(name) => write!(f, "<{name}>"),
            Self::Close(name) => write!(f, "</{name}>"),
            Self::Text(text) => write!(f, "text {text:?}"),
        }
    }
}

/// Parse a single `<value>` element.
///
/// Untyped content and `string`, `dateTime.iso8601` and `base64` payloads
/// become strings. `int`, `i4`, `i8` and `double` become numbers, `boolean` a
/// boolean, `nil` null, `array` an array and `struct` an object. A value with
/// no content at all yields `None`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `text` is not well-formed XML or is not exactly
/// one XML-RPC value.
pub fn parse_value(context: &str, text: &str) -> Result<Option<Value>> {
    let mut parser = Parser {
        context,
        tokens: tokenize(context, text)?.into_iter().peekable(),
    };
    parser.expect_open("value")?;
    let value = parser.value()?;
    parser.skip_space();
    match parser.tokens.next() {
        None => Ok(value),
        Some(token) => Err(parser.error(format!("unexpected {token} after the value"))),
    }
}

fn tokenize(context: &str, text: &str) -> Result<Vec<Token>> {
    let mut reader = Reader::from_str(text);
    let mut tokens = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::decode(context, format!("malformed XML-RPC value: {e}")))?;
        match event {
            Event::Start(tag) => tokens.push(Token::Open(tag_name(tag.name().as_ref()))),
            Event::End(tag) => tokens.push(Token::Close(tag_name(tag.name().as_ref()))),
            Event::Empty(tag) => {
                let name = tag_name(tag.name().as_ref());
                tokens.push(Token::Open(name.clone()));
                tokens.push(Token::Close(name));
            }
            Event::Text(raw) => {
                let text = unescaped(context, utf8(context, &raw)?)?;
                push_text(&mut tokens, &text);
            }
            Event::CData(raw) => push_text(&mut tokens, utf8(context, &raw)?),
            Event::GeneralRef(raw) => {
                let entity = format!("&{};", utf8(context, &raw)?);
                push_text(&mut tokens, &unescaped(context, &entity)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(tokens)
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn utf8<'t>(context: &str, raw: &'t [u8]) -> Result<&'t str> {
    std::str::from_utf8(raw).map_err(|e| Error::decode(context, format!("invalid UTF-8: {e}")))
}

fn unescaped(context: &str, raw: &str) -> Result<String> {
    unescape(raw)
        .map(Cow::into_owned)
        .map_err(|e| Error::decode(context, format!("bad character reference: {e}")))
}

// Entity references arrive as separate events; adjacent pieces form one text.
fn push_text(tokens: &mut Vec<Token>, text: &str) {
    if let Some(Token::Text(last)) = tokens.last_mut() {
        last.push_str(text);
    } else {
        tokens.push(Token::Text(text.to_string()));
    }
}

struct Parser<'c> {
    context: &'c str,
    tokens: Peekable<IntoIter<Token>>,
}

impl Parser<'_> {
    fn error(&self, message: impl Into<String>) -> Error {
        Error::decode(self.context, message)
    }

    fn next_token(&mut self) -> Result<Token> {
        let context = self.context;
        self.tokens
            .next()
            .ok_or_else(|| Error::decode(context, "XML-RPC value ends early"))
    }

    fn skip_space(&mut self) {
        while self
            .tokens
            .next_if(|token| matches!(token, Token::Text(text) if text.trim().is_empty()))
            .is_some()
        {}
    }

    fn text(&mut self) -> String {
        match self.tokens.next_if(|token| matches!(token, Token::Text(_))) {
            Some(Token::Text(text)) => text,
            _ => String::new(),
        }
    }

    fn expect_open(&mut self, name: &str) -> Result<()> {
        self.skip_space();
        match self.next_token()? {
            Token::Open(found) if found == name => Ok(()),
            other => Err(self.error(format!("expected <{name}>, found {other}"))),
        }
    }

    fn expect_close(&mut self, name: &str) -> Result<()> {
        self.skip_space();
        match self.next_token()? {
            Token::Close(found) if found == name => Ok(()),
            other => Err(self.error(format!("expected </{name}>, found {other}"))),
        }
    }

    /// Content of a `<value>` whose start tag has been read, up to its end tag.
    fn value(&mut self) -> Result<Option<Value>> {
        let text = self.text();
        match self.next_token()? {
            Token::Close(name) if name == "value" => {
                if text.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Value::String(text)))
                }
            }
            Token::Open(kind) if text.trim().is_empty() => {
                let value = self.typed(&kind)?;
                self.expect_close("value")?;
                Ok(Some(value))
            }
            other => Err(self.error(format!("unexpected {other} in <value>"))),
        }
    }

    fn member_value(&mut self) -> Result<Value> {
        self.expect_open("value")?;
        Ok(self.value()?.unwrap_or_else(|| Value::String(String::new())))
    }

    fn typed(&mut self, kind: &str) -> Result<Value> {
        let value = match kind {
            "array" => return self.array(),
            "struct" => return self.structure(),
            "nil" => Value::Null,
            "string" | "dateTime.iso8601" | "base64" => Value::String(self.text()),
            "int" | "i4" | "i8" => {
                let text = self.text();
                let number = text
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| self.error(format!("{text:?} is not an integer")))?;
                Value::from(number)
            }
            "double" => {
                let text = self.text();
                text.trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
                    .ok_or_else(|| self.error(format!("{text:?} is not a finite number")))?
            }
            "boolean" => match self.text().trim() {
                "1" => Value::Bool(true),
                "0" => Value::Bool(false),
                other => return Err(self.error(format!("{other:?} is not a boolean"))),
            },
            other => return Err(self.error(format!("unknown XML-RPC type <{other}>"))),
        };
        self.expect_close(kind)?;
        Ok(value)
    }

    fn array(&mut self) -> Result<Value> {
        self.expect_open("data")?;
        let mut items = Vec::new();
        loop {
            self.skip_space();
            match self.next_token()? {
                Token::Open(name) if name == "value" => {
                    items.push(self.value()?.unwrap_or_else(|| Value::String(String::new())));
                }
                Token::Close(name) if name == "data" => break,
                other => return Err(self.error(format!("unexpected {other} in <data>"))),
            }
        }
        self.expect_close("array")?;
        Ok(Value::Array(items))
    }

    fn structure(&mut self) -> Result<Value> {
        let mut members = Map::new();
        loop {
            self.skip_space();
            match self.next_token()? {
                Token::Open(tag) if tag == "member" => {
                    self.expect_open("name")?;
                    let name = self.text();
                    self.expect_close("name")?;
                    let value = self.member_value()?;
                    self.expect_close("member")?;
                    members.insert(name, value);
                }
                Token::Close(tag) if tag == "struct" => break,
                other => return Err(self.error(format!("unexpected {other} in <struct>"))),
            }
        }
        Ok(Value::Object(members))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const CONTEXT: &str = "task.get_result -> ";

    fn parse(text: &str) -> Value {
        parse_value(CONTEXT, text).unwrap().unwrap()
    }

    #[test]
    fn test_untyped_and_scalars() {
        assert_eq!(parse("<value>OpaqueRef:a</value>"), json!("OpaqueRef:a"));
        assert_eq!(parse("<value>123</value>"), json!("123"));
        assert_eq!(parse("<value><string> padded </string></value>"), json!(" padded "));
        assert_eq!(parse("<value><int>-4</int></value>"), json!(-4));
        assert_eq!(parse("<value><i8>9000000000</i8></value>"), json!(9_000_000_000_i64));
        assert_eq!(parse("<value><boolean>1</boolean></value>"), json!(true));
        assert_eq!(parse("<value><double>0.5</double></value>"), json!(0.5));
        assert_eq!(parse("<value><nil/></value>"), Value::Null);
        assert_eq!(
            parse("<value><dateTime.iso8601>20261016T08:00:00Z</dateTime.iso8601></value>"),
            json!("20261016T08:00:00Z")
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(parse_value(CONTEXT, "<value></value>").unwrap(), None);
        assert_eq!(parse_value(CONTEXT, "<value/>").unwrap(), None);
        assert_eq!(parse("<value><string></string></value>"), json!(""));
    }

    #[test]
    fn test_array_and_struct() {
        let text = "<value><struct>\
            <member><name>uuid</name><value>vdi-1</value></member>\
            <member><name>snapshots</name><value><array><data>\
                <value>OpaqueRef:s1</value>\
                <value><string>OpaqueRef:s2</string></value>\
            </data></array></value></member>\
            <member><name>sharable</name><value><boolean>0</boolean></value></member>\
        </struct></value>";

        assert_eq!(
            parse(text),
            json!({
                "uuid": "vdi-1",
                "snapshots": ["OpaqueRef:s1", "OpaqueRef:s2"],
                "sharable": false,
            })
        );
        assert_eq!(parse("<value><array><data/></array></value>"), json!([]));
    }

    #[test]
    fn test_pretty_printed_fragment() {
        let text = "<value>\n  <array>\n    <data>\n      <value>OpaqueRef:a</value>\n    </data>\n  </array>\n</value>\n";
        assert_eq!(parse(text), json!(["OpaqueRef:a"]));
    }

    #[test]
    fn test_entities_are_resolved() {
        assert_eq!(parse("<value>a &amp; b &lt;c&gt;</value>"), json!("a & b <c>"));
        assert_eq!(parse("<value><string>&#65;BC</string></value>"), json!("ABC"));
    }

    #[test]
    fn test_rejects_bad_fragments() {
        for text in [
            "<value><int>four</int></value>",
            "<value><boolean>yes</boolean></value>",
            "<value><float>1.0</float></value>",
            "<value><array><value>x</value></array></value>",
            "<value>a</value><value>b</value>",
            "<value><string>open</value>",
            "<array><data></data></array>",
        ] {
            let err = parse_value(CONTEXT, text).unwrap_err();
            assert!(
                matches!(err, Error::Decode { ref context, .. } if context == CONTEXT),
                "{text}: {err:?}"
            );
        }
    }
}
