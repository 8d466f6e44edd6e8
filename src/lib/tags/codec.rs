//! Text codec for the `TAG:TYPE:VALUE[\tTAG:TYPE:VALUE]*` optional-field grammar.

use std::fmt::Write;
use std::str::FromStr;

use super::value::{ArrayType, TagArray, TagName, TagType, TagValue};
use super::{Tag, TagList};
use crate::errors::FailureKind;

/// Separator between optional-field tokens
pub const FIELD_SEPARATOR: char = '\t';

fn malformed(token: &str, reason: impl Into<String>) -> FailureKind {
    FailureKind::MalformedTag { token: token.to_string(), reason: reason.into() }
}

fn unrecognized(token: &str, tag_type: &str) -> FailureKind {
    FailureKind::UnrecognizedTagType { token: token.to_string(), tag_type: tag_type.to_string() }
}

/// Parses a single `TAG:TYPE:VALUE` token.
///
/// # Errors
///
/// Returns [`FailureKind::UnrecognizedTagType`] if the type code (or `B` sub-type) is
/// unknown, and [`FailureKind::MalformedTag`] for any other deviation from the grammar.
///
/// # Examples
///
/// ```
/// use samconv::tags::{TagValue, parse_tag};
///
/// let tag = parse_tag("NM:i:3").unwrap();
/// assert_eq!(tag.name(), "NM");
/// assert_eq!(tag.value(), &TagValue::Integer(3));
///
/// // the value keeps the form it was written in
/// assert_eq!(parse_tag("XF:f:1.0").unwrap().text(), Some("1.0"));
/// ```
pub fn parse_tag(token: &str) -> Result<Tag, FailureKind> {
    let mut parts = token.splitn(3, ':');
    let (Some(name), Some(tag_type), Some(value)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed(token, "expected TAG:TYPE:VALUE"));
    };

    let name = TagName::from_str(name).map_err(|_| {
        malformed(token, "tag name must be 2 to 4 alphanumeric characters")
    })?;

    if tag_type.is_empty() {
        return Err(malformed(token, "missing type"));
    }
    let mut chars = tag_type.chars();
    let tag_type = match (chars.next(), chars.next()) {
        (Some(c), None) => TagType::from_char(c),
        _ => None,
    }
    .ok_or_else(|| unrecognized(token, tag_type))?;

    let parsed = parse_value(token, tag_type, value)?;
    let text = (format_value(&parsed) != value).then(|| value.to_string());
    Ok(Tag { name, value: parsed, text })
}

fn parse_value(token: &str, tag_type: TagType, value: &str) -> Result<TagValue, FailureKind> {
    match tag_type {
        TagType::Character => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_graphic() => Ok(TagValue::Character(c)),
                _ => Err(malformed(token, "A value must be a single printable character")),
            }
        }
        TagType::Integer => {
            let n: i64 = value.parse().map_err(|_| malformed(token, "invalid integer"))?;
            if (TagValue::MIN_INTEGER..=TagValue::MAX_INTEGER).contains(&n) {
                Ok(TagValue::Integer(n))
            } else {
                Err(malformed(token, "integer out of 32-bit range"))
            }
        }
        TagType::Float => parse_float(value)
            .map(TagValue::Float)
            .ok_or_else(|| malformed(token, "invalid float")),
        TagType::String => {
            if value.chars().any(char::is_control) {
                Err(malformed(token, "Z value contains control characters"))
            } else {
                Ok(TagValue::String(value.to_string()))
            }
        }
        TagType::Hex => parse_hex(value)
            .map(TagValue::Hex)
            .ok_or_else(|| malformed(token, "H value must be an even number of uppercase hex digits")),
        TagType::Array => parse_array(token, value).map(TagValue::Array),
    }
}

fn parse_float(s: &str) -> Option<f32> {
    // `f32::from_str` also accepts `inf` and `NaN`, which SAM does not.
    let numeric = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if numeric { s.parse().ok() } else { None }
}

fn parse_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 || !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F')) {
        return None;
    }
    (0..s.len()).step_by(2).map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok()).collect()
}

fn parse_array(token: &str, value: &str) -> Result<TagArray, FailureKind> {
    let (subtype, elements) = match value.split_once(',') {
        Some((subtype, elements)) => (subtype, Some(elements)),
        None => (value, None),
    };

    let mut chars = subtype.chars();
    let array_type = match (chars.next(), chars.next()) {
        (Some(c), None) => ArrayType::from_char(c),
        _ => None,
    }
    .ok_or_else(|| unrecognized(token, &format!("B:{subtype}")))?;

    let array = match array_type {
        ArrayType::Int8 => TagArray::Int8(parse_elements(token, elements, parse_int)?),
        ArrayType::UInt8 => TagArray::UInt8(parse_elements(token, elements, parse_int)?),
        ArrayType::Int16 => TagArray::Int16(parse_elements(token, elements, parse_int)?),
        ArrayType::UInt16 => TagArray::UInt16(parse_elements(token, elements, parse_int)?),
        ArrayType::Int32 => TagArray::Int32(parse_elements(token, elements, parse_int)?),
        ArrayType::UInt32 => TagArray::UInt32(parse_elements(token, elements, parse_int)?),
        ArrayType::Float => TagArray::Float(parse_elements(token, elements, parse_float)?),
    };
    Ok(array)
}

fn parse_int<T: FromStr>(s: &str) -> Option<T> {
    s.parse().ok()
}

/// A subtype with no comma is an empty array; otherwise every comma-separated
/// element must parse.
fn parse_elements<T>(
    token: &str,
    elements: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, FailureKind> {
    let Some(elements) = elements else {
        return Ok(Vec::new());
    };
    elements
        .split(',')
        .map(|e| parse(e).ok_or_else(|| malformed(token, format!("invalid array element '{e}'"))))
        .collect()
}

/// Parses every token of an optional-field string, in order.
///
/// Empty tokens (an empty string, doubled or trailing tabs) are skipped. Each
/// remaining token yields its own result so callers can decide per token whether a
/// failure is fatal.
pub fn decode(text: &str) -> impl Iterator<Item = Result<Tag, FailureKind>> + '_ {
    text.split(FIELD_SEPARATOR).filter(|token| !token.is_empty()).map(parse_tag)
}

/// Parses an optional-field string, failing on the first bad token.
///
/// # Errors
///
/// Returns the failure of the first token that does not parse.
pub fn decode_all(text: &str) -> Result<TagList, FailureKind> {
    decode(text).collect()
}

fn write_joined<T: std::fmt::Display>(out: &mut String, values: &[T]) {
    for v in values {
        let _ = write!(out, ",{v}");
    }
}

fn format_value(value: &TagValue) -> String {
    let mut out = String::new();
    match value {
        TagValue::Character(c) => out.push(*c),
        TagValue::Integer(n) => {
            let _ = write!(out, "{n}");
        }
        TagValue::Float(x) => {
            let _ = write!(out, "{x}");
        }
        TagValue::String(s) => out.push_str(s),
        TagValue::Hex(bytes) => {
            for b in bytes {
                let _ = write!(out, "{b:02X}");
            }
        }
        TagValue::Array(array) => {
            out.push(array.array_type().as_char());
            match array {
                TagArray::Int8(v) => write_joined(&mut out, v),
                TagArray::UInt8(v) => write_joined(&mut out, v),
                TagArray::Int16(v) => write_joined(&mut out, v),
                TagArray::UInt16(v) => write_joined(&mut out, v),
                TagArray::Int32(v) => write_joined(&mut out, v),
                TagArray::UInt32(v) => write_joined(&mut out, v),
                TagArray::Float(v) => write_joined(&mut out, v),
            }
        }
    }
    out
}

/// Formats a single tag as `TAG:TYPE:VALUE`.
///
/// A parsed tag is written with its value text as it was read.
#[must_use]
pub fn format_tag(tag: &Tag) -> String {
    let value = match tag.text() {
        Some(text) => text.to_string(),
        None => format_value(tag.value()),
    };
    format!("{}:{}:{value}", tag.name(), tag.value().tag_type().as_char())
}

/// Checks that a tag can be written as a token that parses back to the same value.
///
/// Values built in code bypass the grammar; this catches the ones that would corrupt
/// the tab-separated text, such as a `Z` value holding a tab.
///
/// # Errors
///
/// Returns [`FailureKind::MalformedTag`] describing the first problem found.
pub fn validate_tag(tag: &Tag) -> Result<(), FailureKind> {
    let problem = match tag.value() {
        TagValue::Character(c) if !c.is_ascii_graphic() => {
            Some("A value must be a single printable character")
        }
        TagValue::Integer(n) if !(TagValue::MIN_INTEGER..=TagValue::MAX_INTEGER).contains(n) => {
            Some("integer out of 32-bit range")
        }
        TagValue::Float(x) if !x.is_finite() => Some("float must be finite"),
        TagValue::String(s) if s.chars().any(char::is_control) => {
            Some("Z value contains control characters")
        }
        TagValue::Array(TagArray::Float(v)) if v.iter().any(|x| !x.is_finite()) => {
            Some("float array elements must be finite")
        }
        _ => None,
    };
    match problem {
        Some(reason) => Err(malformed(&format_tag(tag), reason)),
        None => Ok(()),
    }
}

/// Formats tags as a tab-separated optional-field string.
pub fn encode<'a, I>(tags: I) -> String
where
    I: IntoIterator<Item = &'a Tag>,
{
    let joined = tags.into_iter().map(format_tag).collect::<Vec<_>>().join("\t");
    joined.trim_end().to_string()
}
