//! Typed optional-field names and values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FailureKind;

/// Optional-field name: 2 to 4 ASCII alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    /// Wraps a name known to be valid at compile time.
    pub(crate) fn known(name: &'static str) -> Self {
        debug_assert!(Self::is_valid(name), "invalid built-in tag name {name}");
        Self(name.to_string())
    }

    fn is_valid(name: &str) -> bool {
        (2..=4).contains(&name.len()) && name.bytes().all(|b| b.is_ascii_alphanumeric())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for TagName {
    type Err = FailureKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(FailureKind::MalformedTag {
                token: s.to_string(),
                reason: "tag name must be 2 to 4 alphanumeric characters".to_string(),
            })
        }
    }
}

impl TryFrom<String> for TagName {
    type Error = FailureKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TagName> for String {
    fn from(name: TagName) -> Self {
        name.0
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TagName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TagName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The type code of an optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    /// `A`: a single printable character
    Character,
    /// `i`: a signed integer
    Integer,
    /// `f`: a single-precision float
    Float,
    /// `Z`: printable text
    String,
    /// `H`: a byte array written as uppercase hex pairs
    Hex,
    /// `B`: a typed numeric array
    Array,
}

impl TagType {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::Character),
            'i' => Some(Self::Integer),
            'f' => Some(Self::Float),
            'Z' => Some(Self::String),
            'H' => Some(Self::Hex),
            'B' => Some(Self::Array),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Character => 'A',
            Self::Integer => 'i',
            Self::Float => 'f',
            Self::String => 'Z',
            Self::Hex => 'H',
            Self::Array => 'B',
        }
    }
}

/// The element type of a `B` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float,
}

impl ArrayType {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'c' => Some(Self::Int8),
            'C' => Some(Self::UInt8),
            's' => Some(Self::Int16),
            'S' => Some(Self::UInt16),
            'i' => Some(Self::Int32),
            'I' => Some(Self::UInt32),
            'f' => Some(Self::Float),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Int8 => 'c',
            Self::UInt8 => 'C',
            Self::Int16 => 's',
            Self::UInt16 => 'S',
            Self::Int32 => 'i',
            Self::UInt32 => 'I',
            Self::Float => 'f',
        }
    }
}

/// A typed numeric array.
#[derive(Debug, Clone, PartialEq)]
pub enum TagArray {
    Int8(Vec<i8>),
    UInt8(Vec<u8>),
    Int16(Vec<i16>),
    UInt16(Vec<u16>),
    Int32(Vec<i32>),
    UInt32(Vec<u32>),
    Float(Vec<f32>),
}

impl TagArray {
    #[must_use]
    pub fn array_type(&self) -> ArrayType {
        match self {
            Self::Int8(_) => ArrayType::Int8,
            Self::UInt8(_) => ArrayType::UInt8,
            Self::Int16(_) => ArrayType::Int16,
            Self::UInt16(_) => ArrayType::UInt16,
            Self::Int32(_) => ArrayType::Int32,
            Self::UInt32(_) => ArrayType::UInt32,
            Self::Float(_) => ArrayType::Float,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int8(v) => v.len(),
            Self::UInt8(v) => v.len(),
            Self::Int16(v) => v.len(),
            Self::UInt16(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::UInt32(v) => v.len(),
            Self::Float(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The value of an optional field.
///
/// `Integer` holds anything in `i32::MIN..=u32::MAX`, the union of the signed and
/// unsigned 32-bit ranges SAM integers may take.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Character(char),
    Integer(i64),
    Float(f32),
    String(String),
    Hex(Vec<u8>),
    Array(TagArray),
}

impl TagValue {
    /// Smallest integer a SAM `i` field may hold
    pub const MIN_INTEGER: i64 = i32::MIN as i64;

    /// Largest integer a SAM `i` field may hold
    pub const MAX_INTEGER: i64 = u32::MAX as i64;

    #[must_use]
    pub fn tag_type(&self) -> TagType {
        match self {
            Self::Character(_) => TagType::Character,
            Self::Integer(_) => TagType::Integer,
            Self::Float(_) => TagType::Float,
            Self::String(_) => TagType::String,
            Self::Hex(_) => TagType::Hex,
            Self::Array(_) => TagType::Array,
        }
    }

    /// Returns the text of a `Z` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number held by an `i` value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i32> for TagValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<TagArray> for TagValue {
    fn from(array: TagArray) -> Self {
        Self::Array(array)
    }
}
