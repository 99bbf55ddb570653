//! Tag tree used as the persisted representation of a game.
//!
//! A small, typed tree in the spirit of NBT: compounds map string keys to
//! tags, lists hold tags, and leaves are integers or strings. Booleans are
//! stored as bytes. Compounds keep keys sorted so two trees built from equal
//! states compare and serialize identically.

use std::collections::BTreeMap;

use crate::codec::CodecError;

/// One node of a tag tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    Byte(i8),
    Int(i32),
    Long(i64),
    String(String),
    List(Vec<Tag>),
    Compound(Compound),
}

impl Tag {
    pub const fn kind(&self) -> &'static str {
        match self {
            Tag::Byte(_) => "byte",
            Tag::Int(_) => "int",
            Tag::Long(_) => "long",
            Tag::String(_) => "string",
            Tag::List(_) => "list",
            Tag::Compound(_) => "compound",
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}

impl From<Compound> for Tag {
    fn from(compound: Compound) -> Self {
        Tag::Compound(compound)
    }
}

impl From<String> for Tag {
    fn from(value: String) -> Self {
        Tag::String(value)
    }
}

impl From<&str> for Tag {
    fn from(value: &str) -> Self {
        Tag::String(value.to_owned())
    }
}

/// Keyed collection of tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Compound(BTreeMap<String, Tag>);

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &str, tag: impl Into<Tag>) {
        self.0.insert(key.to_owned(), tag.into());
    }

    pub fn put_bool(&mut self, key: &str, value: bool) {
        self.put(key, Tag::Byte(i8::from(value)));
    }

    pub fn put_byte(&mut self, key: &str, value: i8) {
        self.put(key, Tag::Byte(value));
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.put(key, Tag::Int(value));
    }

    pub fn put_long(&mut self, key: &str, value: i64) {
        self.put(key, Tag::Long(value));
    }

    pub fn put_string(&mut self, key: &str, value: impl Into<String>) {
        self.put(key, Tag::String(value.into()));
    }

    pub fn put_list(&mut self, key: &str, items: Vec<Tag>) {
        self.put(key, Tag::List(items));
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    fn require(&self, key: &str) -> Result<&Tag, CodecError> {
        self.get(key).ok_or_else(|| CodecError::MissingField {
            key: key.to_owned(),
        })
    }

    fn mismatch(key: &str, expected: &'static str, found: &Tag) -> CodecError {
        CodecError::TypeMismatch {
            key: key.to_owned(),
            expected,
            found: found.kind(),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, CodecError> {
        Ok(self.get_byte(key)? != 0)
    }

    pub fn get_byte(&self, key: &str) -> Result<i8, CodecError> {
        match self.require(key)? {
            Tag::Byte(value) => Ok(*value),
            other => Err(Self::mismatch(key, "byte", other)),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<i32, CodecError> {
        match self.require(key)? {
            Tag::Int(value) => Ok(*value),
            other => Err(Self::mismatch(key, "int", other)),
        }
    }

    pub fn get_long(&self, key: &str) -> Result<i64, CodecError> {
        match self.require(key)? {
            Tag::Long(value) => Ok(*value),
            other => Err(Self::mismatch(key, "long", other)),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<&str, CodecError> {
        match self.require(key)? {
            Tag::String(value) => Ok(value),
            other => Err(Self::mismatch(key, "string", other)),
        }
    }

    pub fn get_list(&self, key: &str) -> Result<&[Tag], CodecError> {
        match self.require(key)? {
            Tag::List(items) => Ok(items),
            other => Err(Self::mismatch(key, "list", other)),
        }
    }

    pub fn get_compound(&self, key: &str) -> Result<&Compound, CodecError> {
        match self.require(key)? {
            Tag::Compound(compound) => Ok(compound),
            other => Err(Self::mismatch(key, "compound", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_getters_report_mismatches() {
        let mut tag = Compound::new();
        tag.put_bool("Flag", true);
        tag.put_long("Time", 42);

        assert_eq!(tag.get_bool("Flag"), Ok(true));
        assert_eq!(tag.get_long("Time"), Ok(42));
        assert_eq!(
            tag.get_int("Time"),
            Err(CodecError::TypeMismatch {
                key: "Time".into(),
                expected: "int",
                found: "long",
            })
        );
        assert_eq!(
            tag.get_string("Missing"),
            Err(CodecError::MissingField {
                key: "Missing".into()
            })
        );
    }

    #[test]
    fn key_order_does_not_affect_equality() {
        let mut a = Compound::new();
        a.put_int("X", 1);
        a.put_int("Y", 2);
        let mut b = Compound::new();
        b.put_int("Y", 2);
        b.put_int("X", 1);

        assert_eq!(a, b);
        assert_eq!(a.keys().collect::<Vec<_>>(), vec!["X", "Y"]);
    }
}
