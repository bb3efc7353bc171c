//! Key parser
//!
//! Decodes stored key bytes back into a [`ParsedKey`]. Every field is read
//! through a bounds-checked cursor, so malformed or truncated keys produce a
//! [`KeyError`] instead of a panic.

use bytes::Buf;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{KeyError, Result};

use super::attr::{attr_field_len, ATTR_LEN_SIZE};
use super::{KeyKind, BYTE_SCHEMA, BYTE_SPLIT, BYTE_TYPE, COUNT_SIZE, DEFAULT_PREFIX, UID_SIZE};

// =============================================================================
// Parsed Key
// =============================================================================

/// A key decoded into its fields
///
/// Only the fields that the kind carries are meaningful; the rest stay zero.
/// Owns all of its data, so the source buffer can be reused after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedKey {
    /// Kind of key (selects prefix and type byte)
    pub kind: KeyKind,

    /// Predicate or type name
    pub attr: String,

    /// Node uid (data and reverse keys)
    pub uid: u64,

    /// First uid of this part of a split posting list
    pub start_uid: Option<u64>,

    /// Index token (index keys), raw bytes
    pub term: Vec<u8>,

    /// Edge count (count keys)
    pub count: u32,
}

impl ParsedKey {
    /// A key of `kind` for `attr` with every other field zeroed
    pub fn new(kind: KeyKind, attr: impl Into<String>) -> Self {
        Self {
            kind,
            attr: attr.into(),
            uid: 0,
            start_uid: None,
            term: Vec::new(),
            count: 0,
        }
    }

    pub fn has_start_uid(&self) -> bool {
        self.start_uid.is_some()
    }

    /// Term as text, if it is valid UTF-8
    pub fn term_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.term).ok()
    }

    pub fn is_data(&self) -> bool {
        self.kind == KeyKind::Data
    }

    pub fn is_reverse(&self) -> bool {
        self.kind == KeyKind::Reverse
    }

    pub fn is_index(&self) -> bool {
        self.kind == KeyKind::Index
    }

    /// True for forward and reverse count keys
    pub fn is_count(&self) -> bool {
        matches!(self.kind, KeyKind::Count | KeyKind::CountReverse)
    }

    pub fn is_schema(&self) -> bool {
        self.kind == KeyKind::Schema
    }

    pub fn is_type(&self) -> bool {
        self.kind == KeyKind::Type
    }

    /// Whether this key belongs to the same range as `kind`
    ///
    /// Both count kinds match any count key. `Schema` and `Type` match
    /// metadata keys of that kind as well, not only entity kinds.
    pub fn is_of_type(&self, kind: KeyKind) -> bool {
        match kind {
            KeyKind::Count | KeyKind::CountReverse => self.is_count(),
            KeyKind::Data => self.is_data(),
            KeyKind::Index => self.is_index(),
            KeyKind::Reverse => self.is_reverse(),
            KeyKind::Schema => self.is_schema(),
            KeyKind::Type => self.is_type(),
        }
    }

    /// Offset of the split flag byte within the encoded key
    pub(crate) fn split_flag_offset(&self) -> usize {
        1 + attr_field_len(&self.attr) + 1
    }

    /// Length of the encoded key
    pub fn encoded_len(&self) -> usize {
        let base = 1 + attr_field_len(&self.attr);
        let suffix = match self.kind {
            KeyKind::Schema | KeyKind::Type => return base,
            KeyKind::Data | KeyKind::Reverse => UID_SIZE,
            KeyKind::Index => self.term.len(),
            KeyKind::Count | KeyKind::CountReverse => COUNT_SIZE,
        };
        let split = if self.has_start_uid() { UID_SIZE } else { 0 };
        base + 2 + suffix + split
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Key parser configured with diagnostics settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    config: Config,
}

impl Parser {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Parse a stored key
    ///
    /// All-or-nothing: either every field the kind requires is decoded or an
    /// error is returned. Bytes after a fixed-width suffix are ignored.
    ///
    /// Only the schema, type and default prefixes are accepted. Any other
    /// leading byte fails with [`KeyError::UnknownPrefix`] instead of being
    /// read as an entity key.
    pub fn parse(&self, key: &[u8]) -> Result<ParsedKey> {
        let mut parsed = ParsedKey::new(KeyKind::Data, String::new());

        match parse_into(key, &mut parsed) {
            Ok(()) => Ok(parsed),
            Err(err) => {
                if self.config.debug_mode {
                    tracing::debug!(
                        key = ?key,
                        attr = %parsed.attr,
                        kind = ?parsed.kind,
                        error = %err,
                        "Failed to parse key"
                    );
                }
                Err(err)
            }
        }
    }
}

/// Parse a key with the default configuration
pub fn parse_key(key: &[u8]) -> Result<ParsedKey> {
    Parser::default().parse(key)
}

fn parse_into(key: &[u8], parsed: &mut ParsedKey) -> Result<()> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }

    let mut reader = KeyReader::new(key);
    let prefix = reader.read_u8("prefix")?;

    let attr_len = reader.read_u16("attr length")? as usize;
    let attr = reader.take("attr", attr_len)?;
    parsed.attr = std::str::from_utf8(attr)
        .map_err(|e| KeyError::InvalidAttr(e.to_string()))?
        .to_owned();

    match prefix {
        BYTE_SCHEMA => {
            parsed.kind = KeyKind::Schema;
            return Ok(());
        }
        BYTE_TYPE => {
            parsed.kind = KeyKind::Type;
            return Ok(());
        }
        DEFAULT_PREFIX => {}
        other => return Err(KeyError::UnknownPrefix(other)),
    }

    let type_byte = reader.read_u8("type")?;
    parsed.kind = KeyKind::from_type_byte(type_byte).ok_or(KeyError::UnknownKeyType(type_byte))?;

    let split = reader.read_u8("split flag")? == BYTE_SPLIT;

    match parsed.kind {
        KeyKind::Data | KeyKind::Reverse => {
            parsed.uid = reader.read_u64("uid")?;
            if split {
                parsed.start_uid = Some(reader.read_u64("start uid")?);
            }
        }
        KeyKind::Index => {
            if split {
                let term_len = reader
                    .remaining()
                    .checked_sub(UID_SIZE)
                    .ok_or(KeyError::Truncated {
                        field: "start uid",
                        needed: UID_SIZE,
                        remaining: reader.remaining(),
                    })?;
                parsed.term = reader.take("term", term_len)?.to_vec();
                parsed.start_uid = Some(reader.read_u64("start uid")?);
            } else {
                parsed.term = reader.rest().to_vec();
            }
        }
        KeyKind::Count | KeyKind::CountReverse => {
            parsed.count = reader.read_u32("count")?;
            if split {
                parsed.start_uid = Some(reader.read_u64("start uid")?);
            }
        }
        KeyKind::Schema | KeyKind::Type => return Err(KeyError::UnknownKeyType(type_byte)),
    }

    Ok(())
}

// =============================================================================
// Bounds-checked Reader
// =============================================================================

/// Forward-only cursor over an immutable key
struct KeyReader<'a> {
    buf: &'a [u8],
}

impl<'a> KeyReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// Consume exactly `len` bytes
    fn take(&mut self, field: &'static str, len: usize) -> Result<&'a [u8]> {
        if self.buf.len() < len {
            return Err(KeyError::Truncated {
                field,
                needed: len,
                remaining: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(len);
        self.buf = tail;
        Ok(head)
    }

    /// Consume everything left
    fn rest(&mut self) -> &'a [u8] {
        std::mem::take(&mut self.buf)
    }

    fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        Ok(self.take(field, 1)?[0])
    }

    fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        Ok(self.take(field, ATTR_LEN_SIZE)?.get_u16())
    }

    fn read_u32(&mut self, field: &'static str) -> Result<u32> {
        Ok(self.take(field, COUNT_SIZE)?.get_u32())
    }

    fn read_u64(&mut self, field: &'static str) -> Result<u64> {
        Ok(self.take(field, UID_SIZE)?.get_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_take_past_end() {
        let mut reader = KeyReader::new(&[1, 2, 3]);
        assert_eq!(reader.take("a", 2).unwrap(), &[1, 2]);
        assert_eq!(
            reader.take("b", 2),
            Err(KeyError::Truncated {
                field: "b",
                needed: 2,
                remaining: 1
            })
        );
        assert_eq!(reader.rest(), &[3]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_reader_big_endian() {
        let bytes = [0x00, 0x01, 0x00, 0x00, 0x01, 0x00];
        let mut reader = KeyReader::new(&bytes);
        assert_eq!(reader.read_u16("x").unwrap(), 1);
        assert_eq!(reader.read_u32("y").unwrap(), 256);
    }

    #[test]
    fn test_encoded_len_matches_layout() {
        let mut key = ParsedKey::new(KeyKind::Index, "tag");
        key.term = b"rust".to_vec();
        assert_eq!(key.encoded_len(), 1 + 2 + 3 + 2 + 4);
        key.start_uid = Some(9);
        assert_eq!(key.encoded_len(), 1 + 2 + 3 + 2 + 4 + 8);
        assert_eq!(ParsedKey::new(KeyKind::Schema, "tag").encoded_len(), 6);
    }

    #[test]
    fn test_unknown_prefix() {
        let key = [0x07, 0x00, 0x01, b'x', 0x00, 0x00];
        assert_eq!(parse_key(&key), Err(KeyError::UnknownPrefix(0x07)));
    }

    #[test]
    fn test_invalid_utf8_attr() {
        let key = [0x01, 0x00, 0x02, 0xC3, 0x28];
        assert!(matches!(parse_key(&key), Err(KeyError::InvalidAttr(_))));
    }
}
