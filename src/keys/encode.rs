//! Key encoders
//!
//! One constructor per key kind. Each allocates a buffer sized exactly for
//! its fields; none of them touch caller-owned memory.

use bytes::BufMut;

use super::attr::{attr_field_len, write_attr};
use super::parse::ParsedKey;
use super::{
    KeyKind, BYTE_COUNT, BYTE_COUNT_REV, BYTE_DATA, BYTE_INDEX, BYTE_REVERSE, BYTE_SCHEMA,
    BYTE_SPLIT, BYTE_TYPE, COUNT_SIZE, DEFAULT_PREFIX, UID_SIZE,
};

// =============================================================================
// Metadata Keys
// =============================================================================

/// Encode the schema key of a predicate
///
/// Format: `[BYTE_SCHEMA][attr]`
pub fn schema_key(attr: &str) -> Vec<u8> {
    metadata_key(BYTE_SCHEMA, attr)
}

/// Encode the key of a type definition
///
/// Format: `[BYTE_TYPE][type_name]`
pub fn type_key(type_name: &str) -> Vec<u8> {
    metadata_key(BYTE_TYPE, type_name)
}

fn metadata_key(prefix: u8, name: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + attr_field_len(name));
    key.put_u8(prefix);
    write_attr(&mut key, name);
    key
}

// =============================================================================
// Entity Keys
// =============================================================================

/// Encode the data key for (attr, uid)
///
/// Format: `[DEFAULT_PREFIX][attr][BYTE_DATA][0][uid]`
pub fn data_key(attr: &str, uid: u64) -> Vec<u8> {
    let mut key = entity_header(attr, BYTE_DATA, UID_SIZE);
    key.put_u64(uid);
    key
}

/// Encode the reverse key for (attr, uid)
///
/// Format: `[DEFAULT_PREFIX][attr][BYTE_REVERSE][0][uid]`
pub fn reverse_key(attr: &str, uid: u64) -> Vec<u8> {
    let mut key = entity_header(attr, BYTE_REVERSE, UID_SIZE);
    key.put_u64(uid);
    key
}

/// Encode the index key for (attr, term)
///
/// The term has no length prefix; it runs to the end of the key (or up to the
/// trailing start_uid once split).
///
/// Format: `[DEFAULT_PREFIX][attr][BYTE_INDEX][0][term]`
pub fn index_key(attr: &str, term: impl AsRef<[u8]>) -> Vec<u8> {
    let term = term.as_ref();
    let mut key = entity_header(attr, BYTE_INDEX, term.len());
    key.put_slice(term);
    key
}

/// Encode the count key for (attr, count), forward or reverse
///
/// Format: `[DEFAULT_PREFIX][attr][BYTE_COUNT | BYTE_COUNT_REV][0][count]`
pub fn count_key(attr: &str, count: u32, reverse: bool) -> Vec<u8> {
    let type_byte = if reverse { BYTE_COUNT_REV } else { BYTE_COUNT };
    let mut key = entity_header(attr, type_byte, COUNT_SIZE);
    key.put_u32(count);
    key
}

/// Prefix, attr, type byte and a cleared split flag, with room for the suffix
fn entity_header(attr: &str, type_byte: u8, suffix_len: usize) -> Vec<u8> {
    let mut key = Vec::with_capacity(1 + attr_field_len(attr) + 2 + suffix_len);
    key.put_u8(DEFAULT_PREFIX);
    write_attr(&mut key, attr);
    key.put_u8(type_byte);
    key.put_u8(0);
    key
}

// =============================================================================
// Re-encoding
// =============================================================================

impl ParsedKey {
    /// Encode this key back to bytes, including the split suffix if present
    pub fn to_key(&self) -> Vec<u8> {
        let mut key = match self.kind {
            KeyKind::Schema => return schema_key(&self.attr),
            KeyKind::Type => return type_key(&self.attr),
            KeyKind::Data => data_key(&self.attr, self.uid),
            KeyKind::Reverse => reverse_key(&self.attr, self.uid),
            KeyKind::Index => index_key(&self.attr, &self.term),
            KeyKind::Count => count_key(&self.attr, self.count, false),
            KeyKind::CountReverse => count_key(&self.attr, self.count, true),
        };

        if let Some(start_uid) = self.start_uid {
            key[self.split_flag_offset()] = BYTE_SPLIT;
            key.reserve_exact(UID_SIZE);
            key.put_u64(start_uid);
        }
        key
    }
}
