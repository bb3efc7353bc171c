//! Scan boundaries
//!
//! Lower bounds (prefixes) and exclusive upper bounds (skip keys) for range
//! iteration over one predicate, one key kind of a predicate, or a whole
//! metadata section. The results are seek targets, never stored keys.

use bytes::BufMut;

use super::attr::{attr_field_len, write_attr};
use super::parse::ParsedKey;
use super::{
    KeyKind, BYTE_COUNT, BYTE_COUNT_REV, BYTE_DATA, BYTE_INDEX, BYTE_REVERSE, BYTE_SCHEMA,
    BYTE_TYPE, DEFAULT_PREFIX,
};

/// `[prefix][attr][tail]`
fn attr_bound(prefix: u8, attr: &str, tail: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + attr_field_len(attr) + tail.len());
    buf.put_u8(prefix);
    write_attr(&mut buf, attr);
    buf.put_slice(tail);
    buf
}

impl ParsedKey {
    // =========================================================================
    // Skip Keys
    // =========================================================================

    /// Sorts after every key of this predicate, whatever its kind
    pub fn skip_predicate(&self) -> Vec<u8> {
        attr_bound(self.kind.prefix_byte(), &self.attr, &[0xFF])
    }

    /// Sorts after every key of this predicate and kind, before the next kind
    pub fn skip_range_of_same_type(&self) -> Vec<u8> {
        let type_byte = self.kind.type_byte().unwrap_or(BYTE_DATA);
        attr_bound(self.kind.prefix_byte(), &self.attr, &[type_byte + 1])
    }

    /// Sorts after the whole schema section
    pub fn skip_schema(&self) -> Vec<u8> {
        vec![BYTE_SCHEMA + 1]
    }

    /// Sorts after the whole type section
    pub fn skip_type(&self) -> Vec<u8> {
        vec![BYTE_TYPE + 1]
    }

    // =========================================================================
    // Prefixes
    // =========================================================================

    pub fn data_prefix(&self) -> Vec<u8> {
        attr_bound(self.kind.prefix_byte(), &self.attr, &[BYTE_DATA, 0])
    }

    pub fn index_prefix(&self) -> Vec<u8> {
        attr_bound(self.kind.prefix_byte(), &self.attr, &[BYTE_INDEX, 0])
    }

    pub fn reverse_prefix(&self) -> Vec<u8> {
        attr_bound(self.kind.prefix_byte(), &self.attr, &[BYTE_REVERSE, 0])
    }

    pub fn count_prefix(&self, reverse: bool) -> Vec<u8> {
        let type_byte = if reverse { BYTE_COUNT_REV } else { BYTE_COUNT };
        attr_bound(self.kind.prefix_byte(), &self.attr, &[type_byte, 0])
    }

    /// Prefix of this key's own kind, `None` for schema and type keys
    pub fn kind_prefix(&self) -> Option<Vec<u8>> {
        match self.kind {
            KeyKind::Data => Some(self.data_prefix()),
            KeyKind::Index => Some(self.index_prefix()),
            KeyKind::Reverse => Some(self.reverse_prefix()),
            KeyKind::Count => Some(self.count_prefix(false)),
            KeyKind::CountReverse => Some(self.count_prefix(true)),
            KeyKind::Schema | KeyKind::Type => None,
        }
    }
}

/// Lower bound of the schema section
pub fn schema_prefix() -> Vec<u8> {
    vec![BYTE_SCHEMA]
}

/// Lower bound of the type section
pub fn type_prefix() -> Vec<u8> {
    vec![BYTE_TYPE]
}

/// Lower bound of every data, index, reverse and count key of `predicate`
///
/// Schema keys live in their own section and are not covered.
pub fn predicate_prefix(predicate: &str) -> Vec<u8> {
    attr_bound(DEFAULT_PREFIX, predicate, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_predicate_layout() {
        let key = ParsedKey::new(KeyKind::Reverse, "follows");
        let skip = key.skip_predicate();
        assert_eq!(skip.len(), 1 + 2 + 7 + 1);
        assert_eq!(skip[0], DEFAULT_PREFIX);
        assert_eq!(*skip.last().unwrap(), 0xFF);
    }

    #[test]
    fn test_skip_range_of_same_type() {
        let key = ParsedKey::new(KeyKind::CountReverse, "x");
        assert_eq!(key.skip_range_of_same_type(), vec![0x00, 0x00, 0x01, b'x', 0x0D]);
    }

    #[test]
    fn test_metadata_skips() {
        let key = ParsedKey::new(KeyKind::Schema, "x");
        assert_eq!(key.skip_schema(), vec![0x02]);
        assert_eq!(key.skip_type(), vec![0x03]);
        assert_eq!(schema_prefix(), vec![0x01]);
        assert_eq!(type_prefix(), vec![0x02]);
    }

    #[test]
    fn test_kind_prefix() {
        let key = ParsedKey::new(KeyKind::Index, "tag");
        assert_eq!(key.kind_prefix(), Some(key.index_prefix()));
        assert_eq!(ParsedKey::new(KeyKind::Type, "T").kind_prefix(), None);
    }

    #[test]
    fn test_predicate_prefix() {
        assert_eq!(predicate_prefix("ab"), vec![0x00, 0x00, 0x02, b'a', b'b']);
    }
}
