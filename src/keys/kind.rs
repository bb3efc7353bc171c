//! Key kind definitions
//!
//! Maps the prefix and type bytes of a key onto a closed set of kinds.

use serde::{Deserialize, Serialize};

use super::{
    BYTE_COUNT, BYTE_COUNT_REV, BYTE_DATA, BYTE_INDEX, BYTE_REVERSE, BYTE_SCHEMA, BYTE_TYPE,
    DEFAULT_PREFIX,
};

/// Every kind of key the codec produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    /// Posting list of values/edges for (attr, uid)
    Data,

    /// Index posting list for (attr, term)
    Index,

    /// Reverse edges pointing at (attr, uid)
    Reverse,

    /// Uids having `count` forward edges for attr
    Count,

    /// Uids having `count` reverse edges for attr
    CountReverse,

    /// Schema definition of a predicate
    Schema,

    /// Type definition
    Type,
}

impl KeyKind {
    /// Leading byte of keys of this kind
    pub fn prefix_byte(self) -> u8 {
        match self {
            KeyKind::Schema => BYTE_SCHEMA,
            KeyKind::Type => BYTE_TYPE,
            KeyKind::Data
            | KeyKind::Index
            | KeyKind::Reverse
            | KeyKind::Count
            | KeyKind::CountReverse => DEFAULT_PREFIX,
        }
    }

    /// Type byte following the attribute, `None` for schema and type keys
    pub fn type_byte(self) -> Option<u8> {
        match self {
            KeyKind::Data => Some(BYTE_DATA),
            KeyKind::Index => Some(BYTE_INDEX),
            KeyKind::Reverse => Some(BYTE_REVERSE),
            KeyKind::Count => Some(BYTE_COUNT),
            KeyKind::CountReverse => Some(BYTE_COUNT_REV),
            KeyKind::Schema | KeyKind::Type => None,
        }
    }

    /// Resolve the type byte of a default-prefix key
    pub fn from_type_byte(byte: u8) -> Option<Self> {
        match byte {
            BYTE_DATA => Some(KeyKind::Data),
            BYTE_INDEX => Some(KeyKind::Index),
            BYTE_REVERSE => Some(KeyKind::Reverse),
            BYTE_COUNT => Some(KeyKind::Count),
            BYTE_COUNT_REV => Some(KeyKind::CountReverse),
            _ => None,
        }
    }

    /// True for kinds that carry a type byte, split flag and suffix
    pub fn is_entity(self) -> bool {
        self.type_byte().is_some()
    }

    /// Count key kind for the given direction
    pub fn count(reverse: bool) -> Self {
        if reverse {
            KeyKind::CountReverse
        } else {
            KeyKind::Count
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [KeyKind; 7] = [
        KeyKind::Data,
        KeyKind::Index,
        KeyKind::Reverse,
        KeyKind::Count,
        KeyKind::CountReverse,
        KeyKind::Schema,
        KeyKind::Type,
    ];

    #[test]
    fn test_type_byte_resolves_back() {
        for kind in ALL {
            match kind.type_byte() {
                Some(byte) => assert_eq!(KeyKind::from_type_byte(byte), Some(kind)),
                None => assert!(!kind.is_entity()),
            }
        }
    }

    #[test]
    fn test_unknown_type_bytes() {
        for byte in [0x01, 0x03, 0x05, 0x09, 0x0D, 0xFF] {
            assert_eq!(KeyKind::from_type_byte(byte), None);
        }
    }

    #[test]
    fn test_prefix_bytes() {
        assert_eq!(KeyKind::Schema.prefix_byte(), 0x01);
        assert_eq!(KeyKind::Type.prefix_byte(), 0x02);
        assert_eq!(KeyKind::CountReverse.prefix_byte(), 0x00);
        assert_eq!(BYTE_COUNT_REV, 0x0C);
    }
}
