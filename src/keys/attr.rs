//! Attribute field
//!
//! Every key embeds its predicate (or type name) as `[len: u16 BE][bytes]`.

use bytes::BufMut;

use crate::error::{KeyError, Result};

/// Size of the attribute length field
pub const ATTR_LEN_SIZE: usize = 2;

/// Encoded size of the attribute field
pub fn attr_field_len(attr: &str) -> usize {
    ATTR_LEN_SIZE + attr.len()
}

/// Check that an attribute fits the 2-byte length field
pub fn validate_attr(attr: &str) -> Result<()> {
    if attr.len() > u16::MAX as usize {
        return Err(KeyError::AttrTooLong(attr.len()));
    }
    Ok(())
}

/// Write the attribute field into `buf`
///
/// The buffer advances past the written bytes; for a `&mut [u8]` that leaves
/// `buf` pointing at the unwritten tail.
///
/// # Panics
/// If `attr` is longer than 65535 bytes, or `buf` has too little room. Both
/// are caller bugs; use [`validate_attr`] on untrusted names first.
pub fn write_attr<B: BufMut>(buf: &mut B, attr: &str) {
    assert!(
        attr.len() <= u16::MAX as usize,
        "attribute length {} does not fit the key attr field",
        attr.len()
    );
    buf.put_u16(attr.len() as u16);
    buf.put_slice(attr.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_attr_leaves_tail() {
        let mut storage = [0xAAu8; 8];
        let mut tail = &mut storage[..];
        write_attr(&mut tail, "name");
        assert_eq!(tail.len(), 2);

        assert_eq!(&storage[..6], &[0x00, 0x04, b'n', b'a', b'm', b'e']);
        assert_eq!(&storage[6..], &[0xAA, 0xAA]);
    }

    #[test]
    fn test_write_attr_max_length() {
        let attr = "a".repeat(65535);
        let mut buf = Vec::new();
        write_attr(&mut buf, &attr);
        assert_eq!(&buf[..2], &[0xFF, 0xFF]);
        assert_eq!(buf.len(), 2 + 65535);
    }

    #[test]
    fn test_write_attr_empty() {
        let mut buf = Vec::new();
        write_attr(&mut buf, "");
        assert_eq!(buf, vec![0x00, 0x00]);
    }

    #[test]
    fn test_validate_attr_limit() {
        assert!(validate_attr(&"a".repeat(65535)).is_ok());
        assert_eq!(
            validate_attr(&"a".repeat(65536)),
            Err(KeyError::AttrTooLong(65536))
        );
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_write_attr_too_long_panics() {
        let mut buf = Vec::new();
        write_attr(&mut buf, &"a".repeat(70_000));
    }
}
