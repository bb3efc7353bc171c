//! Split keys
//!
//! A posting list that grows too large is stored as several parts. Each part
//! lives under its base key with the split flag set and the part's first uid
//! appended. Parts of one list sort by start uid after the base key. Because
//! the flag precedes the suffix, they also follow every unsplit key of the
//! same predicate and kind while staying inside that kind's range.

use bytes::BufMut;

use crate::error::{KeyError, Result};

use super::parse::parse_key;
use super::{BYTE_SPLIT, UID_SIZE};

/// Build the key of the split part of `base_key` starting at `start_uid`
///
/// `base_key` must be an unsplit data, reverse, index or count key produced
/// by this codec; anything else is rejected with [`KeyError::InvalidBaseKey`].
pub fn split_key(base_key: &[u8], start_uid: u64) -> Result<Vec<u8>> {
    let parsed = parse_key(base_key).map_err(|e| KeyError::InvalidBaseKey(e.to_string()))?;

    if !parsed.kind.is_entity() {
        return Err(KeyError::InvalidBaseKey(format!(
            "{:?} keys cannot be split",
            parsed.kind
        )));
    }
    if parsed.has_start_uid() {
        return Err(KeyError::InvalidBaseKey("key is already split".to_string()));
    }
    if base_key.len() != parsed.encoded_len() {
        return Err(KeyError::InvalidBaseKey(format!(
            "expected {} bytes, got {}",
            parsed.encoded_len(),
            base_key.len()
        )));
    }

    let mut key = Vec::with_capacity(base_key.len() + UID_SIZE);
    key.extend_from_slice(base_key);
    key[parsed.split_flag_offset()] = BYTE_SPLIT;
    key.put_u64(start_uid);

    Ok(key)
}
