//! Keys Module
//!
//! Byte layout of every key the storage engine writes.
//!
//! ## Key Format
//! ```text
//! ┌──────────┬────────────┬──────────────┬──────────┬──────────┬───────────────────┐
//! │Prefix (1)│ AttrLen (2)│  Attr bytes  │ Type (1) │ Split (1)│ Suffix            │
//! └──────────┴────────────┴──────────────┴──────────┴──────────┴───────────────────┘
//! ```
//!
//! ### Layout by Key Kind
//! - Schema:  `[0x01][attr]`
//! - Type:    `[0x02][attr]`
//! - Data:    `[0x00][attr][0x00][split][uid (8)][start_uid (8) if split]`
//! - Reverse: `[0x00][attr][0x04][split][uid (8)][start_uid (8) if split]`
//! - Index:   `[0x00][attr][0x02][split][term bytes][start_uid (8) if split]`
//! - Count:   `[0x00][attr][0x08 | 0x0C][split][count (4)][start_uid (8) if split]`
//!
//! All integers are big-endian so byte order equals numeric order. Data,
//! index, reverse and count keys share the default prefix, so every key of
//! one predicate sorts as a single contiguous range.

mod attr;
mod bounds;
mod encode;
mod kind;
mod parse;
mod split;


pub use attr::{attr_field_len, validate_attr, write_attr, ATTR_LEN_SIZE};
pub use bounds::{predicate_prefix, schema_prefix, type_prefix};
pub use encode::{count_key, data_key, index_key, reverse_key, schema_key, type_key};
pub use kind::KeyKind;
pub use parse::{parse_key, ParsedKey, Parser};
pub use split::split_key;

// =============================================================================
// Prefix Bytes (byte 0)
// =============================================================================

/// Prefix shared by data, index, reverse and count keys
pub const DEFAULT_PREFIX: u8 = 0x00;

/// Prefix of schema keys
pub const BYTE_SCHEMA: u8 = 0x01;

/// Prefix of type keys
pub const BYTE_TYPE: u8 = 0x02;

// =============================================================================
// Type Bytes (after the attribute)
// =============================================================================

pub const BYTE_DATA: u8 = 0x00;
pub const BYTE_INDEX: u8 = 0x02;
pub const BYTE_REVERSE: u8 = 0x04;
pub const BYTE_COUNT: u8 = 0x08;
pub const BYTE_COUNT_REV: u8 = BYTE_COUNT | BYTE_REVERSE;

/// Split flag marking a key that holds one part of a split posting list
pub const BYTE_SPLIT: u8 = 0x01;

/// Size of an encoded uid / start_uid
pub(crate) const UID_SIZE: usize = 8;

/// Size of an encoded count
pub(crate) const COUNT_SIZE: usize = 4;
