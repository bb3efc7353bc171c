//! # graphkeys
//!
//! Key codec for a graph-oriented key-value storage engine:
//! - Order-preserving byte layout for data, index, reverse and count keys
//! - Schema and type keys in their own contiguous sections
//! - Split keys for posting lists stored in several parts
//! - Bounds-checked parsing back into structured keys
//! - Prefix and skip keys for range scans
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Storage Engine (sorted KV)                   │
//! └───────┬─────────────────────┬──────────────────────┬────────┘
//!         │ write               │ read                 │ seek
//! ┌───────▼───────┐     ┌───────▼───────┐     ┌────────▼───────┐
//! │  Key Encoder  │     │  Key Parser   │     │ Scan Boundaries│
//! │ (+ split_key) │     │  (ParsedKey)  │────▶│ (prefix/skip)  │
//! └───────┬───────┘     └───────────────┘     └────────────────┘
//!         │
//! ┌───────▼───────┐
//! │  Attr Writer  │
//! └───────────────┘
//! ```
//!
//! Every function is pure and allocates its own output, so the codec can be
//! shared freely across threads.
//!
//! ```
//! use graphkeys::keys::{data_key, parse_key, split_key};
//!
//! let key = data_key("name", 7);
//! let parsed = parse_key(&key).unwrap();
//! assert_eq!(parsed.attr, "name");
//! assert_eq!(parsed.uid, 7);
//! assert!(!parsed.has_start_uid());
//!
//! let part = split_key(&key, 1000).unwrap();
//! assert_eq!(parse_key(&part).unwrap().start_uid, Some(1000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod keys;
pub mod predicate;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{KeyError, Result};
pub use config::Config;
pub use keys::{KeyKind, ParsedKey, Parser};
pub use predicate::{is_acl_predicate, is_reserved_predicate};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of graphkeys
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
