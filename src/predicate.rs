//! Predicate classification
//!
//! Names the engine reserves for itself. Matching is case-insensitive.

/// Attribute holding the list of predicates set on a node
pub const PREDICATE_LIST_ATTR: &str = "_predicate_";

/// Attribute holding the types of a node
pub const TYPE_ATTR: &str = "dgraph.type";

const RESERVED_PREDICATES: &[&str] = &[PREDICATE_LIST_ATTR, TYPE_ATTR];

const ACL_PREDICATES: &[&str] = &[
    "dgraph.xid",
    "dgraph.password",
    "dgraph.user.group",
    "dgraph.group.acl",
];

/// True if `pred` is reserved, including every ACL predicate
pub fn is_reserved_predicate(pred: &str) -> bool {
    contains(RESERVED_PREDICATES, pred) || is_acl_predicate(pred)
}

/// True if `pred` is used by access control
pub fn is_acl_predicate(pred: &str) -> bool {
    contains(ACL_PREDICATES, pred)
}

fn contains(set: &[&str], pred: &str) -> bool {
    let pred = pred.to_lowercase();
    set.iter().any(|name| *name == pred)
}
