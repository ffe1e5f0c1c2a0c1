//! JSON:API member names.
//!
//! Every place the crate reads or writes a document member goes through
//! these constants, so a typo is a compile error instead of a silent
//! validation hole.

pub const ID: &str = "id";
pub const TYPE: &str = "type";
pub const DATA: &str = "data";
pub const ATTRIBUTES: &str = "attributes";
pub const RELATIONSHIPS: &str = "relationships";
pub const LINKS: &str = "links";
pub const INCLUDED: &str = "included";
pub const META: &str = "meta";
pub const ERRORS: &str = "errors";
pub const JSONAPI: &str = "jsonapi";

// Links object members.
pub const SELF: &str = "self";
pub const RELATED: &str = "related";
pub const ABOUT: &str = "about";

// Error object members.
pub const STATUS: &str = "status";
pub const CODE: &str = "code";
pub const TITLE: &str = "title";
pub const DETAIL: &str = "detail";
pub const SOURCE: &str = "source";
pub const POINTER: &str = "pointer";
pub const PARAMETER: &str = "parameter";

// Pagination link names. Not validated structurally (pagination shape is
// out of scope) but exposed so callers can index `links()` without
// re-spelling them.
pub const FIRST: &str = "first";
pub const LAST: &str = "last";
pub const PREV: &str = "prev";
pub const NEXT: &str = "next";
