//! Proof module: canonical JSON and content hashing.
//!
//! `canon` has no internal dependencies. `hash` depends on `hash_domain`.

pub mod canon;
pub mod hash;
pub mod hash_domain;
