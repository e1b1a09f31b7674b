//! Wayfind Kernel: deterministic serialization and hashing primitives.
//!
//! # API Surface
//!
//! - [`proof::canon::canonical_json_bytes`] -- canonical JSON bytes for hashing
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hash
//!
//! The kernel knows nothing about search. `wayfind_search` fingerprints its
//! expansion traces through these functions and `wayfind_harness` does the
//! same for run reports.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
