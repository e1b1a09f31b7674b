//! Shared fixtures for the lock test suite and the `search_fixture` binary.

pub mod fixtures;
