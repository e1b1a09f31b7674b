//! World implementations for the search engine.

pub mod graph;
pub mod maze;
pub mod sliding_puzzle;
