//! Wayfind Harness: example worlds and a report runner for the A* engine.
//!
//! Worlds implement [`wayfind_search::SearchProblem`] and provide domain
//! heuristics. The engine stays domain-free; everything about grids, tiles
//! and graph files lives here.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod heuristics;
pub mod runner;
pub mod worlds;
