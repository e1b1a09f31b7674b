//! Grid mazes and the single-robot navigation world.
//!
//! # Grid format
//!
//! One text line per row. `#` is a wall; any other character is floor.
//! Lines are trimmed and lowercased, and blank lines are skipped. Position
//! `(x, y)` is column `x` of the `y`-th non-blank line, so `(0, 0)` is the
//! top-left cell.

use std::collections::BTreeSet;
use std::path::Path;

use wayfind_kernel::proof::hash::{canonical_hash, ContentHash};
use wayfind_kernel::proof::hash_domain::HashDomain;
use wayfind_search::{Heuristic, SearchProblem};

/// Wall character.
pub const WALL: char = '#';

/// A cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Taxicab distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u64 {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as u64
    }
}

/// Typed failure for maze loading and world construction.
#[derive(Debug)]
pub enum MazeError {
    /// Reading the maze file failed.
    Io { path: String, source: std::io::Error },
    /// The text had no non-blank lines.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A position lies outside the grid.
    OutOfBounds { position: Position },
    /// A position is a wall.
    Wall { position: Position },
}

impl std::fmt::Display for MazeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read maze {path}: {source}"),
            Self::Empty => write!(f, "maze has no rows"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(f, "maze row {row} has width {found}, expected {expected}"),
            Self::OutOfBounds { position } => {
                write!(f, "position ({}, {}) is outside the maze", position.x, position.y)
            }
            Self::Wall { position } => {
                write!(f, "position ({}, {}) is a wall", position.x, position.y)
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// An immutable rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Maze {
    /// Parse a maze from text.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Empty`] if there are no non-blank lines and
    /// [`MazeError::Ragged`] if rows differ in width.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();

        let width = rows.first().map(Vec::len).ok_or(MazeError::Empty)?;
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MazeError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }
        Ok(Self { rows, width })
    }

    /// Load and parse a maze file.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Maze::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let maze = Self::parse(&text)?;
        tracing::debug!(
            path = %path.display(),
            width = maze.width(),
            height = maze.height(),
            "loaded maze"
        );
        Ok(maze)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at `(x, y)`, `None` if out of bounds.
    #[must_use]
    pub fn get_char(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    #[must_use]
    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.get_char(x, y).is_some_and(|c| c != WALL)
    }

    /// Row-major index of `(x, y)`, `None` if out of bounds.
    #[must_use]
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height()).then(|| y * self.width + x)
    }

    /// Inverse of [`Maze::index`].
    #[must_use]
    pub fn de_index(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    /// Number of floor cells.
    #[must_use]
    pub fn count_positions(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c != WALL).count()
    }

    /// Distinct floor characters.
    #[must_use]
    pub fn floor_kinds(&self) -> BTreeSet<char> {
        self.rows
            .iter()
            .flatten()
            .copied()
            .filter(|&c| c != WALL)
            .collect()
    }

    /// Content hash of the normalized grid (the [`Display`] rendering).
    ///
    /// [`Display`]: std::fmt::Display
    #[must_use]
    pub fn content_hash(&self) -> ContentHash {
        canonical_hash(HashDomain::WorldFixture, self.to_string().as_bytes())
    }

    /// Floor neighbours of `p`: east, west, south, north.
    #[must_use]
    pub fn neighbors(&self, p: Position) -> Vec<Position> {
        let candidates = [
            p.x.checked_add(1).map(|x| Position::new(x, p.y)),
            p.x.checked_sub(1).map(|x| Position::new(x, p.y)),
            p.y.checked_add(1).map(|y| Position::new(p.x, y)),
            p.y.checked_sub(1).map(|y| Position::new(p.x, y)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|n| self.is_floor(n.x, n.y))
            .collect()
    }

    fn check_floor(&self, position: Position) -> Result<(), MazeError> {
        match self.get_char(position.x, position.y) {
            None => Err(MazeError::OutOfBounds { position }),
            Some(WALL) => Err(MazeError::Wall { position }),
            Some(_) => Ok(()),
        }
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Move one robot from `start` to `goal` through a maze, unit cost per step.
#[derive(Debug, Clone)]
pub struct MazeWorld {
    id: String,
    maze: Maze,
    start: Position,
    goal: Position,
}

impl MazeWorld {
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] or [`MazeError::Wall`] if `start`
    /// or `goal` is not a floor cell.
    pub fn new(
        id: impl Into<String>,
        maze: Maze,
        start: Position,
        goal: Position,
    ) -> Result<Self, MazeError> {
        maze.check_floor(start)?;
        maze.check_floor(goal)?;
        Ok(Self {
            id: id.into(),
            maze,
            start,
            goal,
        })
    }

    #[must_use]
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    #[must_use]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Admissible, consistent heuristic for this world.
    #[must_use]
    pub fn manhattan(&self) -> ManhattanHeuristic {
        ManhattanHeuristic { goal: self.goal }
    }
}

impl SearchProblem for MazeWorld {
    type State = Position;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Vec<Position> {
        self.maze.neighbors(*state)
    }
}

/// Taxicab distance to a fixed goal cell.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanHeuristic {
    pub goal: Position,
}

impl Heuristic<Position> for ManhattanHeuristic {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "manhattan"
    }

    fn estimate(&self, state: &Position) -> u64 {
        state.manhattan(self.goal)
    }
}
