//! Sliding-tile puzzles (8-puzzle and friends).
//!
//! A board is an `n × n` row-major permutation of `0..n²`, where `0` is the
//! blank. A move slides the blank one cell up, down, left or right; each
//! move costs 1.

use wayfind_search::{Heuristic, SearchProblem};

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Side length below 2.
    SizeTooSmall { size: usize },
    /// Side length whose cell count does not fit a `u8` tile label.
    SizeTooLarge { size: usize },
    /// Tile count differs from `size²`.
    TileCount { expected: usize, found: usize },
    /// A tile label is out of range or repeated.
    NotPermutation { tile: u8 },
    /// Start and goal boards differ in side length.
    SizeMismatch { start: usize, goal: usize },
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SizeTooSmall { size } => write!(f, "board size {size} is below 2"),
            Self::SizeTooLarge { size } => write!(f, "board size {size} is too large"),
            Self::TileCount { expected, found } => {
                write!(f, "expected {expected} tiles, found {found}")
            }
            Self::NotPermutation { tile } => {
                write!(f, "tile {tile} is out of range or repeated")
            }
            Self::SizeMismatch { start, goal } => {
                write!(f, "start board is {start}x{start} but goal is {goal}x{goal}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// One puzzle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
}

impl Board {
    /// # Errors
    ///
    /// Returns [`PuzzleError`] unless `tiles` is a permutation of `0..size²`
    /// with `2 <= size <= 16`.
    pub fn new(size: usize, tiles: Vec<u8>) -> Result<Self, PuzzleError> {
        if size < 2 {
            return Err(PuzzleError::SizeTooSmall { size });
        }
        let cells = size * size;
        if cells > usize::from(u8::MAX) + 1 {
            return Err(PuzzleError::SizeTooLarge { size });
        }
        if tiles.len() != cells {
            return Err(PuzzleError::TileCount {
                expected: cells,
                found: tiles.len(),
            });
        }
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            match seen.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(PuzzleError::NotPermutation { tile }),
            }
        }
        Ok(Self { size, tiles })
    }

    /// `1, 2, …, n²-1` followed by the blank.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError`] for sizes [`Board::new`] rejects.
    pub fn solved(size: usize) -> Result<Self, PuzzleError> {
        let cells = size.saturating_mul(size);
        let tiles = (1..cells)
            .chain(std::iter::once(0))
            .map(|t| u8::try_from(t).map_err(|_| PuzzleError::SizeTooLarge { size }))
            .collect::<Result<Vec<u8>, _>>()?;
        Self::new(size, tiles)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Row-major index of the blank.
    #[must_use]
    pub fn blank(&self) -> usize {
        self.position_of(0)
    }

    fn position_of(&self, tile: u8) -> usize {
        self.tiles.iter().position(|&t| t == tile).unwrap_or(0)
    }

    /// Boards reachable in one move, in the order up, down, left, right.
    #[must_use]
    pub fn moves(&self) -> Vec<Board> {
        let n = self.size;
        let blank = self.blank();
        let (row, col) = (blank / n, blank % n);
        let targets = [
            if row > 0 { Some(blank - n) } else { None },
            if row + 1 < n { Some(blank + n) } else { None },
            if col > 0 { Some(blank - 1) } else { None },
            if col + 1 < n { Some(blank + 1) } else { None },
        ];
        targets
            .into_iter()
            .flatten()
            .map(|target| {
                let mut tiles = self.tiles.clone();
                tiles.swap(blank, target);
                Board { size: n, tiles }
            })
            .collect()
    }

    /// Non-blank tiles not at their position in `goal`, or `None` if the
    /// boards differ in size.
    #[must_use]
    pub fn misplaced(&self, goal: &Board) -> Option<u64> {
        if self.size != goal.size {
            return None;
        }
        let count = self
            .tiles
            .iter()
            .zip(&goal.tiles)
            .filter(|&(&t, &g)| t != 0 && t != g)
            .count();
        Some(count as u64)
    }

    /// Sum of taxicab distances of non-blank tiles to their `goal` cells, or
    /// `None` if the boards differ in size.
    #[must_use]
    pub fn manhattan(&self, goal: &Board) -> Option<u64> {
        if self.size != goal.size {
            return None;
        }
        let n = self.size;
        let mut target = vec![0usize; goal.tiles.len()];
        for (i, &t) in goal.tiles.iter().enumerate() {
            target[usize::from(t)] = i;
        }
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != 0)
            .map(|(i, &t)| {
                let j = target[usize::from(t)];
                ((i / n).abs_diff(j / n) + (i % n).abs_diff(j % n)) as u64
            })
            .sum::<u64>()
            .into()
    }

    /// Whether `goal` is reachable from this board.
    ///
    /// Every move swaps the blank with a neighbour, flipping both the parity
    /// of the permutation and the parity of the blank's taxicab distance to
    /// its goal cell. The two parities must therefore agree.
    #[must_use]
    pub fn can_reach(&self, goal: &Board) -> bool {
        if self.size != goal.size {
            return false;
        }
        let n = self.size;
        let mut target = vec![0usize; goal.tiles.len()];
        for (i, &t) in goal.tiles.iter().enumerate() {
            target[usize::from(t)] = i;
        }
        let perm: Vec<usize> = self.tiles.iter().map(|&t| target[usize::from(t)]).collect();

        let mut visited = vec![false; perm.len()];
        let mut cycles = 0usize;
        for i in 0..perm.len() {
            if visited[i] {
                continue;
            }
            cycles += 1;
            let mut j = i;
            while !visited[j] {
                visited[j] = true;
                j = perm[j];
            }
        }
        let perm_parity = (perm.len() - cycles) % 2;

        let (a, b) = (self.blank(), goal.blank());
        let blank_distance = (a / n).abs_diff(b / n) + (a % n).abs_diff(b % n);
        perm_parity == blank_distance % 2
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.size) {
            let cells: Vec<String> = row
                .iter()
                .map(|&t| if t == 0 { ".".to_string() } else { t.to_string() })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Reach `goal` from `start` by sliding tiles.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    id: String,
    start: Board,
    goal: Board,
}

impl SlidingPuzzle {
    /// # Errors
    ///
    /// Returns [`PuzzleError::SizeMismatch`] if the boards differ in size.
    pub fn new(id: impl Into<String>, start: Board, goal: Board) -> Result<Self, PuzzleError> {
        if start.size != goal.size {
            return Err(PuzzleError::SizeMismatch {
                start: start.size,
                goal: goal.size,
            });
        }
        Ok(Self {
            id: id.into(),
            start,
            goal,
        })
    }

    #[must_use]
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Whether a solution exists. Unsolvable instances exhaust the whole
    /// reachable half of the state space when searched.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.start.can_reach(&self.goal)
    }

    #[must_use]
    pub fn misplaced_tiles(&self) -> MisplacedTiles {
        MisplacedTiles {
            goal: self.goal.clone(),
        }
    }

    #[must_use]
    pub fn manhattan(&self) -> PuzzleManhattan {
        PuzzleManhattan {
            goal: self.goal.clone(),
        }
    }
}

impl SearchProblem for SlidingPuzzle {
    type State = Board;

    fn problem_id(&self) -> &str {
        &self.id
    }

    fn start_state(&self) -> Board {
        self.start.clone()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Board) -> Vec<Board> {
        state.moves()
    }
}

/// Count of misplaced non-blank tiles.
#[derive(Debug, Clone)]
pub struct MisplacedTiles {
    goal: Board,
}

impl Heuristic<Board> for MisplacedTiles {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "misplaced_tiles"
    }

    fn estimate(&self, state: &Board) -> u64 {
        state.misplaced(&self.goal).unwrap_or(0)
    }
}

/// Summed tile taxicab distance. Dominates [`MisplacedTiles`].
#[derive(Debug, Clone)]
pub struct PuzzleManhattan {
    goal: Board,
}

impl Heuristic<Board> for PuzzleManhattan {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        "manhattan"
    }

    fn estimate(&self, state: &Board) -> u64 {
        state.manhattan(&self.goal).unwrap_or(0)
    }
}
