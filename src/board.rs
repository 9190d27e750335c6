//! Othello board state and rules.
//!
//! The board is a fixed 64-cell array, so copying a position is a plain
//! memcpy and never allocates. Search code relies on this: every
//! hypothetical move is played on a fresh copy.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{BOARDSIZE, DIRECTIONS, DISC_BLACK, DISC_WHITE, EMPTY, N};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    fn glyph(self) -> char {
        match self {
            Side::Black => DISC_BLACK,
            Side::White => DISC_WHITE,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "black"),
            Side::White => write!(f, "white"),
        }
    }
}

impl FromStr for Side {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Side::Black),
            "white" | "w" | "o" => Ok(Side::White),
            _ => Err(BoardError::Parse(format!("unknown side: {s}"))),
        }
    }
}

/// A board coordinate. `x` is the column, `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    x: u8,
    y: u8,
}

impl Move {
    /// Create a move, rejecting coordinates outside the board.
    pub fn new(x: usize, y: usize) -> Result<Self, BoardError> {
        if x >= N || y >= N {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Build a move from a flat cell index (`x + N * y`).
    pub(crate) fn from_index(i: usize) -> Self {
        debug_assert!(i < BOARDSIZE);
        Self {
            x: (i % N) as u8,
            y: (i / N) as u8,
        }
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }

    pub fn index(self) -> usize {
        self.x() + N * self.y()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("cell {0} is already occupied")]
    Occupied(Move),
    #[error("move {mv} by {side} flips nothing")]
    NoCapture { mv: Move, side: Side },
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result of a finished (or unfinished) game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Winner(Side),
    Draw,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Side>; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: white on (3,3) and (4,4), black on (3,4) and (4,3).
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.set(3, 3, Some(Side::White));
        board.set(4, 4, Some(Side::White));
        board.set(3, 4, Some(Side::Black));
        board.set(4, 3, Some(Side::Black));
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [None; BOARDSIZE],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Side> {
        if x >= N || y >= N {
            return None;
        }
        self.cells[x + N * y]
    }

    /// Place or clear a disc without applying any rules.
    pub fn set(&mut self, x: usize, y: usize, cell: Option<Side>) {
        if x < N && y < N {
            self.cells[x + N * y] = cell;
        }
    }

    pub fn occupied_by(&self, side: Side, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(side)
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|&&c| c == Some(side)).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of discs `side` would flip along one direction from `mv`.
    fn flips_in_direction(&self, mv: Move, side: Side, (dx, dy): (isize, isize)) -> usize {
        let opp = Some(side.opponent());
        let mut x = mv.x() as isize + dx;
        let mut y = mv.y() as isize + dy;
        let mut run = 0;
        while (0..N as isize).contains(&x) && (0..N as isize).contains(&y) {
            match self.cells[x as usize + N * y as usize] {
                c if c == opp => run += 1,
                Some(_) => return run,
                None => return 0,
            }
            x += dx;
            y += dy;
        }
        0
    }

    pub fn is_legal(&self, mv: Move, side: Side) -> bool {
        self.cells[mv.index()].is_none()
            && DIRECTIONS
                .iter()
                .any(|&d| self.flips_in_direction(mv, side, d) > 0)
    }

    pub fn has_moves(&self, side: Side) -> bool {
        (0..BOARDSIZE).any(|i| self.is_legal(Move::from_index(i), side))
    }

    /// True when neither side can move (a full board included).
    pub fn is_done(&self) -> bool {
        !self.has_moves(Side::Black) && !self.has_moves(Side::White)
    }

    /// Play `mv` for `side`, flipping captured discs.
    ///
    /// Returns the number of opponent discs flipped. The board is left
    /// untouched when the move is illegal.
    pub fn apply(&mut self, mv: Move, side: Side) -> Result<usize, BoardError> {
        if self.cells[mv.index()].is_some() {
            return Err(BoardError::Occupied(mv));
        }
        let mut flipped = 0;
        for &(dx, dy) in &DIRECTIONS {
            let run = self.flips_in_direction(mv, side, (dx, dy));
            for step in 1..=run as isize {
                let x = (mv.x() as isize + dx * step) as usize;
                let y = (mv.y() as isize + dy * step) as usize;
                self.cells[x + N * y] = Some(side);
            }
            flipped += run;
        }
        if flipped == 0 {
            return Err(BoardError::NoCapture { mv, side });
        }
        self.cells[mv.index()] = Some(side);
        Ok(flipped)
    }

    pub fn outcome(&self) -> Outcome {
        if !self.is_done() {
            return Outcome::InProgress;
        }
        let black = self.count(Side::Black);
        let white = self.count(Side::White);
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Side::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..N {
            for x in 0..N {
                let ch = self.get(x, y).map_or(EMPTY, Side::glyph);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse eight rows of `X`, `O` and `.`; whitespace is ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != BOARDSIZE {
            return Err(BoardError::Parse(format!(
                "expected {BOARDSIZE} cells, got {}",
                glyphs.len()
            )));
        }
        let mut board = Board::empty();
        for (i, ch) in glyphs.into_iter().enumerate() {
            board.cells[i] = match ch {
                DISC_BLACK => Some(Side::Black),
                DISC_WHITE => Some(Side::White),
                EMPTY => None,
                other => return Err(BoardError::Parse(format!("bad cell glyph '{other}'"))),
            };
        }
        Ok(board)
    }
}
