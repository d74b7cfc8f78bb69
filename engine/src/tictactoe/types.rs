use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A board index in `0..9`, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move(u8);

impl Move {
    pub const ALL: [Move; CELL_COUNT] = [
        Move(0),
        Move(1),
        Move(2),
        Move(3),
        Move(4),
        Move(5),
        Move(6),
        Move(7),
        Move(8),
    ];

    pub fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Self::new(row * BOARD_SIZE + col)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn row(&self) -> usize {
        self.index() / BOARD_SIZE
    }

    pub fn col(&self) -> usize {
        self.index() % BOARD_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Line([Move; 3]);

impl Line {
    const fn from_indices(a: u8, b: u8, c: u8) -> Self {
        Self([Move(a), Move(b), Move(c)])
    }

    pub fn cells(&self) -> [Move; 3] {
        self.0
    }

    pub fn start(&self) -> Move {
        self.0[0]
    }

    pub fn end(&self) -> Move {
        self.0[2]
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.0.contains(&mv)
    }
}

/// Rows, then columns, then the main and anti diagonals.
pub const LINES: [Line; 8] = [
    Line::from_indices(0, 1, 2),
    Line::from_indices(3, 4, 5),
    Line::from_indices(6, 7, 8),
    Line::from_indices(0, 3, 6),
    Line::from_indices(1, 4, 7),
    Line::from_indices(2, 5, 8),
    Line::from_indices(0, 4, 8),
    Line::from_indices(2, 4, 6),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoResult,
    Win(Mark, Line),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::NoResult)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark, _) => Some(*mark),
            Outcome::NoResult | Outcome::Draw => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

impl SearchResult {
    pub fn terminal(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::NoResult => GameStatus::InProgress,
            Outcome::Win(Mark::X, _) => GameStatus::XWon,
            Outcome::Win(Mark::O, _) => GameStatus::OWon,
            Outcome::Draw => GameStatus::Draw,
        }
    }
}
