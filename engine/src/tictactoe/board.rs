use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark, Move};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cell {0} is already marked")]
    CellOccupied(Move),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("Expected 9 cells but got {0}")]
    InvalidLength(usize),
    #[error("Invalid cell character '{0}'")]
    InvalidCell(char),
}

/// A 3x3 grid. `Copy`, so every hypothetical continuation is an independent
/// snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.cells[mv.index()]
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv).is_none()
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&mv| self.is_empty_at(mv))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub fn with_mark(&self, mv: Move, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[mv.index()] = Some(mark);
        next
    }

    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), BoardError> {
        if !self.is_empty_at(mv) {
            return Err(BoardError::CellOccupied(mv));
        }
        self.cells[mv.index()] = Some(mark);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '_' | '.' | '-' => None,
                '|' | ',' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(ParseBoardError::InvalidCell(c)),
            };
            cells.push(cell);
        }

        let cells: [Option<Mark>; CELL_COUNT] = cells
            .try_into()
            .map_err(|cells: Vec<Option<Mark>>| ParseBoardError::InvalidLength(cells.len()))?;
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = chunk
                .iter()
                .map(|cell| match cell {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(index: usize) -> Move {
        Move::new(index).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), CELL_COUNT);
        assert!(!board.is_full());
        assert_eq!(board.side_to_move(), Mark::X);
    }

    #[test]
    fn test_empty_cells_are_ascending() {
        let board: Board = "X_O _X_ __O".parse().unwrap();
        let empty: Vec<usize> = board.empty_cells().map(|m| m.index()).collect();
        assert_eq!(empty, vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(mv(4), Mark::X);
        assert_eq!(board.get(mv(4)), None);
        assert_eq!(next.get(mv(4)), Some(Mark::X));
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        assert!(board.place(mv(0), Mark::X).is_ok());
        assert_eq!(board.place(mv(0), Mark::O), Err(BoardError::CellOccupied(mv(0))));
        assert_eq!(board.get(mv(0)), Some(Mark::X));
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut board = Board::new();
        board.place(mv(0), Mark::X).unwrap();
        assert_eq!(board.side_to_move(), Mark::O);
        board.place(mv(1), Mark::O).unwrap();
        assert_eq!(board.side_to_move(), Mark::X);
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut board: Board = "XOX OXO OXO".parse().unwrap();
        assert!(board.is_full());
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_parse_accepts_separators() {
        let board: Board = "x|o|. \n -,_,X \n o o o".parse().unwrap();
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 4);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::InvalidLength(2)));
        assert_eq!(
            "XO_XO_XO_X".parse::<Board>(),
            Err(ParseBoardError::InvalidLength(10))
        );
        assert_eq!("XO_XZ_XO_".parse::<Board>(), Err(ParseBoardError::InvalidCell('Z')));
    }

    #[test]
    fn test_display_renders_rows() {
        let board: Board = "XX_ OO_ ___".parse().unwrap();
        assert_eq!(board.to_string(), "X|X|.\nO|O|.\n.|.|.");
    }
}
