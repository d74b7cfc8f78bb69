use thiserror::Error;

use super::board::{Board, BoardError};
use super::bot_controller::{Analysis, analyze};
use super::types::{GameStatus, Line, Mark, Move, Outcome};
use super::win_detector::evaluate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("Game is already over")]
    GameOver,
    #[error("Cell {0} is already marked")]
    CellOccupied(Move),
    #[error("It is not the engine's turn")]
    NotEngineTurn,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::CellOccupied(mv) => MoveError::CellOccupied(mv),
        }
    }
}

/// One game between a human and the engine. X always moves first.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    engine_mark: Mark,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Move>,
    winning_line: Option<Line>,
}

impl GameState {
    pub fn new(engine_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            engine_mark,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn engine_mark(&self) -> Mark {
        self.engine_mark
    }

    pub fn human_mark(&self) -> Mark {
        self.engine_mark.opponent()
    }

    pub fn is_engine_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_mark == self.engine_mark
    }

    pub fn place_mark(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.place(mv, self.current_mark)?;
        self.last_move = Some(mv);

        let outcome = evaluate(&self.board);
        self.status = GameStatus::from(outcome);
        if let Outcome::Win(_, line) = outcome {
            self.winning_line = Some(line);
        }

        if self.status == GameStatus::InProgress {
            self.current_mark = self.current_mark.opponent();
        }

        Ok(outcome)
    }

    /// Searches for the engine's side and applies the chosen move, if any.
    pub fn play_engine_move(&mut self) -> Result<Analysis, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if self.current_mark != self.engine_mark {
            return Err(MoveError::NotEngineTurn);
        }

        let analysis = analyze(&self.board, self.engine_mark);
        if let Some(mv) = analysis.best_move {
            self.place_mark(mv)?;
        }
        Ok(analysis)
    }

    pub fn restart(&mut self) {
        self.restart_with_engine_mark(self.engine_mark);
    }

    pub fn restart_with_engine_mark(&mut self, engine_mark: Mark) {
        *self = Self::new(engine_mark);
    }
}
