mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, BoardError, ParseBoardError};
pub use bot_controller::{Analysis, DRAW_SCORE, WIN_SCORE, analyze, best_move, choose_move, search};
pub use game_state::{GameState, MoveError};
pub use types::{BOARD_SIZE, CELL_COUNT, GameStatus, LINES, Line, Mark, Move, Outcome, SearchResult};
pub use win_detector::evaluate;
