use super::board::Board;
use super::types::{Mark, Move, Outcome, SearchResult};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 100;
pub const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub score: i32,
    pub best_move: Option<Move>,
    pub nodes_visited: u64,
}

/// Move for the second player (O), the side the engine plays by default.
pub fn choose_move(board: &Board) -> Option<Move> {
    best_move(board, Mark::O)
}

pub fn best_move(board: &Board, side: Mark) -> Option<Move> {
    analyze(board, side).best_move
}

pub fn analyze(board: &Board, side: Mark) -> Analysis {
    let mut nodes_visited = 0;
    let result = minimax(
        board,
        0,
        side == Mark::O,
        i32::MIN,
        i32::MAX,
        &mut nodes_visited,
    );
    Analysis {
        score: result.score,
        best_move: result.best_move,
        nodes_visited,
    }
}

/// Alpha-beta minimax. O maximizes, X minimizes; `depth` counts plies
/// already applied on this path so faster wins score higher.
pub fn search(board: &Board, depth: usize, maximizing: bool, alpha: i32, beta: i32) -> SearchResult {
    let mut nodes_visited = 0;
    minimax(board, depth, maximizing, alpha, beta, &mut nodes_visited)
}

fn minimax(
    board: &Board,
    depth: usize,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes_visited: &mut u64,
) -> SearchResult {
    *nodes_visited += 1;

    match evaluate(board) {
        // The side that just moved made the line.
        Outcome::Win(..) => {
            let score = if maximizing {
                -WIN_SCORE + depth as i32
            } else {
                WIN_SCORE - depth as i32
            };
            return SearchResult::terminal(score);
        }
        Outcome::Draw => return SearchResult::terminal(DRAW_SCORE),
        Outcome::NoResult => {}
    }

    let mark = if maximizing { Mark::O } else { Mark::X };
    let mut best = SearchResult {
        score: if maximizing { i32::MIN } else { i32::MAX },
        best_move: None,
    };

    for mv in board.empty_cells() {
        let child = board.with_mark(mv, mark);
        let score = minimax(&child, depth + 1, !maximizing, alpha, beta, nodes_visited).score;

        if maximizing {
            if score > best.score {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }
            alpha = alpha.max(best.score);
        } else {
            if score < best.score {
                best = SearchResult {
                    score,
                    best_move: Some(mv),
                };
            }
            beta = beta.min(best.score);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}
