use super::board::Board;
use super::types::{LINES, Line, Mark, Outcome};

/// Classifies the board. The first completed line in table order wins.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = find_winning_line(board) {
        return Outcome::Win(mark, line);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::NoResult
    }
}

fn find_winning_line(board: &Board) -> Option<(Mark, Line)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a) {
            Some(mark) if board.get(b) == Some(mark) && board.get(c) == Some(mark) => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_has_no_result() {
        assert_eq!(evaluate(&Board::new()), Outcome::NoResult);
    }

    #[test]
    fn test_row_win() {
        let outcome = evaluate(&board("XXX OO_ ___"));
        assert_eq!(outcome, Outcome::Win(Mark::X, LINES[0]));
    }

    #[test]
    fn test_column_win() {
        let outcome = evaluate(&board("XO_ XO_ _OX"));
        assert_eq!(outcome, Outcome::Win(Mark::O, LINES[4]));
    }

    #[test]
    fn test_diagonal_wins() {
        assert_eq!(evaluate(&board("XO_ OX_ __X")), Outcome::Win(Mark::X, LINES[6]));
        assert_eq!(evaluate(&board("XXO XO_ O__")), Outcome::Win(Mark::O, LINES[7]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOX XOO OXX")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let outcome = evaluate(&board("XOX OXO OXX"));
        assert_eq!(outcome, Outcome::Win(Mark::X, LINES[6]));
    }

    #[test]
    fn test_partial_board_without_line_continues() {
        assert_eq!(evaluate(&board("XO_ _X_ __O")), Outcome::NoResult);
    }

    #[test]
    fn test_first_line_in_table_order_is_reported() {
        let outcome = evaluate(&board("XXX X_O XOO"));
        assert_eq!(outcome, Outcome::Win(Mark::X, LINES[0]));
    }
}
