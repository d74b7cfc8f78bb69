use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use tictactoe_engine::{BOARD_SIZE, GameState, GameStatus, Mark, Move, MoveError};

use crate::config::FirstPlayerMode;
use crate::log;
use crate::session_rng::SessionRng;

const HELP: &str = "Commands: 1-9 place a mark (row by row from the top left), \
r restart, h help, q quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Place(Move),
    Restart,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let text = line.trim().to_lowercase();
    match text.as_str() {
        "r" | "restart" => return Ok(Command::Restart),
        "h" | "help" | "?" => return Ok(Command::Help),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    match text.parse::<usize>() {
        Ok(cell) => cell
            .checked_sub(1)
            .and_then(Move::new)
            .map(Command::Place)
            .ok_or_else(|| "Cell must be between 1 and 9".to_string()),
        Err(_) => Err(format!("Unknown command '{}'. Type 'h' for help.", line.trim())),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_finished: u32,
    pub human_wins: u32,
    pub engine_wins: u32,
    pub draws: u32,
}

pub struct RunnerSettings {
    pub first_player: FirstPlayerMode,
    pub think_delay: Duration,
}

/// Terminal front-end: humans type cell numbers, the engine answers.
pub struct GameRunner<R, W> {
    input: R,
    output: W,
    settings: RunnerSettings,
    rng: SessionRng,
    state: GameState,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> GameRunner<R, W> {
    pub fn new(input: R, output: W, settings: RunnerSettings, rng: SessionRng) -> Self {
        Self {
            input,
            output,
            settings,
            rng,
            state: GameState::new(Mark::O),
            summary: SessionSummary::default(),
        }
    }

    pub fn run(mut self) -> io::Result<SessionSummary> {
        writeln!(self.output, "{}", HELP)?;
        self.start_game()?;

        let mut line = String::new();
        loop {
            if self.state.is_engine_turn() {
                self.engine_turn()?;
                continue;
            }

            if self.state.status() == GameStatus::InProgress {
                write!(self.output, "Your move ({}): ", self.state.human_mark())?;
            } else {
                write!(self.output, "Type 'r' to play again or 'q' to quit: ")?;
            }
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match parse_command(&line) {
                Ok(Command::Place(mv)) => self.human_turn(mv)?,
                Ok(Command::Restart) => self.start_game()?,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Quit) => break,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        log!(
            "Session over: {} games, {} human wins, {} engine wins, {} draws",
            self.summary.games_finished,
            self.summary.human_wins,
            self.summary.engine_wins,
            self.summary.draws
        );
        Ok(self.summary)
    }

    fn start_game(&mut self) -> io::Result<()> {
        let engine_mark = match self.settings.first_player {
            FirstPlayerMode::Human => Mark::O,
            FirstPlayerMode::Engine => Mark::X,
            FirstPlayerMode::Random => {
                if self.rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        };
        self.state.restart_with_engine_mark(engine_mark);

        log!("New game (seed {}), engine plays {}", self.rng.seed(), engine_mark);
        writeln!(
            self.output,
            "New game: you are {}, the engine is {}.",
            self.state.human_mark(),
            engine_mark
        )?;
        self.render()
    }

    fn human_turn(&mut self, mv: Move) -> io::Result<()> {
        match self.state.place_mark(mv) {
            Ok(_) => {
                self.render()?;
                self.report_if_finished()
            }
            Err(MoveError::CellOccupied(mv)) => {
                writeln!(self.output, "Cell {} is already taken.", mv.index() + 1)
            }
            Err(err) => writeln!(self.output, "{}.", err),
        }
    }

    fn engine_turn(&mut self) -> io::Result<()> {
        if !self.settings.think_delay.is_zero() {
            thread::sleep(self.settings.think_delay);
        }

        let started = Instant::now();
        let analysis = match self.state.play_engine_move() {
            Ok(analysis) => analysis,
            Err(err) => {
                log!("Engine could not move: {}", err);
                return Ok(());
            }
        };
        log!(
            "Engine searched {} nodes in {:?}, score {}",
            analysis.nodes_visited,
            started.elapsed(),
            analysis.score
        );

        if let Some(mv) = analysis.best_move {
            writeln!(self.output, "Engine plays {}.", mv.index() + 1)?;
        }
        self.render()?;
        self.report_if_finished()
    }

    fn report_if_finished(&mut self) -> io::Result<()> {
        let status = self.state.status();
        if status == GameStatus::InProgress {
            return Ok(());
        }

        self.summary.games_finished += 1;
        let winner = match status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::Draw | GameStatus::InProgress => None,
        };

        match winner {
            Some(mark) => {
                let cells = self
                    .state
                    .winning_line()
                    .map(|line| {
                        line.cells()
                            .iter()
                            .map(|mv| (mv.index() + 1).to_string())
                            .collect::<Vec<_>>()
                            .join("-")
                    })
                    .unwrap_or_default();

                if mark == self.state.engine_mark() {
                    self.summary.engine_wins += 1;
                    writeln!(self.output, "Engine wins with {} on {}.", mark, cells)?;
                } else {
                    self.summary.human_wins += 1;
                    writeln!(self.output, "You win with {} on {}!", mark, cells)?;
                }
            }
            None => {
                self.summary.draws += 1;
                writeln!(self.output, "Draw.")?;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let board = *self.state.board();
        for row in 0..BOARD_SIZE {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .filter_map(|col| Move::from_row_col(row, col))
                .map(|mv| match board.get(mv) {
                    Some(mark) => mark.to_string(),
                    None => (mv.index() + 1).to_string(),
                })
                .collect();
            writeln!(self.output, " {}", cells.join(" | "))?;
            if row + 1 < BOARD_SIZE {
                writeln!(self.output, "---+---+---")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, first_player: FirstPlayerMode) -> (SessionSummary, String) {
        let mut output = Vec::new();
        let settings = RunnerSettings {
            first_player,
            think_delay: Duration::ZERO,
        };
        let runner = GameRunner::new(script.as_bytes(), &mut output, settings, SessionRng::new(1));
        let summary = runner.run().unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("5\n"), Ok(Command::Place(Move::new(4).unwrap())));
        assert_eq!(parse_command(" R "), Ok(Command::Restart));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("h"), Ok(Command::Help));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("abc").is_err());
    }

    #[test]
    fn test_quit_immediately() {
        let (summary, output) = run_script("q\n", FirstPlayerMode::Human);
        assert_eq!(summary, SessionSummary::default());
        assert!(output.contains("you are X, the engine is O"));
    }

    #[test]
    fn test_engine_punishes_blunder() {
        // Human X takes 1 and 2, engine blocks 3, human ignores the threat on 7.
        let (summary, output) = run_script("1\n2\n9\n", FirstPlayerMode::Human);
        assert!(output.contains("Engine plays 5."));
        assert!(output.contains("Engine plays 3."));
        assert!(output.contains("Engine wins with O on 3-5-7."));
        assert_eq!(summary.engine_wins, 1);
        assert_eq!(summary.games_finished, 1);
    }

    #[test]
    fn test_rejects_occupied_and_invalid_input() {
        let (_, output) = run_script("5\n5\nabc\n10\nq\n", FirstPlayerMode::Human);
        assert!(output.contains("Cell 5 is already taken."));
        assert!(output.contains("Unknown command 'abc'"));
        assert!(output.contains("Cell must be between 1 and 9"));
    }

    #[test]
    fn test_moves_after_game_over_are_refused() {
        let (_, output) = run_script("1\n2\n9\n4\nq\n", FirstPlayerMode::Human);
        assert!(output.contains("Game is already over."));
    }

    #[test]
    fn test_restart_starts_new_game() {
        let (summary, output) = run_script("1\n2\n9\nr\nq\n", FirstPlayerMode::Human);
        assert_eq!(output.matches("New game").count(), 2);
        assert_eq!(summary.games_finished, 1);
    }

    #[test]
    fn test_engine_moves_first_when_configured() {
        let (_, output) = run_script("q\n", FirstPlayerMode::Engine);
        assert!(output.contains("you are O, the engine is X"));
        assert!(output.contains("Engine plays 1."));
    }

    #[test]
    fn test_random_first_player_is_reproducible() {
        let (_, first) = run_script("q\n", FirstPlayerMode::Random);
        let (_, second) = run_script("q\n", FirstPlayerMode::Random);
        assert_eq!(first, second);
    }
}
