mod config;
mod logger;
mod runner;
mod session_rng;

use std::io;
use std::time::Duration;

use clap::Parser;
use config::{CliConfig, FirstPlayerMode, Validate, get_config_manager};
use runner::{GameRunner, RunnerSettings};
use session_rng::SessionRng;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against an unbeatable engine")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerMode>,

    /// Pause before each engine move, in milliseconds
    #[arg(long)]
    think_delay_ms: Option<u64>,

    /// Seed for choosing who starts in random mode
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut CliConfig) {
        if let Some(first_player) = self.first_player {
            config.first_player = first_player;
        }
        if let Some(think_delay_ms) = self.think_delay_ms {
            config.think_delay_ms = think_delay_ms;
        }
        if self.use_log_prefix && config.log_prefix.is_none() {
            config.log_prefix = Some("TicTacToe".to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.as_deref());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    logger::init_logger(config.log_prefix.clone());

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let settings = RunnerSettings {
        first_player: config.first_player,
        think_delay: Duration::from_millis(config.think_delay_ms),
    };

    let stdin = io::stdin();
    let runner = GameRunner::new(stdin.lock(), io::stdout(), settings, rng);
    let summary = runner.run()?;

    println!(
        "Thanks for playing: {} won, {} lost, {} drawn.",
        summary.human_wins, summary.engine_wins, summary.draws
    );
    Ok(())
}
