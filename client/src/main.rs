mod config;
mod console;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::tictactoe::{BotKind, TicTacToeGame, create_selector};
use common::config::Validate;
use common::{log, logger};

use config::{Config, Controller, SeatConfig, get_config_manager};
use console::{ConsoleSession, Seat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CliBotKind {
    Random,
    Minimax,
}

impl From<CliBotKind> for BotKind {
    fn from(kind: CliBotKind) -> Self {
        match kind {
            CliBotKind::Random => BotKind::Random,
            CliBotKind::Minimax => BotKind::Minimax,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client", about = "Three-in-a-row on the console")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    name_x: Option<String>,
    #[arg(long)]
    name_o: Option<String>,
    /// Let the computer play X
    #[arg(long)]
    bot_x: bool,
    /// Let the computer play O
    #[arg(long)]
    bot_o: bool,
    #[arg(long, value_enum)]
    bot_kind: Option<CliBotKind>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(name) = &args.name_x {
        config.player_x.name = Some(name.clone());
    }
    if let Some(name) = &args.name_o {
        config.player_o.name = Some(name.clone());
    }
    if args.bot_x {
        config.player_x.controller = Controller::Bot;
    }
    if args.bot_o {
        config.player_o.controller = Controller::Bot;
    }
    if let Some(kind) = args.bot_kind {
        config.bot_kind = kind.into();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config
}

/// Command-line overrides go through the same validation as the config file.
fn resolve_config(config: Config, args: &Args) -> Result<Config, String> {
    let config = apply_args(config, args);
    config.validate()?;
    Ok(config)
}

fn create_seat(seat: &SeatConfig, bot_kind: BotKind, rng: &mut SessionRng) -> Seat {
    match seat.controller {
        Controller::Human => Seat::Human,
        Controller::Bot => {
            let seed = rng.random_range(0..u64::MAX);
            Seat::Bot(create_selector(bot_kind, SessionRng::new(seed)))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config.clone());
    let config = resolve_config(config_manager.get_config()?, &args)?;

    let mut rng = config.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Session seed {}, bot kind {:?}", rng.seed(), config.bot_kind);

    let seats = [
        create_seat(&config.player_x, config.bot_kind, &mut rng),
        create_seat(&config.player_o, config.bot_kind, &mut rng),
    ];
    let game = TicTacToeGame::new(
        config.player_x.name.as_deref(),
        config.player_o.name.as_deref(),
    );

    let mut session = ConsoleSession::new(game, seats, io::stdin().lock(), io::stdout().lock());
    session.run()?;

    log!("Session finished");
    Ok(())
}
