use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulator::{play_game, Config, GameResult, Recorder};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// Number of players; with one player the free corners count as own chips
    #[arg(short = 'p', long, default_value_t = 1)]
    num_players: usize,

    /// Give up on a game after this many turns
    #[arg(short, long, default_value_t = 96)]
    max_turns: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final grid of every game
    #[arg(short, long, default_value_t = false)]
    show_board: bool,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let config = Config {
        num_players: args.num_players,
        max_turns: args.max_turns,
    };

    let mut sequences = 0;
    let mut total_turns = 0;
    for game_idx in 0..args.num_games {
        let game = play_game(&mut rng, &config)?;
        match game.result {
            GameResult::Sequence { turns } => {
                info!(game_idx, turns, "Sequence");
                sequences += 1;
                total_turns += turns;
            }
            GameResult::OutOfTurns { turns } => {
                info!(game_idx, turns, "No sequence");
            }
        }
        if args.show_board {
            println!("{}", game.grid);
        }
        if let Some(rec) = &mut recorder {
            let path = rec.write_game_recording(seed, &game)?;
            debug!(path = %path.display(), "Recorded game");
        }
    }

    let avg_turns = if sequences > 0 {
        format!(" after {:.1} turns on average", total_turns as f32 / sequences as f32)
    } else {
        String::new()
    };
    eprintln!(
        "End result:\n- {} of {} games ended in a sequence{}",
        sequences, args.num_games, avg_turns
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
