use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use battleship_engine::{
    aggregate, init_logging, random_fleet, Board, GameConfig, GameEngine, GameStatus, ShotOutcome,
    SummaryStore, SweepStatus, STORE_PATH,
};
use clap::{Args, Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// JSON file with a game configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Board size override.
    #[arg(long)]
    size: Option<usize>,
    /// Round budget override for automatic sweeps.
    #[arg(long)]
    rounds: Option<usize>,
    /// Record store receiving the game summary.
    #[arg(long, default_value = STORE_PATH)]
    store: PathBuf,
    /// Do not record the game summary.
    #[arg(long)]
    no_save: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Place a random fleet and let the shooter sink it.
    Auto {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Place a random fleet and shoot at it by hand (e.g. `B7`).
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
    /// Summarize every recorded game.
    Stats {
        #[arg(long, default_value = STORE_PATH)]
        store: PathBuf,
    },
}

fn load_config(args: &GameArgs) -> anyhow::Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(rounds) = args.rounds {
        config.round_budget = rounds;
    }
    config.validate()?;
    Ok(config)
}

fn new_game(args: &GameArgs) -> anyhow::Result<GameEngine> {
    let config = load_config(args)?;
    let mut rng = match args.seed {
        Some(s) => {
            println!("Using fixed seed: {} (fleet will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let mut engine = GameEngine::new(config)?;
    let fleet = random_fleet(&mut rng, engine.board())?;
    engine.setup(fleet)?;
    Ok(engine)
}

fn finish(engine: &GameEngine, args: &GameArgs) {
    let summary = engine.summary();
    println!("{}", summary);
    if args.no_save {
        return;
    }
    let store = SummaryStore::new(&args.store);
    match engine.record(&store) {
        Ok(_) => println!("Summary saved to {}", store.path().display()),
        Err(e) => eprintln!("Could not save summary: {}", e),
    }
}

fn render_board(board: &Board, reveal: bool) -> String {
    let size = board.size();
    let mut out = String::from("    ");
    for c in 1..=size {
        out.push_str(&format!("{:>3}", c));
    }
    out.push('\n');
    for r in 0..size {
        out.push_str(&format!("  {} |", (b'A' + r as u8) as char));
        for c in 0..size {
            let coord = (r, c).into();
            let ship = board.ship_at(coord);
            let ch = match (board.is_shot(coord), ship) {
                (true, Some(_)) => 'X',
                (true, None) => 'o',
                (false, Some(_)) if reveal => 'S',
                _ => '.',
            };
            out.push_str(&format!("{:>3}", ch));
        }
        out.push('\n');
    }
    out
}

fn run_auto(args: GameArgs) -> anyhow::Result<()> {
    let mut engine = new_game(&args)?;
    println!("{}", render_board(engine.board(), true));
    let report = engine.auto_play();
    for outcome in &report.outcomes {
        println!("{}", outcome);
    }
    match report.status {
        SweepStatus::AllSunk => println!("All ships sunk!"),
        SweepStatus::RoundLimitReached => println!(
            "Round limit reached with {} ships left.",
            engine.board().remaining_ships()
        ),
    }
    println!("{}", render_board(engine.board(), true));
    finish(&engine, &args);
    Ok(())
}

fn run_play(args: GameArgs) -> anyhow::Result<()> {
    let mut engine = new_game(&args)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while engine.status() != GameStatus::Won {
        println!("{}", render_board(engine.board(), false));
        print!("Ships left: {}. Target (e.g. A1, or 'quit'): ", engine.board().remaining_ships());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") {
            break;
        }
        match engine.shoot_at(input) {
            Ok(outcome @ ShotOutcome::Sunk(_)) => println!("{} - ship sunk!", outcome),
            Ok(outcome) => println!("{}", outcome),
            Err(e) => println!("Invalid input: {}", e),
        }
    }
    if engine.status() == GameStatus::Won {
        println!("All ships sunk!");
    }
    println!("{}", render_board(engine.board(), true));
    finish(&engine, &args);
    Ok(())
}

fn run_stats(store: PathBuf) -> anyhow::Result<()> {
    let store = SummaryStore::new(store);
    let summaries = store.load();
    if summaries.is_empty() {
        println!("No games recorded in {}", store.path().display());
        return Ok(());
    }
    println!("{}", aggregate(&summaries));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Auto { game } => run_auto(game),
        Commands::Play { game } => run_play(game),
        Commands::Stats { store } => run_stats(store),
    }
}
