use battleship_engine::{aggregate, init_logging, random_fleet, GameConfig, GameEngine, SweepStatus};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <games> <seed>", args[0]);
        std::process::exit(1);
    }
    let games: usize = args[1].parse()?;
    let seed: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut summaries = Vec::with_capacity(games);
    let mut games_json = Vec::with_capacity(games);

    for game in 0..games {
        let mut engine = GameEngine::new(GameConfig::default())?;
        let fleet = random_fleet(&mut rng, engine.board())?;
        engine.setup(fleet)?;
        let report = engine.auto_play();
        let summary = engine.summary();
        games_json.push(json!({
            "game": game + 1,
            "sunk_all": report.status == SweepStatus::AllSunk,
            "rounds": report.rounds,
            "summary": summary,
        }));
        summaries.push(summary);
    }

    let result = json!({
        "seed": seed,
        "games": games_json,
        "aggregate": aggregate(&summaries),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
