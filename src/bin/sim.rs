use rand::{rngs::SmallRng, seq::IndexedRandom, SeedableRng};
use serde_json::json;
use tictactoe::{init_logging, Cell, GameEngine, Phase, Player};

/// Play one game with uniformly random legal moves. Returns the final phase,
/// the winner if any, and the number of moves made.
fn playout(engine: &mut GameEngine, rng: &mut SmallRng) -> anyhow::Result<(Phase, Player, usize)> {
    engine.reset();
    while !engine.phase().is_terminal() {
        let empty: Vec<i64> = engine
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| idx as i64)
            .collect();
        let &idx = empty
            .choose(rng)
            .ok_or_else(|| anyhow::anyhow!("no empty cell in a game still in progress"))?;
        let result = engine.apply_move(idx);
        if let Some(reason) = result.outcome.rejection() {
            return Err(anyhow::anyhow!("engine rejected legal move {}: {}", idx, reason));
        }
    }
    Ok((engine.phase(), engine.current_player(), engine.moves_made()))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    let (mut x_wins, mut o_wins, mut draws, mut moves) = (0usize, 0usize, 0usize, 0usize);

    for _ in 0..games {
        let (phase, player, made) = playout(&mut engine, &mut rng)?;
        moves += made;
        match (phase, player) {
            (Phase::Won, Player::X) => x_wins += 1,
            (Phase::Won, Player::O) => o_wins += 1,
            (Phase::Draw, _) => draws += 1,
            (Phase::InProgress, _) => unreachable!("playout returns only finished games"),
        }
    }

    let result = json!({
        "games": games,
        "x_wins": x_wins,
        "o_wins": o_wins,
        "draws": draws,
        "moves": moves,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
