use clap::Parser;
use goban::agent::choose_move;
use goban::engine::{Game, GameStatus, Player};
use goban::scoring::score;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Seeded agent-vs-agent self-play", long_about = None)]
struct Args {
    /// Number of games to play
    #[clap(short, long, default_value_t = 20)]
    games: u64,

    /// Base RNG seed; game i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Safety cap on stone placements per game (no ko rule, so two greedy
    /// agents can cycle; the position is scored as it stands at the cap)
    #[clap(short, long, default_value_t = 300)]
    max_moves: u32,
}

fn play_one(seed: u64, max_moves: u32) -> (Game, bool) {
    let mut game = Game::new();
    let mut rng = SmallRng::seed_from_u64(seed);

    while game.status() == GameStatus::InProgress && game.move_count() < max_moves {
        match choose_move(game.board(), game.to_move(), &mut rng) {
            Some((r, c)) => {
                game.play(r, c).expect("agent chose an illegal move");
            }
            None => {
                game.pass().expect("game is not over");
            }
        }
    }

    let capped = game.status() == GameStatus::InProgress;
    (game, capped)
}

fn main() {
    let args = Args::parse();

    println!(
        "Playing {} self-play games (base seed {})...\n",
        args.games, args.seed
    );

    let mut black_wins = 0u64;
    let mut white_wins = 0u64;
    let mut draws = 0u64;
    let mut capped_games = 0u64;
    let mut total_margin = 0u64;
    let mut total_moves = 0u64;

    for i in 0..args.games {
        let (game, capped) = play_one(args.seed + i, args.max_moves);
        let result = score(game.board());

        match result.winner {
            Some(Player::Black) => black_wins += 1,
            Some(Player::White) => white_wins += 1,
            None => draws += 1,
        }
        if capped {
            capped_games += 1;
        }
        total_margin += result.margin as u64;
        total_moves += game.move_count() as u64;

        println!(
            "Game {:>3} (seed {:>4}): B {:>3} - W {:>3}  {}{}",
            i,
            args.seed + i,
            result.black_total,
            result.white_total,
            match result.winner {
                Some(winner) => format!("{} +{}", winner, result.margin),
                None => "Draw".to_string(),
            },
            if capped { "  [move cap]" } else { "" }
        );
    }

    println!("\n===== Summary =====");
    println!("Black wins: {}", black_wins);
    println!("White wins: {}", white_wins);
    println!("Draws:      {}", draws);
    if capped_games > 0 {
        println!("Hit move cap: {}", capped_games);
    }
    if args.games > 0 {
        println!("Avg margin: {:.1}", total_margin as f64 / args.games as f64);
        println!("Avg moves:  {:.1}", total_moves as f64 / args.games as f64);
    }
}
