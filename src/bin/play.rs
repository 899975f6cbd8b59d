use goban::agent::choose_move;
use goban::engine::{Game, GameStatus, Player, BOARD_SIZE};
use goban::scoring::score;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

fn print_score(game: &Game) {
    let result = score(game.board());
    println!("---------------------");
    println!("🏁 GAME OVER 🏁");
    println!(
        "Black: {} stones + {} territory = {}",
        result.black_stones, result.black_territory, result.black_total
    );
    println!(
        "White: {} stones + {} territory = {}",
        result.white_stones, result.white_territory, result.white_total
    );
    match result.winner {
        Some(winner) => println!("{} wins by {}.", winner, result.margin),
        None => println!("Draw."),
    }
    println!(
        "Moves: {} | Captures: Black {} : White {}",
        game.move_count(),
        game.captures(Player::Black),
        game.captures(Player::White)
    );
    println!("---------------------");
}

fn main() {
    let mut game = Game::new();
    let mut rng = SmallRng::from_entropy();
    println!("9x9 Go. You play Black; the engine plays White.");

    loop {
        println!("---------------------");
        println!(
            "Move {} | Captures B {} : W {} | {} to move",
            game.move_count(),
            game.captures(Player::Black),
            game.captures(Player::White),
            game.to_move()
        );
        println!("{}", game.board().to_string_with_highlight(game.last_move()));

        let atari = game.atari_points(game.to_move());
        if !atari.is_empty() {
            println!("⚠️  Stones in atari: {:?}", atari);
        }

        if game.status() == GameStatus::Terminal {
            print_score(&game);
            break;
        }

        if game.to_move() == Player::White {
            match choose_move(game.board(), Player::White, &mut rng) {
                Some((r, c)) => {
                    // A move the agent proposes went through the same
                    // legality scan, so this cannot fail.
                    let outcome = game.play(r, c).expect("agent chose an illegal move");
                    println!("White plays ({}, {}).", r, c);
                    if !outcome.captured.is_empty() {
                        println!("White captures {} stone(s).", outcome.captured_count());
                    }
                }
                None => {
                    println!("White has no legal move and passes.");
                    game.pass().expect("game is not over");
                }
            }
            continue;
        }

        print!("Enter your move (row col), 'p' to pass, 'u' to undo, 'q' to quit: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }
        let trimmed = input.trim();

        match trimmed {
            "q" => {
                println!("Thanks for playing!");
                break;
            }
            "p" => {
                if game.pass().expect("game is not over") == GameStatus::Terminal {
                    continue; // terminal state is reported at the top of the loop
                }
                println!("You pass.");
                continue;
            }
            "u" => {
                // Roll back twice so the human is to move again after the
                // engine's reply has been taken off the board.
                if game.undo() {
                    game.undo();
                    println!("Move undone.");
                } else {
                    println!("Nothing to undo.");
                }
                continue;
            }
            _ => {}
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() == 2 {
            if let (Ok(r), Ok(c)) = (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
                if r < BOARD_SIZE && c < BOARD_SIZE {
                    match game.play(r, c) {
                        Ok(outcome) => {
                            if !outcome.captured.is_empty() {
                                println!("You capture {} stone(s).", outcome.captured_count());
                            }
                        }
                        Err(err) => println!("Invalid move: {}", err),
                    }
                } else {
                    println!(
                        "Invalid coordinates: row and column must be between 0 and {}.",
                        BOARD_SIZE - 1
                    );
                }
            } else {
                println!("Invalid input: enter numbers for row and column (e.g. '4 4').");
            }
        } else {
            println!("Invalid input format. Use 'row col', 'p', 'u', or 'q'.");
        }
    }
}
