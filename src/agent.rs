//! Heuristic move selection for the automated side.
//!
//! A single-ply additive evaluation over every legal move, with a
//! randomized tie-break among near-best candidates so the automated
//! opponent is not fully predictable. The random source is injected, which
//! keeps selection reproducible under a seeded RNG in tests.

use crate::engine::{orthogonal, Board, Cell, Player, BOARD_SIZE};
use rand::Rng;

/// Bonus for the four star points (2,2), (2,6), (6,2), (6,6).
const STAR_POINT_BONUS: i32 = 20;
/// Bonus for the centre point (4,4).
const CENTER_BONUS: i32 = 25;
/// Bonus for a corner intersection.
const CORNER_BONUS: i32 = 15;
/// Bonus for any edge intersection (corners collect both).
const EDGE_BONUS: i32 = 10;
/// Per adjacent opponent stone in the 8-neighbourhood.
const OPPONENT_CONTACT_BONUS: i32 = 8;
/// Per adjacent own stone in the 8-neighbourhood.
const OWN_CONTACT_BONUS: i32 = 5;
/// Per adjacent empty cell in the 8-neighbourhood.
const OPENNESS_BONUS: i32 = 3;
/// Per orthogonal opponent group the move would leave without liberties.
/// Dominates every other term.
const CAPTURE_BONUS: i32 = 40;

/// Candidates within this distance of the best score stay in the pool.
const TIE_BREAK_TOLERANCE: i32 = 10;
/// At most this many of the near-best candidates are drawn from.
const TIE_BREAK_POOL: usize = 3;

/// Iterates the in-bounds 8-neighbourhood of an intersection.
fn neighbourhood8(r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
    const DR: [isize; 8] = [-1, 1, 0, 0, -1, -1, 1, 1];
    const DC: [isize; 8] = [0, 0, -1, 1, -1, 1, -1, 1];
    (0..8).filter_map(move |i| {
        let nr = r as isize + DR[i];
        let nc = c as isize + DC[i];
        if nr >= 0 && nr < BOARD_SIZE as isize && nc >= 0 && nc < BOARD_SIZE as isize {
            Some((nr as usize, nc as usize))
        } else {
            None
        }
    })
}

/// Lists every legal move for `player` via exhaustive legality scan.
pub fn legal_moves(board: &Board, player: Player) -> Vec<(usize, usize)> {
    let mut moves = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if board.is_legal(r, c, player) {
                moves.push((r, c));
            }
        }
    }
    moves
}

/// Scores a candidate move for `player` with the additive heuristic.
///
/// The terms, in no particular order: star-point and centre bonuses, corner
/// and edge bonuses, contact weights for each stone in the 8-neighbourhood
/// (opponent contact weighted above own, rewarding approaches that build
/// toward capture), a dominating bonus per orthogonal opponent group the
/// move would capture, and a small openness bonus per adjacent empty cell.
///
/// The capture term is evaluated on a scratch copy with the stone placed;
/// the contact and openness terms look at the board as it stands.
pub fn evaluate_move(board: &Board, r: usize, c: usize, player: Player) -> i32 {
    let mut score = 0;
    let last = BOARD_SIZE - 1;
    let opponent = player.opponent();
    let own_stone = Cell::from(player);
    let opponent_stone = Cell::from(opponent);

    // Star points and centre.
    if (r == 2 || r == 6) && (c == 2 || c == 6) {
        score += STAR_POINT_BONUS;
    }
    if r == 4 && c == 4 {
        score += CENTER_BONUS;
    }

    // Corner and edge preference.
    if (r == 0 || r == last) && (c == 0 || c == last) {
        score += CORNER_BONUS;
    }
    if r == 0 || r == last || c == 0 || c == last {
        score += EDGE_BONUS;
    }

    // Contact and openness in the 8-neighbourhood.
    for (nr, nc) in neighbourhood8(r, c) {
        let cell = board.get(nr, nc);
        if cell == opponent_stone {
            score += OPPONENT_CONTACT_BONUS;
        } else if cell == own_stone {
            score += OWN_CONTACT_BONUS;
        } else {
            score += OPENNESS_BONUS;
        }
    }

    // Capture opportunities, checked with the stone on a scratch copy.
    let mut scratch = board.clone();
    scratch.set(r, c, own_stone);
    for (nr, nc) in orthogonal(r, c) {
        if scratch.get(nr, nc) == opponent_stone && !scratch.has_liberties(nr, nc, opponent) {
            score += CAPTURE_BONUS;
        }
    }

    score
}

/// Chooses a move for `player`, or `None` when no legal move exists (the
/// caller should pass).
///
/// Candidates are sorted by score descending, restricted to those within
/// [`TIE_BREAK_TOLERANCE`] of the best, and one of the first
/// [`TIE_BREAK_POOL`] of that restricted set is drawn uniformly at random.
/// The non-determinism is deliberate variety, not an optimization; inject a
/// seeded RNG for reproducible selection.
///
/// # Examples
/// ```
/// use goban::agent::choose_move;
/// use goban::engine::{Board, Player};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let chosen = choose_move(&Board::new_empty(), Player::White, &mut rng);
/// assert!(chosen.is_some());
/// ```
pub fn choose_move(
    board: &Board,
    player: Player,
    rng: &mut impl Rng,
) -> Option<(usize, usize)> {
    let candidates = legal_moves(board, player);
    if candidates.is_empty() {
        return None;
    }

    let mut scored: Vec<((usize, usize), i32)> = candidates
        .into_iter()
        .map(|(r, c)| ((r, c), evaluate_move(board, r, c, player)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let best = scored[0].1;
    let shortlist: Vec<(usize, usize)> = scored
        .into_iter()
        .take_while(|&(_, score)| score >= best - TIE_BREAK_TOLERANCE)
        .map(|(pos, _)| pos)
        .collect();

    let pool = shortlist.len().min(TIE_BREAK_POOL);
    Some(shortlist[rng.gen_range(0..pool)])
}
