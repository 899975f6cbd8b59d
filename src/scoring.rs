//! End-of-game territory scoring.
//!
//! Empty intersections are partitioned into maximal connected regions; a
//! region bordered by exactly one colour counts as that colour's territory,
//! anything else is dame. The final score is live stones plus territory.

use crate::engine::{orthogonal, Board, Cell, Player, BOARD_SIZE};

/// A maximal connected region of empty intersections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    /// Every empty intersection in the region.
    pub points: Vec<(usize, usize)>,
    /// Black-stone adjacencies along the region boundary. Each adjacency
    /// counts, not each distinct stone.
    pub black_border: u32,
    /// White-stone adjacencies along the region boundary.
    pub white_border: u32,
    /// `Some(colour)` if the region borders exactly one colour, `None` for
    /// dame (both colours, or no stones at all).
    pub owner: Option<Player>,
}

impl Region {
    /// Number of intersections in the region.
    pub fn size(&self) -> usize {
        self.points.len()
    }
}

/// The final accounting of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreResult {
    pub black_stones: usize,
    pub white_stones: usize,
    pub black_territory: usize,
    pub white_territory: usize,
    /// Stones plus territory.
    pub black_total: usize,
    pub white_total: usize,
    /// `None` on equal totals (a draw).
    pub winner: Option<Player>,
    /// Absolute difference of the totals.
    pub margin: usize,
}

/// Partitions all empty intersections into territory regions.
///
/// Flood fill over 4-adjacency with a shared visited marker array, so every
/// empty cell lands in exactly one region. For each cell the orthogonal
/// stone adjacencies are tallied per colour; ownership goes to a colour iff
/// the other colour's tally is zero and its own is positive.
pub fn territories(board: &Board) -> Vec<Region> {
    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut regions = Vec::new();

    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if board.get(r, c) == Cell::Empty && !visited[r][c] {
                regions.push(fill_region(board, r, c, &mut visited));
            }
        }
    }

    regions
}

/// Flood-fills one empty region from `(r, c)` on an explicit stack.
fn fill_region(
    board: &Board,
    r: usize,
    c: usize,
    visited: &mut [[bool; BOARD_SIZE]; BOARD_SIZE],
) -> Region {
    let mut points = Vec::new();
    let mut black_border = 0;
    let mut white_border = 0;
    let mut stack = vec![(r, c)];
    visited[r][c] = true;

    while let Some((cr, cc)) = stack.pop() {
        points.push((cr, cc));
        for (nr, nc) in orthogonal(cr, cc) {
            match board.get(nr, nc) {
                Cell::Black => black_border += 1,
                Cell::White => white_border += 1,
                Cell::Empty => {
                    if !visited[nr][nc] {
                        visited[nr][nc] = true;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    let owner = if black_border > 0 && white_border == 0 {
        Some(Player::Black)
    } else if white_border > 0 && black_border == 0 {
        Some(Player::White)
    } else {
        None
    };

    points.sort_unstable();
    Region {
        points,
        black_border,
        white_border,
        owner,
    }
}

/// Computes the final score of a position.
///
/// Valid at any time; authoritative once the session is terminal. The
/// winner has the higher stones-plus-territory total, equal totals are a
/// draw.
///
/// # Examples
/// ```
/// use goban::engine::Board;
/// use goban::scoring::score;
///
/// let result = score(&Board::new_empty());
/// assert_eq!(result.winner, None);
/// assert_eq!(result.black_total, 0);
/// ```
pub fn score(board: &Board) -> ScoreResult {
    let black_stones = board.stone_count(Player::Black);
    let white_stones = board.stone_count(Player::White);

    let mut black_territory = 0;
    let mut white_territory = 0;
    for region in territories(board) {
        match region.owner {
            Some(Player::Black) => black_territory += region.size(),
            Some(Player::White) => white_territory += region.size(),
            None => {}
        }
    }

    let black_total = black_stones + black_territory;
    let white_total = white_stones + white_territory;
    let winner = if black_total > white_total {
        Some(Player::Black)
    } else if white_total > black_total {
        Some(Player::White)
    } else {
        None
    };

    ScoreResult {
        black_stones,
        white_stones,
        black_territory,
        white_territory,
        black_total,
        white_total,
        winner,
        margin: black_total.max(white_total) - black_total.min(white_total),
    }
}
