//! Core rules engine for 9x9 Go.
//!
//! This module defines the game's fundamental components:
//! - `Player` / `Cell`: stone colours and intersection occupancy.
//! - `Board`: the 9x9 grid with group discovery, liberty counting and the
//!   legality check (capture-before-suicide precedence).
//! - `Game`: a full session, including turn ownership, capture counters,
//!   pass-based termination and a snapshot history for undo.
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

/// Side length of the board. The engine is fixed to the 9x9 variant.
pub const BOARD_SIZE: usize = 9;

/// Two consecutive passes end the game.
pub const MAX_CONSECUTIVE_PASSES: u32 = 2;

/// A stone colour. Black always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Returns the other colour.
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Occupancy of a single intersection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// Converts the cell to its character representation.
    ///
    /// This is primarily used for text-based display of the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use goban::engine::Cell;
    /// assert_eq!(Cell::Black.to_char(), 'B');
    /// assert_eq!(Cell::Empty.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Cell {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Why a move request was rejected. All variants are recoverable; the
/// session state is untouched when any of them is returned.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The target intersection already holds a stone.
    #[error("intersection ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },
    /// The move captures nothing and leaves its own group without liberties.
    #[error("playing at ({row}, {col}) would be suicide")]
    SuicideMove { row: usize, col: usize },
    /// The game has ended; only a reset can continue.
    #[error("the game is already over")]
    GameAlreadyTerminal,
}

/// Whether a session can still accept moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Terminal,
}

/// Iterates the in-bounds orthogonal neighbours of an intersection.
pub(crate) fn orthogonal(r: usize, c: usize) -> impl Iterator<Item = (usize, usize)> {
    const DR: [isize; 4] = [-1, 1, 0, 0];
    const DC: [isize; 4] = [0, 0, -1, 1];
    (0..4).filter_map(move |i| {
        let nr = r as isize + DR[i];
        let nc = c as isize + DC[i];
        if nr >= 0 && nr < BOARD_SIZE as isize && nc >= 0 && nc < BOARD_SIZE as isize {
            Some((nr as usize, nc as usize))
        } else {
            None
        }
    })
}

/// The 9x9 grid of intersections.
///
/// `Board` holds occupancy only; turn ownership, counters and history live
/// in [`Game`]. All group and liberty queries operate on `&self` and never
/// mutate, so they can be run against scratch copies during legality checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Examples
    /// ```
    /// use goban::engine::{Board, Cell};
    /// let board = Board::new_empty();
    /// assert_eq!(board.get(0, 0), Cell::Empty);
    /// ```
    pub fn new_empty() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from a predefined grid configuration.
    ///
    /// This is useful for testing or setting up specific game scenarios.
    pub fn from_grid(grid: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid }
    }

    /// Returns the cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get(&self, r: usize, c: usize) -> Cell {
        self.grid[r][c]
    }

    /// Sets the cell at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn set(&mut self, r: usize, c: usize, cell: Cell) {
        self.grid[r][c] = cell;
    }

    /// Returns an immutable reference to the underlying grid.
    pub fn grid(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// Counts the stones of one colour currently on the board.
    pub fn stone_count(&self, player: Player) -> usize {
        let stone = Cell::from(player);
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == stone)
            .count()
    }

    /// Collects the maximal group of `player` stones connected to `(r, c)`
    /// by orthogonal adjacency, using a BFS over a visited marker array.
    ///
    /// Returns an empty vector if `(r, c)` does not hold a `player` stone.
    /// Coordinates in the result are sorted row-major for stable comparison.
    pub fn group_at(&self, r: usize, c: usize, player: Player) -> Vec<(usize, usize)> {
        let stone = Cell::from(player);
        if self.grid[r][c] != stone {
            return Vec::new();
        }

        let mut group = Vec::new();
        let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut queue = VecDeque::new();

        queue.push_back((r, c));
        visited[r][c] = true;

        while let Some((cr, cc)) = queue.pop_front() {
            group.push((cr, cc));
            for (nr, nc) in orthogonal(cr, cc) {
                if !visited[nr][nc] && self.grid[nr][nc] == stone {
                    visited[nr][nc] = true;
                    queue.push_back((nr, nc));
                }
            }
        }

        group.sort_unstable();
        group
    }

    /// Counts the distinct empty intersections adjacent to the group
    /// containing `(r, c)`.
    ///
    /// Liberties are a set, not a sequence: an empty cell touching the group
    /// from two sides is counted once. Returns 0 if `(r, c)` does not hold a
    /// `player` stone.
    pub fn count_liberties(&self, r: usize, c: usize, player: Player) -> usize {
        let stone = Cell::from(player);
        if self.grid[r][c] != stone {
            return 0;
        }

        let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut counted = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut liberties = 0;
        let mut queue = VecDeque::new();

        queue.push_back((r, c));
        visited[r][c] = true;

        while let Some((cr, cc)) = queue.pop_front() {
            for (nr, nc) in orthogonal(cr, cc) {
                match self.grid[nr][nc] {
                    Cell::Empty => {
                        if !counted[nr][nc] {
                            counted[nr][nc] = true;
                            liberties += 1;
                        }
                    }
                    cell if cell == stone => {
                        if !visited[nr][nc] {
                            visited[nr][nc] = true;
                            queue.push_back((nr, nc));
                        }
                    }
                    _ => {}
                }
            }
        }

        liberties
    }

    /// Short-circuiting variant of [`count_liberties`](Self::count_liberties):
    /// returns `true` as soon as one empty neighbour is found.
    ///
    /// Used wherever only existence matters (legality and capture checks).
    pub fn has_liberties(&self, r: usize, c: usize, player: Player) -> bool {
        let stone = Cell::from(player);
        if self.grid[r][c] != stone {
            return false;
        }

        let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut queue = VecDeque::new();

        queue.push_back((r, c));
        visited[r][c] = true;

        while let Some((cr, cc)) = queue.pop_front() {
            for (nr, nc) in orthogonal(cr, cc) {
                match self.grid[nr][nc] {
                    Cell::Empty => return true,
                    cell if cell == stone => {
                        if !visited[nr][nc] {
                            visited[nr][nc] = true;
                            queue.push_back((nr, nc));
                        }
                    }
                    _ => {}
                }
            }
        }

        false
    }

    /// Decides whether `player` may play at `(r, c)`.
    ///
    /// Rules, in order:
    /// 1. The intersection must be empty.
    /// 2. On a scratch copy with the stone placed, any orthogonal opponent
    ///    group left without liberties makes the move legal: a capturing
    ///    move is never suicide, because the capture frees adjacent space.
    /// 3. Otherwise the move is legal iff the placed stone's own group has
    ///    at least one liberty (suicide rule).
    ///
    /// The capture test runs on the scratch grid with the opponent group
    /// still present; this capture-before-suicide ordering is part of the
    /// ruleset and must not be reordered. Evaluation never touches the live
    /// board.
    pub fn is_legal(&self, r: usize, c: usize, player: Player) -> bool {
        if self.grid[r][c] != Cell::Empty {
            return false;
        }

        let mut scratch = self.clone();
        scratch.grid[r][c] = Cell::from(player);
        let opponent = player.opponent();
        let opponent_stone = Cell::from(opponent);

        for (nr, nc) in orthogonal(r, c) {
            if scratch.grid[nr][nc] == opponent_stone && !scratch.has_liberties(nr, nc, opponent) {
                return true; // Captures at least one group.
            }
        }

        scratch.has_liberties(r, c, player)
    }

    /// Generates a string representation of the board with an optional
    /// highlighted intersection (typically the last move), using ANSI
    /// escape codes for terminal output.
    pub fn to_string_with_highlight(&self, pos: Option<(usize, usize)>) -> String {
        let mut output = String::new();

        output.push_str("  ");
        for c_idx in 0..BOARD_SIZE {
            output.push_str(&format!("{:<2}", c_idx));
        }
        output.push('\n');

        for r_idx in 0..BOARD_SIZE {
            output.push_str(&format!("{:<2}", r_idx));
            for c_idx in 0..BOARD_SIZE {
                let ch = self.grid[r_idx][c_idx].to_char();
                let is_highlight = pos.map_or(false, |p| p.0 == r_idx && p.1 == c_idx);
                if is_highlight {
                    output.push_str(&format!("\x1b[1;33m{} \x1b[0m", ch));
                } else {
                    output.push(ch);
                    output.push(' ');
                }
            }
            if r_idx < BOARD_SIZE - 1 {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

/// What an accepted move did to the board.
///
/// The rules core applies each move synchronously; this description lets a
/// presentation layer animate the placement and any captures afterwards
/// without the core ever depending on timing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The intersection the stone was placed on.
    pub placed: (usize, usize),
    /// Every intersection cleared by the resulting captures.
    pub captured: Vec<(usize, usize)>,
}

impl MoveOutcome {
    /// Number of stones captured by the move.
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }
}

/// A full pre-move snapshot, taken immediately before a move is applied.
#[derive(Clone, Debug)]
struct Snapshot {
    board: Board,
    player: Player,
    black_captures: u32,
    white_captures: u32,
    move_count: u32,
}

/// Manages the state and progression of one Go session.
///
/// The session owns the live [`Board`], turn ownership, capture counters,
/// the consecutive-pass counter and a history of deep snapshots for undo.
/// All mutation goes through [`play`](Self::play), [`pass`](Self::pass),
/// [`undo`](Self::undo) and [`reset`](Self::reset); a rejected move leaves
/// every field untouched.
///
/// # Examples
/// ```
/// use goban::engine::{Game, Cell, Player};
///
/// let mut game = Game::new();
/// let outcome = game.play(4, 4).unwrap();
/// assert_eq!(outcome.placed, (4, 4));
/// assert_eq!(game.board().get(4, 4), Cell::Black);
/// assert_eq!(game.to_move(), Player::White);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    consecutive_passes: u32,
    move_count: u32,
    black_captures: u32,
    white_captures: u32,
    status: GameStatus,
    last_move: Option<(usize, usize)>,
    history: Vec<Snapshot>,
}

impl Game {
    /// Creates a new session on an empty board with Black to move.
    pub fn new() -> Self {
        Game::new_with_board(Board::new_empty())
    }

    /// Creates a new session starting from a specific position.
    ///
    /// Useful for tests and for setting up problems. Black is to move and
    /// all counters start at zero.
    pub fn new_with_board(board: Board) -> Self {
        Game {
            board,
            to_move: Player::Black,
            consecutive_passes: 0,
            move_count: 0,
            black_captures: 0,
            white_captures: 0,
            status: GameStatus::InProgress,
            last_move: None,
            history: Vec::new(),
        }
    }

    /// Returns an immutable reference to the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Whether the session still accepts moves.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of accepted stone placements so far. Passes do not count.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Passes played in a row since the last stone placement.
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    /// Stones this player has captured so far.
    pub fn captures(&self, player: Player) -> u32 {
        match player {
            Player::Black => self.black_captures,
            Player::White => self.white_captures,
        }
    }

    /// The most recently placed stone, cleared by undo and reset.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Convenience legality query for the side to move.
    pub fn is_legal_move(&self, r: usize, c: usize) -> bool {
        self.board.is_legal(r, c, self.to_move)
    }

    /// Whether `player` has any legal move, via exhaustive scan.
    pub fn has_any_legal_move(&self, player: Player) -> bool {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.board.is_legal(r, c, player) {
                    return true;
                }
            }
        }
        false
    }

    /// Plays a stone for the side to move.
    ///
    /// On acceptance, in one indivisible step: a pre-move snapshot is pushed
    /// to the history, the stone is placed, opponent groups left without
    /// liberties are removed, the mover's capture counter grows by the
    /// number of removed stones, the pass counter resets and the turn flips.
    ///
    /// # Errors
    /// - [`MoveError::GameAlreadyTerminal`] after the game has ended.
    /// - [`MoveError::OccupiedCell`] if the intersection holds a stone.
    /// - [`MoveError::SuicideMove`] if the move captures nothing and the
    ///   placed stone's group would have no liberties.
    ///
    /// A rejected move mutates nothing.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions; callers
    /// taking untrusted coordinates must range-check them first.
    pub fn play(&mut self, r: usize, c: usize) -> Result<MoveOutcome, MoveError> {
        if self.status == GameStatus::Terminal {
            return Err(MoveError::GameAlreadyTerminal);
        }

        let player = self.to_move;
        if self.board.get(r, c) != Cell::Empty {
            return Err(MoveError::OccupiedCell { row: r, col: c });
        }
        if !self.board.is_legal(r, c, player) {
            // Occupancy was checked above, so the only remaining rejection
            // is the suicide rule.
            return Err(MoveError::SuicideMove { row: r, col: c });
        }

        self.history.push(Snapshot {
            board: self.board.clone(),
            player,
            black_captures: self.black_captures,
            white_captures: self.white_captures,
            move_count: self.move_count,
        });

        self.board.set(r, c, Cell::from(player));
        self.move_count += 1;
        self.last_move = Some((r, c));

        let captured = self.resolve_captures(r, c, player);
        if !captured.is_empty() {
            match player {
                Player::Black => self.black_captures += captured.len() as u32,
                Player::White => self.white_captures += captured.len() as u32,
            }
        }

        self.consecutive_passes = 0;
        self.to_move = player.opponent();

        Ok(MoveOutcome {
            placed: (r, c),
            captured,
        })
    }

    /// Removes opponent groups left without liberties by the stone just
    /// played at `(r, c)`, returning every cleared intersection.
    ///
    /// The sweep runs over the four orthogonal neighbours on the live grid;
    /// removing a group empties its cells, so a group reachable from two
    /// neighbours is identified and counted once.
    fn resolve_captures(&mut self, r: usize, c: usize, player: Player) -> Vec<(usize, usize)> {
        let opponent = player.opponent();
        let opponent_stone = Cell::from(opponent);
        let mut captured = Vec::new();

        for (nr, nc) in orthogonal(r, c) {
            if self.board.get(nr, nc) == opponent_stone
                && !self.board.has_liberties(nr, nc, opponent)
            {
                let group = self.board.group_at(nr, nc, opponent);
                for &(gr, gc) in &group {
                    self.board.set(gr, gc, Cell::Empty);
                }
                captured.extend(group);
            }
        }

        captured
    }

    /// Passes the turn for the side to move.
    ///
    /// Two consecutive passes end the game, as does the discovery that
    /// neither side has any legal move left. In either terminal case the
    /// turn does not flip; otherwise it does. Returns the resulting status.
    ///
    /// # Errors
    /// [`MoveError::GameAlreadyTerminal`] after the game has ended.
    pub fn pass(&mut self) -> Result<GameStatus, MoveError> {
        if self.status == GameStatus::Terminal {
            return Err(MoveError::GameAlreadyTerminal);
        }

        self.consecutive_passes += 1;

        if self.consecutive_passes >= MAX_CONSECUTIVE_PASSES {
            self.status = GameStatus::Terminal;
            return Ok(GameStatus::Terminal);
        }

        if !self.has_any_legal_move(Player::Black) && !self.has_any_legal_move(Player::White) {
            self.status = GameStatus::Terminal;
            return Ok(GameStatus::Terminal);
        }

        self.to_move = self.to_move.opponent();
        Ok(GameStatus::InProgress)
    }

    /// Undoes the most recent stone placement.
    ///
    /// Pops the top history entry and restores the grid and counters from
    /// the entry beneath it, or resets to the empty starting position if
    /// none remain. The turn reverts to whichever player made the undone
    /// move, so that player may move again, and any pending pass-based
    /// termination is cancelled.
    ///
    /// Returns `false` without mutating anything when there is no history
    /// to restore or the game has already ended.
    pub fn undo(&mut self) -> bool {
        if self.status == GameStatus::Terminal {
            return false;
        }
        let popped = match self.history.pop() {
            Some(snapshot) => snapshot,
            None => return false,
        };

        if let Some(top) = self.history.last() {
            self.board = top.board.clone();
            self.black_captures = top.black_captures;
            self.white_captures = top.white_captures;
            self.move_count = top.move_count;
        } else {
            self.board = Board::new_empty();
            self.black_captures = 0;
            self.white_captures = 0;
            self.move_count = 0;
        }

        self.to_move = popped.player;
        self.consecutive_passes = 0;
        self.last_move = None;
        true
    }

    /// Discards the session and starts over on an empty board.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Lists every stone of `player` belonging to a group with exactly one
    /// liberty remaining (atari), sorted row-major.
    ///
    /// Intended for presentation-layer warnings; the rules themselves never
    /// consult it.
    pub fn atari_points(&self, player: Player) -> Vec<(usize, usize)> {
        let stone = Cell::from(player);
        let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
        let mut points = Vec::new();

        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if visited[r][c] || self.board.get(r, c) != stone {
                    continue;
                }
                let group = self.board.group_at(r, c, player);
                for &(gr, gc) in &group {
                    visited[gr][gc] = true;
                }
                if self.board.count_liberties(r, c, player) == 1 {
                    points.extend(group);
                }
            }
        }

        points.sort_unstable();
        points
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_array;

    #[test]
    fn test_new_empty_board() {
        let board = Board::new_empty();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                assert_eq!(board.get(r, c), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_group_at_connected_stones() {
        let board = board_from_str_array(&[
            "BB.......",
            "B.B......", // (1,2) is separate from the corner group
        ])
        .unwrap();
        let group = board.group_at(0, 0, Player::Black);
        assert_eq!(group, vec![(0, 0), (0, 1), (1, 0)]);

        let lone = board.group_at(1, 2, Player::Black);
        assert_eq!(lone, vec![(1, 2)]);

        // Wrong colour or empty start yields nothing.
        assert!(board.group_at(0, 0, Player::White).is_empty());
        assert!(board.group_at(5, 5, Player::Black).is_empty());
    }

    #[test]
    fn test_count_liberties_distinct() {
        let board = board_from_str_array(&["BB......."]).unwrap();
        // Corner pair: liberties are (0,2), (1,0) and (1,1), each counted
        // once even though they touch different stones of the group.
        assert_eq!(board.count_liberties(0, 0, Player::Black), 3);
        assert_eq!(board.count_liberties(0, 1, Player::Black), 3);
    }

    #[test]
    fn test_has_liberties_iff_empty_neighbour_exists() {
        // White corner stone fully surrounded by Black.
        let surrounded = board_from_str_array(&[
            "WB.......",
            "B........",
        ])
        .unwrap();
        assert!(!surrounded.has_liberties(0, 0, Player::White));
        assert_eq!(surrounded.count_liberties(0, 0, Player::White), 0);

        // Free one of the two boundary points and the group breathes again.
        let open = board_from_str_array(&["WB......."]).unwrap();
        assert!(open.has_liberties(0, 0, Player::White));
    }

    #[test]
    fn test_is_legal_rejects_occupied() {
        let board = board_from_str_array(&["B........"]).unwrap();
        assert!(!board.is_legal(0, 0, Player::Black));
        assert!(!board.is_legal(0, 0, Player::White));
    }

    #[test]
    fn test_is_legal_rejects_suicide() {
        // (0,0) is empty but surrounded by Black with no capture available.
        let board = board_from_str_array(&[
            ".B.......",
            "B........",
        ])
        .unwrap();
        assert!(!board.is_legal(0, 0, Player::White));
        // The same point is fine for Black.
        assert!(board.is_legal(0, 0, Player::Black));
    }

    #[test]
    fn test_is_legal_capture_overrides_suicide() {
        // White plays (0,0): the placed stone alone would have no liberties,
        // but the Black stone at (0,1) is left without liberties first, so
        // the move captures and is legal.
        let board = board_from_str_array(&[
            ".BW......",
            "BW.......",
        ])
        .unwrap();
        assert!(board.is_legal(0, 0, Player::White));
    }

    #[test]
    fn test_play_places_stone_and_flips_turn() {
        // Scenario: empty board, Black opens at the centre.
        let mut game = Game::new();
        let outcome = game.play(4, 4).expect("centre opening must be legal");

        assert_eq!(outcome.placed, (4, 4));
        assert!(outcome.captured.is_empty());
        assert_eq!(game.board().get(4, 4), Cell::Black);
        assert_eq!(game.board().stone_count(Player::Black), 1);
        assert_eq!(game.to_move(), Player::White);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_play_rejects_occupied_without_mutation() {
        let mut game = Game::new();
        game.play(4, 4).unwrap();

        let before = game.board().clone();
        let err = game.play(4, 4).unwrap_err();
        assert_eq!(err, MoveError::OccupiedCell { row: 4, col: 4 });
        assert_eq!(game.board(), &before);
        assert_eq!(game.to_move(), Player::White);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_play_rejects_suicide_without_mutation() {
        let board = board_from_str_array(&[
            ".B.......",
            "B........",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board.clone());
        game.pass().unwrap(); // hand the turn to White

        let err = game.play(0, 0).unwrap_err();
        assert_eq!(err, MoveError::SuicideMove { row: 0, col: 0 });
        assert_eq!(game.board(), &board);
        assert_eq!(game.to_move(), Player::White);
    }

    #[test]
    fn test_capture_in_corner() {
        // Scenario: White alone at (0,0), Black at (0,1); Black plays (1,0)
        // and takes the corner stone.
        let board = board_from_str_array(&["WB......."]).unwrap();
        let mut game = Game::new_with_board(board);

        let outcome = game.play(1, 0).unwrap();
        assert_eq!(outcome.captured, vec![(0, 0)]);
        assert_eq!(game.board().get(0, 0), Cell::Empty);
        assert_eq!(game.captures(Player::Black), 1);
        assert_eq!(game.captures(Player::White), 0);
    }

    #[test]
    fn test_capture_group_touched_from_two_sides_counted_once() {
        // The White corner group {(0,0),(0,1),(1,0)} has (1,1) as its last
        // liberty. Black at (1,1) touches it through two neighbours but the
        // group is removed (and counted) once.
        let board = board_from_str_array(&[
            "WWB......",
            "W........",
            "B........",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);

        let outcome = game.play(1, 1).unwrap();
        assert_eq!(outcome.captured_count(), 3);
        assert_eq!(game.captures(Player::Black), 3);
        for &(r, c) in &[(0, 0), (0, 1), (1, 0)] {
            assert_eq!(game.board().get(r, c), Cell::Empty);
        }
    }

    #[test]
    fn test_capture_two_separate_groups() {
        // Black at (1,1) simultaneously removes the lone White stones at
        // (0,1) and (1,0), which belong to different groups.
        let board = board_from_str_array(&[
            "BWB......",
            "W.B......",
            "BB.......",
        ])
        .unwrap();
        let mut game = Game::new_with_board(board);

        let outcome = game.play(1, 1).unwrap();
        let mut captured = outcome.captured.clone();
        captured.sort_unstable();
        assert_eq!(captured, vec![(0, 1), (1, 0)]);
        assert_eq!(game.captures(Player::Black), 2);
    }

    #[test]
    fn test_undo_single_move_restores_start() {
        // Scenario: one accepted move, then undo: grid back to all-empty,
        // turn back to the player who made the move.
        let mut game = Game::new();
        game.play(4, 4).unwrap();

        assert!(game.undo());
        assert_eq!(game.board(), &Board::new_empty());
        assert_eq!(game.to_move(), Player::Black);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_undo_restores_entry_beneath() {
        let mut game = Game::new();
        game.play(4, 4).unwrap(); // Black
        game.play(2, 2).unwrap(); // White
        assert_eq!(game.history.len(), 2);

        // Pop White's entry; the new top holds the snapshot taken before
        // Black's move, and White moves again.
        assert!(game.undo());
        assert_eq!(game.board(), &Board::new_empty());
        assert_eq!(game.to_move(), Player::White);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn test_undo_restores_capture_counters() {
        let board = board_from_str_array(&["WB......."]).unwrap();
        let mut game = Game::new_with_board(board.clone());
        game.play(1, 0).unwrap();
        assert_eq!(game.captures(Player::Black), 1);

        assert!(game.undo());
        assert_eq!(game.captures(Player::Black), 0);
        assert_eq!(game.board(), &Board::new_empty());
        assert_eq!(game.to_move(), Player::Black);
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut game = Game::new();
        assert!(!game.undo());
        assert_eq!(game.board(), &Board::new_empty());
        assert_eq!(game.to_move(), Player::Black);
    }

    #[test]
    fn test_undo_clears_pending_pass() {
        let mut game = Game::new();
        game.play(4, 4).unwrap();
        game.pass().unwrap();
        assert_eq!(game.consecutive_passes(), 1);

        assert!(game.undo());
        assert_eq!(game.consecutive_passes(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_history_length_tracks_move_count() {
        let mut game = Game::new();
        game.play(0, 0).unwrap();
        game.play(8, 8).unwrap();
        game.play(0, 8).unwrap();
        assert_eq!(game.history.len() as u32, game.move_count());
        game.pass().unwrap(); // passes are not recorded
        assert_eq!(game.history.len() as u32, game.move_count());
    }

    #[test]
    fn test_two_passes_end_game() {
        // Scenario: two consecutive passes from a non-empty board.
        let board = board_from_str_array(&["B...W...."]).unwrap();
        let mut game = Game::new_with_board(board);

        assert_eq!(game.pass().unwrap(), GameStatus::InProgress);
        assert_eq!(game.to_move(), Player::White);
        assert_eq!(game.pass().unwrap(), GameStatus::Terminal);
        assert_eq!(game.status(), GameStatus::Terminal);
        // The turn does not flip on the terminating pass.
        assert_eq!(game.to_move(), Player::White);
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut game = Game::new();
        game.play(4, 4).unwrap();
        game.pass().unwrap();
        game.pass().unwrap();
        assert_eq!(game.status(), GameStatus::Terminal);

        assert_eq!(game.play(0, 0).unwrap_err(), MoveError::GameAlreadyTerminal);
        assert_eq!(game.pass().unwrap_err(), MoveError::GameAlreadyTerminal);
        assert!(!game.undo());

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board(), &Board::new_empty());
        assert_eq!(game.to_move(), Player::Black);
    }

    #[test]
    fn test_stone_move_resets_pass_counter() {
        let mut game = Game::new();
        game.pass().unwrap();
        assert_eq!(game.consecutive_passes(), 1);
        game.play(4, 4).unwrap();
        assert_eq!(game.consecutive_passes(), 0);
    }

    #[test]
    fn test_atari_points() {
        // The White pair {(0,0),(0,1)} is down to its last liberty at (1,1).
        let board = board_from_str_array(&[
            "WWB......",
            "B........",
        ])
        .unwrap();
        let game = Game::new_with_board(board);

        assert_eq!(game.atari_points(Player::White), vec![(0, 0), (0, 1)]);
        // Neither Black stone is in atari.
        assert!(game.atari_points(Player::Black).is_empty());
    }

    #[test]
    fn test_display_board_formatting() {
        let board = board_from_str_array(&["B...W...."]).unwrap();
        let display = format!("{}", board);
        assert!(display.contains("0 1 2 3 4 5 6 7 8"), "missing column header");
        assert_eq!(
            display.trim_end().lines().count(),
            BOARD_SIZE + 1,
            "incorrect number of lines in display output"
        );
        assert!(display.contains('B'));
        assert!(display.contains('W'));
    }
}
