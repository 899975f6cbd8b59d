//! # Goban
//!
//! A rules engine for 9x9 Go: move legality under the liberty/suicide/
//! capture rule, capture resolution, pass-based termination, undo, end-of-
//! game territory scoring, and a heuristic agent for the automated side.
//!
//! It is used by two binaries:
//! - `play`: an interactive terminal game against the heuristic agent.
//! - `arena`: seeded agent-vs-agent self-play with score statistics.
//!
//! ## Modules
//! - `engine`: board representation (`Board`), group and liberty queries,
//!   the legality check, capture resolution, and session state (`Game`)
//!   with turn ownership, pass tracking and snapshot-based undo.
//! - `scoring`: territory partitioning and final score computation.
//! - `agent`: single-ply heuristic move selection with a randomized
//!   tie-break over an injected random source.
//! - `utils`: board parsing from string fixtures, used heavily by tests.

pub mod agent;
pub mod engine;
pub mod scoring;
pub mod utils;
