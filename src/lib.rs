//! # Color Lines Engine
//!
//! This library provides the core rules of the classic Color Lines marble
//! puzzle: a 9x9 board on which colored balls travel along unobstructed
//! paths and are removed whenever five or more of the same color line up.
//!
//! It is used by one binary:
//! - `human_player`: Allows interactive gameplay via the command line.
//!
//! Rendering, animation timing and input capture are left to the caller;
//! the engine runs synchronously and reports structured results.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), cell contents
//!   (`Cell`), and coordinates (`Pos`).
//! - `pathfinder`: A* search deciding whether a ball can travel to a target
//!   cell around obstacles.
//! - `lines`: Detection of five-or-more same-color runs through a pivot cell.
//! - `game`: The turn state machine (`Game`) coordinating selection, moves,
//!   spawning, scoring and game over.
//! - `record`: The persisted best-score slot.
//! - `utils`: Utility functions, such as parsing board configurations from
//!   strings.

pub mod engine;
pub mod game;
pub mod lines;
pub mod pathfinder;
pub mod record;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full path,
// e.g., `color_lines::game::Game`. This keeps the top-level library
// namespace cleaner.
