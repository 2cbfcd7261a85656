//! Interactive fiction engine for the circus mansion.
//!
//! Builds the mansion's room graph, keeps the hidden puzzle solutions and
//! unlock flags, parses player commands, and runs the single-player game
//! session: movement with a step budget, items, four puzzles, random scares,
//! and the final showdown.

/// Game configuration.
pub mod config;
/// Error types for the fiction engine.
pub mod error;
/// Ambient and scare event sampling.
pub mod events;
/// Construction of the mansion's room graph.
pub mod mansion;
/// Command parsing and name suggestions.
pub mod parser;
/// Player state management.
pub mod player;
/// Puzzle resolvers.
pub mod puzzle;
/// The game session and its command interpreter.
pub mod session;
/// Hidden solutions, unlock flags, and counters.
pub mod state;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use events::{EventPool, EventSampler};
pub use parser::{Command, parse_command};
pub use player::PlayerState;
pub use puzzle::{PendingPrompt, Puzzle};
pub use session::{GameSession, GameStatus, Outcome};
pub use state::{Color, Flag, FlagSet, Grave, WorldState};
