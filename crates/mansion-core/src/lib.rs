//! Core world model for the circus mansion.
//!
//! This crate defines the navigable world: rooms with concealed and revealed
//! names, directional exits between them, the items lying around, and the
//! [`RoomGraph`] arena that owns every room. It knows nothing about puzzles
//! or commands; those live in `mansion-fiction`.

/// Movement directions and their exit phrasing.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// The room arena and its connection operations.
pub mod graph;
/// Item identifiers.
pub mod item;
/// Named landmark rooms that game logic refers to directly.
pub mod landmark;
/// The room entity.
pub mod room;

/// Re-export of [`direction::Direction`].
pub use direction::Direction;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export room graph types.
pub use graph::{RoomGraph, RoomId};
/// Re-export of [`item::Item`].
pub use item::Item;
/// Re-export of [`landmark::Landmark`].
pub use landmark::Landmark;
/// Re-export of [`room::Room`].
pub use room::Room;
