//! Movement directions.
//!
//! The mansion only knows four relative directions. The declaration order
//! below is also the order in which exits are listed.

use std::fmt;

/// A direction an exit can lead in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Straight ahead.
    Forward,
    /// Back the way you came.
    Back,
    /// To the left.
    Left,
    /// To the right.
    Right,
}

impl Direction {
    /// Every direction, in listing order.
    pub const ALL: [Direction; 4] = [Self::Forward, Self::Back, Self::Left, Self::Right];

    /// Parse a direction from player input (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "forward" | "forwards" | "f" | "ahead" => Some(Self::Forward),
            "back" | "backward" | "backwards" | "b" | "behind" => Some(Self::Back),
            "left" => Some(Self::Left),
            "right" | "r" => Some(Self::Right),
            _ => None,
        }
    }

    /// Get the canonical name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Describe an exit in this direction leading to `target`.
    ///
    /// `forward` and `back` read as "Ahead" and "Behind"; every other
    /// direction is spelled out.
    pub fn exit_phrase(&self, target: &str) -> String {
        match self {
            Self::Forward => format!("Ahead is the {target}."),
            Self::Back => format!("Behind is the {target}."),
            Self::Left | Self::Right => format!("To the {} is the {target}.", self.name()),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
