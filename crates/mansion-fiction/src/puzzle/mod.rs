//! Puzzle resolvers.
//!
//! Each resolver validates player input against the hidden solution in
//! [`WorldState`] and mutates the room graph or player on success. A failed
//! attempt costs at most the configured step penalty and can be retried; a
//! solved puzzle answers every later attempt with an "already solved" line.

pub mod balloon;
pub mod color;
pub mod grave;
pub mod portrait;

use rand::rngs::StdRng;

use mansion_core::{Landmark, RoomGraph};

use crate::config::GameConfig;
use crate::error::FictionResult;
use crate::player::PlayerState;
use crate::state::{Flag, Grave, WorldState};

/// The puzzles of the mansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Puzzle {
    /// Pop every balloon in the Balloon Room.
    Balloons,
    /// Enter the color code on the panel.
    ColorLock,
    /// Activate the graves in order.
    GraveOrder,
    /// Open the vault behind the portrait.
    PortraitVault,
}

impl Puzzle {
    /// The puzzle housed in a room, if any.
    pub fn at(landmark: Landmark) -> Option<Self> {
        match landmark {
            Landmark::BalloonRoom => Some(Self::Balloons),
            Landmark::ColorPuzzleRoom => Some(Self::ColorLock),
            Landmark::Graveyard => Some(Self::GraveOrder),
            Landmark::PortraitRoom => Some(Self::PortraitVault),
            _ => None,
        }
    }

    /// Parse a puzzle from the word following `solve`.
    pub fn from_topic(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "balloon" | "balloons" => Some(Self::Balloons),
            "color" | "colors" | "colour" | "colours" | "panel" => Some(Self::ColorLock),
            "graveyard" | "grave" | "graves" => Some(Self::GraveOrder),
            "portrait" | "painting" | "vault" => Some(Self::PortraitVault),
            _ => None,
        }
    }

    /// Whether the puzzle has been solved.
    pub fn is_solved(&self, state: &WorldState) -> bool {
        let flag = match self {
            Self::Balloons => Flag::SecretRoomOpened,
            Self::ColorLock => Flag::ColorSolved,
            Self::GraveOrder => Flag::GraveSolved,
            Self::PortraitVault => Flag::DaggerUnlocked,
        };
        state.flags.is_raised(flag)
    }
}

/// Input a resolver is waiting for on the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingPrompt {
    /// Four colors for the panel.
    ColorCode,
    /// The next grave to activate.
    GraveOrder {
        /// Graves activated so far in this attempt.
        chosen: Vec<Grave>,
    },
}

/// What a resolver step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Text for the player.
    pub text: String,
    /// Set when the resolver wants another line of input.
    pub pending: Option<PendingPrompt>,
}

impl Resolution {
    /// A finished step.
    pub fn done(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pending: None,
        }
    }

    /// A step that waits for more input.
    pub fn prompt(text: impl Into<String>, pending: PendingPrompt) -> Self {
        Self {
            text: text.into(),
            pending: Some(pending),
        }
    }
}

/// Mutable context passed to each resolver.
pub struct PuzzleContext<'a> {
    /// The mansion.
    pub graph: &'a mut RoomGraph,
    /// Secrets, flags, and counters.
    pub state: &'a mut WorldState,
    /// The player.
    pub player: &'a mut PlayerState,
    /// Session randomness.
    pub rng: &'a mut StdRng,
    /// Game rules.
    pub config: &'a GameConfig,
}

impl PuzzleContext<'_> {
    /// The exits line for the player's current room.
    pub fn exits_here(&self) -> FictionResult<String> {
        Ok(self.graph.describe_exits(self.player.location)?)
    }

    /// Deduct the wrong-guess penalty. Returns the steps lost.
    pub fn penalize_guess(&mut self) -> i32 {
        let penalty = self.config.wrong_guess_penalty;
        self.player.spend_steps(penalty);
        penalty
    }
}

/// Join paragraphs of narration.
pub(crate) fn narrate<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
pub(crate) mod testing {
    //! A hand-wired context over the real mansion with known secrets.

    use rand::SeedableRng;

    use super::*;
    use crate::mansion::build_mansion;
    use crate::state::Color;

    pub(crate) struct Fixture {
        pub graph: RoomGraph,
        pub state: WorldState,
        pub player: PlayerState,
        pub rng: StdRng,
        pub config: GameConfig,
    }

    impl Fixture {
        pub fn at(landmark: Landmark) -> Self {
            let config = GameConfig::default();
            let graph = build_mansion(config.pop_threshold).unwrap();
            let location = graph.landmark(landmark).unwrap();
            Self {
                state: WorldState::with_secrets(
                    [Color::Green, Color::Yellow, Color::Red, Color::Blue],
                    [Grave::Middle, Grave::Youngest, Grave::Oldest],
                    config.pop_threshold,
                ),
                player: PlayerState::new(location, config.starting_steps),
                rng: StdRng::seed_from_u64(42),
                graph,
                config,
            }
        }

        pub fn ctx(&mut self) -> PuzzleContext<'_> {
            PuzzleContext {
                graph: &mut self.graph,
                state: &mut self.state,
                player: &mut self.player,
                rng: &mut self.rng,
                config: &self.config,
            }
        }

        pub fn room(&self, landmark: Landmark) -> &mansion_core::Room {
            self.graph
                .room(self.graph.landmark(landmark).unwrap())
                .unwrap()
        }
    }
}
