//! Hidden solutions, unlock flags, and counters.
//!
//! One [`WorldState`] exists per game. Its secrets are drawn once when the
//! session starts and never change; its flags only ever go from lowered to
//! raised.

use std::collections::HashSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::info;

/// A color on the color panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
}

impl Color {
    /// Every panel color.
    pub const ALL: [Color; 4] = [Self::Red, Self::Green, Self::Blue, Self::Yellow];

    /// Parse a color from player input (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "yellow" => Some(Self::Yellow),
            _ => None,
        }
    }

    /// Get the lowercase name of this color.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the three brothers' graves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grave {
    /// Died 1857.
    Oldest,
    /// Died 1889.
    Middle,
    /// Died 1905.
    Youngest,
}

impl Grave {
    /// Every grave.
    pub const ALL: [Grave; 3] = [Self::Oldest, Self::Middle, Self::Youngest];

    /// Parse a grave label from player input (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "oldest" => Some(Self::Oldest),
            "middle" => Some(Self::Middle),
            "youngest" => Some(Self::Youngest),
            _ => None,
        }
    }

    /// Get the capitalized label of this grave.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oldest => "Oldest",
            Self::Middle => "Middle",
            Self::Youngest => "Youngest",
        }
    }
}

impl fmt::Display for Grave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A one-way progress flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// The blue button has dropped from a balloon.
    BlueButtonFound,
    /// The blue button is in the color panel.
    ColorPuzzleUnlocked,
    /// Every balloon is popped and the secret room is open.
    SecretRoomOpened,
    /// The portrait vault is open.
    DaggerUnlocked,
    /// The color code has been entered.
    ColorSolved,
    /// The graves have been activated in order.
    GraveSolved,
    /// The dining platter has been lifted.
    Lifted,
    /// The final room has been reached or the steps ran out.
    End,
}

/// A set of flags that can be raised but never lowered.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    raised: HashSet<Flag>,
}

impl FlagSet {
    /// Create a set with every flag lowered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a flag. Returns `true` only if it was lowered before.
    pub fn raise(&mut self, flag: Flag) -> bool {
        let fresh = self.raised.insert(flag);
        if fresh {
            info!(?flag, "flag_raised");
        }
        fresh
    }

    /// Check whether a flag is raised.
    pub fn is_raised(&self, flag: Flag) -> bool {
        self.raised.contains(&flag)
    }

    /// Number of raised flags.
    pub fn len(&self) -> usize {
        self.raised.len()
    }

    /// Whether no flag is raised.
    pub fn is_empty(&self) -> bool {
        self.raised.is_empty()
    }
}

/// Per-game world state shared by every puzzle resolver.
#[derive(Debug, Clone)]
pub struct WorldState {
    /// The order the colors must be entered on the panel.
    pub color_code: [Color; 4],
    /// The order the graves must be activated.
    pub grave_order: [Grave; 3],
    /// Progress flags.
    pub flags: FlagSet,
    /// Balloons popped so far.
    pub balloon_pop_count: u32,
    /// Balloons still floating.
    pub balloons_left: u32,
}

impl WorldState {
    /// Draw fresh secrets from `rng`.
    ///
    /// Both secrets are shuffles of their full sets, so every color and
    /// every grave appears exactly once.
    pub fn generate(rng: &mut StdRng, balloons: u32) -> Self {
        let mut color_code = Color::ALL;
        color_code.shuffle(rng);
        let mut grave_order = Grave::ALL;
        grave_order.shuffle(rng);
        Self::with_secrets(color_code, grave_order, balloons)
    }

    /// Create a state with known secrets.
    pub fn with_secrets(color_code: [Color; 4], grave_order: [Grave; 3], balloons: u32) -> Self {
        Self {
            color_code,
            grave_order,
            flags: FlagSet::new(),
            balloon_pop_count: 0,
            balloons_left: balloons,
        }
    }

    /// The color code as written on the color note.
    pub fn color_code_text(&self) -> String {
        self.color_code
            .iter()
            .map(Color::name)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The grave order as written on the graveyard note.
    pub fn grave_order_text(&self) -> String {
        self.grave_order
            .iter()
            .map(Grave::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
