//! Item identifiers.

use std::fmt;

/// Every item that can lie in a room or be carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    /// Breaks the mirrors in the Mirror Room.
    Crowbar,
    /// Opens the vault behind the portrait.
    Lever,
    /// Pops balloons, and is needed to win.
    Dagger,
    /// Activates the color panel.
    BlueButton,
    /// Opens the door out of the Circus Room.
    WheelHandle,
    /// Reveals the grave order.
    GraveyardNote,
    /// Reveals the color code.
    ColorNote,
    /// Makes the gallery clowns give chase.
    ClownNose,
}

impl Item {
    /// Every item.
    pub const ALL: [Item; 8] = [
        Self::Crowbar,
        Self::Lever,
        Self::Dagger,
        Self::BlueButton,
        Self::WheelHandle,
        Self::GraveyardNote,
        Self::ColorNote,
        Self::ClownNose,
    ];

    /// Parse an item from player input.
    ///
    /// Case and surrounding whitespace are ignored, as is a leading "the".
    pub fn parse(s: &str) -> Option<Self> {
        let words: Vec<String> = s.split_whitespace().map(str::to_lowercase).collect();
        let words = match words.first().map(String::as_str) {
            Some("the") => &words[1..],
            _ => &words[..],
        };
        match words.join(" ").as_str() {
            "crowbar" => Some(Self::Crowbar),
            "lever" => Some(Self::Lever),
            "dagger" => Some(Self::Dagger),
            "blue button" | "button" => Some(Self::BlueButton),
            "wheel handle" | "handle" => Some(Self::WheelHandle),
            "graveyard note" => Some(Self::GraveyardNote),
            "color note" | "colour note" => Some(Self::ColorNote),
            "clown nose" | "nose" => Some(Self::ClownNose),
            _ => None,
        }
    }

    /// Get the display name for this item.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crowbar => "crowbar",
            Self::Lever => "lever",
            Self::Dagger => "dagger",
            Self::BlueButton => "blue button",
            Self::WheelHandle => "wheel handle",
            Self::GraveyardNote => "graveyard note",
            Self::ColorNote => "color note",
            Self::ClownNose => "clown nose",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
