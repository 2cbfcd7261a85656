//! Landmark rooms.
//!
//! Every room in the mansion carries a landmark tag so that room-specific
//! behaviour can be dispatched with an exhaustive `match` instead of by
//! comparing names.

/// A named room of the mansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    /// Where the player wakes up.
    StartingRoom,
    /// The grand hallway behind the starting room.
    MainHall,
    /// Holds the crowbar.
    StorageRoom,
    /// Hides the way on behind its mirrors.
    MirrorRoom,
    /// Holds the lever.
    TrippyHallway,
    /// The hub room with the covered platter.
    DiningHall,
    /// Corridor leading to the balloons.
    HallwayToBalloonRoom,
    /// Where balloons are popped.
    BalloonRoom,
    /// Opened by popping every balloon.
    SecretRoom,
    /// Stairs leading to the portraits.
    StairwayToPortraitRoom,
    /// Holds the vault with the dagger.
    PortraitRoom,
    /// Statue corridor where the clowns give chase.
    HallwayToClownGallery,
    /// Holds the color note and the clown nose.
    ClownGallery,
    /// Holds the color panel.
    ColorPuzzleRoom,
    /// Opened by solving the color panel.
    HallwayToGraveyard,
    /// Holds the three graves.
    Graveyard,
    /// Trapeze room with the handle-less door.
    CircusRoom,
    /// The last stretch.
    FinalHallway,
    /// The final room, where the game is decided.
    RingmastersChamber,
}
