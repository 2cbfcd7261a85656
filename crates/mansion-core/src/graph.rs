use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult};
use crate::landmark::Landmark;
use crate::room::Room;

/// Index of a room inside its [`RoomGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(usize);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "room#{}", self.0)
    }
}

/// Arena owning every room. Exits are [`RoomId`]s into the same arena, so
/// the graph may contain cycles without any room owning another.
#[derive(Debug, Clone, Default)]
pub struct RoomGraph {
    rooms: Vec<Room>,

    // Indexes
    true_names: HashSet<String>,
    landmarks: HashMap<Landmark, RoomId>,
}

impl RoomGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Add a room to the graph. Returns the room's ID.
    pub fn add_room(&mut self, room: Room) -> CoreResult<RoomId> {
        let name_lower = room.true_name().to_lowercase();
        if self.true_names.contains(&name_lower) {
            return Err(CoreError::DuplicateName(room.true_name().to_string()));
        }

        let id = RoomId(self.rooms.len());
        self.true_names.insert(name_lower);
        self.rooms.push(room);
        Ok(id)
    }

    /// Add a room and register it as `landmark`.
    pub fn add_landmark(&mut self, landmark: Landmark, mut room: Room) -> CoreResult<RoomId> {
        room.set_landmark(landmark);
        let id = self.add_room(room)?;
        self.landmarks.insert(landmark, id);
        Ok(id)
    }

    /// Look up the room registered for a landmark.
    pub fn landmark(&self, landmark: Landmark) -> CoreResult<RoomId> {
        self.landmarks
            .get(&landmark)
            .copied()
            .ok_or(CoreError::MissingLandmark(landmark))
    }

    /// The landmark a room stands for, if any.
    pub fn landmark_of(&self, id: RoomId) -> Option<Landmark> {
        self.rooms.get(id.0).and_then(Room::landmark)
    }

    /// Get a reference to a room by ID.
    pub fn room(&self, id: RoomId) -> CoreResult<&Room> {
        self.rooms.get(id.0).ok_or(CoreError::RoomNotFound(id))
    }

    /// Get a mutable reference to a room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> CoreResult<&mut Room> {
        self.rooms.get_mut(id.0).ok_or(CoreError::RoomNotFound(id))
    }

    /// Iterate over all rooms with their IDs.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the graph has no rooms.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    // -----------------------------------------------------------------------
    // Connections
    // -----------------------------------------------------------------------

    /// Add or overwrite the exit from `from` in `direction`.
    ///
    /// Returns the room the exit previously led to, if any.
    pub fn connect(
        &mut self,
        from: RoomId,
        direction: Direction,
        to: RoomId,
    ) -> CoreResult<Option<RoomId>> {
        self.room(to)?;
        Ok(self.room_mut(from)?.set_exit(direction, to))
    }

    /// Remove the exit from `from` in `direction`.
    ///
    /// Removing an exit that does not exist is a no-op and returns `None`.
    pub fn disconnect(&mut self, from: RoomId, direction: Direction) -> CoreResult<Option<RoomId>> {
        Ok(self.room_mut(from)?.remove_exit(direction))
    }

    // -----------------------------------------------------------------------
    // Presentation
    // -----------------------------------------------------------------------

    /// The name of a room as the player currently knows it.
    pub fn display_name(&self, id: RoomId) -> CoreResult<&str> {
        Ok(self.room(id)?.display_name())
    }

    /// One line describing every exit of a room.
    pub fn describe_exits(&self, id: RoomId) -> CoreResult<String> {
        let room = self.room(id)?;
        let phrases = room
            .exits()
            .map(|(dir, target)| -> CoreResult<String> {
                Ok(dir.exit_phrase(self.display_name(target)?))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        if phrases.is_empty() {
            Ok("There are no visible exits.".to_string())
        } else {
            Ok(phrases.join(" "))
        }
    }
}
