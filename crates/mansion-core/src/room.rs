//! The room entity.

use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::graph::RoomId;
use crate::item::Item;
use crate::landmark::Landmark;

/// A node in the room graph.
///
/// A room is known by its code name (the colour of its door) until the
/// player has been inside; from then on its true name is shown.
#[derive(Debug, Clone)]
pub struct Room {
    code_name: String,
    true_name: String,
    /// Free-text description, rewritten by puzzle events.
    pub description: String,
    /// Items currently lying in the room.
    pub items: Vec<Item>,
    exits: BTreeMap<Direction, RoomId>,
    visited: bool,
    landmark: Option<Landmark>,
}

impl Room {
    /// Create an unvisited room with no exits and no items.
    pub fn new(
        code_name: impl Into<String>,
        true_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code_name: code_name.into(),
            true_name: true_name.into(),
            description: description.into(),
            items: Vec::new(),
            exits: BTreeMap::new(),
            visited: false,
            landmark: None,
        }
    }

    /// Place an item in the room.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// The name shown once the room has been visited.
    pub fn true_name(&self) -> &str {
        &self.true_name
    }

    /// The name to show the player right now.
    pub fn display_name(&self) -> &str {
        if self.visited {
            &self.true_name
        } else {
            &self.code_name
        }
    }

    /// Whether the player has been inside.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Mark the room as visited. Returns `true` on the first visit only.
    pub fn mark_visited(&mut self) -> bool {
        !std::mem::replace(&mut self.visited, true)
    }

    /// The landmark this room stands for, if any.
    pub fn landmark(&self) -> Option<Landmark> {
        self.landmark
    }

    /// The room an exit in `direction` leads to.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits.get(&direction).copied()
    }

    /// All exits, in listing order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        self.exits.iter().map(|(dir, id)| (*dir, *id))
    }

    /// Check if an item lies here.
    pub fn has_item(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Remove an item from the room. Returns `false` if it was not here.
    pub fn take_item(&mut self, item: Item) -> bool {
        if let Some(pos) = self.items.iter().position(|&i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    pub(crate) fn set_landmark(&mut self, landmark: Landmark) {
        self.landmark = Some(landmark);
    }

    pub(crate) fn set_exit(&mut self, direction: Direction, target: RoomId) -> Option<RoomId> {
        self.exits.insert(direction, target)
    }

    pub(crate) fn remove_exit(&mut self, direction: Direction) -> Option<RoomId> {
        self.exits.remove(&direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_room_is_concealed() {
        let room = Room::new("Green Door", "Main Hall", "A grand hallway.");
        assert!(!room.is_visited());
        assert_eq!(room.display_name(), "Green Door");
        assert!(room.items.is_empty());
        assert_eq!(room.exits().count(), 0);
    }

    #[test]
    fn first_visit_reveals_name() {
        let mut room = Room::new("Green Door", "Main Hall", "A grand hallway.");
        assert!(room.mark_visited());
        assert_eq!(room.display_name(), "Main Hall");
        assert!(!room.mark_visited());
        assert_eq!(room.display_name(), "Main Hall");
    }

    #[test]
    fn take_item_removes_one() {
        let mut room = Room::new("Red Door", "Storage Room", "Dusty shelves.")
            .with_item(Item::Crowbar)
            .with_item(Item::Lever);
        assert!(room.take_item(Item::Crowbar));
        assert!(!room.has_item(Item::Crowbar));
        assert!(!room.take_item(Item::Crowbar));
        assert_eq!(room.items, vec![Item::Lever]);
    }

    proptest! {
        #[test]
        fn display_name_tracks_visited(code in "[A-Z][a-z]{2,8} Door", name in "[A-Z][a-z]{2,12}", visits in 0usize..4) {
            let mut room = Room::new(code.clone(), name.clone(), "");
            for _ in 0..visits {
                room.mark_visited();
            }
            let expected = if visits == 0 { &code } else { &name };
            prop_assert_eq!(room.display_name(), expected.as_str());
        }
    }
}
