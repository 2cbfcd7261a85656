//! Player state management.

use mansion_core::{Item, RoomId};

/// The player's current state in the game session.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Current room.
    pub location: RoomId,
    /// Items carried, in pickup order.
    pub inventory: Vec<Item>,
    /// Remaining step budget. Penalties can push it below zero.
    pub steps: i32,
}

impl PlayerState {
    /// Create a new player state at the given room.
    pub fn new(location: RoomId, steps: i32) -> Self {
        Self {
            location,
            inventory: Vec::new(),
            steps,
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Add an item to inventory.
    pub fn add_item(&mut self, item: Item) {
        if !self.inventory.contains(&item) {
            self.inventory.push(item);
        }
    }

    /// Remove an item from inventory.
    pub fn remove_item(&mut self, item: Item) -> bool {
        if let Some(pos) = self.inventory.iter().position(|&i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Deduct steps, saturating at `i32::MIN`.
    pub fn spend_steps(&mut self, steps: i32) {
        self.steps = self.steps.saturating_sub(steps);
    }

    /// Grant extra steps, saturating at `i32::MAX`.
    pub fn restore_steps(&mut self, steps: i32) {
        self.steps = self.steps.saturating_add(steps);
    }

    /// Whether the step budget is used up.
    pub fn is_exhausted(&self) -> bool {
        self.steps <= 0
    }
}
