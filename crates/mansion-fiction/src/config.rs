//! Configuration for a game session.

use serde::{Deserialize, Serialize};

/// Tunable rules for a game session.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for a reproducible game. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Step budget the player starts with.
    pub starting_steps: i32,
    /// Balloons in the Balloon Room; popping all of them opens the secret room.
    pub pop_threshold: u32,
    /// Percent added to the blue button's drop chance by every pop.
    pub button_chance_step: u32,
    /// Steps lost for a wrong color code or grave order.
    pub wrong_guess_penalty: i32,
    /// Percent chance of an ambient event on `look`.
    pub ambient_chance: u32,
    /// Percent chance of a major scare on `look`.
    pub scare_chance: u32,
    /// Steps lost to a major scare.
    pub scare_penalty: i32,
    /// Steps gained on entering the secret room.
    pub secret_room_bonus: i32,
    /// Steps the player must have left on reaching the final room to win.
    pub min_steps_to_win: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_steps: 50,
            pop_threshold: 10,
            button_chance_step: 5,
            wrong_guess_penalty: 5,
            ambient_chance: 10,
            scare_chance: 5,
            scare_penalty: 1,
            secret_room_bonus: 2,
            min_steps_to_win: 1,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting step budget.
    pub fn with_steps(mut self, steps: i32) -> Self {
        self.starting_steps = steps;
        self
    }

    /// Set the number of balloons to pop before the secret room opens (at least 1).
    pub fn with_pop_threshold(mut self, pops: u32) -> Self {
        self.pop_threshold = pops.max(1);
        self
    }

    /// Set the ambient and scare chances (clamped to 0-100).
    pub fn with_event_chances(mut self, ambient: u32, scare: u32) -> Self {
        self.ambient_chance = ambient.min(100);
        self.scare_chance = scare.min(100);
        self
    }

    /// Apply the limits the builders enforce to fields set directly,
    /// such as those read from a config file.
    pub fn normalized(self) -> Self {
        let (pops, ambient, scare) = (self.pop_threshold, self.ambient_chance, self.scare_chance);
        self.with_pop_threshold(pops)
            .with_event_chances(ambient, scare)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.starting_steps, 50);
        assert_eq!(cfg.pop_threshold, 10);
        assert_eq!(cfg.wrong_guess_penalty, 5);
        assert_eq!(cfg.min_steps_to_win, 1);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_steps(12)
            .with_pop_threshold(20);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.starting_steps, 12);
        assert_eq!(cfg.pop_threshold, 20);
    }

    #[test]
    fn chances_clamped() {
        let cfg = GameConfig::default().with_event_chances(250, 101);
        assert_eq!(cfg.ambient_chance, 100);
        assert_eq!(cfg.scare_chance, 100);
        assert_eq!(GameConfig::default().with_pop_threshold(0).pop_threshold, 1);
    }

    #[test]
    fn normalized_clamps_loaded_values() {
        let cfg: GameConfig = serde_json::from_str(
            r#"{"pop_threshold": 0, "ambient_chance": 400, "scare_chance": 150}"#,
        )
        .unwrap();
        assert_eq!(cfg.pop_threshold, 0);

        let cfg = cfg.normalized();
        assert_eq!(cfg.pop_threshold, 1);
        assert_eq!(cfg.ambient_chance, 100);
        assert_eq!(cfg.scare_chance, 100);
        assert_eq!(GameConfig::default().normalized(), GameConfig::default());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"starting_steps": 3, "seed": 9}"#).unwrap();
        assert_eq!(cfg.starting_steps, 3);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.pop_threshold, 10);
    }
}
