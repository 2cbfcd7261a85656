//! Ambient and scare event sampling.
//!
//! Events are dealt from a shuffled pool like cards from a deck: every event
//! is drawn once before any is drawn again. A fresh shuffle only happens when
//! the pool runs dry, so repeats are possible across a reshuffle but never
//! within one pass.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::GameConfig;

/// Flavour events with no effect on the game.
pub const AMBIENT_EVENTS: &[&str] = &[
    "You hear faint circus music drifting from nowhere...",
    "A child's laughter echoes, then cuts off abruptly.",
    "The lights flicker, and for a moment the shadows seem to move.",
    "You feel a cold hand brush against your arm, but nothing is there.",
    "Somewhere in the distance, a balloon pops on its own.",
    "The smell of popcorn fills the air, then vanishes instantly.",
    "A whisper calls your name, but the room is empty.",
];

/// Major scares. Each one costs the player a step.
pub const SCARE_EVENTS: &[&str] = &[
    "A statue crashes to the ground behind you with a deafening bang!",
    "The lights explode overhead, showering sparks around you!",
    "A knife whizzes past your head and embeds itself in the wall!",
    "A clown mannequin topples forward, almost pinning you beneath it!",
];

/// A shuffle-without-replacement pool over a fixed list of events.
#[derive(Debug, Clone)]
pub struct EventPool {
    events: &'static [&'static str],
    pool: Vec<&'static str>,
}

impl EventPool {
    /// Create an empty pool over `events`. The first draw shuffles.
    pub fn new(events: &'static [&'static str]) -> Self {
        Self {
            events,
            pool: Vec::new(),
        }
    }

    /// Draw the next event, reshuffling the full list if the pool is empty.
    pub fn draw(&mut self, rng: &mut StdRng) -> Option<&'static str> {
        if self.pool.is_empty() {
            self.pool = self.events.to_vec();
            self.pool.shuffle(rng);
        }
        self.pool.pop()
    }

    /// Events left before the next reshuffle.
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

/// Rolls for ambient events and major scares.
#[derive(Debug, Clone)]
pub struct EventSampler {
    ambient: EventPool,
    scare: EventPool,
    ambient_chance: u32,
    scare_chance: u32,
}

impl EventSampler {
    /// Create a sampler with the given percent chances (clamped to 0-100).
    pub fn new(ambient_chance: u32, scare_chance: u32) -> Self {
        Self {
            ambient: EventPool::new(AMBIENT_EVENTS),
            scare: EventPool::new(SCARE_EVENTS),
            ambient_chance: ambient_chance.min(100),
            scare_chance: scare_chance.min(100),
        }
    }

    /// Create a sampler with the chances from a game config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.ambient_chance, config.scare_chance)
    }

    /// Roll for an ambient event.
    pub fn roll_ambient(&mut self, rng: &mut StdRng) -> Option<&'static str> {
        if roll_percent(rng, self.ambient_chance) {
            self.ambient.draw(rng)
        } else {
            None
        }
    }

    /// Roll for a major scare.
    pub fn roll_scare(&mut self, rng: &mut StdRng) -> Option<&'static str> {
        if roll_percent(rng, self.scare_chance) {
            self.scare.draw(rng)
        } else {
            None
        }
    }
}

/// Roll 1-100 and succeed at or below `chance`.
pub(crate) fn roll_percent(rng: &mut StdRng, chance: u32) -> bool {
    let roll: u32 = rng.random_range(1..=100);
    roll <= chance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn pool_deals_every_event_once_per_cycle() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = EventPool::new(AMBIENT_EVENTS);

        for _ in 0..3 {
            let cycle: HashSet<&str> = (0..AMBIENT_EVENTS.len())
                .map(|_| pool.draw(&mut rng).unwrap())
                .collect();
            assert_eq!(cycle.len(), AMBIENT_EVENTS.len());
            assert_eq!(pool.remaining(), 0);
        }
    }

    #[test]
    fn empty_pool_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut pool = EventPool::new(&[]);
        assert_eq!(pool.draw(&mut rng), None);
    }

    #[test]
    fn forced_ambient_draws_visit_each_event() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sampler = EventSampler::new(100, 0);

        let drawn: Vec<&str> = (0..7)
            .map(|_| sampler.roll_ambient(&mut rng).unwrap())
            .collect();
        let unique: HashSet<&str> = drawn.iter().copied().collect();
        assert_eq!(unique.len(), 7);
        assert!(sampler.roll_scare(&mut rng).is_none());
    }

    #[test]
    fn zero_chance_never_fires() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut sampler = EventSampler::new(0, 0);
        for _ in 0..500 {
            assert!(sampler.roll_ambient(&mut rng).is_none());
            assert!(sampler.roll_scare(&mut rng).is_none());
        }
    }

    #[test]
    fn chances_are_clamped() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sampler = EventSampler::new(1000, 1000);
        for _ in 0..SCARE_EVENTS.len() {
            assert!(sampler.roll_scare(&mut rng).is_some());
        }
    }
}
