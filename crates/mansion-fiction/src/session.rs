//! The game session and its command interpreter.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use mansion_core::{Direction, Item, Landmark, RoomGraph, RoomId};

use crate::config::GameConfig;
use crate::error::{FictionError, FictionResult};
use crate::events::EventSampler;
use crate::mansion::build_mansion;
use crate::parser::{Command, parse_command, suggest_direction, suggest_item};
use crate::player::PlayerState;
use crate::puzzle::{
    PendingPrompt, Puzzle, PuzzleContext, Resolution, balloon, color, grave, narrate, portrait,
};
use crate::state::{Flag, WorldState};

const COLLAPSE: &str =
    "The last echo of circus music fades... you collapse as the mansion claims another victim.";

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The clown is defeated.
    Win,
    /// The player ran out of steps or reached the clown unarmed.
    Loss,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting commands.
    Playing,
    /// The game reached an ending.
    Ended(Outcome),
    /// The player quit.
    Abandoned,
}

/// A single play-through of the mansion.
pub struct GameSession {
    graph: RoomGraph,
    state: WorldState,
    player: PlayerState,
    rng: StdRng,
    config: GameConfig,
    sampler: EventSampler,
    status: GameStatus,
    pending: Option<PendingPrompt>,
}

impl GameSession {
    /// Create a session with freshly drawn secrets.
    ///
    /// The RNG is seeded from `config.seed` when set, so a fixed seed
    /// replays the same secrets and the same random events.
    pub fn new(config: GameConfig) -> FictionResult<Self> {
        let config = config.normalized();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = WorldState::generate(&mut rng, config.pop_threshold);
        Self::assemble(config, state, rng)
    }

    /// Create a session around known secrets.
    pub fn with_world_state(config: GameConfig, state: WorldState) -> FictionResult<Self> {
        let config = config.normalized();
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        Self::assemble(config, state, rng)
    }

    fn assemble(config: GameConfig, state: WorldState, rng: StdRng) -> FictionResult<Self> {
        let graph = build_mansion(config.pop_threshold)?;
        let start = graph.landmark(Landmark::StartingRoom)?;
        Ok(Self {
            player: PlayerState::new(start, config.starting_steps),
            sampler: EventSampler::from_config(&config),
            graph,
            state,
            rng,
            config,
            status: GameStatus::Playing,
            pending: None,
        })
    }

    /// Enter the starting room and return the opening narration.
    ///
    /// A budget that is already spent ends the game here, before any input.
    pub fn start(&mut self) -> FictionResult<String> {
        let start = self.graph.landmark(Landmark::StartingRoom)?;
        let text = self.enter(start)?;
        Ok(self.after_turn(text))
    }

    /// Get the room graph.
    pub fn graph(&self) -> &RoomGraph {
        &self.graph
    }

    /// Get the world state.
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Get the player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get mutable player state.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Get the session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the session no longer accepts commands.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Whether the next line answers a puzzle prompt.
    pub fn awaiting_answer(&self) -> bool {
        self.pending.is_some()
    }

    /// Process a line of player input and return a response.
    pub fn process(&mut self, input: &str) -> FictionResult<String> {
        self.ensure_playing()?;
        if let Some(prompt) = self.pending.take() {
            let resolution = self.answer(prompt, input)?;
            let text = self.settle(resolution);
            return Ok(self.after_turn(text));
        }
        let command = parse_command(input);
        debug!(?command, "command_parsed");
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> FictionResult<String> {
        self.ensure_playing()?;
        self.pending = None;
        let text = match command {
            Command::Move { direction } => self.do_move(direction),
            Command::Go { target } => self.do_go(&target),
            Command::Look => self.do_look(),
            Command::Take { item } => self.do_take(&item),
            Command::Use { item } => self.do_use(&item),
            Command::Solve { topic, answer } => self.do_solve(topic, &answer),
            Command::Pop => self.do_pop(),
            Command::Lift => self.do_lift(),
            Command::Inventory => self.do_inventory(),
            Command::Help => self.do_help(),
            Command::Quit => {
                self.status = GameStatus::Abandoned;
                info!("game_abandoned");
                return Ok("The circus music fades as you take the easy way out...".to_string());
            }
            Command::Unknown { input } => Err(FictionError::UnknownCommand(input)),
        }?;
        Ok(self.after_turn(text))
    }

    /// Move the player into `room` and run its entry effects.
    ///
    /// No steps are spent here; movement pays before calling this.
    pub fn enter(&mut self, room: RoomId) -> FictionResult<String> {
        self.player.location = room;
        let first_visit = self.graph.room_mut(room)?.mark_visited();
        let name = self.graph.display_name(room)?.to_string();
        info!(room = %name, first_visit, steps = self.player.steps, "room_entered");

        let mut lines = vec![format!("You enter the {name}.")];
        match self.graph.landmark_of(room) {
            Some(Landmark::StartingRoom) => {
                lines.push(self.graph.room(room)?.description.clone());
                lines.push(format!(
                    "You hear a voice over the speakers, \"You have been selected to play my \
                     game, you are granted {} steps to find me. If you WIN you are set FREE! \
                     LOSE and you DIE!\"",
                    self.config.starting_steps
                ));
                lines.push("If stuck, scream for \"help\".".to_string());
                lines.push(
                    "Type go followed by a direction: forward, back, left or right.".to_string(),
                );
            }
            Some(Landmark::MainHall) => {
                lines.push(
                    "The speaker voice is heard again. \"Do not get lost or confused. \
                     'look' for clues.\""
                        .to_string(),
                );
            }
            Some(Landmark::SecretRoom) => {
                self.player.restore_steps(self.config.secret_room_bonus);
            }
            Some(Landmark::HallwayToClownGallery) if self.player.has_item(Item::ClownNose) => {
                lines.push(
                    "The clowns come alive and chase your red nose into the next room! \
                     You shut the door behind you but lose that path."
                        .to_string(),
                );
                let portrait = self.graph.landmark(Landmark::PortraitRoom)?;
                self.graph.disconnect(portrait, Direction::Right)?;
                lines.push(self.enter(portrait)?);
                return Ok(narrate(&lines));
            }
            Some(Landmark::RingmastersChamber) => {
                lines.push(self.final_resolution());
                return Ok(narrate(&lines));
            }
            _ => {}
        }
        lines.push(self.exits()?);
        Ok(narrate(&lines))
    }

    fn ensure_playing(&self) -> FictionResult<()> {
        if self.is_over() {
            return Err(FictionError::SessionOver);
        }
        Ok(())
    }

    fn after_turn(&mut self, text: String) -> String {
        if self.status == GameStatus::Playing && self.player.is_exhausted() {
            self.state.flags.raise(Flag::End);
            self.status = GameStatus::Ended(Outcome::Loss);
            info!(steps = self.player.steps, "steps_exhausted");
            return narrate(&[text, COLLAPSE.to_string()]);
        }
        text
    }

    fn final_resolution(&mut self) -> String {
        let outcome = match self.status {
            GameStatus::Ended(outcome) => outcome,
            _ => {
                let armed = self.player.has_item(Item::Dagger);
                let outcome = if armed && self.player.steps >= self.config.min_steps_to_win {
                    Outcome::Win
                } else {
                    Outcome::Loss
                };
                self.state.flags.raise(Flag::End);
                self.status = GameStatus::Ended(outcome);
                info!(?outcome, steps = self.player.steps, armed, "game_over");
                outcome
            }
        };
        match outcome {
            Outcome::Win => "You stab the evil clown and escape the mansion!".to_string(),
            Outcome::Loss => {
                "You made it but you are out of steps. You die while the clown laughs...".to_string()
            }
        }
    }

    fn exits(&self) -> FictionResult<String> {
        Ok(self.graph.describe_exits(self.player.location)?)
    }

    fn with_exits(&self, text: impl Into<String>) -> FictionResult<String> {
        Ok(narrate(&[text.into(), self.exits()?]))
    }

    fn here(&self) -> Option<Landmark> {
        self.graph.landmark_of(self.player.location)
    }

    fn puzzle_ctx(&mut self) -> PuzzleContext<'_> {
        PuzzleContext {
            graph: &mut self.graph,
            state: &mut self.state,
            player: &mut self.player,
            rng: &mut self.rng,
            config: &self.config,
        }
    }

    fn settle(&mut self, resolution: Resolution) -> String {
        self.pending = resolution.pending;
        resolution.text
    }

    fn answer(&mut self, prompt: PendingPrompt, input: &str) -> FictionResult<Resolution> {
        let mut ctx = self.puzzle_ctx();
        match prompt {
            PendingPrompt::ColorCode => {
                let words: Vec<&str> = input.split_whitespace().collect();
                color::submit(&mut ctx, &words)
            }
            PendingPrompt::GraveOrder { chosen } => grave::choose(&mut ctx, chosen, input),
        }
    }

    fn do_move(&mut self, direction: Direction) -> FictionResult<String> {
        let current = self.graph.room(self.player.location)?;
        match current.exit(direction) {
            Some(destination) => {
                self.player.spend_steps(1);
                self.enter(destination)
            }
            None => self.with_exits("You can't go that way."),
        }
    }

    fn do_go(&mut self, target: &str) -> FictionResult<String> {
        match suggest_direction(target) {
            Some(direction) => self.with_exits(format!(
                "You can't go that way. Did you mean '{direction}'?"
            )),
            None => self.with_exits("You can't go that way."),
        }
    }

    fn do_look(&mut self) -> FictionResult<String> {
        let room = self.graph.room(self.player.location)?;
        let mut lines = vec![room.description.clone()];
        if !room.items.is_empty() {
            lines.push(format!("You see: {}", join_items(&room.items)));
        }
        lines.push(self.exits()?);

        if let Some(event) = self.sampler.roll_ambient(&mut self.rng) {
            lines.push(event.to_string());
        }
        if let Some(event) = self.sampler.roll_scare(&mut self.rng) {
            let penalty = self.config.scare_penalty;
            self.player.spend_steps(penalty);
            lines.push(event.to_string());
            lines.push(format!(
                "The fear rattles you... you stumble and lose {penalty} step{}.",
                if penalty == 1 { "" } else { "s" }
            ));
        }
        Ok(narrate(&lines))
    }

    fn do_take(&mut self, name: &str) -> FictionResult<String> {
        let location = self.player.location;
        let Some(item) = Item::parse(name) else {
            let here = self.graph.room(location)?.items.clone();
            return self.with_exits(not_found("That item isn't here.", name, here));
        };
        if !self.graph.room_mut(location)?.take_item(item) {
            return self.with_exits("That item isn't here.");
        }
        self.player.add_item(item);
        info!(%item, "item_taken");

        let mut lines = vec![format!("You took the {item}.")];
        match item {
            Item::Lever => lines.push(
                "The lever feels unnaturally heavy, as if it resists being carried.".to_string(),
            ),
            Item::Crowbar => {
                lines.push(
                    "The crowbar is rusted, but sturdy enough to smash through glass or wood."
                        .to_string(),
                );
                lines.push(
                    "Type INVENTORY to see the inventory. Type USE followed by an item name to use it."
                        .to_string(),
                );
            }
            Item::ColorNote => {
                let room = self.graph.room_mut(location)?;
                room.items.push(Item::ClownNose);
                room.description =
                    "Clown statues now all facing the rubble of their red nose leader.".to_string();
                lines.push(
                    "The clown statue lunges towards you and breaks on the floor. \
                     In the rubble lies the 'clown nose'."
                        .to_string(),
                );
            }
            Item::ClownNose => lines.push(
                "You slip the clown nose on. It squeaks. You feel ridiculous.".to_string(),
            ),
            Item::Dagger => lines.push(
                "The ceremonial dagger hums faintly, as though eager for blood.".to_string(),
            ),
            Item::BlueButton | Item::WheelHandle | Item::GraveyardNote => {}
        }
        lines.push(self.exits()?);
        Ok(narrate(&lines))
    }

    fn do_use(&mut self, name: &str) -> FictionResult<String> {
        const MISSING: &str = "You don't have that item.";
        let Some(item) = Item::parse(name) else {
            let carried = self.player.inventory.clone();
            return self.with_exits(not_found(MISSING, name, carried));
        };
        if !self.player.has_item(item) {
            return self.with_exits(MISSING);
        }
        debug!(%item, here = ?self.here(), "item_used");

        let location = self.player.location;
        match (item, self.here()) {
            (Item::GraveyardNote, _) => self.with_exits(format!(
                "The note reads: The order of the graves is {}.",
                self.state.grave_order_text()
            )),
            (Item::ColorNote, _) => self.with_exits(format!(
                "The note shows a sequence of colors scribbled in crayon: {}",
                self.state.color_code_text()
            )),
            (Item::Crowbar, Some(Landmark::MirrorRoom)) => {
                let trippy = self.graph.landmark(Landmark::TrippyHallway)?;
                self.graph.connect(location, Direction::Forward, trippy)?;
                self.graph.room_mut(location)?.description =
                    "Shattered glass covers the floor with a door now visible across the room."
                        .to_string();
                self.player.remove_item(Item::Crowbar);
                self.with_exits(
                    "You smash the mirrors with the crowbar. Shards scatter everywhere, \
                     revealing a hidden exit!\n\nSadly the crowbar broke on impact.",
                )
            }
            (Item::Crowbar, _) => {
                self.with_exits("You swing the crowbar around, but nothing useful happens.")
            }
            (Item::Lever, Some(Landmark::PortraitRoom)) => {
                let text = portrait::open_vault(&mut self.puzzle_ctx())?;
                self.with_exits(text)
            }
            (Item::Lever, _) => self.with_exits("There's nowhere to use the lever here."),
            (Item::Dagger, Some(Landmark::BalloonRoom)) => balloon::pop(&mut self.puzzle_ctx()),
            (Item::Dagger, _) => {
                self.with_exits("You grip the dagger tightly. Nothing here deserves it yet.")
            }
            (Item::BlueButton, Some(Landmark::ColorPuzzleRoom)) => {
                self.player.remove_item(Item::BlueButton);
                self.state.flags.raise(Flag::ColorPuzzleUnlocked);
                self.graph.room_mut(location)?.description =
                    "A room with lights flashing different colors. Across it is a panel \
                     awaiting the correct code."
                        .to_string();
                let resolution = color::begin(&mut self.puzzle_ctx())?;
                let prompt = self.settle(resolution);
                Ok(narrate(&[
                    "You press the blue button into the panel. The puzzle activates!".to_string(),
                    prompt,
                ]))
            }
            (Item::BlueButton, _) => self.with_exits("The button does nothing here."),
            (Item::WheelHandle, Some(Landmark::CircusRoom)) => {
                let final_hallway = self.graph.landmark(Landmark::FinalHallway)?;
                self.graph.connect(location, Direction::Left, final_hallway)?;
                self.graph.room_mut(location)?.description =
                    "Trapeze artists swing above. The door now remains open.".to_string();
                self.player.remove_item(Item::WheelHandle);
                self.with_exits(
                    "You attach the wheel handle to the mechanism and turn it. \
                     The door creaks open!",
                )
            }
            (Item::WheelHandle, _) => {
                self.with_exits("The wheel handle doesn't fit anywhere here.")
            }
            (Item::ClownNose, _) => self.with_exits("You can't use that here."),
        }
    }

    fn do_solve(&mut self, topic: Option<Puzzle>, answer: &[String]) -> FictionResult<String> {
        let here = self.here().and_then(Puzzle::at);
        let puzzle = match (here, topic) {
            (Some(here), None) => here,
            (Some(here), Some(topic)) if here == topic => here,
            _ => return self.with_exits("You can't do that here."),
        };

        match puzzle {
            Puzzle::ColorLock => {
                let mut ctx = self.puzzle_ctx();
                let resolution = if answer.is_empty() {
                    color::begin(&mut ctx)?
                } else {
                    color::submit(&mut ctx, answer)?
                };
                Ok(self.settle(resolution))
            }
            Puzzle::GraveOrder => {
                let mut ctx = self.puzzle_ctx();
                let resolution = if answer.is_empty() {
                    grave::begin(&mut ctx)?
                } else {
                    grave::submit_all(&mut ctx, answer)?
                };
                Ok(self.settle(resolution))
            }
            Puzzle::Balloons => self.do_pop(),
            Puzzle::PortraitVault => {
                let text = portrait::open_vault(&mut self.puzzle_ctx())?;
                self.with_exits(text)
            }
        }
    }

    fn do_pop(&mut self) -> FictionResult<String> {
        if self.here() != Some(Landmark::BalloonRoom) {
            return self.with_exits("There is nothing to pop here.");
        }
        if !self.player.has_item(Item::Dagger) {
            return self.with_exits("You have nothing sharp enough to pop them.");
        }
        balloon::pop(&mut self.puzzle_ctx())
    }

    fn do_lift(&mut self) -> FictionResult<String> {
        if self.here() != Some(Landmark::DiningHall) {
            return self.with_exits("There is nothing here to lift.");
        }
        if !self.state.flags.raise(Flag::Lifted) {
            return self.with_exits("The platter is already lifted.");
        }
        let reveal = "A clown head lies on the dining hall table, with a note in its mouth \
                      reading: 'Pop pop pop all the balloons!'";
        self.graph.room_mut(self.player.location)?.description = reveal.to_string();
        self.with_exits(reveal)
    }

    fn do_inventory(&self) -> FictionResult<String> {
        if self.player.inventory.is_empty() {
            self.with_exits("Inventory: Empty")
        } else {
            self.with_exits(format!("Inventory: {}", join_items(&self.player.inventory)))
        }
    }

    fn do_help(&self) -> FictionResult<String> {
        self.with_exits(
            "Available commands:\n\
             \x20 go [direction]   - Move to another room (forward, left, right, back)\n\
             \x20 take [item]      - Pick up an item in the room\n\
             \x20 use [item]       - Use an item (notes remind you, tools solve puzzles)\n\
             \x20 look             - Look around the room for details\n\
             \x20 inventory        - Check what you're carrying\n\
             \x20 solve [answer]   - Attempt the puzzle in this room\n\
             \x20 pop              - Pop a balloon, if you have something sharp\n\
             \x20 lift             - Lift whatever is covered\n\
             \x20 quit             - End the game\n\n\
             Tip: Not everything is useful... but everything adds to the story.",
        )
    }
}

fn join_items(items: &[Item]) -> String {
    items
        .iter()
        .map(Item::name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn not_found(message: &str, input: &str, candidates: Vec<Item>) -> String {
    match suggest_item(input, candidates) {
        Some(item) => format!("{message} Did you mean '{item}'?"),
        None => message.to_string(),
    }
}
