//! The color panel in the Color Puzzle Room.

use mansion_core::{Direction, Item, Landmark};
use tracing::info;

use super::{PendingPrompt, PuzzleContext, Resolution, narrate};
use crate::error::FictionResult;
use crate::state::{Color, Flag};

const PROMPT: &str = "Enter your color guess as four colors separated by spaces \
                      (e.g., red green blue yellow) or type back to stop:";
const SOLVED_DESCRIPTION: &str =
    "Room of colored light; behind where the panel was is now an open door.";

/// Approach the panel and ask for a guess.
pub fn begin(ctx: &mut PuzzleContext<'_>) -> FictionResult<Resolution> {
    if let Some(refusal) = refuse(ctx) {
        return Ok(Resolution::done(refusal));
    }
    Ok(Resolution::prompt(PROMPT, PendingPrompt::ColorCode))
}

/// Check a guess against the color code.
///
/// `back`, a wrong number of words, or a word that is not a panel color
/// ends the attempt without penalty.
pub fn submit<S: AsRef<str>>(ctx: &mut PuzzleContext<'_>, guess: &[S]) -> FictionResult<Resolution> {
    if let Some(refusal) = refuse(ctx) {
        return Ok(Resolution::done(refusal));
    }

    let words: Vec<String> = guess.iter().map(|w| w.as_ref().to_lowercase()).collect();
    if words.len() != 4 || words.iter().any(|w| w == "back") {
        return Ok(Resolution::done(
            "You step away from the panel or entered an invalid guess.",
        ));
    }
    let Some(colors) = words
        .iter()
        .map(|w| Color::parse(w))
        .collect::<Option<Vec<_>>>()
    else {
        return Ok(Resolution::done(
            "Invalid input. Use only red, green, blue, or yellow.",
        ));
    };

    if colors == ctx.state.color_code {
        ctx.state.flags.raise(Flag::ColorSolved);
        let color_room = ctx.graph.landmark(Landmark::ColorPuzzleRoom)?;
        let hallway = ctx.graph.landmark(Landmark::HallwayToGraveyard)?;
        ctx.graph.connect(color_room, Direction::Forward, hallway)?;
        ctx.graph.room_mut(color_room)?.description = SOLVED_DESCRIPTION.to_string();
        info!("color_code_solved");
        Ok(Resolution::done(narrate(&[
            "Correct! The door opens.".to_string(),
            ctx.exits_here()?,
        ])))
    } else {
        let lost = ctx.penalize_guess();
        Ok(Resolution::done(narrate(&[
            format!("Incorrect! You lose {lost} steps."),
            ctx.exits_here()?,
        ])))
    }
}

fn refuse(ctx: &PuzzleContext<'_>) -> Option<&'static str> {
    if ctx.state.flags.is_raised(Flag::ColorSolved) {
        Some("The color room is already solved.")
    } else if ctx.state.flags.is_raised(Flag::ColorPuzzleUnlocked) {
        None
    } else if ctx.player.has_item(Item::BlueButton) {
        Some("The panel is missing a button.")
    } else {
        Some("You need the blue button to activate the panel.")
    }
}
