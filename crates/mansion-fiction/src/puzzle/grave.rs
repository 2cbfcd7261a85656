//! The graveyard: activate the brothers' graves in the right order.

use mansion_core::{Item, Landmark};
use tracing::info;

use super::{PendingPrompt, PuzzleContext, Resolution, narrate};
use crate::error::FictionResult;
use crate::state::{Flag, Grave};

const INVALID: &str = "That's not a valid grave. Choose between Oldest, Middle, Youngest.";

/// Start activating graves.
pub fn begin(ctx: &mut PuzzleContext<'_>) -> FictionResult<Resolution> {
    if ctx.state.flags.is_raised(Flag::GraveSolved) {
        return Ok(Resolution::done("The graveyard is already solved."));
    }
    Ok(Resolution::prompt(
        narrate(&[
            "You see three graves with levers behind them: Oldest, Middle, Youngest.".to_string(),
            prompt_for(1),
        ]),
        PendingPrompt::GraveOrder { chosen: Vec::new() },
    ))
}

/// Activate the next grave.
pub fn choose(
    ctx: &mut PuzzleContext<'_>,
    mut chosen: Vec<Grave>,
    input: &str,
) -> FictionResult<Resolution> {
    if ctx.state.flags.is_raised(Flag::GraveSolved) {
        return Ok(Resolution::done("The graveyard is already solved."));
    }
    let input = input.trim();
    if input.eq_ignore_ascii_case("back") {
        return Ok(Resolution::done("You leave the graves for later."));
    }
    let Some(grave) = Grave::parse(input) else {
        return Ok(Resolution::done(INVALID));
    };

    chosen.push(grave);
    if chosen.len() < ctx.state.grave_order.len() {
        let next = prompt_for(chosen.len() + 1);
        return Ok(Resolution::prompt(next, PendingPrompt::GraveOrder { chosen }));
    }
    judge(ctx, &chosen)
}

/// Activate all three graves from one line.
pub fn submit_all<S: AsRef<str>>(
    ctx: &mut PuzzleContext<'_>,
    answer: &[S],
) -> FictionResult<Resolution> {
    let mut pending = begin(ctx)?;
    for word in answer {
        let Some(PendingPrompt::GraveOrder { chosen }) = pending.pending else {
            return Ok(pending);
        };
        pending = choose(ctx, chosen, word.as_ref())?;
    }
    if pending.pending.is_some() {
        return Ok(Resolution::done(INVALID));
    }
    Ok(pending)
}

/// Compare a complete activation order with the secret one.
pub fn judge(ctx: &mut PuzzleContext<'_>, chosen: &[Grave]) -> FictionResult<Resolution> {
    if chosen != ctx.state.grave_order.as_slice() {
        let lost = ctx.penalize_guess();
        return Ok(Resolution::done(narrate(&[
            format!("Wrong order! You lose {lost} steps."),
            ctx.exits_here()?,
        ])));
    }

    ctx.state.flags.raise(Flag::GraveSolved);
    let graveyard = ctx.graph.landmark(Landmark::Graveyard)?;
    let room = ctx.graph.room_mut(graveyard)?;
    if let Some(last) = chosen.last() {
        room.description = format!(
            "A clown skeleton is risen from the {} grave.",
            last.label().to_lowercase()
        );
    }
    room.items.push(Item::WheelHandle);
    info!("grave_order_solved");

    Ok(Resolution::done(narrate(&[
        "A clown skeleton rises holding a wheel handle.".to_string(),
        ctx.exits_here()?,
    ])))
}

fn prompt_for(n: usize) -> String {
    format!("Choose grave #{n} to activate or type back to leave it for later:")
}
