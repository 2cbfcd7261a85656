//! The Balloon Room: pop balloons until the secret room opens.

use mansion_core::{Direction, Item, Landmark};
use tracing::info;

use super::{PuzzleContext, narrate};
use crate::error::FictionResult;
use crate::events::roll_percent;
use crate::mansion::balloon_description;
use crate::state::Flag;

const BUTTON_DROPS: &str = "A blue button drops from a popped balloon!";
const OPENED_DESCRIPTION: &str =
    "Pieces of balloons scattered all over the floor. A secret entrance is now visible.";

/// Pop one balloon.
///
/// Every pop may drop the blue button, with a chance that grows by
/// `button_chance_step` percent per pop. Reaching `pop_threshold` opens the
/// secret room and hands over the button if it never dropped.
pub fn pop(ctx: &mut PuzzleContext<'_>) -> FictionResult<String> {
    if ctx.state.flags.is_raised(Flag::SecretRoomOpened) {
        return Ok(narrate(&["No more balloons to pop!".to_string(), ctx.exits_here()?]));
    }

    let balloon_room = ctx.graph.landmark(Landmark::BalloonRoom)?;
    ctx.state.balloon_pop_count += 1;
    ctx.state.balloons_left = ctx.state.balloons_left.saturating_sub(1);
    ctx.graph.room_mut(balloon_room)?.description = balloon_description(ctx.state.balloons_left);

    let mut lines = Vec::new();
    let chance = ctx
        .config
        .button_chance_step
        .saturating_mul(ctx.state.balloon_pop_count)
        .min(100);
    if !ctx.state.flags.is_raised(Flag::BlueButtonFound) && roll_percent(ctx.rng, chance) {
        drop_button(ctx)?;
        lines.push(BUTTON_DROPS.to_string());
    } else {
        lines.push("You pop a balloon... nothing happens.".to_string());
    }

    if ctx.state.balloon_pop_count >= ctx.config.pop_threshold
        && ctx.state.flags.raise(Flag::SecretRoomOpened)
    {
        let secret = ctx.graph.landmark(Landmark::SecretRoom)?;
        ctx.graph.connect(balloon_room, Direction::Left, secret)?;
        ctx.graph.room_mut(balloon_room)?.description = OPENED_DESCRIPTION.to_string();
        info!(pops = ctx.state.balloon_pop_count, "secret_room_opened");
        lines.push("All balloons popped! A secret room opens.".to_string());
        if !ctx.state.flags.is_raised(Flag::BlueButtonFound) {
            drop_button(ctx)?;
            lines.push(BUTTON_DROPS.to_string());
        }
    }

    lines.push(ctx.exits_here()?);
    Ok(narrate(&lines))
}

fn drop_button(ctx: &mut PuzzleContext<'_>) -> FictionResult<()> {
    ctx.state.flags.raise(Flag::BlueButtonFound);
    let balloon_room = ctx.graph.landmark(Landmark::BalloonRoom)?;
    ctx.graph.room_mut(balloon_room)?.items.push(Item::BlueButton);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::testing::Fixture;

    #[test]
    fn first_pop_updates_count_and_description() {
        let mut fx = Fixture::at(Landmark::BalloonRoom);
        pop(&mut fx.ctx()).unwrap();
        assert_eq!(fx.state.balloon_pop_count, 1);
        assert_eq!(fx.state.balloons_left, 9);
        assert!(
            fx.room(Landmark::BalloonRoom)
                .description
                .starts_with("9 red balloons")
        );
    }

    #[test]
    fn threshold_opens_secret_room_once() {
        let mut fx = Fixture::at(Landmark::BalloonRoom);
        for _ in 0..9 {
            pop(&mut fx.ctx()).unwrap();
            assert!(fx.room(Landmark::BalloonRoom).exit(Direction::Left).is_none());
        }

        let text = pop(&mut fx.ctx()).unwrap();
        assert!(text.contains("A secret room opens."));
        let secret = fx.graph.landmark(Landmark::SecretRoom).unwrap();
        let room = fx.room(Landmark::BalloonRoom);
        assert_eq!(room.exit(Direction::Left), Some(secret));
        assert_eq!(room.description, OPENED_DESCRIPTION);
        assert!(fx.state.flags.is_raised(Flag::SecretRoomOpened));

        let again = pop(&mut fx.ctx()).unwrap();
        assert!(again.starts_with("No more balloons to pop!"));
        assert_eq!(fx.state.balloon_pop_count, 10);
        assert_eq!(fx.room(Landmark::BalloonRoom).exits().count(), 2);
    }

    #[test]
    fn button_is_granted_exactly_once() {
        let mut fx = Fixture::at(Landmark::BalloonRoom);
        for _ in 0..12 {
            pop(&mut fx.ctx()).unwrap();
        }
        let buttons = fx
            .room(Landmark::BalloonRoom)
            .items
            .iter()
            .filter(|&&item| item == Item::BlueButton)
            .count();
        assert_eq!(buttons, 1);
        assert!(fx.state.flags.is_raised(Flag::BlueButtonFound));
    }

    #[test]
    fn button_is_granted_on_threshold_without_luck() {
        let mut fx = Fixture::at(Landmark::BalloonRoom);
        fx.config.button_chance_step = 0;
        fx.config.pop_threshold = 3;
        for _ in 0..2 {
            pop(&mut fx.ctx()).unwrap();
        }
        assert!(!fx.state.flags.is_raised(Flag::BlueButtonFound));

        let text = pop(&mut fx.ctx()).unwrap();
        assert!(text.contains(BUTTON_DROPS));
        assert!(fx.room(Landmark::BalloonRoom).has_item(Item::BlueButton));
    }

    #[test]
    fn certain_drop_on_first_pop() {
        let mut fx = Fixture::at(Landmark::BalloonRoom);
        fx.config.button_chance_step = 100;
        let text = pop(&mut fx.ctx()).unwrap();
        assert!(text.starts_with(BUTTON_DROPS));
        assert!(fx.state.flags.is_raised(Flag::BlueButtonFound));
    }
}
