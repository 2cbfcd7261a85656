//! The Portrait Room vault, opened with the lever.

use mansion_core::{Item, Landmark};
use tracing::info;

use super::PuzzleContext;
use crate::error::FictionResult;
use crate::state::Flag;

const OPEN_DESCRIPTION: &str =
    "This room is surrounded by paintings of a family of clowns. Now with an open vault.";

/// Fit the lever into the painting.
///
/// The lever is consumed and the dagger placed in the room only when the
/// vault actually opens.
pub fn open_vault(ctx: &mut PuzzleContext<'_>) -> FictionResult<String> {
    if ctx.state.flags.is_raised(Flag::DaggerUnlocked) {
        return Ok("The vault is already open.".to_string());
    }
    if !ctx.player.has_item(Item::Lever) {
        return Ok("There is a slot for something... maybe a lever?".to_string());
    }

    ctx.state.flags.raise(Flag::DaggerUnlocked);
    ctx.player.remove_item(Item::Lever);
    let portrait = ctx.graph.landmark(Landmark::PortraitRoom)?;
    let room = ctx.graph.room_mut(portrait)?;
    room.description = OPEN_DESCRIPTION.to_string();
    room.items.push(Item::Dagger);
    info!("vault_opened");

    Ok(
        "You place the lever into the painting and pull it. \
         A vault opens, revealing a ceremonial dagger!"
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::testing::Fixture;

    #[test]
    fn lever_opens_vault() {
        let mut fx = Fixture::at(Landmark::PortraitRoom);
        fx.player.add_item(Item::Lever);

        let text = open_vault(&mut fx.ctx()).unwrap();
        assert!(text.contains("revealing a ceremonial dagger"));
        assert!(!fx.player.has_item(Item::Lever));
        let room = fx.room(Landmark::PortraitRoom);
        assert!(room.has_item(Item::Dagger));
        assert_eq!(room.description, OPEN_DESCRIPTION);
    }

    #[test]
    fn no_lever_no_dagger() {
        let mut fx = Fixture::at(Landmark::PortraitRoom);
        let text = open_vault(&mut fx.ctx()).unwrap();
        assert_eq!(text, "There is a slot for something... maybe a lever?");
        assert!(!fx.room(Landmark::PortraitRoom).has_item(Item::Dagger));
        assert!(!fx.state.flags.is_raised(Flag::DaggerUnlocked));
    }

    #[test]
    fn vault_opens_once() {
        let mut fx = Fixture::at(Landmark::PortraitRoom);
        fx.player.add_item(Item::Lever);
        open_vault(&mut fx.ctx()).unwrap();
        fx.player.add_item(Item::Lever);

        assert_eq!(
            open_vault(&mut fx.ctx()).unwrap(),
            "The vault is already open."
        );
        assert!(fx.player.has_item(Item::Lever));
        assert_eq!(fx.room(Landmark::PortraitRoom).items, vec![Item::Dagger]);
    }
}
