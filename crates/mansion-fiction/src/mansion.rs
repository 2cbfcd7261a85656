//! Construction of the mansion's room graph.
//!
//! The layout is fixed. Puzzle-gated exits (Mirror Room forward, Balloon
//! Room left, Color Puzzle Room forward, Circus Room left) are absent here
//! and get connected by the resolvers.

use mansion_core::{Direction, Item, Landmark, Room, RoomGraph};

use crate::error::FictionResult;

/// The Balloon Room description for a given number of balloons.
pub fn balloon_description(balloons: u32) -> String {
    format!(
        "{balloons} red balloons float eerily, maybe you will float too... \
         If only you had something to pop them."
    )
}

/// Build the mansion with `balloons` balloons in the Balloon Room.
pub fn build_mansion(balloons: u32) -> FictionResult<RoomGraph> {
    use Direction::{Back, Forward, Left, Right};

    let mut g = RoomGraph::new();

    // Core rooms
    let start = g.add_landmark(
        Landmark::StartingRoom,
        Room::new(
            "White Door",
            "Starting Room",
            "You awaken in darkness. Circus music echoes.",
        ),
    )?;
    let main_hall = g.add_landmark(
        Landmark::MainHall,
        Room::new(
            "Green Door",
            "Main Hall",
            "A grand hallway with two branching paths.",
        ),
    )?;
    let storage = g.add_landmark(
        Landmark::StorageRoom,
        Room::new(
            "Red Door",
            "Storage Room",
            "Dusty shelves and a locked cabinet.",
        )
        .with_item(Item::Crowbar),
    )?;
    let mirror = g.add_landmark(
        Landmark::MirrorRoom,
        Room::new(
            "Blue Door",
            "Mirror Room",
            "Distorted reflections surround you. If only you had a way to break free...",
        ),
    )?;
    let trippy = g.add_landmark(
        Landmark::TrippyHallway,
        Room::new(
            "Purple Door",
            "Trippy Hallway",
            "The hallway feels smaller the further you go. A dusty bench sits halfway down.",
        )
        .with_item(Item::Lever),
    )?;
    let dining = g.add_landmark(
        Landmark::DiningHall,
        Room::new(
            "Orange Door",
            "Dining Hall",
            "You see a fancy dinner table with a giant covered platter. \
             Are you curious enough to lift it?",
        ),
    )?;

    // Dining Hall branches
    let to_balloons = g.add_landmark(
        Landmark::HallwayToBalloonRoom,
        Room::new(
            "Tan Door",
            "Hallway to Balloon Room",
            "A narrow corridor with faded posters for an old circus.",
        ),
    )?;
    let balloon = g.add_landmark(
        Landmark::BalloonRoom,
        Room::new("Pink Door", "Balloon Room", balloon_description(balloons)),
    )?;
    let secret = g.add_landmark(
        Landmark::SecretRoom,
        Room::new(
            "Hidden Door",
            "Secret Room",
            "A hidden chamber with a freshly inked note. You strangely feel refreshed.",
        )
        .with_item(Item::GraveyardNote),
    )?;
    let stairway = g.add_landmark(
        Landmark::StairwayToPortraitRoom,
        Room::new(
            "Brown Door",
            "Stairway to Portrait Room",
            "A spiraling stairway with creaky steps.",
        ),
    )?;
    let portrait = g.add_landmark(
        Landmark::PortraitRoom,
        Room::new(
            "Gray Door",
            "Portrait Room",
            "This room is surrounded by paintings of a family of clowns. \
             You notice one has a slot maybe something could fit into it.",
        ),
    )?;
    let to_gallery = g.add_landmark(
        Landmark::HallwayToClownGallery,
        Room::new(
            "Dark Gray Door",
            "Hallway to Clown Gallery",
            "Statues line the walls, watching menacingly. \
             You feel like they might move when you're not watching.",
        ),
    )?;
    let gallery = g.add_landmark(
        Landmark::ClownGallery,
        Room::new(
            "White Door",
            "Clown Gallery",
            "Statues stare silently. One has a red nose, \
             you barely notice a small piece of paper stuck under it.",
        )
        .with_item(Item::ColorNote),
    )?;

    // Puzzle path
    let color = g.add_landmark(
        Landmark::ColorPuzzleRoom,
        Room::new(
            "Yellow Door",
            "Color Puzzle Room",
            "A room with lights flashing different colors. Across it is a panel \
             missing a button. Currently only red, green, and yellow are on the panel.",
        ),
    )?;
    let to_graveyard = g.add_landmark(
        Landmark::HallwayToGraveyard,
        Room::new(
            "Dark Door",
            "Hallway to Graveyard",
            "Cold air flows through this dim passage.",
        ),
    )?;
    let graveyard = g.add_landmark(
        Landmark::Graveyard,
        Room::new(
            "Black Door",
            "Graveyard",
            "The graves of three brothers stand in silence. Only the year of death \
             is seen: 1857, 1889, and 1905. There is a lever on the back of each grave.",
        ),
    )?;
    let circus = g.add_landmark(
        Landmark::CircusRoom,
        Room::new(
            "Gold Door",
            "Circus Room",
            "Trapeze artists swing above. To your left you can see a door missing its handle.",
        ),
    )?;
    let final_hallway = g.add_landmark(
        Landmark::FinalHallway,
        Room::new("Silver Door", "Final Hallway", "The last stretch..."),
    )?;
    let chamber = g.add_landmark(
        Landmark::RingmastersChamber,
        Room::new(
            "Crimson Door",
            "Ringmaster's Chamber",
            "The evil clown awaits.",
        ),
    )?;

    // Connections
    let edges = [
        (start, Forward, main_hall),
        (main_hall, Left, storage),
        (main_hall, Right, mirror),
        (storage, Back, main_hall),
        (mirror, Back, main_hall),
        (trippy, Back, mirror),
        (trippy, Forward, dining),
        (dining, Back, trippy),
        (dining, Left, to_balloons),
        (dining, Right, stairway),
        (dining, Forward, color),
        (to_balloons, Back, dining),
        (to_balloons, Right, balloon),
        (balloon, Back, to_balloons),
        (secret, Back, balloon),
        (stairway, Back, dining),
        (stairway, Forward, portrait),
        (portrait, Back, stairway),
        (portrait, Right, to_gallery),
        (to_gallery, Back, portrait),
        (to_gallery, Left, gallery),
        (gallery, Back, to_gallery),
        (color, Back, dining),
        (to_graveyard, Back, color),
        (to_graveyard, Forward, graveyard),
        (graveyard, Back, to_graveyard),
        (graveyard, Right, circus),
        (circus, Back, graveyard),
        (final_hallway, Back, circus),
        (final_hallway, Forward, chamber),
    ];
    for (from, direction, to) in edges {
        g.connect(from, direction, to)?;
    }

    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_landmark_is_registered() {
        let graph = build_mansion(10).unwrap();
        assert_eq!(graph.len(), 19);
        for (id, room) in graph.rooms() {
            let landmark = room.landmark().unwrap();
            assert_eq!(graph.landmark(landmark).unwrap(), id);
        }
    }

    #[test]
    fn nothing_is_visited_at_start() {
        let graph = build_mansion(10).unwrap();
        assert!(graph.rooms().all(|(_, room)| !room.is_visited()));
    }

    #[test]
    fn puzzle_exits_start_closed() {
        let graph = build_mansion(10).unwrap();
        let closed = [
            (Landmark::MirrorRoom, Direction::Forward),
            (Landmark::BalloonRoom, Direction::Left),
            (Landmark::ColorPuzzleRoom, Direction::Forward),
            (Landmark::CircusRoom, Direction::Left),
        ];
        for (landmark, direction) in closed {
            let room = graph.room(graph.landmark(landmark).unwrap()).unwrap();
            assert!(room.exit(direction).is_none(), "{landmark:?} {direction}");
        }
    }

    #[test]
    fn starting_exits() {
        let graph = build_mansion(10).unwrap();
        let start = graph.landmark(Landmark::StartingRoom).unwrap();
        assert_eq!(
            graph.describe_exits(start).unwrap(),
            "Ahead is the Green Door."
        );
        let dining = graph.landmark(Landmark::DiningHall).unwrap();
        assert_eq!(
            graph.describe_exits(dining).unwrap(),
            "Ahead is the Yellow Door. Behind is the Purple Door. \
             To the left is the Tan Door. To the right is the Brown Door."
        );
    }

    #[test]
    fn balloon_count_in_description() {
        let graph = build_mansion(20).unwrap();
        let balloon = graph.landmark(Landmark::BalloonRoom).unwrap();
        assert!(
            graph
                .room(balloon)
                .unwrap()
                .description
                .starts_with("20 red balloons")
        );
    }
}
