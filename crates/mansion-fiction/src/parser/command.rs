//! Command parsing for player input.

use mansion_core::Direction;

use crate::puzzle::Puzzle;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Move through an exit.
    Move {
        /// The direction to move.
        direction: Direction,
    },
    /// Go somewhere that is not a direction.
    Go {
        /// The unrecognised target.
        target: String,
    },
    /// Look around the current room.
    Look,
    /// Take an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Use an item.
    Use {
        /// The item name.
        item: String,
    },
    /// Attempt the puzzle in the current room.
    Solve {
        /// The puzzle named by the player, if any.
        topic: Option<Puzzle>,
        /// An answer given on the same line.
        answer: Vec<String>,
    },
    /// Pop a balloon.
    Pop,
    /// Lift the covered platter.
    Lift,
    /// List inventory.
    Inventory,
    /// Show help.
    Help,
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "walk", "head"];
const LOOK_VERBS: &[&str] = &["look", "l", "examine", "x", "search"];
const TAKE_VERBS: &[&str] = &["take", "get", "pick", "grab"];
const USE_VERBS: &[&str] = &["use", "apply"];
const SOLVE_VERBS: &[&str] = &["solve", "try", "attempt"];
const POP_VERBS: &[&str] = &["pop", "stab"];
const LIFT_VERBS: &[&str] = &["lift", "uncover"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i", "items"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit"];

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    // Check for bare direction
    if rest.is_empty() {
        if let Some(direction) = Direction::parse(&verb) {
            return Command::Move { direction };
        }
    }

    let verb = verb.as_str();
    if MOVE_VERBS.contains(&verb) {
        return parse_move(rest);
    }
    if LOOK_VERBS.contains(&verb) {
        return Command::Look;
    }
    if TAKE_VERBS.contains(&verb) {
        return parse_take(rest);
    }
    if USE_VERBS.contains(&verb) {
        return parse_use(rest);
    }
    if SOLVE_VERBS.contains(&verb) {
        return parse_solve(rest);
    }
    if POP_VERBS.contains(&verb) {
        return Command::Pop;
    }
    if LIFT_VERBS.contains(&verb) {
        return Command::Lift;
    }
    if INVENTORY_VERBS.contains(&verb) {
        return Command::Inventory;
    }
    if HELP_VERBS.contains(&verb) {
        return Command::Help;
    }
    if QUIT_VERBS.contains(&verb) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_move(rest: &[&str]) -> Command {
    if rest.is_empty() {
        return Command::Look;
    }

    // Skip "to" if present (go to the left)
    let words = if rest[0].eq_ignore_ascii_case("to") && rest.len() > 1 {
        &rest[1..]
    } else {
        rest
    };
    let target = words.join(" ");

    match Direction::parse(&target) {
        Some(direction) => Command::Move { direction },
        None => Command::Go { target },
    }
}

fn parse_take(rest: &[&str]) -> Command {
    // Skip "up" if present (pick up)
    let item_words = match rest.first() {
        Some(w) if w.eq_ignore_ascii_case("up") => &rest[1..],
        _ => rest,
    };

    if item_words.is_empty() {
        Command::Unknown {
            input: "take".to_string(),
        }
    } else {
        Command::Take {
            item: item_words.join(" "),
        }
    }
}

fn parse_use(rest: &[&str]) -> Command {
    if rest.is_empty() {
        return Command::Unknown {
            input: "use".to_string(),
        };
    }

    Command::Use {
        item: rest.join(" "),
    }
}

fn parse_solve(rest: &[&str]) -> Command {
    let topic = rest.first().and_then(|w| Puzzle::from_topic(w));
    let answer_words = if topic.is_some() { &rest[1..] } else { rest };

    Command::Solve {
        topic,
        answer: answer_words.iter().map(|w| w.to_lowercase()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_direction() {
        assert_eq!(
            parse_command("forward"),
            Command::Move {
                direction: Direction::Forward
            }
        );
        assert_eq!(
            parse_command("B"),
            Command::Move {
                direction: Direction::Back
            }
        );
    }

    #[test]
    fn parse_go_direction() {
        assert_eq!(
            parse_command("go forward"),
            Command::Move {
                direction: Direction::Forward
            }
        );
        assert_eq!(
            parse_command("  GO   Left "),
            Command::Move {
                direction: Direction::Left
            }
        );
        assert_eq!(
            parse_command("walk to the right"),
            Command::Go {
                target: "the right".to_string()
            }
        );
        assert_eq!(
            parse_command("walk to right"),
            Command::Move {
                direction: Direction::Right
            }
        );
    }

    #[test]
    fn parse_go_nowhere() {
        assert_eq!(
            parse_command("go upstairs"),
            Command::Go {
                target: "upstairs".to_string()
            }
        );
        assert_eq!(parse_command("go"), Command::Look);
    }

    #[test]
    fn parse_take() {
        assert_eq!(
            parse_command("take crowbar"),
            Command::Take {
                item: "crowbar".to_string()
            }
        );
        assert_eq!(
            parse_command("pick up the Color Note"),
            Command::Take {
                item: "the Color Note".to_string()
            }
        );
        assert_eq!(
            parse_command("take"),
            Command::Unknown {
                input: "take".to_string()
            }
        );
    }

    #[test]
    fn parse_use() {
        assert_eq!(
            parse_command("use blue button"),
            Command::Use {
                item: "blue button".to_string()
            }
        );
        assert_eq!(
            parse_command("use"),
            Command::Unknown {
                input: "use".to_string()
            }
        );
    }

    #[test]
    fn parse_solve() {
        assert_eq!(
            parse_command("solve"),
            Command::Solve {
                topic: None,
                answer: vec![]
            }
        );
        assert_eq!(
            parse_command("solve color Red green blue yellow"),
            Command::Solve {
                topic: Some(Puzzle::ColorLock),
                answer: vec![
                    "red".to_string(),
                    "green".to_string(),
                    "blue".to_string(),
                    "yellow".to_string()
                ]
            }
        );
        assert_eq!(
            parse_command("solve graveyard"),
            Command::Solve {
                topic: Some(Puzzle::GraveOrder),
                answer: vec![]
            }
        );
        assert_eq!(
            parse_command("solve oldest middle youngest"),
            Command::Solve {
                topic: None,
                answer: vec![
                    "oldest".to_string(),
                    "middle".to_string(),
                    "youngest".to_string()
                ]
            }
        );
    }

    #[test]
    fn parse_shortcuts() {
        assert_eq!(parse_command("pop balloon"), Command::Pop);
        assert_eq!(parse_command("lift"), Command::Lift);
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
        assert_eq!(
            parse_command("forward march"),
            Command::Unknown {
                input: "forward march".to_string()
            }
        );
    }

    #[test]
    fn empty_input_is_look() {
        assert_eq!(parse_command(""), Command::Look);
        assert_eq!(parse_command("   "), Command::Look);
    }
}
