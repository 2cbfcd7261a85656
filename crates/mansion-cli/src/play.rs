//! The interactive game loop.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use tracing::info;

use mansion_fiction::{GameConfig, GameSession};

const RULE: &str = "---------------------------------------------------------";

/// Play on stdin/stdout until the player declines a restart or input ends.
pub fn run(config: GameConfig) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), stdout.lock())
}

/// Play against arbitrary input and output streams.
pub fn run_with<R: BufRead, W: Write>(
    config: GameConfig,
    mut input: R,
    mut out: W,
) -> Result<(), String> {
    let mut line = String::new();
    let mut games = 0u32;

    loop {
        games += 1;
        info!(game = games, "game_started");
        let mut session =
            GameSession::new(config.clone()).map_err(|e| format!("failed to start game: {e}"))?;
        let opening = session.start().map_err(|e| e.to_string())?;
        writeln!(out, "\n{opening}").map_err(|e| e.to_string())?;

        while !session.is_over() {
            if session.awaiting_answer() {
                write!(out, "> ").map_err(|e| e.to_string())?;
            } else {
                writeln!(
                    out,
                    "\n{} {}\n{RULE}",
                    "Steps remaining:".bold(),
                    session.player().steps
                )
                .map_err(|e| e.to_string())?;
                write!(out, "Enter your action: ").map_err(|e| e.to_string())?;
            }
            out.flush().map_err(|e| e.to_string())?;

            if !read_line(&mut input, &mut line)? {
                return Ok(());
            }
            let written = match session.process(line.trim()) {
                Ok(text) => writeln!(out, "\n{text}"),
                Err(e) => writeln!(out, "\n{}", e.to_string().yellow()),
            };
            written.map_err(|e| e.to_string())?;
        }

        write!(out, "\nWould you like to restart the game? (yes/no): ")
            .map_err(|e| e.to_string())?;
        out.flush().map_err(|e| e.to_string())?;
        let again = read_line(&mut input, &mut line)? && line.trim().eq_ignore_ascii_case("yes");
        writeln!(out, "{RULE}").map_err(|e| e.to_string())?;
        if !again {
            writeln!(out, "Thanks for playing. The circus fades into memory...")
                .map_err(|e| e.to_string())?;
            return Ok(());
        }
    }
}

/// Read one line into `buf`. Returns `false` at end of input.
fn read_line<R: BufRead>(input: &mut R, buf: &mut String) -> Result<bool, String> {
    buf.clear();
    let read = input.read_line(buf).map_err(|e| e.to_string())?;
    Ok(read > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(config: GameConfig, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_with(config, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn quiet() -> GameConfig {
        GameConfig::default()
            .with_seed(11)
            .with_event_chances(0, 0)
    }

    #[test]
    fn quit_then_decline() {
        let out = play(quiet(), "quit\nno\n");
        assert!(out.contains("You enter the Starting Room."));
        assert!(out.contains("easy way out"));
        assert!(out.ends_with("Thanks for playing. The circus fades into memory...\n"));
    }

    #[test]
    fn restart_starts_a_fresh_game() {
        let out = play(quiet(), "forward\nquit\nyes\nquit\nno\n");
        assert_eq!(out.matches("You enter the Starting Room.").count(), 2);
        assert_eq!(out.matches("Steps remaining: 50").count(), 2);
    }

    #[test]
    fn eof_mid_game_is_clean() {
        let out = play(quiet(), "forward\n");
        assert!(out.contains("Steps remaining: 49"));
        assert!(!out.contains("restart"));
    }

    #[test]
    fn errors_do_not_end_the_game() {
        let out = play(quiet(), "juggle\nquit\nno\n");
        assert!(out.contains("Unknown command 'juggle'"));
        assert!(out.contains("easy way out"));
    }
}
