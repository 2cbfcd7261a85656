//! Terminal frontend for the circus mansion.

mod play;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mansion_fiction::GameConfig;

#[derive(Parser)]
#[command(
    name = "mansion",
    about = "Escape the circus mansion before your steps run out",
    version
)]
struct Cli {
    /// Fixed RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Override the starting step budget
    #[arg(long)]
    steps: Option<i32>,

    /// JSON file with game rules (missing fields keep their defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = load_config(cli.config.as_deref()).and_then(|mut config| {
        if let Some(seed) = cli.seed {
            config = config.with_seed(seed);
        }
        if let Some(steps) = cli.steps {
            config = config.with_steps(steps);
        }
        play::run(config)
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr so stdout carries only the story.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<GameConfig, String> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&text)
        .map_err(|e| format!("invalid config {}: {e}", path.display()))?;
    Ok(config.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(load_config(None).unwrap(), GameConfig::default());
    }

    #[test]
    fn loaded_config_is_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, r#"{ "pop_threshold": 0, "scare_chance": 250 }"#).unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.pop_threshold, 1);
        assert_eq!(config.scare_chance, 100);
        assert_eq!(config.starting_steps, 50);
    }
}
