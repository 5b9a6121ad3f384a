//! Command-line surface.

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "poitune", about = "Poi motion scenes: share strings, presets, and offline simulation")]
pub struct Cli {
    /// Log at DEBUG instead of INFO (stderr).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in examples.
    Examples,
    /// Print the share string (or link) for a scene.
    Encode {
        #[command(flatten)]
        source: FileOrExample,
        /// Page the link points at; prints a full URL instead of the bare string.
        #[arg(long, env = "POITUNE_BASE_URL")]
        base_url: Option<String>,
    },
    /// Print the scene JSON carried by a share string or link.
    Decode {
        /// Share string, `?p=...` query, or full URL.
        input: String,
    },
    /// Run the animation without a display and print joint positions as JSON lines.
    Simulate(SimulateArgs),
    /// Manage a preset file in the browser's storage format.
    Preset(PresetCommand),
}

/// A scene from a JSON file or the example catalog.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct FileOrExample {
    /// Example name, case-insensitive.
    #[arg(long)]
    pub example: Option<String>,
    /// Scene JSON file (`{"common", "left", "right"}`).
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// A scene from a JSON file, the example catalog, or a share string.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct SceneSource {
    #[arg(long)]
    pub example: Option<String>,
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Share string or link.
    #[arg(long)]
    pub param: Option<String>,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub source: SceneSource,
    #[arg(long, default_value_t = 60)]
    pub frames: usize,
    /// Wall-clock milliseconds between frames.
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    pub frame_ms: f64,
}

#[derive(Args, Debug)]
pub struct PresetCommand {
    /// Preset file; created on first save.
    #[arg(long, env = "POITUNE_PRESETS", default_value = "poitune-presets.json", global = true)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: PresetSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PresetSubcommand {
    /// Names in display order.
    List,
    Save {
        name: String,
        #[command(flatten)]
        source: SceneSource,
        /// Replace an existing preset of the same name.
        #[arg(long)]
        overwrite: bool,
    },
    /// Print a preset's scene JSON, or its share string with `--share`.
    Load {
        name: String,
        #[arg(long)]
        share: bool,
    },
    Delete {
        name: String,
    },
}
