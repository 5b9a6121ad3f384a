//! Subcommand implementations.
//!
//! Every command writes its result to the given writer so tests can capture
//! it; diagnostics go through `tracing` to stderr.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use canvas::driver::AnimationDriver;
use canvas::model::SceneConfig;
use canvas::scene::SidePose;
use serde::Serialize;
use share::{EXAMPLES, PresetMap, decode_state, encode_state, find_example, param_from_query, share_url};

use crate::cli::{Command, FileOrExample, PresetCommand, PresetSubcommand, SceneSource, SimulateArgs};
use crate::error::CliError;

pub fn run(command: Command, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Examples => list_examples(out),
        Command::Encode { source, base_url } => {
            let scene = resolve_file_or_example(&source)?;
            let line = match base_url {
                Some(base) => share_url(&base, &scene)?,
                None => encode_state(&scene)?,
            };
            writeln!(out, "{line}")?;
            Ok(())
        }
        Command::Decode { input } => {
            let scene = decode_input(&input)?;
            print_json(out, &scene)
        }
        Command::Simulate(args) => run_simulate(&args, out),
        Command::Preset(preset) => run_preset(preset, out),
    }
}

fn list_examples(out: &mut impl Write) -> Result<(), CliError> {
    for example in &EXAMPLES {
        writeln!(out, "{}", example.name)?;
    }
    Ok(())
}

// =============================================================
// Scene sources
// =============================================================

fn example_scene(name: &str) -> Result<SceneConfig, CliError> {
    let example = find_example(name).ok_or_else(|| CliError::UnknownExample(name.to_owned()))?;
    Ok(example.scene(&canvas::model::CommonParams::default()))
}

/// Read a scene JSON file. Missing `common` fields take their defaults.
pub fn read_scene_file(path: &Path) -> Result<SceneConfig, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Accept a bare share string, a `?p=...` query, or a full link.
pub fn decode_input(input: &str) -> Result<SceneConfig, CliError> {
    let input = input.trim();
    let param = if input.contains('?') || input.starts_with("p=") {
        param_from_query(input).ok_or_else(|| CliError::MissingParam(input.to_owned()))?
    } else {
        input.to_owned()
    };
    Ok(decode_state(&param)?)
}

fn resolve_file_or_example(source: &FileOrExample) -> Result<SceneConfig, CliError> {
    match (&source.example, &source.file) {
        (Some(name), _) => example_scene(name),
        (None, Some(path)) => read_scene_file(path),
        (None, None) => Ok(SceneConfig::default()),
    }
}

fn resolve_source(source: &SceneSource) -> Result<SceneConfig, CliError> {
    if let Some(name) = &source.example {
        return example_scene(name);
    }
    if let Some(path) = &source.file {
        return read_scene_file(path);
    }
    match &source.param {
        Some(param) => decode_input(param),
        None => Ok(SceneConfig::default()),
    }
}

fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

// =============================================================
// Simulation
// =============================================================

const SIDE_NAMES: [&str; 2] = ["left", "right"];

/// Joint positions of one drawn side, as `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseRecord {
    pub side: &'static str,
    pub origin: [f64; 2],
    pub hand: [f64; 2],
    pub poi: [f64; 2],
}

impl PoseRecord {
    fn new(side: &'static str, pose: &SidePose) -> Self {
        Self {
            side,
            origin: [pose.origin.x, pose.origin.y],
            hand: [pose.hand.x, pose.hand.y],
            poi: [pose.poi.x, pose.poi.y],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub frame: usize,
    pub t_ms: f64,
    /// Simulated time applied since the previous frame.
    pub dt: f64,
    pub sides: Vec<PoseRecord>,
}

/// Drive the same animation the canvas runs, one frame every `frame_ms`.
///
/// Frame 0 is the starting pose (`dt == 0`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn simulate(scene: &SceneConfig, frames: usize, frame_ms: f64) -> Vec<FrameRecord> {
    let mut driver = AnimationDriver::new();
    driver.start(scene, 0.0);
    (0..frames)
        .map(|frame| {
            let t_ms = frame as f64 * frame_ms;
            let dt = driver.advance_to(t_ms);
            let sides = driver.poses().iter().zip(SIDE_NAMES).map(|(pose, name)| PoseRecord::new(name, pose)).collect();
            FrameRecord { frame, t_ms, dt, sides }
        })
        .collect()
}

fn run_simulate(args: &SimulateArgs, out: &mut impl Write) -> Result<(), CliError> {
    let scene = resolve_source(&args.source)?;
    tracing::debug!(frames = args.frames, frame_ms = args.frame_ms, "simulating");
    for record in simulate(&scene, args.frames, args.frame_ms) {
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}

// =============================================================
// Presets
// =============================================================

/// Load the preset file. A missing file is an empty store.
pub fn load_store(path: &Path) -> Result<PresetMap, CliError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(PresetMap::parse(Some(&raw))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no preset file yet");
            Ok(PresetMap::new())
        }
        Err(source) => Err(CliError::Io { path: path.to_owned(), source }),
    }
}

pub fn save_store(path: &Path, map: &PresetMap) -> Result<(), CliError> {
    let json = map.to_json()?;
    fs::write(path, json).map_err(|source| CliError::Io { path: path.to_owned(), source })
}

fn run_preset(preset: PresetCommand, out: &mut impl Write) -> Result<(), CliError> {
    let store = preset.store.as_path();
    let mut map = load_store(store)?;
    match preset.command {
        PresetSubcommand::List => {
            for name in map.names_sorted() {
                writeln!(out, "{name}")?;
            }
        }
        PresetSubcommand::Save { name, source, overwrite } => {
            let scene = resolve_source(&source)?;
            let outcome = map.save(&name, scene, overwrite)?;
            save_store(store, &map)?;
            tracing::info!(path = %store.display(), name = name.trim(), "preset stored");
            writeln!(out, "{}", outcome.message())?;
        }
        PresetSubcommand::Load { name, share } => {
            let scene = map.load(&name)?;
            if share {
                writeln!(out, "{}", encode_state(scene)?)?;
            } else {
                print_json(out, scene)?;
            }
        }
        PresetSubcommand::Delete { name } => {
            let next = map.delete(&name)?;
            save_store(store, &map)?;
            tracing::info!(path = %store.display(), name = %name, next = next.as_deref().unwrap_or(""), "preset deleted");
            writeln!(out, "Deleted \"{name}\"")?;
        }
    }
    Ok(())
}
