#![allow(clippy::float_cmp)]

use share::SaveOutcome;

use super::*;

fn scene(scale: f64) -> SceneConfig {
    let mut scene = SceneConfig::default();
    scene.common.scale = scale;
    scene
}

fn state_with(names: &[&str]) -> PresetsState {
    let mut map = PresetMap::new();
    for name in names {
        map.save(name, scene(1.0), false).unwrap();
    }
    PresetsState::from_map(map)
}

#[test]
fn from_map_selects_first_inserted() {
    let state = state_with(&["zeta", "Alpha"]);
    assert_eq!(state.selected.as_deref(), Some("zeta"));
    assert!(state.name_draft.is_empty());
}

#[test]
fn from_empty_map_selects_nothing() {
    let state = PresetsState::from_map(PresetMap::new());
    assert_eq!(state.selected, None);
}

#[test]
fn save_selects_trimmed_name() {
    let mut state = PresetsState::default();
    state.name_draft = "  spin  ".to_owned();
    assert_eq!(state.save(scene(2.0), false), Ok(SaveOutcome::Saved.message()));
    assert_eq!(state.selected.as_deref(), Some("spin"));
    assert!(state.map.contains("spin"));
}

#[test]
fn save_existing_requires_overwrite() {
    let mut state = state_with(&["a"]);
    state.name_draft = "a".to_owned();
    let err = state.save(scene(2.0), false).unwrap_err();
    assert_eq!(err.to_string(), "Name exists (use Overwrite)");
    assert_eq!(state.save(scene(2.0), true), Ok("Preset overwritten"));
    assert_eq!(state.map.load("a").unwrap().common.scale, 2.0);
}

#[test]
fn save_blank_name_fails() {
    let mut state = PresetsState::default();
    state.name_draft = "   ".to_owned();
    assert_eq!(state.save(scene(1.0), false).unwrap_err().to_string(), "Enter a preset name");
    assert!(state.map.is_empty());
    assert_eq!(state.selected, None);
}

#[test]
fn load_selected_returns_scene() {
    let mut state = state_with(&["a"]);
    state.map.save("b", scene(3.0), false).unwrap();
    state.selected = Some("b".to_owned());
    let (name, loaded) = state.load_selected().unwrap();
    assert_eq!(name, "b");
    assert_eq!(loaded.common.scale, 3.0);
}

#[test]
fn load_without_selection_fails() {
    let state = PresetsState::default();
    assert!(matches!(state.load_selected(), Err(PresetError::NotFound(_))));
}

#[test]
fn delete_moves_selection_to_first_remaining() {
    let mut state = state_with(&["c", "a", "b"]);
    state.selected = Some("c".to_owned());
    assert_eq!(state.delete_selected().unwrap(), "c");
    assert_eq!(state.selected.as_deref(), Some("a"));
    state.delete_selected().unwrap();
    state.delete_selected().unwrap();
    assert_eq!(state.selected, None);
    assert!(state.delete_selected().is_err());
}
