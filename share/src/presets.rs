//! Named preset store.
//!
//! Serialized as one JSON object (name → scene) under [`PRESETS_STORAGE_KEY`].
//! Entries keep insertion order; display order is [`PresetMap::names_sorted`].

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use canvas::model::SceneConfig;
use serde_json::{Map, Value};

/// localStorage key, shared with the web app so existing presets carry over.
pub const PRESETS_STORAGE_KEY: &str = "poitune-presets-v1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresetError {
    #[error("Enter a preset name")]
    EmptyName,
    #[error("Name exists (use Overwrite)")]
    NameExists(String),
    #[error("no preset named \"{0}\"")]
    NotFound(String),
}

/// What [`PresetMap::save`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Overwritten,
}

impl SaveOutcome {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Saved => "Preset saved",
            Self::Overwritten => "Preset overwritten",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetMap {
    entries: Vec<(String, SceneConfig)>,
}

impl PresetMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a stored map. Missing or malformed input yields an empty map;
    /// individual entries that are not valid scenes are skipped.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let object = match serde_json::from_str::<Map<String, Value>>(raw) {
            Ok(object) => object,
            Err(e) => {
                log::warn!("ignoring unreadable presets: {e}");
                return Self::default();
            }
        };
        let entries = object
            .into_iter()
            .filter_map(|(name, value)| match serde_json::from_value::<SceneConfig>(value) {
                Ok(scene) => Some((name, scene)),
                Err(e) => {
                    log::warn!("skipping preset \"{name}\": {e}");
                    None
                }
            })
            .collect();
        Self { entries }
    }

    /// Serialize for storage.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut object = Map::new();
        for (name, scene) in &self.entries {
            object.insert(name.clone(), serde_json::to_value(scene)?);
        }
        serde_json::to_string(&object)
    }

    /// Store `scene` under `name` (trimmed).
    ///
    /// An overwrite keeps the entry's original position.
    ///
    /// # Errors
    ///
    /// [`PresetError::EmptyName`] for a blank name, [`PresetError::NameExists`]
    /// if the name is taken and `overwrite` is false.
    pub fn save(&mut self, name: &str, scene: SceneConfig, overwrite: bool) -> Result<SaveOutcome, PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::EmptyName);
        }
        match self.position(name) {
            Some(_) if !overwrite => Err(PresetError::NameExists(name.to_owned())),
            Some(idx) => {
                self.entries[idx].1 = scene;
                Ok(SaveOutcome::Overwritten)
            }
            None => {
                self.entries.push((name.to_owned(), scene));
                Ok(if overwrite { SaveOutcome::Overwritten } else { SaveOutcome::Saved })
            }
        }
    }

    /// # Errors
    ///
    /// [`PresetError::NotFound`] if there is no such preset.
    pub fn load(&self, name: &str) -> Result<&SceneConfig, PresetError> {
        self.position(name)
            .map(|idx| &self.entries[idx].1)
            .ok_or_else(|| PresetError::NotFound(name.to_owned()))
    }

    /// Remove `name` and return the preset that should be selected next: the
    /// first remaining one in insertion order.
    ///
    /// # Errors
    ///
    /// [`PresetError::NotFound`] if there is no such preset.
    pub fn delete(&mut self, name: &str) -> Result<Option<String>, PresetError> {
        let idx = self.position(name).ok_or_else(|| PresetError::NotFound(name.to_owned()))?;
        self.entries.remove(idx);
        Ok(self.first_name().map(str::to_owned))
    }

    /// Names in display order: ascending, ignoring case.
    #[must_use]
    pub fn names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|(name, _)| name.as_str()).collect();
        names.sort_by_cached_key(|name| name.to_lowercase());
        names
    }

    /// The first name in insertion order.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }
}
