//! Preset panel state: the stored map plus the name draft and selection.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use canvas::model::SceneConfig;
use share::{PresetError, PresetMap};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PresetsState {
    pub map: PresetMap,
    /// Text in the name input.
    pub name_draft: String,
    /// Entry chosen in the dropdown.
    pub selected: Option<String>,
}

impl PresetsState {
    /// Wrap a freshly loaded map, selecting its first entry.
    #[must_use]
    pub fn from_map(map: PresetMap) -> Self {
        let selected = map.first_name().map(str::to_owned);
        Self { map, name_draft: String::new(), selected }
    }

    /// Store `scene` under the drafted name and select it. Returns the toast text.
    ///
    /// # Errors
    ///
    /// Propagates [`PresetMap::save`] errors; the map is unchanged.
    pub fn save(&mut self, scene: SceneConfig, overwrite: bool) -> Result<&'static str, PresetError> {
        let outcome = self.map.save(&self.name_draft, scene, overwrite)?;
        self.selected = Some(self.name_draft.trim().to_owned());
        Ok(outcome.message())
    }

    /// The selected preset's scene and name.
    ///
    /// # Errors
    ///
    /// [`PresetError::NotFound`] when nothing is selected or the entry is gone.
    pub fn load_selected(&self) -> Result<(&str, &SceneConfig), PresetError> {
        let name = self.selected.as_deref().ok_or_else(|| PresetError::NotFound(String::new()))?;
        Ok((name, self.map.load(name)?))
    }

    /// Delete the selected preset and move the selection to the first remaining one.
    /// Returns the deleted name.
    ///
    /// # Errors
    ///
    /// [`PresetError::NotFound`] when nothing is selected or the entry is gone.
    pub fn delete_selected(&mut self) -> Result<String, PresetError> {
        let name = self.selected.clone().ok_or_else(|| PresetError::NotFound(String::new()))?;
        self.selected = self.map.delete(&name)?;
        Ok(name)
    }
}
