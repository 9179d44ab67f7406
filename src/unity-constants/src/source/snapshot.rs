//! In-memory project source.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    empty_layers, AnimatorControllerAsset, LayerSlots, MixerAsset, ProjectSource, SceneEntry,
    SortingLayerEntry, LAYER_COUNT,
};
use crate::domain::Domain;
use crate::error::{Error, Result};

/// Project configuration held in memory.
///
/// Every field is optional; a missing field behaves like a settings file
/// that could not be read. Snapshots can be loaded from YAML or JSON:
///
/// ```yaml
/// scenes:
///   - path: Assets/Scenes/MainMenu.unity
/// tags: [Untagged, Player]
/// layers:
///   0: Default
///   8: Ground
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenes: Option<Vec<SceneEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Layer names keyed by slot index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<std::collections::BTreeMap<usize, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting_layers: Option<Vec<SortingLayerEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_axes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_mixers: Option<Vec<MixerAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animator_controllers: Option<Vec<AnimatorControllerAsset>>,
}

impl ProjectSnapshot {
    /// Load a snapshot from a `.json`, `.yaml` or `.yml` file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            serde_json::from_str(&text)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
        } else {
            Self::from_yaml(&text)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
        }
    }

    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Set a layer slot, creating the layer table if needed
    pub fn set_layer(&mut self, index: usize, name: impl Into<String>) {
        self.layers
            .get_or_insert_with(Default::default)
            .insert(index, name.into());
    }
}

fn require<T: Clone>(field: &Option<T>, domain: Domain) -> Result<T> {
    field
        .clone()
        .ok_or_else(|| Error::unavailable(domain, "not present in snapshot"))
}

impl ProjectSource for ProjectSnapshot {
    fn scenes(&self) -> Result<Vec<SceneEntry>> {
        require(&self.scenes, Domain::Scenes)
    }

    fn tags(&self) -> Result<Vec<String>> {
        require(&self.tags, Domain::Tags)
    }

    fn layers(&self) -> Result<LayerSlots> {
        let named = require(&self.layers, Domain::Layers)?;
        let mut slots = empty_layers();
        for (index, name) in named {
            if index >= LAYER_COUNT {
                return Err(Error::unavailable(
                    Domain::Layers,
                    format!("layer index {} is outside 0..{}", index, LAYER_COUNT),
                ));
            }
            slots[index] = Some(name);
        }
        Ok(slots)
    }

    fn sorting_layers(&self) -> Result<Vec<SortingLayerEntry>> {
        require(&self.sorting_layers, Domain::SortingLayers)
    }

    fn input_axes(&self) -> Result<Vec<String>> {
        require(&self.input_axes, Domain::InputAxes)
    }

    fn audio_mixers(&self) -> Result<Vec<MixerAsset>> {
        require(&self.audio_mixers, Domain::AudioMixerParameters)
    }

    fn animator_controllers(&self) -> Result<Vec<AnimatorControllerAsset>> {
        require(&self.animator_controllers, Domain::AnimatorParameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_unavailable() {
        let snapshot = ProjectSnapshot::default();
        assert!(matches!(
            snapshot.tags(),
            Err(Error::SourceUnavailable {
                domain: Domain::Tags,
                ..
            })
        ));
    }

    #[test]
    fn test_layers_fill_slots() {
        let mut snapshot = ProjectSnapshot::default();
        snapshot.set_layer(0, "Default");
        snapshot.set_layer(8, "Ground");
        let slots = snapshot.layers().unwrap();
        assert_eq!(slots[0].as_deref(), Some("Default"));
        assert_eq!(slots[8].as_deref(), Some("Ground"));
        assert_eq!(slots.iter().flatten().count(), 2);
    }

    #[test]
    fn test_layer_index_out_of_range() {
        let mut snapshot = ProjectSnapshot::default();
        snapshot.set_layer(32, "Overflow");
        assert!(snapshot.layers().is_err());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
scenes:
  - path: Assets/Scenes/MainMenu.unity
tags: [Untagged, Player]
layers:
  0: Default
  8: Ground
sorting_layers:
  - { name: Default, id: 0 }
audio_mixers:
  - asset_name: Master
    exposed_parameter_names: [MusicVolume]
"#;
        let snapshot = ProjectSnapshot::from_yaml(yaml).unwrap();
        assert_eq!(snapshot.scenes().unwrap().len(), 1);
        assert_eq!(snapshot.tags().unwrap(), vec!["Untagged", "Player"]);
        assert_eq!(snapshot.layers().unwrap()[8].as_deref(), Some("Ground"));
        assert_eq!(snapshot.audio_mixers().unwrap()[0].exposed_parameter_names.len(), 1);
        assert!(snapshot.input_axes().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.json");
        std::fs::write(&path, r#"{"input_axes": ["Fire", "Jump"]}"#).unwrap();
        let snapshot = ProjectSnapshot::from_path(&path).unwrap();
        assert_eq!(snapshot.input_axes().unwrap(), vec!["Fire", "Jump"]);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectSnapshot::from_path(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
