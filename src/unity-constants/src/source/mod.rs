//! Project Source Abstraction
//!
//! Read-only access to the raw configuration of a Unity project:
//! - `UnityProject` reads the serialized settings and assets on disk
//! - `ProjectSnapshot` holds the same data in memory (fixtures, exported dumps)

mod snapshot;
mod unity;
mod unity_yaml;

pub use snapshot::ProjectSnapshot;
pub use unity::UnityProject;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Number of layer slots in a Unity project
pub const LAYER_COUNT: usize = 32;

/// Layer slots indexed 0..32, `None` for an unnamed slot
pub type LayerSlots = [Option<String>; LAYER_COUNT];

/// A scene registered in the build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneEntry {
    /// Asset path, e.g. `Assets/Scenes/MainMenu.unity`
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingLayerEntry {
    pub name: String,
    /// Stable unique id assigned by the editor
    pub id: i32,
}

/// An audio mixer asset and its exposed parameter names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixerAsset {
    pub asset_name: String,
    #[serde(default)]
    pub exposed_parameter_names: Vec<String>,
}

/// An animator controller asset and its parameter names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimatorControllerAsset {
    pub asset_name: String,
    #[serde(default)]
    pub parameter_names: Vec<String>,
}

/// Trait for reading project configuration from various sources
///
/// Each method fails with `Error::SourceUnavailable` when the underlying
/// configuration cannot be read at all.
pub trait ProjectSource {
    /// Scenes in build-settings order
    fn scenes(&self) -> Result<Vec<SceneEntry>>;

    /// Defined tags, built-in tags included
    fn tags(&self) -> Result<Vec<String>>;

    fn layers(&self) -> Result<LayerSlots>;

    fn sorting_layers(&self) -> Result<Vec<SortingLayerEntry>>;

    /// Input axis names in definition order, duplicates included
    fn input_axes(&self) -> Result<Vec<String>>;

    fn audio_mixers(&self) -> Result<Vec<MixerAsset>>;

    fn animator_controllers(&self) -> Result<Vec<AnimatorControllerAsset>>;
}

/// Empty layer slot array
pub fn empty_layers() -> LayerSlots {
    std::array::from_fn(|_| None)
}

#[cfg(test)]
pub(crate) use unity::fixtures;
