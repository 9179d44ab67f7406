//! Project source backed by a Unity project directory on disk.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::unity_yaml::{parse_documents, UnityDocument};
use super::{
    empty_layers, AnimatorControllerAsset, LayerSlots, MixerAsset, ProjectSource, SceneEntry,
    SortingLayerEntry, LAYER_COUNT,
};
use crate::domain::Domain;
use crate::error::{Error, Result};

/// Tags every project has; the tag manager only stores user-defined ones
pub const BUILTIN_TAGS: &[&str] = &[
    "Untagged",
    "Respawn",
    "Finish",
    "EditorOnly",
    "MainCamera",
    "Player",
    "GameController",
];

const BUILD_SETTINGS: &str = "ProjectSettings/EditorBuildSettings.asset";
const TAG_MANAGER: &str = "ProjectSettings/TagManager.asset";
const INPUT_MANAGER: &str = "ProjectSettings/InputManager.asset";

/// Directory searched for mixer and animator controller assets
const ASSET_ROOT: &str = "Assets";

#[derive(Debug, Deserialize)]
struct EditorBuildSettings {
    #[serde(rename = "m_Scenes", default)]
    scenes: Vec<BuildScene>,
}

#[derive(Debug, Deserialize)]
struct BuildScene {
    #[serde(default)]
    path: String,
}

#[derive(Debug, Deserialize)]
struct TagManager {
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    layers: Vec<String>,
    #[serde(rename = "m_SortingLayers", default)]
    sorting_layers: Vec<SortingLayer>,
}

#[derive(Debug, Deserialize)]
struct SortingLayer {
    #[serde(default)]
    name: String,
    #[serde(rename = "uniqueID")]
    unique_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct InputManager {
    #[serde(rename = "m_Axes", default)]
    axes: Vec<NamedEntry>,
}

/// Any list element identified by `m_Name`
#[derive(Debug, Deserialize)]
struct NamedEntry {
    #[serde(rename = "m_Name", default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct AudioMixerController {
    #[serde(rename = "m_ExposedParameters", default)]
    exposed_parameters: Vec<ExposedParameter>,
}

#[derive(Debug, Deserialize)]
struct ExposedParameter {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct AnimatorController {
    #[serde(rename = "m_AnimatorParameters", default)]
    parameters: Vec<NamedEntry>,
}

/// A Unity project rooted at the directory containing `Assets/` and
/// `ProjectSettings/`
#[derive(Debug, Clone)]
pub struct UnityProject {
    root: PathBuf,
}

impl UnityProject {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `root` looks like a Unity project
    pub fn is_project(root: &Path) -> bool {
        root.join("Assets").is_dir() && root.join("ProjectSettings").is_dir()
    }

    /// Load the single object of `type_name` from a settings file
    fn settings<T: DeserializeOwned>(
        &self,
        domain: Domain,
        relative: &str,
        type_name: &str,
    ) -> Result<T> {
        let path = self.root.join(relative);
        if !path.is_file() {
            return Err(Error::unavailable(
                domain,
                format!("{} not found", path.display()),
            ));
        }

        let text = std::fs::read_to_string(&path).map_err(|e| {
            Error::unavailable(domain, format!("failed to read {}: {}", path.display(), e))
        })?;
        let documents = parse_documents(&text).map_err(|e| {
            Error::unavailable(domain, format!("failed to parse {}: {}", path.display(), e))
        })?;

        let document = documents
            .into_iter()
            .find(|doc| doc.type_name == type_name)
            .ok_or_else(|| {
                Error::unavailable(
                    domain,
                    format!("{} has no {} object", path.display(), type_name),
                )
            })?;

        debug!(
            "Loaded {} (class {:?}) from {}",
            type_name,
            document.class_id,
            path.display()
        );
        document.body().map_err(|e| {
            Error::unavailable(domain, format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Asset files under `Assets/` with the given extension, sorted by path
    fn asset_files(&self, domain: Domain, extension: &str) -> Result<Vec<PathBuf>> {
        let assets = self.root.join(ASSET_ROOT);
        if !assets.is_dir() {
            return Err(Error::unavailable(
                domain,
                format!("{} is not a directory", assets.display()),
            ));
        }

        let files: Vec<PathBuf> = walkdir::WalkDir::new(&assets)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.eq_ignore_ascii_case(extension))
                    .unwrap_or(false)
            })
            .map(walkdir::DirEntry::into_path)
            .collect();

        debug!("Found {} .{} asset(s)", files.len(), extension);
        Ok(files)
    }

    /// Parse an asset file, logging and skipping it when unreadable
    fn asset_documents(path: &Path) -> Option<Vec<UnityDocument>> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };
        match parse_documents(&text) {
            Ok(docs) => Some(docs),
            Err(e) => {
                warn!("Skipping {}: not a text-serialized asset ({})", path.display(), e);
                None
            }
        }
    }
}

fn asset_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Every object of `type_name` in an asset, skipping ones that do not deserialize
fn objects<T: DeserializeOwned>(path: &Path, documents: &[UnityDocument], type_name: &str) -> Vec<T> {
    documents
        .iter()
        .filter(|doc| doc.type_name == type_name)
        .filter_map(|doc| match doc.body() {
            Ok(object) => Some(object),
            Err(e) => {
                warn!("Skipping {} in {}: {}", type_name, path.display(), e);
                None
            }
        })
        .collect()
}

impl ProjectSource for UnityProject {
    fn scenes(&self) -> Result<Vec<SceneEntry>> {
        let settings: EditorBuildSettings =
            self.settings(Domain::Scenes, BUILD_SETTINGS, "EditorBuildSettings")?;
        Ok(settings
            .scenes
            .into_iter()
            .filter(|scene| !scene.path.is_empty())
            .map(|scene| SceneEntry { path: scene.path })
            .collect())
    }

    fn tags(&self) -> Result<Vec<String>> {
        let manager: TagManager = self.settings(Domain::Tags, TAG_MANAGER, "TagManager")?;
        let mut tags: Vec<String> = BUILTIN_TAGS.iter().map(|t| t.to_string()).collect();
        tags.extend(manager.tags);
        Ok(tags)
    }

    fn layers(&self) -> Result<LayerSlots> {
        let manager: TagManager = self.settings(Domain::Layers, TAG_MANAGER, "TagManager")?;
        let mut slots = empty_layers();
        for (index, layer) in manager.layers.into_iter().enumerate() {
            if index >= LAYER_COUNT {
                warn!("Ignoring layer slot {} beyond the {} supported", index, LAYER_COUNT);
                break;
            }
            slots[index] = Some(layer).filter(|name| !name.is_empty());
        }
        Ok(slots)
    }

    fn sorting_layers(&self) -> Result<Vec<SortingLayerEntry>> {
        let manager: TagManager =
            self.settings(Domain::SortingLayers, TAG_MANAGER, "TagManager")?;
        let mut layers = Vec::new();
        for entry in manager.sorting_layers {
            match entry.unique_id {
                // uniqueID is serialized unsigned; the runtime exposes it as int
                Some(id) if !entry.name.is_empty() => layers.push(SortingLayerEntry {
                    name: entry.name,
                    id: id as u32 as i32,
                }),
                _ => warn!("Skipping sorting layer entry without name or uniqueID"),
            }
        }
        Ok(layers)
    }

    fn input_axes(&self) -> Result<Vec<String>> {
        let manager: InputManager =
            self.settings(Domain::InputAxes, INPUT_MANAGER, "InputManager")?;
        Ok(manager.axes.into_iter().map(|axis| axis.name).collect())
    }

    fn audio_mixers(&self) -> Result<Vec<MixerAsset>> {
        let files = self.asset_files(Domain::AudioMixerParameters, "mixer")?;
        Ok(files
            .iter()
            .filter_map(|path| {
                let documents = Self::asset_documents(path)?;
                let controllers: Vec<AudioMixerController> =
                    objects(path, &documents, "AudioMixerController");
                Some(MixerAsset {
                    asset_name: asset_name(path),
                    exposed_parameter_names: controllers
                        .into_iter()
                        .flat_map(|c| c.exposed_parameters)
                        .map(|p| p.name)
                        .collect(),
                })
            })
            .collect())
    }

    fn animator_controllers(&self) -> Result<Vec<AnimatorControllerAsset>> {
        let files = self.asset_files(Domain::AnimatorParameters, "controller")?;
        Ok(files
            .iter()
            .filter_map(|path| {
                let documents = Self::asset_documents(path)?;
                let controllers: Vec<AnimatorController> =
                    objects(path, &documents, "AnimatorController");
                Some(AnimatorControllerAsset {
                    asset_name: asset_name(path),
                    parameter_names: controllers
                        .into_iter()
                        .flat_map(|c| c.parameters)
                        .map(|p| p.name)
                        .collect(),
                })
            })
            .collect())
    }
}
