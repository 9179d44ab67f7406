//! Generator configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::emitter::DEFAULT_INDENT;
use crate::error::{Error, Result};
use crate::hash::HashAlgorithm;
use crate::identifier::sanitize_namespace;

/// Default output directory, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "Assets/Scripts/Constants";

/// Output filename for each domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filenames {
    pub scenes: String,
    pub tags: String,
    pub layers: String,
    pub sorting_layers: String,
    pub input_axes: String,
    pub audio_mixer_parameters: String,
    pub animator_parameters: String,
}

impl Default for Filenames {
    fn default() -> Self {
        Self {
            scenes: Domain::Scenes.default_filename(),
            tags: Domain::Tags.default_filename(),
            layers: Domain::Layers.default_filename(),
            sorting_layers: Domain::SortingLayers.default_filename(),
            input_axes: Domain::InputAxes.default_filename(),
            audio_mixer_parameters: Domain::AudioMixerParameters.default_filename(),
            animator_parameters: Domain::AnimatorParameters.default_filename(),
        }
    }
}

impl Filenames {
    pub fn get(&self, domain: Domain) -> &str {
        match domain {
            Domain::Scenes => &self.scenes,
            Domain::Tags => &self.tags,
            Domain::Layers => &self.layers,
            Domain::SortingLayers => &self.sorting_layers,
            Domain::InputAxes => &self.input_axes,
            Domain::AudioMixerParameters => &self.audio_mixer_parameters,
            Domain::AnimatorParameters => &self.animator_parameters,
        }
    }
}

/// Settings shared by every generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory receiving generated files; relative paths resolve against
    /// the project root
    pub output_dir: PathBuf,

    /// Enclosing namespace, empty for none
    pub namespace: String,

    /// One level of indentation
    pub indent: String,

    /// Hash used for animator parameter `...Hash` constants
    pub hash: HashAlgorithm,

    pub filenames: Filenames,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            namespace: String::new(),
            indent: DEFAULT_INDENT.to_string(),
            hash: HashAlgorithm::default(),
            filenames: Filenames::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check values that would otherwise only fail halfway through a run
    pub fn validate(&self) -> Result<()> {
        if !self.indent.chars().all(|c| c == ' ' || c == '\t') {
            return Err(Error::Config(format!(
                "indent must contain only spaces or tabs, got {:?}",
                self.indent
            )));
        }

        if !self.namespace.is_empty() {
            sanitize_namespace(&self.namespace).map_err(|_| {
                Error::Config(format!("namespace {:?} is not a valid name", self.namespace))
            })?;
        }

        for domain in Domain::ALL {
            let name = self.filenames.get(domain);
            let path = Path::new(name);
            if name.is_empty() || path.file_name().map(|f| f != path.as_os_str()).unwrap_or(true) {
                return Err(Error::Config(format!(
                    "filename for {} must be a plain file name, got {:?}",
                    domain, name
                )));
            }
        }

        Ok(())
    }

    /// Resolve the output directory against a project root
    pub fn output_dir_in(&self, project_root: &Path) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            project_root.join(&self.output_dir)
        }
    }

    /// Full path of a domain's generated file
    pub fn output_path(&self, project_root: &Path, domain: Domain) -> PathBuf {
        self.output_dir_in(project_root)
            .join(self.filenames.get(domain))
    }
}
