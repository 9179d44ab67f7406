//! Configuration domains mirrored into constant classes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One configuration category that gets its own generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Scenes,
    Tags,
    Layers,
    SortingLayers,
    InputAxes,
    AudioMixerParameters,
    AnimatorParameters,
}

impl Domain {
    /// All domains in batch order
    pub const ALL: [Domain; 7] = [
        Domain::Scenes,
        Domain::Tags,
        Domain::Layers,
        Domain::SortingLayers,
        Domain::InputAxes,
        Domain::AudioMixerParameters,
        Domain::AnimatorParameters,
    ];

    /// Name of the top-level generated class
    pub fn class_name(self) -> &'static str {
        match self {
            Domain::Scenes => "Scenes",
            Domain::Tags => "Tags",
            Domain::Layers => "Layers",
            Domain::SortingLayers => "SortingLayers",
            Domain::InputAxes => "InputAxes",
            Domain::AudioMixerParameters => "AudioMixerParameters",
            Domain::AnimatorParameters => "AnimatorParameters",
        }
    }

    /// Filename used when the configuration does not override it
    pub fn default_filename(self) -> String {
        format!("{}.cs", self.class_name())
    }

    /// Kebab-case name used on the command line
    pub fn cli_name(self) -> &'static str {
        match self {
            Domain::Scenes => "scenes",
            Domain::Tags => "tags",
            Domain::Layers => "layers",
            Domain::SortingLayers => "sorting-layers",
            Domain::InputAxes => "input-axes",
            Domain::AudioMixerParameters => "mixer-parameters",
            Domain::AnimatorParameters => "animator-parameters",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Domain::Scenes => "scenes",
            Domain::Tags => "tags",
            Domain::Layers => "layers",
            Domain::SortingLayers => "sorting layers",
            Domain::InputAxes => "input axes",
            Domain::AudioMixerParameters => "audio mixer parameters",
            Domain::AnimatorParameters => "animator parameters",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Domain::ALL
            .into_iter()
            .find(|d| d.cli_name() == wanted || d.class_name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                let names: Vec<_> = Domain::ALL.iter().map(|d| d.cli_name()).collect();
                format!("unknown domain '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_order() {
        assert_eq!(Domain::ALL[0], Domain::Scenes);
        assert_eq!(Domain::ALL[6], Domain::AnimatorParameters);
    }

    #[test]
    fn test_default_filenames() {
        assert_eq!(Domain::SortingLayers.default_filename(), "SortingLayers.cs");
        assert_eq!(
            Domain::AudioMixerParameters.default_filename(),
            "AudioMixerParameters.cs"
        );
    }

    #[test]
    fn test_parse_cli_names() {
        for domain in Domain::ALL {
            assert_eq!(domain.cli_name().parse::<Domain>().unwrap(), domain);
        }
        assert_eq!("InputAxes".parse::<Domain>().unwrap(), Domain::InputAxes);
        assert_eq!("sorting_layers".parse::<Domain>().unwrap(), Domain::SortingLayers);
        assert!("prefabs".parse::<Domain>().is_err());
    }
}
