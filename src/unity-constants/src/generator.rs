//! Generation pipeline: extract, render, write.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::GeneratorConfig;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::extract::extract;
use crate::model::ExtractionResult;
use crate::render::{render, RenderOptions};
use crate::source::ProjectSource;
use crate::writer::write_output;

/// Runs generators for a project
pub struct Generator<'a> {
    source: &'a dyn ProjectSource,
    config: &'a GeneratorConfig,
    project_root: PathBuf,
}

/// What one domain generator produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub domain: Domain,
    pub path: PathBuf,
    pub constants: usize,
}

/// Per-domain outcomes of a batch run, in batch order
#[derive(Debug)]
pub struct BatchReport {
    pub outcomes: Vec<(Domain, Result<Generated>)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, r)| r.is_ok())
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &Generated> {
        self.outcomes.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (Domain, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|(d, r)| r.as_ref().err().map(|e| (*d, e)))
    }
}

impl<'a> Generator<'a> {
    /// `project_root` anchors a relative output directory
    pub fn new(
        source: &'a dyn ProjectSource,
        config: &'a GeneratorConfig,
        project_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            config,
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn output_path(&self, domain: Domain) -> PathBuf {
        self.config.output_path(&self.project_root, domain)
    }

    pub fn extract(&self, domain: Domain) -> Result<ExtractionResult> {
        extract(domain, self.source, self.config.hash)
    }

    /// Produce the file text for `domain` without touching the filesystem
    pub fn render(&self, domain: Domain) -> Result<String> {
        self.build(domain).map(|(_, text)| text)
    }

    /// Generate one domain's file.
    ///
    /// The file is only written once rendering has fully succeeded, so a
    /// failure leaves any previous output in place.
    pub fn generate(&self, domain: Domain) -> Result<Generated> {
        let (result, text) = self.build(domain)?;
        let path = self.output_path(domain);
        write_output(&path, &text)?;

        info!(
            "Generated {} ({} constants) at {}",
            domain,
            result.constant_count(),
            path.display()
        );
        Ok(Generated {
            domain,
            path,
            constants: result.constant_count(),
        })
    }

    fn build(&self, domain: Domain) -> Result<(ExtractionResult, String)> {
        self.config.validate()?;
        let result = self.extract(domain)?;
        let text = render(
            &result,
            RenderOptions {
                namespace: &self.config.namespace,
                indent: &self.config.indent,
            },
        )?;
        Ok((result, text))
    }

    /// Run every generator in batch order. A failing domain is recorded and
    /// the remaining domains still run.
    pub fn generate_all(&self) -> BatchReport {
        let outcomes = Domain::ALL
            .into_iter()
            .map(|domain| {
                let outcome = self.generate(domain);
                if let Err(e) = &outcome {
                    warn!("Failed to generate {}: {}", domain, e);
                }
                (domain, outcome)
            })
            .collect();
        BatchReport { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{fixtures, ProjectSnapshot, UnityProject};
    use std::fs;

    fn unity_project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fixtures::write_project(dir.path());
        dir
    }

    #[test]
    fn test_generate_all_from_unity_project() {
        let dir = unity_project();
        let project = UnityProject::new(dir.path());
        let config = GeneratorConfig::default();
        let report = Generator::new(&project, &config, dir.path()).generate_all();

        assert!(report.is_success(), "{:?}", report.outcomes);
        assert_eq!(report.succeeded().count(), 7);

        let out = dir.path().join("Assets/Scripts/Constants");
        for domain in Domain::ALL {
            assert!(out.join(domain.default_filename()).is_file());
        }

        let scenes = fs::read_to_string(out.join("Scenes.cs")).unwrap();
        assert!(scenes.contains("    public const int MainMenu = 0;"));
        assert!(scenes.contains("    public const int Level1 = 1;"));

        let layers = fs::read_to_string(out.join("Layers.cs")).unwrap();
        assert!(layers.contains("public const string IgnoreRaycast = \"Ignore Raycast\";"));
        assert!(layers.contains("public const int GroundMask = 256;"));
        assert!(layers.contains("public const int TopMask = -2147483648;"));

        let axes = fs::read_to_string(out.join("InputAxes.cs")).unwrap();
        assert_eq!(axes.matches("Horizontal =").count(), 1);

        let animator = fs::read_to_string(out.join("AnimatorParameters.cs")).unwrap();
        assert!(animator.starts_with(crate::emitter::HEADER));
        assert!(animator.contains("    public static class Player\n"));
        assert!(animator.contains("        public const string IsGrounded = \"IsGrounded\";"));
        assert!(animator.contains(&format!(
            "        public const int SpeedHash = {};",
            crate::hash::HashAlgorithm::Crc32.hash("Speed")
        )));

        let mixers = fs::read_to_string(out.join("AudioMixerParameters.cs")).unwrap();
        assert!(mixers.contains("public const string SFXVolume = \"SFX Volume\";"));
    }

    #[test]
    fn test_regeneration_is_byte_identical() {
        let dir = unity_project();
        let project = UnityProject::new(dir.path());
        let config = GeneratorConfig {
            namespace: "Game.Constants".to_string(),
            ..Default::default()
        };
        let generator = Generator::new(&project, &config, dir.path());

        for domain in Domain::ALL {
            let first = generator.generate(domain).unwrap();
            let before = fs::read(&first.path).unwrap();
            generator.generate(domain).unwrap();
            assert_eq!(before, fs::read(&first.path).unwrap(), "{} changed", domain);
        }
    }

    #[test]
    fn test_failure_keeps_previous_file_and_batch_continues() {
        let dir = unity_project();
        let project = UnityProject::new(dir.path());
        let config = GeneratorConfig::default();
        let generator = Generator::new(&project, &config, dir.path());

        let axes_path = generator.generate(Domain::InputAxes).unwrap().path;
        let previous = fs::read_to_string(&axes_path).unwrap();

        fs::remove_file(dir.path().join("ProjectSettings/InputManager.asset")).unwrap();
        let report = generator.generate_all();

        assert!(!report.is_success());
        let failures: Vec<_> = report.failures().map(|(d, _)| d).collect();
        assert_eq!(failures, vec![Domain::InputAxes]);
        assert_eq!(report.succeeded().count(), 6);
        assert_eq!(fs::read_to_string(&axes_path).unwrap(), previous);
    }

    #[test]
    fn test_duplicate_identifier_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let path = config.output_path(dir.path(), Domain::Tags);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "previous").unwrap();

        let snapshot = ProjectSnapshot {
            tags: Some(vec!["Vol-1".into(), "Vol1".into()]),
            ..Default::default()
        };
        let err = Generator::new(&snapshot, &config, dir.path())
            .generate(Domain::Tags)
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateIdentifier { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_render_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = ProjectSnapshot {
            input_axes: Some(vec!["Fire".into()]),
            ..Default::default()
        };
        let config = GeneratorConfig::default();
        let generator = Generator::new(&snapshot, &config, dir.path());
        let text = generator.render(Domain::InputAxes).unwrap();
        assert!(text.contains("public const string Fire = \"Fire\";"));
        assert!(!generator.output_path(Domain::InputAxes).exists());
    }

    #[test]
    fn test_custom_filename_and_indent() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = ProjectSnapshot {
            tags: Some(vec!["Player".into()]),
            ..Default::default()
        };
        let mut config = GeneratorConfig {
            output_dir: PathBuf::from("Generated"),
            indent: "\t".to_string(),
            ..Default::default()
        };
        config.filenames.tags = "GameTags.cs".to_string();

        let generated = Generator::new(&snapshot, &config, dir.path())
            .generate(Domain::Tags)
            .unwrap();
        assert_eq!(generated.path, dir.path().join("Generated/GameTags.cs"));
        let text = fs::read_to_string(&generated.path).unwrap();
        assert!(text.contains("\tpublic const string Player = \"Player\";"));
    }

    #[test]
    fn test_invalid_config_rejected_before_extraction() {
        let snapshot = ProjectSnapshot::default();
        let config = GeneratorConfig {
            indent: "xx".to_string(),
            ..Default::default()
        };
        let err = Generator::new(&snapshot, &config, ".")
            .generate(Domain::Tags)
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
