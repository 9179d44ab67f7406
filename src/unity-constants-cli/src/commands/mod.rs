//! Command handlers for unity-constants CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod generate;
pub mod list;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};
use unity_constants::{Generator, GeneratorConfig, ProjectSnapshot, ProjectSource, UnityProject};

use crate::cli::GlobalArgs;
use crate::config::{self, ConfigSource};

/// Everything a generating command needs: configuration and a data source
pub struct Session {
    pub project_root: PathBuf,
    pub config: GeneratorConfig,
    source: Box<dyn ProjectSource>,
}

impl Session {
    /// Resolve configuration and open the project (or snapshot)
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let (config, _) = effective_config(global)?;

        let source: Box<dyn ProjectSource> = match &global.snapshot {
            Some(path) => {
                debug!("Reading project data from snapshot {}", path.display());
                Box::new(
                    ProjectSnapshot::from_path(path)
                        .with_context(|| format!("Failed to load snapshot {}", path.display()))?,
                )
            }
            None => {
                if !UnityProject::is_project(&global.project) {
                    warn!(
                        "{} does not look like a Unity project (missing Assets/ or ProjectSettings/)",
                        global.project.display()
                    );
                }
                Box::new(UnityProject::new(&global.project))
            }
        };

        Ok(Self {
            project_root: global.project.clone(),
            config,
            source,
        })
    }

    pub fn generator(&self) -> Generator<'_> {
        Generator::new(self.source.as_ref(), &self.config, &self.project_root)
    }
}

/// Load the configuration file and apply command-line overrides
pub fn effective_config(global: &GlobalArgs) -> Result<(GeneratorConfig, ConfigSource)> {
    let (mut config, source) = config::load(global.config.as_deref(), &global.project)?;
    global.overrides().apply(&mut config);
    debug!("Using configuration from {}", source);
    Ok((config, source))
}
