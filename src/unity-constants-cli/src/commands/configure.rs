//! Configuration command handlers
//!
//! Handles the `config` subcommand for inspecting and creating the
//! project configuration file.

use anyhow::{bail, Result};
use std::path::Path;
use unity_constants::GeneratorConfig;

use crate::config::{self, ConfigSource};

/// Handle `config show`
pub fn show(config: &GeneratorConfig, source: &ConfigSource, project_root: &Path) -> Result<()> {
    println!("# Source: {}", source);
    println!(
        "# Output directory: {}",
        config.output_dir_in(project_root).display()
    );
    print!("{}", config::to_toml(config)?);
    Ok(())
}

/// Handle `config init`
pub fn init(config: &GeneratorConfig, project_root: &Path, force: bool) -> Result<()> {
    let path = config::project_config_path(project_root);

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    config.validate()?;
    config::save(&path, config)?;
    println!("Config saved to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_show_does_not_fail() {
        let result = show(
            &GeneratorConfig::default(),
            &ConfigSource::Defaults,
            Path::new("."),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_init_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            namespace: "Game".to_string(),
            ..Default::default()
        };
        init(&config, dir.path(), false).unwrap();

        let (loaded, source) = config::load(None, dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert!(matches!(source, ConfigSource::Project(_)));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = config::project_config_path(dir.path());
        fs::write(&path, "namespace = \"Keep\"\n").unwrap();

        assert!(init(&GeneratorConfig::default(), dir.path(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "namespace = \"Keep\"\n");

        init(&GeneratorConfig::default(), dir.path(), true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "namespace = \"Keep\"\n");
    }

    #[test]
    fn test_init_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig {
            indent: "x".to_string(),
            ..Default::default()
        };
        assert!(init(&config, dir.path(), false).is_err());
        assert!(!config::project_config_path(dir.path()).exists());
    }
}
