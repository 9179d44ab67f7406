//! Configuration file discovery and loading for the CLI

use anyhow::{bail, Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use unity_constants::{GeneratorConfig, HashAlgorithm};

/// Name of the per-project configuration file
pub const PROJECT_CONFIG_FILE: &str = "unity-constants.toml";

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    Project(PathBuf),
    User(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(p) => write!(f, "{} (--config)", p.display()),
            ConfigSource::Project(p) => write!(f, "{} (project)", p.display()),
            ConfigSource::User(p) => write!(f, "{} (user)", p.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Values given on the command line, applied over the loaded file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub output_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub indent: Option<String>,
    pub hash: Option<HashAlgorithm>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(ns) = &self.namespace {
            config.namespace = ns.clone();
        }
        if let Some(indent) = &self.indent {
            config.indent = indent.clone();
        }
        if let Some(hash) = self.hash {
            config.hash = hash;
        }
    }
}

/// Get the path to the user-wide config file
pub fn user_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("unity-constants");

    Ok(config_dir.join("config.toml"))
}

/// Path of the project-local config file
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_FILE)
}

/// Load configuration: `--config`, then the project file, then the user
/// file, then defaults
pub fn load(explicit: Option<&Path>, project_root: &Path) -> Result<(GeneratorConfig, ConfigSource)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Config file {} does not exist", path.display());
        }
        return Ok((read(path)?, ConfigSource::Explicit(path.to_path_buf())));
    }

    let project = project_config_path(project_root);
    if project.is_file() {
        return Ok((read(&project)?, ConfigSource::Project(project)));
    }

    if let Ok(user) = user_config_path() {
        if user.is_file() {
            return Ok((read(&user)?, ConfigSource::User(user)));
        }
    }

    Ok((GeneratorConfig::default(), ConfigSource::Defaults))
}

fn read(path: &Path) -> Result<GeneratorConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Save configuration to file
pub fn save(path: &Path, config: &GeneratorConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory at {}", parent.display())
        })?;
    }

    let contents = to_toml(config)?;

    fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

pub fn to_toml(config: &GeneratorConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}

/// Parse `--indent`: a number of spaces, `tab`, or the literal string
pub fn parse_indent(value: &str) -> Result<String, String> {
    if let Ok(n) = value.parse::<usize>() {
        if n > 16 {
            return Err(format!("indent of {} spaces is too large", n));
        }
        return Ok(" ".repeat(n));
    }

    match value {
        "tab" | "\\t" => Ok("\t".to_string()),
        other if other.chars().all(|c| c == ' ' || c == '\t') => Ok(other.to_string()),
        other => Err(format!(
            "indent must be a number of spaces, 'tab', or whitespace, got {:?}",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = load(None, dir.path()).unwrap();
        // A user config may exist on the machine running the tests
        if source == ConfigSource::Defaults {
            assert_eq!(config, GeneratorConfig::default());
        }
    }

    #[test]
    fn test_project_file_used() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "namespace = \"Game\"\nindent = \"\\t\"\n",
        )
        .unwrap();
        let (config, source) = load(None, dir.path()).unwrap();
        assert_eq!(config.namespace, "Game");
        assert_eq!(config.indent, "\t");
        assert!(matches!(source, ConfigSource::Project(_)));
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "namespace = \"Project\"\n").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "namespace = \"Explicit\"\n").unwrap();

        let (config, source) = load(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.namespace, "Explicit");
        assert_eq!(source, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.toml")), dir.path()).is_err());
    }

    #[test]
    fn test_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "namespace = [").unwrap();
        let err = load(None, dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let config = GeneratorConfig {
            namespace: "Saved".to_string(),
            hash: HashAlgorithm::Fnv1a,
            ..Default::default()
        };
        save(&path, &config).unwrap();
        let (loaded, _) = load(Some(&path), dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_overrides_apply() {
        let mut config = GeneratorConfig::default();
        ConfigOverrides {
            output_dir: Some(PathBuf::from("Out")),
            namespace: Some("Ns".to_string()),
            indent: None,
            hash: Some(HashAlgorithm::Fnv1a),
        }
        .apply(&mut config);
        assert_eq!(config.output_dir, PathBuf::from("Out"));
        assert_eq!(config.namespace, "Ns");
        assert_eq!(config.indent, "    ");
        assert_eq!(config.hash, HashAlgorithm::Fnv1a);
    }

    #[test]
    fn test_parse_indent() {
        assert_eq!(parse_indent("2").unwrap(), "  ");
        assert_eq!(parse_indent("tab").unwrap(), "\t");
        assert_eq!(parse_indent("   ").unwrap(), "   ");
        assert!(parse_indent("xx").is_err());
        assert!(parse_indent("100").is_err());
    }
}
