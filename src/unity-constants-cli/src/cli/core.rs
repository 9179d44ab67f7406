//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use unity_constants::{Domain, HashAlgorithm};

use crate::config::{parse_indent, ConfigOverrides};

#[derive(Parser)]
#[command(name = "unity-constants")]
#[command(about = "Generate C# constants from Unity project settings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Unity project root (the directory containing Assets/ and ProjectSettings/)
    #[arg(short, long, global = true, env = "UNITY_PROJECT", default_value = ".")]
    pub project: PathBuf,

    /// Configuration file (defaults to <project>/unity-constants.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read project data from a YAML/JSON snapshot instead of the project files
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Output directory, relative to the project root unless absolute
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Namespace enclosing the generated classes (empty for none)
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Indentation: number of spaces, "tab", or a literal whitespace string
    #[arg(long, global = true, value_parser = parse_indent)]
    pub indent: Option<String>,

    /// Hash for animator parameter constants (crc32 matches Animator.StringToHash)
    #[arg(long, global = true)]
    pub hash: Option<HashAlgorithm>,

    /// Log extraction details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            output_dir: self.output_dir.clone(),
            namespace: self.namespace.clone(),
            indent: self.indent.clone(),
            hash: self.hash,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every generator (scenes, tags, layers, sorting layers, input axes,
    /// mixer parameters, animator parameters)
    #[command(visible_alias = "a")]
    All,

    /// Run a single generator
    #[command(visible_alias = "g")]
    Generate {
        /// Domain to generate (e.g. tags, sorting-layers, animator-parameters)
        domain: Domain,

        /// Print the generated file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the names and values a generator would emit
    #[command(visible_alias = "l")]
    List {
        domain: Domain,
    },

    /// Inspect or create the configuration file
    #[command(visible_alias = "c")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration and where it came from
    Show,

    /// Write the current configuration to <project>/unity-constants.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
