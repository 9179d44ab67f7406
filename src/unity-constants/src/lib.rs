//! # unity-constants
//!
//! Generate C# constant classes from a Unity project's configuration.
//!
//! This library provides functionality to:
//! - Read scenes, tags, layers, sorting layers and input axes from
//!   `ProjectSettings/`
//! - Collect exposed audio mixer parameters and animator controller
//!   parameters from assets
//! - Turn every name into a valid identifier and emit one C# file per
//!   domain, so code can say `Tags.Player` instead of `"Player"`
//!
//! ## Example
//!
//! ```no_run
//! use unity_constants::{Domain, Generator, GeneratorConfig, UnityProject};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let project = UnityProject::new("MyGame");
//! let config = GeneratorConfig {
//!     namespace: "MyGame.Constants".to_string(),
//!     ..Default::default()
//! };
//!
//! let generator = Generator::new(&project, &config, project.root());
//! let tags = generator.generate(Domain::Tags)?;
//! println!("Wrote {}", tags.path.display());
//!
//! let report = generator.generate_all();
//! for (domain, error) in report.failures() {
//!     eprintln!("{}: {}", domain, error);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod emitter;
pub mod error;
pub mod extract;
pub mod generator;
pub mod hash;
pub mod identifier;
pub mod model;
pub mod render;
pub mod source;
pub mod writer;

#[doc(inline)]
pub use config::{Filenames, GeneratorConfig, DEFAULT_OUTPUT_DIR};
#[doc(inline)]
pub use domain::Domain;
#[doc(inline)]
pub use emitter::{CodeEmitter, ScopeKind};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use generator::{BatchReport, Generated, Generator};
#[doc(inline)]
pub use hash::HashAlgorithm;
#[doc(inline)]
pub use identifier::sanitize;
#[doc(inline)]
pub use model::{ConstantEntry, ConstantValue, ExtractionResult, Item, ScopeGroup};
#[doc(inline)]
pub use render::{render, RenderOptions};
#[doc(inline)]
pub use source::{
    AnimatorControllerAsset, MixerAsset, ProjectSnapshot, ProjectSource, SceneEntry,
    SortingLayerEntry, UnityProject,
};
#[doc(inline)]
pub use writer::write_output;
