//! Writing generated files to disk.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Write `contents` to `path`, creating parent directories and replacing
/// any existing file.
///
/// The file is truncated before writing; an interrupted write leaves it
/// partially written.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut file = fs::File::create(path).map_err(|e| Error::io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
