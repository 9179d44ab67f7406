//! Conversion of human-readable labels into C# identifiers.

use crate::error::{Error, Result};

/// Convert a raw label into a valid identifier.
///
/// Every character outside `[A-Za-z0-9]` is dropped, and a leading digit
/// gets an underscore prefix. A label with no alphanumeric characters is
/// rejected rather than producing an empty name.
///
/// ```
/// use unity_constants::sanitize;
///
/// assert_eq!(sanitize("Player 1").unwrap(), "Player1");
/// assert_eq!(sanitize("3Lives").unwrap(), "_3Lives");
/// assert!(sanitize("---").is_err());
/// ```
pub fn sanitize(raw: &str) -> Result<String> {
    let mut result: String = raw.chars().filter(char::is_ascii_alphanumeric).collect();

    match result.chars().next() {
        None => {
            return Err(Error::EmptyIdentifier {
                raw: raw.to_string(),
            })
        }
        Some(first) if first.is_ascii_digit() => result.insert(0, '_'),
        Some(_) => {}
    }

    Ok(result)
}

/// Sanitize a possibly dotted namespace (`Game.Constants`) segment by segment.
///
/// Empty segments (`Game..Constants`) are dropped.
pub fn sanitize_namespace(raw: &str) -> Result<String> {
    let segments = raw
        .split('.')
        .filter(|s| !s.trim().is_empty())
        .map(sanitize)
        .collect::<Result<Vec<_>>>()?;

    if segments.is_empty() {
        return Err(Error::EmptyIdentifier {
            raw: raw.to_string(),
        });
    }

    Ok(segments.join("."))
}
