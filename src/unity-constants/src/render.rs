//! Rendering of an extraction result into a C# source file.

use std::collections::HashSet;

use crate::emitter::{CodeEmitter, ScopeKind};
use crate::error::{Error, Result};
use crate::identifier::sanitize;
use crate::model::{ConstantEntry, ConstantValue, ExtractionResult, Item};

/// Layout options for rendered files
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Enclosing namespace, empty for none
    pub namespace: &'a str,
    pub indent: &'a str,
}

/// Render a domain's constants as a complete file.
///
/// Identifiers are checked per scope after sanitization: two names that
/// collapse to the same identifier, or a member named like its enclosing
/// class, fail with `DuplicateIdentifier` instead of producing code that
/// does not compile.
pub fn render(result: &ExtractionResult, options: RenderOptions<'_>) -> Result<String> {
    let class_name = result.domain.class_name();
    check_scope(class_name, top_level_names(result)?)?;

    let mut emitter = CodeEmitter::new(options.indent);
    emitter.write_header();
    emitter.begin_scope(ScopeKind::Namespace, options.namespace)?;
    emitter.begin_scope(ScopeKind::Class, class_name)?;

    for item in &result.items {
        match item {
            Item::Constant(entry) => write_entry(&mut emitter, entry)?,
            Item::Group(group) => {
                let scope = format!("{}.{}", class_name, sanitize(&group.raw_name)?);
                check_scope(
                    &scope,
                    group.entries.iter().map(|e| e.identifier.clone()).collect(),
                )?;

                emitter.begin_scope(ScopeKind::Class, &group.raw_name)?;
                for entry in &group.entries {
                    write_entry(&mut emitter, entry)?;
                }
                emitter.end_scope(&group.raw_name)?;
            }
        }
    }

    emitter.end_scope(class_name)?;
    emitter.end_scope(options.namespace)?;
    emitter.finish()
}

fn write_entry(emitter: &mut CodeEmitter, entry: &ConstantEntry) -> Result<()> {
    match &entry.value {
        ConstantValue::Str(value) => emitter.write_string_constant(&entry.identifier, value),
        ConstantValue::Int(value) => emitter.write_integer_constant(&entry.identifier, *value),
    }
}

/// Identifiers declared directly inside the top-level class
fn top_level_names(result: &ExtractionResult) -> Result<Vec<String>> {
    result
        .items
        .iter()
        .map(|item| match item {
            Item::Constant(entry) => Ok(entry.identifier.clone()),
            Item::Group(group) => sanitize(&group.raw_name),
        })
        .collect()
}

/// Reject repeated identifiers, and members named like the enclosing class
fn check_scope(scope: &str, names: Vec<String>) -> Result<()> {
    let enclosing = scope.rsplit('.').next().unwrap_or(scope);
    let mut seen = HashSet::new();
    for name in names {
        if name == enclosing || !seen.insert(name.clone()) {
            return Err(Error::DuplicateIdentifier {
                identifier: name,
                scope: scope.to_string(),
            });
        }
    }
    Ok(())
}
