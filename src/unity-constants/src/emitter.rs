//! C# source emission with indentation and scope tracking.
//!
//! The emitter owns its indentation and a stack of open scopes, so callers
//! only say what to write. Scopes must close in reverse order of opening;
//! anything else is rejected instead of producing unbalanced braces.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::identifier::{sanitize, sanitize_namespace};

/// Marker written at the top of every generated file
pub const HEADER: &str = "// This file is automatically generated.  Changes will be overwritten.";

/// Default indentation unit
pub const DEFAULT_INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Namespace,
    Class,
}

/// Append-only writer for generated constant files
#[derive(Debug)]
pub struct CodeEmitter {
    out: String,
    unit: String,
    indent: String,
    scopes: Vec<String>,
}

impl CodeEmitter {
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            out: String::new(),
            unit: indent_unit.into(),
            indent: String::new(),
            scopes: Vec::new(),
        }
    }

    /// Current nesting depth (open scopes)
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn write_header(&mut self) {
        self.line(HEADER);
    }

    /// Open a scope. An empty name is a no-op, which is how an unset
    /// namespace is skipped.
    pub fn begin_scope(&mut self, kind: ScopeKind, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }

        let opening = match kind {
            ScopeKind::Namespace => {
                let segments: Vec<String> = sanitize_namespace(name)?
                    .split('.')
                    .map(verbatim_identifier)
                    .collect();
                format!("namespace {}", segments.join("."))
            }
            ScopeKind::Class => {
                format!("public static class {}", verbatim_identifier(&sanitize(name)?))
            }
        };
        self.line(&opening);
        self.line("{");
        self.push_indent();
        self.scopes.push(name.to_string());
        Ok(())
    }

    /// Close the innermost scope, which must be the one named `name`.
    pub fn end_scope(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }

        match self.scopes.last() {
            Some(open) if open == name => {}
            other => {
                return Err(Error::ScopeMismatch {
                    expected: other.cloned(),
                    found: name.to_string(),
                })
            }
        }

        self.scopes.pop();
        self.pop_indent();
        self.line("}");
        Ok(())
    }

    pub fn write_string_constant(&mut self, identifier: &str, value: &str) -> Result<()> {
        let identifier = verbatim_identifier(&sanitize(identifier)?);
        let line = format!(
            "public const string {} = \"{}\";",
            identifier,
            escape_string(value)
        );
        self.line(&line);
        Ok(())
    }

    pub fn write_integer_constant(&mut self, identifier: &str, value: i32) -> Result<()> {
        let identifier = verbatim_identifier(&sanitize(identifier)?);
        let line = format!("public const int {} = {};", identifier, value);
        self.line(&line);
        Ok(())
    }

    /// Return the emitted text, failing if any scope is still open
    pub fn finish(self) -> Result<String> {
        if let Some(name) = self.scopes.last() {
            return Err(Error::UnclosedScope { name: name.clone() });
        }
        Ok(self.out)
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(&self.indent);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn push_indent(&mut self) {
        self.indent.insert_str(0, &self.unit);
    }

    fn pop_indent(&mut self) {
        if self.indent.len() <= self.unit.len() {
            self.indent.clear();
        } else {
            self.indent.truncate(self.indent.len() - self.unit.len());
        }
    }
}

/// C# reserved keywords; contextual keywords are valid identifiers
const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Prefix a reserved keyword with `@` so it can be used as an identifier.
///
/// `@event` declares the identifier `event`, so collision checks keep
/// working on the unprefixed name.
pub fn verbatim_identifier(identifier: &str) -> String {
    if KEYWORDS.contains(&identifier) {
        format!("@{}", identifier)
    } else {
        identifier.to_string()
    }
}

/// Escape a value for a regular (non-verbatim) C# string literal
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                let _ = write!(escaped, "\\u{:04X}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
