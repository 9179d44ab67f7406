//! Reader for Unity's serialized YAML dialect.
//!
//! Unity writes `%YAML`/`%TAG` directives and document headers such as
//! `--- !u!78 &1` that carry the class id and file id. The text is split on
//! those headers and each document is kept as raw YAML, so objects can be
//! deserialized straight into typed structs. Names are plain scalars in
//! Unity files; deserializing them as `String` keeps `007` or `null` as
//! written instead of re-typing them as numbers or nulls.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// One serialized object from a Unity asset file
#[derive(Debug, Clone)]
pub(crate) struct UnityDocument {
    /// Numeric class id from the `!u!<id>` tag, if present
    pub class_id: Option<u32>,
    /// Top-level key naming the object type, e.g. `TagManager`
    pub type_name: String,
    text: String,
}

impl UnityDocument {
    /// Deserialize the object body stored under `type_name`
    pub(crate) fn body<T: DeserializeOwned>(&self) -> Result<T, String> {
        let mut objects: BTreeMap<String, T> =
            serde_yaml::from_str(&self.text).map_err(|e| e.to_string())?;
        objects
            .remove(&self.type_name)
            .ok_or_else(|| format!("no {} object", self.type_name))
    }
}

/// Parse every object in a Unity YAML file
pub(crate) fn parse_documents(text: &str) -> Result<Vec<UnityDocument>, String> {
    let mut documents = Vec::new();

    for (class_id, text) in split_documents(text) {
        let value: Value = serde_yaml::from_str(&text).map_err(|e| e.to_string())?;
        let Value::Mapping(map) = value else {
            continue;
        };

        for key in map.keys() {
            if let Value::String(type_name) = key {
                documents.push(UnityDocument {
                    class_id,
                    type_name: type_name.clone(),
                    text: text.clone(),
                });
            }
        }
    }

    Ok(documents)
}

/// Strip directives and split on document headers, collecting class ids
fn split_documents(text: &str) -> Vec<(Option<u32>, String)> {
    let mut documents = Vec::new();
    let mut current = (None, String::new());

    for line in text.lines() {
        if line.starts_with('%') {
            continue;
        }

        if line.starts_with("---") {
            let finished = std::mem::replace(&mut current, (class_id(line), String::new()));
            if !finished.1.trim().is_empty() {
                documents.push(finished);
            }
            continue;
        }

        current.1.push_str(line);
        current.1.push('\n');
    }

    if !current.1.trim().is_empty() {
        documents.push(current);
    }
    documents
}

fn class_id(header: &str) -> Option<u32> {
    let tag = header.split_whitespace().find(|t| t.starts_with("!u!"))?;
    tag.trim_start_matches("!u!").parse().ok()
}
