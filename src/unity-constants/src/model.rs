//! In-memory model of one domain's constants.

use std::collections::HashSet;
use std::fmt;

use crate::domain::Domain;
use crate::error::Result;
use crate::identifier::sanitize;

/// Value carried by a generated constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantValue {
    Str(String),
    Int(i32),
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Str(s) => write!(f, "{:?}", s),
            ConstantValue::Int(i) => write!(f, "{}", i),
        }
    }
}

/// A single named constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    /// Label as it appeared in the project, kept for error reports
    pub raw_name: String,
    pub identifier: String,
    pub value: ConstantValue,
}

impl ConstantEntry {
    /// String constant whose identifier is derived from `raw_name`
    pub fn string(raw_name: &str, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            raw_name: raw_name.to_string(),
            identifier: sanitize(raw_name)?,
            value: ConstantValue::Str(value.into()),
        })
    }

    /// Integer constant whose identifier is derived from `raw_name`
    pub fn integer(raw_name: &str, value: i32) -> Result<Self> {
        Ok(Self {
            raw_name: raw_name.to_string(),
            identifier: sanitize(raw_name)?,
            value: ConstantValue::Int(value),
        })
    }
}

/// A nested class holding the constants of one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeGroup {
    pub raw_name: String,
    pub entries: Vec<ConstantEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Constant(ConstantEntry),
    Group(ScopeGroup),
}

/// Everything extracted for one domain, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub domain: Domain,
    pub items: Vec<Item>,
}

impl ExtractionResult {
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            items: Vec::new(),
        }
    }

    pub fn push_constant(&mut self, entry: ConstantEntry) {
        self.items.push(Item::Constant(entry));
    }

    pub fn push_group(&mut self, group: ScopeGroup) {
        self.items.push(Item::Group(group));
    }

    /// Top-level constants, skipping groups
    pub fn constants(&self) -> impl Iterator<Item = &ConstantEntry> {
        self.items.iter().filter_map(|item| match item {
            Item::Constant(c) => Some(c),
            Item::Group(_) => None,
        })
    }

    pub fn groups(&self) -> impl Iterator<Item = &ScopeGroup> {
        self.items.iter().filter_map(|item| match item {
            Item::Group(g) => Some(g),
            Item::Constant(_) => None,
        })
    }

    /// Total number of constants, including those inside groups
    pub fn constant_count(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                Item::Constant(_) => 1,
                Item::Group(g) => g.entries.len(),
            })
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Keep the first occurrence of each name, preserving order
pub(crate) fn dedup_first<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_constructors_sanitize() {
        let entry = ConstantEntry::string("Main Camera", "Main Camera").unwrap();
        assert_eq!(entry.identifier, "MainCamera");
        assert_eq!(entry.value, ConstantValue::Str("Main Camera".to_string()));

        let entry = ConstantEntry::integer("2D Level", 4).unwrap();
        assert_eq!(entry.identifier, "_2DLevel");
        assert_eq!(entry.value, ConstantValue::Int(4));

        assert!(ConstantEntry::string("???", "???").is_err());
    }

    #[test]
    fn test_dedup_first_keeps_order() {
        let names = ["Fire", "Jump", "Fire", "Horizontal", "Jump"]
            .iter()
            .map(|s| s.to_string());
        assert_eq!(dedup_first(names), vec!["Fire", "Jump", "Horizontal"]);
    }

    #[test]
    fn test_constant_count_includes_groups() {
        let mut result = ExtractionResult::new(Domain::AnimatorParameters);
        result.push_constant(ConstantEntry::integer("Loose", 1).unwrap());
        result.push_group(ScopeGroup {
            raw_name: "Player".to_string(),
            entries: vec![
                ConstantEntry::string("Speed", "Speed").unwrap(),
                ConstantEntry::integer("SpeedHash", 7).unwrap(),
            ],
        });
        assert_eq!(result.constant_count(), 3);
        assert_eq!(result.constants().count(), 1);
        assert_eq!(result.groups().count(), 1);
        assert!(!result.is_empty());
    }
}
