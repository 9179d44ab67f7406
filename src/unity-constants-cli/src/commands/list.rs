//! Listing command handler

use anyhow::{Context, Result};
use unity_constants::{ConstantEntry, Domain, ExtractionResult, Item};

use super::Session;

/// Handle `list <domain>`
pub fn handle(session: &Session, domain: Domain) -> Result<()> {
    let result = session
        .generator()
        .extract(domain)
        .with_context(|| format!("Failed to read {}", domain))?;

    for line in format_listing(&result) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per constant, groups as headers with indented members
pub fn format_listing(result: &ExtractionResult) -> Vec<String> {
    let mut lines = Vec::new();
    for item in &result.items {
        match item {
            Item::Constant(entry) => lines.push(format_entry(entry)),
            Item::Group(group) => {
                lines.push(format!("[{}]", group.raw_name));
                lines.extend(
                    group
                        .entries
                        .iter()
                        .map(|entry| format!("  {}", format_entry(entry))),
                );
            }
        }
    }

    if lines.is_empty() {
        lines.push(format!("(no {} found)", result.domain));
    }
    lines
}

fn format_entry(entry: &ConstantEntry) -> String {
    format!("{} = {}", entry.identifier, entry.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unity_constants::ScopeGroup;

    #[test]
    fn test_format_flat() {
        let mut result = ExtractionResult::new(Domain::Scenes);
        result.push_constant(ConstantEntry::integer("Main Menu", 0).unwrap());
        result.push_constant(ConstantEntry::string("Tag", "Tag").unwrap());
        assert_eq!(format_listing(&result), vec!["MainMenu = 0", "Tag = \"Tag\""]);
    }

    #[test]
    fn test_format_groups() {
        let mut result = ExtractionResult::new(Domain::AudioMixerParameters);
        result.push_group(ScopeGroup {
            raw_name: "Master Mixer".to_string(),
            entries: vec![ConstantEntry::string("Volume", "Volume").unwrap()],
        });
        assert_eq!(
            format_listing(&result),
            vec!["[Master Mixer]", "  Volume = \"Volume\""]
        );
    }

    #[test]
    fn test_format_empty() {
        let result = ExtractionResult::new(Domain::SortingLayers);
        assert_eq!(format_listing(&result), vec!["(no sorting layers found)"]);
    }
}
