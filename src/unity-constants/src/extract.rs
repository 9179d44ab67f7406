//! Extractors turning raw project data into constants, one per domain.

use std::path::Path;

use tracing::debug;

use crate::domain::Domain;
use crate::error::Result;
use crate::hash::HashAlgorithm;
use crate::model::{dedup_first, ConstantEntry, ExtractionResult, ScopeGroup};
use crate::source::ProjectSource;

/// Run the extractor for `domain`
pub fn extract(
    domain: Domain,
    source: &dyn ProjectSource,
    hash: HashAlgorithm,
) -> Result<ExtractionResult> {
    let result = match domain {
        Domain::Scenes => scenes(source),
        Domain::Tags => tags(source),
        Domain::Layers => layers(source),
        Domain::SortingLayers => sorting_layers(source),
        Domain::InputAxes => input_axes(source),
        Domain::AudioMixerParameters => audio_mixer_parameters(source),
        Domain::AnimatorParameters => animator_parameters(source, hash),
    }?;
    debug!("Extracted {} constant(s) for {}", result.constant_count(), domain);
    Ok(result)
}

/// Scene file stem = build index
pub fn scenes(source: &dyn ProjectSource) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::new(Domain::Scenes);
    for (index, scene) in source.scenes()?.iter().enumerate() {
        let name = Path::new(&scene.path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        result.push_constant(ConstantEntry::integer(&name, index as i32)?);
    }
    Ok(result)
}

/// Tag = tag text
pub fn tags(source: &dyn ProjectSource) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::new(Domain::Tags);
    for tag in dedup_first(source.tags()?) {
        result.push_constant(ConstantEntry::string(&tag, tag.as_str())?);
    }
    Ok(result)
}

/// Layer name plus `<Name>Mask` bitmask for each named slot
pub fn layers(source: &dyn ProjectSource) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::new(Domain::Layers);
    for (index, slot) in source.layers()?.iter().enumerate() {
        let Some(name) = slot.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        let Some(mask) = layer_mask(index) else {
            break;
        };
        result.push_constant(ConstantEntry::string(name, name)?);
        result.push_constant(ConstantEntry::integer(&format!("{}Mask", name), mask)?);
    }
    Ok(result)
}

/// Bitmask selecting a single layer; slot 31 is the sign bit.
///
/// Returns `None` for an index outside the 32 layer slots.
pub fn layer_mask(index: usize) -> Option<i32> {
    u32::try_from(index)
        .ok()
        .and_then(|shift| 1i32.checked_shl(shift))
}

/// Sorting layer name = unique id
pub fn sorting_layers(source: &dyn ProjectSource) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::new(Domain::SortingLayers);
    for layer in source.sorting_layers()? {
        result.push_constant(ConstantEntry::integer(&layer.name, layer.id)?);
    }
    Ok(result)
}

/// Axis name = axis name, first definition wins
pub fn input_axes(source: &dyn ProjectSource) -> Result<ExtractionResult> {
    let mut result = ExtractionResult::new(Domain::InputAxes);
    for axis in dedup_first(source.input_axes()?) {
        result.push_constant(ConstantEntry::string(&axis, axis.as_str())?);
    }
    Ok(result)
}

/// One nested class per mixer holding its exposed parameter names
pub fn audio_mixer_parameters(source: &dyn ProjectSource) -> Result<ExtractionResult> {
    let mixers = source
        .audio_mixers()?
        .into_iter()
        .map(|m| (m.asset_name, m.exposed_parameter_names));

    let mut result = ExtractionResult::new(Domain::AudioMixerParameters);
    for (asset, params) in merge_by_asset(mixers) {
        let entries = params
            .iter()
            .map(|p| ConstantEntry::string(p, p.as_str()))
            .collect::<Result<Vec<_>>>()?;
        result.push_group(ScopeGroup {
            raw_name: asset,
            entries,
        });
    }
    Ok(result)
}

/// One nested class per animator controller with a name and hash per parameter
pub fn animator_parameters(
    source: &dyn ProjectSource,
    hash: HashAlgorithm,
) -> Result<ExtractionResult> {
    let controllers = source
        .animator_controllers()?
        .into_iter()
        .map(|c| (c.asset_name, c.parameter_names));

    let mut result = ExtractionResult::new(Domain::AnimatorParameters);
    for (asset, params) in merge_by_asset(controllers) {
        let mut entries = Vec::with_capacity(params.len() * 2);
        for param in &params {
            entries.push(ConstantEntry::string(param, param.as_str())?);
            entries.push(ConstantEntry::integer(
                &format!("{}Hash", param),
                hash.hash(param),
            )?);
        }
        result.push_group(ScopeGroup {
            raw_name: asset,
            entries,
        });
    }
    Ok(result)
}

/// Merge assets sharing a name, keeping first-seen order of assets and names
fn merge_by_asset<I>(assets: I) -> Vec<(String, Vec<String>)>
where
    I: IntoIterator<Item = (String, Vec<String>)>,
{
    let mut merged: Vec<(String, Vec<String>)> = Vec::new();
    for (asset, names) in assets {
        match merged.iter_mut().find(|(existing, _)| *existing == asset) {
            Some((_, all)) => all.extend(names),
            None => merged.push((asset, names)),
        }
    }

    merged
        .into_iter()
        .map(|(asset, names)| (asset, dedup_first(names)))
        .collect()
}
