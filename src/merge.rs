//! Fragment collection and deduplication, the core of the pipeline.

use std::collections::HashSet;
use tracing::debug;

use crate::artifact::ArtifactStore;
use crate::error::MergeError;
use crate::fragment::AbiFragment;

/// Concatenate the ABI fragments of every unit in `units`, in list order,
/// each unit's fragments in artifact order. No deduplication happens here.
///
/// An empty unit list yields an empty vector. Any loader error aborts the
/// whole collection.
pub fn collect(store: &ArtifactStore, units: &[String]) -> Result<Vec<AbiFragment>, MergeError> {
    let mut fragments: Vec<AbiFragment> = Vec::new();
    for unit in units {
        let artifact = store.load(unit)?;
        fragments.extend(artifact.abi);
    }
    Ok(fragments)
}

/// Reduce `fragments` to one representative per identity key, keeping the
/// first occurrence of each key and dropping every later one wholesale
/// (first-wins, never merged field-by-field). Relative order of the
/// survivors is unchanged.
///
/// The identity key is the (`name`, `type`) pair, so overloads that differ
/// only in parameter types collapse to the earliest declaration; see
/// [`crate::fragment::IdentityKey`].
pub fn deduplicate(fragments: Vec<AbiFragment>) -> Vec<AbiFragment> {
    let mut seen = HashSet::new();
    fragments
        .into_iter()
        .filter(|fragment| seen.insert(fragment.identity_key()))
        .collect()
}

/// Run the full merge: collect every unit's fragments in order, then
/// deduplicate first-wins.
pub fn merge(store: &ArtifactStore, units: &[String]) -> Result<Vec<AbiFragment>, MergeError> {
    let collected = collect(store, units)?;
    let total = collected.len();
    let merged = deduplicate(collected);
    debug!(
        units = units.len(),
        collected = total,
        merged = merged.len(),
        "merged ABI fragments"
    );
    Ok(merged)
}
