//! Base-dictionary synchronization: appends freshly extracted keys to the
//! base locale's dictionary without ever touching existing entries.

use anyhow::Result;

use crate::dictionary::Dictionary;
use crate::normalize::Normalized;
use crate::store::DictionaryStore;

/// Outcome of one base synchronization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    /// Keys appended in this pass.
    pub added: usize,
    /// Total keys in the base dictionary after the pass.
    pub total: usize,
}

/// Append every normalized pair whose key is absent from `dictionary`.
///
/// Existing entries keep their order and their definitions; new keys are
/// appended in extraction order. Returns the number of keys added.
pub fn merge_new(dictionary: &mut Dictionary, normalized: &[Normalized]) -> usize {
    let mut added = 0;
    for entry in normalized {
        if dictionary.contains_key(&entry.key) {
            continue;
        }
        dictionary.insert(entry.key.clone(), entry.definition.clone());
        added += 1;
    }
    added
}

/// Load the base dictionary, merge the extracted set, and persist.
///
/// Idempotent: when nothing new was found, the file is not rewritten, so a
/// second run with the same extracted set leaves it byte-for-byte unchanged.
pub fn sync_base(
    store: &DictionaryStore,
    locale: &str,
    normalized: &[Normalized],
) -> Result<SyncSummary> {
    let mut dictionary = store.load(locale)?;
    let added = merge_new(&mut dictionary, normalized);
    if added > 0 {
        store.save(locale, &dictionary)?;
    }
    Ok(SyncSummary {
        added,
        total: dictionary.len(),
    })
}
