//! Translation orchestration: diffs a target locale's dictionary against
//! the base dictionary and fills every gap through the provider.
//!
//! Provider calls within one locale run strictly sequentially to bound the
//! request rate; the target file is written once, after all missing keys
//! for that locale succeeded. The first provider failure aborts the
//! remaining keys for that locale and leaves its file untouched — a re-run
//! re-diffs against the unmodified dictionary and resumes from there.

mod provider;

pub use provider::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiTranslator, Translator};

use anyhow::{Context, Result};

use crate::dictionary::{Dictionary, TemplateDefinition};
use crate::store::DictionaryStore;

/// Outcome of filling one target locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFill {
    /// Keys newly translated in this run.
    pub translated: usize,
    /// Total keys in the target dictionary afterwards.
    pub total: usize,
}

/// Fill every key present in `base` but absent from the target locale's
/// dictionary, in base order, then persist the target dictionary.
pub async fn fill_locale<T: Translator>(
    store: &DictionaryStore,
    translator: &T,
    base: &Dictionary,
    target_locale: &str,
) -> Result<LocaleFill> {
    let mut target = store.load(target_locale)?;

    let missing: Vec<(&String, &TemplateDefinition)> = base
        .iter()
        .filter(|(key, _)| !target.contains_key(key.as_str()))
        .collect();

    if missing.is_empty() {
        return Ok(LocaleFill {
            translated: 0,
            total: target.len(),
        });
    }

    for (key, definition) in &missing {
        let translated_body = translator
            .translate(&definition.body, target_locale)
            .await
            .with_context(|| format!("Failed to translate \"{key}\" into {target_locale}"))?;
        target.insert(
            (*key).clone(),
            TemplateDefinition::new(definition.params.clone(), translated_body),
        );
    }

    store.save(target_locale, &target)?;
    Ok(LocaleFill {
        translated: missing.len(),
        total: target.len(),
    })
}
