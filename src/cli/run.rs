//! Pipeline orchestration for the CLI.
//!
//! Order matters: the base dictionary is merged and persisted before any
//! translation task starts reading it, so there is only ever one writer of
//! the base dictionary. Target locales then run as independent cooperative
//! tasks; within each locale, provider calls are strictly sequential.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use futures::future::join_all;

use super::args::Arguments;
use super::exit_status::ExitStatus;
use crate::config::{Config, load_config};
use crate::dictionary::Dictionary;
use crate::extract::Extractor;
use crate::normalize::{Normalized, normalize};
use crate::reporter::{FAILURE_MARK, SUCCESS_MARK, print_warning};
use crate::store::DictionaryStore;
use crate::sync::sync_base;
use crate::translate::{OpenAiTranslator, fill_locale};

/// Apply CLI overrides on top of the loaded config.
fn resolve_config(mut config: Config, args: &Arguments) -> Config {
    if let Some(dir) = &args.dir {
        config.source_root = dir.to_string_lossy().into_owned();
    }
    if let Some(from) = &args.from {
        config.base_locale = from.clone();
    }
    if !args.to.is_empty() {
        config.target_locales = args
            .to
            .iter()
            .map(|locale| locale.trim().to_string())
            .filter(|locale| !locale.is_empty())
            .collect();
    }
    if let Some(messages_root) = &args.messages_root {
        config.messages_root = messages_root.to_string_lossy().into_owned();
    }
    config
}

/// Per-locale gap count against the base dictionary.
struct LocaleGap {
    locale: String,
    missing: usize,
    total: usize,
}

fn locale_gaps(
    store: &DictionaryStore,
    base: &Dictionary,
    locales: &[String],
) -> Result<Vec<LocaleGap>> {
    let mut gaps = Vec::with_capacity(locales.len());
    for locale in locales {
        let target = store.load(locale)?;
        let missing = base
            .iter()
            .filter(|(key, _)| !target.contains_key(key.as_str()))
            .count();
        gaps.push(LocaleGap {
            locale: locale.clone(),
            missing,
            total: target.len(),
        });
    }
    Ok(gaps)
}

pub async fn run(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose;
    let loaded = load_config(Path::new("."))?;
    if verbose && loaded.from_file {
        print_warning("Using configuration from .ttsyncrc.json");
    }
    let config = resolve_config(loaded.config, &args);

    let extractor = Extractor::new(config.extension.as_str());
    let scan = extractor.scan_dir(Path::new(&config.source_root))?;
    let normalized: Vec<Normalized> = scan.occurrences.iter().map(|raw| normalize(raw)).collect();

    let store = DictionaryStore::new(&config.messages_root);
    let summary = sync_base(&store, &config.base_locale, &normalized)?;
    println!(
        "{} Extracted {} strings from {} files in {} ({} new keys in {})",
        SUCCESS_MARK.green(),
        scan.occurrences.len(),
        scan.files_scanned,
        config.source_root,
        summary.added,
        config.base_locale
    );

    // Re-read so translation diffs against exactly what was persisted.
    let base = store.load(&config.base_locale)?;
    if base.is_empty() {
        println!(
            "{} Base dictionary is empty, nothing to translate",
            SUCCESS_MARK.green()
        );
        return Ok(ExitStatus::Success);
    }

    // The provider credential is only required when something actually
    // needs translating; a no-op re-run succeeds without it.
    let gaps = locale_gaps(&store, &base, &config.target_locales)?;
    if gaps.iter().all(|gap| gap.missing == 0) {
        for gap in &gaps {
            println!(
                "{} {}: up to date ({} keys)",
                SUCCESS_MARK.green(),
                gap.locale,
                gap.total
            );
        }
        return Ok(ExitStatus::Success);
    }

    let translator = OpenAiTranslator::from_env()?;
    let tasks = config
        .target_locales
        .iter()
        .map(|locale| fill_locale(&store, &translator, &base, locale));
    let results = join_all(tasks).await;

    let mut failed = false;
    for (locale, result) in config.target_locales.iter().zip(results) {
        match result {
            Ok(fill) if fill.translated == 0 => {
                println!(
                    "{} {}: up to date ({} keys)",
                    SUCCESS_MARK.green(),
                    locale,
                    fill.total
                );
            }
            Ok(fill) => {
                println!(
                    "{} {}: translated {} missing keys ({} total)",
                    SUCCESS_MARK.green(),
                    locale,
                    fill.translated,
                    fill.total
                );
                if verbose {
                    println!("  wrote {}", store.path_for(locale).display());
                }
            }
            Err(err) => {
                failed = true;
                eprintln!("{} {}: {:#}", FAILURE_MARK.red(), locale, err);
            }
        }
    }

    Ok(if failed {
        ExitStatus::Error
    } else {
        ExitStatus::Success
    })
}
