//! Per-locale dictionary persistence.
//!
//! Each locale is stored as one JSON document under the messages root,
//! mapping canonical key to `{ "params": [...], "body": "..." }`. Entries
//! are written in insertion order (serde_json's `preserve_order` feature
//! keeps load order stable too), so dictionary files diff cleanly.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::dictionary::{Dictionary, TemplateDefinition};

pub struct DictionaryStore {
    root: PathBuf,
}

impl DictionaryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File path for a locale's dictionary.
    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.root.join(format!("{locale}.json"))
    }

    /// Load the dictionary for `locale`.
    ///
    /// A missing file is not an error: it yields an empty dictionary. Any
    /// other I/O or parse failure propagates.
    pub fn load(&self, locale: &str) -> Result<Dictionary> {
        let path = self.path_for(locale);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Dictionary::new()),
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read dictionary file: {}", path.display())
                });
            }
        };

        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse dictionary file: {}", path.display()))?;
        let Value::Object(map) = value else {
            bail!(
                "Root of dictionary file must be an object: {}",
                path.display()
            );
        };

        let mut dictionary = Dictionary::new();
        for (key, entry) in map {
            let definition: TemplateDefinition =
                serde_json::from_value(entry).with_context(|| {
                    format!("Invalid entry for key \"{}\" in {}", key, path.display())
                })?;
            dictionary.insert(key, definition);
        }
        Ok(dictionary)
    }

    /// Save the dictionary for `locale`, creating the messages root if
    /// needed. Pretty-printed with a trailing newline.
    pub fn save(&self, locale: &str, dictionary: &Dictionary) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create directory: {}", self.root.display()))?;

        let mut map = Map::new();
        for (key, definition) in dictionary.iter() {
            let entry = serde_json::to_value(definition)
                .with_context(|| format!("Failed to serialize entry for key \"{key}\""))?;
            map.insert(key.clone(), entry);
        }

        let content = serde_json::to_string_pretty(&Value::Object(map))
            .context("Failed to serialize dictionary")?;
        let path = self.path_for(locale);
        fs::write(&path, format!("{content}\n"))
            .with_context(|| format!("Failed to write dictionary file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn def(params: &[&str], body: &str) -> TemplateDefinition {
        TemplateDefinition::new(params.iter().map(|p| p.to_string()).collect(), body)
    }

    #[test]
    fn test_load_missing_locale_returns_empty_dictionary() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path());

        let dictionary = store.load("fr").unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path());

        let mut dictionary = Dictionary::new();
        dictionary.insert("Hello ${x1}".to_string(), def(&["x1"], "Hello ${x1}"));
        dictionary.insert("Sign out".to_string(), def(&[], "Sign out"));

        store.save("en", &dictionary).unwrap();
        let loaded = store.load("en").unwrap();
        assert_eq!(loaded, dictionary);
    }

    #[test]
    fn test_order_survives_round_trip() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path());

        let mut dictionary = Dictionary::new();
        for key in ["zebra", "apple", "mango"] {
            dictionary.insert(key.to_string(), def(&[], key));
        }

        store.save("en", &dictionary).unwrap();
        let loaded = store.load("en").unwrap();
        let keys: Vec<&String> = loaded.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_save_creates_messages_root() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path().join("messages"));

        store.save("en", &Dictionary::new()).unwrap();
        assert!(store.path_for("en").exists());
    }

    #[test]
    fn test_load_rejects_non_object_root() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path());
        fs::write(store.path_for("en"), "[1, 2, 3]\n").unwrap();

        assert!(store.load("en").is_err());
    }

    #[test]
    fn test_load_rejects_malformed_entry() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path());
        fs::write(store.path_for("en"), r#"{"key": "just a string"}"#).unwrap();

        assert!(store.load("en").is_err());
    }

    #[test]
    fn test_saved_file_ends_with_newline() {
        let dir = tempdir().unwrap();
        let store = DictionaryStore::new(dir.path());

        let mut dictionary = Dictionary::new();
        dictionary.insert("Sign out".to_string(), def(&[], "Sign out"));
        store.save("en", &dictionary).unwrap();

        let content = fs::read_to_string(store.path_for("en")).unwrap();
        assert!(content.ends_with('\n'));
    }
}
