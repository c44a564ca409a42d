//! Dictionary types: template definitions and the per-locale key map.
//!
//! A `Dictionary` maps a canonical key (the placeholder-normalized template
//! text) to a `TemplateDefinition`. Insertion order is preserved so that
//! serialized dictionaries stay diffable across runs.

use std::collections::HashMap;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// A canonical template body plus its ordered positional parameter names.
///
/// Invariant: `params.len()` equals the number of distinct placeholders in
/// `body` (enforced by the normalizer that produces definitions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub params: Vec<String>,
    pub body: String,
}

impl TemplateDefinition {
    pub fn new(params: Vec<String>, body: impl Into<String>) -> Self {
        Self {
            params,
            body: body.into(),
        }
    }

    /// Render the template by substituting each `${param}` placeholder with
    /// the positional value at the same index.
    ///
    /// The value count must match the declared parameter count.
    pub fn render<S: AsRef<str>>(&self, values: &[S]) -> Result<String> {
        if values.len() != self.params.len() {
            bail!(
                "Template \"{}\" expects {} values, got {}",
                self.body,
                self.params.len(),
                values.len()
            );
        }

        let mut rendered = self.body.clone();
        for (param, value) in self.params.iter().zip(values) {
            rendered = rendered.replace(&format!("${{{param}}}"), value.as_ref());
        }
        Ok(rendered)
    }
}

/// Insertion-ordered mapping from canonical key to template definition for
/// exactly one locale.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dictionary {
    keys: Vec<String>,
    entries: HashMap<String, TemplateDefinition>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&TemplateDefinition> {
        self.entries.get(key)
    }

    /// Insert a definition under `key`.
    ///
    /// A new key is appended after all existing entries; an existing key
    /// keeps its position and has its definition replaced. Returns true if
    /// the key was new.
    pub fn insert(&mut self, key: String, definition: TemplateDefinition) -> bool {
        let is_new = !self.entries.contains_key(&key);
        if is_new {
            self.keys.push(key.clone());
        }
        self.entries.insert(key, definition);
        is_new
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TemplateDefinition)> {
        self.keys.iter().map(|key| (key, &self.entries[key]))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn def(params: &[&str], body: &str) -> TemplateDefinition {
        TemplateDefinition::new(params.iter().map(|p| p.to_string()).collect(), body)
    }

    #[test]
    fn test_render_substitutes_positional_values() {
        let definition = def(&["x1", "x2"], "Hello ${x1}, you have ${x2} items");
        let rendered = definition.render(&["Alice", "3"]).unwrap();
        assert_eq!(rendered, "Hello Alice, you have 3 items");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let definition = def(&["x1"], "${x1} and ${x1} again");
        let rendered = definition.render(&["echo"]).unwrap();
        assert_eq!(rendered, "echo and echo again");
    }

    #[test]
    fn test_render_arity_mismatch_is_error() {
        let definition = def(&["x1"], "Hello ${x1}");
        assert!(definition.render(&["a", "b"]).is_err());
        assert!(definition.render::<&str>(&[]).is_err());
    }

    #[test]
    fn test_render_no_placeholders() {
        let definition = def(&[], "Save changes");
        assert_eq!(definition.render::<&str>(&[]).unwrap(), "Save changes");
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut dict = Dictionary::new();
        assert!(dict.insert("b".to_string(), def(&[], "b")));
        assert!(dict.insert("a".to_string(), def(&[], "a")));
        assert!(dict.insert("c".to_string(), def(&[], "c")));

        let keys: Vec<&String> = dict.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_insert_existing_key_keeps_position() {
        let mut dict = Dictionary::new();
        dict.insert("a".to_string(), def(&[], "old"));
        dict.insert("b".to_string(), def(&[], "b"));
        assert!(!dict.insert("a".to_string(), def(&[], "new")));

        let entries: Vec<(&String, &TemplateDefinition)> = dict.iter().collect();
        assert_eq!(entries[0].0, "a");
        assert_eq!(entries[0].1.body, "new");
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_lookup() {
        let mut dict = Dictionary::new();
        dict.insert("Hello ${x1}".to_string(), def(&["x1"], "Hello ${x1}"));
        assert!(dict.contains_key("Hello ${x1}"));
        assert!(dict.get("Hello ${x1}").is_some());
        assert!(dict.get("missing").is_none());
    }
}
