//! Key normalization: turns a raw tagged-template body into a canonical
//! dictionary key and its template definition.
//!
//! Each distinct placeholder expression (`${expr}`) is renamed to a
//! positional name (`x1`, `x2`, ...) by order of first appearance, and
//! every `${...}` span carrying the same expression collapses to the same
//! positional name. Literal text outside placeholder spans is never
//! touched, so the canonical body always renders through the exact-span
//! substitution in `TemplateDefinition::render`. The result doubles as the
//! dictionary lookup key and the template body; normalization is
//! deterministic (same raw text, same key), but differently-spelled
//! expressions are never semantically deduplicated.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::dictionary::TemplateDefinition;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{\s*([^}]+?)\s*\}").unwrap());

/// A canonical key paired with its template definition, ready to be merged
/// into a base dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub key: String,
    pub definition: TemplateDefinition,
}

pub fn normalize(raw: &str) -> Normalized {
    let mut assigned: Vec<(String, String)> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    let body = PLACEHOLDER_REGEX
        .replace_all(raw, |caps: &Captures<'_>| {
            let expr = &caps[1];
            let name = match assigned.iter().find(|(seen, _)| seen.as_str() == expr) {
                Some((_, name)) => name.clone(),
                None => {
                    let name = format!("x{}", params.len() + 1);
                    assigned.push((expr.to_string(), name.clone()));
                    params.push(name.clone());
                    name
                }
            };
            format!("${{{name}}}")
        })
        .into_owned();

    Normalized {
        key: body.clone(),
        definition: TemplateDefinition::new(params, body),
    }
}
