//! Render-time lookup for tagged template invocations.
//!
//! Given the literal parts and interpolated values of a tagged template
//! call, reconstructs the canonical key (each interpolation site becomes
//! `${x1}`, `${x2}`, ... positionally) and renders the matching dictionary
//! entry. Falls back to the literal interpolated string when the key is
//! absent or the entry's arity does not match. The dictionary is passed in
//! explicitly; locale selection is the caller's concern.

use crate::dictionary::Dictionary;

/// Look up and render a tagged template call against `dictionary`.
///
/// `strings` are the literal parts around the interpolation sites, so
/// ``t`Hello ${name}!` `` arrives as `strings = ["Hello ", "!"]`,
/// `values = [name]`.
pub fn lookup<S: AsRef<str>>(dictionary: &Dictionary, strings: &[&str], values: &[S]) -> String {
    let key = reconstruct_key(strings, values.len());
    if let Some(definition) = dictionary.get(&key)
        && let Ok(rendered) = definition.render(values)
    {
        return rendered;
    }
    interpolate_literal(strings, values)
}

fn reconstruct_key(strings: &[&str], value_count: usize) -> String {
    let mut key = String::new();
    for (i, part) in strings.iter().enumerate() {
        key.push_str(part);
        if i < value_count {
            key.push_str(&format!("${{x{}}}", i + 1));
        }
    }
    key
}

fn interpolate_literal<S: AsRef<str>>(strings: &[&str], values: &[S]) -> String {
    let mut out = String::new();
    for (i, part) in strings.iter().enumerate() {
        out.push_str(part);
        if let Some(value) = values.get(i) {
            out.push_str(value.as_ref());
        }
    }
    out
}
