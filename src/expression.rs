//! Parameter-reference substitution over dataset connection shapes.
//!
//! Dataset `typeProperties` subtrees reference their declared parameters in
//! two textual forms, `@dataset().NAME` and `@{dataset().NAME}`, either
//! directly inside string leaves or inside Expression wrapper objects
//! (`{ "value": "...", "type": "Expression" }`). Substitution rewrites every
//! reference with the call-site value for that parameter and unwraps
//! Expression objects once nothing dynamic remains in them.
//!
//! The rewrite is best-effort by contract: references to parameters that are
//! absent or null stay in the text exactly as written, and malformed
//! expressions are never an error.

use crate::error::TransformWarning;
use crate::pipeline::JsonMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::warn;

static WRAPPED_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@\{dataset\(\)\.([A-Za-z_][A-Za-z0-9_]*)\}").expect("wrapped pattern is valid")
});

static BARE_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@dataset\(\)\.([A-Za-z_][A-Za-z0-9_]*)").expect("bare pattern is valid")
});

static GLOBAL_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@\{?pipeline\(\)\.globalParameters\.([A-Za-z_][A-Za-z0-9_]*)")
        .expect("global pattern is valid")
});

/// Substitutes every dataset-parameter reference in `subtree` with its value
/// from `parameters`, returning a new tree. The input is never mutated.
///
/// Convenience wrapper over [`Substituter`] for callers that do not need the
/// warning report.
pub fn substitute_parameters(subtree: &Value, parameters: &JsonMap) -> Value {
    Substituter::new(parameters).apply(subtree)
}

/// A single substitution pass over one subtree with one parameter map.
///
/// Collects a warning for every null-valued parameter it had to leave
/// unresolved; retrieve them with [`Substituter::finish`].
pub struct Substituter<'a> {
    parameters: &'a JsonMap,
    warnings: Vec<TransformWarning>,
}

impl<'a> Substituter<'a> {
    pub fn new(parameters: &'a JsonMap) -> Self {
        Self {
            parameters,
            warnings: Vec::new(),
        }
    }

    /// Recursively rewrites a subtree, returning a new value.
    pub fn apply(&mut self, value: &Value) -> Value {
        match value {
            Value::Object(map) if is_expression_object(map) => self.apply_expression_object(map),
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, child)| (key.clone(), self.apply(child)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(|item| self.apply(item)).collect()),
            Value::String(text) => Value::String(self.replace_references(text)),
            other => other.clone(),
        }
    }

    /// Consumes the substituter, yielding the warnings it accumulated.
    pub fn finish(self) -> Vec<TransformWarning> {
        self.warnings
    }

    /// Rewrites the text of an Expression wrapper. If the result still looks
    /// dynamic it stays wrapped; otherwise the wrapper collapses to a plain
    /// string at that position.
    fn apply_expression_object(&mut self, map: &JsonMap) -> Value {
        let raw = map.get("value").and_then(Value::as_str).unwrap_or_default();
        let replaced = self.replace_references(raw);
        if still_dynamic(&replaced) {
            let mut wrapped = map.clone();
            wrapped.insert("value".to_string(), Value::String(replaced));
            Value::Object(wrapped)
        } else {
            Value::String(replaced)
        }
    }

    fn replace_references(&mut self, text: &str) -> String {
        let pass = Self::replace_with(self.parameters, &mut self.warnings, &WRAPPED_REFERENCE, text);
        Self::replace_with(self.parameters, &mut self.warnings, &BARE_REFERENCE, &pass)
    }

    fn replace_with(
        parameters: &JsonMap,
        warnings: &mut Vec<TransformWarning>,
        pattern: &Regex,
        text: &str,
    ) -> String {
        pattern
            .replace_all(text, |caps: &Captures| {
                let name = &caps[1];
                match parameters.get(name) {
                    None => caps[0].to_string(),
                    Some(Value::Null) => {
                        warn!(
                            parameter = name,
                            "dataset parameter is null; expression left unresolved"
                        );
                        warnings.push(TransformWarning::NullParameterValue {
                            parameter: name.to_string(),
                        });
                        caps[0].to_string()
                    }
                    Some(value) => rendered(value).unwrap_or_else(|| caps[0].to_string()),
                }
            })
            .into_owned()
    }
}

/// The replacement text for one parameter value: Expression wrappers splice
/// in their inner text, strings are used as-is, and other literals are
/// stringified. Values with no sensible textual form yield `None`.
fn rendered(value: &Value) -> Option<String> {
    if let Some(map) = value.as_object() {
        if is_expression_object(map) {
            return map.get("value").and_then(Value::as_str).map(str::to_string);
        }
        return None;
    }
    Some(match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

/// An Expression wrapper is an object tagged `"type": "Expression"` whose
/// `value` is the expression text.
fn is_expression_object(map: &JsonMap) -> bool {
    map.get("type").and_then(Value::as_str) == Some("Expression")
        && map.get("value").is_some_and(Value::is_string)
}

// The exact "fully resolved" heuristic the Fabric deployment path expects:
// a substring check, not an expression grammar.
fn still_dynamic(text: &str) -> bool {
    text.contains("@dataset") || text.contains("@{")
}

/// Collects the names of every `@pipeline().globalParameters.NAME` reference
/// in a subtree, in sorted order.
pub fn global_parameter_names(subtree: &Value) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    collect_global_names(subtree, &mut names);
    names
}

fn collect_global_names(value: &Value, names: &mut BTreeSet<String>) {
    match value {
        Value::String(text) => {
            for caps in GLOBAL_REFERENCE.captures_iter(text) {
                names.insert(caps[1].to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_global_names(item, names);
            }
        }
        Value::Object(map) => {
            for child in map.values() {
                collect_global_names(child, names);
            }
        }
        _ => {}
    }
}
