//! In-memory preference document

use serde_json::{Map, Value};

use crate::error::{Result, SnipsyncError};

const DEVTOOLS_KEY: &str = "devtools";
const PREFERENCES_KEY: &str = "preferences";
const SNIPPETS_KEY: &str = "scriptSnippets";

/// Parsed preference file
///
/// Only `devtools.preferences.scriptSnippets` is interpreted. Every other
/// key is carried through untouched, in its original order.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceDocument {
    root: Map<String, Value>,
}

impl PreferenceDocument {
    /// Wrap a parsed JSON value
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Structure`] if the root is not an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(SnipsyncError::Structure(format!(
                "expected a JSON object at the root, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Parse a document from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Parse`] for malformed JSON and
    /// [`SnipsyncError::Structure`] for a non-object root.
    pub fn parse(text: &str) -> Result<Self> {
        let value = serde_json::from_str(text)
            .map_err(|e| SnipsyncError::parse("preference file", e))?;
        Self::from_value(value)
    }

    /// Serialize to compact JSON
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.root)
            .map_err(|e| SnipsyncError::parse("preference document for writing", e))
    }

    /// Raw embedded snippet list, if the document has one
    ///
    /// Returns `Ok(None)` when any segment of the path is missing or the
    /// field holds an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Structure`] if the field exists but is not a
    /// string.
    pub fn script_snippets(&self) -> Result<Option<&str>> {
        let field = self
            .root
            .get(DEVTOOLS_KEY)
            .and_then(|devtools| devtools.get(PREFERENCES_KEY))
            .and_then(|prefs| prefs.get(SNIPPETS_KEY));

        match field {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(SnipsyncError::Structure(format!(
                "{DEVTOOLS_KEY}.{PREFERENCES_KEY}.{SNIPPETS_KEY} must be a string, found {}",
                kind_of(other)
            ))),
        }
    }

    /// Replace the embedded snippet list with `serialized`
    ///
    /// The `devtools.preferences` object must already exist; missing parents
    /// are never created.
    ///
    /// # Errors
    ///
    /// Returns [`SnipsyncError::Structure`] if the parent object is missing.
    pub fn set_script_snippets(&mut self, serialized: String) -> Result<()> {
        let prefs = self
            .root
            .get_mut(DEVTOOLS_KEY)
            .and_then(|devtools| devtools.get_mut(PREFERENCES_KEY))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                SnipsyncError::Structure(format!(
                    "missing object {DEVTOOLS_KEY}.{PREFERENCES_KEY}"
                ))
            })?;

        prefs.insert(SNIPPETS_KEY.to_string(), Value::String(serialized));
        Ok(())
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
