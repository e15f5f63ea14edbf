//! JSON file outline source

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::OnceCell;

use super::OutlineSource;
use crate::error::{DestinationResolutionError, OutlineFetchError};
use crate::node::OutlineNode;

/// On-disk layout read by [`JsonFileSource`].
#[derive(Debug, Default, Deserialize)]
struct JsonDocument {
    /// `null`/missing for no outline, otherwise an array of entries.
    #[serde(default)]
    outline: Value,
    /// Named destinations.
    #[serde(default)]
    destinations: HashMap<String, Value>,
}

/// An outline source reading an exported outline from a JSON file.
///
/// ```json
/// {
///   "outline": [
///     { "title": "Ch1", "dest": "ch1", "items": [{ "title": "1.1", "dest": [4, "XYZ", 0, 700, null] }] },
///     { "title": "Ch2", "dest": "ch2", "bold": true }
///   ],
///   "destinations": { "ch1": [0, "Fit"], "ch2": [9, "Fit"] }
/// }
/// ```
///
/// A string destination is a name looked up in `destinations`; an array is an
/// explicit destination and resolves to itself. Entries with an empty title
/// are rejected as malformed. The file is read once, on
/// first use.
#[derive(Debug)]
pub struct JsonFileSource {
    path: PathBuf,
    document: OnceCell<JsonDocument>,
}

impl JsonFileSource {
    /// Creates a source for the file at `path`. Nothing is read yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            document: OnceCell::new(),
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn document(&self) -> Result<&JsonDocument, OutlineFetchError> {
        self.document
            .get_or_try_init(|| async {
                log::debug!("Reading outline file {:?}", self.path);
                let content = tokio::fs::read_to_string(&self.path).await?;
                let document: JsonDocument = serde_json::from_str(&content)?;
                Ok::<_, OutlineFetchError>(document)
            })
            .await
    }
}

#[async_trait]
impl OutlineSource for JsonFileSource {
    type Destination = Value;
    type Location = Value;

    async fn fetch_outline(&self) -> Result<Option<Vec<OutlineNode<Value>>>, OutlineFetchError> {
        let document = self.document().await?;
        match &document.outline {
            Value::Null => Ok(None),
            Value::Array(_) => {
                let items: Vec<OutlineNode<Value>> =
                    serde_json::from_value(document.outline.clone())?;
                check_titles(&items, &mut Vec::new())?;
                Ok(Some(items))
            }
            other => Err(OutlineFetchError::unsupported(format!(
                "expected an array of entries, got {}",
                json_kind(other)
            ))),
        }
    }

    async fn resolve_destination(
        &self,
        destination: &Value,
    ) -> Result<Value, DestinationResolutionError> {
        let document = self.document().await.map_err(|err| match err {
            OutlineFetchError::Io(io) => DestinationResolutionError::Io(io),
            other => DestinationResolutionError::invalid(other.to_string()),
        })?;

        match destination {
            Value::String(name) => document
                .destinations
                .get(name)
                .cloned()
                .ok_or_else(|| DestinationResolutionError::unresolvable(name.clone())),
            Value::Array(_) => Ok(destination.clone()),
            other => Err(DestinationResolutionError::invalid(format!(
                "expected a name or an explicit destination, got {}",
                json_kind(other)
            ))),
        }
    }
}

/// Entries must have a non-empty title.
fn check_titles(items: &[OutlineNode<Value>], path: &mut Vec<usize>) -> Result<(), OutlineFetchError> {
    for (index, item) in items.iter().enumerate() {
        path.push(index);
        if item.title.is_empty() {
            let at = path.iter().map(usize::to_string).collect::<Vec<_>>().join(".");
            return Err(OutlineFetchError::malformed(format!("entry {} has an empty title", at)));
        }
        check_titles(&item.children, path)?;
        path.pop();
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
