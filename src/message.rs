use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::Overlay;
use crate::error::{Error, Result};

/// Loads a template and applies `overlay` to it.
pub fn build_message(path: &Path, overlay: &Overlay) -> Result<Value> {
    let mut doc = load_template(path)?;
    apply_overlay(&mut doc, overlay).map_err(|reason| Error::template(path, reason))?;
    Ok(doc)
}

pub fn load_template(path: &Path) -> Result<Value> {
    debug!(path = %path.display(), "loading message template");
    let content = std::fs::read_to_string(path).map_err(|e| Error::template(path, e))?;
    let doc: Value = serde_json::from_str(&content).map_err(|e| Error::template(path, e))?;
    match doc.get("message") {
        Some(Value::Object(_)) => Ok(doc),
        Some(_) => Err(Error::template(path, "`message` is not an object")),
        None => Err(Error::template(path, "missing top-level `message`")),
    }
}

/// Sets the supplied overlay fields and leaves everything else alone.
pub fn apply_overlay(doc: &mut Value, overlay: &Overlay) -> Result<(), String> {
    let message = doc
        .get_mut("message")
        .and_then(Value::as_object_mut)
        .ok_or("missing top-level `message`")?;

    if let Some(token) = supplied(&overlay.device_token) {
        message.insert("token".into(), Value::String(token.into()));
    }

    let fields = [
        ("title", supplied(&overlay.title)),
        ("body", supplied(&overlay.body)),
        ("image", supplied(&overlay.image)),
    ];
    if fields.iter().all(|(_, v)| v.is_none()) {
        return Ok(());
    }

    let notification = message
        .entry("notification")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or("`message.notification` is not an object")?;
    for (key, value) in fields {
        if let Some(value) = value {
            notification.insert(key.into(), Value::String(value.into()));
        }
    }
    Ok(())
}

fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
