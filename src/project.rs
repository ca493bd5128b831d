use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

#[derive(Deserialize)]
struct ProjectKey {
    project_id: String,
}

/// Reads `project_id` out of a service-account key file.
///
/// An unreadable file is a credential error; unparsable content or a missing
/// field is a config error.
pub fn resolve_project_id(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "resolving project id");
    let content = std::fs::read_to_string(path).map_err(|e| Error::credential(path, e))?;
    project_id_from_str(&content).map_err(|reason| Error::config(path, reason))
}

fn project_id_from_str(content: &str) -> Result<String, String> {
    let key: ProjectKey = serde_json::from_str(content).map_err(|e| e.to_string())?;
    Ok(key.project_id)
}
