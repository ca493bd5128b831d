#![allow(dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::time::Duration;

use fcm_push::google::TokenSource;
use fcm_push::{Error, Overlay, PushConfig, Result};
use tempfile::TempDir;

pub struct FakeTokenSource {
    token: Option<String>,
    calls: Cell<usize>,
}

impl FakeTokenSource {
    pub fn ok(token: &str) -> Self {
        FakeTokenSource {
            token: Some(token.into()),
            calls: Cell::new(0),
        }
    }

    pub fn rejecting() -> Self {
        FakeTokenSource {
            token: None,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl TokenSource for FakeTokenSource {
    async fn access_token(&self, key_path: &Path) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        self.token.clone().ok_or_else(|| {
            Error::Credential(format!("{}: invalid_grant", key_path.display()))
        })
    }
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn config(key: PathBuf, template: PathBuf, endpoint: String, overlay: Overlay) -> PushConfig {
    PushConfig {
        private_key_path: key,
        message_json_path: template,
        overlay,
        endpoint,
        timeout: Duration::from_secs(5),
        ..PushConfig::default()
    }
}
