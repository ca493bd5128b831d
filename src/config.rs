use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PRIVATE_KEY_PATH: &str = "sample-app-firebase-adminsdk-foobar.json";
pub const DEFAULT_MESSAGE_JSON_PATH: &str = "sample_message.json";
pub const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Optional notification fields laid over the template.
///
/// `None` and `Some("")` both mean "keep whatever the template has".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub device_token: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PushConfig {
    pub private_key_path: PathBuf,
    /// Key file the project id is read from, when it differs from the signing key.
    pub project_key_path: Option<PathBuf>,
    pub message_json_path: PathBuf,
    pub overlay: Overlay,
    pub print_access_token: bool,
    pub endpoint: String,
    pub timeout: Duration,
}

impl PushConfig {
    pub fn project_key_path(&self) -> &Path {
        self.project_key_path
            .as_deref()
            .unwrap_or(&self.private_key_path)
    }
}

impl Default for PushConfig {
    fn default() -> Self {
        PushConfig {
            private_key_path: DEFAULT_PRIVATE_KEY_PATH.into(),
            project_key_path: None,
            message_json_path: DEFAULT_MESSAGE_JSON_PATH.into(),
            overlay: Overlay::default(),
            print_access_token: false,
            endpoint: DEFAULT_FCM_ENDPOINT.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
