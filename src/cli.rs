use std::path::PathBuf;

use clap::Parser;

use crate::config::{
    DEFAULT_FCM_ENDPOINT, DEFAULT_MESSAGE_JSON_PATH, DEFAULT_PRIVATE_KEY_PATH, Overlay, PushConfig,
};

#[derive(Parser, Debug)]
#[command(name = "fcm_push")]
#[command(about = "Send a push notification through Firebase Cloud Messaging")]
pub struct Args {
    /// Target device token
    #[arg(short, long)]
    pub device_token: Option<String>,

    /// Service-account private key json file
    #[arg(short, long, default_value = DEFAULT_PRIVATE_KEY_PATH)]
    pub private_key_path: PathBuf,

    /// Key file to read project_id from, if not the private key file
    #[arg(long)]
    pub project_key_path: Option<PathBuf>,

    /// Message template json file
    #[arg(short, long = "message-json", default_value = DEFAULT_MESSAGE_JSON_PATH)]
    pub message_json: PathBuf,

    /// Notification title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Notification body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Notification image url
    #[arg(short, long)]
    pub image: Option<String>,

    /// Print the access token before sending
    #[arg(long)]
    pub print_access_token: bool,

    /// Messaging endpoint base url
    #[arg(long, default_value = DEFAULT_FCM_ENDPOINT, hide = true)]
    pub endpoint: String,
}

impl Args {
    pub fn into_config(self) -> PushConfig {
        PushConfig {
            private_key_path: self.private_key_path,
            project_key_path: self.project_key_path,
            message_json_path: self.message_json,
            overlay: Overlay {
                device_token: self.device_token,
                title: self.title,
                body: self.body,
                image: self.image,
            },
            print_access_token: self.print_access_token,
            endpoint: self.endpoint,
            ..PushConfig::default()
        }
    }
}
