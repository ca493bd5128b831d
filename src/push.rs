use std::io::Write;

use tracing::{debug, info};

use crate::config::PushConfig;
use crate::error::{Error, Result};
use crate::google::{Dispatcher, PushRequest, PushResponse, TokenSource};
use crate::message::build_message;
use crate::project::resolve_project_id;

/// Runs key → token → message → POST once, writing the report to `out`.
///
/// Both files are read before the token exchange, so a bad key or template
/// fails without touching the network.
pub async fn run<T, W>(
    config: &PushConfig,
    tokens: &T,
    dispatcher: &Dispatcher,
    out: &mut W,
) -> Result<PushResponse>
where
    T: TokenSource,
    W: Write,
{
    let project_id = resolve_project_id(config.project_key_path())?;
    debug!(project_id = %project_id, "resolved project id");

    let message = build_message(&config.message_json_path, &config.overlay)?;

    let access_token = tokens.access_token(&config.private_key_path).await?;
    info!("obtained access token");

    if config.print_access_token {
        writeln!(out, "=== access token ===")?;
        writeln!(out, "{}", access_token)?;
        writeln!(out)?;
    }

    let pretty = serde_json::to_string_pretty(&message)
        .map_err(|e| Error::Template(format!("failed to render message: {}", e)))?;
    writeln!(out, "=== Request ===")?;
    writeln!(out, "Request message:  {}", pretty)?;

    let request = PushRequest::new(&config.endpoint, &project_id, &access_token, &message)?;
    let response = dispatcher.send(request).await?;

    writeln!(out, "\n=== Response ===")?;
    writeln!(out, "Response status code:  {}", response.status)?;
    writeln!(out, "Response content:  {}", response.body)?;

    Ok(response)
}
