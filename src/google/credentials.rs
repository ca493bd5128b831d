use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::{self, Duration};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use tracing::debug;

use super::types::*;
use crate::error::{Error, Result};

pub const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_EXPIRY: Duration = Duration::from_secs(3600);

/// Exchanges a service-account key file for a bearer token.
pub trait TokenSource {
    fn access_token(&self, key_path: &Path) -> impl Future<Output = Result<String>>;
}

/// Token source backed by the OAuth2 JWT bearer flow. Every call performs a
/// fresh exchange.
#[derive(Debug, Clone)]
pub struct ServiceAccountTokenSource {
    timeout: Duration,
}

impl ServiceAccountTokenSource {
    pub fn new(timeout: Duration) -> Self {
        ServiceAccountTokenSource { timeout }
    }
}

impl TokenSource for ServiceAccountTokenSource {
    async fn access_token(&self, key_path: &Path) -> Result<String> {
        let credentials = Credentials::from_service_account_file(key_path)?;
        let client = reqwest::Client::builder()
            .connect_timeout(self.timeout)
            .timeout(self.timeout)
            .build()?;
        credentials.fetch_token(&client).await
    }
}

pub(crate) struct Credentials {
    path: PathBuf,
    signer: EncodingKey,
    token_header: Header,
    claims: Claims,
    token_uri: String,
    default_headers: reqwest::header::HeaderMap,
}

impl Credentials {
    pub(crate) fn from_service_account_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading service account from file");
        let file_content =
            std::fs::read_to_string(path).map_err(|e| Error::credential(path, e))?;
        let service_account: ServiceAccount =
            serde_json::from_str(&file_content).map_err(|e| Error::credential(path, e))?;
        let signer = EncodingKey::from_rsa_pem(service_account.private_key.as_bytes())
            .map_err(|e| Error::credential(path, format!("invalid private_key: {}", e)))?;
        let (iat, exp) = claim_iat_exp(DEFAULT_TOKEN_EXPIRY);

        Ok(Credentials {
            path: path.to_path_buf(),
            signer,
            token_uri: service_account.token_uri.clone(),
            default_headers: default_headers(),
            token_header: Header {
                typ: Some("JWT".into()),
                alg: Algorithm::RS256,
                kid: Some(service_account.private_key_id),
                ..Header::default()
            },
            claims: Claims {
                iat,
                exp,
                iss: service_account.client_email,
                aud: service_account.token_uri,
                scope: FCM_SCOPE.into(),
            },
        })
    }

    fn assertion(&self) -> Result<String> {
        encode(&self.token_header, &self.claims, &self.signer)
            .map_err(|e| Error::credential(&self.path, format!("failed to sign assertion: {}", e)))
    }

    pub(crate) async fn fetch_token(&self, client: &reqwest::Client) -> Result<String> {
        debug!(token_uri = self.token_uri, "requesting access token");
        let assertion = self.assertion()?;
        let res = client
            .post(&self.token_uri)
            .headers(self.default_headers.clone())
            .json(&TokenRequest {
                assertion: &assertion,
                grant_type: GRANT_TYPE,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await?;
            let reason = match serde_json::from_str::<TokenError>(&body) {
                Ok(err) => err.to_string(),
                Err(_) => body,
            };
            return Err(Error::credential(
                &self.path,
                format!("token exchange rejected ({}): {}", status, reason),
            ));
        }

        let token: AuthToken = res
            .json()
            .await
            .map_err(|e| Error::credential(&self.path, format!("bad token response: {}", e)))?;
        debug!(expires_in = token.expires_in, "access token issued");
        Ok(token.access_token)
    }
}

fn claim_iat_exp(expiry: Duration) -> (u64, u64) {
    let iat = time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    (iat, iat + expiry.as_secs())
}

fn default_headers() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::CONTENT_TYPE,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    headers.insert(
        "x-goog-api-client",
        reqwest::header::HeaderValue::from_static(concat!(
            "fcm_push/",
            env!("CARGO_PKG_VERSION"),
            " auth-request-type/at cred-type/sa"
        )),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_follows_issue_time() {
        let (iat, exp) = claim_iat_exp(DEFAULT_TOKEN_EXPIRY);
        assert_eq!(exp - iat, 3600);
    }

    #[test]
    fn missing_key_file() {
        let err = Credentials::from_service_account_file(Path::new("/nonexistent/sa.json"))
            .err()
            .unwrap();
        assert!(matches!(err, Error::Credential(_)));
    }

    #[test]
    fn key_without_signing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sa.json");
        std::fs::write(&path, r#"{"project_id": "demo-proj"}"#).unwrap();
        let err = Credentials::from_service_account_file(&path).err().unwrap();
        assert!(matches!(err, Error::Credential(_)));
    }

    #[test]
    fn bad_private_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sa.json");
        std::fs::write(
            &path,
            r#"{"token_uri": "https://oauth2.googleapis.com/token", "private_key_id": "k1",
                "private_key": "not a pem", "client_email": "svc@demo.iam.gserviceaccount.com"}"#,
        )
        .unwrap();
        let err = Credentials::from_service_account_file(&path).err().unwrap();
        assert!(err.to_string().contains("invalid private_key"));
    }
}
