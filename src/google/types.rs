use serde::{Deserialize, Serialize};

/// Fields of a service-account key file needed to mint a token.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceAccount {
    pub(crate) token_uri: String,
    pub(crate) private_key_id: String,
    pub(crate) private_key: String,
    pub(crate) client_email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub(crate) iat: u64,
    pub(crate) exp: u64,
    pub(crate) iss: String,
    pub(crate) aud: String,
    pub(crate) scope: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub(crate) assertion: &'a str,
    pub(crate) grant_type: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthToken {
    pub(crate) access_token: String,
    pub(crate) expires_in: Option<u64>,
}

/// Error body returned by the OAuth token endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenError {
    pub(crate) error: String,
    pub(crate) error_description: Option<String>,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{}: {}", self.error, desc),
            None => write!(f, "{}", self.error),
        }
    }
}
