//! src/identity/client.rs
use crate::configuration::IdentitySettings;
use crate::domain::{Email, NewAccount, Password};
use crate::utils::error_chain_fmt;
use anyhow::Context;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error)]
pub enum IdentityError {
    /// The provider refused the request; the message is safe to show.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for IdentityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    name: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SignInResponse {
    user_id: Uuid,
}

#[derive(Debug)]
pub struct IdentityClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl IdentityClient {
    pub fn new(settings: &IdentitySettings, api_key: Secret<String>) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(settings.timeout()).build()?;

        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    #[tracing::instrument(name = "Register account with identity provider", skip(self, account), fields(email = %account.email))]
    pub async fn sign_up(&self, account: &NewAccount) -> Result<(), IdentityError> {
        let body = SignUpRequest {
            email: account.email.as_ref(),
            name: account.name.as_ref(),
            password: account.password.expose_secret(),
        };

        let response = self.post("signup", &body).await?;
        match response.status() {
            s if s.is_success() => Ok(()),
            StatusCode::CONFLICT => Err(IdentityError::Rejected(
                "An account with this email already exists.".into(),
            )),
            s if s.is_client_error() => Err(IdentityError::Rejected(
                "The account could not be created.".into(),
            )),
            s => Err(anyhow::anyhow!("Identity provider answered {} on signup", s).into()),
        }
    }

    #[tracing::instrument(name = "Authenticate with identity provider", skip(self, password))]
    pub async fn sign_in(&self, email: &Email, password: &Password) -> Result<Uuid, IdentityError> {
        let body = SignInRequest {
            email: email.as_ref(),
            password: password.expose_secret(),
        };

        let response = self.post("token", &body).await?;
        match response.status() {
            s if s.is_success() => {
                let session: SignInResponse = response
                    .json()
                    .await
                    .context("Failed to parse the identity provider token response")?;
                Ok(session.user_id)
            }
            s if s.is_client_error() => {
                Err(IdentityError::Rejected("Invalid email or password.".into()))
            }
            s => Err(anyhow::anyhow!("Identity provider answered {} on sign in", s).into()),
        }
    }

    async fn post<T>(&self, path: &str, body: &T) -> Result<reqwest::Response, IdentityError>
    where
        T: Serialize,
    {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .http_client
            .post(&url)
            .header("api-key", self.api_key.expose_secret())
            .header("accept", "application/json")
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to reach the identity provider at {}", url))?;

        Ok(response)
    }
}
