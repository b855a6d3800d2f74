//! SessionStore - the single authenticated-session object.
//!
//! Created once per process lifetime and injected into every poller and
//! controller. Owns the bearer credential and identity, persists them across
//! restarts, and is the production implementation of [`ApiGateway`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use vigil_core::ui::{Navigator, Screen};
use vigil_core::{ApiGateway, Result, Session, VigilError};
use vigil_infrastructure::{CredentialStorage, StoredCredentials};

/// Response body of the authentication endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// The authenticated-session object gating all network access.
///
/// [`SessionStore::restore`] must run before any poller is allowed to
/// fetch; the composition root gates screen mounting on it.
pub struct SessionStore {
    http: Client,
    base_url: String,
    storage: CredentialStorage,
    navigator: Arc<dyn Navigator>,
    session: RwLock<Session>,
}

impl SessionStore {
    /// Creates a new store against the given API base URL.
    ///
    /// The session starts uninitialized; call [`restore`](Self::restore)
    /// once at startup.
    pub fn new(
        base_url: impl Into<String>,
        storage: CredentialStorage,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            storage,
            navigator,
            session: RwLock::new(Session::new()),
        }
    }

    /// Restores any durable credential/identity pair and marks the session
    /// initialized.
    ///
    /// `initialized` becomes true exactly once regardless of outcome; later
    /// calls are no-ops. An unreadable credentials file is treated the same
    /// as an absent one.
    pub async fn restore(&self) {
        let mut session = self.session.write().await;
        if session.initialized {
            return;
        }

        match self.storage.load() {
            Ok(Some(stored)) => {
                session.authenticate(stored.token, stored.identity);
                tracing::info!("Session restored for {:?}", session.identity);
            }
            Ok(None) => {
                tracing::debug!("No persisted session found");
            }
            Err(err) => {
                tracing::warn!("Failed to load persisted session: {}", err);
            }
        }

        session.initialized = true;
    }

    /// Exchanges `identity`/`secret` with the authentication endpoint using
    /// form-encoded credentials.
    ///
    /// On success the pair is persisted durably first, then the in-memory
    /// session is updated, then navigation to the dashboard is signalled.
    /// On any failure no partial state is written.
    pub async fn login(&self, identity: &str, secret: &str) -> Result<Session> {
        let url = format!("{}/token", self.base_url);
        let form = [("username", identity), ("password", secret)];

        let response = self
            .http
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|err| VigilError::authentication(format!("login request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VigilError::authentication(format!(
                "login rejected ({status})"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| VigilError::authentication(format!("malformed token response: {err}")))?;

        self.storage.save(&StoredCredentials {
            token: token.access_token.clone(),
            identity: identity.to_string(),
        })?;

        let snapshot = {
            let mut session = self.session.write().await;
            session.authenticate(token.access_token, identity);
            session.clone()
        };
        tracing::info!("Logged in as {}", identity);

        self.navigator.navigate(Screen::Dashboard);
        Ok(snapshot)
    }

    /// Clears in-memory and durable credentials and signals navigation to
    /// the login screen. Never fails; storage errors are logged.
    pub async fn logout(&self) {
        {
            let mut session = self.session.write().await;
            session.clear();
        }

        if let Err(err) = self.storage.clear() {
            tracing::warn!("Failed to clear persisted session: {}", err);
        }

        tracing::info!("Logged out");
        self.navigator.navigate(Screen::Login);
    }

    /// Returns a snapshot of the current session state.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Reads the current credential at call time.
    ///
    /// Never captures the token earlier than the request that uses it, so a
    /// logout between a mutation and its dependent refresh short-circuits
    /// the refresh instead of leaking a stale credential.
    async fn bearer(&self) -> Result<String> {
        self.session
            .read()
            .await
            .credential
            .clone()
            .ok_or(VigilError::NotAuthenticated)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VigilError::network(format!(
                "server returned {status}: {body}"
            )));
        }
        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl ApiGateway for SessionStore {
    async fn is_ready(&self) -> bool {
        self.session.read().await.is_ready()
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn put_json(&self, path: &str, body: Value) -> Result<Value> {
        let token = self.bearer().await?;
        let response = self
            .http
            .put(self.url(path))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        let token = self.bearer().await?;
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response).await
    }
}
