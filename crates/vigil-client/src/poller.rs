//! ResourcePoller - the generic fetch-bound-to-endpoint abstraction.
//!
//! One instance per screen/resource. Exposes the current snapshot, a loading
//! flag, and an explicit refresh operation; every screen reuses it to fetch,
//! cache-bust, and refresh a server-held collection.

use chrono::Utc;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use vigil_core::{ApiGateway, VigilError};

struct Snapshot<T> {
    data: T,
    loading: bool,
}

/// A poller bound to one GET endpoint.
///
/// `T` is the decoded response body: `Vec<Item>` for collection endpoints,
/// or a `Default`-able aggregate struct for object endpoints. On any fetch
/// failure the snapshot resets to `T::default()` (fail-safe, not
/// fail-stale) and the failure is only logged - screens render their own
/// "no data" state instead of a duplicate error toast per poller.
///
/// Overlapping `refresh` calls are allowed to race; the last response to
/// resolve wins. There is no request cancellation and no timeout layer
/// beyond the transport default, so a hung request leaves `loading` true
/// until it resolves.
pub struct ResourcePoller<T> {
    gateway: Arc<dyn ApiGateway>,
    path: String,
    state: RwLock<Snapshot<T>>,
}

impl<T> ResourcePoller<T>
where
    T: DeserializeOwned + Default + Clone + Send + Sync,
{
    /// Creates a detached poller. No fetch is triggered; use
    /// [`attach`](Self::attach) for the usual construct-and-fetch path.
    pub fn new(gateway: Arc<dyn ApiGateway>, path: impl Into<String>) -> Self {
        Self {
            gateway,
            path: path.into(),
            state: RwLock::new(Snapshot {
                data: T::default(),
                loading: false,
            }),
        }
    }

    /// Creates a poller and performs exactly one initial refresh if the
    /// session is ready.
    ///
    /// This is the explicit constructed-to-attached transition: pollers
    /// built before the session became ready never retroactively fetch, so
    /// the composition root must mount screens only once the session is
    /// initialized.
    pub async fn attach(gateway: Arc<dyn ApiGateway>, path: impl Into<String>) -> Arc<Self> {
        let poller = Arc::new(Self::new(gateway, path));
        if poller.gateway.is_ready().await {
            poller.refresh().await;
        }
        poller
    }

    /// Fetches the endpoint and replaces the snapshot.
    ///
    /// With the session uninitialized or unauthenticated this clears
    /// `loading` and returns without any network call, preventing a request
    /// storm before login. A cache-busting `_t=<millis>` token is appended
    /// to every request to defeat intermediate response caches.
    pub async fn refresh(&self) {
        if !self.gateway.is_ready().await {
            self.state.write().await.loading = false;
            return;
        }

        self.state.write().await.loading = true;

        let separator = if self.path.contains('?') { '&' } else { '?' };
        let url = format!("{}{}_t={}", self.path, separator, Utc::now().timestamp_millis());

        let fetched = match self.gateway.get_json(&url).await {
            Ok(value) => serde_json::from_value::<T>(value).map_err(VigilError::from),
            Err(err) => Err(err),
        };

        let mut state = self.state.write().await;
        match fetched {
            Ok(data) => {
                state.data = data;
            }
            Err(err) if err.is_not_authenticated() => {
                // Logged out mid-flight: the unauthenticated short-circuit
                // must not mutate the snapshot, only clear loading.
                tracing::debug!("Skipped refresh of {}: session gone", self.path);
            }
            Err(err) => {
                tracing::warn!("Failed to refresh {}: {}", self.path, err);
                state.data = T::default();
            }
        }
        state.loading = false;
    }

    /// Returns a copy of the current snapshot data.
    pub async fn data(&self) -> T {
        self.state.read().await.data.clone()
    }

    /// True while a fetch is outstanding.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// The endpoint path this poller is bound to.
    pub fn path(&self) -> &str {
        &self.path
    }
}
