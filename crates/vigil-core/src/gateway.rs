//! The authorized request-sender contract.
//!
//! Every poller and controller talks to the server through this trait, and
//! the session store is the single implementation in production. Passing it
//! explicitly (never a hidden singleton) keeps session lifetime and mutation
//! traceable and lets tests substitute a recording gateway.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// An authorized HTTP gateway bound to the current session.
///
/// Implementations must read the *current* credential at call time, not a
/// value captured earlier, so a logout occurring between a mutation and its
/// dependent refresh correctly turns the refresh into a
/// [`VigilError::NotAuthenticated`](crate::VigilError::NotAuthenticated)
/// short-circuit rather than leaking a stale credential.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    /// True once the session has been restored and holds a credential.
    ///
    /// Pollers check this before every fetch; when false they must not
    /// touch the network.
    async fn is_ready(&self) -> bool;

    /// Issues an authorized GET and decodes the JSON body.
    async fn get_json(&self, path: &str) -> Result<Value>;

    /// Issues an authorized POST with a JSON body.
    async fn post_json(&self, path: &str, body: Value) -> Result<Value>;

    /// Issues an authorized PUT with a JSON body.
    async fn put_json(&self, path: &str, body: Value) -> Result<Value>;

    /// Issues an authorized DELETE.
    async fn delete(&self, path: &str) -> Result<Value>;
}
