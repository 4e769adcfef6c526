//! HTTP adapters for the server and the brewery directory.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. The `saves`
//! adapters map every failure into `SearchError`/`MutationError` so the core
//! can log and degrade.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use saves::{
    BrewId, BreweryDocument, BreweryRecord, MutationApi, MutationError, Operation, RawBrewery, SearchApi,
    SearchError, SessionToken,
};
#[cfg(any(test, feature = "hydrate"))]
use saves::Envelope;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::types::{SignInResponse, User};
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn search_params(query: &str, per_page: u32) -> [(&'static str, String); 2] {
    [("query", query.to_owned()), ("per_page", per_page.to_string())]
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_search(body: &str) -> Result<Vec<RawBrewery>, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, MutationError> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| MutationError::Decode(e.to_string()))?;
    envelope.into_result().map_err(MutationError::Rejected)
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in as `username` via `POST /api/auth/session`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the name.
pub async fn sign_in(username: &str) -> Result<SignInResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::SignInRequest { username: username.to_owned() };
        let resp = gloo_net::http::Request::post("/api/auth/session")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sign_in_failed_message(resp.status()));
        }
        resp.json::<SignInResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err("not available on server".to_owned())
    }
}

/// Fetch the user owning `token` from `/api/auth/me`.
/// Returns `None` if the token is no longer valid or on the server.
pub async fn fetch_current_user(token: &SessionToken) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &token.bearer())
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Delete the server session for `token` via `POST /api/auth/logout`.
pub async fn logout(token: &SessionToken) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .header("Authorization", &token.bearer())
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

// =============================================================================
// SEARCH
// =============================================================================

/// Open Brewery DB search client.
#[derive(Clone, Debug)]
pub struct OpenBreweryDb {
    endpoint: String,
    per_page: u32,
}

impl Default for OpenBreweryDb {
    fn default() -> Self {
        Self { endpoint: config::SEARCH_ENDPOINT.to_owned(), per_page: config::SEARCH_PAGE_SIZE }
    }
}

#[async_trait(?Send)]
impl SearchApi for OpenBreweryDb {
    async fn fetch_breweries(&self, query: &str) -> Result<Vec<RawBrewery>, SearchError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .query(search_params(query, self.per_page))
                .send()
                .await
                .map_err(|e| SearchError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(SearchError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| SearchError::Decode(e.to_string()))?;
            decode_search(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, &self.endpoint, self.per_page);
            Err(SearchError::Unavailable)
        }
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// `/graphql` client for saved-brewery operations.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    endpoint: String,
}

impl Default for GraphqlClient {
    fn default() -> Self {
        Self { endpoint: saves::GRAPHQL_PATH.to_owned() }
    }
}

impl GraphqlClient {
    async fn run<T: serde::de::DeserializeOwned>(
        &self,
        token: &SessionToken,
        operation: &Operation,
    ) -> Result<T, MutationError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header("Authorization", &token.bearer())
                .json(operation)
                .map_err(|e| MutationError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| MutationError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(MutationError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| MutationError::Decode(e.to_string()))?;
            decode_envelope(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.endpoint, token, operation);
            Err(MutationError::Unavailable)
        }
    }

    /// `addReaction`: returns the document with its updated count.
    ///
    /// # Errors
    ///
    /// Returns a [`MutationError`] for transport, status, decode or application failures.
    pub async fn add_reaction(
        &self,
        token: &SessionToken,
        brew_id: &BrewId,
        body: &str,
    ) -> Result<BreweryDocument, MutationError> {
        let operation = Operation::AddReaction { brew_id: brew_id.clone(), body: body.to_owned() };
        self.run(token, &operation).await
    }
}

#[async_trait(?Send)]
impl MutationApi for GraphqlClient {
    async fn add_brewery(
        &self,
        token: &SessionToken,
        record: &BreweryRecord,
    ) -> Result<Vec<BreweryDocument>, MutationError> {
        self.run(token, &Operation::AddBrewery { input: record.clone() }).await
    }

    async fn remove_brewery(
        &self,
        token: &SessionToken,
        brew_id: &BrewId,
    ) -> Result<Vec<BreweryDocument>, MutationError> {
        self.run(token, &Operation::RemoveBrewery { brew_id: brew_id.clone() }).await
    }

    async fn saved_breweries(&self, token: &SessionToken) -> Result<Vec<BreweryDocument>, MutationError> {
        self.run(token, &Operation::SavedBreweries).await
    }
}
