//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the auth endpoints plus the `saves` adapter implementations
//! (Open Brewery DB search, `/graphql` mutations); `types` defines the auth
//! wire schema.

pub mod api;
pub mod types;
