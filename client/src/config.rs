//! Client constants and reconciler settings.

use saves::ReconcilerConfig;

/// Open Brewery DB free-text search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://api.openbrewerydb.org/v1/breweries/search";

/// Results requested per search. No pagination beyond this.
pub const SEARCH_PAGE_SIZE: u32 = 20;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "id_token";

/// Reconciler settings used by every page. Failed mutations keep their
/// optimistic state.
#[must_use]
pub fn reconciler_config() -> ReconcilerConfig {
    ReconcilerConfig::default()
}
