//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The search and saved pages keep separate caches of what
//! is saved; they meet only through the durable saved-id snapshot.

pub mod login;
pub mod saved;
pub mod search;
