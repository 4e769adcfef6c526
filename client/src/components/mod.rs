//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render brewery data handed to them by pages and report user
//! actions back through callbacks.

pub mod brewery_card;
pub mod nav_bar;
