//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure logic lives here so pages and components stay thin and the rules can
//! be unit-tested without a browser.

pub mod categorize;
