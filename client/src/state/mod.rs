//! Client-side application state.
//!
//! DESIGN
//! ======
//! State types are plain Rust values; pages wrap them in Leptos signals so
//! transition logic stays testable outside the reactive runtime.

pub mod team;
