//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are purely presentational: they take member data as props and
//! never fetch or mutate it.

pub mod category_section;
pub mod member_card;
pub mod social_icon;
