//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared by the home,
//! article and not-found pages. Components handle specific UI elements with
//! consistent styling, while page modules decide what goes where.

pub mod card;
pub mod content;
pub mod footer;
pub mod layout;
pub mod meta;
pub mod nav;
