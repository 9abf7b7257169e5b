//! UI module for the stats client
//!
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-page views composed from components

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
