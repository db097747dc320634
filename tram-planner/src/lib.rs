//! Tram journey planner.
//!
//! Answers two questions over a small, fixed light-rail network:
//! "how do I travel from stop A to stop B, and must I change trams?"
//! and "which fare zones does that journey cross?"

pub mod catalog;
pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod zones;
