//! Episode browser - Rick and Morty episodes and their characters in the terminal
//!
//! The library exposes the app's modules for the binary and for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod pagination;
pub mod reducer;
pub mod state;
