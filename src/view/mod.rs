//! Headless views. Each page owns its state, runs its own fetches and renders
//! itself to Markdown.

pub mod components;
pub mod pages;
pub mod router;
pub mod state;
