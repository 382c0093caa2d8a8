pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod mcp;
pub mod ports;
pub mod view;

#[cfg(test)]
pub mod test_helpers;
