//! Terminal administration client for the PodNet podcast-network API.
//!
//! Mirrors the dashboard: sign in, manage hosts, shows, episodes and
//! advertisers, inspect the popular overview and seed or clear an account.

pub mod cli;
pub mod client;
pub mod commands;
pub mod store;
