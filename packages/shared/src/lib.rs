//! Shared utilities for the Taikyoku match server and its tooling.
//!
//! This crate holds the cross-cutting helpers that every binary needs:
//! logging setup and time handling.

pub mod logger;
pub mod time;
