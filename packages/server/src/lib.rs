//! Match coordination library for live two-player chess sessions.
//!
//! This library provides the in-memory match registry, the per-match state
//! machine (join / move / resign), the bounded event-delivery queues feeding
//! each participant's SSE stream, and the thin HTTP layer on top.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
