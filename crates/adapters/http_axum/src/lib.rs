//! # servicehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Route **every** request not claimed by a fixed route to the dispatch
//!   handler, which picks the service from the last path segment
//! - Turn the request into a service input: query parameters for `GET`,
//!   a JSON object body for `POST`
//! - Map dispatch results into HTTP responses (JSON on success, short
//!   plain-text diagnostics on failure)
//! - Serve `/health` and `/services` (the registered service names)
//!
//! ## Dependency rule
//! Depends on `servicehub-app` (dispatcher, registry) and `servicehub-domain`
//! (names, payloads). Never leaks axum types into the domain.

pub mod dispatch;
pub mod error;
pub mod router;
pub mod services;
pub mod state;
