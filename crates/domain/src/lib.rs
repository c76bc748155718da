//! # servicehub-domain
//!
//! Pure domain model for the servicehub request dispatcher.
//!
//! ## Responsibilities
//! - Define **service names** ([`name::ServiceName`]), the key used to route
//!   a request to a service
//! - Define **payloads** ([`payload::Payload`]), the JSON-shaped mapping
//!   exchanged with every service, and the two ways of building one from a
//!   request (query pairs, JSON body)
//! - Define the **service** capability ([`service::Service`]) and its error
//!   type ([`error::ServiceError`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod name;
pub mod payload;
pub mod service;
