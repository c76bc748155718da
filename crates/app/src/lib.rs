//! # servicehub-app
//!
//! Application layer — the service registry and the dispatch use-case.
//!
//! ## Responsibilities
//! - Own the **registry** mapping service names to constructors
//!   ([`registry::ServiceRegistry`])
//! - Define the **provider port** service modules implement to register
//!   themselves ([`ports::ServiceProvider`])
//! - Run one **dispatch**: lookup, fresh instance, `process`
//!   ([`dispatcher::Dispatcher`])
//! - Give every failure of a dispatch a typed shape ([`error::DispatchError`])
//!
//! ## Dependency rule
//! Depends on `servicehub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod dispatcher;
pub mod error;
pub mod ports;
pub mod registry;
