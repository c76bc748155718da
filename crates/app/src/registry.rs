//! Service registry — name to constructor lookup table.
//!
//! The registry is filled once at startup (directly or through
//! [`ServiceProvider`]s), then frozen behind an `Arc` and handed to the
//! [`Dispatcher`](crate::dispatcher::Dispatcher). Nothing can register after
//! that point, so reads never need a lock.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use servicehub_domain::name::ServiceName;
use servicehub_domain::service::Service;

use crate::ports::ServiceProvider;

/// Factory producing a fresh service instance per call.
pub type ServiceConstructor = Arc<dyn Fn() -> Box<dyn Service> + Send + Sync>;

/// Mapping from [`ServiceName`] to [`ServiceConstructor`].
#[derive(Default)]
pub struct ServiceRegistry {
    constructors: HashMap<ServiceName, ServiceConstructor>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `constructor` under `name`.
    ///
    /// Any previous registration for the same name is replaced; the last
    /// registration wins.
    pub fn register<F>(&mut self, name: impl Into<ServiceName>, constructor: F)
    where
        F: Fn() -> Box<dyn Service> + Send + Sync + 'static,
    {
        let name = name.into();
        if self
            .constructors
            .insert(name.clone(), Arc::new(constructor))
            .is_some()
        {
            tracing::warn!(service = %name, "service registration replaced");
        } else {
            tracing::debug!(service = %name, "service registered");
        }
    }

    /// Register a service type built through its [`Default`] impl.
    pub fn register_default<S>(&mut self, name: impl Into<ServiceName>)
    where
        S: Service + Default + 'static,
    {
        self.register(name, || Box::new(S::default()));
    }

    /// Let `provider` register all of its services.
    pub fn install(&mut self, provider: &impl ServiceProvider) {
        let before = self.constructors.len();
        provider.register(self);
        tracing::info!(
            provider = provider.name(),
            added = self.constructors.len().saturating_sub(before),
            "service provider installed"
        );
    }

    /// Build a fresh instance of the service registered under `name`.
    ///
    /// Returns `None` when nothing is registered under that name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Box<dyn Service>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    /// `true` when a service is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<ServiceName> {
        let mut names: Vec<ServiceName> = self.constructors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// `true` when no service is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.list())
            .finish()
    }
}
