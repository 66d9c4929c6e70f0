//! Backend-type dispatch: maps configuration onto live driver instances.
//!
//! Registration happens exactly once, at process start: the embedding
//! emulator registers a factory per backend type it links in, then builds
//! the registry from configuration. One driver instance is constructed per
//! configured backend and reused for every subsequent request — drivers may
//! hold a connection handle, so this is deliberately not a per-request
//! factory. After `build` the map is immutable; lookups are pure reads and
//! safe under any number of concurrent requests.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::config::{BackendConfig, Config};
use crate::driver::Driver;
use crate::error::RedfinError;

/// Constructs a driver from its backend configuration.
pub type DriverFactory =
    Box<dyn Fn(&BackendConfig) -> Result<Arc<dyn Driver>, RedfinError> + Send + Sync>;

static GLOBAL: OnceLock<DriverRegistry> = OnceLock::new();

/// Init-time collector of driver factories, keyed by `backend_type`.
#[derive(Default)]
pub struct RegistryBuilder {
    factories: BTreeMap<String, DriverFactory>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for one backend type. Later registrations for the
    /// same type replace earlier ones.
    pub fn register(
        mut self,
        backend_type: impl Into<String>,
        factory: DriverFactory,
    ) -> Self {
        self.factories.insert(backend_type.into(), factory);
        self
    }

    /// Construct one driver per configured backend.
    ///
    /// Fails with `UnknownDriverType` when configuration names a backend
    /// type no factory was registered for; construction failures from the
    /// factory itself propagate unchanged.
    pub fn build(self, config: &Config) -> Result<DriverRegistry, RedfinError> {
        let mut drivers = BTreeMap::new();
        for (name, backend) in &config.backends {
            let factory = self.factories.get(&backend.backend_type).ok_or_else(|| {
                RedfinError::UnknownDriverType {
                    backend_type: backend.backend_type.clone(),
                }
            })?;
            let driver = factory(backend)?;
            tracing::info!(
                backend = name.as_str(),
                backend_type = backend.backend_type.as_str(),
                descriptor = %driver.driver(),
                "driver constructed"
            );
            drivers.insert(name.clone(), driver);
        }
        Ok(DriverRegistry { drivers })
    }
}

/// Immutable map of backend name → live driver instance.
pub struct DriverRegistry {
    drivers: BTreeMap<String, Arc<dyn Driver>>,
}

impl std::fmt::Debug for DriverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriverRegistry")
            .field("backends", &self.drivers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DriverRegistry {
    /// Look up the driver for a configured backend name.
    pub fn get(&self, name: &str) -> Result<&Arc<dyn Driver>, RedfinError> {
        self.drivers
            .get(name)
            .ok_or_else(|| RedfinError::UnknownDriverType {
                backend_type: name.to_string(),
            })
    }

    /// All configured backends, in stable (sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Driver>)> {
        self.drivers.iter().map(|(name, d)| (name.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Publish this registry process-wide. One-time: a second install is a
    /// validation error, not a replacement.
    pub fn install(self) -> Result<&'static DriverRegistry, RedfinError> {
        if GLOBAL.set(self).is_err() {
            return Err(RedfinError::Validation {
                message: "driver registry already installed".into(),
            });
        }
        Ok(GLOBAL.get().expect("just installed"))
    }

    /// The process-wide registry, if one has been installed.
    pub fn global() -> Option<&'static DriverRegistry> {
        GLOBAL.get()
    }
}
