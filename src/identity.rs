//! Name → UUID resolution across every registered backend.
//!
//! System names are user-facing and may collide, both across backends and
//! with a UUID of a different system. The resolver is a policy wrapper over
//! `Driver::systems` and `Driver::uuid`, not a store: it scans live backend
//! state on every call and refuses to guess when a name is ambiguous.

use crate::error::RedfinError;
use crate::registry::DriverRegistry;

/// Outcome of a successful resolution: which backend hosts the system and
/// its canonical UUID there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub backend: String,
    pub uuid: String,
}

pub struct IdentityResolver<'a> {
    registry: &'a DriverRegistry,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(registry: &'a DriverRegistry) -> Self {
        Self { registry }
    }

    /// Resolve a caller-supplied identity (name or UUID) to exactly one
    /// system.
    ///
    /// Name matches take precedence; only when no backend reports a system
    /// with that name is the identity compared against UUIDs. More than one
    /// match in the chosen pass is `AmbiguousIdentity` — silently picking
    /// one would hand the caller a different machine than they asked for.
    ///
    /// A system that `systems()` listed but that vanishes before its
    /// `uuid()` lookup (deleted on the backend mid-resolution) is skipped,
    /// not an error.
    pub async fn resolve(&self, identity: &str) -> Result<Resolution, RedfinError> {
        let mut by_name = Vec::new();
        let mut by_uuid = Vec::new();

        for (backend, driver) in self.registry.iter() {
            for system in driver.systems().await? {
                let uuid = match driver.uuid(&system).await {
                    Ok(uuid) => uuid,
                    // Listed, then deleted on the backend. Skip it.
                    Err(RedfinError::SystemNotFound { .. }) => continue,
                    Err(e) => return Err(e),
                };
                let resolution = Resolution {
                    backend: backend.to_string(),
                    uuid: uuid.clone(),
                };
                if system == identity {
                    by_name.push(resolution);
                } else if uuid == identity {
                    by_uuid.push(resolution);
                }
            }
        }

        let mut matches = if by_name.is_empty() { by_uuid } else { by_name };
        match matches.len() {
            0 => Err(RedfinError::SystemNotFound {
                identity: identity.to_string(),
            }),
            1 => {
                let resolution = matches.swap_remove(0);
                tracing::debug!(
                    identity,
                    backend = resolution.backend.as_str(),
                    uuid = resolution.uuid.as_str(),
                    "identity resolved"
                );
                Ok(resolution)
            }
            count => Err(RedfinError::AmbiguousIdentity {
                identity: identity.to_string(),
                count,
            }),
        }
    }
}
